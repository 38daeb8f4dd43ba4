//! Matrix entries. Shapes are never validated: a missing element reads as
//! NaN, a missing row is a fault.

use value::Arg;

use crate::error::Fault;

/// `c[r][i] = Σ_j a[r][j] · b[j][i]` for every index `i` of row `a[r]`.
///
/// The output has the shape of `a`, not `rows(a) × cols(b)`. `b` is only
/// read when `a` has a non-empty row, so an empty `a` multiplies with
/// anything.
pub fn matmul(a: &Arg, b: &Arg) -> Result<Vec<Vec<f64>>, Fault> {
    let a = a.as_matrix().ok_or(Fault::NotAMatrix {
        function: "matmul",
        position: 1,
    })?;
    a.iter()
        .map(|row| {
            (0..row.len())
                .map(|i| {
                    row.iter()
                        .enumerate()
                        .try_fold(0.0, |sum, (j, val)| -> Result<f64, Fault> {
                            Ok(sum + val * element(b, "matmul", 2, j, i)?)
                        })
                })
                .collect::<Result<Vec<f64>, Fault>>()
        })
        .collect()
}

/// Determinant of the leading 2×2 block.
pub fn det2(m: &Arg) -> Result<f64, Fault> {
    let at = |r, c| element(m, "det2", 1, r, c);
    Ok(at(0, 0)? * at(1, 1)? - at(0, 1)? * at(1, 0)?)
}

fn element(
    m: &Arg,
    function: &'static str,
    position: usize,
    row: usize,
    col: usize,
) -> Result<f64, Fault> {
    let rows = m.as_matrix().ok_or(Fault::NotAMatrix { function, position })?;
    let row = rows.get(row).ok_or(Fault::MissingRow {
        function,
        index: row as f64,
    })?;
    Ok(row.get(col).copied().unwrap_or(f64::NAN))
}
