//! Counting functions.
//!
//! Binomial-based entries divide factorials in floating point, so results
//! past `fact(170)` are `Infinity`/`NaN` and large exact values are lossy.
//! Table-based entries return `None` when `n` does not index the table they
//! build (negative, fractional, NaN).

use value::number::{array_index, array_length};

use crate::error::Fault;
use crate::frame::Frame;

pub fn fact(frame: &mut Frame, n: f64) -> Result<f64, Fault> {
    frame.enter(|f| {
        if n <= 1.0 {
            Ok(1.0)
        } else {
            Ok(n * fact(f, n - 1.0)?)
        }
    })
}

pub fn binom(frame: &mut Frame, n: f64, k: f64) -> Result<f64, Fault> {
    let top = fact(frame, n)?;
    let left = fact(frame, k)?;
    let right = fact(frame, n - k)?;
    Ok(top / (left * right))
}

pub fn catalan(frame: &mut Frame, n: f64) -> Result<f64, Fault> {
    Ok(binom(frame, 2.0 * n, n)? / (n + 1.0))
}

/// Stirling numbers of the second kind, `S(n, 0)` taken as 1.
pub fn stirling(frame: &mut Frame, n: f64, k: f64) -> Result<f64, Fault> {
    frame.enter(|f| {
        if k == 0.0 || k == n {
            Ok(1.0)
        } else {
            Ok(k * stirling(f, n - 1.0, k)? + stirling(f, n - 1.0, k - 1.0)?)
        }
    })
}

/// Builds rows `t_i = [b_{i-1}[i-1], b_{j-1} + t_{j-1} ..., 1]` and returns
/// entry `n` of the last row.
pub fn bell(frame: &mut Frame, n: f64) -> Result<Option<f64>, Fault> {
    let mut row = vec![1.0];
    let mut i = 1usize;
    while i as f64 <= n {
        frame.check_len(i + 1)?;
        let mut next = Vec::with_capacity(i + 1);
        next.push(row[i - 1]);
        for j in 1..i {
            next.push(row[j - 1] + next[j - 1]);
        }
        next.push(1.0);
        row = next;
        i += 1;
    }
    Ok(array_index(n).and_then(|idx| row.get(idx).copied()))
}

/// Fills an `(m+1) × (n+1)` table with the three-neighbour Delannoy
/// recurrence seeded from a zero origin and returns `d[m][n]`.
///
/// `m + 1` and `n + 1` must be valid array lengths. `m = -1` leaves no row
/// to read and faults; `n = -1` reads past an empty row and yields `None`.
pub fn delannoy(frame: &mut Frame, m: f64, n: f64) -> Result<Option<f64>, Fault> {
    let rows = array_length(m + 1.0).ok_or(Fault::InvalidArrayLength)?;
    // Row arrays are only allocated when there is at least one row.
    let cols = if rows > 0 {
        array_length(n + 1.0).ok_or(Fault::InvalidArrayLength)?
    } else {
        0
    };
    frame.check_len(rows.saturating_mul(cols.max(1)))?;

    let mut d = vec![vec![0.0; cols]; rows];
    for i in 0..rows {
        for j in 0..cols {
            let up = if i > 0 { d[i - 1][j] } else { 0.0 };
            let left = if j > 0 { d[i][j - 1] } else { 0.0 };
            let diag = if i > 0 && j > 0 { d[i - 1][j - 1] } else { 0.0 };
            d[i][j] = up + left + diag;
        }
    }

    let row = array_index(m)
        .and_then(|i| d.get(i))
        .ok_or(Fault::MissingRow {
            function: "delannoy",
            index: m,
        })?;
    Ok(array_index(n).and_then(|j| row.get(j).copied()))
}

/// `e[i] = (-1)^i · C(2i, i) / (i + 1)` with `e[0] = 1`.
pub fn euler_zigzag(frame: &mut Frame, n: f64) -> Result<Option<f64>, Fault> {
    let mut e = vec![1.0];
    let mut i = 1usize;
    while i as f64 <= n {
        frame.check_len(i + 1)?;
        let x = i as f64;
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        e.push(sign * binom(frame, 2.0 * x, x)? / (x + 1.0));
        i += 1;
    }
    Ok(array_index(n).and_then(|idx| e.get(idx).copied()))
}

pub fn narayana(frame: &mut Frame, n: f64, k: f64) -> Result<f64, Fault> {
    let a = binom(frame, n, k)?;
    let b = binom(frame, n, k - 1.0)?;
    Ok(a * b / n)
}

/// Large Schröder numbers by the three-term recurrence
/// `(i+1)·s_i = 6i·s_{i-1} - (i-3)·s_{i-2}`.
pub fn schroeder(frame: &mut Frame, n: f64) -> Result<Option<f64>, Fault> {
    let mut s = vec![1.0, 2.0];
    let mut i = 2usize;
    while i as f64 <= n {
        frame.check_len(i + 1)?;
        let x = i as f64;
        s.push(6.0 * x * s[i - 1] / (x + 1.0) - (x - 3.0) * s[i - 2] / (x + 1.0));
        i += 1;
    }
    Ok(array_index(n).and_then(|idx| s.get(idx).copied()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_rows_end_in_one() {
        let mut f = Frame::default();
        assert_eq!(bell(&mut f, 0.0), Ok(Some(1.0)));
        assert_eq!(bell(&mut f, 5.0), Ok(Some(1.0)));
        assert_eq!(bell(&mut f, 2.5), Ok(None));
    }

    #[test]
    fn schroeder_seed_and_first_step() {
        let mut f = Frame::default();
        assert_eq!(schroeder(&mut f, 0.0), Ok(Some(1.0)));
        assert_eq!(schroeder(&mut f, 1.0), Ok(Some(2.0)));
        // 6·2·2/3 - (2-3)·1/3
        let s2 = schroeder(&mut f, 2.0).unwrap().unwrap();
        assert!((s2 - 25.0 / 3.0).abs() < 1e-12);
        assert_eq!(schroeder(&mut f, -1.0), Ok(None));
    }
}
