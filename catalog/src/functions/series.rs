use value::number::pow;

/// `H(n) = Σ_{i=1..n} 1/i`.
pub fn harmonic(n: f64) -> f64 {
    let mut h = 0.0;
    let mut i = 1.0;
    while i <= n {
        h += 1.0 / i;
        i += 1.0;
    }
    h
}

/// Closed form of `Σ_{i=0..n} r^i`. `r = 1` divides by zero.
pub fn geometric(r: f64, n: f64) -> f64 {
    (1.0 - pow(r, n + 1.0)) / (1.0 - r)
}

/// Real roots of `a·x² + b·x + c`, `+√d` root first.
///
/// A negative discriminant gives no roots. `a = 0` is not special-cased.
pub fn quad(a: f64, b: f64, c: f64) -> Vec<f64> {
    let d = b * b - 4.0 * a * c;
    if d < 0.0 {
        return Vec::new();
    }
    vec![(-b + d.sqrt()) / (2.0 * a), (-b - d.sqrt()) / (2.0 * a)]
}
