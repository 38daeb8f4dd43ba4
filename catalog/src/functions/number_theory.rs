use rustc_hash::FxHashSet;
use value::number::{decimal_digits, pow, same_value_zero_key, to_int32, to_uint32};

use crate::error::Fault;
use crate::frame::Frame;

/// Trial division up to `√n`. NaN is reported prime: no comparison holds.
pub fn is_prime(n: f64) -> bool {
    if n < 2.0 {
        return false;
    }
    let mut i = 2.0;
    while i * i <= n {
        if n % i == 0.0 {
            return false;
        }
        i += 1.0;
    }
    true
}

/// Euclid's algorithm on truncated remainders, recursive.
pub fn gcd(frame: &mut Frame, a: f64, b: f64) -> Result<f64, Fault> {
    frame.enter(|f| if b == 0.0 { Ok(a) } else { gcd(f, b, a % b) })
}

/// Counts `i` in `1..=n` coprime to `n`.
pub fn totient(frame: &mut Frame, n: f64) -> Result<f64, Fault> {
    let mut count = 0.0;
    let mut i = 1.0;
    while i <= n {
        if gcd(frame, n, i)? == 1.0 {
            count += 1.0;
        }
        i += 1.0;
    }
    Ok(count)
}

/// Smallest `x` in `[1, m)` with `a·x ≡ 1 (mod m)`.
pub fn modinv(a: f64, m: f64) -> Option<f64> {
    let mut x = 1.0;
    while x < m {
        if (a * x) % m == 1.0 {
            return Some(x);
        }
        x += 1.0;
    }
    None
}

/// Right-to-left binary exponentiation.
///
/// The exponent is consumed through 32-bit signed shifts, so a negative
/// exponent never reaches zero and the loop does not terminate.
pub fn powmod(base: f64, exp: f64, modulus: f64) -> f64 {
    let mut result = 1.0;
    let mut base = base;
    let mut e = exp;
    while e != 0.0 && !e.is_nan() {
        if to_int32(e) & 1 != 0 {
            result = (result * base) % modulus;
        }
        base = (base * base) % modulus;
        e = f64::from(to_int32(e) >> 1);
    }
    result
}

/// Hailstone sequence from `n` down to the first term `<= 1`.
pub fn collatz(frame: &mut Frame, n: f64) -> Result<Vec<f64>, Fault> {
    let mut seq = vec![n];
    let mut n = n;
    while n > 1.0 {
        n = if n % 2.0 == 0.0 { n / 2.0 } else { 3.0 * n + 1.0 };
        frame.check_len(seq.len() + 1)?;
        seq.push(n);
    }
    Ok(seq)
}

/// `Σ_{i=1..n} ⌊n / i⌋`, the divisor summatory function.
pub fn legendre(n: f64) -> f64 {
    let mut sum = 0.0;
    let mut i = 1.0;
    while i <= n {
        sum += (n / i).floor();
        i += 1.0;
    }
    sum
}

/// `(1 << p) - 1` with the shift count taken modulo 32.
pub fn mersenne(p: f64) -> f64 {
    f64::from(1i32.wrapping_shl(to_uint32(p) & 31)) - 1.0
}

/// Iterates the digit-square sum until it hits 1 or repeats.
pub fn is_happy(n: f64) -> bool {
    let mut seen = FxHashSet::default();
    let mut n = n;
    while n != 1.0 && seen.insert(same_value_zero_key(n)) {
        n = digit_square_sum(n);
    }
    n == 1.0
}

fn digit_square_sum(n: f64) -> f64 {
    match decimal_digits(n) {
        Some(digits) => digits.iter().map(|d| f64::from(d * d)).sum(),
        None => f64::NAN,
    }
}

pub fn fermat(n: f64) -> f64 {
    pow(2.0, pow(2.0, n)) + 1.0
}
