//! Number conversions with the semantics of a dynamic-language numeric tower.
//!
//! Every catalog function works on `f64`. Where an operation needs an integer
//! (bit shifts, array lengths, table indices) the conversion follows the same
//! wrap-around and validity rules a scripting engine applies, so results for
//! odd inputs (NaN, negative zero, fractions) stay observable instead of
//! being rejected.

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Largest valid array length (`2^32 - 1`).
pub const MAX_ARRAY_LENGTH: f64 = 4_294_967_295.0;

/// Truncate and wrap modulo 2^32. Non-finite input maps to 0.
pub fn to_uint32(x: f64) -> u32 {
    if !x.is_finite() {
        return 0;
    }
    // rem_euclid keeps the result in [0, 2^32) for negative input.
    x.trunc().rem_euclid(TWO_POW_32) as u32
}

/// Same as [`to_uint32`], reinterpreted as a signed 32-bit integer.
pub fn to_int32(x: f64) -> i32 {
    to_uint32(x) as i32
}

/// Exponentiation with the engine's special cases.
///
/// `f64::powf` returns 1 for `1^NaN` and `(±1)^∞`; the engine returns NaN
/// for both.
pub fn pow(base: f64, exp: f64) -> f64 {
    if exp.is_nan() {
        return f64::NAN;
    }
    if exp.is_infinite() && base.abs() == 1.0 {
        return f64::NAN;
    }
    base.powf(exp)
}

/// Interpret `x` as an index into a dense array.
///
/// Returns `None` for anything that would not address an element: negative
/// numbers, fractions, NaN, infinities, and values past the array limit.
/// Negative zero addresses element 0.
pub fn array_index(x: f64) -> Option<usize> {
    if x.is_finite() && x >= 0.0 && x.fract() == 0.0 && x < MAX_ARRAY_LENGTH {
        Some(x as usize)
    } else {
        None
    }
}

/// Interpret `x` as the requested length of a new array.
///
/// Valid lengths are integers in `[0, 2^32 - 1]`; everything else is a range
/// error at the call site.
pub fn array_length(x: f64) -> Option<usize> {
    if f64::from(to_uint32(x)) == x {
        Some(x as usize)
    } else {
        None
    }
}

/// Decimal digits of a non-negative integral number, as the engine would
/// print them.
///
/// Returns `None` when the printed form contains anything other than digits
/// (sign, decimal point, exponent, `NaN`, `Infinity`).
pub fn decimal_digits(x: f64) -> Option<Vec<u32>> {
    if x == 0.0 {
        return Some(vec![0]);
    }
    // Integers at or above 1e21 print in exponent form.
    if !(x.is_finite() && x > 0.0 && x.fract() == 0.0 && x < 1e21) {
        return None;
    }
    format!("{x}").chars().map(|c| c.to_digit(10)).collect()
}

/// Hash key that treats all NaNs as one value and `-0` as `0`.
pub fn same_value_zero_key(x: f64) -> u64 {
    if x.is_nan() {
        f64::NAN.to_bits()
    } else if x == 0.0 {
        0
    } else {
        x.to_bits()
    }
}
