//! Permissive conversion of request tokens into catalog arguments.
//!
//! Coercion never fails. A token that does not spell a number becomes NaN
//! and flows into the computation, which then produces a NaN (or otherwise
//! degenerate) result.

use serde::Serialize;

/// A raw query parameter value as received from the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RawParam {
    Single(String),
    /// The same key appeared more than once.
    Repeated(Vec<String>),
}

impl From<&str> for RawParam {
    fn from(s: &str) -> Self {
        RawParam::Single(s.to_string())
    }
}

impl From<String> for RawParam {
    fn from(s: String) -> Self {
        RawParam::Single(s)
    }
}

/// A coerced argument handed to a compute function.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Number(f64),
    Matrix(Vec<Vec<f64>>),
}

impl Arg {
    /// The "undefined" argument used for missing positions.
    pub fn missing() -> Self {
        Arg::Number(f64::NAN)
    }

    /// Numeric view. Matrices read as NaN.
    pub fn as_number(&self) -> f64 {
        match self {
            Arg::Number(n) => *n,
            Arg::Matrix(_) => f64::NAN,
        }
    }

    pub fn as_matrix(&self) -> Option<&[Vec<f64>]> {
        match self {
            Arg::Matrix(rows) => Some(rows),
            Arg::Number(_) => None,
        }
    }
}

impl From<f64> for Arg {
    fn from(n: f64) -> Self {
        Arg::Number(n)
    }
}

impl From<Vec<Vec<f64>>> for Arg {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Arg::Matrix(rows)
    }
}

/// Coerce one raw parameter.
///
/// A token holding a JSON array of numeric rows (`[[1,2],[3,4]]`) becomes a
/// matrix. A repeated key is NaN.
pub fn coerce(param: &RawParam) -> Arg {
    match param {
        RawParam::Single(token) => {
            let trimmed = trim(token);
            if trimmed.starts_with('[') {
                if let Ok(rows) = serde_json::from_str::<Vec<Vec<f64>>>(trimmed) {
                    return Arg::Matrix(rows);
                }
            }
            Arg::Number(coerce_number(token))
        }
        RawParam::Repeated(_) => Arg::Number(f64::NAN),
    }
}

/// Convert a string to a number the way a dynamic language's `Number(s)`
/// does.
///
/// * surrounding whitespace is ignored and the empty string is `0`
/// * `Infinity`, `+Infinity`, `-Infinity`
/// * unsigned `0x`, `0o`, `0b` integer literals
/// * decimal literals with optional sign, fraction, and exponent
///
/// Everything else, including `inf` and `nan` spellings that Rust's parser
/// accepts, is NaN.
pub fn coerce_number(token: &str) -> f64 {
    let s = trim(token);
    if s.is_empty() {
        return 0.0;
    }
    if let Some(n) = radix_literal(s) {
        return n;
    }
    let (sign, body) = match s.as_bytes()[0] {
        b'-' => (-1.0, &s[1..]),
        b'+' => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    if body == "Infinity" {
        return sign * f64::INFINITY;
    }
    if !is_decimal_literal(body) {
        return f64::NAN;
    }
    body.parse::<f64>().map(|n| sign * n).unwrap_or(f64::NAN)
}

fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn radix_literal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let mut acc = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * f64::from(radix) + f64::from(d),
            None => return Some(f64::NAN),
        }
    }
    Some(acc)
}

/// `digits [. digits?] [exp]` or `. digits [exp]`, no sign.
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
    }
    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == bytes.len()
}
