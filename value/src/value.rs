use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;

/// Largest magnitude at which every integer is exactly representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Result of a catalog function.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Bool(bool),
    /// Explicitly absent (e.g. no modular inverse).
    Null,
    /// Read past the end of a computed table. Omitted from responses.
    Undefined,
    List(Vec<Value>),
}

impl Value {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Flatten a list of numbers; `None` if any element is not a number.
    pub fn to_numbers(&self) -> Option<Vec<f64>> {
        self.as_list()?.iter().map(Value::as_number).collect()
    }

    /// Flatten a list of numeric rows.
    pub fn to_matrix(&self) -> Option<Vec<Vec<f64>>> {
        self.as_list()?.iter().map(Value::to_numbers).collect()
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<f64>> for Value {
    fn from(items: Vec<f64>) -> Self {
        Value::List(items.into_iter().map(Value::Number).collect())
    }
}

impl From<Vec<Vec<f64>>> for Value {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Value::List(rows.into_iter().map(Value::from).collect())
    }
}

/// `Some(n)` is a number, `None` is [`Value::Undefined`].
impl From<Option<f64>> for Value {
    fn from(n: Option<f64>) -> Self {
        n.map_or(Value::Undefined, Value::Number)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Integral values print without a fraction and -0 prints as 0.
            Value::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            // serde_json writes non-finite floats as null.
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Null | Value::Undefined => serializer.serialize_unit(),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) if n.is_nan() => write!(f, "NaN"),
            Value::Number(n) if n.is_infinite() => {
                write!(f, "{}Infinity", if *n < 0.0 { "-" } else { "" })
            }
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => write!(f, "null"),
            Value::Undefined => write!(f, "undefined"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json(v: &Value) -> String {
        serde_json::to_string(v).unwrap()
    }

    #[test]
    fn integral_numbers_print_as_integers() {
        assert_eq!(json(&Value::Number(55.0)), "55");
        assert_eq!(json(&Value::Number(-0.0)), "0");
        assert_eq!(json(&Value::Number(2.5)), "2.5");
    }

    #[test]
    fn non_finite_numbers_print_as_null() {
        assert_eq!(json(&Value::Number(f64::NAN)), "null");
        assert_eq!(json(&Value::Number(f64::INFINITY)), "null");
    }

    #[test]
    fn nested_lists() {
        let v = Value::from(vec![vec![1.0, 2.0], vec![3.0, f64::NAN]]);
        assert_eq!(json(&v), "[[1,2],[3,null]]");
        assert_eq!(json(&Value::List(vec![Value::Undefined])), "[null]");
    }

    #[test]
    fn accessors_reject_other_variants() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Null.as_bool(), None);
        assert_eq!(Value::from(vec![1.0]).to_matrix(), None);
        assert_eq!(
            Value::from(vec![vec![1.0], vec![]]).to_matrix(),
            Some(vec![vec![1.0], vec![]])
        );
    }

    #[test]
    fn display_uses_engine_spellings() {
        assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::from(vec![1.0, 2.0]).to_string(), "[1, 2]");
    }
}
