pub mod coerce;
pub mod number;
pub mod value;

pub use coerce::{coerce, coerce_number, Arg, RawParam};
pub use value::Value;
