//! Typed implementations of the catalog.
//!
//! Functions that recurse or allocate take a [`Frame`](crate::frame::Frame)
//! and return `Result<_, Fault>`; the rest are plain `f64` functions. The
//! argument-slice adapters the registry calls live in [`crate::natives`].

pub mod combinatorics;
pub mod linalg;
pub mod number_theory;
pub mod recurrences;
pub mod series;
