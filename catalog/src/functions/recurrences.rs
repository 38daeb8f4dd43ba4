//! Linear and non-linear recurrences evaluated by naive recursion.
//!
//! None of these memoize. Running time is exponential in `n` for most of
//! them and non-terminating inputs (NaN, negative values for the `==`-based
//! base cases) end in [`Fault::RecursionLimit`].

use crate::error::Fault;
use crate::frame::Frame;

pub fn fib(frame: &mut Frame, n: f64) -> Result<f64, Fault> {
    frame.enter(|f| {
        if n <= 1.0 {
            Ok(n)
        } else {
            Ok(fib(f, n - 1.0)? + fib(f, n - 2.0)?)
        }
    })
}

pub fn lucas(frame: &mut Frame, n: f64) -> Result<f64, Fault> {
    frame.enter(|f| {
        if n == 0.0 {
            Ok(2.0)
        } else if n == 1.0 {
            Ok(1.0)
        } else {
            Ok(lucas(f, n - 1.0)? + lucas(f, n - 2.0)?)
        }
    })
}

pub fn pell(frame: &mut Frame, n: f64) -> Result<f64, Fault> {
    frame.enter(|f| {
        if n <= 1.0 {
            Ok(n)
        } else {
            Ok(2.0 * pell(f, n - 1.0)? + pell(f, n - 2.0)?)
        }
    })
}

pub fn tribonacci(frame: &mut Frame, n: f64) -> Result<f64, Fault> {
    frame.enter(|f| {
        if n <= 2.0 {
            Ok(n)
        } else {
            Ok(tribonacci(f, n - 1.0)? + tribonacci(f, n - 2.0)? + tribonacci(f, n - 3.0)?)
        }
    })
}

pub fn padovan(frame: &mut Frame, n: f64) -> Result<f64, Fault> {
    frame.enter(|f| {
        if n <= 2.0 {
            Ok(1.0)
        } else {
            Ok(padovan(f, n - 2.0)? + padovan(f, n - 3.0)?)
        }
    })
}

/// `M(n) = M(n-1) + ((n-2)·M(n-2) + (n-1)·M(n-3)) / n`, with `M(n) = 1` for
/// `n <= 1`.
///
/// Only the second term is divided by `n`, so this is not the textbook
/// Motzkin recurrence: `motzkin(2)` is `1.5`.
pub fn motzkin(frame: &mut Frame, n: f64) -> Result<f64, Fault> {
    frame.enter(|f| {
        if n <= 1.0 {
            return Ok(1.0);
        }
        let head = motzkin(f, n - 1.0)?;
        let tail = if n >= 2.0 {
            (n - 2.0) * motzkin(f, n - 2.0)? + (n - 1.0) * motzkin(f, n - 3.0)?
        } else {
            0.0
        };
        Ok(head + tail / n)
    })
}

pub fn jacobsthal(frame: &mut Frame, n: f64) -> Result<f64, Fault> {
    frame.enter(|f| {
        if n == 0.0 {
            Ok(0.0)
        } else if n == 1.0 {
            Ok(1.0)
        } else {
            Ok(jacobsthal(f, n - 1.0)? + 2.0 * jacobsthal(f, n - 2.0)?)
        }
    })
}

/// `s(n) = s(n-1) · (s(n-1) + 1)`; the previous term is computed twice.
pub fn sylvester(frame: &mut Frame, n: f64) -> Result<f64, Fault> {
    frame.enter(|f| {
        if n <= 1.0 {
            Ok(n + 1.0)
        } else {
            let a = sylvester(f, n - 1.0)?;
            let b = sylvester(f, n - 1.0)?;
            Ok(a * (b + 1.0))
        }
    })
}

pub fn ack(frame: &mut Frame, m: f64, n: f64) -> Result<f64, Fault> {
    frame.enter(|f| {
        if m == 0.0 {
            Ok(n + 1.0)
        } else if n == 0.0 {
            ack(f, m - 1.0, 1.0)
        } else {
            let inner = ack(f, m, n - 1.0)?;
            ack(f, m - 1.0, inner)
        }
    })
}
