//! Argument-slice adapters with the uniform [`ComputeFn`](crate::table::ComputeFn)
//! signature.
//!
//! Each adapter reads its positional arguments (missing positions read as
//! NaN, extra positions are ignored), calls the typed implementation, and
//! wraps the result.

use value::{Arg, Value};

use crate::error::Fault;
use crate::frame::Frame;
use crate::functions::{combinatorics, linalg, number_theory, recurrences, series};

static MISSING: Arg = Arg::Number(f64::NAN);

fn num(args: &[Arg], i: usize) -> f64 {
    args.get(i).map_or(f64::NAN, Arg::as_number)
}

fn arg(args: &[Arg], i: usize) -> &Arg {
    args.get(i).unwrap_or(&MISSING)
}

// --- Recurrences ---

pub fn native_fib(frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(recurrences::fib(frame, num(args, 0))?.into())
}

pub fn native_lucas(frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(recurrences::lucas(frame, num(args, 0))?.into())
}

pub fn native_pell(frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(recurrences::pell(frame, num(args, 0))?.into())
}

pub fn native_tribonacci(frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(recurrences::tribonacci(frame, num(args, 0))?.into())
}

pub fn native_padovan(frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(recurrences::padovan(frame, num(args, 0))?.into())
}

pub fn native_motzkin(frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(recurrences::motzkin(frame, num(args, 0))?.into())
}

pub fn native_jacobsthal(frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(recurrences::jacobsthal(frame, num(args, 0))?.into())
}

pub fn native_sylvester(frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(recurrences::sylvester(frame, num(args, 0))?.into())
}

pub fn native_ack(frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(recurrences::ack(frame, num(args, 0), num(args, 1))?.into())
}

// --- Number theory ---

pub fn native_is_prime(_frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(number_theory::is_prime(num(args, 0)).into())
}

pub fn native_gcd(frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(number_theory::gcd(frame, num(args, 0), num(args, 1))?.into())
}

pub fn native_totient(frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(number_theory::totient(frame, num(args, 0))?.into())
}

pub fn native_modinv(_frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(number_theory::modinv(num(args, 0), num(args, 1)).map_or(Value::Null, Value::Number))
}

pub fn native_powmod(_frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(number_theory::powmod(num(args, 0), num(args, 1), num(args, 2)).into())
}

pub fn native_collatz(frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(number_theory::collatz(frame, num(args, 0))?.into())
}

pub fn native_legendre(_frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(number_theory::legendre(num(args, 0)).into())
}

pub fn native_mersenne(_frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(number_theory::mersenne(num(args, 0)).into())
}

pub fn native_is_happy(_frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(number_theory::is_happy(num(args, 0)).into())
}

pub fn native_fermat(_frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(number_theory::fermat(num(args, 0)).into())
}

// --- Combinatorics ---

pub fn native_fact(frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(combinatorics::fact(frame, num(args, 0))?.into())
}

pub fn native_binom(frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(combinatorics::binom(frame, num(args, 0), num(args, 1))?.into())
}

pub fn native_catalan(frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(combinatorics::catalan(frame, num(args, 0))?.into())
}

pub fn native_stirling(frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(combinatorics::stirling(frame, num(args, 0), num(args, 1))?.into())
}

pub fn native_bell(frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(combinatorics::bell(frame, num(args, 0))?.into())
}

pub fn native_delannoy(frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(combinatorics::delannoy(frame, num(args, 0), num(args, 1))?.into())
}

pub fn native_euler_zigzag(frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(combinatorics::euler_zigzag(frame, num(args, 0))?.into())
}

pub fn native_narayana(frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(combinatorics::narayana(frame, num(args, 0), num(args, 1))?.into())
}

pub fn native_schroeder(frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(combinatorics::schroeder(frame, num(args, 0))?.into())
}

// --- Series and roots ---

pub fn native_harmonic(_frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(series::harmonic(num(args, 0)).into())
}

pub fn native_geometric(_frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(series::geometric(num(args, 0), num(args, 1)).into())
}

pub fn native_quad(_frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(series::quad(num(args, 0), num(args, 1), num(args, 2)).into())
}

// --- Matrices ---

pub fn native_matmul(_frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(linalg::matmul(arg(args, 0), arg(args, 1))?.into())
}

pub fn native_det2(_frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault> {
    Ok(linalg::det2(arg(args, 0))?.into())
}
