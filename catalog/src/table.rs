use value::{Arg, Value};

use crate::error::Fault;
use crate::frame::Frame;
use crate::natives::*;

/// The uniform signature of every catalog entry.
/// args: coerced arguments in request order, possibly fewer or more than the arity.
pub type ComputeFn = fn(frame: &mut Frame, args: &[Arg]) -> Result<Value, Fault>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Fixed(usize),
    Variadic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionId {
    Fib,
    IsPrime,
    Matmul,
    Fact,
    Gcd,
    Binom,
    Det2,
    Totient,
    Quad,
    Modinv,
    Powmod,
    Collatz,
    Ack,
    Catalan,
    Stirling,
    Legendre,
    Bell,
    Harmonic,
    Geometric,
    Lucas,
    Pell,
    Mersenne,
    IsHappy,
    Tribonacci,
    Padovan,
    Motzkin,
    Delannoy,
    Jacobsthal,
    Sylvester,
    EulerZigzag,
    Narayana,
    Schroeder,
    Fermat,
}

impl FunctionId {
    pub fn meta(self) -> &'static FunctionMeta {
        &FUNCTION_TABLE[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.meta().name
    }

    pub fn arity(self) -> Arity {
        self.meta().arity
    }
}

pub struct FunctionMeta {
    pub id: FunctionId,
    pub name: &'static str,
    pub arity: Arity,
    pub compute: ComputeFn,
}

const fn entry(id: FunctionId, name: &'static str, arity: usize, compute: ComputeFn) -> FunctionMeta {
    FunctionMeta {
        id,
        name,
        arity: Arity::Fixed(arity),
        compute,
    }
}

// THE SINGLE SOURCE OF TRUTH
// The index in this array IS the FunctionId discriminant.
// Request names = these names, exactly and case-sensitively.
pub const FUNCTION_TABLE: &[FunctionMeta] = &[
    entry(FunctionId::Fib, "fib", 1, native_fib),                   // Index 0
    entry(FunctionId::IsPrime, "isPrime", 1, native_is_prime),      // Index 1
    entry(FunctionId::Matmul, "matmul", 2, native_matmul),          // Index 2
    entry(FunctionId::Fact, "fact", 1, native_fact),                // Index 3
    entry(FunctionId::Gcd, "gcd", 2, native_gcd),                   // Index 4
    entry(FunctionId::Binom, "binom", 2, native_binom),             // Index 5
    entry(FunctionId::Det2, "det2", 1, native_det2),                // Index 6
    entry(FunctionId::Totient, "totient", 1, native_totient),       // Index 7
    entry(FunctionId::Quad, "quad", 3, native_quad),                // Index 8
    entry(FunctionId::Modinv, "modinv", 2, native_modinv),          // Index 9
    entry(FunctionId::Powmod, "powmod", 3, native_powmod),          // Index 10
    entry(FunctionId::Collatz, "collatz", 1, native_collatz),       // Index 11
    entry(FunctionId::Ack, "ack", 2, native_ack),                   // Index 12
    entry(FunctionId::Catalan, "catalan", 1, native_catalan),       // Index 13
    entry(FunctionId::Stirling, "stirling", 2, native_stirling),    // Index 14
    entry(FunctionId::Legendre, "legendre", 1, native_legendre),    // Index 15
    entry(FunctionId::Bell, "bell", 1, native_bell),                // Index 16
    entry(FunctionId::Harmonic, "harmonic", 1, native_harmonic),    // Index 17
    entry(FunctionId::Geometric, "geometric", 2, native_geometric), // Index 18
    entry(FunctionId::Lucas, "lucas", 1, native_lucas),             // Index 19
    entry(FunctionId::Pell, "pell", 1, native_pell),                // Index 20
    entry(FunctionId::Mersenne, "mersenne", 1, native_mersenne),    // Index 21
    entry(FunctionId::IsHappy, "isHappy", 1, native_is_happy),      // Index 22
    entry(FunctionId::Tribonacci, "tribonacci", 1, native_tribonacci), // Index 23
    entry(FunctionId::Padovan, "padovan", 1, native_padovan),       // Index 24
    entry(FunctionId::Motzkin, "motzkin", 1, native_motzkin),       // Index 25
    entry(FunctionId::Delannoy, "delannoy", 2, native_delannoy),    // Index 26
    entry(FunctionId::Jacobsthal, "jacobsthal", 1, native_jacobsthal), // Index 27
    entry(FunctionId::Sylvester, "sylvester", 1, native_sylvester), // Index 28
    entry(FunctionId::EulerZigzag, "eulerZigzag", 1, native_euler_zigzag), // Index 29
    entry(FunctionId::Narayana, "narayana", 2, native_narayana),    // Index 30
    entry(FunctionId::Schroeder, "schroeder", 1, native_schroeder), // Index 31
    entry(FunctionId::Fermat, "fermat", 1, native_fermat),          // Index 32
];

// Expected catalog size. Update this when adding or removing functions.
// Compile-time assertion prevents silent index shifts.
pub const FUNCTION_COUNT: usize = 33;
const _: () = assert!(
    FUNCTION_TABLE.len() == FUNCTION_COUNT,
    "FUNCTION_TABLE length changed, update FUNCTION_COUNT"
);
