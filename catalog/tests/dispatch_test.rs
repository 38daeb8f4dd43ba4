//! The dispatch contract: lookup, permissive coercion, arity padding, and
//! the fault boundary.

use catalog::{DispatchError, Dispatcher, Fault, Limits, FUNCTION_COUNT};
use value::{RawParam, Value};

fn dispatcher() -> Dispatcher {
    Dispatcher::with_catalog(Limits::default()).expect("catalog registers")
}

fn params(tokens: &[&str]) -> Vec<RawParam> {
    tokens.iter().map(|t| RawParam::from(*t)).collect()
}

fn invoke(name: &str, tokens: &[&str]) -> Result<Value, DispatchError> {
    dispatcher().invoke(name, &params(tokens))
}

// ======================================================================
// Lookup
// ======================================================================

#[test]
fn unknown_function_is_rejected() {
    let err = invoke("notarealfn", &["1"]).unwrap_err();
    assert_eq!(err, DispatchError::InvalidFunction);
    assert_eq!(err.status(), 400);
    assert_eq!(err.to_string(), "Invalid function");
}

#[test]
fn lookup_is_exact_and_case_sensitive() {
    assert_eq!(invoke("", &[]), Err(DispatchError::InvalidFunction));
    assert_eq!(invoke("FIB", &["3"]), Err(DispatchError::InvalidFunction));
    assert_eq!(invoke(" fib", &["3"]), Err(DispatchError::InvalidFunction));
    assert_eq!(invoke("fib,fib", &["3"]), Err(DispatchError::InvalidFunction));
}

#[test]
fn every_catalog_name_resolves() {
    let d = dispatcher();
    assert_eq!(d.registry().len(), FUNCTION_COUNT);
    for entry in d.registry().entries() {
        assert!(d.registry().resolve(entry.name).is_some(), "{}", entry.name);
    }
}

// ======================================================================
// Results
// ======================================================================

#[test]
fn reference_results() {
    assert_eq!(invoke("fib", &["10"]), Ok(Value::Number(55.0)));
    assert_eq!(invoke("fact", &["5"]), Ok(Value::Number(120.0)));
    assert_eq!(invoke("gcd", &["48", "18"]), Ok(Value::Number(6.0)));
    assert_eq!(invoke("isPrime", &["17"]), Ok(Value::Bool(true)));
    assert_eq!(invoke("isPrime", &["1"]), Ok(Value::Bool(false)));
    assert_eq!(invoke("isHappy", &["19"]), Ok(Value::Bool(true)));
    assert_eq!(invoke("isHappy", &["4"]), Ok(Value::Bool(false)));
    assert_eq!(invoke("modinv", &["3", "11"]), Ok(Value::Number(4.0)));
    assert_eq!(invoke("modinv", &["2", "4"]), Ok(Value::Null));
}

#[test]
fn sequence_results() {
    assert_eq!(
        invoke("quad", &["1", "0", "-4"]),
        Ok(Value::from(vec![2.0, -2.0]))
    );
    assert_eq!(invoke("quad", &["1", "0", "4"]), Ok(Value::List(vec![])));
    assert_eq!(
        invoke("collatz", &["6"]),
        Ok(Value::from(vec![6.0, 3.0, 10.0, 5.0, 16.0, 8.0, 4.0, 2.0, 1.0]))
    );
}

#[test]
fn matrix_parameters() {
    assert_eq!(
        invoke("matmul", &["[[1,2],[3,4]]", "[[5,6],[7,8]]"]),
        Ok(Value::from(vec![vec![19.0, 22.0], vec![43.0, 50.0]]))
    );
    assert_eq!(invoke("det2", &["[[1,2],[3,4]]"]), Ok(Value::Number(-2.0)));

    let identity = invoke("matmul", &["[[2,3],[4,5]]", "[[1,0],[0,1]]"]).unwrap();
    assert_eq!(identity.to_matrix(), Some(vec![vec![2.0, 3.0], vec![4.0, 5.0]]));
}

#[test]
fn predicates_return_booleans() {
    let prime = invoke("isPrime", &["97"]).unwrap();
    assert_eq!(prime.as_bool(), Some(true));
    assert_eq!(prime.as_number(), None);
    assert_eq!(invoke("isHappy", &["2"]).unwrap().as_bool(), Some(false));
}

#[test]
fn table_miss_is_undefined() {
    assert_eq!(invoke("bell", &["2.5"]), Ok(Value::Undefined));
    assert_eq!(invoke("schroeder", &["-3"]), Ok(Value::Undefined));
}

#[test]
fn invocations_are_idempotent() {
    let d = dispatcher();
    for (name, tokens) in [
        ("fib", vec!["15"]),
        ("collatz", vec!["27"]),
        ("totient", vec!["36"]),
        ("isHappy", vec!["7"]),
    ] {
        let p = params(&tokens);
        assert_eq!(d.invoke(name, &p), d.invoke(name, &p), "{name}");
    }
}

// ======================================================================
// Coercion and arity
// ======================================================================

#[test]
fn extra_parameters_are_ignored() {
    assert_eq!(invoke("gcd", &["48", "18", "99"]), Ok(Value::Number(6.0)));
}

#[test]
fn malformed_numbers_degrade_silently() {
    // NaN fails every comparison, so the trial-division loop never runs.
    assert_eq!(invoke("isPrime", &["abc"]), Ok(Value::Bool(true)));
    assert_eq!(invoke("harmonic", &["abc"]), Ok(Value::Number(0.0)));
    let roots = invoke("quad", &["abc", "0", "1"]).unwrap();
    assert!(roots.to_numbers().unwrap().iter().all(|r| r.is_nan()));
}

#[test]
fn missing_parameters_read_as_nan() {
    let v = invoke("geometric", &["2"]).unwrap();
    assert!(v.as_number().unwrap().is_nan());
    assert_eq!(invoke("powmod", &["3"]), Ok(Value::Number(1.0)));
    assert_eq!(invoke("modinv", &[]), Ok(Value::Null));
}

#[test]
fn empty_token_is_zero() {
    assert_eq!(invoke("fib", &[""]), Ok(Value::Number(0.0)));
}

#[test]
fn repeated_key_is_nan() {
    let d = dispatcher();
    let p = vec![RawParam::Repeated(vec!["5".into(), "6".into()])];
    assert_eq!(d.invoke("isPrime", &p), Ok(Value::Bool(true)));
}

// ======================================================================
// Faults
// ======================================================================

#[test]
fn runaway_recursion_is_a_runtime_error() {
    let err = invoke("fib", &["abc"]).unwrap_err();
    assert_eq!(err, DispatchError::Runtime(Fault::RecursionLimit));
    assert_eq!(err.status(), 500);
    assert_eq!(err.to_string(), "Maximum call stack size exceeded");
}

#[test]
fn missing_argument_recursion_faults() {
    assert_eq!(
        invoke("fact", &[]),
        Err(DispatchError::Runtime(Fault::RecursionLimit))
    );
}

#[test]
fn depth_limit_is_configurable() {
    let d = Dispatcher::with_catalog(Limits {
        max_depth: 50,
        ..Limits::default()
    })
    .unwrap();
    assert_eq!(d.limits().max_depth, 50);
    assert_eq!(d.limits().max_len, Limits::default().max_len);
    assert_eq!(d.invoke("fib", &params(&["20"])), Ok(Value::Number(6765.0)));
    assert_eq!(
        d.invoke("fact", &params(&["60"])),
        Err(DispatchError::Runtime(Fault::RecursionLimit))
    );
}

#[test]
fn unbounded_sequences_hit_the_length_limit() {
    let d = Dispatcher::with_catalog(Limits {
        max_len: 1_000,
        ..Limits::default()
    })
    .unwrap();
    assert_eq!(
        d.invoke("collatz", &params(&["Infinity"])),
        Err(DispatchError::Runtime(Fault::InvalidArrayLength))
    );
    assert_eq!(
        d.invoke("bell", &params(&["5000"])),
        Err(DispatchError::Runtime(Fault::InvalidArrayLength))
    );
}

#[test]
fn scalar_matrix_argument_faults() {
    let err = invoke("matmul", &["1", "2"]).unwrap_err();
    assert_eq!(err.status(), 500);
    assert_eq!(err.to_string(), "matmul: argument 1 is not a matrix");
}

#[test]
fn faults_do_not_poison_the_dispatcher() {
    let d = dispatcher();
    assert!(d.invoke("fib", &params(&["NaN"])).is_err());
    assert_eq!(d.invoke("fib", &params(&["12"])), Ok(Value::Number(144.0)));
}
