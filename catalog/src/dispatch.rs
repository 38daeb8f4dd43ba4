use std::any::Any;
use std::thread;

use tracing::{debug, warn};
use value::{coerce, Arg, RawParam, Value};

use crate::error::{DispatchError, Fault, RegistryError};
use crate::frame::{Frame, Limits};
use crate::registry::{FunctionEntry, Registry};
use crate::table::Arity;

/// Resolves a function name, coerces parameters, and runs the computation
/// behind a single fault boundary.
#[derive(Debug)]
pub struct Dispatcher {
    registry: Registry,
    limits: Limits,
}

impl Dispatcher {
    pub fn new(registry: Registry, limits: Limits) -> Self {
        Self { registry, limits }
    }

    /// Dispatcher over the full catalog.
    pub fn with_catalog(limits: Limits) -> Result<Self, RegistryError> {
        Ok(Self::new(Registry::bootstrap()?, limits))
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Name lookup, permissive coercion, invocation.
    ///
    /// An unknown name is rejected before any parameter is looked at.
    /// Malformed or missing parameters are not errors; they reach the
    /// function as NaN.
    pub fn invoke(&self, name: &str, params: &[RawParam]) -> Result<Value, DispatchError> {
        let entry = self
            .registry
            .resolve(name)
            .ok_or(DispatchError::InvalidFunction)?;
        let args = coerce_args(entry.arity, params);
        self.call(entry, &args)
    }

    /// Run `entry` on already-coerced arguments.
    pub fn call(&self, entry: &FunctionEntry, args: &[Arg]) -> Result<Value, DispatchError> {
        debug!(func = entry.name, args = args.len(), "dispatch");
        self.run_isolated(entry, args).map_err(|fault| {
            warn!(func = entry.name, error = %fault, "computation faulted");
            DispatchError::Runtime(fault)
        })
    }

    /// The computation gets its own stack, sized by the limits, and is
    /// joined before returning. Panics surface as [`Fault::Panicked`].
    fn run_isolated(&self, entry: &FunctionEntry, args: &[Arg]) -> Result<Value, Fault> {
        let limits = self.limits;
        thread::scope(|scope| {
            let handle = thread::Builder::new()
                .name(format!("compute-{}", entry.name))
                .stack_size(limits.stack_size)
                .spawn_scoped(scope, move || {
                    let mut frame = Frame::new(limits);
                    (entry.compute)(&mut frame, args)
                })
                .map_err(|e| Fault::Spawn(e.to_string()))?;
            handle
                .join()
                .map_err(|payload| Fault::Panicked(panic_message(payload)))?
        })
    }
}

/// Coerce every parameter, then pad fixed-arity calls with the undefined
/// argument.
pub fn coerce_args(arity: Arity, params: &[RawParam]) -> Vec<Arg> {
    let mut args: Vec<Arg> = params.iter().map(coerce).collect();
    if let Arity::Fixed(n) = arity {
        if args.len() < n {
            args.resize(n, Arg::missing());
        }
    }
    args
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "computation panicked".to_string()
    }
}
