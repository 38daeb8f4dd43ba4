use thiserror::Error;

/// A fault raised while a compute function runs.
///
/// The display strings are what the HTTP layer returns in the `error` field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Fault {
    #[error("Maximum call stack size exceeded")]
    RecursionLimit,
    #[error("Invalid array length")]
    InvalidArrayLength,
    #[error("{function}: argument {position} is not a matrix")]
    NotAMatrix {
        function: &'static str,
        position: usize,
    },
    #[error("{function}: no row at index {index}")]
    MissingRow { function: &'static str, index: f64 },
    #[error("failed to start compute thread: {0}")]
    Spawn(String),
    #[error("{0}")]
    Panicked(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error("Invalid function")]
    InvalidFunction,
    #[error(transparent)]
    Runtime(#[from] Fault),
}

impl DispatchError {
    /// HTTP status for this error.
    pub fn status(&self) -> u16 {
        match self {
            DispatchError::InvalidFunction => 400,
            DispatchError::Runtime(_) => 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("function `{0}` is already registered")]
    DuplicateName(&'static str),
}
