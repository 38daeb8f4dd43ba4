pub mod dispatch;
pub mod error;
pub mod frame;
pub mod functions;
pub mod natives;
pub mod registry;
pub mod table;

pub use dispatch::Dispatcher;
pub use error::{DispatchError, Fault, RegistryError};
pub use frame::{Frame, Limits, MIN_STACK_SIZE, STACK_BYTES_PER_FRAME};
pub use registry::{FunctionEntry, Registry};
pub use table::{Arity, ComputeFn, FunctionId, FunctionMeta, FUNCTION_COUNT, FUNCTION_TABLE};
