use crate::error::Fault;

/// Resource ceilings for a single invocation.
///
/// These stand in for the host limits a scripting engine would impose:
/// naive recursion fails with [`Fault::RecursionLimit`] instead of
/// overflowing the native stack, and runaway tables fail with
/// [`Fault::InvalidArrayLength`] instead of exhausting memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting of recursive calls.
    pub max_depth: usize,
    /// Maximum number of elements in any sequence or table.
    pub max_len: usize,
    /// Stack size of the compute thread, in bytes.
    pub stack_size: usize,
}

pub const DEFAULT_MAX_DEPTH: usize = 10_000;
pub const DEFAULT_MAX_LEN: usize = 1 << 24;
pub const DEFAULT_STACK_SIZE: usize = 64 * 1024 * 1024;
/// Native stack reserved per recursion level when sizing the compute thread.
pub const STACK_BYTES_PER_FRAME: usize = 4 * 1024;
/// Floor for the compute thread's stack, whatever the depth limit.
pub const MIN_STACK_SIZE: usize = 1 << 20;

impl Limits {
    /// Smallest `stack_size` that can hold `max_depth` nested calls.
    ///
    /// A compute thread that overflows its native stack aborts the process,
    /// so `stack_size` must stay at or above this.
    pub fn required_stack_size(&self) -> usize {
        self.max_depth
            .saturating_mul(STACK_BYTES_PER_FRAME)
            .max(MIN_STACK_SIZE)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_len: DEFAULT_MAX_LEN,
            stack_size: DEFAULT_STACK_SIZE,
        }
    }
}

/// Per-invocation execution context threaded through every compute call.
#[derive(Debug)]
pub struct Frame {
    depth: usize,
    limits: Limits,
}

impl Frame {
    pub fn new(limits: Limits) -> Self {
        Self { depth: 0, limits }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Run `body` one call level deeper.
    pub fn enter<T>(
        &mut self,
        body: impl FnOnce(&mut Frame) -> Result<T, Fault>,
    ) -> Result<T, Fault> {
        if self.depth >= self.limits.max_depth {
            return Err(Fault::RecursionLimit);
        }
        self.depth += 1;
        let out = body(self);
        self.depth -= 1;
        out
    }

    /// Fail if a sequence is about to grow to `len` elements past the limit.
    pub fn check_len(&self, len: usize) -> Result<(), Fault> {
        if len > self.limits.max_len {
            Err(Fault::InvalidArrayLength)
        } else {
            Ok(())
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}
