//! Evaluation modes.
//!
//! A mode selects the evaluation policy of an interpreter. Today the only
//! policy is the call depth limit.

/// Call depth limit of [`EvalMode::Interpret`] on native targets.
///
/// High enough for deep but terminating recursion. Runaway recursion hits it
/// before stack growth exhausts memory.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 100_000;

/// Evaluation mode of an [`Interpreter`](crate::Interpreter).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Standard evaluation of a program.
    #[default]
    Interpret,
    /// Evaluation with an explicit call depth limit.
    Bounded {
        /// Maximum number of nested calls.
        max_depth: usize,
    },
    /// Evaluation under a test harness: generous but bounded.
    Test,
}

impl EvalMode {
    /// Maximum call depth, or `None` for unlimited.
    ///
    /// - `Interpret`: [`DEFAULT_MAX_CALL_DEPTH`] on native (the stack grows on
    ///   demand), 200 on WASM
    /// - `Bounded`: the given depth
    /// - `Test`: always 500
    #[inline]
    pub fn max_call_depth(&self) -> Option<usize> {
        match self {
            Self::Interpret => {
                #[cfg(target_arch = "wasm32")]
                {
                    Some(200)
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    Some(DEFAULT_MAX_CALL_DEPTH)
                }
            }
            Self::Bounded { max_depth } => Some(*max_depth),
            Self::Test => Some(500),
        }
    }
}
