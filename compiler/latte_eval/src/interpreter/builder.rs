//! `InterpreterBuilder` for creating `Interpreter` instances.

use latte_ir::{ExprArena, StringInterner};

use super::Interpreter;
use crate::diagnostics::CallStack;
use crate::{EvalMode, Root};

/// Name of the call frame pushed for closure applications.
pub(super) const LAMBDA_FRAME: &str = "<lambda>";

/// Builder for [`Interpreter`].
///
/// The mode defaults to [`EvalMode::Interpret`]; an explicit
/// [`max_call_depth`](Self::max_call_depth) overrides the mode's limit.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    arena: &'a ExprArena,
    root: &'a Root,
    mode: EvalMode,
    max_call_depth: Option<Option<usize>>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena, root: &'a Root) -> Self {
        Self {
            interner,
            arena,
            root,
            mode: EvalMode::default(),
            max_call_depth: None,
        }
    }

    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the call depth limit, `None` for unlimited.
    #[must_use]
    pub fn max_call_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_call_depth = Some(max_depth);
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        let max_depth = self
            .max_call_depth
            .unwrap_or_else(|| self.mode.max_call_depth());

        Interpreter {
            interner: self.interner,
            arena: self.arena,
            root: self.root,
            call_stack: CallStack::new(max_depth),
            mode: self.mode,
            lambda_name: self.interner.intern(LAMBDA_FRAME),
        }
    }
}
