//! Call frame tracking for backtraces and the depth limit.

use latte_ir::{Name, Span, StringInterner};

use crate::{recursion_limit_exceeded, BacktraceFrame, EvalBacktrace, EvalError};

/// One active call: a closure application or a forced global.
#[derive(Clone, Debug)]
pub struct CallFrame {
    /// Referenced definition, or the interned `<lambda>` marker.
    pub name: Name,
    /// Span of the `Apply` or `Ref` node that made the call.
    pub call_span: Option<Span>,
}

/// Live call stack of one interpreter.
///
/// ```text
/// stack.push(CallFrame { name, call_span: Some(span) })?;
/// let result = /* evaluate body */;
/// stack.pop();
/// ```
#[derive(Clone, Debug, Default)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `max_depth` of `None` means unlimited.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a frame, or fail with `StackOverflow` if the stack is full.
    ///
    /// On failure nothing is pushed.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(recursion_limit_exceeded(max));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "pop on empty call stack");
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Snapshot the stack, innermost frame first.
    pub fn capture(&self, interner: &StringInterner) -> EvalBacktrace {
        let frames = self
            .frames
            .iter()
            .rev()
            .map(|f| BacktraceFrame {
                name: interner.lookup(f.name).to_string(),
                span: f.call_span,
            })
            .collect();
        EvalBacktrace::new(frames)
    }

    /// Attach a snapshot to `err` unless it already carries one.
    ///
    /// Called as an error unwinds through each frame; only the first, deepest
    /// snapshot is kept.
    pub fn attach_backtrace(&self, err: EvalError, interner: &StringInterner) -> EvalError {
        if err.backtrace.is_some() || self.frames.is_empty() {
            return err;
        }
        err.with_backtrace(self.capture(interner))
    }
}
