//! Host API over a finished program.
//!
//! A [`Program`] owns shared handles to the interner, the arena, and the
//! root table, and evaluates definitions by their resolved names. Each
//! evaluation gets a fresh [`Interpreter`], so independent definitions can be
//! evaluated in parallel over the same program.

use std::sync::Arc;

use rayon::prelude::*;

use latte_ir::{ExprArena, SharedArena, SharedInterner, StringInterner};

use crate::{
    undefined_definition, EvalError, EvalMode, EvalResult, HostValue, Interpreter,
    InterpreterBuilder, Root,
};

/// A resolved, typed program ready for evaluation.
#[derive(Clone, Debug)]
pub struct Program {
    interner: SharedInterner,
    arena: SharedArena,
    root: Arc<Root>,
    mode: EvalMode,
}

impl Program {
    pub fn new(interner: SharedInterner, arena: impl Into<SharedArena>, root: Root) -> Self {
        Program {
            interner,
            arena: arena.into(),
            root: Arc::new(root),
            mode: EvalMode::default(),
        }
    }

    /// Evaluate in `mode` from now on.
    #[must_use]
    pub fn with_mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    #[inline]
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    #[inline]
    pub fn arena(&self) -> &ExprArena {
        &self.arena
    }

    #[inline]
    pub fn root(&self) -> &Root {
        &self.root
    }

    /// A fresh interpreter over this program.
    pub fn interpreter(&self) -> Interpreter<'_> {
        InterpreterBuilder::new(&self.interner, &self.arena, &self.root)
            .mode(self.mode)
            .build()
    }

    /// Force the definition named `name`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn eval_definition(&self, name: &str) -> EvalResult {
        // A name the interner has never seen cannot be defined.
        let Some(resolved) = self.interner.get(name) else {
            return Err(undefined_definition(name));
        };
        self.interpreter().force(resolved)
    }

    /// Force `name` and convert the result for the host.
    pub fn eval_host(&self, name: &str) -> Result<HostValue, EvalError> {
        self.eval_definition(name)
            .map(|value| value.to_host(&self.interner))
    }

    /// Evaluate independent definitions in parallel, results in input order.
    pub fn eval_all(&self, names: &[&str]) -> Vec<Result<HostValue, EvalError>> {
        names.par_iter().map(|name| self.eval_host(name)).collect()
    }
}
