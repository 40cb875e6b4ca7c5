//! Evaluator tests over hand-built program trees.

mod eval_tests;

use latte_ir::{ExprArena, ExprBuilder, ExprId, StringInterner};

use crate::{Environment, EvalError, Interpreter, Root, Thunk, Value};

/// An interner, arena, and root table built up by a single test.
pub(crate) struct Fixture {
    pub interner: StringInterner,
    pub arena: ExprArena,
    pub root: Root,
}

impl Fixture {
    pub fn new() -> Self {
        Fixture {
            interner: StringInterner::new(),
            arena: ExprArena::new(),
            root: Root::new(),
        }
    }

    pub fn builder(&mut self) -> ExprBuilder<'_> {
        ExprBuilder::new(&mut self.arena)
    }

    /// Register `body` as the definition `name`.
    pub fn define(&mut self, name: &str, body: ExprId) {
        let name = self.interner.intern(name);
        self.root.define(name, Thunk::Definition(body));
    }

    pub fn interpreter(&self) -> Interpreter<'_> {
        Interpreter::new(&self.interner, &self.arena, &self.root)
    }

    pub fn eval(&self, id: ExprId) -> Result<Value, EvalError> {
        self.interpreter().eval(id, &Environment::empty())
    }

    pub fn eval_ok(&self, id: ExprId) -> Value {
        match self.eval(id) {
            Ok(value) => value,
            Err(err) => panic!("evaluation failed: {err}"),
        }
    }

    pub fn eval_err(&self, id: ExprId) -> EvalError {
        match self.eval(id) {
            Ok(value) => panic!("expected an error, got {value:?}"),
            Err(err) => err,
        }
    }

    pub fn render(&self, value: &Value) -> String {
        value.display(&self.interner).to_string()
    }
}
