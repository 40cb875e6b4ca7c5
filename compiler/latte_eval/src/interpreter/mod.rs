//! Tree-walking interpreter.
//!
//! # Architecture
//!
//! `eval` dispatches on the node kind and recurses through children with
//! strict left-to-right evaluation. Locals live in the immutable
//! [`Environment`] threaded through the recursion; globals are forced from
//! the [`Root`] on every reference. Closure applications and forced globals
//! push frames onto the [`CallStack`], which enforces the depth limit and
//! produces backtraces.
//!
//! The native stack grows on demand around every `eval` call, so deep
//! recursion in the evaluated program is limited only by the configured
//! call depth.

mod builder;

pub use builder::InterpreterBuilder;

use latte_ir::{ArmRange, ExprArena, ExprId, ExprKind, Name, Span, StringInterner};
use latte_stack::ensure_sufficient_stack;

use crate::diagnostics::{CallFrame, CallStack};
use crate::matcher::try_match;
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::{
    arity_mismatch, explicit_error, non_exhaustive_match, not_callable, type_mismatch,
    undefined_definition, undefined_variable, Bindings, Environment, EvalError, EvalMode,
    EvalResult, FunctionValue, Root, Thunk, Value,
};

/// Evaluator for one program.
///
/// Borrows the program read-only; the only mutable state is the call stack.
/// Independent interpreters over the same program may run concurrently.
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    arena: &'a ExprArena,
    root: &'a Root,
    call_stack: CallStack,
    mode: EvalMode,
    /// Pre-interned frame name for closure applications.
    lambda_name: Name,
}

impl<'a> Interpreter<'a> {
    /// Interpreter in the default mode.
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena, root: &'a Root) -> Self {
        InterpreterBuilder::new(interner, arena, root).build()
    }

    #[inline]
    pub fn mode(&self) -> EvalMode {
        self.mode
    }

    #[inline]
    pub fn call_stack(&self) -> &CallStack {
        &self.call_stack
    }

    #[inline]
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Evaluate `expr_id` in `env`.
    #[tracing::instrument(level = "trace", skip(self, env))]
    pub fn eval(&mut self, expr_id: ExprId, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr_id, env))
    }

    /// Force the global `name` as if referenced from a `Ref` node.
    pub fn force(&mut self, name: Name) -> EvalResult {
        self.force_at(name, None)
    }

    /// Apply a closure to already-evaluated arguments.
    pub fn call(&mut self, callee: &Value, args: Vec<Value>) -> EvalResult {
        self.apply(callee, args, None)
    }

    fn eval_inner(&mut self, expr_id: ExprId, env: &Environment) -> EvalResult {
        let arena = self.arena;
        let span = arena.span(expr_id);

        let result = match arena.kind(expr_id) {
            ExprKind::Lit(lit) => Ok(Value::from_literal(lit)),

            ExprKind::Var(name) => env
                .lookup(*name)
                .cloned()
                .ok_or_else(|| undefined_variable(self.interner.lookup(*name))),

            ExprKind::Ref(name) => self.force_at(*name, Some(span)),

            ExprKind::Lambda { params, body } => {
                let params: Vec<Name> = arena.get_params(*params).iter().map(|p| p.name).collect();
                Ok(Value::closure(FunctionValue::new(params, *body, env.clone())))
            }

            ExprKind::Apply { func, args } => self.eval_apply(*func, arena.get_expr_list(*args), env, span),

            ExprKind::Unary { op, operand } => {
                let value = self.eval(*operand, env)?;
                evaluate_unary(value, *op)
            }

            // Both operands are always evaluated, `And`/`Or` included.
            ExprKind::Binary { op, left, right } => {
                let left = self.eval(*left, env)?;
                let right = self.eval(*right, env)?;
                evaluate_binary(left, right, *op)
            }

            ExprKind::Let { name, bound, body } => {
                let value = self.eval(*bound, env)?;
                self.eval(*body, &env.extend(*name, value))
            }

            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => match self.eval(*cond, env)? {
                Value::Bool(true) => self.eval(*then_branch, env),
                Value::Bool(false) => self.eval(*else_branch, env),
                other => Err(type_mismatch("Bool", other.type_name())),
            },

            ExprKind::Match { scrutinee, arms } => self.eval_match(*scrutinee, *arms, env),

            ExprKind::Tuple(elems) => {
                let elems = self.eval_list(arena.get_expr_list(*elems), env)?;
                Ok(Value::tuple(elems))
            }

            ExprKind::Tag {
                enum_name,
                tag_name,
                payload,
            } => {
                let payload = self.eval(*payload, env)?;
                Ok(Value::tag(*enum_name, *tag_name, payload))
            }

            ExprKind::Error => Err(explicit_error()),
        };

        result.map_err(|e| e.or_span(span))
    }

    fn eval_list(&mut self, ids: &[ExprId], env: &Environment) -> Result<Vec<Value>, EvalError> {
        ids.iter().map(|id| self.eval(*id, env)).collect()
    }

    fn eval_apply(
        &mut self,
        func: ExprId,
        args: &[ExprId],
        env: &Environment,
        span: Span,
    ) -> EvalResult {
        let callee = self.eval(func, env)?;
        let args = self.eval_list(args, env)?;
        self.apply(&callee, args, Some(span))
    }

    /// Bind `args` over the closure's captured environment and run its body.
    fn apply(&mut self, callee: &Value, args: Vec<Value>, call_span: Option<Span>) -> EvalResult {
        let Value::Closure(func) = callee else {
            return Err(not_callable(callee.type_name()));
        };
        if func.arity() != args.len() {
            return Err(arity_mismatch(func.arity(), args.len()));
        }

        let bindings: Bindings = func.params().iter().copied().zip(args).collect();
        let env = func.env().extend_all(bindings);

        self.call_stack.push(CallFrame {
            name: self.lambda_name,
            call_span,
        })?;
        let result = self.eval(func.body(), &env);
        self.leave_frame(result)
    }

    fn force_at(&mut self, name: Name, call_span: Option<Span>) -> EvalResult {
        let root = self.root;
        let Some(thunk) = root.lookup(name) else {
            return Err(undefined_definition(self.interner.lookup(name)));
        };

        tracing::debug!(definition = self.interner.lookup(name), "forcing global");

        self.call_stack.push(CallFrame { name, call_span })?;
        let result = match thunk {
            Thunk::Definition(body) => self.eval(*body, &Environment::empty()),
            Thunk::Host(f) => f(),
        };
        self.leave_frame(result)
    }

    /// Pop the current frame, snapshotting the stack into a failing result.
    fn leave_frame(&mut self, result: EvalResult) -> EvalResult {
        let result = result.map_err(|e| self.call_stack.attach_backtrace(e, self.interner));
        self.call_stack.pop();
        result
    }

    fn eval_match(&mut self, scrutinee: ExprId, arms: ArmRange, env: &Environment) -> EvalResult {
        let arena = self.arena;
        let value = self.eval(scrutinee, env)?;

        for (index, arm) in arena.get_arms(arms).iter().enumerate() {
            if let Some(bindings) = try_match(arena, arm.pattern, &value) {
                tracing::trace!(arm = index, bound = bindings.len(), "match arm selected");
                return self.eval(arm.body, &env.extend_all(bindings));
            }
        }

        let scrutinee = value.display(self.interner).to_string();
        tracing::debug!(%scrutinee, "no match arm applies");
        Err(non_exhaustive_match(&scrutinee))
    }
}

#[cfg(test)]
mod tests;
