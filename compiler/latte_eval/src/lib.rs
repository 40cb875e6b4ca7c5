#![deny(clippy::arithmetic_side_effects)]
//! Latte Eval - tree-walking evaluator for resolved, typed Latte programs.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Value`: the closed set of runtime values, compound payloads behind `Heap`
//! - `Environment`: persistent, `Arc`-linked binding layers
//! - `Root`: the global table of definition thunks
//! - `try_match`: all-or-nothing structural pattern matching
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//! - `Interpreter`: the recursive `eval` over an `ExprArena`
//!
//! Every runtime error is an `EvalError` propagated with `?`; nothing is
//! caught inside the evaluator.

mod diagnostics;
mod environment;
pub mod errors;
mod eval_mode;
mod interpreter;
mod matcher;
mod operators;
mod program;
mod root;
mod tracing_setup;
mod unary_operators;
mod value;

pub use errors::{
    // Lookup errors
    undefined_definition, undefined_variable,
    // Pattern errors
    non_exhaustive_match,
    // Arithmetic errors
    division_by_zero, modulo_by_zero,
    // Explicit errors
    explicit_error,
    // Typing invariant errors
    arity_mismatch, binary_type_mismatch, invalid_binary_op, invalid_unary_op, not_callable,
    shift_out_of_range, type_mismatch, uncomparable_values,
    // Limit and host errors
    host_error, recursion_limit_exceeded,
    // Types
    BacktraceFrame, ErrorCategory, EvalBacktrace, EvalError, EvalErrorKind, EvalNote, EvalResult,
};

pub use diagnostics::{CallFrame, CallStack};
pub use environment::{Bindings, Environment};
pub use eval_mode::{EvalMode, DEFAULT_MAX_CALL_DEPTH};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use matcher::try_match;
pub use operators::{evaluate_binary, structural_eq};
pub use program::Program;
pub use root::{HostFn, Root, Thunk};
pub use tracing_setup::init_tracing;
pub use unary_operators::evaluate_unary;
pub use value::{FunctionValue, Heap, HostValue, Value, ValueDisplay};

#[cfg(test)]
mod tests;
