//! Runtime errors of the evaluator.
//!
//! Every error is fatal: it aborts the current evaluation and propagates to
//! the host with `?`. Nothing inside the evaluator catches and resumes.
//!
//! `EvalErrorKind` is the structured category. Factory functions (e.g.
//! [`division_by_zero`]) are the public way to construct errors; they fill in
//! both `kind` and the rendered `message`.

use std::fmt;

use latte_ir::{BinaryOp, Span, UnaryOp};

use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Coarse classification of an [`EvalErrorKind`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A variable or global lookup missed. Indicates a resolver defect.
    UnboundVariable,
    /// No arm of a `match` accepted the scrutinee.
    MatchError,
    /// Integer division or modulo by zero.
    ArithmeticError,
    /// An upstream-inserted error marker was reached.
    ExplicitError,
    /// The tree violated a typing invariant, or an evaluation limit was hit.
    Internal,
    /// A host-provided definition failed.
    Host,
}

/// Structured error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Lookup
    UndefinedVariable {
        name: String,
    },
    UndefinedDefinition {
        name: String,
    },

    // Pattern
    NonExhaustiveMatch {
        scrutinee: String,
    },

    // Arithmetic
    DivisionByZero,
    ModuloByZero,

    // Explicit
    ExplicitError,

    // Typing invariants
    TypeMismatch {
        expected: String,
        got: String,
    },
    InvalidUnaryOp {
        op: UnaryOp,
        type_name: String,
    },
    InvalidBinaryOp {
        op: BinaryOp,
        type_name: String,
    },
    BinaryTypeMismatch {
        op: BinaryOp,
        left: String,
        right: String,
    },
    NotCallable {
        type_name: String,
    },
    ArityMismatch {
        expected: usize,
        got: usize,
    },
    UncomparableValues,
    ShiftOutOfRange {
        amount: i64,
    },

    // Limits
    StackOverflow {
        depth: usize,
    },

    // Host
    Host {
        message: String,
    },
}

impl EvalErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UndefinedVariable { .. } | Self::UndefinedDefinition { .. } => {
                ErrorCategory::UnboundVariable
            }
            Self::NonExhaustiveMatch { .. } => ErrorCategory::MatchError,
            Self::DivisionByZero | Self::ModuloByZero => ErrorCategory::ArithmeticError,
            Self::ExplicitError => ErrorCategory::ExplicitError,
            Self::TypeMismatch { .. }
            | Self::InvalidUnaryOp { .. }
            | Self::InvalidBinaryOp { .. }
            | Self::BinaryTypeMismatch { .. }
            | Self::NotCallable { .. }
            | Self::ArityMismatch { .. }
            | Self::UncomparableValues
            | Self::ShiftOutOfRange { .. }
            | Self::StackOverflow { .. } => ErrorCategory::Internal,
            Self::Host { .. } => ErrorCategory::Host,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "unbound variable: {name}"),
            Self::UndefinedDefinition { name } => write!(f, "undefined definition: {name}"),

            Self::NonExhaustiveMatch { scrutinee } => {
                write!(f, "non-exhaustive match: no rule matches {scrutinee}")
            }

            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "modulo by zero"),

            Self::ExplicitError => write!(f, "reached an error marker"),

            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::InvalidUnaryOp { op, type_name } => write!(
                f,
                "operator `{}` cannot be applied to {type_name}",
                op.as_symbol()
            ),
            Self::InvalidBinaryOp { op, type_name } => write!(
                f,
                "operator `{}` cannot be applied to {type_name}",
                op.as_symbol()
            ),
            Self::BinaryTypeMismatch { op, left, right } => write!(
                f,
                "operator `{}` cannot be applied to {left} and {right}",
                op.as_symbol()
            ),
            Self::NotCallable { type_name } => write!(f, "{type_name} is not callable"),
            Self::ArityMismatch { expected, got } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "expected {expected} {arg_word}, got {got}")
            }
            Self::UncomparableValues => write!(f, "function values cannot be compared"),
            Self::ShiftOutOfRange { amount } => write!(f, "shift amount {amount} out of range"),

            Self::StackOverflow { depth } => {
                write!(f, "maximum call depth exceeded (limit: {depth})")
            }

            Self::Host { message } => write!(f, "host definition failed: {message}"),
        }
    }
}

/// Secondary information attached to an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalNote {
    pub message: String,
    pub span: Option<Span>,
}

impl EvalNote {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: None,
        }
    }

    pub fn with_span(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span: Some(span),
        }
    }
}

/// One frame of an evaluation backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// Definition name, or `<lambda>` for anonymous functions.
    pub name: String,
    /// Where the call was made, if it came from an expression.
    pub span: Option<Span>,
}

/// Snapshot of the call stack where an error left its first frame.
///
/// Innermost frame first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "stack backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            write!(f, "  {i}: {}", frame.name)?;
            if let Some(span) = frame.span {
                write!(f, " at {span}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// `kind` rendered with `Display`.
    pub message: String,
    /// Node at which the error was raised.
    pub span: Option<Span>,
    /// Call chain, captured when the error leaves its first call frame.
    pub backtrace: Option<EvalBacktrace>,
    pub notes: Vec<EvalNote>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            span: None,
            backtrace: None,
            notes: Vec::new(),
        }
    }

    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// `true` for errors that indicate a defect in an upstream phase rather
    /// than a condition of the evaluated program.
    pub fn is_internal(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::UnboundVariable | ErrorCategory::Internal
        )
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach `span` unless a more precise one is already present.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: EvalNote) -> Self {
        self.notes.push(note);
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(span) = self.span {
            write!(f, " at {span}")?;
        }
        for note in &self.notes {
            write!(f, "\n  note: {}", note.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

// Lookup Errors

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_definition(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedDefinition {
        name: name.to_string(),
    })
}

// Pattern Errors

#[cold]
pub fn non_exhaustive_match(scrutinee: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NonExhaustiveMatch {
        scrutinee: scrutinee.to_string(),
    })
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn explicit_error() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ExplicitError)
}

// Typing Invariant Errors

#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

#[cold]
pub fn invalid_unary_op(op: UnaryOp, type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidUnaryOp {
        op,
        type_name: type_name.to_string(),
    })
}

#[cold]
pub fn invalid_binary_op(op: BinaryOp, type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidBinaryOp {
        op,
        type_name: type_name.to_string(),
    })
}

#[cold]
pub fn binary_type_mismatch(op: BinaryOp, left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BinaryTypeMismatch {
        op,
        left: left.to_string(),
        right: right.to_string(),
    })
}

#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: type_name.to_string(),
    })
}

#[cold]
pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch { expected, got })
}

#[cold]
pub fn uncomparable_values() -> EvalError {
    EvalError::from_kind(EvalErrorKind::UncomparableValues)
}

#[cold]
pub fn shift_out_of_range(amount: i64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ShiftOutOfRange { amount })
}

// Limit Errors

#[cold]
pub fn recursion_limit_exceeded(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth })
}

// Host Errors

#[cold]
pub fn host_error(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Host {
        message: message.into(),
    })
}
