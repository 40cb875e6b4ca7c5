//! Declared types attached to expressions by the type checker.

use crate::Name;

/// Type of an expression, as inferred upstream.
///
/// The evaluator never re-checks types; they are carried for diagnostics
/// and for hosts that render results.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    Unit,
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Str,
    Tuple(Vec<Type>),
    /// A user-declared enum, by resolved name.
    Enum(Name),
    /// Function type: parameter types and result type.
    Lambda(Vec<Type>, Box<Type>),
    /// Unsolved type variable (only present in generic definitions).
    Var(u32),
}

impl Type {
    /// Result type of a function type.
    pub fn result(&self) -> Option<&Type> {
        match self {
            Type::Lambda(_, result) => Some(result),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Type::Int8 | Type::Int16 | Type::Int32 | Type::Int64 | Type::Float32 | Type::Float64
        )
    }
}
