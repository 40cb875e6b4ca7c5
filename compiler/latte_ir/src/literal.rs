//! Compile-time constants embedded in the program tree.

use crate::{Name, Type};

/// A literal constant.
///
/// Mirrors the data half of the runtime value model; the evaluator converts
/// a literal to the isomorphic value, recursing through tuples and tags.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    Unit,
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Str(String),
    Tuple(Vec<Literal>),
    Tag {
        enum_name: Name,
        tag_name: Name,
        payload: Box<Literal>,
    },
}

impl Literal {
    pub fn str(s: impl Into<String>) -> Self {
        Literal::Str(s.into())
    }

    pub fn tag(enum_name: Name, tag_name: Name, payload: Literal) -> Self {
        Literal::Tag {
            enum_name,
            tag_name,
            payload: Box::new(payload),
        }
    }

    /// The type of this literal.
    pub fn ty(&self) -> Type {
        match self {
            Literal::Unit => Type::Unit,
            Literal::Bool(_) => Type::Bool,
            Literal::Int8(_) => Type::Int8,
            Literal::Int16(_) => Type::Int16,
            Literal::Int32(_) => Type::Int32,
            Literal::Int64(_) => Type::Int64,
            Literal::Float32(_) => Type::Float32,
            Literal::Float64(_) => Type::Float64,
            Literal::Str(_) => Type::Str,
            Literal::Tuple(elems) => Type::Tuple(elems.iter().map(Literal::ty).collect()),
            Literal::Tag { enum_name, .. } => Type::Enum(*enum_name),
        }
    }
}
