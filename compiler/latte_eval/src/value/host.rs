//! Host-side representation of evaluation results.

use std::fmt;

/// A [`Value`](super::Value) with every name resolved to a string and no
/// reference to the program it came from.
///
/// Closures cannot leave the evaluator; they are reported by arity only.
#[derive(Clone, Debug, PartialEq)]
pub enum HostValue {
    Unit,
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Str(String),
    Tuple(Vec<HostValue>),
    Tag {
        enum_name: String,
        tag_name: String,
        payload: Box<HostValue>,
    },
    Function {
        arity: usize,
    },
}

impl HostValue {
    pub fn tag(enum_name: &str, tag_name: &str, payload: HostValue) -> Self {
        HostValue::Tag {
            enum_name: enum_name.to_string(),
            tag_name: tag_name.to_string(),
            payload: Box::new(payload),
        }
    }
}

impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostValue::Unit => write!(f, "()"),
            HostValue::Bool(b) => write!(f, "{b}"),
            HostValue::Int8(n) => write!(f, "{n}"),
            HostValue::Int16(n) => write!(f, "{n}"),
            HostValue::Int32(n) => write!(f, "{n}"),
            HostValue::Int64(n) => write!(f, "{n}"),
            HostValue::Float32(x) => write!(f, "{x:?}"),
            HostValue::Float64(x) => write!(f, "{x:?}"),
            HostValue::Str(s) => write!(f, "{s:?}"),
            HostValue::Tuple(elems) => {
                write!(f, "(")?;
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{elem}")?;
                }
                write!(f, ")")
            }
            HostValue::Tag {
                tag_name, payload, ..
            } => match payload.as_ref() {
                HostValue::Unit => write!(f, "{tag_name}"),
                HostValue::Tuple(_) => write!(f, "{tag_name}{payload}"),
                _ => write!(f, "{tag_name}({payload})"),
            },
            HostValue::Function { arity } => write!(f, "<closure/{arity}>"),
        }
    }
}
