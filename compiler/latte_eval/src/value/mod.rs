//! Runtime values.
//!
//! The data half of a value (unit, booleans, sized numbers, strings, tuples,
//! tags) mirrors [`Literal`] one to one. The only value with no literal form
//! is a closure.
//!
//! Compound payloads live behind [`Heap`], whose constructor is private to
//! this crate. Values are built through the factory methods:
//!
//! ```text
//! let s = Value::string("hello");              // OK
//! let t = Value::tuple(vec![Value::Int32(1)]); // OK
//! let s = Value::Str(Heap::new(...));          // ERROR: Heap::new is pub(crate)
//! ```
//!
//! Every value is immutable after construction and cheap to clone.

mod display;
mod heap;
mod host;

use std::fmt;
use std::sync::Arc;

use latte_ir::{ExprId, Literal, Name, StringInterner};

use crate::Environment;

pub use display::ValueDisplay;
pub use heap::Heap;
pub use host::HostValue;

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    Unit,
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Str(Heap<String>),
    Tuple(Heap<Vec<Value>>),
    Tag {
        enum_name: Name,
        tag_name: Name,
        payload: Heap<Value>,
    },
    Closure(FunctionValue),
}

/// A lambda paired with the environment it was evaluated in.
///
/// Captures are frozen at creation; later bindings never reach the closure.
#[derive(Clone)]
pub struct FunctionValue {
    params: Arc<[Name]>,
    body: ExprId,
    env: Environment,
}

impl FunctionValue {
    pub fn new(params: impl Into<Arc<[Name]>>, body: ExprId, env: Environment) -> Self {
        FunctionValue {
            params: params.into(),
            body,
            env,
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    #[inline]
    pub fn params(&self) -> &[Name] {
        &self.params
    }

    #[inline]
    pub fn body(&self) -> ExprId {
        self.body
    }

    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Identity: same lambda body, same captured environment.
    pub fn same_closure(&self, other: &FunctionValue) -> bool {
        self.body == other.body && Environment::ptr_eq(&self.env, &other.env)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("params", &self.params)
            .field("body", &self.body)
            .field("env_depth", &self.env.depth())
            .finish()
    }
}

impl Value {
    // Factory Methods

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn tuple(elems: Vec<Value>) -> Self {
        Value::Tuple(Heap::new(elems))
    }

    #[inline]
    pub fn tag(enum_name: Name, tag_name: Name, payload: Value) -> Self {
        Value::Tag {
            enum_name,
            tag_name,
            payload: Heap::new(payload),
        }
    }

    #[inline]
    pub fn closure(func: FunctionValue) -> Self {
        Value::Closure(func)
    }

    /// The value isomorphic to `lit`, recursing through tuples and tags.
    pub fn from_literal(lit: &Literal) -> Self {
        match lit {
            Literal::Unit => Value::Unit,
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Int8(n) => Value::Int8(*n),
            Literal::Int16(n) => Value::Int16(*n),
            Literal::Int32(n) => Value::Int32(*n),
            Literal::Int64(n) => Value::Int64(*n),
            Literal::Float32(x) => Value::Float32(*x),
            Literal::Float64(x) => Value::Float64(*x),
            Literal::Str(s) => Value::string(s.as_str()),
            Literal::Tuple(elems) => Value::tuple(elems.iter().map(Value::from_literal).collect()),
            Literal::Tag {
                enum_name,
                tag_name,
                payload,
            } => Value::tag(*enum_name, *tag_name, Value::from_literal(payload)),
        }
    }

    // Queries

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Unit => "Unit",
            Value::Bool(_) => "Bool",
            Value::Int8(_) => "Int8",
            Value::Int16(_) => "Int16",
            Value::Int32(_) => "Int32",
            Value::Int64(_) => "Int64",
            Value::Float32(_) => "Float32",
            Value::Float64(_) => "Float64",
            Value::Str(_) => "Str",
            Value::Tuple(_) => "Tuple",
            Value::Tag { .. } => "Tag",
            Value::Closure(_) => "Closure",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Value::Tuple(elems) => Some(elems.as_slice()),
            _ => None,
        }
    }

    pub fn as_closure(&self) -> Option<&FunctionValue> {
        match self {
            Value::Closure(f) => Some(f),
            _ => None,
        }
    }

    /// `true` if a closure occurs anywhere inside this value.
    pub fn contains_closure(&self) -> bool {
        match self {
            Value::Closure(_) => true,
            Value::Tuple(elems) => elems.iter().any(Value::contains_closure),
            Value::Tag { payload, .. } => payload.contains_closure(),
            _ => false,
        }
    }

    // Rendering

    /// Render this value with names resolved through `interner`.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> ValueDisplay<'a> {
        ValueDisplay::new(self, interner)
    }

    pub fn to_host(&self, interner: &StringInterner) -> HostValue {
        match self {
            Value::Unit => HostValue::Unit,
            Value::Bool(b) => HostValue::Bool(*b),
            Value::Int8(n) => HostValue::Int8(*n),
            Value::Int16(n) => HostValue::Int16(*n),
            Value::Int32(n) => HostValue::Int32(*n),
            Value::Int64(n) => HostValue::Int64(*n),
            Value::Float32(x) => HostValue::Float32(*x),
            Value::Float64(x) => HostValue::Float64(*x),
            Value::Str(s) => HostValue::Str(s.as_str().to_string()),
            Value::Tuple(elems) => {
                HostValue::Tuple(elems.iter().map(|v| v.to_host(interner)).collect())
            }
            Value::Tag {
                enum_name,
                tag_name,
                payload,
            } => HostValue::tag(
                interner.lookup(*enum_name),
                interner.lookup(*tag_name),
                payload.to_host(interner),
            ),
            Value::Closure(f) => HostValue::Function { arity: f.arity() },
        }
    }
}

impl PartialEq for Value {
    /// Structural equality on data; closures compare by identity.
    ///
    /// The `==` operator of the language rejects closures before it gets
    /// here, see `structural_eq` in the operators module.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Unit, Value::Unit) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int8(a), Value::Int8(b)) => a == b,
            (Value::Int16(a), Value::Int16(b)) => a == b,
            (Value::Int32(a), Value::Int32(b)) => a == b,
            (Value::Int64(a), Value::Int64(b)) => a == b,
            (Value::Float32(a), Value::Float32(b)) => a == b,
            (Value::Float64(a), Value::Float64(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (
                Value::Tag {
                    enum_name: e1,
                    tag_name: t1,
                    payload: p1,
                },
                Value::Tag {
                    enum_name: e2,
                    tag_name: t2,
                    payload: p2,
                },
            ) => e1 == e2 && t1 == t2 && p1 == p2,
            (Value::Closure(a), Value::Closure(b)) => a.same_closure(b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "Unit"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int8(n) => write!(f, "Int8({n})"),
            Value::Int16(n) => write!(f, "Int16({n})"),
            Value::Int32(n) => write!(f, "Int32({n})"),
            Value::Int64(n) => write!(f, "Int64({n})"),
            Value::Float32(x) => write!(f, "Float32({x:?})"),
            Value::Float64(x) => write!(f, "Float64({x:?})"),
            Value::Str(s) => write!(f, "Str({:?})", s.as_str()),
            Value::Tuple(elems) => f.debug_tuple("Tuple").field(&elems.as_slice()).finish(),
            Value::Tag {
                enum_name,
                tag_name,
                payload,
            } => f
                .debug_struct("Tag")
                .field("enum_name", enum_name)
                .field("tag_name", tag_name)
                .field("payload", payload)
                .finish(),
            Value::Closure(func) => fmt::Debug::fmt(func, f),
        }
    }
}
