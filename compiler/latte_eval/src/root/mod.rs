//! The table of global definitions.
//!
//! Every top-level definition is stored as a thunk: either the body
//! expression of a user definition, or a host-provided function. Each
//! `Ref` to a definition forces its thunk afresh; nothing is cached.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use latte_ir::{ExprId, Name};

use crate::EvalResult;

/// Host-provided definition.
pub type HostFn = Arc<dyn Fn() -> EvalResult + Send + Sync>;

/// A delayed global definition.
#[derive(Clone)]
pub enum Thunk {
    /// A definition body, evaluated in the empty environment on each force.
    Definition(ExprId),
    /// A host function, called on each force.
    Host(HostFn),
}

impl Thunk {
    pub fn host(f: impl Fn() -> EvalResult + Send + Sync + 'static) -> Self {
        Thunk::Host(Arc::new(f))
    }
}

impl fmt::Debug for Thunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Thunk::Definition(body) => f.debug_tuple("Definition").field(body).finish(),
            Thunk::Host(_) => write!(f, "Host(..)"),
        }
    }
}

/// Map from fully-resolved global names to thunks.
///
/// Read-only during evaluation.
#[derive(Clone, Debug, Default)]
pub struct Root {
    definitions: FxHashMap<Name, Thunk>,
}

impl Root {
    pub fn new() -> Self {
        Root::default()
    }

    /// Register `thunk` under `name`, returning the thunk it replaced.
    pub fn define(&mut self, name: Name, thunk: Thunk) -> Option<Thunk> {
        self.definitions.insert(name, thunk)
    }

    #[inline]
    pub fn lookup(&self, name: Name) -> Option<&Thunk> {
        self.definitions.get(&name)
    }

    pub fn contains(&self, name: Name) -> bool {
        self.definitions.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Defined names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = Name> + '_ {
        self.definitions.keys().copied()
    }
}
