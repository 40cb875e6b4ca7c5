//! Immutable lexical environments.
//!
//! An environment is a persistent chain of binding layers. Extending never
//! touches the original: the new layer points at its parent, so a closure
//! that captured an environment keeps seeing exactly the bindings it saw at
//! creation. Clones share structure and cost one reference-count bump.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use latte_ir::Name;

use crate::Value;

/// Bindings introduced by one scope (a lambda's parameters, a `let`, or the
/// variables of a match arm).
pub type Bindings = SmallVec<[(Name, Value); 4]>;

/// A persistent map from variable names to values.
#[derive(Clone, Default)]
pub struct Environment {
    head: Option<Arc<Layer>>,
}

struct Layer {
    bindings: Bindings,
    parent: Environment,
    depth: usize,
}

impl Environment {
    /// The environment with no bindings.
    #[inline]
    pub fn empty() -> Self {
        Environment { head: None }
    }

    /// Innermost binding of `name`, or `None`.
    pub fn lookup(&self, name: Name) -> Option<&Value> {
        let mut current = self.head.as_deref();
        while let Some(layer) = current {
            if let Some((_, value)) = layer.bindings.iter().rev().find(|(n, _)| *n == name) {
                return Some(value);
            }
            current = layer.parent.head.as_deref();
        }
        None
    }

    /// A new environment with `name` bound to `value` on top of `self`.
    #[must_use]
    pub fn extend(&self, name: Name, value: Value) -> Self {
        let mut bindings = Bindings::new();
        bindings.push((name, value));
        self.push_layer(bindings)
    }

    /// A new environment with all of `bindings` on top of `self`.
    ///
    /// Within the list a later binding shadows an earlier one of the same
    /// name. An empty list yields `self` unchanged.
    #[must_use]
    pub fn extend_all(&self, bindings: Bindings) -> Self {
        if bindings.is_empty() {
            return self.clone();
        }
        self.push_layer(bindings)
    }

    fn push_layer(&self, bindings: Bindings) -> Self {
        let depth = self.depth().saturating_add(1);
        Environment {
            head: Some(Arc::new(Layer {
                bindings,
                parent: self.clone(),
                depth,
            })),
        }
    }

    /// Number of layers in the chain.
    #[inline]
    pub fn depth(&self) -> usize {
        self.head.as_ref().map_or(0, |layer| layer.depth)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// `true` if both environments are the same chain.
    pub fn ptr_eq(a: &Environment, b: &Environment) -> bool {
        match (&a.head, &b.head) {
            (None, None) => true,
            (Some(x), Some(y)) => Arc::ptr_eq(x, y),
            _ => false,
        }
    }
}

// Unlinks uniquely owned parents one at a time so that dropping a long chain
// does not recurse once per layer.
impl Drop for Layer {
    fn drop(&mut self) {
        let mut next = self.parent.head.take();
        while let Some(layer) = next {
            match Arc::try_unwrap(layer) {
                Ok(mut layer) => next = layer.parent.head.take(),
                Err(_) => break,
            }
        }
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("depth", &self.depth())
            .finish_non_exhaustive()
    }
}
