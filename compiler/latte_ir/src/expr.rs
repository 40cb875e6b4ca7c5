//! Expression, pattern, and parameter nodes plus their arena indices.

use std::fmt;

use crate::{BinaryOp, Literal, Name, Type, UnaryOp};

macro_rules! define_id {
    ($(#[$meta:meta])* $id:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $id(u32);

        impl $id {
            /// Sentinel for "no node".
            pub const INVALID: $id = $id(u32::MAX);

            #[inline]
            pub const fn new(index: u32) -> Self {
                $id(index)
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            #[inline]
            pub const fn is_valid(self) -> bool {
                self.0 != u32::MAX
            }
        }

        impl fmt::Debug for $id {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, concat!(stringify!($id), "({})"), self.0)
                } else {
                    write!(f, concat!(stringify!($id), "::INVALID"))
                }
            }
        }

        impl Default for $id {
            fn default() -> Self {
                Self::INVALID
            }
        }
    };
}

macro_rules! define_range {
    ($(#[$meta:meta])* $range:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $range {
            pub start: u32,
            pub len: u32,
        }

        impl $range {
            pub const EMPTY: $range = $range { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                $range { start, len }
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            /// Slice bounds into the backing list.
            #[inline]
            pub const fn bounds(&self) -> std::ops::Range<usize> {
                self.start as usize..(self.start as usize + self.len as usize)
            }
        }

        impl fmt::Debug for $range {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let bounds = self.bounds();
                write!(f, concat!(stringify!($range), "({}..{})"), bounds.start, bounds.end)
            }
        }
    };
}

define_id!(
    /// Index of an expression in an [`ExprArena`](crate::ExprArena).
    ExprId
);
define_id!(
    /// Index of a pattern in an [`ExprArena`](crate::ExprArena).
    PatternId
);
define_range!(
    /// Ordered list of expressions (arguments, tuple elements).
    ExprRange
);
define_range!(
    /// Match arms, in declaration order.
    ArmRange
);
define_range!(
    /// Ordered list of sub-patterns of a tuple pattern.
    PatternRange
);
define_range!(
    /// Formal parameters of a lambda.
    ParamRange
);

/// Kind of an expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// Constant.
    Lit(Literal),
    /// Local variable bound by `let`, a lambda parameter, or a pattern.
    Var(Name),
    /// Resolved global definition, looked up in the program root.
    Ref(Name),
    /// Anonymous function; captures the environment it is evaluated in.
    Lambda { params: ParamRange, body: ExprId },
    /// Function application.
    Apply { func: ExprId, args: ExprRange },
    Unary { op: UnaryOp, operand: ExprId },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    /// `let name = bound; body`.
    Let {
        name: Name,
        bound: ExprId,
        body: ExprId,
    },
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },
    /// First matching arm wins.
    Match { scrutinee: ExprId, arms: ArmRange },
    Tuple(ExprRange),
    /// Construction of an enum case.
    Tag {
        enum_name: Name,
        tag_name: Name,
        payload: ExprId,
    },
    /// Hole or unreachable marker inserted by an upstream phase. Evaluating it
    /// always fails.
    Error,
}

/// An expression node as stored in the arena.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub ty: Type,
    pub span: crate::Span,
}

/// One `pattern => body` rule of a match.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MatchArm {
    pub pattern: PatternId,
    pub body: ExprId,
}

/// A lambda's formal parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: Name,
    pub ty: Type,
}

/// Shape matched against a value in `match` arms.
#[derive(Clone, Debug, PartialEq)]
pub enum Pattern {
    /// `_`
    Wildcard,
    /// Binds the whole value.
    Var(Name),
    /// Matches values structurally equal to the literal.
    Lit(Literal),
    /// Matches a given enum case and its payload.
    Tag {
        enum_name: Name,
        tag_name: Name,
        payload: PatternId,
    },
    /// Matches a tuple element by element.
    Tuple(PatternRange),
}
