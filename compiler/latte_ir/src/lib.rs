//! Latte IR - the resolved, typed, simplified program tree.
//!
//! Upstream phases (parsing, resolution, type checking, simplification) hand
//! the evaluator a program expressed in these types:
//! - [`Name`]s for interned identifiers and fully-resolved global names
//! - [`Literal`]s, [`Type`]s, and operators
//! - an [`ExprArena`] holding every expression, match arm, and pattern
//!
//! # Design
//!
//! - **Intern everything**: identifiers are `Name(u32)`, equality is O(1).
//! - **Flatten everything**: children are `ExprId`/`PatternId` indices into the
//!   arena, lists are `(start, len)` ranges. The arena is append-only while a
//!   program is being built and read-only while it is evaluated.

mod arena;
mod builder;
mod expr;
mod interner;
mod literal;
mod name;
mod operators;
mod span;
mod ty;

pub use arena::{ExprArena, SharedArena};
pub use builder::ExprBuilder;
pub use expr::{
    ArmRange, Expr, ExprId, ExprKind, ExprRange, MatchArm, Param, ParamRange, Pattern, PatternId,
    PatternRange,
};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use literal::Literal;
pub use name::Name;
pub use operators::{BinaryOp, UnaryOp};
pub use span::Span;
pub use ty::Type;
