//! Flat storage for a program's expressions, match arms, and patterns.
//!
//! Struct-of-arrays: `kinds`, `types`, and `spans` are parallel and indexed by
//! [`ExprId`]. Lists (arguments, tuple elements, arms, sub-patterns, lambda
//! parameters) are contiguous runs in their own vectors, addressed by ranges.

use std::ops::Deref;
use std::sync::Arc;

use crate::{
    ArmRange, Expr, ExprId, ExprKind, ExprRange, MatchArm, Param, ParamRange, Pattern, PatternId,
    PatternRange, Span, Type,
};

/// # Panics
/// Panics if `n` does not fit in a `u32` index.
#[inline]
fn to_u32(n: usize, what: &str) -> u32 {
    u32::try_from(n).unwrap_or_else(|_| panic!("arena overflow: more than u32::MAX {what}"))
}

/// Arena owning every node of a program.
///
/// # Panics
/// The `alloc_*` methods panic once a table holds more than `u32::MAX` entries.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    kinds: Vec<ExprKind>,
    types: Vec<Type>,
    spans: Vec<Span>,
    expr_lists: Vec<ExprId>,
    arms: Vec<MatchArm>,
    patterns: Vec<Pattern>,
    pattern_lists: Vec<PatternId>,
    params: Vec<Param>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression node.
    ///
    /// # Panics
    /// Panics if the arena already holds `u32::MAX` expressions.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.kinds.len(), "expressions"));
        self.kinds.push(expr.kind);
        self.types.push(expr.ty);
        self.spans.push(expr.span);
        id
    }

    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.kinds[id.index()]
    }

    #[inline]
    pub fn ty(&self, id: ExprId) -> &Type {
        &self.types[id.index()]
    }

    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.spans[id.index()]
    }

    /// Reassemble the full node.
    pub fn get_expr(&self, id: ExprId) -> Expr {
        Expr {
            kind: self.kinds[id.index()].clone(),
            ty: self.types[id.index()].clone(),
            span: self.spans[id.index()],
        }
    }

    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = to_u32(self.expr_lists.len(), "list elements");
        self.expr_lists.extend(ids);
        let len = to_u32(self.expr_lists.len(), "list elements") - start;
        ExprRange::new(start, len)
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.bounds()]
    }

    pub fn alloc_arms(&mut self, arms: impl IntoIterator<Item = MatchArm>) -> ArmRange {
        let start = to_u32(self.arms.len(), "match arms");
        self.arms.extend(arms);
        let len = to_u32(self.arms.len(), "match arms") - start;
        ArmRange::new(start, len)
    }

    #[inline]
    pub fn get_arms(&self, range: ArmRange) -> &[MatchArm] {
        &self.arms[range.bounds()]
    }

    pub fn alloc_pattern(&mut self, pattern: Pattern) -> PatternId {
        let id = PatternId::new(to_u32(self.patterns.len(), "patterns"));
        self.patterns.push(pattern);
        id
    }

    #[inline]
    pub fn pattern(&self, id: PatternId) -> &Pattern {
        &self.patterns[id.index()]
    }

    pub fn alloc_pattern_list(&mut self, ids: impl IntoIterator<Item = PatternId>) -> PatternRange {
        let start = to_u32(self.pattern_lists.len(), "sub-patterns");
        self.pattern_lists.extend(ids);
        let len = to_u32(self.pattern_lists.len(), "sub-patterns") - start;
        PatternRange::new(start, len)
    }

    #[inline]
    pub fn get_pattern_list(&self, range: PatternRange) -> &[PatternId] {
        &self.pattern_lists[range.bounds()]
    }

    pub fn alloc_params(&mut self, params: impl IntoIterator<Item = Param>) -> ParamRange {
        let start = to_u32(self.params.len(), "parameters");
        self.params.extend(params);
        let len = to_u32(self.params.len(), "parameters") - start;
        ParamRange::new(start, len)
    }

    #[inline]
    pub fn get_params(&self, range: ParamRange) -> &[Param] {
        &self.params[range.bounds()]
    }

    /// Number of expression nodes.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

/// Reference-counted, read-only handle to a finished arena.
///
/// Shared between a program's root table, its host API, and worker threads.
#[derive(Clone, Debug, Default)]
pub struct SharedArena(Arc<ExprArena>);

impl SharedArena {
    pub fn new(arena: ExprArena) -> Self {
        SharedArena(Arc::new(arena))
    }
}

impl Deref for SharedArena {
    type Target = ExprArena;

    fn deref(&self) -> &ExprArena {
        &self.0
    }
}

impl From<ExprArena> for SharedArena {
    fn from(arena: ExprArena) -> Self {
        SharedArena::new(arena)
    }
}
