//! Convenience constructor for arena-allocated programs.
//!
//! Used by the simplification phase when emitting IR and by tests. Declared
//! types are derived from the children wherever the children determine them;
//! leaves whose type comes from an environment (`Var`, `Ref`, `Error`) take it
//! explicitly. Where a type cannot be derived from an ill-formed tree, the
//! node gets the unsolved variable `Type::Var(0)`.

use crate::{
    BinaryOp, Expr, ExprArena, ExprId, ExprKind, Literal, MatchArm, Name, Param, Pattern,
    PatternId, Span, Type, UnaryOp,
};

const UNKNOWN: Type = Type::Var(0);

/// Appends nodes to an [`ExprArena`].
pub struct ExprBuilder<'a> {
    arena: &'a mut ExprArena,
    span: Span,
}

impl<'a> ExprBuilder<'a> {
    pub fn new(arena: &'a mut ExprArena) -> Self {
        ExprBuilder {
            arena,
            span: Span::DUMMY,
        }
    }

    /// Attach `span` to every node allocated from now on.
    pub fn at(&mut self, span: Span) -> &mut Self {
        self.span = span;
        self
    }

    /// Read access to the arena being built.
    pub fn arena(&self) -> &ExprArena {
        self.arena
    }

    fn push(&mut self, kind: ExprKind, ty: Type) -> ExprId {
        self.arena.alloc_expr(Expr {
            kind,
            ty,
            span: self.span,
        })
    }

    // Literals

    pub fn lit(&mut self, literal: Literal) -> ExprId {
        let ty = literal.ty();
        self.push(ExprKind::Lit(literal), ty)
    }

    pub fn unit(&mut self) -> ExprId {
        self.lit(Literal::Unit)
    }

    pub fn bool(&mut self, b: bool) -> ExprId {
        self.lit(Literal::Bool(b))
    }

    pub fn int32(&mut self, n: i32) -> ExprId {
        self.lit(Literal::Int32(n))
    }

    pub fn int64(&mut self, n: i64) -> ExprId {
        self.lit(Literal::Int64(n))
    }

    pub fn str(&mut self, s: &str) -> ExprId {
        self.lit(Literal::str(s))
    }

    // Names

    pub fn var(&mut self, name: Name, ty: Type) -> ExprId {
        self.push(ExprKind::Var(name), ty)
    }

    pub fn reference(&mut self, name: Name, ty: Type) -> ExprId {
        self.push(ExprKind::Ref(name), ty)
    }

    // Functions

    pub fn lambda(&mut self, params: impl IntoIterator<Item = (Name, Type)>, body: ExprId) -> ExprId {
        let params: Vec<Param> = params
            .into_iter()
            .map(|(name, ty)| Param { name, ty })
            .collect();
        let param_types = params.iter().map(|p| p.ty.clone()).collect();
        let result = self.arena.ty(body).clone();
        let params = self.arena.alloc_params(params);
        self.push(
            ExprKind::Lambda { params, body },
            Type::Lambda(param_types, Box::new(result)),
        )
    }

    pub fn apply(&mut self, func: ExprId, args: impl IntoIterator<Item = ExprId>) -> ExprId {
        let ty = self.arena.ty(func).result().cloned().unwrap_or(UNKNOWN);
        let args = self.arena.alloc_expr_list(args);
        self.push(ExprKind::Apply { func, args }, ty)
    }

    // Operators

    pub fn unary(&mut self, op: UnaryOp, operand: ExprId) -> ExprId {
        let ty = match op {
            UnaryOp::Not => Type::Bool,
            UnaryOp::Plus | UnaryOp::Minus | UnaryOp::BitNot => self.arena.ty(operand).clone(),
        };
        self.push(ExprKind::Unary { op, operand }, ty)
    }

    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let ty = if op.is_comparison() || matches!(op, BinaryOp::And | BinaryOp::Or) {
            Type::Bool
        } else {
            self.arena.ty(left).clone()
        };
        self.push(ExprKind::Binary { op, left, right }, ty)
    }

    // Binding and control flow

    pub fn let_in(&mut self, name: Name, bound: ExprId, body: ExprId) -> ExprId {
        let ty = self.arena.ty(body).clone();
        self.push(ExprKind::Let { name, bound, body }, ty)
    }

    pub fn if_then_else(&mut self, cond: ExprId, then_branch: ExprId, else_branch: ExprId) -> ExprId {
        let ty = self.arena.ty(then_branch).clone();
        self.push(
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            },
            ty,
        )
    }

    /// `match scrutinee { pattern => body, ... }`, arms in the given order.
    pub fn match_expr(
        &mut self,
        scrutinee: ExprId,
        arms: impl IntoIterator<Item = (PatternId, ExprId)>,
    ) -> ExprId {
        let arms: Vec<MatchArm> = arms
            .into_iter()
            .map(|(pattern, body)| MatchArm { pattern, body })
            .collect();
        let ty = arms
            .first()
            .map_or(UNKNOWN, |arm| self.arena.ty(arm.body).clone());
        let arms = self.arena.alloc_arms(arms);
        self.push(ExprKind::Match { scrutinee, arms }, ty)
    }

    // Data

    pub fn tuple(&mut self, elems: impl IntoIterator<Item = ExprId>) -> ExprId {
        let elems: Vec<ExprId> = elems.into_iter().collect();
        let ty = Type::Tuple(elems.iter().map(|e| self.arena.ty(*e).clone()).collect());
        let elems = self.arena.alloc_expr_list(elems);
        self.push(ExprKind::Tuple(elems), ty)
    }

    pub fn tag(&mut self, enum_name: Name, tag_name: Name, payload: ExprId) -> ExprId {
        self.push(
            ExprKind::Tag {
                enum_name,
                tag_name,
                payload,
            },
            Type::Enum(enum_name),
        )
    }

    /// Unreachable marker of the given type.
    pub fn error(&mut self, ty: Type) -> ExprId {
        self.push(ExprKind::Error, ty)
    }

    // Patterns

    pub fn pat_wildcard(&mut self) -> PatternId {
        self.arena.alloc_pattern(Pattern::Wildcard)
    }

    pub fn pat_var(&mut self, name: Name) -> PatternId {
        self.arena.alloc_pattern(Pattern::Var(name))
    }

    pub fn pat_lit(&mut self, literal: Literal) -> PatternId {
        self.arena.alloc_pattern(Pattern::Lit(literal))
    }

    pub fn pat_tag(&mut self, enum_name: Name, tag_name: Name, payload: PatternId) -> PatternId {
        self.arena.alloc_pattern(Pattern::Tag {
            enum_name,
            tag_name,
            payload,
        })
    }

    pub fn pat_tuple(&mut self, elems: impl IntoIterator<Item = PatternId>) -> PatternId {
        let elems = self.arena.alloc_pattern_list(elems);
        self.arena.alloc_pattern(Pattern::Tuple(elems))
    }
}
