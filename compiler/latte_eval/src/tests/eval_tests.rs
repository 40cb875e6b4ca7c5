//! Tests for per-node evaluation rules.

use latte_ir::{BinaryOp, Literal, Span, Type, UnaryOp};

use super::Fixture;
use crate::{ErrorCategory, EvalErrorKind, Value};

mod literals {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_literal_evaluates_to_its_value() {
        let mut fx = Fixture::new();
        let opt = fx.interner.intern("Option");
        let some = fx.interner.intern("Some");

        let literals = vec![
            Literal::Unit,
            Literal::Bool(false),
            Literal::Int8(-8),
            Literal::Int16(16),
            Literal::Int32(-32),
            Literal::Int64(64),
            Literal::Float32(0.25),
            Literal::Float64(-1.5),
            Literal::str("text"),
            Literal::Tuple(vec![Literal::Int32(1), Literal::Bool(true)]),
            Literal::tag(opt, some, Literal::Tuple(vec![Literal::str("x")])),
        ];
        let ids: Vec<_> = literals
            .iter()
            .map(|lit| fx.builder().lit(lit.clone()))
            .collect();

        for (lit, id) in literals.iter().zip(ids) {
            assert_eq!(fx.eval_ok(id), Value::from_literal(lit));
        }
    }
}

mod arithmetic {
    use super::*;
    use pretty_assertions::assert_eq;

    fn eval_int(op: BinaryOp, a: i32, b: i32) -> Value {
        let mut fx = Fixture::new();
        let mut bld = fx.builder();
        let l = bld.int32(a);
        let r = bld.int32(b);
        let e = bld.binary(op, l, r);
        fx.eval_ok(e)
    }

    #[test]
    fn division_truncates() {
        assert_eq!(eval_int(BinaryOp::Div, -12, 3), Value::Int32(-4));
        assert_eq!(eval_int(BinaryOp::Div, 7, -2), Value::Int32(-3));
    }

    #[test]
    fn modulo_takes_sign_of_dividend() {
        assert_eq!(eval_int(BinaryOp::Mod, -12, 5), Value::Int32(-2));
        assert_eq!(eval_int(BinaryOp::Mod, 12, -5), Value::Int32(2));
    }

    #[test]
    fn division_by_zero_aborts_with_span() {
        let mut fx = Fixture::new();
        let mut bld = fx.builder();
        let l = bld.int32(1);
        let r = bld.int32(0);
        let e = bld.at(Span::new(10, 15)).binary(BinaryOp::Div, l, r);
        let err = fx.eval_err(e);
        assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
        assert_eq!(err.category(), ErrorCategory::ArithmeticError);
        assert_eq!(err.span, Some(Span::new(10, 15)));
    }

    #[test]
    fn nested_arithmetic() {
        // (14 - 3) * -(2)
        let mut fx = Fixture::new();
        let mut bld = fx.builder();
        let a = bld.int32(14);
        let b = bld.int32(3);
        let diff = bld.binary(BinaryOp::Sub, a, b);
        let two = bld.int32(2);
        let neg = bld.unary(UnaryOp::Minus, two);
        let e = bld.binary(BinaryOp::Mul, diff, neg);
        assert_eq!(fx.eval_ok(e), Value::Int32(-22));
    }
}

mod equality {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn equal_tuples_and_tags_compare_true() {
        let mut fx = Fixture::new();
        let e = fx.interner.intern("Shape");
        let circle = fx.interner.intern("Circle");

        let mut bld = fx.builder();
        let mk = |bld: &mut latte_ir::ExprBuilder<'_>, n: i32| {
            let one = bld.int32(1);
            let s = bld.str("s");
            let payload = bld.int32(n);
            let tag = bld.tag(e, circle, payload);
            bld.tuple([one, s, tag])
        };
        let left = mk(&mut bld, 4);
        let right = mk(&mut bld, 4);
        let other = mk(&mut bld, 5);
        let same = bld.binary(BinaryOp::Eq, left, right);
        let differ = bld.binary(BinaryOp::Eq, left, other);
        let not_equal = bld.binary(BinaryOp::NotEq, left, other);

        assert_eq!(fx.eval_ok(same), Value::Bool(true));
        assert_eq!(fx.eval_ok(differ), Value::Bool(false));
        assert_eq!(fx.eval_ok(not_equal), Value::Bool(true));
    }

    #[test]
    fn comparing_lambdas_is_an_internal_error() {
        let mut fx = Fixture::new();
        let x = fx.interner.intern("x");
        let mut bld = fx.builder();
        let body = bld.var(x, Type::Int32);
        let f = bld.lambda([(x, Type::Int32)], body);
        let e = bld.binary(BinaryOp::Eq, f, f);
        let err = fx.eval_err(e);
        assert_eq!(err.kind, EvalErrorKind::UncomparableValues);
        assert!(err.is_internal());
    }
}

mod strictness {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn and_evaluates_both_operands() {
        // false && (1 / 0 == 0)
        let mut fx = Fixture::new();
        let mut bld = fx.builder();
        let f = bld.bool(false);
        let one = bld.int32(1);
        let zero = bld.int32(0);
        let div = bld.binary(BinaryOp::Div, one, zero);
        let zero2 = bld.int32(0);
        let cmp = bld.binary(BinaryOp::Eq, div, zero2);
        let and = bld.binary(BinaryOp::And, f, cmp);
        assert_eq!(fx.eval_err(and).kind, EvalErrorKind::DivisionByZero);
    }

    #[test]
    fn or_evaluates_both_operands() {
        let mut fx = Fixture::new();
        let mut bld = fx.builder();
        let t = bld.bool(true);
        let err = bld.error(Type::Bool);
        let or = bld.binary(BinaryOp::Or, t, err);
        assert_eq!(fx.eval_err(or).kind, EvalErrorKind::ExplicitError);
    }

    #[test]
    fn left_operand_fails_first() {
        let mut fx = Fixture::new();
        let x = fx.interner.intern("x");
        let mut bld = fx.builder();
        let unbound = bld.var(x, Type::Int32);
        let err = bld.error(Type::Int32);
        let add = bld.binary(BinaryOp::Add, unbound, err);
        assert!(matches!(
            fx.eval_err(add).kind,
            EvalErrorKind::UndefinedVariable { ref name } if name == "x"
        ));
    }
}

mod bindings {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nested_lets() {
        // let x = 14 - 3 in let y = 2 * 4 in x + y
        let mut fx = Fixture::new();
        let x = fx.interner.intern("x");
        let y = fx.interner.intern("y");
        let mut bld = fx.builder();
        let a = bld.int32(14);
        let b = bld.int32(3);
        let bound_x = bld.binary(BinaryOp::Sub, a, b);
        let c = bld.int32(2);
        let d = bld.int32(4);
        let bound_y = bld.binary(BinaryOp::Mul, c, d);
        let vx = bld.var(x, Type::Int32);
        let vy = bld.var(y, Type::Int32);
        let sum = bld.binary(BinaryOp::Add, vx, vy);
        let inner = bld.let_in(y, bound_y, sum);
        let outer = bld.let_in(x, bound_x, inner);
        assert_eq!(fx.eval_ok(outer), Value::Int32(19));
    }

    #[test]
    fn inner_let_shadows_outer() {
        // let x = 1 in (let x = 2 in x, x)
        let mut fx = Fixture::new();
        let x = fx.interner.intern("x");
        let mut bld = fx.builder();
        let one = bld.int32(1);
        let two = bld.int32(2);
        let inner_x = bld.var(x, Type::Int32);
        let inner = bld.let_in(x, two, inner_x);
        let outer_x = bld.var(x, Type::Int32);
        let pair = bld.tuple([inner, outer_x]);
        let e = bld.let_in(x, one, pair);
        assert_eq!(
            fx.eval_ok(e),
            Value::tuple(vec![Value::Int32(2), Value::Int32(1)])
        );
    }

    #[test]
    fn unbound_variable_is_fatal() {
        let mut fx = Fixture::new();
        let ghost = fx.interner.intern("ghost");
        let e = fx.builder().var(ghost, Type::Unit);
        let err = fx.eval_err(e);
        assert_eq!(err.category(), ErrorCategory::UnboundVariable);
        assert_eq!(err.message, "unbound variable: ghost");
    }
}

mod conditionals {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn only_the_taken_branch_is_evaluated() {
        let mut fx = Fixture::new();
        let mut bld = fx.builder();
        let c = bld.bool(true);
        let t = bld.str("yes");
        let f = bld.error(Type::Str);
        let e = bld.if_then_else(c, t, f);

        let c2 = bld.bool(false);
        let t2 = bld.error(Type::Str);
        let f2 = bld.str("no");
        let e2 = bld.if_then_else(c2, t2, f2);

        assert_eq!(fx.eval_ok(e), Value::string("yes"));
        assert_eq!(fx.eval_ok(e2), Value::string("no"));
    }

    #[test]
    fn non_bool_condition_is_a_type_mismatch() {
        let mut fx = Fixture::new();
        let mut bld = fx.builder();
        let c = bld.int32(1);
        let t = bld.unit();
        let f = bld.unit();
        let e = bld.if_then_else(c, t, f);
        assert_eq!(
            fx.eval_err(e).kind,
            EvalErrorKind::TypeMismatch {
                expected: "Bool".to_string(),
                got: "Int32".to_string(),
            }
        );
    }
}

mod constructors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tuple_elements_evaluate_left_to_right() {
        let mut fx = Fixture::new();
        let mut bld = fx.builder();
        let a = bld.int32(1);
        let b = bld.bool(true);
        let c = bld.unit();
        let t = bld.tuple([a, b, c]);
        assert_eq!(
            fx.eval_ok(t),
            Value::tuple(vec![Value::Int32(1), Value::Bool(true), Value::Unit])
        );
    }

    #[test]
    fn first_failing_element_wins() {
        let mut fx = Fixture::new();
        let mut bld = fx.builder();
        let a = bld.at(Span::new(1, 2)).error(Type::Unit);
        let b = bld.at(Span::new(3, 4)).error(Type::Unit);
        let t = bld.at(Span::new(0, 5)).tuple([a, b]);
        assert_eq!(fx.eval_err(t).span, Some(Span::new(1, 2)));
    }

    #[test]
    fn tag_wraps_evaluated_payload() {
        let mut fx = Fixture::new();
        let lattice = fx.interner.intern("ConstProp");
        let val = fx.interner.intern("Val");
        let mut bld = fx.builder();
        let a = bld.int32(2);
        let b = bld.int32(2);
        let sum = bld.binary(BinaryOp::Add, a, b);
        let tag = bld.tag(lattice, val, sum);
        let value = fx.eval_ok(tag);
        assert_eq!(value, Value::tag(lattice, val, Value::Int32(4)));
        assert_eq!(fx.render(&value), "Val(4)");
    }

    #[test]
    fn error_node_always_fails() {
        let mut fx = Fixture::new();
        let e = fx.builder().at(Span::new(7, 9)).error(Type::Int64);
        let err = fx.eval_err(e);
        assert_eq!(err.category(), ErrorCategory::ExplicitError);
        assert_eq!(err.to_string(), "reached an error marker at 7..9");
    }
}
