//! Property-based tests for the evaluator.
//!
//! - Integer division and remainder agree with truncating semantics
//! - `==` agrees with structural equality of the built values
//! - `let` shadowing always resolves to the innermost binding

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use latte_eval::{Environment, ErrorCategory, Interpreter, Root, Value};
use latte_ir::{BinaryOp, ExprArena, ExprBuilder, ExprId, StringInterner, Type};
use proptest::prelude::*;

fn eval(interner: &StringInterner, arena: &ExprArena, id: ExprId) -> Result<Value, latte_eval::EvalError> {
    let root = Root::new();
    Interpreter::new(interner, arena, &root).eval(id, &Environment::empty())
}

fn binary_i32(op: BinaryOp, a: i32, b: i32) -> Result<Value, latte_eval::EvalError> {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let mut bld = ExprBuilder::new(&mut arena);
    let l = bld.int32(a);
    let r = bld.int32(b);
    let e = bld.binary(op, l, r);
    eval(&interner, &arena, e)
}

fn binary_i64(op: BinaryOp, a: i64, b: i64) -> Result<Value, latte_eval::EvalError> {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let mut bld = ExprBuilder::new(&mut arena);
    let l = bld.int64(a);
    let r = bld.int64(b);
    let e = bld.binary(op, l, r);
    eval(&interner, &arena, e)
}

proptest! {
    #[test]
    fn division_truncates_toward_zero(a in any::<i32>(), b in any::<i32>()) {
        let result = binary_i32(BinaryOp::Div, a, b);
        if b == 0 {
            prop_assert_eq!(result.unwrap_err().category(), ErrorCategory::ArithmeticError);
        } else {
            prop_assert_eq!(result.unwrap(), Value::Int32(a.wrapping_div(b)));
        }
    }

    #[test]
    fn remainder_takes_sign_of_dividend(a in any::<i64>(), b in any::<i64>()) {
        let result = binary_i64(BinaryOp::Mod, a, b);
        if b == 0 {
            prop_assert_eq!(result.unwrap_err().category(), ErrorCategory::ArithmeticError);
        } else {
            let rem = a.wrapping_rem(b);
            prop_assert_eq!(result.unwrap(), Value::Int64(rem));
            prop_assert!(rem == 0 || (rem < 0) == (a < 0));
        }
    }

    #[test]
    fn quotient_and_remainder_recompose(a in any::<i32>(), b in any::<i32>().prop_filter("non-zero", |b| *b != 0)) {
        let q = binary_i32(BinaryOp::Div, a, b).unwrap();
        let r = binary_i32(BinaryOp::Mod, a, b).unwrap();
        let (Value::Int32(q), Value::Int32(r)) = (q, r) else {
            panic!("integer operands produced a non-integer");
        };
        prop_assert_eq!(q.wrapping_mul(b).wrapping_add(r), a);
    }

    #[test]
    fn addition_wraps(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(binary_i32(BinaryOp::Add, a, b).unwrap(), Value::Int32(a.wrapping_add(b)));
    }

    #[test]
    fn equality_matches_structure(xs in prop::collection::vec(any::<i32>(), 0..6), ys in prop::collection::vec(any::<i32>(), 0..6)) {
        let interner = StringInterner::new();
        let mut arena = ExprArena::new();
        let mut bld = ExprBuilder::new(&mut arena);
        let left: Vec<_> = xs.iter().map(|x| bld.int32(*x)).collect();
        let right: Vec<_> = ys.iter().map(|y| bld.int32(*y)).collect();
        let l = bld.tuple(left);
        let r = bld.tuple(right);
        let e = bld.binary(BinaryOp::Eq, l, r);

        // Differing arities would be rejected by the type checker; the
        // evaluator still answers structurally.
        prop_assert_eq!(eval(&interner, &arena, e).unwrap(), Value::Bool(xs == ys));
    }

    #[test]
    fn innermost_let_wins(values in prop::collection::vec(any::<i64>(), 1..32)) {
        let interner = StringInterner::new();
        let x = interner.intern("x");
        let mut arena = ExprArena::new();
        let mut bld = ExprBuilder::new(&mut arena);
        let mut body = bld.var(x, Type::Int64);
        for v in values.iter().rev() {
            let bound = bld.int64(*v);
            body = bld.let_in(x, bound, body);
        }
        // values[0] is bound outermost, the last value innermost.
        let expected = *values.last().unwrap();
        prop_assert_eq!(eval(&interner, &arena, body).unwrap(), Value::Int64(expected));
    }
}
