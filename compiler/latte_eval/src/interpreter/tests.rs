use latte_ir::{BinaryOp, ExprArena, ExprBuilder, StringInterner, Type};
use pretty_assertions::assert_eq;

use super::*;
use crate::EvalErrorKind;

#[test]
fn builder_defaults_to_interpret_mode() {
    let interner = StringInterner::new();
    let arena = ExprArena::new();
    let root = Root::new();
    let interp = Interpreter::new(&interner, &arena, &root);
    assert_eq!(interp.mode(), EvalMode::Interpret);
    assert_eq!(interp.call_stack().max_depth(), EvalMode::Interpret.max_call_depth());
    assert!(interp.call_stack().is_empty());
}

#[test]
fn explicit_depth_overrides_mode() {
    let interner = StringInterner::new();
    let arena = ExprArena::new();
    let root = Root::new();
    let interp = InterpreterBuilder::new(&interner, &arena, &root)
        .mode(EvalMode::Test)
        .max_call_depth(Some(9))
        .build();
    assert_eq!(interp.mode(), EvalMode::Test);
    assert_eq!(interp.call_stack().max_depth(), Some(9));

    let unlimited = InterpreterBuilder::new(&interner, &arena, &root)
        .mode(EvalMode::Bounded { max_depth: 4 })
        .max_call_depth(None)
        .build();
    assert_eq!(unlimited.call_stack().max_depth(), None);
}

#[test]
fn eval_in_a_supplied_environment() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut arena = ExprArena::new();
    let mut b = ExprBuilder::new(&mut arena);
    let vx = b.var(x, Type::Int64);
    let one = b.int64(1);
    let e = b.binary(BinaryOp::Add, vx, one);
    let root = Root::new();

    let env = Environment::empty().extend(x, Value::Int64(41));
    let result = Interpreter::new(&interner, &arena, &root).eval(e, &env);
    assert_eq!(result.ok(), Some(Value::Int64(42)));
}

#[test]
fn call_applies_a_closure_value() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut arena = ExprArena::new();
    let mut b = ExprBuilder::new(&mut arena);
    let vx = b.var(x, Type::Int32);
    let vx2 = b.var(x, Type::Int32);
    let square = b.binary(BinaryOp::Mul, vx, vx2);
    let lambda = b.lambda([(x, Type::Int32)], square);
    let root = Root::new();

    let mut interp = Interpreter::new(&interner, &arena, &root);
    let closure = interp.eval(lambda, &Environment::empty());
    let result = closure.and_then(|f| interp.call(&f, vec![Value::Int32(12)]));
    assert_eq!(result.ok(), Some(Value::Int32(144)));
    assert!(interp.call_stack().is_empty());
}

#[test]
fn force_evaluates_a_global() {
    let interner = StringInterner::new();
    let answer = interner.intern("Main.answer");
    let mut arena = ExprArena::new();
    let body = ExprBuilder::new(&mut arena).int32(42);
    let mut root = Root::new();
    root.define(answer, Thunk::Definition(body));

    let mut interp = Interpreter::new(&interner, &arena, &root);
    assert_eq!(interp.force(answer).ok(), Some(Value::Int32(42)));
    assert_eq!(interp.force(answer).ok(), Some(Value::Int32(42)));
}

#[test]
fn stack_overflow_at_depth_limit_leaves_stack_balanced() {
    // def loop = () -> loop()
    let interner = StringInterner::new();
    let name = interner.intern("Main.loop");
    let mut arena = ExprArena::new();
    let mut b = ExprBuilder::new(&mut arena);
    let fn_ty = Type::Lambda(vec![], Box::new(Type::Unit));
    let inner = b.reference(name, fn_ty.clone());
    let call = b.apply(inner, []);
    let lambda = b.lambda([], call);
    let entry = b.reference(name, fn_ty);
    let main = b.apply(entry, []);
    let mut root = Root::new();
    root.define(name, Thunk::Definition(lambda));

    let mut interp = InterpreterBuilder::new(&interner, &arena, &root)
        .mode(EvalMode::Test)
        .build();
    let err = interp.eval(main, &Environment::empty()).err();
    assert_eq!(
        err.as_ref().map(|e| e.kind.clone()),
        Some(EvalErrorKind::StackOverflow { depth: 500 })
    );
    // Snapshot taken at the deepest frame.
    assert_eq!(
        err.and_then(|e| e.backtrace).map(|bt| bt.len()),
        Some(500)
    );
    assert!(interp.call_stack().is_empty());
}

#[test]
#[cfg(not(target_arch = "wasm32"))]
fn runaway_recursion_overflows_in_default_mode() {
    // def loop = () -> loop()
    let interner = StringInterner::new();
    let name = interner.intern("Main.loop");
    let mut arena = ExprArena::new();
    let mut b = ExprBuilder::new(&mut arena);
    let fn_ty = Type::Lambda(vec![], Box::new(Type::Unit));
    let inner = b.reference(name, fn_ty.clone());
    let call = b.apply(inner, []);
    let lambda = b.lambda([], call);
    let entry = b.reference(name, fn_ty);
    let main = b.apply(entry, []);
    let mut root = Root::new();
    root.define(name, Thunk::Definition(lambda));

    let mut interp = Interpreter::new(&interner, &arena, &root);
    let err = interp.eval(main, &Environment::empty()).err();
    assert_eq!(
        err.map(|e| e.kind),
        Some(EvalErrorKind::StackOverflow {
            depth: crate::DEFAULT_MAX_CALL_DEPTH
        })
    );
    assert!(interp.call_stack().is_empty());
}
