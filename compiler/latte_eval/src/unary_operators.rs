//! Unary operator implementations for the evaluator.

use latte_ir::UnaryOp;

use crate::{invalid_unary_op, EvalResult, Value};

/// Evaluate a unary operation on an already-evaluated operand.
#[expect(
    clippy::needless_pass_by_value,
    reason = "mirrors evaluate_binary, which consumes its operands"
)]
pub fn evaluate_unary(value: Value, op: UnaryOp) -> EvalResult {
    match (&value, op) {
        // Logical not
        (Value::Bool(b), UnaryOp::Not) => Ok(Value::Bool(!b)),

        // Numeric identity
        (
            Value::Int8(_)
            | Value::Int16(_)
            | Value::Int32(_)
            | Value::Int64(_)
            | Value::Float32(_)
            | Value::Float64(_),
            UnaryOp::Plus,
        ) => Ok(value.clone()),

        // Numeric negation, wrapping MIN to MIN
        (Value::Int8(n), UnaryOp::Minus) => Ok(Value::Int8(n.wrapping_neg())),
        (Value::Int16(n), UnaryOp::Minus) => Ok(Value::Int16(n.wrapping_neg())),
        (Value::Int32(n), UnaryOp::Minus) => Ok(Value::Int32(n.wrapping_neg())),
        (Value::Int64(n), UnaryOp::Minus) => Ok(Value::Int64(n.wrapping_neg())),
        (Value::Float32(x), UnaryOp::Minus) => Ok(Value::Float32(-x)),
        (Value::Float64(x), UnaryOp::Minus) => Ok(Value::Float64(-x)),

        // Bitwise not
        (Value::Int8(n), UnaryOp::BitNot) => Ok(Value::Int8(!n)),
        (Value::Int16(n), UnaryOp::BitNot) => Ok(Value::Int16(!n)),
        (Value::Int32(n), UnaryOp::BitNot) => Ok(Value::Int32(!n)),
        (Value::Int64(n), UnaryOp::BitNot) => Ok(Value::Int64(!n)),

        _ => Err(invalid_unary_op(op, value.type_name())),
    }
}
