//! Binary operator implementations for the evaluator.
//!
//! Dispatch is a direct match on the operand pair. Both operands always have
//! the same type in a well-typed tree; a mixed pair is an internal error.
//!
//! Integer arithmetic wraps at the width of the operand type. Division and
//! remainder truncate toward zero and fail on a zero divisor. Float
//! arithmetic follows IEEE 754.

use latte_ir::BinaryOp;

use crate::{
    binary_type_mismatch, division_by_zero, invalid_binary_op, modulo_by_zero,
    shift_out_of_range, uncomparable_values, EvalResult, Value,
};

/// Evaluate a binary operation on two already-evaluated operands.
///
/// `And` and `Or` are strict: both sides have been evaluated by the time
/// they arrive here.
#[expect(
    clippy::needless_pass_by_value,
    reason = "callers hand over freshly evaluated operands"
)]
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    if matches!(op, BinaryOp::Eq | BinaryOp::NotEq) {
        let eq = structural_eq(&left, &right)?;
        return Ok(Value::Bool(if op == BinaryOp::Eq { eq } else { !eq }));
    }

    match (&left, &right) {
        (Value::Int8(a), Value::Int8(b)) => eval_i8(*a, *b, op),
        (Value::Int16(a), Value::Int16(b)) => eval_i16(*a, *b, op),
        (Value::Int32(a), Value::Int32(b)) => eval_i32(*a, *b, op),
        (Value::Int64(a), Value::Int64(b)) => eval_i64(*a, *b, op),
        (Value::Float32(a), Value::Float32(b)) => eval_f32(*a, *b, op),
        (Value::Float64(a), Value::Float64(b)) => eval_f64(*a, *b, op),
        (Value::Bool(a), Value::Bool(b)) => eval_bool(*a, *b, op),
        _ if std::mem::discriminant(&left) == std::mem::discriminant(&right) => {
            Err(invalid_binary_op(op, left.type_name()))
        }
        _ => Err(binary_type_mismatch(op, left.type_name(), right.type_name())),
    }
}

/// Structural equality for the `==` operator.
///
/// Closures have no meaningful equality; comparing anything that contains
/// one is an error.
pub fn structural_eq(left: &Value, right: &Value) -> Result<bool, crate::EvalError> {
    if left.contains_closure() || right.contains_closure() {
        return Err(uncomparable_values());
    }
    if std::mem::discriminant(left) != std::mem::discriminant(right) {
        return Err(binary_type_mismatch(
            BinaryOp::Eq,
            left.type_name(),
            right.type_name(),
        ));
    }
    Ok(left == right)
}

macro_rules! int_binary {
    ($name:ident, $ty:ty, $variant:ident) => {
        fn $name(a: $ty, b: $ty, op: BinaryOp) -> EvalResult {
            let value = match op {
                BinaryOp::Add => Value::$variant(a.wrapping_add(b)),
                BinaryOp::Sub => Value::$variant(a.wrapping_sub(b)),
                BinaryOp::Mul => Value::$variant(a.wrapping_mul(b)),
                BinaryOp::Div => {
                    if b == 0 {
                        return Err(division_by_zero());
                    }
                    // MIN / -1 wraps to MIN.
                    Value::$variant(a.wrapping_div(b))
                }
                BinaryOp::Mod => {
                    if b == 0 {
                        return Err(modulo_by_zero());
                    }
                    Value::$variant(a.wrapping_rem(b))
                }
                BinaryOp::Lt => Value::Bool(a < b),
                BinaryOp::LtEq => Value::Bool(a <= b),
                BinaryOp::Gt => Value::Bool(a > b),
                BinaryOp::GtEq => Value::Bool(a >= b),
                BinaryOp::BitAnd => Value::$variant(a & b),
                BinaryOp::BitOr => Value::$variant(a | b),
                BinaryOp::BitXor => Value::$variant(a ^ b),
                BinaryOp::Shl => Value::$variant(a.wrapping_shl(shift_amount(i64::from(b), <$ty>::BITS)?)),
                BinaryOp::Shr => Value::$variant(a.wrapping_shr(shift_amount(i64::from(b), <$ty>::BITS)?)),
                BinaryOp::Eq | BinaryOp::NotEq | BinaryOp::And | BinaryOp::Or => {
                    return Err(invalid_binary_op(op, stringify!($variant)));
                }
            };
            Ok(value)
        }
    };
}

int_binary!(eval_i8, i8, Int8);
int_binary!(eval_i16, i16, Int16);
int_binary!(eval_i32, i32, Int32);
int_binary!(eval_i64, i64, Int64);

/// Validate a shift amount against the bit width of the shifted type.
fn shift_amount(amount: i64, bits: u32) -> Result<u32, crate::EvalError> {
    match u32::try_from(amount) {
        Ok(n) if n < bits => Ok(n),
        _ => Err(shift_out_of_range(amount)),
    }
}

macro_rules! float_binary {
    ($name:ident, $ty:ty, $variant:ident) => {
        fn $name(a: $ty, b: $ty, op: BinaryOp) -> EvalResult {
            let value = match op {
                BinaryOp::Add => Value::$variant(a + b),
                BinaryOp::Sub => Value::$variant(a - b),
                BinaryOp::Mul => Value::$variant(a * b),
                BinaryOp::Div => Value::$variant(a / b),
                BinaryOp::Mod => Value::$variant(a % b),
                BinaryOp::Lt => Value::Bool(a < b),
                BinaryOp::LtEq => Value::Bool(a <= b),
                BinaryOp::Gt => Value::Bool(a > b),
                BinaryOp::GtEq => Value::Bool(a >= b),
                _ => return Err(invalid_binary_op(op, stringify!($variant))),
            };
            Ok(value)
        }
    };
}

float_binary!(eval_f32, f32, Float32);
float_binary!(eval_f64, f64, Float64);

fn eval_bool(a: bool, b: bool, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::And => Ok(Value::Bool(a && b)),
        BinaryOp::Or => Ok(Value::Bool(a || b)),
        _ => Err(invalid_binary_op(op, "Bool")),
    }
}
