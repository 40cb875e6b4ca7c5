//! Pattern matching.
//!
//! `try_match` tests a value against one pattern and, on success, returns
//! the variables the pattern binds. Matching is all or nothing: a failed
//! match never leaks the bindings collected before the failure.

use latte_ir::{ExprArena, Literal, Pattern, PatternId};

use crate::{Bindings, Value};

/// Match `value` against `pattern`.
///
/// Returns `None` when the value does not match. Bindings appear in
/// left-to-right pattern order.
pub fn try_match(arena: &ExprArena, pattern: PatternId, value: &Value) -> Option<Bindings> {
    let mut bindings = Bindings::new();
    if match_into(arena, pattern, value, &mut bindings) {
        Some(bindings)
    } else {
        None
    }
}

fn match_into(arena: &ExprArena, pattern: PatternId, value: &Value, out: &mut Bindings) -> bool {
    match arena.pattern(pattern) {
        Pattern::Wildcard => true,
        Pattern::Var(name) => {
            out.push((*name, value.clone()));
            true
        }
        Pattern::Lit(lit) => literal_eq(lit, value),
        Pattern::Tag {
            enum_name,
            tag_name,
            payload,
        } => match value {
            Value::Tag {
                enum_name: e,
                tag_name: t,
                payload: inner,
            } if e == enum_name && t == tag_name => match_into(arena, *payload, inner, out),
            _ => false,
        },
        Pattern::Tuple(range) => {
            let Value::Tuple(elems) = value else {
                return false;
            };
            let patterns = arena.get_pattern_list(*range);
            // Arity is guaranteed by the type checker; a mismatch is no match.
            patterns.len() == elems.len()
                && patterns
                    .iter()
                    .zip(elems.iter())
                    .all(|(p, v)| match_into(arena, *p, v, out))
        }
    }
}

/// Structural equality between a literal and a value, without building a
/// value from the literal.
fn literal_eq(lit: &Literal, value: &Value) -> bool {
    match (lit, value) {
        (Literal::Unit, Value::Unit) => true,
        (Literal::Bool(a), Value::Bool(b)) => a == b,
        (Literal::Int8(a), Value::Int8(b)) => a == b,
        (Literal::Int16(a), Value::Int16(b)) => a == b,
        (Literal::Int32(a), Value::Int32(b)) => a == b,
        (Literal::Int64(a), Value::Int64(b)) => a == b,
        (Literal::Float32(a), Value::Float32(b)) => a == b,
        (Literal::Float64(a), Value::Float64(b)) => a == b,
        (Literal::Str(a), Value::Str(b)) => a.as_str() == b.as_str(),
        (Literal::Tuple(lits), Value::Tuple(elems)) => {
            lits.len() == elems.len()
                && lits.iter().zip(elems.iter()).all(|(l, v)| literal_eq(l, v))
        }
        (
            Literal::Tag {
                enum_name: e1,
                tag_name: t1,
                payload: p1,
            },
            Value::Tag {
                enum_name: e2,
                tag_name: t2,
                payload: p2,
            },
        ) => e1 == e2 && t1 == t2 && literal_eq(p1, p2),
        _ => false,
    }
}
