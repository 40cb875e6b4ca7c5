use std::fmt;

use latte_ir::StringInterner;

use super::Value;

/// [`Value`] paired with the interner needed to print its tag names.
pub struct ValueDisplay<'a> {
    value: &'a Value,
    interner: &'a StringInterner,
}

impl<'a> ValueDisplay<'a> {
    pub(super) fn new(value: &'a Value, interner: &'a StringInterner) -> Self {
        ValueDisplay { value, interner }
    }

    fn nested(&self, value: &'a Value) -> ValueDisplay<'a> {
        ValueDisplay {
            value,
            interner: self.interner,
        }
    }
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Unit => write!(f, "()"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int8(n) => write!(f, "{n}"),
            Value::Int16(n) => write!(f, "{n}"),
            Value::Int32(n) => write!(f, "{n}"),
            Value::Int64(n) => write!(f, "{n}"),
            Value::Float32(x) => write!(f, "{x:?}"),
            Value::Float64(x) => write!(f, "{x:?}"),
            Value::Str(s) => write!(f, "{:?}", s.as_str()),
            Value::Tuple(elems) => {
                write!(f, "(")?;
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", self.nested(elem))?;
                }
                write!(f, ")")
            }
            Value::Tag {
                tag_name, payload, ..
            } => {
                let tag = self.interner.lookup(*tag_name);
                match &**payload {
                    Value::Unit => write!(f, "{tag}"),
                    Value::Tuple(_) => write!(f, "{tag}{}", self.nested(payload)),
                    other => write!(f, "{tag}({})", self.nested(other)),
                }
            }
            Value::Closure(func) => write!(f, "<closure/{}>", func.arity()),
        }
    }
}
