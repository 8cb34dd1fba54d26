use crate::num::Number;
use std::fmt;
use std::rc::Rc;

/// Enumerates all the different types of values that can appear in counted
/// input. The bigger variants are wrapped in `Rc` so cloning stays cheap, and
/// values are never mutated once built.
#[derive(Clone)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(Number),
    Sequence(Sequence),
}

#[derive(Clone)]
pub enum Sequence {
    String(Rc<String>),
    List(Rc<Vec<Value>>),
    /// An unordered structure with textual fields. Never a valid counting
    /// input, but it can appear as an element of one.
    Map(Rc<Vec<(String, Value)>>),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Undefined => ValueType::Undefined,
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Bool,
            Value::Number(_) => ValueType::Number,
            Value::Sequence(Sequence::String(_)) => ValueType::String,
            Value::Sequence(Sequence::List(_)) => ValueType::List,
            Value::Sequence(Sequence::Map(_)) => ValueType::Map,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(b1), Self::Bool(b2)) => b1.eq(b2),
            (Self::Number(n1), Self::Number(n2)) => n1.eq(n2),
            (Self::Sequence(s1), Self::Sequence(s2)) => s1.eq(s2),
            _ => false,
        }
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Sequence::String(a), Sequence::String(b)) => a == b,
            (Sequence::List(a), Sequence::List(b)) => a == b,
            (Sequence::Map(a), Sequence::Map(b)) => a == b,
            _ => false,
        }
    }
}

// -----------------------------------------------------
// Into value
// -----------------------------------------------------

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(Number::Int(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(Number::Float(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Sequence(Sequence::String(Rc::new(value)))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Sequence(Sequence::String(Rc::new(value.to_string())))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::Sequence(Sequence::List(Rc::new(
            value.into_iter().map(Into::into).collect(),
        )))
    }
}

impl From<Sequence> for Value {
    fn from(value: Sequence) -> Self {
        Self::Sequence(value)
    }
}

// ValueType

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ValueType {
    Undefined,
    Null,
    Bool,
    Number,
    String,
    List,
    Map,
}

impl From<&Value> for ValueType {
    fn from(value: &Value) -> Self {
        value.value_type()
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Bool => write!(f, "bool"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::List => write!(f, "list"),
            Self::Map => write!(f, "map"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Sequence(s) => write!(f, "{s}"),
        }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sequence::String(s) => write!(f, "{s}"),
            Sequence::List(vs) => {
                write!(f, "[")?;
                let mut vs = vs.iter().peekable();
                while let Some(v) = vs.next() {
                    if vs.peek().is_some() {
                        write!(f, "{v},")?;
                    } else {
                        write!(f, "{v}")?;
                    }
                }
                write!(f, "]")
            }
            Sequence::Map(fields) => {
                write!(f, "{{")?;
                let mut fields = fields.iter().peekable();
                while let Some((name, value)) = fields.next() {
                    if fields.peek().is_some() {
                        write!(f, "{name}: {value}, ")?;
                    } else {
                        write!(f, "{name}: {value}")?;
                    }
                }
                write!(f, "}}")
            }
        }
    }
}

/// Debug formatting quotes strings so previews of mixed input stay readable,
/// the same way the test reporter shows them.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Sequence(s) => write!(f, "{s:?}"),
        }
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sequence::String(s) => write!(f, "\"{s}\""),
            Sequence::List(vs) => {
                write!(f, "[")?;
                let mut vs = vs.iter().peekable();
                while let Some(v) = vs.next() {
                    if vs.peek().is_some() {
                        write!(f, "{v:?},")?;
                    } else {
                        write!(f, "{v:?}")?;
                    }
                }
                write!(f, "]")
            }
            Sequence::Map(fields) => {
                write!(f, "{{")?;
                let mut fields = fields.iter().peekable();
                while let Some((name, value)) = fields.next() {
                    if fields.peek().is_some() {
                        write!(f, "\"{name}\":{value:?},")?;
                    } else {
                        write!(f, "\"{name}\":{value:?}")?;
                    }
                }
                write!(f, "}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Sequence, Value, ValueType};
    use std::rc::Rc;

    #[test]
    fn equality_is_structural() {
        assert_eq!(Value::from(1), Value::from(1));
        assert_ne!(Value::from(1), Value::from("1"));
        assert_ne!(Value::Null, Value::Undefined);
        assert_eq!(Value::from(vec![1, 2]), Value::from(vec![1, 2]));
    }

    #[test]
    fn value_types_describe_themselves() {
        assert_eq!(ValueType::from(&Value::Undefined), ValueType::Undefined);
        assert_eq!(Value::from("x").value_type(), ValueType::String);
        assert_eq!(ValueType::List.to_string(), "list");
    }

    #[test]
    fn display_renders_lists_with_brackets() {
        let list = Value::from(vec![Value::from(1), Value::from("a"), Value::Null]);
        assert_eq!(list.to_string(), "[1,a,null]");
    }

    #[test]
    fn debug_quotes_strings() {
        let list = Value::from(vec![Value::from(1), Value::from("a"), Value::Undefined]);
        assert_eq!(format!("{list:?}"), "[1,\"a\",undefined]");
    }

    #[test]
    fn debug_renders_map_fields() {
        let map = Value::Sequence(Sequence::Map(Rc::new(vec![
            ("a".to_string(), Value::from(1)),
            ("b".to_string(), Value::from(2)),
        ])));
        assert_eq!(format!("{map:?}"), "{\"a\":1,\"b\":2}");
    }
}
