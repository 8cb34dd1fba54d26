use crate::value::{Sequence, Value};
use std::borrow::Borrow;
use std::fmt;
use std::fmt::Formatter;

/// The canonical textual identity used to group values while counting. Two
/// values fall into the same bucket iff their keys are equal.
///
/// The conversion reproduces generic object-property coercion on purpose:
/// numbers render as decimal text, booleans as `true`/`false`, `Undefined`
/// and `Null` as the literal texts `undefined` and `null`, strings as
/// themselves, lists as their elements joined with `,` (where `Null` and
/// `Undefined` elements render empty), and maps as `[object Object]`. As a
/// consequence the number `1` and the string `"1"` share the key `1` and are
/// counted together; that merging is intentional.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(String);

impl Key {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Value {
    /// The documented `toCanonicalKey` operation: see [`Key`] for the rules.
    #[must_use]
    pub fn canonical_key(&self) -> Key {
        Key::from(self)
    }
}

impl From<&Value> for Key {
    fn from(value: &Value) -> Self {
        Key(Coerced(value).to_string())
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display adapter that writes the coerced text of a value.
struct Coerced<'a>(&'a Value);

impl fmt::Display for Coerced<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Sequence(Sequence::String(s)) => f.write_str(s),
            Value::Sequence(Sequence::List(items)) => {
                let mut items = items.iter().peekable();
                while let Some(item) = items.next() {
                    // inside a list join the two markers render empty
                    match item {
                        Value::Undefined | Value::Null => {}
                        other => write!(f, "{}", Coerced(other))?,
                    }
                    if items.peek().is_some() {
                        f.write_str(",")?;
                    }
                }
                Ok(())
            }
            Value::Sequence(Sequence::Map(_)) => f.write_str("[object Object]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Key;
    use crate::value::{Sequence, Value};
    use std::rc::Rc;

    fn key(value: &Value) -> String {
        Key::from(value).into_string()
    }

    #[test]
    fn markers_have_distinct_keys() {
        assert_eq!(key(&Value::Undefined), "undefined");
        assert_eq!(key(&Value::Null), "null");
        assert_ne!(Value::Undefined.canonical_key(), Value::Null.canonical_key());
    }

    #[test]
    fn number_and_its_text_share_a_key() {
        assert_eq!(Value::from(1).canonical_key(), Value::from("1").canonical_key());
    }

    #[test]
    fn literal_text_null_merges_with_the_marker() {
        assert_eq!(Value::from("null").canonical_key(), Value::Null.canonical_key());
    }

    #[test]
    fn booleans_render_as_words() {
        assert_eq!(key(&Value::from(true)), "true");
        assert_eq!(key(&Value::from(false)), "false");
    }

    #[test]
    fn whole_float_merges_with_integer() {
        assert_eq!(Value::from(3.0).canonical_key(), Value::from(3).canonical_key());
    }

    #[test]
    fn strings_are_their_own_key() {
        assert_eq!(key(&Value::from("🚀")), "🚀");
        assert_eq!(key(&Value::from("")), "");
    }

    #[test]
    fn lists_join_with_commas_and_markers_render_empty() {
        let list = Value::from(vec![Value::from(1), Value::from("a"), Value::Null]);
        assert_eq!(key(&list), "1,a,");

        let markers = Value::from(vec![Value::Null, Value::Undefined]);
        assert_eq!(key(&markers), ",");
    }

    #[test]
    fn maps_coerce_to_object_text() {
        let map = Value::Sequence(Sequence::Map(Rc::new(vec![(
            "a".to_string(),
            Value::from(1),
        )])));
        assert_eq!(key(&map), "[object Object]");
    }
}
