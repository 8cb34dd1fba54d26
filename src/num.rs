use std::fmt;
use std::hash::{Hash, Hasher};

use ordered_float::OrderedFloat;

/// Numeric values as they appear in counted input. The `Int`/`Float` split
/// only matters for identity; both arms render through the same canonical
/// decimal rules when a number becomes a key.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(left), Self::Int(right)) => left.eq(right),
            (Self::Float(left), Self::Float(right)) => {
                OrderedFloat(*left).eq(&OrderedFloat(*right))
            }
            _ => false,
        }
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Int(i) => {
                state.write_u8(1);
                i.hash(state);
            }
            Self::Float(f) => {
                state.write_u8(2);
                OrderedFloat(*f).hash(state);
            }
        }
    }
}

/// Renders the canonical decimal text: integers as plain decimal, floats with
/// no fractional part without a trailing `.0` (so `3.0` prints as `3`), other
/// finite floats as their shortest round-trip decimal. Negative zero prints
/// as `0`.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) if x.is_nan() => f.write_str("NaN"),
            Self::Float(x) if x.is_infinite() && x.is_sign_positive() => f.write_str("Infinity"),
            Self::Float(x) if x.is_infinite() => f.write_str("-Infinity"),
            Self::Float(x) if x == 0.0 => f.write_str("0"),
            Self::Float(x) if x.fract() == 0.0 => write!(f, "{x:.0}"),
            Self::Float(x) => f.write_str(ryu::Buffer::new().format(x)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Number;

    #[test]
    fn integers_render_as_decimal() {
        assert_eq!(Number::Int(42).to_string(), "42");
        assert_eq!(Number::Int(-7).to_string(), "-7");
    }

    #[test]
    fn whole_floats_drop_the_fraction() {
        assert_eq!(Number::Float(3.0).to_string(), "3");
        assert_eq!(Number::Float(-12.0).to_string(), "-12");
    }

    #[test]
    fn fractional_floats_use_shortest_form() {
        assert_eq!(Number::Float(1.5).to_string(), "1.5");
        assert_eq!(Number::Float(0.1).to_string(), "0.1");
    }

    #[test]
    fn non_finite_floats() {
        assert_eq!(Number::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(Number::Float(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Number::Float(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn negative_zero_renders_as_zero() {
        assert_eq!(Number::Float(-0.0).to_string(), "0");
    }

    #[test]
    fn int_and_float_are_distinct_identities() {
        assert_ne!(Number::Int(1), Number::Float(1.0));
        assert_eq!(Number::Float(1.5), Number::Float(1.5));
    }
}
