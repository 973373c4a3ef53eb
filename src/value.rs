//! Dynamic values bridging raw attribute strings and typed properties.
//!
//! Every codec decodes into and encodes from [`Value`], so one enum covers
//! all the value domains an attribute can carry: booleans, numbers, plain
//! strings, resolved element references, and space-separated lists.

use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::element::Element;

/// A typed attribute value.
///
/// `Undefined` models absence: a property whose raw attribute is missing
/// (and whose domain has no richer default) reads as `Undefined`, and
/// assigning `Undefined` removes the raw attribute.
///
/// # Example
///
/// ```rust
/// use ariattr::Value;
///
/// let level: Value = 2.into();
/// assert_eq!(level, Value::Number(2.0));
/// assert!(level.truthy());
/// assert!(Value::Undefined.is_undefined());
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// No value. Decoded from absence; assigning it removes the attribute.
    #[default]
    Undefined,
    /// A boolean.
    Bool(bool),
    /// A number. Integers and decimals share this variant; `NaN` is a
    /// legal decode result, not an error.
    Number(f64),
    /// A plain string.
    Str(String),
    /// A resolved element reference.
    Element(Element),
    /// An ordered list of values.
    List(Vec<Value>),
}

impl Value {
    /// Returns `true` for [`Value::Undefined`].
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Boolean coercion used by the boolean-family encoders.
    ///
    /// `Undefined` is false, numbers are true when nonzero and not `NaN`,
    /// strings when non-empty; element references and lists are always true.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Undefined => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Str(s) => !s.is_empty(),
            Value::Element(_) => true,
            Value::List(_) => true,
        }
    }

    /// Numeric coercion used by the numeric encoders.
    ///
    /// Booleans map to 0/1, strings are parsed (or `NaN`), everything
    /// else is `NaN`.
    pub fn as_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Str(s) => s.trim().parse().unwrap_or(f64::NAN),
            _ => f64::NAN,
        }
    }

    /// Returns the string if this is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean if this is a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the items if this is a [`Value::List`].
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the element handle if this is a [`Value::Element`].
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Value::Element(el) => Some(el),
            _ => None,
        }
    }

    /// A short name for the value's variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Element(_) => "element",
            Value::List(_) => "list",
        }
    }
}

/// Formats a number the way attribute values expect: integral finite
/// values print without a decimal point, `NaN` prints as `"NaN"`.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_finite() && n == n.trunc() && n.abs() < 9.0e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for Value {
    /// String coercion: `Undefined` prints as `undefined`, elements as
    /// their id (or `[element]`), lists as their space-joined items.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::Str(s) => write!(f, "{}", s),
            Value::Element(el) => match el.id() {
                Some(id) => write!(f, "{}", id),
                None => write!(f, "[element]"),
            },
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl PartialEq for Value {
    /// Structural equality. Element references compare by handle
    /// identity; numbers follow IEEE semantics (`NaN != NaN`).
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Element(a), Value::Element(b)) => a.ptr_eq(b),
            (Value::List(a), Value::List(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Element> for Value {
    fn from(el: Element) -> Self {
        Value::Element(el)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Undefined,
        }
    }
}

impl Serialize for Value {
    /// `Undefined` serializes as null and element references as their id
    /// (or null when they have none); the rest map 1:1.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Element(el) => match el.id() {
                Some(id) => serializer.serialize_str(&id),
                None => serializer.serialize_none(),
            },
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthy() {
        assert!(!Value::Undefined.truthy());
        assert!(Value::Bool(true).truthy());
        assert!(!Value::Bool(false).truthy());
        assert!(Value::Number(2.0).truthy());
        assert!(!Value::Number(0.0).truthy());
        assert!(!Value::Number(f64::NAN).truthy());
        assert!(Value::Str("x".into()).truthy());
        assert!(!Value::Str("".into()).truthy());
        assert!(Value::List(vec![]).truthy());
        assert!(Value::Element(Element::new()).truthy());
    }

    #[test]
    fn test_as_number_coercion() {
        assert_eq!(Value::Number(3.5).as_number(), 3.5);
        assert_eq!(Value::Bool(true).as_number(), 1.0);
        assert_eq!(Value::Bool(false).as_number(), 0.0);
        assert_eq!(Value::Str(" 42 ".into()).as_number(), 42.0);
        assert!(Value::Str("banana".into()).as_number().is_nan());
        assert!(Value::Undefined.as_number().is_nan());
        assert!(Value::List(vec![]).as_number().is_nan());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-7.0), "-7");
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Number(4.0).to_string(), "4");
        assert_eq!(Value::Str("hi".into()).to_string(), "hi");
        let list = Value::List(vec!["a".into(), "b".into()]);
        assert_eq!(list.to_string(), "a b");
    }

    #[test]
    fn test_element_equality_is_identity() {
        let a = Element::new();
        let b = Element::new();
        assert_eq!(Value::Element(a.clone()), Value::Element(a.clone()));
        assert_ne!(Value::Element(a), Value::Element(b));
    }

    #[test]
    fn test_nan_never_equals_itself() {
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(3), Value::Number(3.0));
        assert_eq!(Value::from("x"), Value::Str("x".into()));
        assert_eq!(
            Value::from(vec!["a", "b"]),
            Value::List(vec!["a".into(), "b".into()])
        );
        assert_eq!(Value::from(None::<bool>), Value::Undefined);
        assert_eq!(Value::from(Some(1)), Value::Number(1.0));
    }

    #[test]
    fn test_serialize() {
        let value = Value::List(vec![
            Value::Undefined,
            Value::Bool(true),
            Value::Number(2.0),
            Value::Str("hi".into()),
        ]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"[null,true,2.0,"hi"]"#);
    }

    #[test]
    fn test_serialize_element_as_id() {
        let el = Element::with_id("anchor");
        let json = serde_json::to_string(&Value::Element(el)).unwrap();
        assert_eq!(json, r#""anchor""#);
    }
}
