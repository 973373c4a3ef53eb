//! Space-separated list combinator.

use crate::codec::{Codec, CodecError, Resolver};
use crate::value::Value;

/// A codec for space-separated lists of another codec's values.
///
/// The raw form is the item encodings joined with single spaces; the
/// typed form is a [`Value::List`]. Order and duplicates are preserved.
/// Absence decodes to the configured default tokens (empty when none
/// were given), so `List::with_default(Token::new(...), [...])` yields
/// validated multi-value enumerations with their own get-side default.
///
/// # Example
///
/// ```rust
/// use ariattr::codec::{Codec, List, NoResolver, Token};
/// use ariattr::Value;
///
/// let dropeffect = List::with_default(
///     Token::new(["copy", "execute", "link", "move", "none", "popup"]),
///     ["none"],
/// );
///
/// // Absence decodes to the default subset, not the token default.
/// assert_eq!(
///     dropeffect.decode(None, &NoResolver).unwrap(),
///     Value::from(vec!["none"])
/// );
///
/// // A scalar assignment is wrapped as a one-element list.
/// assert_eq!(dropeffect.encode(&"copy".into()).unwrap(), "copy");
/// assert_eq!(
///     dropeffect.encode(&Value::from(vec!["copy", "move"])).unwrap(),
///     "copy move"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct List<C> {
    item: C,
    default: Vec<String>,
}

impl<C: Codec> List<C> {
    /// Creates a list codec whose absence default is the empty list.
    pub fn new(item: C) -> Self {
        Self {
            item,
            default: Vec::new(),
        }
    }

    /// Creates a list codec with an explicit default: the raw tokens
    /// the list decodes to when the attribute is absent.
    pub fn with_default<I, S>(item: C, default: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            item,
            default: default.into_iter().map(Into::into).collect(),
        }
    }
}

impl<C: Codec> Codec for List<C> {
    fn decode(&self, raw: Option<&str>, resolver: &dyn Resolver) -> Result<Value, CodecError> {
        let items: Result<Vec<Value>, CodecError> = match raw {
            None => self
                .default
                .iter()
                .map(|token| self.item.decode(Some(token), resolver))
                .collect(),
            // Split on single spaces exactly; doubled spaces produce empty
            // segments for the item codec to judge.
            Some(s) => s
                .split(' ')
                .map(|token| self.item.decode(Some(token), resolver))
                .collect(),
        };
        Ok(Value::List(items?))
    }

    fn encode(&self, value: &Value) -> Result<String, CodecError> {
        let items: Vec<&Value> = match value {
            Value::List(items) => items.iter().collect(),
            scalar => vec![scalar],
        };

        let mut parts = Vec::with_capacity(items.len());
        for item in items {
            let encoded = self.item.encode(item)?;
            if !encoded.is_empty() {
                parts.push(encoded);
            }
        }
        Ok(parts.join(" "))
    }
}
