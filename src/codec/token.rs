//! Closed-set token codec.

use crate::codec::{Codec, CodecError, Resolver};
use crate::value::Value;

/// A codec over a closed set of allowed raw tokens.
///
/// The first allowed token is the canonical default for absence. The
/// literal tokens `"true"` and `"false"` decode to booleans when they
/// are members of the set, which is how boolean-valued enumerations
/// (`invalid`, `current`, `haspopup`) read naturally.
///
/// # Example
///
/// ```rust
/// use ariattr::codec::{Codec, NoResolver, Token};
/// use ariattr::Value;
///
/// let orientation = Token::new(["horizontal", "vertical"]);
///
/// // Absence decodes to the first allowed token.
/// assert_eq!(
///     orientation.decode(None, &NoResolver).unwrap(),
///     Value::Str("horizontal".into())
/// );
///
/// // Non-members are format errors.
/// assert!(orientation.decode(Some("diagonal"), &NoResolver).unwrap_err().is_format());
///
/// // Boolean literals decode to booleans when allowed.
/// let invalid = Token::new(["false", "true", "grammar", "spelling"]);
/// assert_eq!(invalid.decode(Some("true"), &NoResolver).unwrap(), Value::Bool(true));
/// assert_eq!(invalid.decode(None, &NoResolver).unwrap(), Value::Bool(false));
/// ```
#[derive(Debug, Clone)]
pub struct Token {
    allowed: Vec<String>,
}

impl Token {
    /// Creates a token codec over the given allowed values.
    ///
    /// # Panics
    ///
    /// Panics when `allowed` is empty: a closed set with no members has
    /// no default and can never decode.
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
        assert!(!allowed.is_empty(), "token codec requires at least one allowed value");
        Self { allowed }
    }

    /// The allowed raw tokens, in declaration order.
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    /// Maps the boolean literals to booleans; all other members stay strings.
    fn literal(token: &str) -> Value {
        match token {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            other => Value::Str(other.to_string()),
        }
    }

    fn expected(&self) -> String {
        format!("token (one of: {})", self.allowed.join(", "))
    }
}

impl Codec for Token {
    fn decode(&self, raw: Option<&str>, _: &dyn Resolver) -> Result<Value, CodecError> {
        match raw {
            None => Ok(Self::literal(&self.allowed[0])),
            Some(s) if self.allowed.iter().any(|a| a == s) => Ok(Self::literal(s)),
            Some(other) => Err(CodecError::format(other, self.expected())),
        }
    }

    fn encode(&self, value: &Value) -> Result<String, CodecError> {
        let raw = match value {
            Value::Str(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            other => return Err(CodecError::format(other.kind(), self.expected())),
        };
        if self.allowed.contains(&raw) {
            Ok(raw)
        } else {
            Err(CodecError::format(raw, self.expected()))
        }
    }
}
