//! Codecs: paired decode/encode functions bridging raw attribute strings
//! and typed values.
//!
//! This module provides:
//!
//! - [`Codec`]: the decode/encode trait every value domain implements
//! - [`CodecError`]: the two failure kinds (format vs. custom)
//! - Primitives: [`TrueFalse`], [`Tristate`], [`TrueFalseUndefined`],
//!   [`IdRef`], [`Integer`], [`Decimal`], [`Text`]
//! - Combinators: [`Token`] (closed sets) and [`List`] (space-separated
//!   sequences of any item codec)
//!
//! Two invariants hold for every codec: `decode(None)` yields a
//! well-defined domain default and never fails with a format error, and
//! neither function mutates external state.

mod error;
mod list;
mod primitive;
mod token;

pub use error::CodecError;
pub use list::List;
pub use primitive::{Decimal, IdRef, Integer, Text, TrueFalse, Tristate, TrueFalseUndefined};
pub use token::Token;

use crate::element::Element;
use crate::value::Value;

/// Identifier resolution boundary used by the element-reference domain.
///
/// Only [`IdRef`] (and lists of it) consults the resolver; every other
/// codec ignores it.
pub trait Resolver {
    /// Resolves an id to a live element handle, or `None`.
    fn resolve_id(&self, id: &str) -> Option<Element>;
}

/// A resolver that knows no elements.
///
/// Useful for exercising codecs outside any document, and what a view
/// falls back to once its document is gone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResolver;

impl Resolver for NoResolver {
    fn resolve_id(&self, _id: &str) -> Option<Element> {
        None
    }
}

/// A value-domain handler: raw attribute string in, typed value out, and
/// back again.
///
/// Implement this to register custom value domains alongside the built-in
/// ones.
///
/// # Example
///
/// ```rust
/// use ariattr::codec::{Codec, CodecError, NoResolver, Resolver};
/// use ariattr::Value;
///
/// /// Stores percentages as "42%" but exposes plain numbers.
/// struct Percent;
///
/// impl Codec for Percent {
///     fn decode(&self, raw: Option<&str>, _: &dyn Resolver) -> Result<Value, CodecError> {
///         match raw {
///             None => Ok(Value::Undefined),
///             Some(s) => match s.strip_suffix('%').and_then(|n| n.parse().ok()) {
///                 Some(n) => Ok(Value::Number(n)),
///                 None => Err(CodecError::format(s, "percentage")),
///             },
///         }
///     }
///
///     fn encode(&self, value: &Value) -> Result<String, CodecError> {
///         match value {
///             Value::Number(n) if n.is_finite() => Ok(format!("{}%", n)),
///             other => Err(CodecError::format(other, "percentage")),
///         }
///     }
/// }
///
/// let percent = Percent;
/// assert_eq!(percent.decode(Some("42%"), &NoResolver).unwrap(), Value::Number(42.0));
/// assert_eq!(percent.encode(&Value::Number(7.0)).unwrap(), "7%");
/// assert!(percent.decode(Some("tall"), &NoResolver).unwrap_err().is_format());
/// ```
pub trait Codec: Send + Sync {
    /// Decodes a raw attribute value. `None` means the attribute is
    /// absent and must decode to the domain default.
    fn decode(&self, raw: Option<&str>, resolver: &dyn Resolver) -> Result<Value, CodecError>;

    /// Encodes a typed value into the string to be stored.
    ///
    /// Out-of-domain values fail with [`CodecError::Format`]; the caller
    /// decides whether that drops the write or surfaces.
    fn encode(&self, value: &Value) -> Result<String, CodecError>;
}
