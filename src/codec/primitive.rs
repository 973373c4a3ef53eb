//! Primitive codecs, one per scalar value domain.

use crate::codec::{Codec, CodecError, Resolver};
use crate::value::{format_number, Value};

/// The `true`/`false` domain. Absence reads as `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrueFalse;

impl Codec for TrueFalse {
    fn decode(&self, raw: Option<&str>, _: &dyn Resolver) -> Result<Value, CodecError> {
        match raw {
            None | Some("false") => Ok(Value::Bool(false)),
            Some("true") => Ok(Value::Bool(true)),
            Some(other) => Err(CodecError::format(other, "true/false")),
        }
    }

    fn encode(&self, value: &Value) -> Result<String, CodecError> {
        Ok(value.truthy().to_string())
    }
}

/// The `true`/`false`/`mixed` domain. Absence reads as `Undefined`;
/// `"mixed"` decodes to the string `mixed`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tristate;

impl Codec for Tristate {
    fn decode(&self, raw: Option<&str>, _: &dyn Resolver) -> Result<Value, CodecError> {
        match raw {
            None => Ok(Value::Undefined),
            Some("true") => Ok(Value::Bool(true)),
            Some("false") => Ok(Value::Bool(false)),
            Some("mixed") => Ok(Value::Str("mixed".to_string())),
            Some(other) => Err(CodecError::format(other, "tristate")),
        }
    }

    fn encode(&self, value: &Value) -> Result<String, CodecError> {
        match value {
            Value::Str(s) if s == "mixed" => Ok("mixed".to_string()),
            other => Ok(other.truthy().to_string()),
        }
    }
}

/// The `true`/`false` domain whose absence reads as `Undefined` rather
/// than `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrueFalseUndefined;

impl Codec for TrueFalseUndefined {
    fn decode(&self, raw: Option<&str>, _: &dyn Resolver) -> Result<Value, CodecError> {
        match raw {
            None => Ok(Value::Undefined),
            Some("true") => Ok(Value::Bool(true)),
            Some("false") => Ok(Value::Bool(false)),
            Some(other) => Err(CodecError::format(other, "true/false/undefined")),
        }
    }

    fn encode(&self, value: &Value) -> Result<String, CodecError> {
        Ok(value.truthy().to_string())
    }
}

/// The element-reference domain.
///
/// Reads are lenient: a raw id that resolves to nothing decodes to
/// `Undefined`, never an error. Writes are strict: only element handles
/// (with an id) and plain strings encode; anything else is a format
/// error.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdRef;

impl Codec for IdRef {
    fn decode(&self, raw: Option<&str>, resolver: &dyn Resolver) -> Result<Value, CodecError> {
        Ok(match raw {
            None => Value::Undefined,
            Some(id) => match resolver.resolve_id(id) {
                Some(element) => Value::Element(element),
                None => Value::Undefined,
            },
        })
    }

    fn encode(&self, value: &Value) -> Result<String, CodecError> {
        match value {
            Value::Element(element) => element
                .id()
                .ok_or_else(|| CodecError::format("element without id", "id reference")),
            Value::Str(s) => Ok(s.clone()),
            other => Err(CodecError::format(other.kind(), "id reference")),
        }
    }
}

/// The integer domain. Raw values parse as floats and truncate toward
/// zero; unparseable input decodes to `NaN`, which is a valid result,
/// so decoding never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integer;

impl Codec for Integer {
    fn decode(&self, raw: Option<&str>, _: &dyn Resolver) -> Result<Value, CodecError> {
        Ok(Value::Number(match raw {
            None => f64::NAN,
            Some(s) => s.trim().parse().map(f64::trunc).unwrap_or(f64::NAN),
        }))
    }

    fn encode(&self, value: &Value) -> Result<String, CodecError> {
        Ok(format_number(value.as_number().trunc()))
    }
}

/// The decimal number domain. Like [`Integer`] without truncation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decimal;

impl Codec for Decimal {
    fn decode(&self, raw: Option<&str>, _: &dyn Resolver) -> Result<Value, CodecError> {
        Ok(Value::Number(match raw {
            None => f64::NAN,
            Some(s) => s.trim().parse().unwrap_or(f64::NAN),
        }))
    }

    fn encode(&self, value: &Value) -> Result<String, CodecError> {
        Ok(format_number(value.as_number()))
    }
}

/// The plain string domain. Decoding is identity; encoding is string
/// coercion of any value, so neither side ever fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Text;

impl Codec for Text {
    fn decode(&self, raw: Option<&str>, _: &dyn Resolver) -> Result<Value, CodecError> {
        Ok(match raw {
            None => Value::Undefined,
            Some(s) => Value::Str(s.to_string()),
        })
    }

    fn encode(&self, value: &Value) -> Result<String, CodecError> {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::NoResolver;
    use crate::document::Document;

    fn decode(codec: &dyn Codec, raw: Option<&str>) -> Result<Value, CodecError> {
        codec.decode(raw, &NoResolver)
    }

    // =========================================================================
    // TrueFalse
    // =========================================================================

    #[test]
    fn test_true_false_decode() {
        assert_eq!(decode(&TrueFalse, None).unwrap(), Value::Bool(false));
        assert_eq!(decode(&TrueFalse, Some("true")).unwrap(), Value::Bool(true));
        assert_eq!(decode(&TrueFalse, Some("false")).unwrap(), Value::Bool(false));
        assert!(decode(&TrueFalse, Some("yes")).unwrap_err().is_format());
    }

    #[test]
    fn test_true_false_encode_is_truthiness() {
        assert_eq!(TrueFalse.encode(&Value::Bool(true)).unwrap(), "true");
        assert_eq!(TrueFalse.encode(&Value::Str("x".into())).unwrap(), "true");
        assert_eq!(TrueFalse.encode(&Value::Number(0.0)).unwrap(), "false");
        assert_eq!(TrueFalse.encode(&Value::Undefined).unwrap(), "false");
    }

    // =========================================================================
    // Tristate
    // =========================================================================

    #[test]
    fn test_tristate_decode() {
        assert_eq!(decode(&Tristate, None).unwrap(), Value::Undefined);
        assert_eq!(decode(&Tristate, Some("true")).unwrap(), Value::Bool(true));
        assert_eq!(decode(&Tristate, Some("false")).unwrap(), Value::Bool(false));
        assert_eq!(
            decode(&Tristate, Some("mixed")).unwrap(),
            Value::Str("mixed".into())
        );
        assert!(decode(&Tristate, Some("partial")).unwrap_err().is_format());
    }

    #[test]
    fn test_tristate_encode() {
        assert_eq!(Tristate.encode(&Value::Str("mixed".into())).unwrap(), "mixed");
        assert_eq!(Tristate.encode(&Value::Bool(true)).unwrap(), "true");
        assert_eq!(Tristate.encode(&Value::Str("other".into())).unwrap(), "true");
        assert_eq!(Tristate.encode(&Value::Undefined).unwrap(), "false");
    }

    // =========================================================================
    // TrueFalseUndefined
    // =========================================================================

    #[test]
    fn test_true_false_undefined_decode() {
        assert_eq!(decode(&TrueFalseUndefined, None).unwrap(), Value::Undefined);
        assert_eq!(
            decode(&TrueFalseUndefined, Some("true")).unwrap(),
            Value::Bool(true)
        );
        assert!(decode(&TrueFalseUndefined, Some("mixed"))
            .unwrap_err()
            .is_format());
    }

    // =========================================================================
    // IdRef
    // =========================================================================

    #[test]
    fn test_idref_decode_resolves_through_document() {
        let doc = Document::new();
        let target = doc.create_element_with_id("target");

        let decoded = IdRef.decode(Some("target"), &doc).unwrap();
        assert_eq!(decoded, Value::Element(target));
    }

    #[test]
    fn test_idref_decode_is_lenient() {
        // An unresolvable id reads as absence, never as an error.
        assert_eq!(decode(&IdRef, Some("nowhere")).unwrap(), Value::Undefined);
        assert_eq!(decode(&IdRef, None).unwrap(), Value::Undefined);
    }

    #[test]
    fn test_idref_encode_is_strict() {
        let named = crate::Element::with_id("anchor");
        assert_eq!(IdRef.encode(&Value::Element(named)).unwrap(), "anchor");
        assert_eq!(IdRef.encode(&Value::Str("other".into())).unwrap(), "other");

        let anonymous = crate::Element::new();
        assert!(IdRef.encode(&Value::Element(anonymous)).unwrap_err().is_format());
        assert!(IdRef.encode(&Value::Bool(true)).unwrap_err().is_format());
    }

    // =========================================================================
    // Integer / Decimal
    // =========================================================================

    #[test]
    fn test_integer_decode_truncates_toward_zero() {
        assert_eq!(decode(&Integer, Some("3.9")).unwrap(), Value::Number(3.0));
        assert_eq!(decode(&Integer, Some("-3.9")).unwrap(), Value::Number(-3.0));
        assert_eq!(decode(&Integer, Some(" 12 ")).unwrap(), Value::Number(12.0));
    }

    #[test]
    fn test_integer_decode_never_fails() {
        let absent = decode(&Integer, None).unwrap();
        assert!(matches!(absent, Value::Number(n) if n.is_nan()));

        let garbage = decode(&Integer, Some("banana")).unwrap();
        assert!(matches!(garbage, Value::Number(n) if n.is_nan()));
    }

    #[test]
    fn test_integer_encode() {
        assert_eq!(Integer.encode(&Value::Number(3.9)).unwrap(), "3");
        assert_eq!(Integer.encode(&Value::Number(-3.9)).unwrap(), "-3");
        assert_eq!(Integer.encode(&Value::Str("7.5".into())).unwrap(), "7");
        assert_eq!(Integer.encode(&Value::Undefined).unwrap(), "NaN");
    }

    #[test]
    fn test_decimal_round_trip() {
        assert_eq!(decode(&Decimal, Some("0.5")).unwrap(), Value::Number(0.5));
        assert_eq!(Decimal.encode(&Value::Number(0.5)).unwrap(), "0.5");
        assert_eq!(Decimal.encode(&Value::Number(2.0)).unwrap(), "2");
        assert_eq!(Decimal.encode(&Value::List(vec![])).unwrap(), "NaN");
    }

    // =========================================================================
    // Text
    // =========================================================================

    #[test]
    fn test_text_decode_is_identity() {
        assert_eq!(decode(&Text, None).unwrap(), Value::Undefined);
        assert_eq!(decode(&Text, Some("hi")).unwrap(), Value::Str("hi".into()));
        assert_eq!(decode(&Text, Some("")).unwrap(), Value::Str("".into()));
    }

    #[test]
    fn test_text_encode_coerces_anything() {
        assert_eq!(Text.encode(&Value::Str("hi".into())).unwrap(), "hi");
        assert_eq!(Text.encode(&Value::Bool(true)).unwrap(), "true");
        assert_eq!(Text.encode(&Value::Number(4.0)).unwrap(), "4");
    }
}
