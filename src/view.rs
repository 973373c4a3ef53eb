//! Sealed, typed property views over an element's raw attributes.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Weak;
use std::sync::Arc;

use crate::codec::{Codec, CodecError, NoResolver, Resolver};
use crate::document::{Document, DocumentInner};
use crate::element::{Element, WeakElement};
use crate::value::Value;

/// Every property name `p` maps to the raw attribute key `"aria-" + p`.
pub const ATTRIBUTE_PREFIX: &str = "aria-";

/// One materialized accessor: the prefixed key and the codec behind it.
struct Slot {
    key: String,
    codec: Arc<dyn Codec>,
}

/// The typed view over one element's `aria-*` attributes.
///
/// A view's shape is sealed at materialization time to exactly the names
/// the document's registry held: no property can be added or removed
/// later, and unregistered names are inert (reads yield
/// [`Value::Undefined`], writes are no-ops).
///
/// Views are obtained through [`Document::view_of`] and hold only weak
/// references back to their element and document, so they never extend
/// either's lifetime. Once the element is gone the view degrades to
/// absence: reads return domain defaults and writes do nothing.
///
/// # Error recovery
///
/// Reads never fail because of malformed stored data — a format error
/// during decode falls back to the domain default. Writes never fail
/// because of an out-of-domain value — a format error during encode
/// drops the write and leaves the store untouched. Any non-format
/// failure from a codec propagates unchanged.
///
/// # Example
///
/// ```rust
/// use ariattr::{Document, Value};
///
/// let doc = Document::new();
/// let element = doc.create_element();
/// let view = doc.view_of(&element).unwrap();
///
/// // Absent attributes read as their domain defaults.
/// assert_eq!(view.get("hidden").unwrap(), Value::Bool(false));
/// assert_eq!(view.get("dropeffect").unwrap(), Value::from(vec!["none"]));
///
/// view.set("level", 2).unwrap();
/// assert_eq!(element.attribute("aria-level").as_deref(), Some("2"));
///
/// // Out-of-domain writes are dropped, not errors.
/// view.set("orientation", "diagonal").unwrap();
/// assert!(!element.has_attribute("aria-orientation"));
/// ```
pub struct AriaView {
    element: WeakElement,
    document: Weak<DocumentInner>,
    slots: BTreeMap<String, Slot>,
}

impl AriaView {
    /// Materializes the view: one slot per registry entry, closing over
    /// the prefixed key and the codec handle.
    pub(crate) fn new(element: &Element, document: &Document) -> Self {
        let slots = document
            .registry()
            .iter()
            .map(|(name, codec)| {
                let slot = Slot {
                    key: format!("{}{}", ATTRIBUTE_PREFIX, name),
                    codec: Arc::clone(codec),
                };
                (name.to_string(), slot)
            })
            .collect();

        Self {
            element: element.downgrade(),
            document: document.downgrade(),
            slots,
        }
    }

    /// Reads a property as a typed value.
    ///
    /// Unregistered names yield `Ok(Value::Undefined)`. Format errors
    /// from the codec are recovered by returning the domain default;
    /// only non-format codec failures surface as `Err`.
    pub fn get(&self, name: &str) -> Result<Value, CodecError> {
        let Some(slot) = self.slots.get(name) else {
            return Ok(Value::Undefined);
        };

        let raw = self
            .element
            .upgrade()
            .and_then(|element| element.attribute(&slot.key));
        let document = self.document.upgrade().map(Document::from_inner);
        let resolver: &dyn Resolver = match &document {
            Some(doc) => doc,
            None => &NoResolver,
        };

        match slot.codec.decode(raw.as_deref(), resolver) {
            Ok(value) => Ok(value),
            Err(err) if err.is_format() => match slot.codec.decode(None, resolver) {
                Ok(default) => Ok(default),
                Err(err) if err.is_format() => Ok(Value::Undefined),
                Err(other) => Err(other),
            },
            Err(other) => Err(other),
        }
    }

    /// Writes a property from a typed value.
    ///
    /// [`Value::Undefined`] removes the raw attribute entirely. Format
    /// errors from the codec drop the write silently; only non-format
    /// codec failures surface as `Err`. Unregistered names are a no-op.
    pub fn set(&self, name: &str, value: impl Into<Value>) -> Result<(), CodecError> {
        let Some(slot) = self.slots.get(name) else {
            return Ok(());
        };
        let Some(element) = self.element.upgrade() else {
            return Ok(());
        };

        let value = value.into();
        if value.is_undefined() {
            element.remove_attribute(&slot.key);
            return Ok(());
        }

        match slot.codec.encode(&value) {
            Ok(raw) => {
                element.set_attribute(&slot.key, &raw);
                Ok(())
            }
            Err(err) if err.is_format() => Ok(()),
            Err(other) => Err(other),
        }
    }

    /// Removes a property's raw attribute. Equivalent to assigning
    /// [`Value::Undefined`].
    pub fn remove(&self, name: &str) -> Result<(), CodecError> {
        self.set(name, Value::Undefined)
    }

    /// Read-modify-write: applies `f` to the current typed value and
    /// assigns the result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ariattr::{Document, Value};
    ///
    /// let doc = Document::new();
    /// let element = doc.create_element();
    /// let view = doc.view_of(&element).unwrap();
    ///
    /// view.set("level", 2).unwrap();
    /// view.update("level", |v| Value::Number(v.as_number() + 1.0)).unwrap();
    /// assert_eq!(view.get("level").unwrap(), Value::Number(3.0));
    /// ```
    pub fn update(
        &self,
        name: &str,
        f: impl FnOnce(Value) -> Value,
    ) -> Result<(), CodecError> {
        let current = self.get(name)?;
        self.set(name, f(current))
    }

    /// Returns `true` when the name is part of the view's sealed shape.
    pub fn has(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Returns `true` when the property's raw attribute is present.
    pub fn is_set(&self, name: &str) -> bool {
        match (self.slots.get(name), self.element.upgrade()) {
            (Some(slot), Some(element)) => element.has_attribute(&slot.key),
            _ => false,
        }
    }

    /// The sealed property names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(|s| s.as_str())
    }

    /// The element this view projects, if it is still alive.
    pub fn element(&self) -> Option<Element> {
        self.element.upgrade()
    }

    pub(crate) fn is_live(&self) -> bool {
        self.element.upgrade().is_some()
    }

    /// Typed values of every property whose raw attribute is present.
    ///
    /// The result serializes naturally (element references become their
    /// ids), so a snapshot is a ready-made JSON projection of the
    /// element's accessibility state.
    pub fn snapshot(&self) -> Result<BTreeMap<String, Value>, CodecError> {
        let Some(element) = self.element.upgrade() else {
            return Ok(BTreeMap::new());
        };

        let mut map = BTreeMap::new();
        for (name, slot) in &self.slots {
            if element.has_attribute(&slot.key) {
                map.insert(name.clone(), self.get(name)?);
            }
        }
        Ok(map)
    }
}

impl fmt::Debug for AriaView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AriaView")
            .field("element", &self.element.upgrade())
            .field("properties", &self.slots.len())
            .finish()
    }
}
