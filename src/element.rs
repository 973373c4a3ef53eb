//! Element handles and their raw attribute stores.
//!
//! An [`Element`] is a cheaply clonable handle over a flat, string-keyed
//! attribute map plus an optional id. It is the raw store the typed view
//! reads and writes through; attribute names are treated
//! case-insensitively, matching host attribute-store semantics.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

/// A mutable element with a flat string attribute store.
///
/// Cloning an `Element` clones the handle, not the store: all clones
/// observe the same attributes, and identity comparisons via
/// [`Element::ptr_eq`] treat them as the same element.
///
/// # Example
///
/// ```rust
/// use ariattr::Element;
///
/// let element = Element::with_id("tab-1");
/// element.set_attribute("aria-selected", "true");
///
/// assert_eq!(element.attribute("ARIA-SELECTED").as_deref(), Some("true"));
/// assert!(element.has_attribute("aria-selected"));
///
/// element.remove_attribute("aria-selected");
/// assert!(!element.has_attribute("aria-selected"));
/// ```
#[derive(Clone, Default)]
pub struct Element {
    inner: Rc<RefCell<ElementInner>>,
}

#[derive(Debug, Default)]
struct ElementInner {
    id: Option<String>,
    attributes: BTreeMap<String, String>,
}

/// Attribute names are case-insensitive; stored keys are lowercase.
fn canonical(name: &str) -> String {
    name.to_ascii_lowercase()
}

impl Element {
    /// Creates an element with no id and no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an element with the given id.
    pub fn with_id(id: impl Into<String>) -> Self {
        let element = Self::new();
        element.inner.borrow_mut().id = Some(id.into());
        element
    }

    /// Returns the element's id, if it has one.
    pub fn id(&self) -> Option<String> {
        self.inner.borrow().id.clone()
    }

    /// Returns the raw value of an attribute, or `None` when absent.
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.inner.borrow().attributes.get(&canonical(name)).cloned()
    }

    /// Stores a raw attribute value, replacing any previous one.
    pub fn set_attribute(&self, name: &str, value: &str) {
        self.inner
            .borrow_mut()
            .attributes
            .insert(canonical(name), value.to_string());
    }

    /// Removes an attribute entirely. Removing an absent attribute is a no-op.
    pub fn remove_attribute(&self, name: &str) {
        self.inner.borrow_mut().attributes.remove(&canonical(name));
    }

    /// Returns `true` when the attribute is present, even with an empty value.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.inner.borrow().attributes.contains_key(&canonical(name))
    }

    /// Returns `true` when both handles refer to the same element.
    pub fn ptr_eq(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// A stable identity key for this element, valid while it is alive.
    pub(crate) fn key(&self) -> usize {
        Rc::as_ptr(&self.inner) as usize
    }

    /// Creates a non-owning handle to this element.
    pub fn downgrade(&self) -> WeakElement {
        WeakElement {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Element")
            .field("id", &inner.id)
            .field("attributes", &inner.attributes)
            .finish()
    }
}

/// A non-owning element handle.
///
/// Derived structures (views, caches) hold these so they never extend an
/// element's lifetime.
#[derive(Debug, Clone, Default)]
pub struct WeakElement {
    inner: Weak<RefCell<ElementInner>>,
}

impl WeakElement {
    /// Upgrades to a strong handle if the element is still alive.
    pub fn upgrade(&self) -> Option<Element> {
        self.inner.upgrade().map(|inner| Element { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_round_trip() {
        let element = Element::new();
        assert_eq!(element.attribute("aria-label"), None);

        element.set_attribute("aria-label", "Close");
        assert_eq!(element.attribute("aria-label").as_deref(), Some("Close"));
        assert!(element.has_attribute("aria-label"));

        element.remove_attribute("aria-label");
        assert_eq!(element.attribute("aria-label"), None);
        assert!(!element.has_attribute("aria-label"));
    }

    #[test]
    fn test_attribute_names_are_case_insensitive() {
        let element = Element::new();
        element.set_attribute("ARIA-Hidden", "true");
        assert_eq!(element.attribute("aria-hidden").as_deref(), Some("true"));
        assert!(element.has_attribute("Aria-Hidden"));
    }

    #[test]
    fn test_empty_value_is_still_present() {
        let element = Element::new();
        element.set_attribute("aria-label", "");
        assert!(element.has_attribute("aria-label"));
        assert_eq!(element.attribute("aria-label").as_deref(), Some(""));
    }

    #[test]
    fn test_clones_share_the_store() {
        let element = Element::new();
        let alias = element.clone();
        alias.set_attribute("aria-busy", "true");
        assert_eq!(element.attribute("aria-busy").as_deref(), Some("true"));
        assert!(element.ptr_eq(&alias));
    }

    #[test]
    fn test_distinct_elements_are_not_equal() {
        assert_ne!(Element::new(), Element::new());
    }

    #[test]
    fn test_weak_handle_does_not_keep_element_alive() {
        let element = Element::with_id("gone");
        let weak = element.downgrade();
        assert!(weak.upgrade().is_some());

        drop(element);
        assert!(weak.upgrade().is_none());
    }
}
