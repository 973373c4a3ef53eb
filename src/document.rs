//! Documents: identifier resolution and per-element view caching.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::codec::Resolver;
use crate::element::{Element, WeakElement};
use crate::registry::Registry;
use crate::view::AriaView;

/// The home of elements, their id index, and the typed-view cache.
///
/// A document carries the [`Registry`] its views are materialized from
/// and resolves string ids to element handles. Cloning a `Document`
/// clones the handle; all clones share the same index and cache.
///
/// # Example
///
/// ```rust
/// use ariattr::{Document, Value};
///
/// let doc = Document::new();
/// let element = doc.create_element_with_id("save");
///
/// let view = doc.view_of(&element).unwrap();
/// view.set("label", "Save document").unwrap();
///
/// assert_eq!(element.attribute("aria-label").as_deref(), Some("Save document"));
/// assert_eq!(doc.view_of("save").unwrap().get("label").unwrap(), Value::from("Save document"));
/// assert!(doc.view_of("missing").is_none());
/// ```
#[derive(Clone)]
pub struct Document {
    inner: Rc<DocumentInner>,
}

pub(crate) struct DocumentInner {
    registry: Registry,
    ids: RefCell<HashMap<String, WeakElement>>,
    views: RefCell<HashMap<usize, Rc<AriaView>>>,
}

/// What [`Document::view_of`] accepts: an element handle, or an id to
/// resolve first.
#[derive(Debug)]
pub enum ViewTarget<'a> {
    /// Use the element directly.
    Element(&'a Element),
    /// Resolve this id; an unknown id yields no view.
    Id(&'a str),
}

impl<'a> From<&'a Element> for ViewTarget<'a> {
    fn from(element: &'a Element) -> Self {
        ViewTarget::Element(element)
    }
}

impl<'a> From<&'a str> for ViewTarget<'a> {
    fn from(id: &'a str) -> Self {
        ViewTarget::Id(id)
    }
}

impl<'a> From<&'a String> for ViewTarget<'a> {
    fn from(id: &'a String) -> Self {
        ViewTarget::Id(id)
    }
}

impl Document {
    /// Creates a document with the standard WAI-ARIA registry.
    pub fn new() -> Self {
        Self::with_registry(Registry::wai_aria())
    }

    /// Creates a document with a custom registry.
    ///
    /// The registry is frozen from here on: views snapshot it when they
    /// are materialized.
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            inner: Rc::new(DocumentInner {
                registry,
                ids: RefCell::new(HashMap::new()),
                views: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// The registry this document materializes views from.
    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    /// Creates a fresh element. It has no id, so it is reachable only
    /// through its handle.
    pub fn create_element(&self) -> Element {
        Element::new()
    }

    /// Creates a fresh element and indexes it under the given id.
    pub fn create_element_with_id(&self, id: impl Into<String>) -> Element {
        let element = Element::with_id(id);
        self.adopt(&element);
        element
    }

    /// Indexes an externally created element by its id so string lookups
    /// can find it. Elements without an id are left alone.
    ///
    /// The index holds weak handles only; adopting never extends an
    /// element's lifetime.
    pub fn adopt(&self, element: &Element) {
        if let Some(id) = element.id() {
            self.inner.ids.borrow_mut().insert(id, element.downgrade());
        }
    }

    /// Resolves an id to a live element, or `None`.
    pub fn element_by_id(&self, id: &str) -> Option<Element> {
        let mut ids = self.inner.ids.borrow_mut();
        match ids.get(id).map(WeakElement::upgrade) {
            Some(Some(element)) => Some(element),
            Some(None) => {
                // The element is gone; drop the stale index entry.
                ids.remove(id);
                None
            }
            None => None,
        }
    }

    /// Returns the typed view for an element, materializing it on first
    /// request.
    ///
    /// Accepts an element handle or an id ([`ViewTarget`]); an
    /// unresolvable id yields `None`. Repeated requests for the same
    /// element return the same `Rc` instance, so callers may compare
    /// views with [`Rc::ptr_eq`].
    pub fn view_of<'a>(&self, target: impl Into<ViewTarget<'a>>) -> Option<Rc<AriaView>> {
        let element = match target.into() {
            ViewTarget::Element(element) => element.clone(),
            ViewTarget::Id(id) => self.element_by_id(id)?,
        };

        {
            let mut views = self.inner.views.borrow_mut();
            // Drop entries whose elements are gone first: a freed address
            // can be reused, and a stale entry must never answer for a
            // new element at the same address.
            views.retain(|_, view| view.is_live());
            if let Some(view) = views.get(&element.key()) {
                return Some(Rc::clone(view));
            }
        }

        let view = Rc::new(AriaView::new(&element, self));
        self.inner
            .views
            .borrow_mut()
            .insert(element.key(), Rc::clone(&view));
        Some(view)
    }

    pub(crate) fn from_inner(inner: Rc<DocumentInner>) -> Self {
        Self { inner }
    }

    pub(crate) fn downgrade(&self) -> Weak<DocumentInner> {
        Rc::downgrade(&self.inner)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver for Document {
    fn resolve_id(&self, id: &str) -> Option<Element> {
        self.element_by_id(id)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("registry", &self.inner.registry)
            .field("indexed_ids", &self.inner.ids.borrow().len())
            .field("cached_views", &self.inner.views.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_by_id_resolves_live_elements() {
        let doc = Document::new();
        let element = doc.create_element_with_id("main");

        let found = doc.element_by_id("main").unwrap();
        assert!(found.ptr_eq(&element));
        assert!(doc.element_by_id("other").is_none());
    }

    #[test]
    fn test_index_does_not_keep_elements_alive() {
        let doc = Document::new();
        let element = doc.create_element_with_id("gone");
        drop(element);
        assert!(doc.element_by_id("gone").is_none());
    }

    #[test]
    fn test_adopt_without_id_is_inert() {
        let doc = Document::new();
        let element = Element::new();
        doc.adopt(&element);
        assert_eq!(doc.inner.ids.borrow().len(), 0);
    }

    #[test]
    fn test_view_of_by_id_and_by_handle_agree() {
        let doc = Document::new();
        let element = doc.create_element_with_id("panel");

        let by_handle = doc.view_of(&element).unwrap();
        let by_id = doc.view_of("panel").unwrap();
        assert!(Rc::ptr_eq(&by_handle, &by_id));
    }

    #[test]
    fn test_view_cache_releases_dead_elements() {
        let doc = Document::new();
        let element = doc.create_element();
        let _view = doc.view_of(&element).unwrap();
        assert_eq!(doc.inner.views.borrow().len(), 1);

        drop(element);
        let other = doc.create_element();
        doc.view_of(&other).unwrap();
        assert_eq!(doc.inner.views.borrow().len(), 1);
    }
}
