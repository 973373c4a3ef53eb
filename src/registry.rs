//! The attribute registry: property names bound to codec instances.
//!
//! A [`Registry`] is pure configuration. It is built once — either the
//! standard WAI-ARIA table via [`Registry::wai_aria`] or a custom table
//! via the builder API — and treated as read-only afterwards: views
//! snapshot it at construction and never observe later changes.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::codec::{
    Codec, Decimal, IdRef, Integer, List, Text, Token, TrueFalse, TrueFalseUndefined, Tristate,
};

/// A fixed mapping from property name to codec instance.
///
/// Names are unique; adding a name twice replaces the earlier binding.
/// Registration order never affects behavior, and building a registry
/// has no side effects beyond populating the map.
///
/// # Example
///
/// ```rust
/// use ariattr::codec::{Text, Token, TrueFalse};
/// use ariattr::Registry;
///
/// let registry = Registry::new()
///     .add("hidden", TrueFalse)
///     .add("label", Text)
///     .add("orientation", Token::new(["horizontal", "vertical"]));
///
/// assert!(registry.has("label"));
/// assert_eq!(registry.len(), 3);
/// ```
#[derive(Clone, Default)]
pub struct Registry {
    entries: BTreeMap<String, Arc<dyn Codec>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the standard WAI-ARIA 1.1 property table.
    ///
    /// The table is built once per process and shared; cloning it is
    /// cheap (codec instances are shared by handle).
    pub fn wai_aria() -> Self {
        WAI_ARIA.clone()
    }

    /// Binds a property name to a codec, returning the updated registry
    /// for chaining.
    pub fn add(mut self, name: impl Into<String>, codec: impl Codec + 'static) -> Self {
        self.entries.insert(name.into(), Arc::new(codec));
        self
    }

    /// Looks up the codec bound to a property name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Codec>> {
        self.entries.get(name)
    }

    /// Returns `true` when the property name is registered.
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterates over `(name, codec)` entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Codec>)> {
        self.entries.iter().map(|(name, codec)| (name.as_str(), codec))
    }

    /// Returns an iterator over all registered property names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    /// Returns the number of registered properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no properties are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// The standard table, built once and frozen.
static WAI_ARIA: Lazy<Registry> = Lazy::new(build_wai_aria);

fn build_wai_aria() -> Registry {
    let mut registry = Registry::new();

    for name in [
        "atomic",
        "busy",
        "disabled",
        "hidden",
        "modal",
        "multiline",
        "multiselectable",
        "readonly",
        "required",
    ] {
        registry = registry.add(name, TrueFalse);
    }

    for name in ["checked", "pressed"] {
        registry = registry.add(name, Tristate);
    }

    for name in ["expanded", "grabbed", "selected"] {
        registry = registry.add(name, TrueFalseUndefined);
    }

    for name in ["activedescendant", "details", "errormessage"] {
        registry = registry.add(name, IdRef);
    }

    for name in ["controls", "describedby", "flowto", "labelledby", "owns"] {
        registry = registry.add(name, List::new(IdRef));
    }

    for name in [
        "colcount", "colindex", "colspan", "level", "posinset", "rowcount", "rowindex", "rowspan",
        "setsize",
    ] {
        registry = registry.add(name, Integer);
    }

    for name in ["valuemax", "valuemin", "valuenow"] {
        registry = registry.add(name, Decimal);
    }

    for name in [
        "keyshortcuts",
        "label",
        "placeholder",
        "roledescription",
        "valuetext",
    ] {
        registry = registry.add(name, Text);
    }

    registry
        .add("autocomplete", Token::new(["none", "inline", "list", "both"]))
        .add(
            "current",
            Token::new(["false", "true", "page", "step", "location", "date", "time"]),
        )
        .add(
            "haspopup",
            Token::new(["false", "true", "menu", "listbox", "tree", "grid", "dialog"]),
        )
        .add("invalid", Token::new(["false", "true", "grammar", "spelling"]))
        .add("live", Token::new(["off", "assertive", "polite"]))
        .add("orientation", Token::new(["horizontal", "vertical"]))
        .add("sort", Token::new(["none", "ascending", "descending", "other"]))
        .add(
            "dropeffect",
            List::with_default(
                Token::new(["copy", "execute", "link", "move", "none", "popup"]),
                ["none"],
            ),
        )
        .add(
            "relevant",
            List::with_default(
                Token::new(["additions", "all", "removals", "text"]),
                ["additions", "text"],
            ),
        )
}
