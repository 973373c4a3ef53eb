//! Typed property views over `aria-*` attribute stores.
//!
//! An element stores its accessibility state as flat strings
//! (`aria-hidden="true"`, `aria-dropeffect="copy move"`). This crate
//! exposes that store as a typed, property-style view: booleans read as
//! booleans, numbers as numbers, id references as resolved element
//! handles, and enumerated tokens are validated against their closed
//! sets — while the underlying storage stays plain strings.
//!
//! # Building blocks
//!
//! - [`codec`]: decode/encode pairs per value domain, plus the
//!   [`Token`](codec::Token) and [`List`](codec::List) combinators
//! - [`Registry`]: the fixed table binding property names to codecs
//!   ([`Registry::wai_aria`] ships the standard WAI-ARIA 1.1 table)
//! - [`Element`]: a handle over the raw attribute store
//! - [`Document`]: id resolution and the per-element view cache
//! - [`AriaView`]: the sealed typed view itself
//!
//! # Error model
//!
//! Codecs fail in exactly two ways. *Format errors* mean a value does
//! not fit the domain; they are always recovered — reads fall back to
//! the domain default, writes are dropped. Anything else propagates
//! unchanged, so genuine bugs in custom codecs still surface loudly.
//!
//! # Example
//!
//! ```rust
//! use ariattr::{Document, Value};
//!
//! let doc = Document::new();
//! let menu = doc.create_element_with_id("menu");
//! let button = doc.create_element();
//!
//! let view = doc.view_of(&button).unwrap();
//! view.set("haspopup", "menu").unwrap();
//! view.set("expanded", false).unwrap();
//! view.set("controls", vec!["menu"]).unwrap();
//!
//! assert_eq!(button.attribute("aria-haspopup").as_deref(), Some("menu"));
//! assert_eq!(view.get("expanded").unwrap(), Value::Bool(false));
//!
//! // Id references resolve to element handles on read.
//! let controls = view.get("controls").unwrap();
//! assert_eq!(controls, Value::List(vec![Value::Element(menu)]));
//!
//! // Repeated requests yield the same view instance.
//! let again = doc.view_of(&button).unwrap();
//! assert!(std::rc::Rc::ptr_eq(&view, &again));
//! ```

pub mod codec;
mod document;
mod element;
mod registry;
mod value;
mod view;

pub use codec::{Codec, CodecError, NoResolver, Resolver};
pub use document::{Document, ViewTarget};
pub use element::{Element, WeakElement};
pub use registry::Registry;
pub use value::Value;
pub use view::{AriaView, ATTRIBUTE_PREFIX};
