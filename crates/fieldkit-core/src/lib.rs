//! # Fieldkit Core
//!
//! Markup tree types for the fieldkit form input renderers.
//!
//! Every renderer in `fieldkit` produces an [`Element`] tree instead of a
//! string. Backends (`fieldkit-html`, or JSON through serde) turn that tree
//! into output, so tests can inspect ids, labels and attributes structurally.

pub mod markup;

pub use markup::{AttrValue, Element, Node, Tag};
