//! # Fieldkit
//!
//! Labeled form inputs rendered from a declarative description.
//!
//! An [`Input`] names a kind, a label and an optional attribute bag. Rendering
//! it generates an element id, links the label to the input through that id,
//! and wraps the result in a styled `div`. Radio inputs take a [`RadioGroup`]
//! whose options all share the generated id as their `name`.
//!
//! ## Example
//!
//! ```rust
//! use fieldkit::prelude::*;
//!
//! let rendered = input("Email")
//!     .input_type("email")
//!     .required(true)
//!     .render()
//!     .unwrap();
//!
//! let field = rendered.element.find_all(Tag::Input)[0];
//! assert_eq!(field.id(), Some(rendered.id.as_str()));
//! ```

pub mod attributes;
pub mod builder;
pub mod classes;
pub mod document;
pub mod error;
pub mod ids;
pub mod input;
pub mod kind;
pub mod radio;
mod render;

pub use fieldkit_core::{AttrValue, Element, Node, Tag};

pub use attributes::{FieldValue, InputAttributes};
pub use builder::{checkbox, input, radio, textarea, InputBuilder};
pub use classes::ClassNames;
pub use document::FormDocument;
pub use error::{DocumentError, InputError};
pub use ids::{IdSource, RandomIds, SequentialIds};
pub use input::{Input, RenderedInput};
pub use kind::InputKind;
pub use radio::{RadioGroup, RadioOption};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::builder::{checkbox, input, radio, textarea};
    pub use crate::{
        ClassNames, Element, FieldValue, Input, InputAttributes, InputError, InputKind,
        RadioGroup, RadioOption, RenderedInput, Tag,
    };
}
