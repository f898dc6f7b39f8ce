use fieldkit_core::{Element, Tag};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::render;
use crate::{ClassNames, IdSource, InputAttributes, InputError, InputKind, RadioGroup, RandomIds};

/// Declarative description of one labeled input
///
/// This is the render dispatcher's entry point: [`Input::render`] turns the
/// description into markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    pub kind: InputKind,
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<InputAttributes>,

    /// Only read when `kind` is [`InputKind::Radio`]. Radio inputs ignore
    /// `attributes`; each option carries its own.
    #[serde(default, alias = "radioGroup", skip_serializing_if = "Option::is_none")]
    pub radio_group: Option<RadioGroup>,
}

/// Output of a successful render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedInput {
    /// Id generated for this call. Links input and label, or names the
    /// radio group.
    pub id: String,
    /// The wrapper `div`
    pub element: Element,
}

impl Input {
    /// Create an input with no attributes and no radio group
    pub fn new(kind: InputKind, label: impl Into<String>) -> Self {
        Input {
            kind,
            label: label.into(),
            attributes: None,
            radio_group: None,
        }
    }

    /// Set the attribute bag
    pub fn with_attributes(mut self, attributes: InputAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Set the radio group, used only by radio inputs
    pub fn with_radio_group(mut self, group: RadioGroup) -> Self {
        self.radio_group = Some(group);
        self
    }

    /// Render with random ids and the default class names
    pub fn render(&self) -> Result<RenderedInput, InputError> {
        self.render_with(&mut RandomIds, &ClassNames::default())
    }

    /// Render with a caller-supplied id source and class names
    ///
    /// Fails without producing any markup when the kind has no renderer,
    /// a radio input has no group, or two radio options share a key.
    pub fn render_with<I>(&self, ids: &mut I, classes: &ClassNames) -> Result<RenderedInput, InputError>
    where
        I: IdSource + ?Sized,
    {
        let id = ids.group_id(self.kind);
        debug!(kind = %self.kind, id = %id, label = %self.label, "rendering input");

        let attributes = self.attributes.as_ref();
        let children = match self.kind {
            InputKind::Input => render::plain_input(&id, &self.label, attributes, classes),
            InputKind::Textarea => render::textarea(&id, &self.label, attributes, classes),
            InputKind::Radio => {
                let group = self
                    .radio_group
                    .as_ref()
                    .ok_or_else(|| InputError::MissingRadioGroup {
                        label: self.label.clone(),
                    })?;
                let options = group.annotate(&id)?;
                if self.attributes.is_some() {
                    trace!(id = %id, "ignoring attribute bag on radio input");
                }
                trace!(options = options.len(), required = group.required, "annotated radio group");
                render::radio_group(&self.label, &options, ids, classes)
            }
            InputKind::Checkbox => return Err(InputError::UnsupportedKind(self.kind)),
        };

        if self.radio_group.is_some() && self.kind != InputKind::Radio {
            trace!(kind = %self.kind, "ignoring radio group on non-radio input");
        }

        let element = Element::new(Tag::Div)
            .with_class(classes.wrapper.as_str())
            .with_children(children);

        Ok(RenderedInput { id, element })
    }
}
