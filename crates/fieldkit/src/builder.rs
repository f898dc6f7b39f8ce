use crate::{
    ClassNames, FieldValue, IdSource, Input, InputAttributes, InputError, InputKind, RadioGroup,
    RadioOption, RenderedInput,
};

/// Builder for [`Input`] descriptions
#[derive(Debug, Clone)]
pub struct InputBuilder {
    kind: InputKind,
    label: String,
    attributes: Option<InputAttributes>,
    radio_group: Option<RadioGroup>,
}

impl InputBuilder {
    /// Create a builder for the given kind and label
    pub fn new(kind: InputKind, label: impl Into<String>) -> Self {
        InputBuilder {
            kind,
            label: label.into(),
            attributes: None,
            radio_group: None,
        }
    }

    /// Replace the whole attribute bag
    pub fn attributes(mut self, attributes: InputAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Apply a setter to the attribute bag, creating it if needed
    fn with_attrs(mut self, f: impl FnOnce(InputAttributes) -> InputAttributes) -> Self {
        self.attributes = Some(f(self.attributes.take().unwrap_or_default()));
        self
    }

    /// Set the `type` attribute
    pub fn input_type(self, input_type: impl Into<String>) -> Self {
        self.with_attrs(|a| a.input_type(input_type))
    }

    /// Set the `pattern` attribute
    pub fn pattern(self, pattern: impl Into<String>) -> Self {
        self.with_attrs(|a| a.pattern(pattern))
    }

    /// Set the `maxlength` attribute
    pub fn max_length(self, max_length: u32) -> Self {
        self.with_attrs(|a| a.max_length(max_length))
    }

    /// Set the `rows` attribute
    pub fn rows(self, rows: u32) -> Self {
        self.with_attrs(|a| a.rows(rows))
    }

    /// Set the `value` attribute
    pub fn value(self, value: impl Into<FieldValue>) -> Self {
        self.with_attrs(|a| a.value(value))
    }

    /// Set the `required` attribute
    pub fn required(self, required: bool) -> Self {
        self.with_attrs(|a| a.required(required))
    }

    /// Set the `name` attribute
    pub fn name(self, name: impl Into<String>) -> Self {
        self.with_attrs(|a| a.name(name))
    }

    /// Set the `placeholder` attribute
    pub fn placeholder(self, placeholder: impl Into<String>) -> Self {
        self.with_attrs(|a| a.placeholder(placeholder))
    }

    /// Set the `required` flag shared by every radio option
    pub fn group_required(mut self, required: bool) -> Self {
        self.radio_group.get_or_insert_with(RadioGroup::default).required = required;
        self
    }

    /// Append a radio option
    pub fn option(self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.radio_option(RadioOption::new(key, label))
    }

    /// Append a radio option with its own attribute bag
    pub fn radio_option(mut self, option: RadioOption) -> Self {
        self.radio_group
            .get_or_insert_with(RadioGroup::default)
            .radios
            .push(option);
        self
    }

    /// Finish into an [`Input`]
    pub fn build(self) -> Input {
        Input {
            kind: self.kind,
            label: self.label,
            attributes: self.attributes,
            radio_group: self.radio_group,
        }
    }

    /// Build and render with random ids and default classes
    pub fn render(self) -> Result<RenderedInput, InputError> {
        self.build().render()
    }

    /// Build and render with the given id source and classes
    pub fn render_with<I>(self, ids: &mut I, classes: &ClassNames) -> Result<RenderedInput, InputError>
    where
        I: IdSource + ?Sized,
    {
        self.build().render_with(ids, classes)
    }
}

// Convenience constructors

/// Builder for a single-line input
pub fn input(label: impl Into<String>) -> InputBuilder {
    InputBuilder::new(InputKind::Input, label)
}

/// Builder for a multi-line textarea
pub fn textarea(label: impl Into<String>) -> InputBuilder {
    InputBuilder::new(InputKind::Textarea, label)
}

/// Builder for a checkbox; rendering it fails until checkboxes get a renderer
pub fn checkbox(label: impl Into<String>) -> InputBuilder {
    InputBuilder::new(InputKind::Checkbox, label)
}

/// Builder for a radio group
pub fn radio(label: impl Into<String>) -> InputBuilder {
    InputBuilder::new(InputKind::Radio, label)
}
