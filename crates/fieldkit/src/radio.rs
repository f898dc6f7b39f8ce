use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{InputAttributes, InputError};

/// One choice in a radio group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioOption {
    /// Caller-chosen key, unique within its group
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<InputAttributes>,
}

impl RadioOption {
    /// Create an option with no attribute bag
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        RadioOption {
            key: key.into(),
            label: label.into(),
            attributes: None,
        }
    }

    /// Set the option's attribute bag
    pub fn with_attributes(mut self, attributes: InputAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }
}

/// A mutually exclusive set of choices rendered as one control
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadioGroup {
    /// Applied to every option
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub radios: Vec<RadioOption>,
}

impl RadioGroup {
    /// Create an empty group
    pub fn new(required: bool) -> Self {
        RadioGroup {
            required,
            radios: Vec::new(),
        }
    }

    /// Append an option with no extra attributes
    pub fn option(self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.with_option(RadioOption::new(key, label))
    }

    /// Append an option
    pub fn with_option(mut self, option: RadioOption) -> Self {
        self.radios.push(option);
        self
    }

    /// Check that no two options share a key
    pub fn check_keys(&self) -> Result<(), InputError> {
        let mut seen = HashSet::with_capacity(self.radios.len());
        for radio in &self.radios {
            if !seen.insert(radio.key.as_str()) {
                return Err(InputError::DuplicateRadioKey {
                    key: radio.key.clone(),
                });
            }
        }
        Ok(())
    }

    /// Copies of the options with `type`, `name` and `required` forced to
    /// the group's values. The group itself is left untouched.
    pub fn annotate(&self, group_id: &str) -> Result<Vec<RadioOption>, InputError> {
        self.check_keys()?;

        let options = self
            .radios
            .iter()
            .map(|radio| {
                let mut attributes = radio.attributes.clone().unwrap_or_default();
                attributes.input_type = Some("radio".to_string());
                attributes.name = Some(group_id.to_string());
                attributes.required = Some(self.required);

                RadioOption {
                    key: radio.key.clone(),
                    label: radio.label.clone(),
                    attributes: Some(attributes),
                }
            })
            .collect();

        Ok(options)
    }
}
