use serde::{Deserialize, Serialize};

/// Style classes attached to the rendered markup
///
/// Defaults match the class names of the stock stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    /// Outer `div` around every rendered input
    pub wrapper: String,
    /// `span` holding the visible label text
    pub label_text_wrapper: String,
    /// Caption `span` of a radio group
    pub radio_input_label: String,
    /// `div` holding the radio options
    pub radio_input_group: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        ClassNames {
            wrapper: "wrapper".to_string(),
            label_text_wrapper: "labelTextWrapper".to_string(),
            radio_input_label: "radioInputLabel".to_string(),
            radio_input_group: "radioInputGroup".to_string(),
        }
    }
}
