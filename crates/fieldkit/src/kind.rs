use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::InputError;

/// The kind of input being rendered
///
/// Descriptors name kinds by string (`"input"`, `"textarea"`, `"checkbox"`,
/// `"radio"`). Any other string is rejected with
/// [`InputError::UnknownKind`] when parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InputKind {
    Input,
    Textarea,
    Checkbox,
    Radio,
}

impl InputKind {
    /// Every declared kind, in descriptor order
    pub const ALL: [InputKind; 4] = [
        InputKind::Input,
        InputKind::Textarea,
        InputKind::Checkbox,
        InputKind::Radio,
    ];

    /// Name used in descriptor files
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Input => "input",
            InputKind::Textarea => "textarea",
            InputKind::Checkbox => "checkbox",
            InputKind::Radio => "radio",
        }
    }

    /// Whether a renderer exists for this kind
    pub fn is_supported(&self) -> bool {
        !matches!(self, InputKind::Checkbox)
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for InputKind {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| InputError::UnknownKind(s.to_string()))
    }
}

impl TryFrom<String> for InputKind {
    type Error = InputError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<InputKind> for String {
    fn from(kind: InputKind) -> Self {
        kind.as_str().to_string()
    }
}
