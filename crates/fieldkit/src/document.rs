use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::{ClassNames, DocumentError, IdSource, Input, RenderedInput};

/// A form descriptor file: class names plus an ordered list of inputs
///
/// ```toml
/// [classes]
/// wrapper = "field"
///
/// [[fields]]
/// kind = "input"
/// label = "Email"
/// attributes = { type = "email", required = true }
///
/// [[fields]]
/// kind = "radio"
/// label = "Plan"
/// radio_group = { required = true, radios = [
///     { key = "monthly", label = "Monthly" },
///     { key = "annual", label = "Annual" },
/// ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDocument {
    #[serde(default)]
    pub classes: ClassNames,

    #[serde(default)]
    pub fields: Vec<Input>,
}

impl FormDocument {
    pub fn from_toml_str(source: &str) -> Result<Self, DocumentError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Read a `.toml` or `.json` descriptor, picking the format by extension
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        // Check the format first so an unsupported file is never read
        if extension != "toml" && extension != "json" {
            return Err(DocumentError::UnsupportedFormat(extension));
        }

        let source = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = source.len(), "loaded form descriptor");

        match extension.as_str() {
            "toml" => Self::from_toml_str(&source),
            _ => Self::from_json_str(&source),
        }
    }

    /// Render every field in order with this document's class names
    ///
    /// Stops at the first failing field; nothing is returned for the fields
    /// that rendered before it.
    pub fn render_all<I>(&self, ids: &mut I) -> Result<Vec<RenderedInput>, DocumentError>
    where
        I: IdSource + ?Sized,
    {
        self.fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                field
                    .render_with(ids, &self.classes)
                    .map_err(|source| DocumentError::Field {
                        index,
                        label: field.label.clone(),
                        source,
                    })
            })
            .collect()
    }
}
