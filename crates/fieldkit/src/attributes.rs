use fieldkit_core::{AttrValue, Element};
use serde::{Deserialize, Serialize};

/// Value of an input's `value` attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<FieldValue> for AttrValue {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Integer(n) => AttrValue::Number(n),
            FieldValue::Float(f) => AttrValue::Text(f.to_string()),
            FieldValue::Text(s) => AttrValue::Text(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Integer(n as i64)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

/// Attribute bag passed through to the rendered `input` or `textarea`
///
/// Only the fields that are set are emitted. Radio options get `type`,
/// `name` and `required` overwritten by their group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputAttributes {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(alias = "max_length", default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

macro_rules! text_setters {
    ($($method:ident => $field:ident),* $(,)?) => {
        $(
            #[doc = concat!("Set `", stringify!($field), "`")]
            pub fn $method<S: Into<String>>(mut self, value: S) -> Self {
                self.$field = Some(value.into());
                self
            }
        )*
    };
}

impl InputAttributes {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    text_setters! {
        input_type => input_type,
        pattern => pattern,
        name => name,
        placeholder => placeholder,
    }

    /// Set `maxlength`
    pub fn max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Set `rows`
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Set `value`
    pub fn value<V: Into<FieldValue>>(mut self, value: V) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set `required`; `false` is kept, not dropped
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// `required` as set, treating an absent flag as false
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    /// Copy every set field onto `element` as a native attribute
    pub fn apply_to(&self, element: &mut Element) {
        if let Some(input_type) = &self.input_type {
            element.set_attr("type", input_type.as_str());
        }
        if let Some(pattern) = &self.pattern {
            element.set_attr("pattern", pattern.as_str());
        }
        if let Some(max_length) = self.max_length {
            element.set_attr("maxlength", max_length);
        }
        if let Some(rows) = self.rows {
            element.set_attr("rows", rows);
        }
        if let Some(value) = &self.value {
            element.set_attr("value", value.clone());
        }
        if let Some(required) = self.required {
            element.set_attr("required", required);
        }
        if let Some(name) = &self.name {
            element.set_attr("name", name.as_str());
        }
        if let Some(placeholder) = &self.placeholder {
            element.set_attr("placeholder", placeholder.as_str());
        }
    }
}
