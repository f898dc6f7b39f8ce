use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Element tags emitted by the input renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Div,
    Span,
    Input,
    Textarea,
    Label,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::Input => "input",
            Tag::Textarea => "textarea",
            Tag::Label => "label",
        }
    }

    /// Void elements have no children and no closing tag
    pub fn is_void(&self) -> bool {
        matches!(self, Tag::Input)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribute value
///
/// `Flag(false)` stays in the tree so callers can see what was passed
/// through, but HTML backends omit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Flag(bool),
    Number(i64),
    Text(String),
}

impl AttrValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            AttrValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Flag(b) => write!(f, "{}", b),
            AttrValue::Number(n) => write!(f, "{}", n),
            AttrValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Flag(b)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        AttrValue::Number(n)
    }
}

impl From<u32> for AttrValue {
    fn from(n: u32) -> Self {
        AttrValue::Number(n as i64)
    }
}

/// A node in the markup tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// A single element with ordered attributes and children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: Tag,

    /// Attributes in insertion order. Setting an existing name replaces the
    /// value but keeps its position.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, AttrValue>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element with the given tag
    pub fn new(tag: Tag) -> Self {
        Element {
            tag,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Set the `class` attribute
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class.into())
    }

    /// Append a child element or text node
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.add_child(child);
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a text node
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::Text(text.into()))
    }

    pub fn add_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Attribute value if it is text
    pub fn text_attr(&self, name: &str) -> Option<&str> {
        self.attr(name).and_then(AttrValue::as_text)
    }

    /// True only when the attribute is present as `Flag(true)`
    pub fn flag(&self, name: &str) -> bool {
        self.attr(name).and_then(AttrValue::as_flag).unwrap_or(false)
    }

    pub fn id(&self) -> Option<&str> {
        self.text_attr("id")
    }

    /// Child elements, skipping text nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// All descendant elements in document order, not including `self`
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_descendants(self, &mut out);
        out
    }

    /// Descendant elements with the given tag, in document order
    pub fn find_all(&self, tag: Tag) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.tag == tag)
            .collect()
    }

    /// Concatenated text of every text node below this element
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn collect_descendants<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
    for child in element.child_elements() {
        out.push(child);
        collect_descendants(child, out);
    }
}

fn collect_text(element: &Element, out: &mut String) {
    for child in &element.children {
        match child {
            Node::Text(text) => out.push_str(text),
            Node::Element(e) => collect_text(e, out),
        }
    }
}
