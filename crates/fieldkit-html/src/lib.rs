//! # Fieldkit HTML
//!
//! HTML backend for fieldkit markup trees.
//!
//! Boolean attributes follow HTML rules: `Flag(true)` is written as a bare
//! attribute name and `Flag(false)` is left out. A `textarea`'s `value`
//! attribute becomes its text content.

use fieldkit_core::{AttrValue, Element, Node, Tag};
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Output formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlOptions {
    /// One element per line, indented by nesting depth
    pub pretty: bool,
    /// Spaces per nesting level when `pretty` is set
    pub indent: usize,
}

impl HtmlOptions {
    pub fn compact() -> Self {
        HtmlOptions {
            pretty: false,
            indent: 2,
        }
    }

    pub fn pretty() -> Self {
        HtmlOptions {
            pretty: true,
            indent: 2,
        }
    }
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::compact()
    }
}

/// Serialize a single node
pub fn to_html(node: &Node, options: &HtmlOptions) -> String {
    let mut writer = HtmlWriter::new(options);
    writer.node(node, 0);
    writer.finish()
}

/// Serialize an element and everything below it
pub fn element_to_html(element: &Element, options: &HtmlOptions) -> String {
    let mut writer = HtmlWriter::new(options);
    writer.element(element, 0);
    writer.finish()
}

/// Serialize several rendered fields, one after another
pub fn fragments_to_html(elements: &[Element], options: &HtmlOptions) -> String {
    elements
        .iter()
        .map(|element| element_to_html(element, options))
        .collect::<Vec<_>>()
        .join("\n")
}

struct HtmlWriter<'a> {
    out: String,
    options: &'a HtmlOptions,
}

impl<'a> HtmlWriter<'a> {
    fn new(options: &'a HtmlOptions) -> Self {
        HtmlWriter {
            out: String::new(),
            options,
        }
    }

    fn finish(mut self) -> String {
        if self.options.pretty {
            let trimmed = self.out.trim_end_matches('\n').len();
            self.out.truncate(trimmed);
        }
        self.out
    }

    fn indent(&mut self, depth: usize) {
        if self.options.pretty {
            self.out
                .extend(std::iter::repeat(' ').take(depth * self.options.indent));
        }
    }

    fn newline(&mut self) {
        if self.options.pretty {
            self.out.push('\n');
        }
    }

    fn node(&mut self, node: &Node, depth: usize) {
        match node {
            Node::Element(element) => self.element(element, depth),
            Node::Text(text) => {
                self.indent(depth);
                self.out.push_str(&encode_text(text));
                self.newline();
            }
        }
    }

    fn element(&mut self, element: &Element, depth: usize) {
        let is_textarea = element.tag == Tag::Textarea;

        self.indent(depth);
        self.open_tag(element, is_textarea);

        if element.tag.is_void() {
            self.newline();
            return;
        }

        if is_textarea {
            if let Some(value) = element.attr("value").filter(|v| v.as_flag().is_none()) {
                self.out.push_str(&encode_text(&value.to_string()));
            }
            self.close_tag(element.tag);
            self.newline();
            return;
        }

        let inline = element
            .children
            .iter()
            .all(|child| matches!(child, Node::Text(_)));

        if inline {
            for child in &element.children {
                if let Node::Text(text) = child {
                    self.out.push_str(&encode_text(text));
                }
            }
        } else {
            self.newline();
            for child in &element.children {
                self.node(child, depth + 1);
            }
            self.indent(depth);
        }

        self.close_tag(element.tag);
        self.newline();
    }

    fn open_tag(&mut self, element: &Element, skip_value: bool) {
        self.out.push('<');
        self.out.push_str(element.tag.as_str());

        for (name, value) in &element.attributes {
            if skip_value && name == "value" {
                continue;
            }
            match value {
                AttrValue::Flag(false) => {}
                AttrValue::Flag(true) => {
                    self.out.push(' ');
                    self.out.push_str(name);
                }
                AttrValue::Number(n) => {
                    self.out.push_str(&format!(" {}=\"{}\"", name, n));
                }
                AttrValue::Text(text) => {
                    self.out.push_str(&format!(
                        " {}=\"{}\"",
                        name,
                        encode_double_quoted_attribute(text)
                    ));
                }
            }
        }

        self.out.push('>');
    }

    fn close_tag(&mut self, tag: Tag) {
        self.out.push_str("</");
        self.out.push_str(tag.as_str());
        self.out.push('>');
    }
}
