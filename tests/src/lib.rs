//! Shared fixtures for the fieldkit integration tests.

use fieldkit::{ClassNames, Element, Input, RenderedInput, SequentialIds, Tag};

/// A signup form exercising every supported kind
pub const SIGNUP_TOML: &str = r#"
[[fields]]
kind = "input"
label = "Email"
attributes = { type = "email", required = true, placeholder = "you@example.com" }

[[fields]]
kind = "textarea"
label = "About you"
attributes = { rows = 4, maxLength = 280 }

[[fields]]
kind = "radio"
label = "Plan"

[fields.radio_group]
required = true
radios = [
    { key = "monthly", label = "Monthly" },
    { key = "annual", label = "Annual" },
]
"#;

/// Render with deterministic ids and default classes
pub fn render_stable(input: &Input) -> RenderedInput {
    input
        .render_with(&mut SequentialIds::new(), &ClassNames::default())
        .expect("fixture input should render")
}

/// Every form control (`input` or `textarea`) paired with the label that
/// follows it
pub fn control_label_pairs(root: &Element) -> Vec<(&Element, &Element)> {
    let elements = root.descendants();
    elements
        .iter()
        .enumerate()
        .filter(|(_, e)| matches!(e.tag, Tag::Input | Tag::Textarea))
        .filter_map(|(i, control)| {
            elements[i + 1..]
                .iter()
                .find(|e| e.tag == Tag::Label)
                .map(|label| (*control, *label))
        })
        .collect()
}
