//! Kind-specific renderers. Each returns the nodes that go inside the
//! wrapper `div`.

use fieldkit_core::{Element, Node, Tag};

use crate::{ClassNames, IdSource, InputAttributes, RadioOption};

/// `<label for=id><span class=..>label</span></label>`
fn label_for(id: &str, label: &str, classes: &ClassNames) -> Element {
    Element::new(Tag::Label).with_attr("for", id).with_child(
        Element::new(Tag::Span)
            .with_class(classes.label_text_wrapper.as_str())
            .with_text(label),
    )
}

fn labeled(
    tag: Tag,
    id: &str,
    label: &str,
    attributes: Option<&InputAttributes>,
    classes: &ClassNames,
) -> Vec<Node> {
    let mut field = Element::new(tag).with_attr("id", id);
    if let Some(attributes) = attributes {
        attributes.apply_to(&mut field);
    }

    vec![field.into(), label_for(id, label, classes).into()]
}

pub(crate) fn plain_input(
    id: &str,
    label: &str,
    attributes: Option<&InputAttributes>,
    classes: &ClassNames,
) -> Vec<Node> {
    labeled(Tag::Input, id, label, attributes, classes)
}

pub(crate) fn textarea(
    id: &str,
    label: &str,
    attributes: Option<&InputAttributes>,
    classes: &ClassNames,
) -> Vec<Node> {
    labeled(Tag::Textarea, id, label, attributes, classes)
}

/// Caption followed by one `div` per option, each holding a plain input
/// with its own id.
pub(crate) fn radio_group<I>(
    label: &str,
    options: &[RadioOption],
    ids: &mut I,
    classes: &ClassNames,
) -> Vec<Node>
where
    I: IdSource + ?Sized,
{
    // Uniform after annotation; empty groups count as required
    let all_required = options.iter().all(|option| {
        option
            .attributes
            .as_ref()
            .is_some_and(InputAttributes::is_required)
    });

    let caption = Element::new(Tag::Span)
        .with_attr("data-cw-input-required", all_required.to_string())
        .with_class(classes.radio_input_label.as_str())
        .with_text(label);

    let group = Element::new(Tag::Div)
        .with_class(classes.radio_input_group.as_str())
        .with_children(options.iter().map(|option| {
            let id = ids.option_id();
            Element::new(Tag::Div).with_children(plain_input(
                &id,
                &option.label,
                option.attributes.as_ref(),
                classes,
            ))
        }));

    vec![caption.into(), group.into()]
}
