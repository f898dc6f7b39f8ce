use assert_matches::assert_matches;
use fieldkit::prelude::*;
use fieldkit::{RandomIds, SequentialIds};
use fieldkit_html::{element_to_html, HtmlOptions};
use fieldkit_tests::{control_label_pairs, render_stable};
use pretty_assertions::assert_eq;

#[test]
fn email_input_renders_linked_label() {
    let input = Input::new(InputKind::Input, "Email").with_attributes(
        InputAttributes::new().input_type("email").required(true),
    );
    let rendered = render_stable(&input);

    let pairs = control_label_pairs(&rendered.element);
    assert_eq!(pairs.len(), 1);

    let (control, label) = pairs[0];
    assert_eq!(control.tag, Tag::Input);
    assert_eq!(control.text_attr("type"), Some("email"));
    assert!(control.flag("required"));
    assert_eq!(control.id(), Some(rendered.id.as_str()));
    assert_eq!(label.text_attr("for"), control.id());
    assert_eq!(label.text_content(), "Email");
}

#[test]
fn textarea_label_targets_textarea() {
    let rendered = textarea("Comments")
        .rows(6)
        .render_with(&mut RandomIds, &ClassNames::default())
        .unwrap();

    let pairs = control_label_pairs(&rendered.element);
    assert_eq!(pairs.len(), 1);
    let (control, label) = pairs[0];
    assert_eq!(control.tag, Tag::Textarea);
    assert!(rendered.id.starts_with("textarea-"));
    assert_eq!(control.id(), Some(rendered.id.as_str()));
    assert_eq!(label.text_attr("for"), Some(rendered.id.as_str()));
}

#[test]
fn identical_calls_get_different_ids() {
    let input = input("Name").placeholder("Ada").build();

    let first = input.render().unwrap();
    let second = input.render().unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(
        first.element.find_all(Tag::Input)[0].text_attr("placeholder"),
        second.element.find_all(Tag::Input)[0].text_attr("placeholder")
    );
}

#[test]
fn wrapper_is_only_root() {
    let rendered = render_stable(&input("Name").build());

    assert_eq!(rendered.element.tag, Tag::Div);
    assert_eq!(rendered.element.text_attr("class"), Some("wrapper"));
    let tags: Vec<Tag> = rendered.element.child_elements().map(|e| e.tag).collect();
    assert_eq!(tags, vec![Tag::Input, Tag::Label]);
}

#[test]
fn unknown_kind_is_explicit_error() {
    assert_matches!(
        "multiselect".parse::<InputKind>(),
        Err(InputError::UnknownKind(kind)) if kind == "multiselect"
    );
}

#[test]
fn checkbox_fails_without_markup() {
    let result = checkbox("Subscribe").input_type("checkbox").render();
    assert_eq!(result, Err(InputError::UnsupportedKind(InputKind::Checkbox)));
}

#[test]
fn rendered_tree_serializes_to_json() {
    let rendered = input("Age")
        .input_type("number")
        .value(30)
        .render_with(&mut SequentialIds::new(), &ClassNames::default())
        .unwrap();

    let json = rendered.element.to_json().unwrap();
    let parsed = Element::from_json(&json).unwrap();
    assert_eq!(parsed, rendered.element);

    let html = element_to_html(&parsed, &HtmlOptions::default());
    assert!(html.contains("<input id=\"input-1\" type=\"number\" value=\"30\">"));
}
