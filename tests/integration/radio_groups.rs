use std::collections::HashSet;

use assert_matches::assert_matches;
use fieldkit::prelude::*;
use fieldkit_tests::{control_label_pairs, render_stable};
use pretty_assertions::assert_eq;

fn plan_group() -> RadioGroup {
    RadioGroup::new(true)
        .option("monthly", "Monthly")
        .option("annual", "Annual")
}

#[test]
fn plan_example() {
    let input = Input::new(InputKind::Radio, "Plan").with_radio_group(plan_group());
    let rendered = render_stable(&input);

    let caption = rendered.element.child_elements().next().unwrap();
    assert_eq!(caption.text_content(), "Plan");
    assert_eq!(caption.text_attr("data-cw-input-required"), Some("true"));

    let radios = rendered.element.find_all(Tag::Input);
    assert_eq!(radios.len(), 2);
    for radio in radios {
        assert_eq!(radio.text_attr("type"), Some("radio"));
        assert_eq!(radio.text_attr("name"), Some(rendered.id.as_str()));
        assert!(radio.flag("required"));
    }
}

#[test]
fn option_ids_are_distinct_and_labelled() {
    let mut group = RadioGroup::new(false);
    for n in 0..8 {
        group = group.option(format!("k{}", n), format!("Option {}", n));
    }
    let rendered = Input::new(InputKind::Radio, "Pick one")
        .with_radio_group(group)
        .render()
        .unwrap();

    let pairs = control_label_pairs(&rendered.element);
    assert_eq!(pairs.len(), 8);

    let ids: HashSet<&str> = pairs.iter().filter_map(|(c, _)| c.id()).collect();
    assert_eq!(ids.len(), 8);
    assert!(!ids.contains(rendered.id.as_str()));

    for (n, (control, label)) in pairs.iter().enumerate() {
        assert_eq!(label.text_attr("for"), control.id());
        assert_eq!(label.text_content(), format!("Option {}", n));
        assert!(!control.flag("required"));
    }
}

#[test]
fn group_values_override_caller_attributes() {
    let group = RadioGroup::new(true).with_option(
        RadioOption::new("x", "X").with_attributes(
            InputAttributes::new()
                .input_type("text")
                .name("mine")
                .required(false)
                .placeholder("kept"),
        ),
    );
    let rendered = render_stable(&Input::new(InputKind::Radio, "Group").with_radio_group(group));

    let radio = rendered.element.find_all(Tag::Input)[0];
    assert_eq!(radio.text_attr("type"), Some("radio"));
    assert_eq!(radio.text_attr("name"), Some("radio-1"));
    assert!(radio.flag("required"));
    assert_eq!(radio.text_attr("placeholder"), Some("kept"));
}

#[test]
fn duplicate_keys_abort_render() {
    let group = plan_group().option("monthly", "Monthly again");
    let result = Input::new(InputKind::Radio, "Plan")
        .with_radio_group(group)
        .render();

    assert_matches!(result, Err(InputError::DuplicateRadioKey { key }) if key == "monthly");
}

#[test]
fn caller_group_is_not_mutated() {
    let input = Input::new(InputKind::Radio, "Plan").with_radio_group(plan_group());
    let before = input.clone();

    input.render().unwrap();
    input.render().unwrap();

    assert_eq!(input, before);
}
