use std::fs;

use assert_matches::assert_matches;
use fieldkit::{DocumentError, FormDocument, InputKind, SequentialIds, Tag};
use fieldkit_html::{fragments_to_html, HtmlOptions};
use fieldkit_tests::SIGNUP_TOML;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn toml_file_renders_every_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("signup.toml");
    fs::write(&path, SIGNUP_TOML).unwrap();

    let doc = FormDocument::read_from_file(&path).unwrap();
    let kinds: Vec<InputKind> = doc.fields.iter().map(|f| f.kind).collect();
    assert_eq!(kinds, vec![InputKind::Input, InputKind::Textarea, InputKind::Radio]);

    let rendered = doc.render_all(&mut SequentialIds::new()).unwrap();
    assert_eq!(rendered.len(), 3);
    assert_eq!(rendered[2].element.find_all(Tag::Input).len(), 2);

    let elements: Vec<_> = rendered.into_iter().map(|r| r.element).collect();
    let html = fragments_to_html(&elements, &HtmlOptions::default());
    assert_eq!(html.lines().count(), 3);
    assert!(html.contains("placeholder=\"you@example.com\""));
    assert!(html.contains("<textarea id=\"textarea-2\" maxlength=\"280\" rows=\"4\"></textarea>"));
}

#[test]
fn json_file_matches_toml() {
    let toml_doc = FormDocument::from_toml_str(SIGNUP_TOML).unwrap();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("signup.json");
    fs::write(&path, serde_json::to_string(&toml_doc).unwrap()).unwrap();

    let json_doc = FormDocument::read_from_file(&path).unwrap();
    assert_eq!(json_doc, toml_doc);
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = FormDocument::read_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
    assert_matches!(err, DocumentError::Io { .. });
}

#[test]
fn duplicate_key_stops_whole_document() {
    let source = format!(
        "{}\n{}",
        SIGNUP_TOML,
        r#"
[[fields]]
kind = "radio"
label = "Size"

[fields.radio_group]
radios = [
    { key = "s", label = "Small" },
    { key = "s", label = "Also small" },
]
"#
    );
    let doc = FormDocument::from_toml_str(&source).unwrap();

    let err = doc.render_all(&mut SequentialIds::new()).unwrap_err();
    assert_matches!(err, DocumentError::Field { index: 3, .. });
    assert!(err.to_string().contains("duplicate radio option key `s`"));
}
