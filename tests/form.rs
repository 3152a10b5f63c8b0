//! Form tests - live validation, submit and reset through `update`

mod common;

use common::{builtin_form, fill, fill_valid, submit};
use entryform::masked::{FieldEvent, Key};
use entryform::messages::Msg;
use entryform::model::FieldInput;
use entryform::update::update;
use entryform::view::render;
use entryform::Cmd;

#[test]
fn test_empty_submit_lists_every_field() {
    let mut form = builtin_form();
    let errors = match submit(&mut form) {
        Some(Cmd::Rejected(errors)) => errors,
        other => panic!("expected rejection, got {:?}", other),
    };

    let lookup = |id: &str| {
        errors
            .iter()
            .find(|(field, _)| field == id)
            .map(|(_, message)| message.as_str())
    };
    assert_eq!(lookup("firstName"), Some("First Name is required."));
    assert_eq!(lookup("lastName"), Some("Last Name is required."));
    assert_eq!(lookup("email"), Some("Please enter a valid email address."));
    assert_eq!(
        lookup("amount"),
        Some("Please enter a valid estimated amount.")
    );
    assert_eq!(lookup("phone"), Some("Phone Number must be 10 digits."));
    assert_eq!(lookup("pin"), Some("PIN must be 16 digits."));
    assert_eq!(form.submissions, 0);
}

#[test]
fn test_valid_submit_emits_canonical_values_and_resets() {
    let mut form = builtin_form();
    fill_valid(&mut form);
    assert_eq!(
        form.field("phone").unwrap().display(),
        "(555) 123 - 4567"
    );
    assert!(form.is_valid());

    let entry = match submit(&mut form) {
        Some(Cmd::Submitted(entry)) => entry,
        other => panic!("expected submission, got {:?}", other),
    };
    assert_eq!(entry.get("firstName"), Some("John"));
    assert_eq!(entry.get("phone"), Some("5551234567"));
    assert_eq!(entry.get("pin"), Some("1234567890123456"));
    assert_eq!(entry.get("amount"), Some("249.99"));

    assert_eq!(form.submissions, 1);
    assert_eq!(form.focused, 0);
    for field in &form.fields {
        assert_eq!(field.value(), "", "{} not cleared", field.id());
        assert_eq!(field.display(), "");
        assert_eq!(field.error(), None);
    }
}

#[test]
fn test_masked_field_error_follows_live_validation() {
    let mut form = builtin_form();
    fill(&mut form, "phone", "555");

    let field = form.field("phone").unwrap();
    assert_eq!(field.error(), Some("Phone Number must be 10 digits."));
    match &field.input {
        FieldInput::Masked(masked) => {
            assert!(masked.error());
            assert_eq!(masked.error_message(), "Phone Number must be 10 digits.");
        }
        FieldInput::Text(_) => panic!("phone should be masked"),
    }

    fill(&mut form, "phone", "1234567");
    let field = form.field("phone").unwrap();
    assert_eq!(field.error(), None);
    assert_eq!(field.value(), "5551234567");
}

#[test]
fn test_selection_alone_does_not_validate() {
    let mut form = builtin_form();
    update(&mut form, Msg::Focus("pin".into()));
    update(
        &mut form,
        Msg::Edit(FieldEvent::Select { anchor: 0, head: 0 }),
    );
    assert_eq!(form.field("pin").unwrap().error(), None);
}

#[test]
fn test_reset_mid_edit_clears_everything() {
    let mut form = builtin_form();
    fill(&mut form, "firstName", "Jo");
    fill(&mut form, "pin", "1234");
    update(&mut form, Msg::Edit(FieldEvent::Select { anchor: 1, head: 3 }));

    update(&mut form, Msg::Reset);

    assert_eq!(form.reset_version(), 1);
    assert_eq!(form.field("firstName").unwrap().value(), "");
    assert_eq!(form.field("pin").unwrap().value(), "");
    assert_eq!(form.field("pin").unwrap().error(), None);

    // Editing works again after the reset
    fill(&mut form, "pin", "99");
    assert_eq!(form.field("pin").unwrap().display(), "##");
}

#[test]
fn test_edit_field_targets_without_focus() {
    let mut form = builtin_form();
    update(
        &mut form,
        Msg::EditField {
            id: "phone".into(),
            event: FieldEvent::Paste("+1 (555) 222-3333".into()),
        },
    );
    assert_eq!(form.focused, 0);
    // Leading country code digit counts; the rest is truncated to ten
    assert_eq!(form.field("phone").unwrap().value(), "1555222333");
}

#[test]
fn test_focus_unknown_field_keeps_focus() {
    let mut form = builtin_form();
    update(&mut form, Msg::Focus("email".into()));
    update(&mut form, Msg::Focus("nope".into()));
    assert_eq!(form.focused_field().unwrap().id(), "email");
}

#[test]
fn test_text_field_backspace() {
    let mut form = builtin_form();
    fill(&mut form, "lastName", "Doe");
    update(&mut form, Msg::Edit(FieldEvent::Key(Key::Backspace)));
    assert_eq!(form.field("lastName").unwrap().value(), "Do");
}

#[test]
fn test_render_reflects_submit_state() {
    let mut form = builtin_form();
    assert!(render(&form).contains("[Submit: disabled]"));

    fill_valid(&mut form);
    let text = render(&form);
    assert!(text.contains("[Submit: enabled]"), "{}", text);
    assert!(text.contains("PIN: ####-####-####-####|"), "{}", text);
}
