//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use entryform::config::FormConfig;
use entryform::masked::{
    FieldEvent, GroupedPhone, Key, MaskedFieldConfig, MaskedFieldController, MaskedGroups,
};
use entryform::messages::Msg;
use entryform::model::EntryForm;
use entryform::update::update;
use entryform::Cmd;

/// Values reported through the value-change callback, in order
pub type Reported = Rc<RefCell<Vec<String>>>;

/// Empty 10-digit phone field
pub fn phone_field() -> MaskedFieldController {
    MaskedFieldController::new(MaskedFieldConfig::new("phone", 10), GroupedPhone)
}

/// Empty 16-digit PIN field with the default `#` mask
pub fn pin_field() -> MaskedFieldController {
    MaskedFieldController::new(MaskedFieldConfig::new("pin", 16), MaskedGroups::default())
}

/// Attach a callback that records every reported value
pub fn recording(field: MaskedFieldController) -> (MaskedFieldController, Reported) {
    let seen: Reported = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let field = field.with_on_value_change(move |value| sink.borrow_mut().push(value.to_string()));
    (field, seen)
}

/// Press one key per character
pub fn type_str(field: &mut MaskedFieldController, text: &str) {
    for ch in text.chars() {
        field.handle(FieldEvent::Key(Key::Char(ch)));
    }
}

pub fn select(field: &mut MaskedFieldController, anchor: usize, head: usize) {
    field.handle(FieldEvent::Select { anchor, head });
}

/// The built-in Air Fryer form
pub fn builtin_form() -> EntryForm {
    EntryForm::new(&FormConfig::builtin().expect("built-in form parses"))
}

/// Focus `id` and type `text` into it through `update`
pub fn fill(form: &mut EntryForm, id: &str, text: &str) {
    update(form, Msg::Focus(id.to_string()));
    for ch in text.chars() {
        update(form, Msg::Edit(FieldEvent::Key(Key::Char(ch))));
    }
}

/// Fill every field of the built-in form with valid values
pub fn fill_valid(form: &mut EntryForm) {
    fill(form, "firstName", "John");
    fill(form, "lastName", "Doe");
    fill(form, "email", "john@example.com");
    fill(form, "amount", "249.99");
    fill(form, "phone", "5551234567");
    fill(form, "pin", "1234567890123456");
}

pub fn submit(form: &mut EntryForm) -> Option<Cmd> {
    update(form, Msg::Submit)
}
