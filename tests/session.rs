//! Session script tests - whole scripts run against the built-in form

mod common;

use common::builtin_form;
use entryform::session::{run, SessionSummary};

fn run_script(script: &str) -> (String, SessionSummary) {
    let mut form = builtin_form();
    let mut out = Vec::new();
    let summary = run(&mut form, script, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), summary)
}

const VALID_ENTRY: &str = "\
focus firstName
type John
focus lastName
type Doe
focus email
type john@example.com
focus amount
type 249.99
focus phone
type 5551234567
focus pin
type 1234567890123456
";

#[test]
fn test_valid_script_prints_entry_json() {
    let script = format!("{}submit\n", VALID_ENTRY);
    let (out, summary) = run_script(&script);

    assert_eq!(
        out,
        concat!(
            r#"{"firstName":"John","lastName":"Doe","email":"john@example.com","#,
            r#""amount":"249.99","phone":"5551234567","pin":"1234567890123456"}"#,
            "\n"
        )
    );
    assert_eq!(
        summary,
        SessionSummary {
            submitted: 1,
            rejected: 0,
            bad_lines: 0
        }
    );
}

#[test]
fn test_rejected_submit_prints_errors() {
    let (out, summary) = run_script("focus phone\ntype 555\nsubmit\n");

    assert_eq!(summary.rejected, 1);
    assert!(out.contains("error phone: Phone Number must be 10 digits.\n"));
    assert!(out.contains("error firstName: First Name is required.\n"));
}

#[test]
fn test_editing_commands_in_script() {
    let script = "\
focus phone
type 1234567890
select 4 12
backspace
show
";
    let (out, _) = run_script(script);
    assert!(out.contains("> Phone Number: (123|) 789 - 0"), "{}", out);
}

#[test]
fn test_paste_and_delete_in_script() {
    let script = "\
focus phone
paste (555) 000-1111
select 0 0
delete 2
show
";
    let (out, _) = run_script(script);
    assert!(out.contains("> Phone Number: |(500) 011 - 11"), "{}", out);
}

#[test]
fn test_form_is_reset_after_submit() {
    let script = format!("{}submit\nshow\n", VALID_ENTRY);
    let (out, summary) = run_script(&script);
    assert_eq!(summary.submitted, 1);
    assert!(out.contains("> First Name: \n"), "{}", out);
    assert!(out.contains("  PIN: [Enter 16 digits]"), "{}", out);
}

#[test]
fn test_bad_lines_are_counted_and_skipped() {
    let script = "\
# comment
dance
focus phone
type 12
select 1
show
";
    let (out, summary) = run_script(script);
    assert_eq!(summary.bad_lines, 2);
    assert!(out.contains("> Phone Number: (12|"), "{}", out);
}

#[test]
fn test_input_command_replaces_value() {
    let (out, _) = run_script("focus pin\ntype 11\ninput 9999-8888\nshow\n");
    assert!(out.contains("> PIN: ####-####|"), "{}", out);
}
