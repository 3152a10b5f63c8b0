//! Line-oriented session scripts
//!
//! The command-line driver has no window, so input arrives as a script of
//! commands, one per line:
//!
//! ```text
//! focus phone
//! type 5551234567
//! select 1 4
//! backspace
//! paste (555) 000-1111
//! input 555 000 1111
//! submit
//! show
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use std::io::{self, Write};

use crate::commands::Cmd;
use crate::masked::{FieldEvent, Key};
use crate::messages::Msg;
use crate::model::EntryForm;
use crate::update::update;
use crate::view::render;

/// A parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Messages to feed through `update`, in order
    Send(Vec<Msg>),
    /// Print the rendered form
    Show,
}

/// Totals for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub submitted: usize,
    pub rejected: usize,
    pub bad_lines: usize,
}

fn repeat_count(arg: &str) -> Result<usize, String> {
    if arg.is_empty() {
        return Ok(1);
    }
    arg.parse()
        .map_err(|_| format!("Expected a repeat count, got '{}'", arg))
}

/// Parse one script line. Returns `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match trimmed.split_once(' ') {
        Some((verb, rest)) => (verb, rest),
        None => (trimmed, ""),
    };

    let msgs = match verb {
        "focus" if !rest.trim().is_empty() => vec![Msg::Focus(rest.trim().to_string())],
        "type" => rest
            .chars()
            .map(|ch| Msg::Edit(FieldEvent::Key(Key::Char(ch))))
            .collect(),
        "backspace" => {
            let n = repeat_count(rest.trim())?;
            vec![Msg::Edit(FieldEvent::Key(Key::Backspace)); n]
        }
        "delete" => {
            let n = repeat_count(rest.trim())?;
            vec![Msg::Edit(FieldEvent::Key(Key::Delete)); n]
        }
        "select" => {
            let mut parts = rest.split_whitespace().map(str::parse::<usize>);
            match (parts.next(), parts.next(), parts.next()) {
                (Some(Ok(anchor)), Some(Ok(head)), None) => {
                    vec![Msg::Edit(FieldEvent::Select { anchor, head })]
                }
                _ => return Err(format!("Usage: select <anchor> <head>, got '{}'", rest)),
            }
        }
        "paste" => vec![Msg::Edit(FieldEvent::Paste(rest.to_string()))],
        "input" => vec![Msg::Edit(FieldEvent::Change(rest.to_string()))],
        "submit" => vec![Msg::Submit],
        "reset" => vec![Msg::Reset],
        "show" => return Ok(Some(Command::Show)),
        _ => return Err(format!("Unknown command '{}'", trimmed)),
    };
    Ok(Some(Command::Send(msgs)))
}

/// Run a script against the form, writing submitted entries (as JSON),
/// rejections and `show` snapshots to `out`.
pub fn run(
    form: &mut EntryForm,
    script: &str,
    out: &mut impl Write,
) -> io::Result<SessionSummary> {
    let mut summary = SessionSummary::default();

    for (lineno, line) in script.lines().enumerate() {
        let command = match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!("line {}: {}", lineno + 1, e);
                summary.bad_lines += 1;
                continue;
            }
        };

        match command {
            Command::Show => write!(out, "{}", render(form))?,
            Command::Send(msgs) => {
                for msg in msgs {
                    match update(form, msg) {
                        Some(Cmd::Submitted(entry)) => {
                            summary.submitted += 1;
                            let json = serde_json::to_string(&entry).map_err(io::Error::other)?;
                            writeln!(out, "{}", json)?;
                        }
                        Some(Cmd::Rejected(errors)) => {
                            summary.rejected += 1;
                            for (id, message) in errors {
                                writeln!(out, "error {}: {}", id, message)?;
                            }
                        }
                        None => {}
                    }
                }
            }
        }
    }

    Ok(summary)
}
