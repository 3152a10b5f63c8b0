//! Entry form - Elm-style promotional entry form with masked digit fields
//!
//! This crate provides the masked input engine (formatting, caret
//! translation, edit rules) and the form built on top of it, following the
//! Elm Architecture pattern: `Msg` in, `update` on the model, `Cmd` out.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod masked;
pub mod messages;
pub mod model;
pub mod session;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::FormConfig;
pub use messages::Msg;
pub use model::EntryForm;
