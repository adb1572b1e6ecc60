//! CLI command handlers
//!
//! This module contains the interactive shell and the one-shot command
//! handlers, bridging clap argument parsing with the service layer.

pub mod commands;
pub mod export;
pub mod history;
pub mod report;
pub mod shell;

pub use commands::{find_command, CommandAction, COMMANDS};
pub use export::{handle_export_command, ExportFormat};
pub use history::handle_history_command;
pub use report::{handle_birthdays_command, handle_list_command};
pub use shell::{finish_session, Flow, Shell};
