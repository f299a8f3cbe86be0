//! Runtime-agnostic command registry and command-line parser for the desktop terminal.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod parse;
mod registry;

pub use parse::{parse_command_line, tokenize};
pub use registry::{CommandRegistry, RegisteredCommand};
pub use system_shell_contract as contract;
