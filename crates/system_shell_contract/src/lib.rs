//! Shared command contracts used by the command registry and the terminal UI.
//!
//! This crate is runtime-agnostic. It defines serializable command metadata, parsed command
//! lines and shell errors without depending on Leptos or browser APIs.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::fmt;

use serde::{Deserialize, Serialize};

/// Visibility policy for registered commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandVisibility {
    /// Listed in help and offered by completion.
    Public,
    /// Callable but omitted from help and completion.
    Hidden,
}

/// Help metadata for a registered command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpDoc {
    /// One-line summary.
    pub summary: String,
    /// Usage string, e.g. `color [scheme]`.
    pub usage: String,
}

/// Full command registration metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Canonical lower-case command name.
    pub name: String,
    /// Alternate names resolving to the same command.
    pub aliases: Vec<String>,
    /// Visibility policy.
    pub visibility: CommandVisibility,
    /// Help metadata.
    pub help: HelpDoc,
}

impl CommandDescriptor {
    /// Public, argument-less command whose usage is its own name.
    pub fn new(name: impl Into<String>, summary: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            help: HelpDoc {
                summary: summary.into(),
                usage: name.clone(),
            },
            name,
            aliases: Vec::new(),
            visibility: CommandVisibility::Public,
        }
    }

    /// Overrides the usage string.
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.help.usage = usage.into();
        self
    }

    /// Adds an alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Marks the command hidden.
    pub fn hidden(mut self) -> Self {
        self.visibility = CommandVisibility::Hidden;
        self
    }

    /// Whether help and completion list this command.
    pub fn is_public(&self) -> bool {
        self.visibility == CommandVisibility::Public
    }
}

/// A normalized, tokenized command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommandLine {
    /// First token.
    pub name: String,
    /// Remaining tokens.
    pub args: Vec<String>,
}

impl ParsedCommandLine {
    /// Remaining tokens re-joined with single spaces, for arguments that may contain spaces.
    pub fn rest(&self) -> Option<String> {
        if self.args.is_empty() {
            None
        } else {
            Some(self.args.join(" "))
        }
    }

    /// First argument, if any.
    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

/// Structured shell error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShellErrorCode {
    /// User input violated command usage.
    Usage,
    /// The command was not found.
    NotFound,
    /// Registry misuse, e.g. a duplicate registration.
    Internal,
}

/// Error emitted by shell parsing, lookup, or registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellError {
    /// Error category.
    pub code: ShellErrorCode,
    /// Human-readable message, shown verbatim to the user for input errors.
    pub message: String,
}

impl ShellError {
    /// Creates a new shell error.
    pub fn new(code: ShellErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ShellError {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn descriptor_builder_tracks_usage_and_aliases() {
        let descriptor = CommandDescriptor::new("exit", "Close terminal")
            .with_usage("exit")
            .with_alias("quit");

        assert_eq!(descriptor.help.usage, "exit");
        assert_eq!(descriptor.aliases, vec!["quit".to_string()]);
        assert!(descriptor.is_public());
        assert!(!descriptor.clone().hidden().is_public());
    }

    #[test]
    fn rest_rejoins_tokens() {
        let line = ParsedCommandLine {
            name: "theme".to_string(),
            args: vec!["amber".to_string(), "glow".to_string()],
        };
        assert_eq!(line.rest().as_deref(), Some("amber glow"));
        assert_eq!(line.first_arg(), Some("amber"));
    }

    #[test]
    fn error_code_serializes_kebab_case() {
        let err = ShellError::new(ShellErrorCode::NotFound, "nope");
        assert_eq!(
            serde_json::to_value(&err).expect("serialize"),
            serde_json::json!({ "code": "not-found", "message": "nope" })
        );
        assert_eq!(err.to_string(), "nope");
    }
}
