//! Command registry: descriptors, handler lookup, and prefix completion.

use std::collections::BTreeMap;

use system_shell_contract::{CommandDescriptor, ShellError, ShellErrorCode};

/// One registered command with its handler.
#[derive(Debug, Clone)]
pub struct RegisteredCommand<H> {
    descriptor: CommandDescriptor,
    handler: H,
}

impl<H> RegisteredCommand<H> {
    /// Registration metadata.
    pub fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    /// Handler supplied at registration.
    pub fn handler(&self) -> &H {
        &self.handler
    }
}

/// Static name-to-handler table.
///
/// `H` is whatever the embedding shell dispatches to, typically a plain `fn` pointer. Commands
/// keep registration order, which is the order help lists them in.
#[derive(Debug, Clone)]
pub struct CommandRegistry<H> {
    commands: Vec<RegisteredCommand<H>>,
    by_name: BTreeMap<String, usize>,
}

impl<H> Default for CommandRegistry<H> {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            by_name: BTreeMap::new(),
        }
    }
}

impl<H> CommandRegistry<H> {
    /// Registers `descriptor` under its name and every alias.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the name or an alias is already taken.
    pub fn register(&mut self, descriptor: CommandDescriptor, handler: H) -> Result<(), ShellError> {
        let names = std::iter::once(&descriptor.name).chain(descriptor.aliases.iter());
        for name in names.clone() {
            if self.by_name.contains_key(name) {
                return Err(ShellError::new(
                    ShellErrorCode::Internal,
                    format!("command `{name}` is already registered"),
                ));
            }
        }

        let index = self.commands.len();
        for name in names {
            self.by_name.insert(name.clone(), index);
        }
        self.commands.push(RegisteredCommand {
            descriptor,
            handler,
        });
        Ok(())
    }

    /// Looks up a command by name or alias.
    ///
    /// # Errors
    ///
    /// Returns a not-found error whose message is the user-facing feedback line.
    pub fn resolve(&self, name: &str) -> Result<&RegisteredCommand<H>, ShellError> {
        self.by_name
            .get(name)
            .map(|index| &self.commands[*index])
            .ok_or_else(|| {
                ShellError::new(
                    ShellErrorCode::NotFound,
                    format!("{name}: command not found. Type 'help' for available commands."),
                )
            })
    }

    /// Public descriptors in registration order.
    pub fn descriptors(&self) -> Vec<&CommandDescriptor> {
        self.commands
            .iter()
            .map(RegisteredCommand::descriptor)
            .filter(|descriptor| descriptor.is_public())
            .collect()
    }

    /// Public command names starting with `prefix`, sorted.
    ///
    /// The prefix is trimmed and case-folded. A blank prefix yields nothing. Aliases are never
    /// offered; they only resolve.
    pub fn complete(&self, prefix: &str) -> Vec<&str> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return Vec::new();
        }
        let mut names = self
            .commands
            .iter()
            .map(RegisteredCommand::descriptor)
            .filter(|descriptor| descriptor.is_public() && descriptor.name.starts_with(&prefix))
            .map(|descriptor| descriptor.name.as_str())
            .collect::<Vec<_>>();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn registry() -> CommandRegistry<u8> {
        let mut registry = CommandRegistry::default();
        registry
            .register(CommandDescriptor::new("color", "Change color scheme"), 1)
            .expect("color");
        registry
            .register(CommandDescriptor::new("clear", "Clear screen"), 2)
            .expect("clear");
        registry
            .register(
                CommandDescriptor::new("exit", "Close terminal").with_alias("quit"),
                3,
            )
            .expect("exit");
        registry
            .register(CommandDescriptor::new("debug", "Internal").hidden(), 4)
            .expect("debug");
        registry
    }

    #[test]
    fn resolves_names_and_aliases() {
        let registry = registry();
        assert_eq!(*registry.resolve("quit").expect("alias").handler(), 3);
        assert_eq!(registry.resolve("quit").expect("alias").descriptor().name, "exit");
    }

    #[test]
    fn unknown_names_produce_feedback_line() {
        let err = registry().resolve("foo").expect_err("unknown");
        assert_eq!(err.code, ShellErrorCode::NotFound);
        assert_eq!(
            err.message,
            "foo: command not found. Type 'help' for available commands."
        );
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = registry();
        let err = registry
            .register(CommandDescriptor::new("leave", "dup").with_alias("exit"), 9)
            .expect_err("duplicate");
        assert_eq!(err.code, ShellErrorCode::Internal);
        assert!(registry.resolve("leave").is_err());
    }

    #[test]
    fn completion_is_prefix_based_and_skips_hidden() {
        let registry = registry();
        assert_eq!(registry.complete("colo"), vec!["color"]);
        assert_eq!(registry.complete(" CL"), vec!["clear"]);
        assert_eq!(registry.complete("c"), vec!["clear", "color"]);
        assert!(registry.complete("de").is_empty());
        assert!(registry.complete("").is_empty());
    }

    #[test]
    fn completion_never_offers_aliases() {
        let registry = registry();
        assert!(registry.complete("qu").is_empty());
        assert_eq!(registry.complete("e"), vec!["exit"]);
        assert!(registry.resolve("quit").is_ok());
    }

    #[test]
    fn descriptors_keep_registration_order() {
        let names = registry()
            .descriptors()
            .into_iter()
            .map(|descriptor| descriptor.name.clone())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["color", "clear", "exit"]);
    }
}
