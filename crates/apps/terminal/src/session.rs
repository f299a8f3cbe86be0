//! Headless terminal session: input buffer, history browsing, autocomplete, and dispatch.
//!
//! The component forwards key presses here and applies the returned [`TerminalEffect`]s. Nothing
//! in this module touches the DOM, so every keystroke path is unit tested.

use std::rc::Rc;

use rand::{rngs::SmallRng, SeedableRng};
use system_shell::{parse_command_line, CommandRegistry};

use crate::{
    commands::{command_registry, CommandContext, CommandHandler, TerminalEffect, PROMPT},
    output::TerminalLineKind,
};

/// Per-window terminal state.
pub struct TerminalSession {
    registry: CommandRegistry<CommandHandler>,
    rng: SmallRng,
    input: String,
    history: Vec<String>,
    history_cursor: Option<usize>,
    suggestions: Vec<String>,
    highlighted: Option<usize>,
}

impl TerminalSession {
    /// New idle session seeded for `quote`.
    pub fn new(seed: u64) -> Self {
        Self {
            registry: command_registry(),
            rng: SmallRng::seed_from_u64(seed),
            input: String::new(),
            history: Vec::new(),
            history_cursor: None,
            suggestions: Vec::new(),
            highlighted: None,
        }
    }

    /// Current input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Submitted commands, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// History entry being browsed, if any.
    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    /// Visible autocomplete candidates.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Highlighted candidate index.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Replaces the input buffer after typing and refreshes suggestions.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.history_cursor = None;
        self.suggestions = self.matches();
        self.highlighted = None;
    }

    fn matches(&self) -> Vec<String> {
        self.registry
            .complete(&self.input)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn hide_suggestions(&mut self) {
        self.suggestions.clear();
        self.highlighted = None;
    }

    /// Up arrow: previous suggestion while suggestions show, otherwise an older history entry.
    pub fn arrow_up(&mut self) {
        if !self.suggestions.is_empty() {
            let last = self.suggestions.len() - 1;
            self.highlighted = Some(match self.highlighted {
                None | Some(0) => last,
                Some(idx) => idx - 1,
            });
            return;
        }
        if self.history.is_empty() {
            return;
        }
        let next = match self.history_cursor {
            None => self.history.len() - 1,
            Some(idx) => idx.saturating_sub(1),
        };
        self.history_cursor = Some(next);
        self.input = self.history[next].clone();
    }

    /// Down arrow: next suggestion while suggestions show, otherwise a newer history entry.
    /// Moving past the newest entry leaves history browsing with an empty buffer.
    pub fn arrow_down(&mut self) {
        if !self.suggestions.is_empty() {
            let len = self.suggestions.len();
            self.highlighted = Some(self.highlighted.map_or(0, |idx| (idx + 1) % len));
            return;
        }
        let Some(idx) = self.history_cursor else {
            return;
        };
        if idx + 1 < self.history.len() {
            self.history_cursor = Some(idx + 1);
            self.input = self.history[idx + 1].clone();
        } else {
            self.history_cursor = None;
            self.input.clear();
        }
    }

    /// Tab completion.
    pub fn tab(&mut self) -> Vec<TerminalEffect> {
        if let Some(choice) = self.highlighted_choice() {
            self.input = choice;
            self.hide_suggestions();
            return Vec::new();
        }
        let matches = self.matches();
        match matches.as_slice() {
            [] => Vec::new(),
            [only] => {
                self.input = only.clone();
                self.hide_suggestions();
                Vec::new()
            }
            many => vec![TerminalEffect::print(
                TerminalLineKind::Info,
                format!("Suggestions: {}", many.join(", ")),
            )],
        }
    }

    fn highlighted_choice(&self) -> Option<String> {
        self.highlighted
            .and_then(|idx| self.suggestions.get(idx))
            .cloned()
    }

    /// Enter: accepts a highlighted suggestion, otherwise submits the buffer.
    pub fn enter(&mut self) -> Vec<TerminalEffect> {
        if let Some(choice) = self.highlighted_choice() {
            self.input = choice;
            self.hide_suggestions();
            return Vec::new();
        }
        let line = std::mem::take(&mut self.input);
        self.submit(&line)
    }

    /// Escape: hides suggestions.
    pub fn escape(&mut self) {
        self.hide_suggestions();
    }

    /// Runs `line` as if typed and submitted.
    pub fn submit(&mut self, line: &str) -> Vec<TerminalEffect> {
        self.input.clear();
        self.hide_suggestions();
        self.history_cursor = None;

        let command = line.trim().to_lowercase();
        if command.is_empty() {
            return vec![TerminalEffect::print(TerminalLineKind::Prompt, "")];
        }
        self.history.push(command.clone());

        let mut effects = vec![TerminalEffect::print(
            TerminalLineKind::Prompt,
            format!("{PROMPT} {command}"),
        )];
        effects.extend(self.dispatch(&command));
        effects
    }

    fn dispatch(&mut self, command: &str) -> Vec<TerminalEffect> {
        let parsed = match parse_command_line(command) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => return Vec::new(),
            Err(err) => return vec![TerminalEffect::print(TerminalLineKind::Error, err.message)],
        };
        let handler = match self.registry.resolve(&parsed.name) {
            Ok(registered) => Rc::clone(registered.handler()),
            Err(err) => return vec![TerminalEffect::print(TerminalLineKind::Error, err.message)],
        };
        let mut ctx = CommandContext {
            line: &parsed,
            rng: &mut self.rng,
            registry: &self.registry,
        };
        handler(&mut ctx)
    }
}
