//! Typewriter transcript buffer.
//!
//! Lines are appended whole and revealed one character per [`TYPE_INTERVAL_MS`] tick. Every
//! partially revealed line advances on the same tick.

use std::collections::VecDeque;

/// Retained transcript lines. Older lines are dropped first.
pub const MAX_TERMINAL_LINES: usize = 200;
/// Delay between revealed characters.
pub const TYPE_INTERVAL_MS: u64 = 30;

/// Styling class of a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalLineKind {
    /// Regular output.
    Plain,
    /// Echoed command line.
    Prompt,
    /// Hints and listings.
    Info,
    /// Confirmation of a changed setting.
    Success,
    /// User input error.
    Error,
}

impl TerminalLineKind {
    /// CSS modifier class.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Plain => "terminal-line",
            Self::Prompt => "terminal-line prompt",
            Self::Info => "terminal-line info-text",
            Self::Success => "terminal-line success-text",
            Self::Error => "terminal-line error-text",
        }
    }
}

/// One transcript line and how much of it is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    id: u64,
    kind: TerminalLineKind,
    text: String,
    revealed: usize,
}

impl OutputLine {
    /// Stable id for keyed list rendering.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Styling class.
    pub fn kind(&self) -> TerminalLineKind {
        self.kind
    }

    /// Full text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Portion revealed so far.
    pub fn visible_text(&self) -> &str {
        match self.text.char_indices().nth(self.revealed) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    /// Whether every character is visible.
    pub fn is_complete(&self) -> bool {
        self.revealed >= self.text.chars().count()
    }
}

/// Capped transcript with typewriter reveal.
#[derive(Debug, Clone, Default)]
pub struct OutputBuffer {
    lines: VecDeque<OutputLine>,
    next_id: u64,
}

impl OutputBuffer {
    /// Appends a line. Blank lines are visible immediately.
    pub fn push(&mut self, kind: TerminalLineKind, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.lines.push_back(OutputLine {
            id,
            kind,
            text: text.into(),
            revealed: 0,
        });
        while self.lines.len() > MAX_TERMINAL_LINES {
            self.lines.pop_front();
        }
        id
    }

    /// Reveals one more character of every incomplete line.
    ///
    /// Returns `false` when nothing was left to type.
    pub fn tick(&mut self) -> bool {
        let mut progressed = false;
        for line in self.lines.iter_mut().filter(|line| !line.is_complete()) {
            line.revealed += 1;
            progressed = true;
        }
        progressed
    }

    /// Makes every line fully visible.
    pub fn reveal_all(&mut self) {
        for line in &mut self.lines {
            line.revealed = line.text.chars().count();
        }
    }

    /// Drops every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = &OutputLine> + '_ {
        self.lines.iter()
    }

    /// Number of retained lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the transcript is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
