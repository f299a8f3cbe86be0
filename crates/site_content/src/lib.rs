//! Stateless content providers for the portfolio desktop.
//!
//! Every topic renders through [`render`], a pure function of the topic and a seed. Both the
//! terminal and direct app launches call it; nothing here holds session state.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod data;

use serde::{Deserialize, Serialize};

/// Static content topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentTopic {
    /// Short bio.
    About,
    /// Skill bars.
    Skills,
    /// Project cards.
    Projects,
    /// Contact links.
    Contact,
    /// Command reference.
    Help,
    /// One random quote.
    Quote,
    /// Fake system monitor.
    SystemInfo,
    /// Fake file listing.
    Files,
}

impl ContentTopic {
    /// Every topic in launcher order.
    pub const ALL: [Self; 8] = [
        Self::About,
        Self::Projects,
        Self::Skills,
        Self::Contact,
        Self::Help,
        Self::Files,
        Self::SystemInfo,
        Self::Quote,
    ];

    /// Stable slug used in app keys and terminal commands.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
            Self::Help => "help",
            Self::Quote => "quote",
            Self::SystemInfo => "system",
            Self::Files => "files",
        }
    }

    /// Parses a slug produced by [`Self::as_str`].
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|topic| topic.as_str() == raw)
    }

    /// Window title for this topic.
    pub const fn title(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
            Self::Help => "Help",
            Self::Quote => "Quote",
            Self::SystemInfo => "System Monitor",
            Self::Files => "Files",
        }
    }
}

/// Titled heading plus paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Heading text.
    pub heading: &'static str,
    /// Paragraph text.
    pub body: &'static str,
}

/// One portfolio project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectCard {
    /// Project name.
    pub title: &'static str,
    /// One sentence description.
    pub summary: &'static str,
    /// External page.
    pub link: &'static str,
    /// Technology tags.
    pub techs: &'static [&'static str],
}

/// One skill bar, `level` in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillLevel {
    /// Skill label.
    pub name: &'static str,
    /// 0-100.
    pub level: u8,
}

/// One contact channel. Channels without `href` show `note` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    /// Channel label.
    pub label: &'static str,
    /// Link target.
    pub href: Option<&'static str>,
    /// Placeholder note for channels that are not live yet.
    pub note: Option<&'static str>,
}

/// File listing entry kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Directory.
    Folder,
    /// PDF document.
    Pdf,
    /// Word document.
    Document,
    /// Zip archive.
    Archive,
    /// Plain text.
    Text,
}

impl FileKind {
    /// Whether this entry is a directory.
    pub const fn is_folder(self) -> bool {
        matches!(self, Self::Folder)
    }
}

/// One file listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileEntry {
    /// Display name.
    pub name: &'static str,
    /// Entry kind.
    pub kind: FileKind,
}

/// One system monitor row. `usage` is a percentage, absent for non-gauge rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemStat {
    /// Row label.
    pub label: &'static str,
    /// Value text.
    pub value: &'static str,
    /// Gauge percentage.
    pub usage: Option<u8>,
}

/// One help table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpEntry {
    /// Command name.
    pub command: &'static str,
    /// Usage string including optional arguments.
    pub usage: &'static str,
    /// One-line description.
    pub summary: &'static str,
}

/// Structured block inside rendered content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    /// Headed paragraphs.
    Sections(&'static [Section]),
    /// Project cards.
    Projects(&'static [ProjectCard]),
    /// Skill bars.
    Skills(&'static [SkillLevel]),
    /// Contact links.
    Links(&'static [ContactLink]),
    /// File grid.
    Files(&'static [FileEntry]),
    /// System monitor rows.
    Stats(&'static [SystemStat]),
    /// Command reference.
    Commands(&'static [HelpEntry]),
    /// A single quote.
    Quote(&'static str),
}

/// Rendered content for one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    /// Display title.
    pub title: &'static str,
    /// Body blocks in display order.
    pub blocks: Vec<ContentBlock>,
}

/// Renders `topic`. `seed` selects among randomized content (the quote) and is ignored otherwise.
pub fn render(topic: ContentTopic, seed: u64) -> Content {
    let block = match topic {
        ContentTopic::About => ContentBlock::Sections(data::ABOUT),
        ContentTopic::Skills => ContentBlock::Skills(data::SKILLS),
        ContentTopic::Projects => ContentBlock::Projects(data::PROJECTS),
        ContentTopic::Contact => ContentBlock::Links(data::CONTACT),
        ContentTopic::Help => ContentBlock::Commands(data::HELP),
        ContentTopic::Quote => ContentBlock::Quote(quote_at(seed as usize)),
        ContentTopic::SystemInfo => ContentBlock::Stats(data::SYSTEM),
        ContentTopic::Files => ContentBlock::Files(data::FILES),
    };
    Content {
        title: topic.title(),
        blocks: vec![block],
    }
}

/// The fixed quote pool.
pub fn quote_pool() -> &'static [&'static str] {
    data::QUOTES
}

/// Quote at `index`, wrapping around the pool.
pub fn quote_at(index: usize) -> &'static str {
    data::QUOTES[index % data::QUOTES.len()]
}

/// Command reference rows, in help order.
pub fn help_entries() -> &'static [HelpEntry] {
    data::HELP
}

/// Help row for `command`, if documented.
pub fn help_entry(command: &str) -> Option<&'static HelpEntry> {
    data::HELP.iter().find(|entry| entry.command == command)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn topic_slugs_round_trip_and_stay_unique() {
        for topic in ContentTopic::ALL {
            assert_eq!(ContentTopic::parse(topic.as_str()), Some(topic));
        }
        assert_eq!(ContentTopic::parse("system"), Some(ContentTopic::SystemInfo));
        assert_eq!(ContentTopic::parse("System"), None);
    }

    #[test]
    fn topic_serializes_as_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ContentTopic::SystemInfo).expect("serialize"),
            "\"system-info\""
        );
    }

    #[test]
    fn render_is_pure_for_same_seed() {
        for topic in ContentTopic::ALL {
            assert_eq!(render(topic, 7), render(topic, 7));
            assert_eq!(render(topic, 7).title, topic.title());
        }
    }

    #[test]
    fn quote_seed_wraps_over_pool() {
        let pool = quote_pool();
        assert_eq!(pool.len(), 5);
        assert_eq!(
            render(ContentTopic::Quote, pool.len() as u64 + 1).blocks,
            vec![ContentBlock::Quote(pool[1])]
        );
    }

    #[test]
    fn help_table_covers_games_and_preferences() {
        for command in ["snake", "pong", "color", "theme"] {
            assert!(help_entry(command).is_some(), "{command} missing from help");
        }
        assert_eq!(help_entry("color").map(|entry| entry.usage), Some("color [scheme]"));
    }

    #[test]
    fn skill_and_usage_levels_are_percentages() {
        assert!(data::SKILLS.iter().all(|skill| skill.level <= 100));
        assert!(data::SYSTEM
            .iter()
            .filter_map(|stat| stat.usage)
            .all(|usage| usage <= 100));
    }
}
