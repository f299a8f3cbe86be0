//! Built-in terminal commands.
//!
//! Handlers are pure: they read the parsed line and return [`TerminalEffect`]s. The component
//! applies printed lines to the transcript and forwards host commands to the desktop runtime.

use std::rc::Rc;

use desktop_app_contract::{AppCommand, AppKey, ColorScheme, GameKind, TerminalTheme};
use rand::{rngs::SmallRng, Rng};
use site_content::{help_entry, quote_pool, ContentTopic};
use system_shell::CommandRegistry;
use system_shell_contract::{CommandDescriptor, ParsedCommandLine};

use crate::output::TerminalLineKind;

/// Prompt echoed before every submitted command.
pub const PROMPT: &str = "sudo@rivsportfolio:~$";
/// Link opened by `surprise`.
pub const SURPRISE_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
/// Delay before `surprise` opens its link.
pub const SURPRISE_DELAY_MS: u32 = 1500;
/// Lifetime of the `neo` overlay.
pub const MATRIX_DURATION_MS: u32 = 8000;

/// Result of running a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEffect {
    /// Append one transcript line.
    Print {
        /// Line styling.
        kind: TerminalLineKind,
        /// Line text.
        text: String,
    },
    /// Wipe the transcript.
    Clear,
    /// Forward a request to the desktop runtime.
    Host(AppCommand),
}

impl TerminalEffect {
    /// Shorthand for [`TerminalEffect::Print`].
    pub fn print(kind: TerminalLineKind, text: impl Into<String>) -> Self {
        Self::Print {
            kind,
            text: text.into(),
        }
    }
}

/// Inputs available to a handler.
pub struct CommandContext<'a> {
    /// Parsed command line.
    pub line: &'a ParsedCommandLine,
    /// Session randomness.
    pub rng: &'a mut SmallRng,
    /// Registry the command was resolved from, for `help`.
    pub registry: &'a CommandRegistry<CommandHandler>,
}

/// Command handler stored in the registry.
pub type CommandHandler = Rc<dyn Fn(&mut CommandContext<'_>) -> Vec<TerminalEffect>>;

fn descriptor(name: &str) -> CommandDescriptor {
    match help_entry(name) {
        Some(entry) => CommandDescriptor::new(name, entry.summary).with_usage(entry.usage),
        None => CommandDescriptor::new(name, ""),
    }
}

/// Builds the registry every terminal session dispatches through, in help order.
pub fn command_registry() -> CommandRegistry<CommandHandler> {
    let mut registry = CommandRegistry::default();
    let mut add = |descriptor: CommandDescriptor, handler: CommandHandler| {
        if let Err(err) = registry.register(descriptor, handler) {
            leptos::logging::warn!("terminal command registration failed: {err}");
        }
    };

    add(descriptor("help"), Rc::new(help));
    for topic in [
        ContentTopic::About,
        ContentTopic::Projects,
        ContentTopic::Skills,
        ContentTopic::Contact,
        ContentTopic::Files,
        ContentTopic::SystemInfo,
    ] {
        add(
            descriptor(topic.as_str()),
            Rc::new(move |_: &mut CommandContext<'_>| launch(AppKey::Content(topic))),
        );
    }
    add(descriptor("quote"), Rc::new(quote));
    add(descriptor("surprise"), Rc::new(surprise));
    add(descriptor("neo"), Rc::new(neo));
    add(descriptor("color"), Rc::new(color));
    add(descriptor("theme"), Rc::new(theme));
    add(descriptor("clear"), Rc::new(clear));
    add(
        descriptor("snake"),
        Rc::new(|_: &mut CommandContext<'_>| launch(AppKey::Game(GameKind::Snake))),
    );
    add(
        descriptor("pong"),
        Rc::new(|_: &mut CommandContext<'_>| launch(AppKey::Game(GameKind::Pong))),
    );
    add(descriptor("exit").with_alias("quit"), Rc::new(exit));
    registry
}

fn help(ctx: &mut CommandContext<'_>) -> Vec<TerminalEffect> {
    let descriptors = ctx.registry.descriptors();
    let width = descriptors
        .iter()
        .map(|descriptor| descriptor.help.usage.len())
        .max()
        .unwrap_or(0);
    std::iter::once(TerminalEffect::print(TerminalLineKind::Info, "Help"))
        .chain(descriptors.into_iter().map(|descriptor| {
            TerminalEffect::print(
                TerminalLineKind::Plain,
                format!(
                    "  {:<width$}  {}",
                    descriptor.help.usage, descriptor.help.summary
                ),
            )
        }))
        .collect()
}

fn launch(app: AppKey) -> Vec<TerminalEffect> {
    vec![
        TerminalEffect::print(
            TerminalLineKind::Info,
            format!("Opening {}...", app.window_title()),
        ),
        TerminalEffect::Host(AppCommand::Launch(app)),
    ]
}

fn quote(ctx: &mut CommandContext<'_>) -> Vec<TerminalEffect> {
    let pool = quote_pool();
    let pick = pool[ctx.rng.gen_range(0..pool.len())];
    vec![TerminalEffect::print(TerminalLineKind::Plain, pick)]
}

fn surprise(_: &mut CommandContext<'_>) -> Vec<TerminalEffect> {
    vec![
        TerminalEffect::print(TerminalLineKind::Success, "Opening surprise..."),
        TerminalEffect::Host(AppCommand::OpenExternalUrl {
            url: SURPRISE_URL.to_string(),
            delay_ms: SURPRISE_DELAY_MS,
        }),
    ]
}

fn neo(_: &mut CommandContext<'_>) -> Vec<TerminalEffect> {
    vec![
        TerminalEffect::Host(AppCommand::StartMatrixOverlay {
            duration_ms: MATRIX_DURATION_MS,
        }),
        TerminalEffect::print(
            TerminalLineKind::Success,
            format!(
                "Matrix mode activated for {} seconds...",
                MATRIX_DURATION_MS / 1000
            ),
        ),
    ]
}

fn color(ctx: &mut CommandContext<'_>) -> Vec<TerminalEffect> {
    let Some(requested) = ctx.line.first_arg() else {
        return vec![
            TerminalEffect::print(TerminalLineKind::Info, "Usage: color [scheme]"),
            TerminalEffect::print(
                TerminalLineKind::Info,
                format!("Schemes: {}", ColorScheme::names()),
            ),
        ];
    };
    match ColorScheme::parse(requested) {
        Some(scheme) => vec![
            TerminalEffect::Host(AppCommand::SetColorScheme(scheme)),
            TerminalEffect::print(
                TerminalLineKind::Success,
                format!("Color scheme: {}", scheme.as_str()),
            ),
        ],
        None => vec![TerminalEffect::print(
            TerminalLineKind::Error,
            format!(
                "Unknown scheme: {requested}. Available: {}",
                ColorScheme::names()
            ),
        )],
    }
}

fn theme(ctx: &mut CommandContext<'_>) -> Vec<TerminalEffect> {
    let Some(requested) = ctx.line.rest() else {
        return vec![
            TerminalEffect::print(TerminalLineKind::Info, "Usage: theme [name]"),
            TerminalEffect::print(
                TerminalLineKind::Info,
                format!("Themes: {}", TerminalTheme::names()),
            ),
        ];
    };
    match TerminalTheme::parse(&requested) {
        Some(theme) => vec![
            TerminalEffect::Host(AppCommand::SetTheme(theme)),
            TerminalEffect::print(
                TerminalLineKind::Success,
                format!("Theme: {}", theme.as_str()),
            ),
        ],
        None => vec![TerminalEffect::print(
            TerminalLineKind::Error,
            format!(
                "Unknown theme: {requested}. Available: {}",
                TerminalTheme::names()
            ),
        )],
    }
}

fn clear(_: &mut CommandContext<'_>) -> Vec<TerminalEffect> {
    vec![
        TerminalEffect::Clear,
        TerminalEffect::Host(AppCommand::StopMatrixOverlay),
    ]
}

fn exit(_: &mut CommandContext<'_>) -> Vec<TerminalEffect> {
    vec![TerminalEffect::Host(AppCommand::CloseWindow)]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use system_shell::parse_command_line;

    use super::*;

    fn run(line: &str) -> Vec<TerminalEffect> {
        let registry = command_registry();
        let parsed = parse_command_line(line).expect("parse").expect("command");
        let handler = Rc::clone(registry.resolve(&parsed.name).expect("known").handler());
        let mut rng = SmallRng::seed_from_u64(1);
        let mut ctx = CommandContext {
            line: &parsed,
            rng: &mut rng,
            registry: &registry,
        };
        handler(&mut ctx)
    }

    fn texts(effects: &[TerminalEffect]) -> Vec<&str> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                TerminalEffect::Print { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn help_lists_every_public_command() {
        let effects = run("help");
        let lines = texts(&effects);
        assert_eq!(lines[0], "Help");
        assert_eq!(lines.len(), 1 + command_registry().descriptors().len());
        for name in ["snake", "pong", "color [scheme]", "theme [name]", "exit"] {
            assert!(
                lines.iter().any(|line| line.trim_start().starts_with(name)),
                "help is missing {name}"
            );
        }
        assert!(!lines.iter().any(|line| line.contains("quit")));
    }

    #[test]
    fn content_commands_launch_their_window() {
        assert_eq!(
            run("system").last(),
            Some(&TerminalEffect::Host(AppCommand::Launch(AppKey::Content(
                ContentTopic::SystemInfo
            ))))
        );
        assert_eq!(
            run("snake").last(),
            Some(&TerminalEffect::Host(AppCommand::Launch(AppKey::Game(
                GameKind::Snake
            ))))
        );
    }

    #[test]
    fn color_validates_scheme_names() {
        assert_eq!(
            run("color purple"),
            vec![
                TerminalEffect::Host(AppCommand::SetColorScheme(ColorScheme::Purple)),
                TerminalEffect::print(TerminalLineKind::Success, "Color scheme: purple"),
            ]
        );
        assert_eq!(
            run("color teal"),
            vec![TerminalEffect::print(
                TerminalLineKind::Error,
                "Unknown scheme: teal. Available: green, purple, blue, orange, pink"
            )]
        );
        assert_eq!(
            texts(&run("color")),
            vec!["Usage: color [scheme]", "Schemes: green, purple, blue, orange, pink"]
        );
    }

    #[test]
    fn theme_takes_the_rest_of_the_line() {
        assert_eq!(
            run("theme classic dos").first(),
            Some(&TerminalEffect::Host(AppCommand::SetTheme(TerminalTheme::Dos)))
        );
        assert_eq!(
            texts(&run("theme neon glow")),
            vec!["Unknown theme: neon glow. Available: default, amber, monochrome, dos"]
        );
    }

    #[test]
    fn surprise_opens_link_after_delay() {
        let effects = run("surprise");
        assert_eq!(texts(&effects), vec!["Opening surprise..."]);
        assert!(effects.contains(&TerminalEffect::Host(AppCommand::OpenExternalUrl {
            url: SURPRISE_URL.to_string(),
            delay_ms: 1500,
        })));
    }

    #[test]
    fn clear_also_dismisses_overlay() {
        assert_eq!(
            run("clear"),
            vec![
                TerminalEffect::Clear,
                TerminalEffect::Host(AppCommand::StopMatrixOverlay)
            ]
        );
    }

    #[test]
    fn exit_and_quit_close_the_hosting_window() {
        for line in ["exit", "quit"] {
            assert_eq!(run(line), vec![TerminalEffect::Host(AppCommand::CloseWindow)]);
        }
    }

    #[test]
    fn quote_comes_from_the_pool() {
        let effects = run("quote");
        let lines = texts(&effects);
        assert_eq!(lines.len(), 1);
        assert!(quote_pool().contains(&lines[0]));
    }
}
