//! Terminal desktop app UI component backed by a headless [`session::TerminalSession`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod commands;
pub mod output;
pub mod session;

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

use commands::TerminalEffect;
use desktop_app_contract::{window_primary_input_dom_id, AppHost, AppMountContext};
use leptos::ev::KeyboardEvent;
use leptos::*;
use output::{OutputBuffer, TerminalLineKind, TYPE_INTERVAL_MS};
use session::TerminalSession;

const WELCOME_LINE: &str = "Type 'help' for available commands.";

// Reveals queued output one character per interval until nothing is left to type.
struct Typewriter {
    output: RwSignal<OutputBuffer>,
    input_id: String,
    alive: Rc<Cell<bool>>,
    scheduled: Cell<bool>,
}

impl Typewriter {
    fn start(self: &Rc<Self>) {
        if self.scheduled.replace(true) {
            return;
        }
        self.schedule();
    }

    fn schedule(self: &Rc<Self>) {
        let this = Rc::clone(self);
        set_timeout(
            move || this.tick(),
            Duration::from_millis(TYPE_INTERVAL_MS),
        );
    }

    fn tick(self: Rc<Self>) {
        if !self.alive.get() {
            return;
        }
        let progressed = self.output.try_update(OutputBuffer::tick).unwrap_or(false);
        if !progressed {
            self.scheduled.set(false);
            return;
        }
        scroll_into_view(&self.input_id);
        self.schedule();
    }
}

fn scroll_into_view(element_id: &str) {
    if let Some(element) = document().get_element_by_id(element_id) {
        element.scroll_into_view_with_bool(false);
    }
}

/// Keys the input line hands to the session. Everything else types normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionKey {
    Enter,
    Up,
    Down,
    Tab,
    Escape,
}

impl SessionKey {
    // Modified chords belong to the desktop (Alt+Tab cycles windows).
    fn decode(key: &str, modified: bool) -> Option<Self> {
        if modified {
            return None;
        }
        match key {
            "Enter" => Some(Self::Enter),
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "Tab" => Some(Self::Tab),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }
}

#[derive(Clone)]
struct TerminalState {
    session: Rc<RefCell<TerminalSession>>,
    input: RwSignal<String>,
    suggestions: RwSignal<Vec<String>>,
    highlighted: RwSignal<Option<usize>>,
    output: RwSignal<OutputBuffer>,
    typewriter: Rc<Typewriter>,
    host: AppHost,
}

impl TerminalState {
    fn run<R>(&self, f: impl FnOnce(&mut TerminalSession) -> R) -> R {
        let result = f(&mut self.session.borrow_mut());
        let session = self.session.borrow();
        self.input.set(session.input().to_string());
        self.suggestions.set(session.suggestions().to_vec());
        self.highlighted.set(session.highlighted());
        result
    }

    fn apply(&self, effects: Vec<TerminalEffect>) {
        if effects.is_empty() {
            return;
        }
        for effect in effects {
            match effect {
                TerminalEffect::Print { kind, text } => self.output.update(|buffer| {
                    buffer.push(kind, text);
                }),
                TerminalEffect::Clear => self.output.update(OutputBuffer::clear),
                TerminalEffect::Host(command) => self.host.send(command),
            }
        }
        self.typewriter.start();
    }
}

#[component]
/// Terminal app window contents.
pub fn TerminalApp(
    /// Channel to the desktop runtime for the hosting window.
    host: AppHost,
    /// Seed for the session's randomness.
    seed: u64,
) -> impl IntoView {
    let input_id = window_primary_input_dom_id(host.window_id());
    let alive = Rc::new(Cell::new(true));
    on_cleanup({
        let alive = Rc::clone(&alive);
        move || alive.set(false)
    });

    let mut welcome = OutputBuffer::default();
    welcome.push(TerminalLineKind::Info, WELCOME_LINE);
    welcome.reveal_all();
    let output = create_rw_signal(welcome);

    let state = TerminalState {
        session: Rc::new(RefCell::new(TerminalSession::new(seed))),
        input: create_rw_signal(String::new()),
        suggestions: create_rw_signal(Vec::new()),
        highlighted: create_rw_signal(None),
        output,
        typewriter: Rc::new(Typewriter {
            output,
            input_id: input_id.clone(),
            alive,
            scheduled: Cell::new(false),
        }),
        host,
    };
    let input = state.input;
    let suggestions = state.suggestions;
    let highlighted = state.highlighted;

    let on_input = {
        let state = state.clone();
        move |ev| {
            let value = event_target_value(&ev);
            state.run(|session| session.set_input(value));
        }
    };

    let on_keydown = {
        let state = state.clone();
        move |ev: KeyboardEvent| {
            let modified = ev.alt_key() || ev.ctrl_key() || ev.meta_key();
            let Some(key) = SessionKey::decode(&ev.key(), modified) else {
                return;
            };
            if key != SessionKey::Escape {
                ev.prevent_default();
            }
            let effects = match key {
                SessionKey::Enter => state.run(TerminalSession::enter),
                SessionKey::Up => {
                    state.run(TerminalSession::arrow_up);
                    Vec::new()
                }
                SessionKey::Down => {
                    state.run(TerminalSession::arrow_down);
                    Vec::new()
                }
                SessionKey::Tab => state.run(TerminalSession::tab),
                SessionKey::Escape => {
                    state.run(TerminalSession::escape);
                    Vec::new()
                }
            };
            state.apply(effects);
        }
    };

    let pick_suggestion = {
        let state = state.clone();
        move |value: String| {
            state.run(|session| {
                session.set_input(value);
                session.escape();
            });
        }
    };

    let theme_style = move || host.theme().get().container_style();
    let lines = move || {
        output.with(|buffer| {
            buffer
                .lines()
                .map(|line| {
                    (
                        line.id(),
                        line.kind().css_class(),
                        line.visible_text().to_string(),
                    )
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="terminal-container" style=theme_style>
            <div class="terminal-output" role="log" aria-live="polite">
                <For each=lines key=|line| (line.0, line.2.len()) let:line>
                    <div class=line.1>
                        {if line.2.is_empty() { "\u{a0}".to_string() } else { line.2 }}
                    </div>
                </For>
            </div>

            <div class="terminal-input-line">
                <label class="prompt" for=input_id.clone()>{commands::PROMPT}</label>
                <input
                    id=input_id.clone()
                    class="terminal-input"
                    type="text"
                    prop:value=move || input.get()
                    on:input=on_input
                    on:keydown=on_keydown
                    autocomplete="off"
                    spellcheck="false"
                />
            </div>

            <Show when=move || !suggestions.get().is_empty() fallback=|| ()>
                <ul class="autocomplete-list" role="listbox" aria-label="Suggestions">
                    {
                        let pick_suggestion = pick_suggestion.clone();
                        move || {
                            suggestions
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(idx, value)| {
                                    let pick_suggestion = pick_suggestion.clone();
                                    let selected = highlighted.get() == Some(idx);
                                    let label = value.clone();
                                    view! {
                                        <li
                                            class="autocomplete-item"
                                            class:highlighted=selected
                                            role="option"
                                            aria-selected=selected.to_string()
                                            on:mousedown=move |ev| {
                                                ev.prevent_default();
                                                pick_suggestion(value.clone());
                                            }
                                        >
                                            {label}
                                        </li>
                                    }
                                })
                                .collect_view()
                        }
                    }
                </ul>
            </Show>
        </div>
    }
}

/// Mounts [`TerminalApp`] for a runtime window.
pub fn mount(context: AppMountContext) -> View {
    view! { <TerminalApp host=context.host seed=context.launch_seed /> }.into_view()
}
