//! Snake game window: a canvas view driven by the display refresh loop over [`engine::SnakeState`].

pub mod engine;

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use desktop_app_contract::AppMountContext;
use engine::{Direction, FillRect, SnakeEvent, SnakeState, CANVAS_PX};
use leptos::{ev::KeyboardEvent, html, *};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Shared frame-loop state. One per mounted window.
struct FrameLoop {
    game: RefCell<SnakeState>,
    canvas: NodeRef<html::Canvas>,
    alive: Rc<Cell<bool>>,
    scheduled: Cell<bool>,
    last_frame_ms: Cell<Option<f64>>,
    score: RwSignal<usize>,
    status: RwSignal<Option<String>>,
}

impl FrameLoop {
    fn start(self: &Rc<Self>) {
        if self.scheduled.replace(true) {
            return;
        }
        self.last_frame_ms.set(None);
        self.schedule();
    }

    fn schedule(self: &Rc<Self>) {
        let this = Rc::clone(self);
        request_animation_frame(move || this.frame());
    }

    fn frame(self: Rc<Self>) {
        let Some(canvas) = self.live_canvas() else {
            self.scheduled.set(false);
            return;
        };

        let now = js_sys::Date::now();
        let elapsed = self
            .last_frame_ms
            .replace(Some(now))
            .map_or(0.0, |last| now - last);
        let event = self.game.borrow_mut().advance(elapsed);
        match event {
            Some(SnakeEvent::Ate { score }) => self.score.set(score),
            Some(SnakeEvent::GameOver { score }) => {
                self.status.set(Some(format!("Game Over! Score: {score}")));
            }
            None => {}
        }

        let (rects, running) = {
            let game = self.game.borrow();
            (game.paint(), game.is_running())
        };
        paint(&canvas, &rects);

        if running {
            self.schedule();
        } else {
            self.scheduled.set(false);
        }
    }

    fn live_canvas(&self) -> Option<HtmlCanvasElement> {
        if !self.alive.get() {
            return None;
        }
        let canvas = self.canvas.get_untracked()?;
        let element: &HtmlCanvasElement = &canvas;
        element.is_connected().then(|| element.clone())
    }

    fn restart(self: &Rc<Self>, seed: u64) {
        *self.game.borrow_mut() = SnakeState::new(seed);
        self.score.set(0);
        self.status.set(None);
        self.start();
    }
}

fn paint(canvas: &HtmlCanvasElement, rects: &[FillRect]) {
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        return;
    };
    for rect in rects {
        ctx.set_fill_style_str(rect.color);
        ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
    }
}

#[component]
/// Snake game window contents.
pub fn SnakeApp(
    /// Seed for food placement. Restarts derive fresh seeds from it.
    seed: u64,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let score = create_rw_signal(0usize);
    let status = create_rw_signal(None::<String>);
    let alive = Rc::new(Cell::new(true));
    let restarts = Cell::new(0u64);

    let frame_loop = Rc::new(FrameLoop {
        game: RefCell::new(SnakeState::new(seed)),
        canvas: canvas_ref,
        alive: Rc::clone(&alive),
        scheduled: Cell::new(false),
        last_frame_ms: Cell::new(None),
        score,
        status,
    });

    on_cleanup(move || alive.set(false));

    canvas_ref.on_load({
        let frame_loop = Rc::clone(&frame_loop);
        move |canvas| {
            let _ = canvas.focus();
            frame_loop.start();
        }
    });

    let on_keydown = move |ev: KeyboardEvent| {
        let key = ev.key();
        if let Some(direction) = Direction::from_key(&key) {
            ev.prevent_default();
            frame_loop.game.borrow_mut().steer(direction);
            return;
        }
        let running = frame_loop.game.borrow().is_running();
        if !running && matches!(key.as_str(), "Enter" | " ") {
            ev.prevent_default();
            restarts.set(restarts.get() + 1);
            frame_loop.restart(seed.wrapping_add(restarts.get()));
        }
    };

    view! {
        <div class="game-window snake-game">
            <canvas
                node_ref=canvas_ref
                class="game-canvas"
                width=CANVAS_PX
                height=CANVAS_PX
                tabindex="0"
                aria-label="Snake game board"
                on:keydown=on_keydown
            ></canvas>
            <p class="game-status" aria-live="polite">
                {move || match status.get() {
                    Some(message) => format!("{message} Press Enter to play again."),
                    None => format!("Score: {}  Use arrow keys to move.", score.get()),
                }}
            </p>
        </div>
    }
}

/// Mounts [`SnakeApp`] for a runtime window.
pub fn mount(context: AppMountContext) -> View {
    view! { <SnakeApp seed=context.launch_seed /> }.into_view()
}

