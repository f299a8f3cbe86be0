//! Pong game window. Paddle keys are tracked with window-level listeners so the game responds
//! even when focus sits on the window chrome.

pub mod engine;

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use desktop_app_contract::AppMountContext;
use engine::{DrawOp, PaddleInput, PongEvent, PongState, FIELD_H, FIELD_W};
use leptos::{html, leptos_dom::helpers::WindowListenerHandle, *};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

struct FrameLoop {
    game: RefCell<PongState>,
    input: Rc<Cell<PaddleInput>>,
    canvas: NodeRef<html::Canvas>,
    alive: Rc<Cell<bool>>,
    listeners: Rc<RefCell<Vec<WindowListenerHandle>>>,
    status: RwSignal<Option<String>>,
}

impl FrameLoop {
    fn schedule(self: &Rc<Self>) {
        let this = Rc::clone(self);
        request_animation_frame(move || this.frame());
    }

    fn frame(self: Rc<Self>) {
        let Some(canvas) = self.live_canvas() else {
            release_listeners(&self.listeners);
            return;
        };

        let event = self.game.borrow_mut().tick(self.input.get());
        let ops = self.game.borrow().paint();
        draw(&canvas, &ops);

        if let Some(line) = event.as_ref().and_then(PongEvent::result_line) {
            self.status.set(Some(line));
            release_listeners(&self.listeners);
            return;
        }
        self.schedule();
    }

    fn live_canvas(&self) -> Option<HtmlCanvasElement> {
        if !self.alive.get() {
            return None;
        }
        let canvas = self.canvas.get_untracked()?;
        let element: &HtmlCanvasElement = &canvas;
        element.is_connected().then(|| element.clone())
    }
}

fn release_listeners(listeners: &RefCell<Vec<WindowListenerHandle>>) {
    for handle in listeners.borrow_mut().drain(..) {
        handle.remove();
    }
}

fn draw(canvas: &HtmlCanvasElement, ops: &[DrawOp]) {
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        return;
    };
    for op in ops {
        match op {
            DrawOp::Rect { x, y, w, h, color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(*x, *y, *w, *h);
            }
            DrawOp::Text {
                text,
                x,
                y,
                font,
                color,
            } => {
                ctx.set_fill_style_str(color);
                ctx.set_font(font);
                let _ = ctx.fill_text(text, *x, *y);
            }
        }
    }
}

#[component]
/// Pong game window contents.
pub fn PongApp(
    /// Seed for serve directions.
    seed: u64,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let status = create_rw_signal(None::<String>);
    let alive = Rc::new(Cell::new(true));
    let input = Rc::new(Cell::new(PaddleInput::default()));
    let listeners = Rc::new(RefCell::new(Vec::with_capacity(2)));

    for pressed in [true, false] {
        let input = Rc::clone(&input);
        let on_key = move |key: String| {
            let mut next = input.get();
            if next.apply_key(&key, pressed) {
                input.set(next);
            }
        };
        let handle = if pressed {
            window_event_listener(ev::keydown, move |ev| on_key(ev.key()))
        } else {
            window_event_listener(ev::keyup, move |ev| on_key(ev.key()))
        };
        listeners.borrow_mut().push(handle);
    }

    let frame_loop = Rc::new(FrameLoop {
        game: RefCell::new(PongState::new(seed)),
        input,
        canvas: canvas_ref,
        alive: Rc::clone(&alive),
        listeners: Rc::clone(&listeners),
        status,
    });

    on_cleanup(move || {
        alive.set(false);
        release_listeners(&listeners);
    });

    canvas_ref.on_load(move |canvas| {
        let _ = canvas.focus();
        frame_loop.schedule();
    });

    view! {
        <div class="game-window pong-game">
            <canvas
                node_ref=canvas_ref
                class="game-canvas"
                width=FIELD_W
                height=FIELD_H
                tabindex="0"
                aria-label="Pong court"
            ></canvas>
            <p class="game-status" aria-live="polite">
                {move || {
                    status
                        .get()
                        .unwrap_or_else(|| "W/S or ArrowUp/Down to move. First to 5 wins.".to_string())
                }}
            </p>
        </div>
    }
}

/// Mounts [`PongApp`] for a runtime window.
pub fn mount(context: AppMountContext) -> View {
    view! { <PongApp seed=context.launch_seed /> }.into_view()
}
