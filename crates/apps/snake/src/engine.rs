//! Headless snake simulation.
//!
//! The engine knows nothing about canvases or timers. The component feeds it elapsed frame time
//! and key presses; the engine answers with [`SnakeEvent`]s and a list of rectangles to paint.

use std::collections::VecDeque;

use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Canvas edge length in pixels.
pub const CANVAS_PX: u32 = 400;
/// Cell edge length in pixels.
pub const CELL_PX: u32 = 20;
/// Cells per row and per column.
pub const GRID_CELLS: i32 = (CANVAS_PX / CELL_PX) as i32;
/// Simulation steps per second, independent of the display refresh rate.
pub const TICKS_PER_SECOND: u32 = 8;

const TICK_MS: f64 = 1000.0 / TICKS_PER_SECOND as f64;

const BACKGROUND: &str = "#000";
const FOOD: &str = "#ff3";
const BODY: &str = "#0f0";
const HEAD: &str = "#0ff";

/// Grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Cell {
    /// Builds a cell.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// Maps a `KeyboardEvent.key` value to a direction.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }

    const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

/// Something the host should react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeEvent {
    /// The head reached the food.
    Ate {
        /// Score after eating.
        score: usize,
    },
    /// The head ran into the body; the simulation stopped.
    GameOver {
        /// Body length minus one.
        score: usize,
    },
}

/// One filled rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
    /// CSS color.
    pub color: &'static str,
}

/// Complete snake game state.
#[derive(Debug, Clone)]
pub struct SnakeState {
    body: VecDeque<Cell>,
    direction: Option<Direction>,
    // Direction of the last applied step. Turns are validated against it so two quick key
    // presses inside one tick cannot fold the head back onto the neck.
    heading: Option<Direction>,
    food: Option<Cell>,
    running: bool,
    pending_ms: f64,
    rng: SmallRng,
}

impl SnakeState {
    /// One-cell snake in the middle of the board, standing still until the first arrow key.
    pub fn new(seed: u64) -> Self {
        Self::from_body(Vec::new(), None, seed)
    }

    /// Snake with an explicit body (head first) and optional starting direction. An empty body
    /// starts from the center cell.
    pub fn from_body(
        body: impl IntoIterator<Item = Cell>,
        direction: Option<Direction>,
        seed: u64,
    ) -> Self {
        let mut body = body.into_iter().collect::<VecDeque<_>>();
        if body.is_empty() {
            body.push_back(Cell::new(GRID_CELLS / 2, GRID_CELLS / 2));
        }
        let mut state = Self {
            body,
            direction,
            heading: direction,
            food: None,
            running: true,
            pending_ms: 0.0,
            rng: SmallRng::seed_from_u64(seed),
        };
        state.place_food();
        state
    }

    /// Body cells, head first.
    pub fn body(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    /// Head cell.
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Number of body cells.
    pub fn length(&self) -> usize {
        self.body.len()
    }

    /// Current food cell, `None` when the board is full.
    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    /// Direction applied on the next step.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Whether the simulation still advances.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Body length minus one.
    pub fn score(&self) -> usize {
        self.body.len() - 1
    }

    /// Requests a turn. Returns whether it was accepted.
    ///
    /// Turns along the axis the snake is already moving on are ignored, which rules out
    /// reversing straight into the body.
    pub fn steer(&mut self, requested: Direction) -> bool {
        if !self.running {
            return false;
        }
        let blocked = self
            .heading
            .or(self.direction)
            .is_some_and(|current| current.is_vertical() == requested.is_vertical());
        if blocked {
            return false;
        }
        self.direction = Some(requested);
        true
    }

    /// Feeds `elapsed_ms` of frame time and runs at most one step once a tick interval has
    /// accumulated.
    pub fn advance(&mut self, elapsed_ms: f64) -> Option<SnakeEvent> {
        if !self.running {
            return None;
        }
        self.pending_ms += elapsed_ms.max(0.0);
        if self.pending_ms < TICK_MS {
            return None;
        }
        // A long stall (hidden tab) must not turn into a burst of steps.
        self.pending_ms = (self.pending_ms - TICK_MS).min(TICK_MS);
        self.step()
    }

    /// Runs exactly one simulation step.
    pub fn step(&mut self) -> Option<SnakeEvent> {
        if !self.running {
            return None;
        }
        let direction = self.direction?;
        let (dx, dy) = direction.delta();
        let head = self.head();
        let next = Cell::new(
            (head.x + dx).rem_euclid(GRID_CELLS),
            (head.y + dy).rem_euclid(GRID_CELLS),
        );
        self.heading = Some(direction);

        if self.body.contains(&next) {
            self.running = false;
            return Some(SnakeEvent::GameOver {
                score: self.score(),
            });
        }

        self.body.push_front(next);
        if self.food == Some(next) {
            self.place_food();
            Some(SnakeEvent::Ate {
                score: self.score(),
            })
        } else {
            self.body.pop_back();
            None
        }
    }

    fn place_food(&mut self) {
        let free = (0..GRID_CELLS)
            .flat_map(|y| (0..GRID_CELLS).map(move |x| Cell::new(x, y)))
            .filter(|cell| !self.body.contains(cell))
            .collect::<Vec<_>>();
        self.food = if free.is_empty() {
            None
        } else {
            Some(free[self.rng.gen_range(0..free.len())])
        };
    }

    /// Rectangles for one full redraw: background, food, then body with a distinct head.
    pub fn paint(&self) -> Vec<FillRect> {
        let size = f64::from(CELL_PX);
        let mut rects = Vec::with_capacity(self.body.len() + 2);
        rects.push(FillRect {
            x: 0.0,
            y: 0.0,
            w: f64::from(CANVAS_PX),
            h: f64::from(CANVAS_PX),
            color: BACKGROUND,
        });
        if let Some(food) = self.food {
            rects.push(FillRect {
                x: f64::from(food.x) * size,
                y: f64::from(food.y) * size,
                w: size,
                h: size,
                color: FOOD,
            });
        }
        rects.extend(self.body.iter().enumerate().map(|(idx, cell)| FillRect {
            x: f64::from(cell.x) * size + 1.0,
            y: f64::from(cell.y) * size + 1.0,
            w: size - 2.0,
            h: size - 2.0,
            color: if idx == 0 { HEAD } else { BODY },
        }));
        rects
    }
}
