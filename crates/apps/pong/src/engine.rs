//! Headless paddle tennis simulation: player on the left, the terminal AI on the right.
//!
//! [`PongState::tick`] runs one frame. The component calls it once per display refresh.

use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Playing field width in canvas pixels.
pub const FIELD_W: f64 = 500.0;
/// Playing field height in canvas pixels.
pub const FIELD_H: f64 = 300.0;
/// Paddle width.
pub const PADDLE_W: f64 = 10.0;
/// Paddle height.
pub const PADDLE_H: f64 = 60.0;
/// Ball edge length.
pub const BALL_SIZE: f64 = 8.0;
/// Points needed to win.
pub const WINNING_SCORE: u32 = 5;

const PLAYER_STEP: f64 = 6.0;
const AI_STEP: f64 = 4.0;
const AI_DEAD_ZONE: f64 = 10.0;
const SERVE_VX: f64 = 4.0;
const SERVE_VY: f64 = 2.0;
const OUT_MARGIN: f64 = 50.0;
const PLAYER_BOOST: f64 = 1.05;
const AI_BOOST: f64 = 1.03;

const BACKGROUND: &str = "#000";
const NET: &str = "#444";
const PLAYER_COLOR: &str = "#0f0";
const AI_COLOR: &str = "#f00";
const BALL_COLOR: &str = "#fff";
const SCORE_FONT: &str = "20px monospace";

/// Which paddle a point or the match went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left paddle, keyboard controlled.
    Player,
    /// Right paddle, computer controlled.
    Ai,
}

impl Side {
    /// Name shown in the result line.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Ai => "Terminal",
        }
    }
}

/// Held movement keys for the player paddle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleInput {
    /// Up key held.
    pub up: bool,
    /// Down key held.
    pub down: bool,
}

impl PaddleInput {
    /// Records a key press or release. Returns whether the key moves the paddle.
    pub fn apply_key(&mut self, key: &str, pressed: bool) -> bool {
        match key {
            "w" | "W" | "ArrowUp" => self.up = pressed,
            "s" | "S" | "ArrowDown" => self.down = pressed,
            _ => return false,
        }
        true
    }
}

/// Ball position (top-left corner) and velocity in pixels per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal velocity.
    pub vx: f64,
    /// Vertical velocity.
    pub vy: f64,
}

/// Outcome of a frame that changed the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PongEvent {
    /// A point was scored and play continues.
    Scored {
        /// Scoring side.
        by: Side,
        /// Player points.
        player: u32,
        /// AI points.
        ai: u32,
    },
    /// Someone reached [`WINNING_SCORE`]. The ball no longer moves.
    Finished {
        /// Winning side.
        winner: Side,
        /// Final player points.
        player: u32,
        /// Final AI points.
        ai: u32,
    },
}

impl PongEvent {
    /// `Pong finished: Player wins (5-3)` for a finished match.
    pub fn result_line(&self) -> Option<String> {
        match *self {
            Self::Finished { winner, player, ai } => Some(format!(
                "Pong finished: {} wins ({player}-{ai})",
                winner.display_name()
            )),
            Self::Scored { .. } => None,
        }
    }
}

/// One canvas draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Filled rectangle.
    Rect {
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Width.
        w: f64,
        /// Height.
        h: f64,
        /// CSS color.
        color: &'static str,
    },
    /// Text drawn at a baseline position.
    Text {
        /// Text content.
        text: String,
        /// Left edge.
        x: f64,
        /// Baseline.
        y: f64,
        /// CSS font shorthand.
        font: &'static str,
        /// CSS color.
        color: &'static str,
    },
}

/// Match state.
#[derive(Debug, Clone)]
pub struct PongState {
    player_y: f64,
    ai_y: f64,
    ball: Ball,
    player_score: u32,
    ai_score: u32,
    winner: Option<Side>,
    rng: SmallRng,
}

impl PongState {
    /// Fresh match with both paddles centered and the ball served in a random diagonal.
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let vx = if rng.gen_bool(0.5) { SERVE_VX } else { -SERVE_VX };
        let vy = random_serve_vy(&mut rng);
        let paddle_y = (FIELD_H - PADDLE_H) / 2.0;
        Self {
            player_y: paddle_y,
            ai_y: paddle_y,
            ball: Ball {
                x: FIELD_W / 2.0,
                y: FIELD_H / 2.0,
                vx,
                vy,
            },
            player_score: 0,
            ai_score: 0,
            winner: None,
            rng,
        }
    }

    /// Top edge of the player paddle.
    pub fn player_y(&self) -> f64 {
        self.player_y
    }

    /// Top edge of the AI paddle.
    pub fn ai_y(&self) -> f64 {
        self.ai_y
    }

    /// Current ball.
    pub fn ball(&self) -> Ball {
        self.ball
    }

    /// `(player, ai)` points.
    pub fn scores(&self) -> (u32, u32) {
        (self.player_score, self.ai_score)
    }

    /// Winner once the match is over.
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Whether frames still advance the match.
    pub fn is_running(&self) -> bool {
        self.winner.is_none()
    }

    /// Runs one frame: paddles, ball, bounces, then scoring.
    pub fn tick(&mut self, input: PaddleInput) -> Option<PongEvent> {
        if !self.is_running() {
            return None;
        }

        if input.up {
            self.player_y -= PLAYER_STEP;
        }
        if input.down {
            self.player_y += PLAYER_STEP;
        }
        self.player_y = clamp_paddle(self.player_y);

        let ai_center = self.ai_y + PADDLE_H / 2.0;
        if ai_center < self.ball.y - AI_DEAD_ZONE {
            self.ai_y += AI_STEP;
        } else if ai_center > self.ball.y + AI_DEAD_ZONE {
            self.ai_y -= AI_STEP;
        }
        self.ai_y = clamp_paddle(self.ai_y);

        let ball = &mut self.ball;
        ball.x += ball.vx;
        ball.y += ball.vy;
        if ball.y <= 0.0 || ball.y >= FIELD_H - BALL_SIZE {
            ball.vy = -ball.vy;
        }
        if ball.x <= PADDLE_W && overlaps_paddle(ball.y, self.player_y) {
            ball.vx = ball.vx.abs() * PLAYER_BOOST;
        }
        if ball.x + BALL_SIZE >= FIELD_W - PADDLE_W && overlaps_paddle(ball.y, self.ai_y) {
            ball.vx = -ball.vx.abs() * AI_BOOST;
        }

        let scored_by = if self.ball.x < -OUT_MARGIN {
            self.ai_score += 1;
            Side::Ai
        } else if self.ball.x > FIELD_W + OUT_MARGIN {
            self.player_score += 1;
            Side::Player
        } else {
            return None;
        };

        let (player, ai) = self.scores();
        if player >= WINNING_SCORE || ai >= WINNING_SCORE {
            self.winner = Some(scored_by);
            return Some(PongEvent::Finished {
                winner: scored_by,
                player,
                ai,
            });
        }
        self.serve_after_point(scored_by);
        Some(PongEvent::Scored {
            by: scored_by,
            player,
            ai,
        })
    }

    // The ball restarts from the center heading at the side that just conceded.
    fn serve_after_point(&mut self, scorer: Side) {
        let vy = random_serve_vy(&mut self.rng);
        self.ball = Ball {
            x: FIELD_W / 2.0,
            y: FIELD_H / 2.0,
            vx: match scorer {
                Side::Ai => -SERVE_VX,
                Side::Player => SERVE_VX,
            },
            vy,
        };
    }

    /// Draw calls for one full redraw.
    pub fn paint(&self) -> Vec<DrawOp> {
        let mut ops = vec![DrawOp::Rect {
            x: 0.0,
            y: 0.0,
            w: FIELD_W,
            h: FIELD_H,
            color: BACKGROUND,
        }];
        ops.extend(
            (0u32..)
                .map(|idx| f64::from(idx) * 20.0)
                .take_while(|y| *y < FIELD_H)
                .map(|y| DrawOp::Rect {
                    x: FIELD_W / 2.0 - 1.0,
                    y,
                    w: 2.0,
                    h: 10.0,
                    color: NET,
                }),
        );
        ops.push(DrawOp::Rect {
            x: 0.0,
            y: self.player_y,
            w: PADDLE_W,
            h: PADDLE_H,
            color: PLAYER_COLOR,
        });
        ops.push(DrawOp::Rect {
            x: FIELD_W - PADDLE_W,
            y: self.ai_y,
            w: PADDLE_W,
            h: PADDLE_H,
            color: AI_COLOR,
        });
        ops.push(DrawOp::Rect {
            x: self.ball.x,
            y: self.ball.y,
            w: BALL_SIZE,
            h: BALL_SIZE,
            color: BALL_COLOR,
        });
        ops.push(DrawOp::Text {
            text: self.player_score.to_string(),
            x: FIELD_W / 2.0 - 40.0,
            y: 30.0,
            font: SCORE_FONT,
            color: BALL_COLOR,
        });
        ops.push(DrawOp::Text {
            text: self.ai_score.to_string(),
            x: FIELD_W / 2.0 + 20.0,
            y: 30.0,
            font: SCORE_FONT,
            color: BALL_COLOR,
        });
        ops
    }
}

fn clamp_paddle(y: f64) -> f64 {
    y.clamp(0.0, FIELD_H - PADDLE_H)
}

fn overlaps_paddle(ball_y: f64, paddle_y: f64) -> bool {
    ball_y + BALL_SIZE >= paddle_y && ball_y <= paddle_y + PADDLE_H
}

fn random_serve_vy(rng: &mut SmallRng) -> f64 {
    if rng.gen_bool(0.5) {
        SERVE_VY
    } else {
        -SERVE_VY
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const HOLD_UP: PaddleInput = PaddleInput {
        up: true,
        down: false,
    };

    fn with_ball(x: f64, y: f64, vx: f64, vy: f64) -> PongState {
        let mut state = PongState::new(11);
        state.ball = Ball { x, y, vx, vy };
        state
    }

    fn approx(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn serve_is_diagonal_from_center() {
        let ball = PongState::new(3).ball();
        assert_eq!((ball.x, ball.y), (250.0, 150.0));
        assert_eq!(ball.vx.abs(), 4.0);
        assert_eq!(ball.vy.abs(), 2.0);
    }

    #[test]
    fn paddles_stay_on_the_field() {
        let mut state = with_ball(250.0, 150.0, 0.0, 0.0);
        for _ in 0..100 {
            state.tick(HOLD_UP);
            assert!(state.player_y() >= 0.0);
        }
        assert_eq!(state.player_y(), 0.0);

        let down = PaddleInput {
            up: false,
            down: true,
        };
        for _ in 0..100 {
            state.tick(down);
            assert!(state.player_y() <= FIELD_H - PADDLE_H);
        }
        assert_eq!(state.player_y(), FIELD_H - PADDLE_H);
    }

    #[test]
    fn ai_holds_still_inside_dead_zone() {
        let mut state = with_ball(250.0, 155.0, 0.0, 0.0);
        state.tick(PaddleInput::default());
        assert_eq!(state.ai_y(), 120.0);

        state.ball.y = 200.0;
        state.tick(PaddleInput::default());
        assert_eq!(state.ai_y(), 124.0);
    }

    #[test]
    fn ball_bounces_off_walls() {
        let mut state = with_ball(250.0, 1.0, 0.0, -2.0);
        state.tick(PaddleInput::default());
        assert_eq!(state.ball().vy, 2.0);
    }

    #[test]
    fn paddle_hits_reverse_and_speed_up() {
        let mut state = with_ball(12.0, 140.0, -4.0, 0.0);
        state.tick(PaddleInput::default());
        approx(state.ball().vx, 4.2);

        let mut state = with_ball(FIELD_W - 20.0, 140.0, 4.0, 0.0);
        state.tick(PaddleInput::default());
        approx(state.ball().vx, -4.12);
    }

    #[test]
    fn escaped_ball_scores_and_reserves_toward_the_conceding_side() {
        let mut state = with_ball(-47.0, 10.0, -4.0, 0.0);
        state.player_y = 200.0;
        let event = state.tick(PaddleInput::default());
        assert_eq!(
            event,
            Some(PongEvent::Scored {
                by: Side::Ai,
                player: 0,
                ai: 1,
            })
        );
        let ball = state.ball();
        assert_eq!((ball.x, ball.y, ball.vx), (250.0, 150.0, -4.0));
        assert_eq!(ball.vy.abs(), 2.0);

        let mut state = with_ball(FIELD_W + 47.0, 10.0, 4.0, 0.0);
        state.ai_y = 200.0;
        state.tick(PaddleInput::default());
        assert_eq!(state.scores(), (1, 0));
        assert_eq!(state.ball().vx, 4.0);
    }

    #[test]
    fn fifth_point_finishes_and_freezes_ball() {
        let mut state = with_ball(FIELD_W + 47.0, 10.0, 4.0, 0.0);
        state.ai_y = 200.0;
        state.player_score = 4;
        state.ai_score = 3;
        let event = state.tick(PaddleInput::default()).expect("event");
        assert_eq!(
            event,
            PongEvent::Finished {
                winner: Side::Player,
                player: 5,
                ai: 3,
            }
        );
        assert_eq!(
            event.result_line().as_deref(),
            Some("Pong finished: Player wins (5-3)")
        );
        assert!(!state.is_running());

        let frozen = state.ball();
        assert_eq!(state.tick(HOLD_UP), None);
        assert_eq!(state.ball(), frozen);
    }

    #[test]
    fn ai_win_names_the_terminal() {
        let event = PongEvent::Finished {
            winner: Side::Ai,
            player: 2,
            ai: 5,
        };
        assert_eq!(
            event.result_line().as_deref(),
            Some("Pong finished: Terminal wins (2-5)")
        );
    }

    #[test]
    fn input_tracks_both_key_sets() {
        let mut input = PaddleInput::default();
        assert!(input.apply_key("w", true));
        assert!(input.apply_key("ArrowDown", true));
        assert!(!input.apply_key("x", true));
        assert_eq!(
            input,
            PaddleInput {
                up: true,
                down: true,
            }
        );
        input.apply_key("w", false);
        assert!(!input.up);
    }

    #[test]
    fn paint_draws_net_paddles_ball_and_scores() {
        let ops = PongState::new(1).paint();
        let nets = ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rect { color, .. } if *color == NET))
            .count();
        assert_eq!(nets, 15);
        assert_eq!(ops.len(), 1 + 15 + 3 + 2);
    }
}
