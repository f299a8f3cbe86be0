//! Wall-clock helpers shared by the runtime clock and randomness seeding.

use std::cell::Cell;

use chrono::{DateTime, Local, NaiveDateTime};

thread_local! {
    static SEED_COUNTER: Cell<u64> = const { Cell::new(0) };
}

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default()
}

/// Returns a fresh seed for a deterministic RNG.
///
/// Successive calls within one page session never repeat, even inside the same millisecond.
pub fn entropy_seed() -> u64 {
    let bump = SEED_COUNTER.with(|counter| {
        let next = counter.get().wrapping_add(1);
        counter.set(next);
        next
    });
    splitmix64(unix_time_ms_now() ^ bump.rotate_left(32))
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Calendar reading used by the top-bar clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading(NaiveDateTime);

impl ClockReading {
    /// Builds a UTC reading from a unix millisecond timestamp.
    pub fn from_unix_ms(unix_ms: u64) -> Self {
        let at = i64::try_from(unix_ms)
            .ok()
            .and_then(DateTime::from_timestamp_millis)
            .unwrap_or_default();
        Self(at.naive_utc())
    }

    /// `YYYY-MM-DD`.
    pub fn date_label(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// `HH:MM`.
    pub fn time_label(&self) -> String {
        self.0.format("%H:%M").to_string()
    }

    /// `YYYY-MM-DD HH:MM`.
    pub fn label(&self) -> String {
        self.0.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Reads the current local time (browser timezone on wasm).
pub fn local_clock_now() -> ClockReading {
    ClockReading(Local::now().naive_local())
}
