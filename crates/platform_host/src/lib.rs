//! Typed host-service contracts shared by the desktop runtime and its browser adapters.
//!
//! The runtime only talks to the outside world through the traits in this crate: a tiny
//! key-value preference store and an external URL opener. Concrete browser implementations live
//! in `platform_host_web`; in-memory implementations here back tests and non-browser builds.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod external_url;
pub mod host;
pub mod storage;
pub mod time;

pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService, RecordingExternalUrlService,
};
pub use host::{HostServices, HostStrategy};
pub use storage::prefs::{
    load_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
    UnavailablePrefsStore,
};
pub use time::{entropy_seed, local_clock_now, unix_time_ms_now, ClockReading};
