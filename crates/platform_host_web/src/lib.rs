//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Non-wasm builds compile every adapter down to a harmless fallback so the workspace can be
//! tested natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the service bundle factory.
pub mod adapters;
pub mod external_url;
pub mod storage;

pub use adapters::{build_host_services, selected_host_strategy};
pub use external_url::WebExternalUrlService;
pub use storage::WebPrefsStore;
