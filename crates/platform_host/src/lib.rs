//! Typed host contracts shared by the desktop runtime and its browser adapters.
//!
//! Nothing in this crate touches the DOM. Concrete browser implementations live in
//! `platform_host_web`; tests and non-wasm builds use the in-memory and no-op adapters exported
//! here.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod external_url;
pub mod host;
pub mod storage;
pub mod viewport;

pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService, RecordingExternalUrlService,
};
pub use host::{HostServices, HostStrategy};
pub use storage::prefs::{MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture};
pub use viewport::{FixedViewportSource, Viewport, ViewportSource};
