//! Browser (`wasm32`) implementations of the [`platform_host`] contracts.
//!
//! Every adapter compiles on native targets too, where it degrades to a no-op so the runtime
//! crates can run their unit tests without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod external_url;
pub mod storage;
pub mod viewport;

use std::rc::Rc;

use platform_host::{HostServices, HostStrategy};

pub use external_url::WebExternalUrlService;
pub use storage::local_prefs::WebPrefsStore;
pub use viewport::WindowViewportSource;

/// Assembles the host bundle used by the browser entry point.
pub fn browser_host_services() -> HostServices {
    HostServices {
        prefs: Rc::new(WebPrefsStore),
        external_urls: Rc::new(WebExternalUrlService),
        viewport: Rc::new(WindowViewportSource),
        strategy: HostStrategy::Browser,
    }
}
