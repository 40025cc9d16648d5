//! Host service bundle handed to the desktop runtime by the entry crate.

use std::rc::Rc;

use crate::{
    ExternalUrlService, FixedViewportSource, NoopExternalUrlService, NoopPrefsStore, PrefsStore,
    ViewportSource,
};

/// Which composition produced a [`HostServices`] bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Real browser adapters.
    Browser,
    /// In-memory or no-op adapters (tests, non-wasm builds).
    Headless,
}

impl HostStrategy {
    /// Stable token for logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

#[derive(Clone)]
/// Services the desktop runtime depends on, injected once at mount.
pub struct HostServices {
    /// Visitor settings storage.
    pub prefs: Rc<dyn PrefsStore>,
    /// Outbound link opener.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Viewport size reader.
    pub viewport: Rc<dyn ViewportSource>,
    /// Composition that built this bundle.
    pub strategy: HostStrategy,
}

impl HostServices {
    /// Bundle of no-op services and a fixed default viewport.
    pub fn headless() -> Self {
        Self {
            prefs: Rc::new(NoopPrefsStore),
            external_urls: Rc::new(NoopExternalUrlService),
            viewport: Rc::new(FixedViewportSource::default()),
            strategy: HostStrategy::Headless,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("strategy", &self.strategy)
            .field("viewport", &self.viewport.viewport())
            .finish_non_exhaustive()
    }
}
