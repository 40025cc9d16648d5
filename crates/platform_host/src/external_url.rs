//! Opening links that leave the desktop (social profiles, résumé, mail).

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Boxed, object-safe future returned by [`ExternalUrlService`].
pub type ExternalUrlFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that navigates to a URL outside the desktop shell.
pub trait ExternalUrlService {
    /// Opens `url` (new tab in browsers, `mailto:` handled by the platform).
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Ignores every request.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url<'a>(&'a self, _url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Records requested URLs instead of opening them.
pub struct RecordingExternalUrlService {
    opened: Rc<RefCell<Vec<String>>>,
}

impl RecordingExternalUrlService {
    /// URLs requested so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ExternalUrlService for RecordingExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.opened.borrow_mut().push(url.to_owned());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn recording_service_keeps_request_order() {
        let service = RecordingExternalUrlService::default();
        let handle = service.clone();
        block_on(service.open_url("https://github.com/")).expect("open");
        block_on(service.open_url("mailto:hello@example.com")).expect("open");

        assert_eq!(
            handle.opened(),
            vec![
                "https://github.com/".to_string(),
                "mailto:hello@example.com".to_string()
            ]
        );
    }
}
