//! Outbound link adapter backed by `window.open` / `location.href`.

use platform_host::{ExternalUrlFuture, ExternalUrlService};

#[derive(Debug, Clone, Copy, Default)]
/// Opens web links in a new tab and hands `mailto:` links to the current location.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move { open_in_browser(url) })
    }
}

fn is_mail_link(url: &str) -> bool {
    url.get(..7)
        .map(|scheme| scheme.eq_ignore_ascii_case("mailto:"))
        .unwrap_or(false)
}

#[cfg(target_arch = "wasm32")]
fn open_in_browser(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    if is_mail_link(url) {
        return window
            .location()
            .set_href(url)
            .map_err(|err| format!("navigate to `{url}` failed: {err:?}"));
    }
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(format!("popup blocked for `{url}`")),
        Err(err) => Err(format!("window.open(`{url}`) failed: {err:?}")),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn open_in_browser(url: &str) -> Result<(), String> {
    let _ = is_mail_link(url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mail_links_are_detected_case_insensitively() {
        assert!(is_mail_link("mailto:hi@example.com"));
        assert!(is_mail_link("MAILTO:hi@example.com"));
        assert!(!is_mail_link("https://example.com"));
        assert!(!is_mail_link("mail"));
    }
}
