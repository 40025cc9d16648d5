//! Viewport reader over `window.innerWidth` / `window.innerHeight`.

use platform_host::{Viewport, ViewportSource};

#[derive(Debug, Clone, Copy, Default)]
/// Reports the live browser window size.
pub struct WindowViewportSource;

impl ViewportSource for WindowViewportSource {
    fn viewport(&self) -> Viewport {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return Viewport::default();
            };
            let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
                value.ok().and_then(|v| v.as_f64()).map(|v| v as i32)
            };
            match (read(window.inner_width()), read(window.inner_height())) {
                (Some(width), Some(height)) => Viewport::new(width, height),
                _ => Viewport::default(),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Viewport::default()
        }
    }
}
