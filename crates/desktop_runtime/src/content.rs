//! Window body renderers supplied by the entry crate.

use std::{collections::HashMap, fmt, rc::Rc};

use leptos::*;

use crate::{apps::window_title, model::WindowIdentity};

type ContentRenderer = Rc<dyn Fn() -> View>;

/// Maps each window identity to the view rendered inside its frame.
///
/// The runtime only knows window chrome; page content is injected by the site at mount. Identities
/// without a renderer get a short placeholder instead of failing.
#[derive(Clone, Default)]
pub struct WindowContentRegistry {
    renderers: HashMap<WindowIdentity, ContentRenderer>,
}

impl WindowContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the renderer for `id`.
    pub fn with<F, V>(mut self, id: WindowIdentity, render: F) -> Self
    where
        F: Fn() -> V + 'static,
        V: IntoView,
    {
        self.renderers
            .insert(id, Rc::new(move || render().into_view()));
        self
    }

    pub fn has_renderer(&self, id: WindowIdentity) -> bool {
        self.renderers.contains_key(&id)
    }

    pub fn render(&self, id: WindowIdentity) -> View {
        match self.renderers.get(&id) {
            Some(render) => render(),
            None => view! {
                <p class="desktop-window-placeholder">
                    {format!("{} is coming soon.", window_title(id))}
                </p>
            }
            .into_view(),
        }
    }
}

impl fmt::Debug for WindowContentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<_> = self.renderers.keys().copied().collect();
        ids.sort();
        f.debug_struct("WindowContentRegistry")
            .field("renderers", &ids)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_is_per_identity() {
        let registry = WindowContentRegistry::new()
            .with(WindowIdentity::About, || "hello")
            .with(WindowIdentity::Contact, || "write to me");

        assert!(registry.has_renderer(WindowIdentity::About));
        assert!(registry.has_renderer(WindowIdentity::Contact));
        assert!(!registry.has_renderer(WindowIdentity::Projects));
        assert_eq!(
            format!("{registry:?}"),
            "WindowContentRegistry { renderers: [About, Contact] }"
        );
    }
}
