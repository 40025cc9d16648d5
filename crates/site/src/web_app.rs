use desktop_runtime::{DesktopProvider, DesktopShell, WindowContentRegistry, WindowIdentity};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::browser_host_services;

use crate::pages::{AboutPage, ContactPage, ExperiencePage, ProjectsPage};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Portfolio Desktop" />
        <Meta name="description" content="A personal portfolio presented as a small desktop you can click around in." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/*any" view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

fn portfolio_content() -> WindowContentRegistry {
    WindowContentRegistry::new()
        .with(WindowIdentity::About, || view! { <AboutPage /> })
        .with(WindowIdentity::Projects, || view! { <ProjectsPage /> })
        .with(WindowIdentity::Experience, || view! { <ExperiencePage /> })
        .with(WindowIdentity::Contact, || view! { <ContactPage /> })
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider host_services=browser_host_services() content=portfolio_content()>
            <DesktopShell />
        </DesktopProvider>
    }
}
