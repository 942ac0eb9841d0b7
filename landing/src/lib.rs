// AIPilotSmarteasy Landing Page — Leptos 0.8 Edition
// Built by the AIPilot team (c)2023

mod dom;
mod page;
pub mod sections;

use aipilot_landing_core::SiteContent;
use leptos::prelude::*;
use sections::*;

pub use dom::DomViewport;
pub use page::Page;

/// Install the panic hook and console logger, then mount the page.
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    match SiteContent::embedded() {
        Ok(content) => {
            tracing::info!(brand = %content.brand.name, "mounting landing page");
            leptos::mount::mount_to_body(move || view! { <App content=content /> });
        }
        Err(err) => tracing::error!(%err, "site content failed to load"),
    }
}

#[component]
pub fn App(content: SiteContent) -> impl IntoView {
    let page = Page::new(&content.spy);
    page.track_scroll();
    let links = content.navigation();

    view! {
        <div class="min-h-screen bg-gray-100 font-sans">
            <Nav page=page brand=content.brand links=links.clone() />
            <MobileMenu page=page links=links />
            <main class="pt-16">
                <Hero page=page hero=content.hero />
                <Features features=content.features />
                <HowItWorks section=content.how_it_works />
                <Testimonials testimonials=content.testimonials />
                <Contact contact=content.contact />
            </main>
            <Footer footer=content.footer />
        </div>
    }
}
