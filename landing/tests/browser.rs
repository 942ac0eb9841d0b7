//! Browser tests: `wasm-pack test --headless --firefox landing`

#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use aipilot_landing::{App, Page};
use aipilot_landing_core::{SectionId, SiteContent, SpyConfig};
use gloo_timers::future::sleep;
use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn append_div() -> HtmlElement {
    let div = document()
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    document().body().unwrap().append_child(&div).unwrap();
    div
}

/// Section pinned to the viewport so its rect ignores the scroll offset.
fn fixed_section(id: SectionId, top: f64, height: f64) -> HtmlElement {
    let div = append_div();
    div.set_id(id.as_str());
    let style = div.style();
    style.set_property("position", "fixed").unwrap();
    style.set_property("top", &format!("{top}px")).unwrap();
    style.set_property("height", &format!("{height}px")).unwrap();
    div
}

fn dispatch_scroll() {
    let event = Event::new("scroll").unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

fn click(selector: &str) {
    document()
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

async fn next_frame() {
    sleep(Duration::from_millis(20)).await;
}

#[wasm_bindgen_test]
fn scroll_updates_active_until_cleanup() {
    let owner = Owner::new();
    owner.set();
    let page = Page::new(&SpyConfig::default());
    let component = owner.child();
    component.with(|| page.track_scroll());

    let features = fixed_section(SectionId::Features, 50.0, 450.0);
    dispatch_scroll();
    assert_eq!(page.snapshot().active(), SectionId::Features);

    component.cleanup();

    let contact = fixed_section(SectionId::Contact, 0.0, 300.0);
    features.style().set_property("top", "400px").unwrap();
    dispatch_scroll();
    assert_eq!(page.snapshot().active(), SectionId::Features);

    features.remove();
    contact.remove();
}

#[wasm_bindgen_test]
async fn renders_every_section() {
    let container = append_div();
    let content = SiteContent::embedded().unwrap();
    let handle = leptos::mount::mount_to(container.clone(), move || view! { <App content=content /> });

    for id in SectionId::ALL {
        assert!(
            document().get_element_by_id(id.as_str()).is_some(),
            "missing #{id}"
        );
    }
    let html = container.inner_html();
    assert!(html.contains("mailto:contact@aipilot.com"));
    assert!(html.contains("noopener noreferrer"));
    assert!(html.contains("text=김"));

    drop(handle);
    container.remove();
}

#[wasm_bindgen_test]
async fn mobile_menu_toggles_and_closes_on_navigation() {
    let container = append_div();
    let content = SiteContent::embedded().unwrap();
    let handle = leptos::mount::mount_to(container.clone(), move || view! { <App content=content /> });

    assert!(document().get_element_by_id("mobile-menu").is_none());

    click("button[aria-label='menu']");
    next_frame().await;
    let overlay = document()
        .get_element_by_id("mobile-menu")
        .expect("menu opens on toggle");
    assert_eq!(overlay.query_selector_all("button").unwrap().length(), 4);

    click("button[aria-label='menu']");
    next_frame().await;
    assert!(document().get_element_by_id("mobile-menu").is_none());

    click("button[aria-label='menu']");
    next_frame().await;
    click("#mobile-menu button[data-section='contact']");
    next_frame().await;
    assert!(document().get_element_by_id("mobile-menu").is_none());

    drop(handle);
    container.remove();
}
