use aipilot_landing_core::SectionId;
use aipilot_landing_core::content::Brand;
use leptos::prelude::*;

use super::icons::{CloseIcon, MenuIcon};
use crate::page::Page;

/// Desktop nav button style; the active section is highlighted.
pub(crate) fn nav_link_class(highlighted: bool) -> &'static str {
    if highlighted {
        "text-sm font-medium text-blue-600"
    } else {
        "text-sm font-medium text-gray-600 hover:text-blue-600"
    }
}

#[component]
pub fn Nav(page: Page, brand: Brand, links: Vec<(SectionId, String)>) -> impl IntoView {
    view! {
        <header class="fixed top-0 left-0 right-0 bg-white shadow-md z-50">
            <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                <a href="/" class="flex items-center space-x-2">
                    <img src=brand.logo alt=brand.logo_alt width="40" height="40" />
                    <span class="text-xl font-bold text-blue-600">{brand.name}</span>
                </a>
                <nav class="hidden md:flex space-x-4">
                    {links
                        .into_iter()
                        .map(|(id, label)| {
                            view! {
                                <button
                                    data-section=id.as_str()
                                    class=move || nav_link_class(page.is_highlighted(id))
                                    on:click=move |_| {
                                        page.navigate(id);
                                    }
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <button
                    class="md:hidden text-gray-600 hover:text-blue-600"
                    aria-label="menu"
                    aria-expanded=move || page.menu_open().to_string()
                    on:click=move |_| page.toggle_menu()
                >
                    <Show when=move || page.menu_open() fallback=|| view! { <MenuIcon /> }>
                        <CloseIcon />
                    </Show>
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn highlighted_link_is_blue() {
        assert_eq!(nav_link_class(true), "text-sm font-medium text-blue-600");
    }

    #[test]
    fn idle_link_highlights_on_hover() {
        let class = nav_link_class(false);
        assert!(class.contains("text-gray-600"));
        assert!(class.contains("hover:text-blue-600"));
    }
}
