use aipilot_landing_core::SectionId;
use leptos::prelude::*;

use crate::page::Page;

/// Full-screen navigation overlay for narrow viewports.
///
/// Only dismissed by navigating or by the header toggle button.
#[component]
pub fn MobileMenu(page: Page, links: Vec<(SectionId, String)>) -> impl IntoView {
    view! {
        <Show when=move || page.menu_open()>
            <div id="mobile-menu" class="fixed inset-0 bg-white z-40 md:hidden">
                <div class="flex flex-col items-center justify-center h-full space-y-8">
                    {links
                        .clone()
                        .into_iter()
                        .map(|(id, label)| {
                            view! {
                                <button
                                    data-section=id.as_str()
                                    class="text-xl font-medium text-gray-600 hover:text-blue-600"
                                    on:click=move |_| {
                                        page.navigate(id);
                                    }
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </Show>
    }
}
