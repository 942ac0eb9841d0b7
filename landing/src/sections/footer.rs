use aipilot_landing_core::content;
use leptos::prelude::*;

#[component]
pub fn Footer(footer: content::Footer) -> impl IntoView {
    view! {
        <footer class="bg-gray-800 text-white py-8">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="mb-4 md:mb-0">
                        <p>{footer.copyright}</p>
                    </div>
                    <div class="flex space-x-4">
                        {footer
                            .links
                            .into_iter()
                            .map(|link| view! { <a href=link.href class="hover:text-blue-400">{link.label}</a> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
