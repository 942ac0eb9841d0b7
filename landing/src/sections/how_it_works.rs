use aipilot_landing_core::content;
use leptos::prelude::*;

#[component]
pub fn HowItWorks(section: content::HowItWorks) -> impl IntoView {
    view! {
        <section id="how-it-works" class="py-20 bg-gray-100">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12">{section.heading}</h2>
                <div class="max-w-3xl mx-auto">
                    <img
                        src=section.image
                        alt=section.image_alt
                        width=section.image_width.to_string()
                        height=section.image_height.to_string()
                        class="rounded-lg shadow-lg"
                    />
                </div>
            </div>
        </section>
    }
}
