use aipilot_landing_core::content::{Feature, FeatureSection};
use leptos::prelude::*;

#[component]
pub fn Features(features: FeatureSection) -> impl IntoView {
    view! {
        <section id="features" class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12">{features.heading}</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {features
                        .items
                        .into_iter()
                        .map(|feature| view! { <FeatureCard feature=feature /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="text-center space-y-4">
            <div class="text-4xl">{feature.icon}</div>
            <h3 class="text-xl font-semibold">{feature.title}</h3>
            <p class="text-gray-600">{feature.description}</p>
        </div>
    }
}
