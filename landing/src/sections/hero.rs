use aipilot_landing_core::content;
use leptos::prelude::*;

use super::icons::ArrowDownIcon;
use crate::page::Page;

#[component]
pub fn Hero(page: Page, hero: content::Hero) -> impl IntoView {
    let background = format!("background-image: url('{}')", hero.background);
    let target = hero.cta_target;

    view! {
        <section id="hero" class="relative h-screen flex items-center justify-center text-center text-white">
            <div class="absolute inset-0 bg-cover bg-center" style=background></div>
            <div class="absolute inset-0 bg-black opacity-50"></div>
            <div class="relative z-10 space-y-8">
                <h1 class="text-4xl md:text-6xl font-bold leading-tight">{hero.headline}</h1>
                <p class="text-xl md:text-2xl">{hero.tagline}</p>
                <button
                    class="bg-blue-600 text-white px-8 py-3 rounded-full text-lg font-semibold hover:bg-blue-700 transition duration-300"
                    on:click=move |_| {
                        page.navigate(target);
                    }
                >
                    {hero.cta}
                </button>
            </div>
            <ArrowDownIcon
                size=32
                class="absolute bottom-8 left-1/2 transform -translate-x-1/2 text-white animate-bounce"
            />
        </section>
    }
}
