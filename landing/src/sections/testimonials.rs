use aipilot_landing_core::content::{Testimonial, TestimonialSection};
use leptos::prelude::*;

#[component]
pub fn Testimonials(testimonials: TestimonialSection) -> impl IntoView {
    view! {
        <section id="testimonials" class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12">{testimonials.heading}</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {testimonials
                        .items
                        .into_iter()
                        .map(|testimonial| view! { <TestimonialCard testimonial=testimonial /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let avatar = testimonial.avatar_url();
    let quote = format!("\"{}\"", testimonial.comment);

    view! {
        <div class="bg-gray-100 p-6 rounded-lg shadow-md">
            <p class="text-gray-600 mb-4">{quote}</p>
            <div class="flex items-center space-x-4">
                <img
                    src=avatar
                    alt=testimonial.name.clone()
                    width="40"
                    height="40"
                    class="rounded-full"
                />
                <div>
                    <p class="font-semibold">{testimonial.name}</p>
                    <p class="text-sm text-gray-500">{testimonial.role}</p>
                </div>
            </div>
        </div>
    }
}
