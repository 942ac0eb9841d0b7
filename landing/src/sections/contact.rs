use aipilot_landing_core::content;
use leptos::prelude::*;

#[component]
pub fn Contact(contact: content::Contact) -> impl IntoView {
    let mailto = contact.mailto();

    view! {
        <section id="contact" class="py-20 bg-gray-100">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12">{contact.heading}</h2>
                <div class="max-w-2xl mx-auto text-center">
                    <p class="text-xl mb-8">{contact.blurb}</p>
                    <p class="text-2xl font-semibold mb-4">
                        {contact.email_label} ": "
                        <a href=mailto class="hover:underline">{contact.email}</a>
                    </p>
                    <a
                        href=contact.website
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-blue-600 hover:underline"
                    >
                        {contact.website_label}
                    </a>
                </div>
            </div>
        </section>
    }
}
