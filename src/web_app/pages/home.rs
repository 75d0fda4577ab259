// web_app/pages/home.rs - Landing page with links to each demo

use leptos::prelude::*;

/// Routes listed on the landing page as (path, label, description)
pub const DEMO_LINKS: [(&str, &str, &str); 4] = [
    ("/booking", "Dynamic form", "Book seats for up to three passengers"),
    ("/catalog", "Pokémon catalog", "Search and filter the full Pokédex"),
    ("/analytics", "Analytics event", "Report a button click to the collector"),
    ("/worker", "Background worker", "Sum a billion integers off the UI thread"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="max-w-2xl mx-auto p-6">
            <h1 class="text-3xl font-bold mb-6">"Demo pages"</h1>
            <ul class="space-y-4">
                {DEMO_LINKS.into_iter().map(|(href, label, description)| view! {
                    <li>
                        <a href=href class="text-blue-600 font-semibold hover:underline">{label}</a>
                        <p class="text-sm text-gray-500">{description}</p>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
