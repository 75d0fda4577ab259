// web_app/app.rs - Root application component
//
// Sets up meta tags, the stylesheet and one route per demo page.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::{AnalyticsPage, BookingPage, CatalogPage, HomePage, SumPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Demo pages" />
        <Meta name="description" content="Passenger form, Pokémon catalog, analytics and worker demos" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/demo_pages.css" />

        <Router>
            <nav class="bg-white border-b border-gray-200 px-4 py-3 flex gap-4 text-sm font-medium">
                <A href="/">"Home"</A>
                <A href="/booking">"Form"</A>
                <A href="/catalog">"Catalog"</A>
                <A href="/analytics">"Analytics"</A>
                <A href="/worker">"Worker"</A>
            </nav>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/booking") view=BookingPage />
                    <Route path=path!("/catalog") view=CatalogPage />
                    <Route path=path!("/analytics") view=AnalyticsPage />
                    <Route path=path!("/worker") view=SumPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Back to demos"
                </a>
            </div>
        </div>
    }
}
