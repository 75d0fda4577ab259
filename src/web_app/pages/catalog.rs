// web_app/pages/catalog.rs - Pokémon catalog page
//
// Loads the whole catalog once on mount, then filters it in memory on every
// search keystroke or category toggle.

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::model::*;
use crate::web_app::server_fns::load_catalog;

/// Items shown for a load outcome; a failed load shows nothing
pub fn loaded_items(outcome: Option<Result<Vec<CatalogItem>, ServerFnError>>) -> Vec<CatalogItem> {
    outcome.and_then(|r| r.ok()).unwrap_or_default()
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let filter = RwSignal::new(CatalogFilter::new());

    // Single fetch per mount
    let catalog = Resource::new(|| (), |_| load_catalog());

    Effect::new(move |_| {
        if let Some(Err(e)) = catalog.get() {
            leptos::logging::error!("Failed to load catalog: {}", e);
        }
    });

    let items = Signal::derive(move || loaded_items(catalog.get()));

    let visible = Memo::new(move |_| {
        let all = items.get();
        filter.with(|f| f.visible(&all).into_iter().cloned().collect::<Vec<_>>())
    });

    view! {
        <div class="min-h-screen bg-gray-50">
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <PageTitle title="Pokémon catalog" />
                <section class="bg-white rounded-2xl shadow-sm p-6 mb-8 border border-gray-100">
                    <SearchInput filter=filter />
                    <CategoryToggles filter=filter />
                </section>

                <Suspense fallback=move || view! { <Loading message="Loading Pokémon..." /> }>
                    {move || catalog.get().map(|_| view! {
                        <CatalogGrid items=Signal::derive(move || visible.get()) />
                    })}
                </Suspense>
            </main>
        </div>
    }
}
