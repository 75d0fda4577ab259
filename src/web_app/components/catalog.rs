// web_app/components/catalog.rs - Catalog browser components
//
// These components handle the catalog interface including:
// - SearchInput: live substring search
// - CategoryToggles: one toggle button per category (OR across selections)
// - CatalogGrid / CatalogCard: the visible items

use leptos::prelude::*;
use crate::web_app::model::{CatalogFilter, CatalogItem, CATEGORIES};
use super::common::{Badge, SecondaryButton};

/// Live search box; every keystroke re-filters the in-memory list
#[component]
pub fn SearchInput(filter: RwSignal<CatalogFilter>) -> impl IntoView {
    view! {
        <input
            type="text"
            placeholder="Search Pokémon..."
            class="w-full mb-4 px-4 py-3 border-2 border-gray-200 rounded-xl \
                   focus:ring-4 focus:ring-blue-100 focus:border-blue-500 \
                   outline-none text-lg transition-all shadow-sm"
            prop:value=move || filter.with(|f| f.search_term().to_string())
            on:input=move |ev| {
                let term = event_target_value(&ev);
                filter.update(|f| f.search(term));
            }
        />
    }
}

pub fn toggle_class(selected: bool) -> &'static str {
    if selected {
        "px-3 py-1.5 rounded-lg text-sm font-medium bg-blue-600 text-white shadow-sm transition-all"
    } else {
        "px-3 py-1.5 rounded-lg text-sm font-medium bg-white border border-gray-200 \
         text-gray-700 hover:bg-gray-50 hover:border-gray-300 transition-all"
    }
}

/// Category toggle buttons plus a clear control
#[component]
pub fn CategoryToggles(filter: RwSignal<CatalogFilter>) -> impl IntoView {
    let on_clear = Callback::new(move |()| filter.update(|f| f.clear()));

    view! {
        <div class="mb-4 flex flex-wrap gap-2">
            {CATEGORIES.into_iter().map(|category| {
                view! {
                    <button
                        type="button"
                        class=move || toggle_class(filter.with(|f| f.is_selected(category)))
                        on:click=move |_| {
                            filter.update(|f| {
                                f.toggle_category(category);
                            });
                        }
                    >
                        {category}
                    </button>
                }
            }).collect_view()}
            <SecondaryButton on_click=on_clear>"Clear"</SecondaryButton>
        </div>
    }
}

/// Card for one catalog item
#[component]
pub fn CatalogCard(item: CatalogItem) -> impl IntoView {
    let alt = item.name.clone();

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-100 p-4">
            {item.sprite.map(|src| view! {
                <img src=src alt=alt class="w-32 h-32 mx-auto" />
            })}
            <h3 class="text-center font-bold mt-2 capitalize">{item.name}</h3>
            <div class="flex justify-center gap-1 mt-2">
                {item.categories.into_iter().map(|category| view! {
                    <Badge variant="blue">{category}</Badge>
                }).collect_view()}
            </div>
        </div>
    }
}

/// Grid of visible items
#[component]
pub fn CatalogGrid(
    /// Items left after filtering
    items: Signal<Vec<CatalogItem>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || items.with(|i| !i.is_empty())
            fallback=|| view! {
                <p class="text-center text-gray-500 p-8">"No Pokémon match the current filters."</p>
            }
        >
            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">
                <For
                    each=move || items.get()
                    key=|item| item.id
                    children=move |item| view! { <CatalogCard item=item /> }
                />
            </div>
        </Show>
    }
}
