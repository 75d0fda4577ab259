// web_app/pages/analytics.rs - Analytics event page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::components::*;
use crate::web_app::model::AnalyticsEvent;
use crate::web_app::server_fns::track_event;

/// Fire-and-forget report; failures are only logged
fn report(event: AnalyticsEvent) {
    leptos::logging::log!("Reporting analytics event '{}'", event.name);
    spawn_local(async move {
        if let Err(e) = track_event(event).await {
            leptos::logging::warn!("Analytics event not delivered: {}", e);
        }
    });
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let on_click = Callback::new(move |()| report(AnalyticsEvent::button_clicked()));

    view! {
        <div class="max-w-md mx-auto p-6 flex flex-col items-center gap-4 mt-10">
            <PageTitle title="Analytics event" />
            <p class="text-gray-600 text-center">
                "Each click reports a "
                <code>{crate::web_app::model::BUTTON_CLICKED_EVENT}</code>
                " event."
            </p>
            <Button on_click=on_click>"Send event"</Button>
        </div>
    }
}
