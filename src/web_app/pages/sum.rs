// web_app/pages/sum.rs - Background worker demo
//
// The button sends one request to the sum worker and stays disabled until
// the reply (or an error) comes back.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::components::*;
use crate::web_app::model::*;
use crate::web_app::server_fns::compute_sum;

pub fn button_label(busy: bool) -> &'static str {
    if busy {
        "Calculating..."
    } else {
        "Start Expensive Computation"
    }
}

#[component]
pub fn SumPage() -> impl IntoView {
    let trigger = RwSignal::new(SumTrigger::default());

    let busy = Signal::derive(move || trigger.with(|t| t.is_busy()));

    let on_click = Callback::new(move |()| {
        let Some(SumRequest(bound)) = trigger.try_update(|t| t.begin()).flatten() else {
            return;
        };
        leptos::logging::log!("Starting sum worker with bound {}", bound);
        spawn_local(async move {
            let outcome = compute_sum(bound).await.map(SumReply).map_err(|e| e.to_string());
            if let Err(e) = &outcome {
                leptos::logging::error!("Sum worker failed: {}", e);
            }
            trigger.update(|t| {
                t.complete(outcome);
            });
        });
    });

    view! {
        <div class="max-w-md mx-auto p-6 flex flex-col items-center gap-4 mt-10">
            <PageTitle title="Background worker" />
            <Button on_click=on_click disabled=busy>
                {move || button_label(busy.get())}
            </Button>
            {move || trigger.with(|t| t.last_result()).map(|sum| view! {
                <p class="font-medium">"Result: " {sum.to_string()}</p>
            })}
            {move || trigger.with(|t| t.last_error().map(str::to_string)).map(|e| view! {
                <ErrorDisplay error=e />
            })}
        </div>
    }
}
