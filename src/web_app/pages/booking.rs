// web_app/pages/booking.rs - Dynamic passenger form page
//
// Two views over one `BookingForm` signal: the count selector until the
// count is confirmed, then one editor per passenger plus submit.

use chrono::Local;
use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::model::*;

/// Banner text after a submit attempt
pub fn submit_message(outcome: &Result<BookingSummary, SubmitError>) -> String {
    match outcome {
        Ok(summary) => format!(
            "Booking submitted for {} passenger(s), {} kg extra baggage",
            summary.passengers, summary.extra_baggage_kg
        ),
        Err(SubmitError::NoAdult) => "Booking needs at least one adult passenger".to_string(),
        Err(e) => format!("Please fix the highlighted fields ({})", e),
    }
}

#[component]
pub fn BookingPage() -> impl IntoView {
    let form = RwSignal::new(BookingForm::new());
    let today = Local::now().date_naive();
    let banner = RwSignal::new(None::<String>);

    let stage = move || form.with(|f| f.stage());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(outcome) = form.try_update(|f| f.submit(today)) {
            banner.set(Some(submit_message(&outcome)));
        }
    };

    let passenger_ids = move || {
        form.with(|f| {
            f.passengers()
                .iter()
                .enumerate()
                .map(|(index, p)| (index, p.id))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="max-w-[375px] p-2 w-full m-auto flex-col items-center justify-center mt-10">
            <PageTitle title="Dynamic form" />

            <Show when=move || stage() == FormStage::SelectingCount>
                <CountSelector form=form />
            </Show>

            <Show when=move || stage() != FormStage::SelectingCount>
                <form on:submit=on_submit class="w-full p-2 space-y-6 border border-gray-200 rounded">
                    <For
                        each=passenger_ids
                        key=|(_, id)| *id
                        children=move |(index, id)| view! {
                            <PassengerEditor form=form id=id index=index today=today />
                        }
                    />
                    <Button
                        button_type="submit"
                        disabled=Signal::derive(move || stage() == FormStage::Accepted)
                    >
                        "Submit"
                    </Button>
                </form>
            </Show>

            {move || banner.get().map(|message| {
                let accepted = stage() == FormStage::Accepted;
                view! {
                    <p class=if accepted { "mt-4 text-green-700 font-medium" } else { "mt-4 text-red-600 font-medium" }>
                        {message}
                    </p>
                }
            })}
        </div>
    }
}
