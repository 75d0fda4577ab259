// web_app/components/booking.rs - Passenger form components
//
// These components read from and write to a shared `RwSignal<BookingForm>`:
// - CountSelector: passenger count select + confirm
// - PassengerEditor: name, birthdate and baggage fields for one passenger
// - BaggageSelector: one radio group for a single baggage slot

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::web_app::model::{
    earliest_birthdate, BaggageAddOn, BookingError, BookingForm, Field, PassengerCount, PassengerId,
};
use super::common::FieldMessage;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse the value of an `<input type="date">`; empty means unset
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn format_date_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
}

fn log_rejected(result: Result<impl Sized, BookingError>) {
    if let Err(e) = result {
        leptos::logging::warn!("Booking form edit rejected: {}", e);
    }
}

/// Passenger count selector
///
/// Selecting a count rebuilds the passenger list; confirming opens the editors.
#[component]
pub fn CountSelector(form: RwSignal<BookingForm>) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2">
            <label for="passenger-count" class="font-bold">"Number of passengers"</label>
            <select
                id="passenger-count"
                class="px-4 py-2 border border-gray-300 rounded-lg bg-white cursor-pointer shadow-sm"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    match value.parse::<u8>().map_err(|_| BookingError::NoCountSelected)
                        .and_then(PassengerCount::try_from)
                    {
                        Ok(count) => form.update(|f| log_rejected(f.select_count(count))),
                        Err(e) => leptos::logging::warn!("Ignoring passenger count '{}': {}", value, e),
                    }
                }
            >
                <option value="" disabled=true selected=move || form.with(|f| f.passenger_count().is_none())>
                    "Select"
                </option>
                {PassengerCount::ALL.into_iter().map(|count| {
                    view! {
                        <option
                            value=count.to_string()
                            selected=move || form.with(|f| f.passenger_count() == Some(count))
                        >
                            {count.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
            <button
                type="button"
                class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                       disabled:bg-gray-400 disabled:cursor-not-allowed font-medium"
                disabled=move || !form.with(|f| f.can_confirm())
                on:click=move |_| form.update(|f| log_rejected(f.confirm_count()))
            >
                "Confirm"
            </button>
        </div>
    }
}

/// Radio group for one baggage slot
#[component]
pub fn BaggageSelector(
    form: RwSignal<BookingForm>,
    passenger: PassengerId,
    slot: usize,
    selected: BaggageAddOn,
) -> impl IntoView {
    let group = format!("baggage-{}-{}", passenger, slot);

    view! {
        <div class="flex flex-col space-y-1" role="radiogroup">
            {BaggageAddOn::ALL.into_iter().map(|add_on| {
                view! {
                    <label class="flex items-center space-x-3 cursor-pointer">
                        <input
                            type="radio"
                            name=group.clone()
                            value=add_on.form_value()
                            checked={selected == add_on}
                            on:change=move |_| form.update(|f| log_rejected(f.set_baggage(passenger, slot, add_on)))
                            class="h-4 w-4 border border-blue-600"
                        />
                        <span class="font-normal">{add_on.to_string()}</span>
                    </label>
                }
            }).collect_view()}
        </div>
    }
}

/// Editor for one passenger: name, birthdate and baggage slots
#[component]
pub fn PassengerEditor(
    form: RwSignal<BookingForm>,
    id: PassengerId,
    /// Position in the list, for the heading only
    index: usize,
    today: NaiveDate,
) -> impl IntoView {
    let name = move || form.with(|f| f.passenger(id).map(|p| p.name.clone()).unwrap_or_default());
    let birthdate = move || form.with(|f| format_date_input(f.passenger(id).and_then(|p| p.birthdate)));
    let name_error = Signal::derive(move || form.with(|f| f.error(id, Field::Name).map(|e| e.to_string())));
    let birthdate_error =
        Signal::derive(move || form.with(|f| f.error(id, Field::Birthdate).map(|e| e.to_string())));

    let name_input = format!("name-{}", id);
    let birthdate_input = format!("birthdate-{}", id);

    view! {
        <div class="bg-slate-200 p-3 flex flex-col gap-3 rounded">
            <div class="flex flex-col gap-1">
                <label for=name_input.clone() class="font-bold">
                    "Passenger " {index + 1}
                </label>
                <input
                    id=name_input
                    type="text"
                    placeholder="Full name"
                    class="w-full px-4 py-2 border border-gray-300 rounded-lg shadow-sm"
                    prop:value=name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| log_rejected(f.set_name(id, value)));
                    }
                />
                <FieldMessage error=name_error />
            </div>

            <div class="flex flex-col gap-1">
                <label for=birthdate_input.clone() class="font-bold">"Birthdate"</label>
                <input
                    id=birthdate_input
                    type="date"
                    min=format_date_input(Some(earliest_birthdate()))
                    max=format_date_input(Some(today))
                    class="w-full px-4 py-2 border border-gray-300 rounded-lg shadow-sm"
                    prop:value=birthdate
                    on:change=move |ev| {
                        let value = parse_date_input(&event_target_value(&ev));
                        form.update(|f| log_rejected(f.set_birthdate(id, value, today)));
                    }
                />
                <FieldMessage error=birthdate_error />
            </div>

            <div class="space-y-3">
                <span class="font-bold">"Extra baggage"</span>
                {move || {
                    let slots = form.with(|f| {
                        f.passenger(id).map(|p| p.baggage_add_ons.clone()).unwrap_or_default()
                    });
                    // `slot` is reserved by `view!`, so build the props directly
                    slots.into_iter().enumerate().map(|(slot, selected)| {
                        BaggageSelector(
                            BaggageSelectorProps::builder()
                                .form(form)
                                .passenger(id)
                                .slot(slot)
                                .selected(selected)
                                .build(),
                        )
                    }).collect_view()
                }}
                <button
                    type="button"
                    class="px-4 py-2 bg-white text-gray-700 rounded-lg border border-gray-300 font-medium"
                    on:click=move |_| form.update(|f| log_rejected(f.add_baggage_slot(id)))
                >
                    "Add baggage option"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_input_round_trip_format() {
        let date = NaiveDate::from_ymd_opt(2006, 10, 19).unwrap();
        assert_eq!(format_date_input(Some(date)), "2006-10-19");
        assert_eq!(parse_date_input("2006-10-19"), Some(date));
    }

    #[test]
    fn test_empty_date_input_is_unset() {
        assert_eq!(parse_date_input(""), None);
        assert_eq!(format_date_input(None), "");
    }

    #[test]
    fn test_malformed_date_input() {
        assert_eq!(parse_date_input("19/10/2006"), None);
    }
}
