// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between frontend and backend. The submodules hold the
// framework-free state machines that the pages drive through signals:
// - booking: passenger field-array, per-field and cross-field validation
// - catalog: in-memory search/category filter over fetched items
// - sum: one-shot background sum request/reply and its trigger state

pub mod booking;
pub mod catalog;
pub mod sum;

pub use booking::*;
pub use catalog::*;
pub use sum::*;

use serde::{Deserialize, Serialize};

/// Event name reported by the analytics page
pub const BUTTON_CLICKED_EVENT: &str = "buttonClicked";

/// Fixed payload value sent with [`BUTTON_CLICKED_EVENT`]
pub const BUTTON_CLICKED_VALUE: &str = "F28R319MYW";

/// Parameters carried by an analytics event
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventParams {
    pub value: String,
}

/// A single named analytics event
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub params: EventParams,
}

impl AnalyticsEvent {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: EventParams { value: value.into() },
        }
    }

    /// The event fired by the analytics demo button
    pub fn button_clicked() -> Self {
        Self::new(BUTTON_CLICKED_EVENT, BUTTON_CLICKED_VALUE)
    }
}
