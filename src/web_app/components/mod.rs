// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Reusable atomic components (Button, Loading, Badge, etc.)
// - booking.rs: Passenger form components (CountSelector, PassengerEditor)
// - catalog.rs: Catalog browser components (SearchInput, CategoryToggles, CatalogGrid)

pub mod common;
pub mod booking;
pub mod catalog;

// Re-export commonly used components for convenience
pub use common::*;
pub use booking::*;
pub use catalog::*;
