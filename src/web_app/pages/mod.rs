// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components, one per demo:
// - HomePage: links to every demo
// - BookingPage: dynamic multi-passenger form
// - CatalogPage: Pokémon catalog with search and category filter
// - AnalyticsPage: button that reports an analytics event
// - SumPage: background sum worker demo

pub mod home;
pub mod booking;
pub mod catalog;
pub mod analytics;
pub mod sum;

// Re-export page components
pub use home::HomePage;
pub use booking::BookingPage;
pub use catalog::CatalogPage;
pub use analytics::AnalyticsPage;
pub use sum::SumPage;
