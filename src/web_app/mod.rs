// web_app/mod.rs - Root module for the Leptos web application
//
// This module contains the components and logic for the demo pages.
//
// Architecture:
// - model/: Shared data types and page state machines (client and server)
// - server_fns/: Server function declarations (both client and server)
// - api/: Catalog fetch, sum worker, config and analytics (server side)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;

// Catalog fan-out and the sum worker build without any feature so their
// logic is testable on its own; SSR-only parts are gated inside.
pub mod api;

// Server function declarations - must be available to both client and server
// The #[server] macro generates client stubs that call the server via HTTP
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
