// web_app/api/mod.rs - API module for server-side logic
//
// This module contains the outbound data access and background work used by
// the server functions:
// - catalog: two-stage fan-out fetch against the catalog API
// - worker: one-shot background sum worker
// - config: environment-driven settings and shared HTTP client (SSR only)
// - analytics: fire-and-forget event collector (SSR only)
//
// `catalog` and `worker` carry no server dependencies so their logic can be
// tested without the `ssr` feature.

pub mod catalog;
pub mod worker;

#[cfg(feature = "ssr")]
pub mod config;

#[cfg(feature = "ssr")]
pub mod analytics;
