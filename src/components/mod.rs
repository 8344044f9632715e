//! Reusable Leptos components.

pub mod auth_provider;
pub mod route_gate;
