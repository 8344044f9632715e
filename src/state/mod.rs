//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `provider`, `gate`) so the guard logic
//! stays plain Rust, testable without a reactive runtime. The Leptos
//! components in `crate::components` bridge these types into signals.

pub mod auth;
pub mod gate;
pub mod provider;
