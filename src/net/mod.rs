//! Networking modules for the admin backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the HTTP seam, `api` handles the auth endpoints,
//! `sessions` and `cache` are the administrative operations, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod cache;
pub mod sessions;
#[cfg(test)]
pub(crate) mod testing;
pub mod transport;
pub mod types;
