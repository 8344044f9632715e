//! Utility helpers shared across console modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers)
//! from state and page logic to improve reuse and testability.

pub mod credential;
pub mod timeout;
