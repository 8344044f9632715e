pub mod cache;
pub mod dashboard;
pub mod login;
pub mod sessions;
