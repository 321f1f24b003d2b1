//! HTTP request handlers

pub mod emails;
pub mod health;

pub use emails::submit;
pub use health::liveness;
