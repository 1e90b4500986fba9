//! HTTP request handlers for the gateway.

mod analyze;
mod health;

pub use analyze::analyze;
pub use health::health;
