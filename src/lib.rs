//! Complyscan - compliance document submission and analysis gateway.
//!
//! Encodes local documents for submission to a keyword analyzer, relays
//! analysis requests through a small HTTP gateway, and normalizes the
//! analyzer's findings for display and CSV export.

pub mod cli;
pub mod client;
pub mod config;
pub mod models;
pub mod server;
pub mod services;
pub mod session;
pub mod utils;
