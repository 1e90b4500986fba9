//! Service layer for complyscan business logic.
//!
//! This module contains domain logic separated from UI concerns.
//! Services can be used by CLI, web server, or other interfaces.

pub mod encode;
pub mod export;

pub use encode::encode_files;
pub use export::{to_csv, write_csv, EXPORT_FILENAME};
