//! namecheck library
//!
//! Generation, persistence and CLI commands around `namecheck-core`.
//!
//! CHANGELOG:
//! - 10/14/2026 - Initial library structure

pub mod commands;
pub mod generator;
pub mod output;
pub mod store;
