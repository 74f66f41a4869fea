//! Backdrop library - expose modules for testing
//!
//! The binary in `main.rs` is a thin dispatcher over these modules.

pub mod commands;
pub mod common;
pub mod errors;
pub mod generator;

pub use backdrop_logger as logger;
pub use common::GlobalOpts;
