//! Core types and utilities for the wolf-and-sheep chase simulation.

pub mod types;
pub mod config;
pub mod error;
pub mod record;

pub use error::{Error, Result};
pub use types::*;
pub use config::*;
pub use record::*;
