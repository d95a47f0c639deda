//! Shared library for the ReelPick movie discovery service
//!
//! Holds the error type, configuration resolution, catalog record types,
//! and the quiz core (constants, validation, matching, result cache,
//! session state machine) used by the reelpick-ui service crate.

pub mod config;
pub mod error;
pub mod quiz;
pub mod types;

pub use error::{Error, Result};
