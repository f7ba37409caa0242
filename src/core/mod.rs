//! Core functionality and shared types
//!
//! This module contains the error taxonomy and application-wide constants
//! used across the crate.

pub mod constants;
pub mod error;

pub use self::error::{DeadlinkError, Result};
