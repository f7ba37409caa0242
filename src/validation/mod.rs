//! Url validation
//!
//! This module classifies urls as ignorable versus checkable and performs
//! the HTTP liveness checks.

pub mod checker;
pub mod filter;

pub use checker::{CheckOutcome, CheckUrls, Checker};
pub use filter::{is_ignored, retain_checkable};
