//! Url discovery
//!
//! This module extracts urls from files and aggregates them into a
//! url → referencing-files index.

pub mod extractor;
pub mod indexer;

pub use extractor::extract_urls;
pub use indexer::{UrlIndex, index_urls};
