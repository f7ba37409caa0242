//! deadlink is a CLI tool to check whether dead urls are included in files.
//!
//! File paths arrive on stdin, one per line. Urls are extracted from every
//! file in parallel and folded into a url → referencing-files index, urls
//! excluded by policy are filtered out, and the rest are checked over HTTP
//! with bounded parallelism, a HEAD→GET fallback and a configurable failure
//! budget that can abort the run early.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod discovery;
pub mod fsys;
pub mod logging;
pub mod validation;

pub use self::config::{Config, HttpMethod};
pub use self::core::error::{DeadlinkError, Result};
pub use self::discovery::UrlIndex;
pub use self::fsys::{Fsys, OsFs};
pub use self::validation::{CheckUrls, Checker};
