//! Configuration management
//!
//! This module handles loading configuration from `.deadlink.toml` files.
//! The config file is looked up in the working directory and its ancestors
//! unless an explicit path is given; when no file is found the defaults
//! apply.

use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use crate::core::constants::{CONFIG_FILE_NAME, defaults};
use crate::core::error::{DeadlinkError, Result};
use crate::fsys::Fsys;

/// HTTP method policy for liveness checks.
///
/// Modeled as a closed variant so an invalid policy string is rejected once,
/// at config parse time, instead of on every check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    /// Single HEAD request per url
    #[serde(rename = "head")]
    Head,
    /// Single GET request per url
    #[serde(rename = "get")]
    Get,
    /// Try HEAD first, fall back to GET on any failure. Recovers from
    /// servers that reject HEAD but accept GET.
    #[default]
    #[serde(rename = "head,get")]
    HeadThenGet,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Urls that are never checked (exact match)
    pub ignore_urls: Option<Vec<String>>,

    /// Hosts that are never checked, given as `host` or `host:port`
    pub ignore_hosts: Option<Vec<String>>,

    /// HTTP method policy: "head", "get" or "head,get"
    pub http_method: Option<HttpMethod>,

    /// Max number of HTTP requests in flight at once
    pub max_request_count: Option<usize>,

    /// Max number of dead urls tolerated before the run aborts early.
    /// `-1` disables the cap.
    pub max_failed_request_count: Option<i64>,

    /// Timeout in seconds for each HTTP request
    pub timeout: Option<u64>,
}

impl Config {
    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist and parse. Without one, the config file
    /// is searched for in the working directory and its ancestors; if none
    /// is found the defaults apply.
    pub fn resolve(fsys: &dyn Fsys, path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(fsys, path),
            None => match Self::find_config_file(fsys)? {
                Some(found) => Self::load(fsys, &found),
                None => Ok(Self::default()),
            },
        }
    }

    /// Load and validate configuration from a file.
    pub fn load(fsys: &dyn Fsys, path: &Path) -> Result<Self> {
        let mut content = String::new();
        fsys.open(path)
            .and_then(|mut reader| reader.read_to_string(&mut content))
            .map_err(|e| {
                DeadlinkError::Config(format!(
                    "could not read config file '{}': {e}",
                    path.display()
                ))
            })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            DeadlinkError::Config(format!(
                "invalid TOML in config file '{}': {e}",
                path.display()
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Look for the config file in the working directory and its ancestors.
    fn find_config_file(fsys: &dyn Fsys) -> Result<Option<std::path::PathBuf>> {
        let wd = fsys.getwd()?;
        for dir in wd.ancestors() {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if fsys.exists(&candidate) {
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.max_request_count == Some(0) {
            return Err(DeadlinkError::Config(
                "max_request_count cannot be 0. Expected a positive integer.".to_string(),
            ));
        }

        if let Some(count) = self.max_failed_request_count
            && count < -1
        {
            return Err(DeadlinkError::Config(format!(
                "max_failed_request_count of {count} is invalid. Expected a non-negative integer, or -1 to disable the cap."
            )));
        }

        if self.timeout == Some(0) {
            return Err(DeadlinkError::Config(
                "timeout cannot be 0. Expected a positive integer representing seconds."
                    .to_string(),
            ));
        }

        Ok(())
    }

    pub fn ignore_urls(&self) -> &[String] {
        self.ignore_urls.as_deref().unwrap_or(&[])
    }

    pub fn ignore_hosts(&self) -> &[String] {
        self.ignore_hosts.as_deref().unwrap_or(&[])
    }

    pub fn http_method(&self) -> HttpMethod {
        self.http_method.unwrap_or_default()
    }

    pub fn max_request_count(&self) -> usize {
        self.max_request_count
            .unwrap_or(defaults::MAX_REQUEST_COUNT)
    }

    /// The failure budget; `-1` means unlimited failures are tolerated.
    pub fn failure_budget(&self) -> i64 {
        self.max_failed_request_count
            .unwrap_or(defaults::MAX_FAILED_REQUEST_COUNT)
    }

    /// Get the request timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(defaults::TIMEOUT_SECONDS))
    }
}
