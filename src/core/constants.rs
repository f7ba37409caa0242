/// Application-wide constants to avoid magic values throughout the codebase.
/// Default configuration values
pub mod defaults {
    /// Default number of HTTP requests allowed in flight at once
    pub const MAX_REQUEST_COUNT: usize = 10;
    /// Default number of dead urls tolerated before the run aborts.
    /// `-1` disables the cap entirely.
    pub const MAX_FAILED_REQUEST_COUNT: i64 = 5;
    /// Default HTTP request timeout in seconds
    pub const TIMEOUT_SECONDS: u64 = 60;
    /// Maximum redirects followed per request
    pub const MAX_REDIRECTS: usize = 10;
}

/// Limits applied while scanning files
pub mod limits {
    /// Longest line the extractor will scan. A longer line is surfaced as an
    /// error rather than silently truncated.
    pub const MAX_LINE_BYTES: usize = 64 * 1024;
}

/// Hosts that are never checked, regardless of user configuration.
/// Matched against the url host with or without an explicit port.
pub const DENYLISTED_HOSTS: [&str; 5] = [
    "localhost",
    "example.com",
    "example.org",
    "example.net",
    "127.0.0.1",
];

/// Default name of the configuration file, looked up in the working
/// directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".deadlink.toml";

/// Template written by the `init` sub-command.
pub const CONFIG_TEMPLATE: &str = r#"# Configuration for deadlink, a CLI tool to check whether dead urls are
# included in files.
ignore_urls = []
ignore_hosts = []
http_method = "head,get"
max_request_count = 10
max_failed_request_count = 5
timeout = 60
"#;
