use std::fmt;

/// Comprehensive error types for deadlink operations
#[derive(Debug)]
pub enum DeadlinkError {
    /// IO error (file operations, stdin, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client error
    Http(reqwest::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// A url aggregation task could not be joined
    TaskJoin(tokio::task::JoinError),

    /// The failure budget was exhausted before all checks completed
    TooManyDeadUrls,

    /// Some checks failed but stayed within the failure budget.
    /// The run still fails with a consolidated count.
    DeadUrlsFound { failed: usize, total: usize },
}

impl fmt::Display for DeadlinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeadlinkError::Io(err) => write!(f, "IO error: {err}"),
            DeadlinkError::Config(msg) => write!(f, "Configuration error: {msg}"),
            DeadlinkError::Http(err) => write!(f, "HTTP error: {err}"),
            DeadlinkError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            DeadlinkError::TaskJoin(err) => write!(f, "Task join error: {err}"),
            DeadlinkError::TooManyDeadUrls => write!(f, "too many urls are dead"),
            DeadlinkError::DeadUrlsFound { failed, total } => {
                write!(f, "{failed} of {total} checked urls are dead")
            }
        }
    }
}

impl std::error::Error for DeadlinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeadlinkError::Io(err) => Some(err),
            DeadlinkError::Http(err) => Some(err),
            DeadlinkError::TomlParsing(err) => Some(err),
            DeadlinkError::TaskJoin(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DeadlinkError {
    fn from(err: std::io::Error) -> Self {
        DeadlinkError::Io(err)
    }
}

impl From<reqwest::Error> for DeadlinkError {
    fn from(err: reqwest::Error) -> Self {
        DeadlinkError::Http(err)
    }
}

impl From<toml::de::Error> for DeadlinkError {
    fn from(err: toml::de::Error) -> Self {
        DeadlinkError::TomlParsing(err)
    }
}

impl From<tokio::task::JoinError> for DeadlinkError {
    fn from(err: tokio::task::JoinError) -> Self {
        DeadlinkError::TaskJoin(err)
    }
}

/// Type alias for Results using DeadlinkError
pub type Result<T> = std::result::Result<T, DeadlinkError>;
