//! Bounded-parallelism HTTP liveness checking.

use async_trait::async_trait;
use log::debug;
use reqwest::redirect::Policy;
use reqwest::{Client, Method};
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::config::{Config, HttpMethod};
use crate::core::constants::defaults;
use crate::core::error::{DeadlinkError, Result};
use crate::discovery::UrlIndex;

/// Result of checking a single url, carrying the referencing file set for
/// error reporting.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CheckOutcome {
    pub url: String,
    pub files: BTreeSet<String>,
    pub status: Option<u16>,
    pub description: Option<String>,
}

impl CheckOutcome {
    pub fn is_alive(&self) -> bool {
        matches!(self.status, Some(status) if (200..300).contains(&status))
    }

    pub fn is_dead(&self) -> bool {
        !self.is_alive()
    }

    fn alive(url: String, files: BTreeSet<String>, status: u16) -> Self {
        Self {
            url,
            files,
            status: Some(status),
            description: None,
        }
    }

    fn dead(url: String, files: BTreeSet<String>, failure: AttemptFailure) -> Self {
        Self {
            url,
            files,
            status: failure.status,
            description: failure.description,
        }
    }

    fn referencing_files(&self) -> String {
        self.files.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_alive() {
            // status is always present for an alive outcome
            let status = self.status.unwrap_or_default();
            return write!(f, "{} - {}", status, self.url);
        }
        let cause = match (self.status, &self.description) {
            (Some(status), _) => status.to_string(),
            (None, Some(description)) => description.clone(),
            (None, None) => "unknown error".to_string(),
        };
        write!(
            f,
            "{} is dead ({cause}) - referenced by: {}",
            self.url,
            self.referencing_files()
        )
    }
}

/// A single failed HTTP attempt. The status is present for non-2xx
/// responses and absent for transport errors and timeouts.
#[derive(Debug)]
struct AttemptFailure {
    status: Option<u16>,
    description: Option<String>,
}

#[async_trait]
pub trait CheckUrls {
    /// Check every url in the index, failing once too many are dead.
    async fn check_urls(&self, config: &Config, index: UrlIndex) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct Checker {}

#[async_trait]
impl CheckUrls for Checker {
    /// Check all urls with bounded parallelism.
    ///
    /// One task per url is spawned immediately; a semaphore of
    /// `max_request_count` permits bounds how many requests are in flight.
    /// A single consumer loop owns the failure counter and prints each dead
    /// url to stderr as it resolves. With a failure budget `b >= 0` the run
    /// aborts the instant more than `b` checks have failed, cancelling
    /// outstanding requests; `-1` disables the cap. If all outcomes arrive
    /// within budget the run still fails when any check failed.
    async fn check_urls(&self, config: &Config, index: UrlIndex) -> Result<()> {
        if index.is_empty() {
            return Ok(());
        }

        let user_agent = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .timeout(config.timeout_duration())
            .redirect(Policy::limited(defaults::MAX_REDIRECTS))
            .user_agent(user_agent)
            .build()?;

        let total = index.len();
        let method = config.http_method();
        let semaphore = Arc::new(Semaphore::new(config.max_request_count()));
        let (tx, mut rx) = mpsc::channel(total);

        let mut tasks = JoinSet::new();
        for (url, files) in index {
            let client = client.clone();
            let semaphore = Arc::clone(&semaphore);
            let tx = tx.clone();
            tasks.spawn(async move {
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return;
                };
                let outcome = check_url(&client, method, url, files).await;
                // The receiver is gone when the run aborted early
                let _ = tx.send(outcome).await;
            });
        }
        drop(tx);

        let budget = config.failure_budget();
        let mut completed = 0;
        let mut failed = 0usize;
        while let Some(outcome) = rx.recv().await {
            completed += 1;
            if outcome.is_dead() {
                failed += 1;
                eprintln!("{outcome}");
                if budget >= 0 && failed as i64 > budget {
                    tasks.abort_all();
                    return Err(DeadlinkError::TooManyDeadUrls);
                }
            } else {
                debug!("{outcome}");
            }
            if completed == total {
                break;
            }
        }

        if failed > 0 {
            return Err(DeadlinkError::DeadUrlsFound { failed, total });
        }
        Ok(())
    }
}

/// Check a single url according to the configured method policy.
async fn check_url(
    client: &Client,
    method: HttpMethod,
    url: String,
    files: BTreeSet<String>,
) -> CheckOutcome {
    let outcome = match method {
        HttpMethod::Head => attempt(client, Method::HEAD, &url).await,
        HttpMethod::Get => attempt(client, Method::GET, &url).await,
        HttpMethod::HeadThenGet => match attempt(client, Method::HEAD, &url).await {
            Ok(status) => Ok(status),
            // HEAD was rejected, retry with GET and use its outcome
            Err(_) => attempt(client, Method::GET, &url).await,
        },
    };

    match outcome {
        Ok(status) => CheckOutcome::alive(url, files, status),
        Err(failure) => CheckOutcome::dead(url, files, failure),
    }
}

/// Issue one HTTP request. Any non-2xx status, timeout or transport error
/// is a failure.
async fn attempt(
    client: &Client,
    method: Method,
    url: &str,
) -> std::result::Result<u16, AttemptFailure> {
    match client.request(method, url).send().await {
        Ok(response) => {
            let status = response.status();
            if status.is_success() {
                Ok(status.as_u16())
            } else {
                Err(AttemptFailure {
                    status: Some(status.as_u16()),
                    description: None,
                })
            }
        }
        Err(err) => {
            let description = std::error::Error::source(&err)
                .map(|e| e.to_string())
                .unwrap_or_else(|| err.to_string());
            Err(AttemptFailure {
                status: None,
                description: Some(description),
            })
        }
    }
}
