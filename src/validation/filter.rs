//! Url filtering policy.
//!
//! Pure classification of urls as ignorable versus checkable, applied to
//! the index before any network call is made.

use url::Url;

use crate::config::Config;
use crate::core::constants::DENYLISTED_HOSTS;
use crate::discovery::UrlIndex;

/// Whether a url should be skipped by the checker.
///
/// Evaluated short-circuit in this precedence: unparsable strings and
/// non-http(s) schemes are never links; denylisted hosts are skipped with or
/// without an explicit port; then the configured ignore lists apply. An
/// `ignore_hosts` entry matches the host either bare or as `host:port`.
pub fn is_ignored(raw: &str, config: &Config) -> bool {
    let Ok(url) = Url::parse(raw) else {
        return true;
    };

    if url.scheme() != "http" && url.scheme() != "https" {
        return true;
    }

    let host = url.host_str().unwrap_or("");
    if DENYLISTED_HOSTS.contains(&host) {
        return true;
    }

    if config.ignore_urls().iter().any(|u| u == raw) {
        return true;
    }

    let host_with_port = url.port().map(|port| format!("{host}:{port}"));
    config
        .ignore_hosts()
        .iter()
        .any(|h| h == host || Some(h.as_str()) == host_with_port.as_deref())
}

/// Drop every ignorable url from the index.
pub fn retain_checkable(index: &mut UrlIndex, config: &Config) {
    index.retain(|url, _| !is_ignored(url, config));
}
