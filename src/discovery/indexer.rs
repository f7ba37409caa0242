//! File aggregation into a url index.

use log::warn;
use tokio::task::JoinSet;

use std::collections::{BTreeSet, HashMap, HashSet};
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use crate::core::error::Result;
use crate::discovery::extractor::extract_urls;
use crate::fsys::Fsys;

/// Mapping from a url to the set of file paths that reference it.
pub type UrlIndex = HashMap<String, BTreeSet<String>>;

/// Build the url index for a set of files.
///
/// One task per file is spawned onto the blocking pool; a single file's
/// open/read failure is logged and contributes no urls, while a task join
/// failure aborts the whole aggregation. The fold into the shared map runs
/// on the supervising task after each producer completes, so the map is
/// never mutated concurrently. Completion order does not matter; the fold
/// is a commutative union keyed by url.
pub async fn index_urls(fsys: Arc<dyn Fsys>, files: BTreeSet<String>) -> Result<UrlIndex> {
    let mut index = UrlIndex::new();
    if files.is_empty() {
        return Ok(index);
    }

    let mut tasks: JoinSet<Option<(String, HashSet<String>)>> = JoinSet::new();
    for path in files {
        let fsys = Arc::clone(&fsys);
        tasks.spawn_blocking(move || {
            let extracted = fsys
                .open(Path::new(&path))
                .and_then(|reader| extract_urls(BufReader::new(reader)));
            match extracted {
                Ok(urls) => Some((path, urls)),
                Err(err) => {
                    warn!("failed to extract urls from a file {path}: {err}");
                    None
                }
            }
        });
    }

    while let Some(joined) = tasks.join_next().await {
        let Some((path, urls)) = joined? else {
            continue;
        };
        for url in urls {
            index.entry(url).or_default().insert(path.clone());
        }
    }

    Ok(index)
}
