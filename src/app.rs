//! Run orchestration
//!
//! Composes config resolution, file aggregation, filtering and checking
//! into the `check` and `init` operations exposed by the CLI.

use std::collections::BTreeSet;
use std::io::{self, BufRead};
use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::core::constants::CONFIG_TEMPLATE;
use crate::core::error::Result;
use crate::discovery::index_urls;
use crate::fsys::Fsys;
use crate::logging;
use crate::validation::{CheckUrls, Checker, retain_checkable};

/// Run a full check: resolve config, read the file list from stdin,
/// aggregate urls, filter them and check the rest. Fails with the first
/// stage error, or with the checker's aggregated error.
pub async fn run_check<R: BufRead>(
    fsys: Arc<dyn Fsys>,
    stdin: Option<R>,
    cfg_path: Option<&Path>,
) -> Result<()> {
    run_check_with(fsys, stdin, cfg_path, &Checker::default()).await
}

/// Same as [`run_check`] but with an injected checker, so tests can compose
/// a fake instead of hitting the network.
pub async fn run_check_with<R: BufRead>(
    fsys: Arc<dyn Fsys>,
    stdin: Option<R>,
    cfg_path: Option<&Path>,
    checker: &impl CheckUrls,
) -> Result<()> {
    let config = Config::resolve(fsys.as_ref(), cfg_path)?;
    logging::log_config_info(&config);

    let files = match stdin {
        Some(reader) => read_file_list(reader)?,
        None => BTreeSet::new(),
    };
    logging::log_file_info(files.len());

    let mut index = index_urls(fsys, files).await?;
    let unique_urls = index.len();
    retain_checkable(&mut index, &config);
    logging::log_index_info(unique_urls, index.len());

    checker.check_urls(&config, index).await
}

/// Create a configuration file unless one already exists at `dest`.
pub fn run_init(fsys: &dyn Fsys, dest: &Path) -> Result<()> {
    if fsys.exists(dest) {
        return Ok(());
    }
    fsys.write(dest, CONFIG_TEMPLATE.as_bytes())?;
    Ok(())
}

/// Read a newline-delimited file list. Lines are trimmed and blank lines
/// are skipped.
fn read_file_list<R: BufRead>(reader: R) -> io::Result<BTreeSet<String>> {
    let mut files = BTreeSet::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            files.insert(trimmed.to_string());
        }
    }
    Ok(files)
}
