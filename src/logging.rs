use crate::config::Config;
use log::{debug, info};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    info!(
        "Configuration: method={:?}, max_request_count={}, failure_budget={}, timeout={:?}",
        config.http_method(),
        config.max_request_count(),
        config.failure_budget(),
        config.timeout_duration()
    );
    debug!(
        "Ignore lists: {} url(s), {} host(s)",
        config.ignore_urls().len(),
        config.ignore_hosts().len()
    );
}

/// Log file list information
pub fn log_file_info(file_count: usize) {
    info!("Checking {file_count} file(s)");
}

/// Log url discovery information
pub fn log_index_info(unique_urls: usize, checkable: usize) {
    info!("Found {unique_urls} unique url(s), {checkable} checkable after filtering");
}
