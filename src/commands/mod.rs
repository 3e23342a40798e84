pub mod languages;
pub mod leetcode;

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::config::{ConfigLoader, FileConfig, FileConfigLoader};
use crate::error::{CardError, Result};
use crate::EXIT_SUCCESS;

pub use languages::{generate_languages_card, run_languages};
pub use leetcode::{generate_leetcode_card, run_leetcode};

/// Load `path` if given, otherwise `.stat-cards.toml` from the current directory.
pub(crate) fn load_file_config(path: Option<&Path>) -> Result<FileConfig> {
    let loader = FileConfigLoader::new();
    match path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

/// Current date in UTC, as printed in card footers.
#[must_use]
pub fn generation_date() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

/// Log the outcome of a pipeline run and map it to a process exit code.
pub(crate) fn finish(result: Result<PathBuf>) -> i32 {
    match result {
        Ok(path) => {
            log::info!("Wrote {}", path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(&e);
            e.exit_code()
        }
    }
}

fn report_error(e: &CardError) {
    log::error!("{}: {e}", e.error_type());
    let mut source = e.source();
    while let Some(cause) = source {
        log::error!("  caused by: {cause}");
        source = cause.source();
    }
    log::error!("Output left unchanged");
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
