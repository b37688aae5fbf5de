//! Location of the coefficient file on disk.
//!
//! The table is looked up, in order, at:
//!
//! 1. the path given by the caller, if any;
//! 2. the path in the `IGRF_COEFFS_FILE` environment variable, if set;
//! 3. `<user data dir>/igrf/igrf14coeffs.txt` (e.g. `~/.local/share/igrf/` on Linux).
//!
//! The first existing file wins. When none exists the search fails with
//! [`IgrfError::CoefficientFileNotFound`] listing every path that was tried; there is
//! no fallback table.
use std::env;

use camino::{Utf8Path, Utf8PathBuf};
use directories::BaseDirs;
use log::debug;

use crate::igrf_errors::IgrfError;

/// Environment variable overriding the default coefficient file location
pub const COEFFS_FILE_ENV: &str = "IGRF_COEFFS_FILE";

/// File name of the IGRF-14 coefficient table
pub const DEFAULT_COEFFS_FILE: &str = "igrf14coeffs.txt";

/// Ordered list of places where a coefficient file may live.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoefficientFilePath {
    candidates: Vec<Utf8PathBuf>,
}

impl CoefficientFilePath {
    /// Search list with the caller path, the environment override and the user data
    /// directory, in that order.
    pub fn new(user_path: Option<&str>) -> Self {
        let mut search = CoefficientFilePath::default();

        if let Some(path) = user_path {
            search = search.with_candidate(path);
        }
        if let Ok(path) = env::var(COEFFS_FILE_ENV) {
            search = search.with_candidate(path);
        }
        if let Some(path) = default_data_file() {
            search = search.with_candidate(path);
        }

        search
    }

    /// Append one more location to the search list.
    pub fn with_candidate(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.candidates.push(path.into());
        self
    }

    pub fn candidates(&self) -> &[Utf8PathBuf] {
        &self.candidates
    }

    /// Return the first candidate that is an existing file.
    pub fn find(&self) -> Result<&Utf8Path, IgrfError> {
        for path in &self.candidates {
            if path.is_file() {
                debug!("using coefficient file {path}");
                return Ok(path.as_path());
            }
            debug!("no coefficient file at {path}");
        }

        Err(IgrfError::CoefficientFileNotFound(
            self.candidates.iter().map(|p| p.to_string()).collect(),
        ))
    }

    /// Shorthand for `CoefficientFilePath::new(user_path).find()`.
    pub fn resolve(user_path: Option<&str>) -> Result<Utf8PathBuf, IgrfError> {
        Self::new(user_path).find().map(Utf8Path::to_path_buf)
    }
}

/// `<data dir>/igrf/igrf14coeffs.txt`, if the platform data directory is known and UTF-8.
fn default_data_file() -> Option<Utf8PathBuf> {
    let base_dirs = BaseDirs::new()?;
    match Utf8Path::from_path(base_dirs.data_dir()) {
        Some(dir) => Some(dir.join("igrf").join(DEFAULT_COEFFS_FILE)),
        None => {
            debug!("user data directory is not valid UTF-8, skipping it");
            None
        }
    }
}
