//! Dataset file discovery

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolves a dataset file name against the locations it may be deployed to.
///
/// Nothing is cached: every call probes the filesystem again.
#[derive(Debug, Clone, Default)]
pub struct FileLocator {
    data_dir: Option<PathBuf>,
}

impl FileLocator {
    pub fn new(data_dir: Option<PathBuf>) -> Self {
        Self { data_dir }
    }

    /// Candidate paths in lookup order
    pub fn candidates(&self, filename: &str) -> Vec<PathBuf> {
        let mut candidates = Vec::with_capacity(4);

        if let Some(dir) = &self.data_dir {
            candidates.push(dir.join(filename));
        }

        // As given, relative to the working directory at call time
        candidates.push(PathBuf::from(filename));

        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            candidates.push(exe_dir.join(filename));
        }

        if let Ok(cwd) = std::env::current_dir() {
            candidates.push(cwd.join(filename));
        }

        candidates
    }

    /// Return the first candidate that exists
    pub fn locate(&self, filename: &str) -> Result<PathBuf> {
        let candidates = self.candidates(filename);

        match candidates.iter().find(|path| path.exists()) {
            Some(path) => {
                tracing::debug!("Resolved {} to {:?}", filename, path);
                Ok(path.clone())
            }
            None => Err(Error::DataFileNotFound {
                file: filename.to_string(),
                searched: candidates,
            }),
        }
    }
}
