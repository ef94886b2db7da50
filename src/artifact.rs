//! Ephemeral storage for compressed output awaiting download.
//!
//! Artifacts are keyed by an explicit session identifier and the method that
//! produced them. Each one lives in its own temp file and is served at most
//! once: `take` hands back the bytes and deletes the file.

use crate::config::Method;
use crate::error::{BenchError, Result};
use log::{debug, error};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempPath;

/// Name offered for download: the original name with its extension swapped
/// for the method's (`data.csv` -> `data.lzw`).
pub fn download_filename(original: &str, method: Method) -> String {
    if original.is_empty() {
        return format!("compressed.{}", method.extension());
    }
    Path::new(original).with_extension(method.extension()).display().to_string()
}

#[derive(Debug)]
struct StoredArtifact {
    path: TempPath,
    download_name: String,
}

/// Downloadable artifact returned by `ArtifactStore::take`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct ArtifactStore {
    dir: Option<PathBuf>,
    entries: HashMap<(String, Method), StoredArtifact>,
}

impl ArtifactStore {
    /// Store backed by the system temp directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store backed by `dir`, which must exist.
    pub fn in_dir<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: Some(dir.into()), entries: HashMap::new() }
    }

    /// Persist `data` for `(session, method)` and return its download name.
    /// A previous artifact under the same key is deleted.
    pub fn store(&mut self, session: &str, method: Method, original_filename: &str, data: &[u8]) -> Result<String> {
        let suffix = format!(".{}", method.extension());
        let mut builder = tempfile::Builder::new();
        builder.prefix("lzwbench-").suffix(&suffix);
        let mut file = match &self.dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        file.write_all(data)?;
        file.flush()?;

        let path = file.into_temp_path();
        let download_name = download_filename(original_filename, method);
        debug!("stored {} bytes for {}/{} at {}", data.len(), session, method, path.display());

        let key = (session.to_string(), method);
        let artifact = StoredArtifact { path, download_name: download_name.clone() };
        if let Some(previous) = self.entries.insert(key, artifact) {
            release(previous);
        }
        Ok(download_name)
    }

    /// Remove the artifact for `(session, method)`, returning its contents.
    /// The backing file is deleted whether or not reading it succeeds.
    pub fn take(&mut self, session: &str, method: Method) -> Result<Download> {
        let artifact = self
            .entries
            .remove(&(session.to_string(), method))
            .ok_or_else(|| BenchError::ArtifactNotFound {
                session: session.to_string(),
                method: method.to_string(),
            })?;

        let data = std::fs::read(&artifact.path)?;
        let filename = artifact.download_name.clone();
        release(artifact);
        Ok(Download { filename, data })
    }

    /// Drop every artifact belonging to `session`. Returns how many were removed.
    pub fn expire_session(&mut self, session: &str) -> usize {
        let keys: Vec<(String, Method)> = self
            .entries
            .keys()
            .filter(|(owner, _)| owner == session)
            .cloned()
            .collect();
        for key in &keys {
            if let Some(artifact) = self.entries.remove(key) {
                release(artifact);
            }
        }
        keys.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn release(artifact: StoredArtifact) {
    let display = artifact.path.display().to_string();
    if let Err(e) = artifact.path.close() {
        error!("Error deleting temp file {}: {}", display, e);
    }
}
