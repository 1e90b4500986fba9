//! Pending file selection and the encoded submission payload.
//!
//! A `PendingFile` is a user-selected document awaiting submission. Content
//! is read at encode time, not at selection time, so a batch can be retried
//! after a failure without re-selecting files.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File extensions accepted by the selection layer.
///
/// This filters what users may pick; encoding itself accepts any content.
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["pdf", "xlsx", "docx", "txt"];

/// Check whether a filename has an accepted document extension.
pub fn is_accepted_type(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
}

/// A file's content became unreadable between selection and submission.
#[derive(Debug, Error)]
#[error("Failed to read '{name}': {source}")]
pub struct ReadError {
    /// Name of the file that could not be read.
    pub name: String,
    #[source]
    pub source: io::Error,
}

/// Where a pending file's bytes come from.
#[derive(Debug, Clone)]
enum FileSource {
    /// Read from disk on each encode attempt.
    Path(PathBuf),
    /// Held in memory (tests, piped input).
    Memory(Vec<u8>),
}

/// A user-selected file awaiting submission.
#[derive(Debug, Clone)]
pub struct PendingFile {
    name: String,
    size_bytes: u64,
    mime_hint: String,
    source: FileSource,
}

impl PendingFile {
    /// Create a pending file backed by a filesystem path.
    ///
    /// Reads metadata immediately to report size; content is read later,
    /// when the batch is encoded.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let meta = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no filename"))?
            .to_string();
        let mime_hint = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("")
            .to_string();

        Ok(Self {
            name,
            size_bytes: meta.len(),
            mime_hint,
            source: FileSource::Path(path.to_path_buf()),
        })
    }

    /// Create a pending file from in-memory bytes.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime_hint = mime_guess::from_path(&name)
            .first_raw()
            .unwrap_or("")
            .to_string();
        Self {
            size_bytes: bytes.len() as u64,
            mime_hint,
            name,
            source: FileSource::Memory(bytes),
        }
    }

    /// Filename as it will appear in the submission payload.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size recorded at selection time.
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Best-effort MIME type guessed from the filename.
    pub fn mime_hint(&self) -> &str {
        &self.mime_hint
    }

    /// Read the file's full content.
    ///
    /// Path-backed files are re-read on every call; a file deleted after
    /// selection surfaces here as a `ReadError`.
    pub fn read(&self) -> Result<Vec<u8>, ReadError> {
        match &self.source {
            FileSource::Path(path) => std::fs::read(path).map_err(|e| ReadError {
                name: self.name.clone(),
                source: e,
            }),
            FileSource::Memory(bytes) => Ok(bytes.clone()),
        }
    }
}

/// One file of a submission payload, base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedFile {
    /// Original filename, preserved verbatim.
    pub filename: String,
    /// Standard base64 of the file content. Empty for zero-byte files.
    pub content: String,
}

/// The payload sent to the analyzer: the full selected batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub files: Vec<EncodedFile>,
}
