//! Batch encoding of pending files into the submission payload.

use base64::Engine;

use crate::models::{EncodedFile, PendingFile, ReadError};

/// Encode a batch of pending files for submission.
///
/// Order and count are preserved: output index i corresponds to input index
/// i. Each file's content is read exactly once per attempt. A single failed
/// read aborts the whole batch, since a partial submission would misreport
/// the analyzer's files_processed count.
///
/// A zero-byte file is valid and encodes to an empty content string.
pub fn encode_files(files: &[PendingFile]) -> Result<Vec<EncodedFile>, ReadError> {
    let mut encoded = Vec::with_capacity(files.len());
    for file in files {
        let bytes = file.read()?;
        encoded.push(EncodedFile {
            filename: file.name().to_string(),
            content: base64::engine::general_purpose::STANDARD.encode(&bytes),
        });
    }
    Ok(encoded)
}
