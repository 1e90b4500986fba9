//! Data models for complyscan.

mod analysis;
mod submission;

pub use analysis::{normalize, AnalysisResponse, AnalysisResult};
pub use submission::{
    is_accepted_type, EncodedFile, PendingFile, ReadError, SubmissionRequest, ACCEPTED_EXTENSIONS,
};
