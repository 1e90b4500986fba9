//! Submission workflow state.
//!
//! The workflow is a sequence of immutable snapshots: every transition
//! consumes the current state and returns the next one, which keeps the
//! file-retention rules (files survive both failure and completion) in one
//! testable place instead of scattered across UI handlers.

use crate::models::{AnalysisResponse, PendingFile};

/// One snapshot of the submission workflow.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    files: Vec<PendingFile>,
    results: Option<AnalysisResponse>,
    error: Option<String>,
    analyzing: bool,
}

impl SessionState {
    /// Fresh session with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected files, in selection order.
    pub fn files(&self) -> &[PendingFile] {
        &self.files
    }

    /// Results of the most recent completed submission, if any.
    pub fn results(&self) -> Option<&AnalysisResponse> {
        self.results.as_ref()
    }

    /// The single user-visible error from the most recent failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a submission is currently in flight.
    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    /// Whether a submission may start: at least one file selected and no
    /// submission already in flight. An empty selection is a no-op, never
    /// an empty request on the wire.
    pub fn can_submit(&self) -> bool {
        !self.files.is_empty() && !self.analyzing
    }

    /// Append newly selected files, keeping the existing selection.
    pub fn with_files(mut self, added: Vec<PendingFile>) -> Self {
        self.files.extend(added);
        self
    }

    /// Remove one file by position. Out of range leaves the selection
    /// unchanged.
    pub fn without_file(mut self, index: usize) -> Self {
        if index < self.files.len() {
            self.files.remove(index);
        }
        self
    }

    /// Drop the entire selection. The only transition that empties it.
    pub fn cleared(mut self) -> Self {
        self.files.clear();
        self
    }

    /// Mark a submission as in flight and clear any previous error.
    pub fn begin_analysis(mut self) -> Self {
        self.analyzing = true;
        self.error = None;
        self
    }

    /// Store the results of a completed submission. Files are kept so the
    /// user can refine the selection and resubmit.
    pub fn completed(mut self, response: AnalysisResponse) -> Self {
        self.results = Some(response);
        self.analyzing = false;
        self
    }

    /// Record a failed submission. Files are kept so a retry needs no
    /// re-selection.
    pub fn failed(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self.analyzing = false;
        self
    }
}
