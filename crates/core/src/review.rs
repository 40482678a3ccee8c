use std::path::Path;

use thiserror::Error;

use crate::model::ProfileReviewKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReviewSubmissionError {
    #[error("select a file to upload")]
    MissingFile,
    #[error("{file} is not an accepted {kind} file")]
    UnsupportedFile { file: String, kind: &'static str },
}

/// A resume or LinkedIn screenshot queued for review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSubmission {
    kind: ProfileReviewKind,
    file_name: String,
}

impl ReviewSubmission {
    /// Accept `file_name` if its extension matches what `kind` expects.
    ///
    /// # Errors
    ///
    /// Returns `ReviewSubmissionError` for a blank name or a wrong extension.
    pub fn new(kind: ProfileReviewKind, file_name: &str) -> Result<Self, ReviewSubmissionError> {
        let file_name = file_name.trim();
        if file_name.is_empty() {
            return Err(ReviewSubmissionError::MissingFile);
        }
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let accepted = extension
            .as_deref()
            .is_some_and(|ext| kind.accepted_extensions().contains(&ext));
        if !accepted {
            return Err(ReviewSubmissionError::UnsupportedFile {
                file: file_name.to_string(),
                kind: kind.upload_hint(),
            });
        }
        Ok(Self {
            kind,
            file_name: file_name.to_string(),
        })
    }

    #[must_use]
    pub fn kind(&self) -> ProfileReviewKind {
        self.kind
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn confirmation(&self) -> &'static str {
        "Your file has been submitted for review. You will receive feedback within 48 hours."
    }
}
