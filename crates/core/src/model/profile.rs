use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::ids::ProfileReviewId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileReviewKind {
    #[default]
    Resume,
    #[serde(rename = "linkedin")]
    LinkedIn,
}

impl ProfileReviewKind {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ProfileReviewKind::Resume => "Resume Review",
            ProfileReviewKind::LinkedIn => "LinkedIn Profile Review",
        }
    }

    /// Human hint for the file picker.
    #[must_use]
    pub fn upload_hint(self) -> &'static str {
        match self {
            ProfileReviewKind::Resume => "resume (PDF)",
            ProfileReviewKind::LinkedIn => "LinkedIn profile screenshot (PNG/JPG)",
        }
    }

    /// Lowercase extensions accepted for this kind of review.
    #[must_use]
    pub fn accepted_extensions(self) -> &'static [&'static str] {
        match self {
            ProfileReviewKind::Resume => &["pdf"],
            ProfileReviewKind::LinkedIn => &["png", "jpg", "jpeg"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileReviewStatus {
    Pending,
    Completed,
}

impl ProfileReviewStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProfileReviewStatus::Pending => "Pending",
            ProfileReviewStatus::Completed => "Completed",
        }
    }
}

/// A past resume/LinkedIn review shown under "Previous Reviews".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileReview {
    pub id: ProfileReviewId,
    pub kind: ProfileReviewKind,
    pub status: ProfileReviewStatus,
    pub submitted_at: NaiveDateTime,
    pub feedback: Option<String>,
    /// Percentage score, only present once completed.
    pub score: Option<u8>,
}
