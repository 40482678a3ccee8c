use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::ids::{InterviewId, InterviewQuestionId};
use crate::model::problem::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterviewKind {
    #[serde(rename = "AI")]
    Ai,
    Peer,
}

impl InterviewKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            InterviewKind::Ai => "AI-Powered Interview",
            InterviewKind::Peer => "Peer Interview",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Available,
}

/// Highest star rating an interviewer can give.
pub const MAX_RATING: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewFeedback {
    /// Star rating out of `MAX_RATING`.
    pub rating: u8,
    pub comments: String,
}

impl InterviewFeedback {
    /// Filled/empty flags for each star, left to right.
    #[must_use]
    pub fn stars(&self) -> [bool; MAX_RATING] {
        let mut stars = [false; MAX_RATING];
        for (idx, star) in stars.iter_mut().enumerate() {
            *star = idx < usize::from(self.rating);
        }
        stars
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interview {
    pub id: InterviewId,
    pub kind: InterviewKind,
    pub title: String,
    pub description: String,
    pub duration_minutes: u32,
    pub scheduled_for: Option<NaiveDateTime>,
    pub status: InterviewStatus,
    pub feedback: Option<InterviewFeedback>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Technical,
    Behavioral,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 2] = [QuestionKind::Technical, QuestionKind::Behavioral];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            QuestionKind::Technical => "Technical",
            QuestionKind::Behavioral => "Behavioral",
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            QuestionKind::Technical => "technical",
            QuestionKind::Behavioral => "behavioral",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

/// Entry in the interview question bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub id: InterviewQuestionId,
    pub question: String,
    pub kind: QuestionKind,
    pub difficulty: Difficulty,
    pub sample_answer: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_fill_up_to_rating() {
        let feedback = InterviewFeedback {
            rating: 4,
            comments: String::new(),
        };
        assert_eq!(feedback.stars(), [true, true, true, true, false]);
    }

    #[test]
    fn stars_saturate_above_max() {
        let feedback = InterviewFeedback {
            rating: 9,
            comments: String::new(),
        };
        assert!(feedback.stars().iter().all(|filled| *filled));
    }

    #[test]
    fn question_kind_keys_parse() {
        assert_eq!(QuestionKind::from_key("behavioral"), Some(QuestionKind::Behavioral));
        assert_eq!(QuestionKind::from_key("all"), None);
    }
}
