use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{ApplicationId, StudyTaskId};

//
// ─── STUDY PLAN ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyTask {
    pub id: StudyTaskId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub due_date: NaiveDate,
}

/// Flip the completion flag of the task with `id`. Unknown ids are ignored.
///
/// Returns whether a task was toggled.
pub fn toggle_task(tasks: &mut [StudyTask], id: StudyTaskId) -> bool {
    match tasks.iter_mut().find(|task| task.id == id) {
        Some(task) => {
            task.completed = !task.completed;
            true
        }
        None => false,
    }
}

//
// ─── JOB APPLICATIONS ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Applied,
    Interview,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Offer => "offer",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: ApplicationId,
    pub company: String,
    pub role: String,
    pub status: ApplicationStatus,
    pub next_interview: Option<NaiveDate>,
}

impl JobApplication {
    /// Text for the "Next Step" column.
    #[must_use]
    pub fn next_step_label(&self) -> String {
        self.next_interview
            .map_or_else(|| "Waiting for response".to_string(), |date| date.to_string())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApplicationError {
    #[error("company cannot be empty")]
    EmptyCompany,
    #[error("role cannot be empty")]
    EmptyRole,
}

/// Unvalidated input from the "Add Application" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobApplicationDraft {
    pub company: String,
    pub role: String,
}

impl JobApplicationDraft {
    /// Trim and validate the draft. New applications always start as `Applied`.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError` if company or role is blank.
    pub fn validate(self, id: ApplicationId) -> Result<JobApplication, ApplicationError> {
        let company = self.company.trim().to_string();
        if company.is_empty() {
            return Err(ApplicationError::EmptyCompany);
        }
        let role = self.role.trim().to_string();
        if role.is_empty() {
            return Err(ApplicationError::EmptyRole);
        }
        Ok(JobApplication {
            id,
            company,
            role,
            status: ApplicationStatus::Applied,
            next_interview: None,
        })
    }
}

//
// ─── PROGRESS ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub completed_challenges: u32,
    pub total_challenges: u32,
    pub streak_days: u32,
    pub badges: Vec<String>,
    pub mock_tests_pending: u32,
    pub upcoming_interviews: u32,
}

impl Progress {
    /// Completed share in whole percent, 0 when there are no challenges.
    #[must_use]
    pub fn completion_percent(&self) -> u32 {
        if self.total_challenges == 0 {
            return 0;
        }
        let done = u64::from(self.completed_challenges.min(self.total_challenges));
        let pct = done * 100 / u64::from(self.total_challenges);
        u32::try_from(pct).unwrap_or(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, completed: bool) -> StudyTask {
        StudyTask {
            id: StudyTaskId::new(id),
            title: format!("Task {id}"),
            description: String::new(),
            completed,
            due_date: NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(),
        }
    }

    #[test]
    fn toggle_task_flips_only_matching_task() {
        let mut tasks = vec![task(1, true), task(2, false)];
        assert!(toggle_task(&mut tasks, StudyTaskId::new(2)));
        assert!(tasks[0].completed);
        assert!(tasks[1].completed);
    }

    #[test]
    fn toggle_task_ignores_unknown_id() {
        let mut tasks = vec![task(1, false)];
        assert!(!toggle_task(&mut tasks, StudyTaskId::new(9)));
        assert!(!tasks[0].completed);
    }

    #[test]
    fn draft_trims_and_starts_applied() {
        let draft = JobApplicationDraft {
            company: "  Tech Corp ".into(),
            role: "SDE I".into(),
        };
        let app = draft.validate(ApplicationId::new(5)).unwrap();
        assert_eq!(app.company, "Tech Corp");
        assert_eq!(app.status, ApplicationStatus::Applied);
        assert_eq!(app.next_step_label(), "Waiting for response");
    }

    #[test]
    fn draft_rejects_blank_fields() {
        let blank_company = JobApplicationDraft {
            company: " ".into(),
            role: "SDE".into(),
        };
        assert_eq!(
            blank_company.validate(ApplicationId::new(1)).unwrap_err(),
            ApplicationError::EmptyCompany
        );

        let blank_role = JobApplicationDraft {
            company: "Acme".into(),
            role: String::new(),
        };
        assert_eq!(
            blank_role.validate(ApplicationId::new(1)).unwrap_err(),
            ApplicationError::EmptyRole
        );
    }

    #[test]
    fn completion_percent_handles_zero_total() {
        let mut progress = Progress {
            completed_challenges: 25,
            total_challenges: 100,
            streak_days: 7,
            badges: Vec::new(),
            mock_tests_pending: 2,
            upcoming_interviews: 1,
        };
        assert_eq!(progress.completion_percent(), 25);
        progress.total_challenges = 0;
        assert_eq!(progress.completion_percent(), 0);
    }
}
