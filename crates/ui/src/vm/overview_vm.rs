use prep_core::model::{ApplicationStatus, JobApplication, Progress};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub challenges_label: String,
    pub completion_percent: u32,
    pub streak_label: String,
    pub mock_tests_label: String,
    pub interviews_label: String,
    pub badges: Vec<String>,
}

#[must_use]
pub fn map_progress(progress: &Progress) -> ProgressVm {
    ProgressVm {
        challenges_label: format!(
            "{}/{}",
            progress.completed_challenges, progress.total_challenges
        ),
        completion_percent: progress.completion_percent(),
        streak_label: format!("{} days", progress.streak_days),
        mock_tests_label: format!("{} pending", progress.mock_tests_pending),
        interviews_label: format!("{} upcoming", progress.upcoming_interviews),
        badges: progress.badges.clone(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationRowVm {
    pub company: String,
    pub role: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub next_step: String,
}

#[must_use]
pub fn map_application_row(application: &JobApplication) -> ApplicationRowVm {
    let status_class = match application.status {
        ApplicationStatus::Interview => "status status--interview",
        ApplicationStatus::Offer => "status status--offer",
        ApplicationStatus::Rejected => "status status--rejected",
        ApplicationStatus::Applied => "status status--applied",
    };
    ApplicationRowVm {
        company: application.company.clone(),
        role: application.role.clone(),
        status_label: application.status.key(),
        status_class,
        next_step: application.next_step_label(),
    }
}
