use std::sync::Arc;

use prep_core::filter::{
    ExerciseCriteria, InterviewCriteria, InterviewQuestionCriteria, ProblemCriteria, filter,
};
use prep_core::model::{
    ApplicationError, ApplicationId, Exercise, ExerciseId, Interview, InterviewQuestion,
    InterviewStatus, JobApplication, JobApplicationDraft, Problem, ProblemId, ProfileReview,
    Progress, StudyTask,
};
use storage::catalog::CatalogSource;

use crate::Clock;
use crate::id_source::IdSource;

/// Read access to the catalogs with filtering applied.
///
/// Results are owned copies so views can hold them across renders.
#[derive(Clone)]
pub struct CatalogService {
    application_ids: Arc<IdSource>,
    catalog: Arc<dyn CatalogSource>,
}

impl CatalogService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<dyn CatalogSource>) -> Self {
        let floor = catalog
            .applications()
            .iter()
            .map(|app| app.id.value())
            .max()
            .unwrap_or(0);
        Self {
            application_ids: Arc::new(IdSource::new(clock, floor)),
            catalog,
        }
    }

    #[must_use]
    pub fn problems(&self, criteria: &ProblemCriteria) -> Vec<Problem> {
        filter(self.catalog.problems(), criteria)
            .into_iter()
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn problem(&self, id: ProblemId) -> Option<Problem> {
        self.catalog.problems().iter().find(|p| p.id == id).cloned()
    }

    #[must_use]
    pub fn exercises(&self, criteria: &ExerciseCriteria) -> Vec<Exercise> {
        filter(self.catalog.exercises(), criteria)
            .into_iter()
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn exercise(&self, id: ExerciseId) -> Option<Exercise> {
        self.catalog.exercises().iter().find(|e| e.id == id).cloned()
    }

    #[must_use]
    pub fn interviews(&self, criteria: &InterviewCriteria) -> Vec<Interview> {
        filter(self.catalog.interviews(), criteria)
            .into_iter()
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn upcoming_interviews(&self) -> Vec<Interview> {
        self.interviews(&InterviewCriteria::with_status(InterviewStatus::Scheduled))
    }

    #[must_use]
    pub fn completed_interviews(&self) -> Vec<Interview> {
        self.interviews(&InterviewCriteria::with_status(InterviewStatus::Completed))
    }

    #[must_use]
    pub fn available_interviews(&self) -> Vec<Interview> {
        self.interviews(&InterviewCriteria::with_status(InterviewStatus::Available))
    }

    #[must_use]
    pub fn interview_questions(&self, criteria: &InterviewQuestionCriteria) -> Vec<InterviewQuestion> {
        filter(self.catalog.interview_questions(), criteria)
            .into_iter()
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn profile_reviews(&self) -> Vec<ProfileReview> {
        self.catalog.profile_reviews().to_vec()
    }

    #[must_use]
    pub fn study_plan(&self) -> Vec<StudyTask> {
        self.catalog.study_plan().to_vec()
    }

    #[must_use]
    pub fn applications(&self) -> Vec<JobApplication> {
        self.catalog.applications().to_vec()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.catalog.progress().clone()
    }

    /// Validate a new application, stamping it with a clock-derived id.
    ///
    /// Ids are unique among built-in and previously created applications.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError` when company or role is blank.
    pub fn new_application(
        &self,
        draft: JobApplicationDraft,
    ) -> Result<JobApplication, ApplicationError> {
        let application = draft.validate(ApplicationId::new(self.application_ids.next()))?;
        tracing::debug!(application_id = %application.id, "application added");
        Ok(application)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::{ApplicationStatus, Company, Difficulty, QuestionKind, SkillCategory};
    use prep_core::time::fixed_clock;
    use storage::catalog::StaticCatalog;

    fn service() -> CatalogService {
        CatalogService::new(fixed_clock(), Arc::new(StaticCatalog::builtin()))
    }

    fn titles(problems: &[Problem]) -> Vec<&str> {
        problems.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn empty_criteria_returns_every_problem_in_order() {
        let svc = service();
        assert_eq!(
            titles(&svc.problems(&ProblemCriteria::new())),
            [
                "Two Sum",
                "Merge Intervals",
                "Trapping Rain Water",
                "Valid Parentheses",
                "LRU Cache"
            ]
        );
    }

    #[test]
    fn easy_at_google_matches_two_problems() {
        let criteria = ProblemCriteria::new()
            .with_difficulty(Difficulty::Easy)
            .with_company(Company::Google);
        assert_eq!(
            titles(&service().problems(&criteria)),
            ["Two Sum", "Valid Parentheses"]
        );
    }

    #[test]
    fn query_is_case_insensitive() {
        let criteria = ProblemCriteria::new().with_query("CACHE");
        assert_eq!(titles(&service().problems(&criteria)), ["LRU Cache"]);
    }

    #[test]
    fn interview_board_partitions_by_status() {
        let svc = service();
        assert_eq!(svc.upcoming_interviews().len(), 1);
        assert_eq!(svc.completed_interviews().len(), 1);
        assert_eq!(svc.available_interviews().len(), 1);
        assert_eq!(
            svc.completed_interviews()[0].feedback.as_ref().map(|f| f.rating),
            Some(4)
        );
    }

    #[test]
    fn question_bank_filters_by_kind_and_difficulty() {
        let svc = service();
        let technical = svc.interview_questions(&InterviewQuestionCriteria::from_selection(
            Some(QuestionKind::Technical),
            None,
        ));
        assert_eq!(technical.len(), 2);

        let hard_technical = svc.interview_questions(&InterviewQuestionCriteria::from_selection(
            Some(QuestionKind::Technical),
            Some(Difficulty::Hard),
        ));
        assert_eq!(hard_technical.len(), 1);
        assert!(hard_technical[0].question.contains("URL shortening"));
    }

    #[test]
    fn exercises_filter_by_category() {
        let svc = service();
        let comms = svc.exercises(&ExerciseCriteria::only(Some(SkillCategory::Communication)));
        assert_eq!(comms.len(), 1);
        assert!(comms[0].is_playable_quiz());
        assert_eq!(svc.exercises(&ExerciseCriteria::only(None)).len(), 4);
    }

    #[test]
    fn lookups_by_id() {
        let svc = service();
        assert_eq!(
            svc.problem(ProblemId::new(3)).map(|p| p.title),
            Some("Trapping Rain Water".to_string())
        );
        assert!(svc.problem(ProblemId::new(99)).is_none());
        assert!(svc.exercise(ExerciseId::new(1)).is_some());
    }

    #[test]
    fn new_application_starts_applied() {
        let app = service()
            .new_application(JobApplicationDraft {
                company: "  Acme ".into(),
                role: "SDE".into(),
            })
            .unwrap();
        assert_eq!(app.company, "Acme");
        assert_eq!(app.status, ApplicationStatus::Applied);
        assert_eq!(app.id, ApplicationId::new(1_700_000_000_000));

        let err = service()
            .new_application(JobApplicationDraft {
                company: " ".into(),
                role: "SDE".into(),
            })
            .unwrap_err();
        assert_eq!(err, ApplicationError::EmptyCompany);
    }

    #[test]
    fn repeated_adds_under_a_fixed_clock_get_distinct_ids() {
        let svc = service();
        let draft = || JobApplicationDraft {
            company: "Acme".into(),
            role: "SDE".into(),
        };
        let first = svc.new_application(draft()).unwrap();
        let second = svc.clone().new_application(draft()).unwrap();
        assert_ne!(first.id, second.id);
        assert!(
            svc.applications()
                .iter()
                .all(|existing| existing.id != first.id && existing.id != second.id)
        );
    }
}
