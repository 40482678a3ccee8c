use prep_core::model::{
    Exercise, Interview, InterviewQuestion, JobApplication, Problem, ProfileReview, Progress,
    StudyTask,
};

use crate::fixtures;

/// Read-only access to the built-in catalogs.
///
/// Catalog records are immutable for the lifetime of the process.
pub trait CatalogSource: Send + Sync {
    fn problems(&self) -> &[Problem];
    fn exercises(&self) -> &[Exercise];
    fn interviews(&self) -> &[Interview];
    fn interview_questions(&self) -> &[InterviewQuestion];
    fn profile_reviews(&self) -> &[ProfileReview];
    fn study_plan(&self) -> &[StudyTask];
    fn applications(&self) -> &[JobApplication];
    fn progress(&self) -> &Progress;
}

/// Catalog held in plain vectors.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    problems: Vec<Problem>,
    exercises: Vec<Exercise>,
    interviews: Vec<Interview>,
    interview_questions: Vec<InterviewQuestion>,
    profile_reviews: Vec<ProfileReview>,
    study_plan: Vec<StudyTask>,
    applications: Vec<JobApplication>,
    progress: Progress,
}

impl StaticCatalog {
    /// The catalog shipped with the app.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            problems: fixtures::problems(),
            exercises: fixtures::exercises(),
            interviews: fixtures::interviews(),
            interview_questions: fixtures::interview_questions(),
            profile_reviews: fixtures::profile_reviews(),
            study_plan: fixtures::study_plan(),
            applications: fixtures::applications(),
            progress: fixtures::progress(),
        }
    }
}

impl CatalogSource for StaticCatalog {
    fn problems(&self) -> &[Problem] {
        &self.problems
    }

    fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    fn interviews(&self) -> &[Interview] {
        &self.interviews
    }

    fn interview_questions(&self) -> &[InterviewQuestion] {
        &self.interview_questions
    }

    fn profile_reviews(&self) -> &[ProfileReview] {
        &self.profile_reviews
    }

    fn study_plan(&self) -> &[StudyTask] {
        &self.study_plan
    }

    fn applications(&self) -> &[JobApplication] {
        &self.applications
    }

    fn progress(&self) -> &Progress {
        &self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::{ExerciseKind, InterviewStatus};
    use std::collections::HashSet;

    #[test]
    fn builtin_catalog_is_populated() {
        let catalog = StaticCatalog::builtin();
        assert_eq!(catalog.problems().len(), 5);
        assert_eq!(catalog.exercises().len(), 4);
        assert_eq!(catalog.interviews().len(), 3);
        assert_eq!(catalog.interview_questions().len(), 3);
        assert_eq!(catalog.profile_reviews().len(), 2);
        assert_eq!(catalog.study_plan().len(), 3);
        assert_eq!(catalog.applications().len(), 2);
    }

    #[test]
    fn problem_ids_are_unique() {
        let catalog = StaticCatalog::builtin();
        let ids: HashSet<_> = catalog.problems().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.problems().len());
    }

    #[test]
    fn quiz_answer_keys_point_at_real_options() {
        let catalog = StaticCatalog::builtin();
        for exercise in catalog.exercises() {
            if exercise.kind != ExerciseKind::Quiz {
                assert!(exercise.questions.is_empty(), "{} has questions", exercise.title);
            }
            for question in &exercise.questions {
                assert!(question.correct_answer < question.options.len());
            }
        }
    }

    #[test]
    fn scheduled_and_completed_interviews_have_dates() {
        let catalog = StaticCatalog::builtin();
        for interview in catalog.interviews() {
            match interview.status {
                InterviewStatus::Scheduled | InterviewStatus::Completed => {
                    assert!(interview.scheduled_for.is_some(), "{}", interview.title);
                }
                InterviewStatus::Available => assert!(interview.scheduled_for.is_none()),
            }
        }
    }
}
