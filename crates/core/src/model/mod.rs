mod exercise;
mod ids;
mod interview;
mod overview;
mod problem;
mod profile;
mod user;

pub use ids::{
    ApplicationId, ExerciseId, InterviewId, InterviewQuestionId, ParseIdError, ProblemId,
    ProfileReviewId, QuestionId, StudyTaskId, UserId,
};

pub use exercise::{Exercise, ExerciseKind, QuizQuestion, SkillCategory};
pub use interview::{
    Interview, InterviewFeedback, InterviewKind, InterviewQuestion, InterviewStatus,
    MAX_RATING, QuestionKind,
};
pub use overview::{
    ApplicationError, ApplicationStatus, JobApplication, JobApplicationDraft, Progress,
    StudyTask, toggle_task,
};
pub use problem::{Company, Difficulty, Language, Problem, Topic};
pub use profile::{ProfileReview, ProfileReviewKind, ProfileReviewStatus};
pub use user::User;
