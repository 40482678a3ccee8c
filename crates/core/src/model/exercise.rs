use serde::{Deserialize, Serialize};

use crate::model::ids::{ExerciseId, QuestionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillCategory {
    Communication,
    Teamwork,
    ProblemSolving,
    Leadership,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Communication,
        SkillCategory::Teamwork,
        SkillCategory::ProblemSolving,
        SkillCategory::Leadership,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Communication => "Communication",
            SkillCategory::Teamwork => "Teamwork",
            SkillCategory::ProblemSolving => "Problem Solving",
            SkillCategory::Leadership => "Leadership",
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            SkillCategory::Communication => "communication",
            SkillCategory::Teamwork => "teamwork",
            SkillCategory::ProblemSolving => "problem-solving",
            SkillCategory::Leadership => "leadership",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseKind {
    Quiz,
    Interactive,
    Assessment,
}

impl ExerciseKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ExerciseKind::Quiz => "Quiz",
            ExerciseKind::Interactive => "Interactive",
            ExerciseKind::Assessment => "Assessment",
        }
    }
}

/// Multiple-choice question with a single correct option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
}

impl QuizQuestion {
    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_answer
    }
}

/// A soft-skills exercise. Only `Quiz` exercises carry questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseId,
    pub title: String,
    pub kind: ExerciseKind,
    pub category: SkillCategory,
    pub description: String,
    pub completed: bool,
    pub questions: Vec<QuizQuestion>,
}

impl Exercise {
    /// True when the exercise can be taken as a quiz.
    #[must_use]
    pub fn is_playable_quiz(&self) -> bool {
        self.kind == ExerciseKind::Quiz && !self.questions.is_empty()
    }
}
