//! Quiz scoring and step-through state for soft-skills exercises.

use std::collections::BTreeMap;

use crate::model::{QuestionId, QuizQuestion};

/// Score at or above which a quiz counts as passed.
pub const PASSING_SCORE: u8 = 70;

/// Selected option per question. Questions without an entry are unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizAnswers {
    selected: BTreeMap<QuestionId, usize>,
}

impl QuizAnswers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `option` for `question`, replacing an earlier choice.
    pub fn select(&mut self, question: QuestionId, option: usize) {
        self.selected.insert(question, option);
    }

    #[must_use]
    pub fn selected(&self, question: QuestionId) -> Option<usize> {
        self.selected.get(&question).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

impl FromIterator<(QuestionId, usize)> for QuizAnswers {
    fn from_iter<I: IntoIterator<Item = (QuestionId, usize)>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}

/// Percentage of correctly answered questions, rounded half up.
///
/// Unanswered questions count as wrong. An empty quiz scores 0.
#[must_use]
pub fn score(questions: &[QuizQuestion], answers: &QuizAnswers) -> u8 {
    let total = questions.len();
    if total == 0 {
        return 0;
    }
    let correct = questions
        .iter()
        .filter(|q| answers.selected(q.id).is_some_and(|choice| q.is_correct(choice)))
        .count();

    // round(100 * correct / total) in integers.
    let scaled = (200 * correct + total) / (2 * total);
    u8::try_from(scaled).unwrap_or(100)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizVerdict {
    Passed,
    KeepPracticing,
}

impl QuizVerdict {
    #[must_use]
    pub fn for_score(score: u8) -> Self {
        if score >= PASSING_SCORE {
            Self::Passed
        } else {
            Self::KeepPracticing
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            QuizVerdict::Passed => "Great job! You have a good understanding of this topic.",
            QuizVerdict::KeepPracticing => "Keep practicing! Review the material and try again.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    /// Moved to the question at this index.
    Question(usize),
    /// All questions were visited; results are available.
    Finished,
    /// The current question has no answer yet.
    Blocked,
}

/// One pass through a quiz: current position, answers, and completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAttempt {
    questions: Vec<QuizQuestion>,
    current: usize,
    answers: QuizAnswers,
    finished: bool,
}

impl QuizAttempt {
    #[must_use]
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let finished = questions.is_empty();
        Self {
            questions,
            current: 0,
            answers: QuizAnswers::new(),
            finished,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if self.finished {
            return None;
        }
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    /// Select an option on the current question. Out-of-range options are ignored.
    pub fn select(&mut self, option: usize) {
        let Some(question) = self.current_question() else {
            return;
        };
        if option < question.options.len() {
            let id = question.id;
            self.answers.select(id, option);
        }
    }

    #[must_use]
    pub fn selected_for_current(&self) -> Option<usize> {
        self.current_question()
            .and_then(|question| self.answers.selected(question.id))
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.selected_for_current().is_some()
    }

    /// Move to the next question, or finish after the last one.
    pub fn advance(&mut self) -> QuizStep {
        if self.finished {
            return QuizStep::Finished;
        }
        if !self.can_advance() {
            return QuizStep::Blocked;
        }
        if self.is_last_question() {
            self.finished = true;
            QuizStep::Finished
        } else {
            self.current += 1;
            QuizStep::Question(self.current)
        }
    }

    /// Share of the quiz reached so far, counting the current question.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        let total = self.questions.len();
        if total == 0 {
            return 100;
        }
        let reached = (self.current + 1).min(total);
        u8::try_from(reached * 100 / total).unwrap_or(100)
    }

    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.questions, &self.answers)
    }

    #[must_use]
    pub fn verdict(&self) -> QuizVerdict {
        QuizVerdict::for_score(self.score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u64, correct: usize) -> QuizQuestion {
        QuizQuestion {
            id: QuestionId::new(id),
            text: format!("Question {id}"),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_answer: correct,
        }
    }

    #[test]
    fn all_correct_scores_100() {
        let questions = vec![question(1, 1), question(2, 2)];
        let answers: QuizAnswers = [(QuestionId::new(1), 1), (QuestionId::new(2), 2)]
            .into_iter()
            .collect();
        assert_eq!(score(&questions, &answers), 100);
    }

    #[test]
    fn unanswered_scores_zero() {
        let questions = vec![question(1, 1), question(2, 2)];
        assert_eq!(score(&questions, &QuizAnswers::new()), 0);
    }

    #[test]
    fn one_of_two_scores_50() {
        let questions = vec![question(1, 1), question(2, 2)];
        let answers: QuizAnswers = [(QuestionId::new(1), 1), (QuestionId::new(2), 0)]
            .into_iter()
            .collect();
        assert_eq!(score(&questions, &answers), 50);
    }

    #[test]
    fn rounds_half_up() {
        let questions = vec![question(1, 0), question(2, 0), question(3, 0)];
        let one: QuizAnswers = [(QuestionId::new(1), 0)].into_iter().collect();
        assert_eq!(score(&questions, &one), 33);
        let two: QuizAnswers = [(QuestionId::new(1), 0), (QuestionId::new(2), 0)]
            .into_iter()
            .collect();
        assert_eq!(score(&questions, &two), 67);

        let eight: Vec<_> = (1..=8).map(|id| question(id, 0)).collect();
        let one_of_eight: QuizAnswers = [(QuestionId::new(1), 0)].into_iter().collect();
        // 12.5 rounds up
        assert_eq!(score(&eight, &one_of_eight), 13);
    }

    #[test]
    fn empty_quiz_scores_zero() {
        assert_eq!(score(&[], &QuizAnswers::new()), 0);
    }

    #[test]
    fn answers_for_unknown_questions_are_ignored() {
        let questions = vec![question(1, 1)];
        let answers: QuizAnswers = [(QuestionId::new(99), 1)].into_iter().collect();
        assert_eq!(score(&questions, &answers), 0);
    }

    #[test]
    fn attempt_blocks_until_answered() {
        let mut attempt = QuizAttempt::new(vec![question(1, 1), question(2, 2)]);
        assert_eq!(attempt.advance(), QuizStep::Blocked);
        assert_eq!(attempt.progress_percent(), 50);

        attempt.select(1);
        assert_eq!(attempt.advance(), QuizStep::Question(1));
        assert!(attempt.is_last_question());
        assert_eq!(attempt.progress_percent(), 100);

        attempt.select(0);
        assert_eq!(attempt.advance(), QuizStep::Finished);
        assert!(attempt.is_finished());
        assert!(attempt.current_question().is_none());
        assert_eq!(attempt.score(), 50);
        assert_eq!(attempt.verdict(), QuizVerdict::KeepPracticing);
    }

    #[test]
    fn attempt_ignores_out_of_range_option() {
        let mut attempt = QuizAttempt::new(vec![question(1, 1)]);
        attempt.select(7);
        assert!(!attempt.can_advance());
    }

    #[test]
    fn reselecting_replaces_previous_choice() {
        let mut attempt = QuizAttempt::new(vec![question(1, 1)]);
        attempt.select(0);
        attempt.select(1);
        assert_eq!(attempt.selected_for_current(), Some(1));
        assert_eq!(attempt.advance(), QuizStep::Finished);
        assert_eq!(attempt.score(), 100);
        assert_eq!(attempt.verdict(), QuizVerdict::Passed);
    }

    #[test]
    fn verdict_threshold_is_inclusive() {
        assert_eq!(QuizVerdict::for_score(70), QuizVerdict::Passed);
        assert_eq!(QuizVerdict::for_score(69), QuizVerdict::KeepPracticing);
    }
}
