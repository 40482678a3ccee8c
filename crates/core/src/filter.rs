//! Catalog filtering.
//!
//! Every criteria type is a conjunction of independent dimensions. Within a
//! dimension the selected values are alternatives, and an empty selection
//! places no restriction on the item.

use std::collections::BTreeSet;

use crate::model::{
    Company, Difficulty, Exercise, Interview, InterviewQuestion, InterviewStatus, Problem,
    QuestionKind, SkillCategory, Topic,
};

/// A predicate over catalog items of type `T`.
pub trait Criteria<T> {
    fn matches(&self, item: &T) -> bool;
}

/// Items accepted by `criteria`, in their original order.
#[must_use]
pub fn filter<'a, T, C>(items: &'a [T], criteria: &C) -> Vec<&'a T>
where
    C: Criteria<T> + ?Sized,
{
    items.iter().filter(|item| criteria.matches(item)).collect()
}

/// Add `value` if absent, remove it if present. Returns whether it is now selected.
pub fn toggle<V: Ord>(selected: &mut BTreeSet<V>, value: V) -> bool {
    if selected.remove(&value) {
        false
    } else {
        selected.insert(value);
        true
    }
}

fn accepts_one<V: Ord>(selected: &BTreeSet<V>, value: &V) -> bool {
    selected.is_empty() || selected.contains(value)
}

fn accepts_any<'v, V: Ord + 'v>(
    selected: &BTreeSet<V>,
    values: impl IntoIterator<Item = &'v V>,
) -> bool {
    selected.is_empty() || values.into_iter().any(|value| selected.contains(value))
}

/// Case-insensitive substring match; an empty query matches everything.
fn accepts_query(query: &str, title: &str) -> bool {
    query.is_empty() || title.to_lowercase().contains(&query.to_lowercase())
}

//
// ─── PROBLEMS ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemCriteria {
    difficulties: BTreeSet<Difficulty>,
    topics: BTreeSet<Topic>,
    companies: BTreeSet<Company>,
    query: String,
}

impl ProblemCriteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_difficulty(&mut self, difficulty: Difficulty) -> bool {
        toggle(&mut self.difficulties, difficulty)
    }

    pub fn toggle_topic(&mut self, topic: Topic) -> bool {
        toggle(&mut self.topics, topic)
    }

    pub fn toggle_company(&mut self, company: Company) -> bool {
        toggle(&mut self.companies, company)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulties.insert(difficulty);
        self
    }

    #[must_use]
    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.topics.insert(topic);
        self
    }

    #[must_use]
    pub fn with_company(mut self, company: Company) -> Self {
        self.companies.insert(company);
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub fn is_difficulty_selected(&self, difficulty: Difficulty) -> bool {
        self.difficulties.contains(&difficulty)
    }

    #[must_use]
    pub fn is_topic_selected(&self, topic: Topic) -> bool {
        self.topics.contains(&topic)
    }

    #[must_use]
    pub fn is_company_selected(&self, company: Company) -> bool {
        self.companies.contains(&company)
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// True when no dimension restricts the catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.difficulties.is_empty()
            && self.topics.is_empty()
            && self.companies.is_empty()
            && self.query.is_empty()
    }
}

impl Criteria<Problem> for ProblemCriteria {
    fn matches(&self, problem: &Problem) -> bool {
        accepts_one(&self.difficulties, &problem.difficulty)
            && accepts_any(&self.topics, &problem.topics)
            && accepts_any(&self.companies, &problem.companies)
            && accepts_query(&self.query, &problem.title)
    }
}

//
// ─── EXERCISES ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseCriteria {
    categories: BTreeSet<SkillCategory>,
}

impl ExerciseCriteria {
    /// Criteria restricted to a single category, or unrestricted for `None`.
    #[must_use]
    pub fn only(category: Option<SkillCategory>) -> Self {
        Self {
            categories: category.into_iter().collect(),
        }
    }
}

impl Criteria<Exercise> for ExerciseCriteria {
    fn matches(&self, exercise: &Exercise) -> bool {
        accepts_one(&self.categories, &exercise.category)
    }
}

//
// ─── INTERVIEW QUESTION BANK ───────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterviewQuestionCriteria {
    kinds: BTreeSet<QuestionKind>,
    difficulties: BTreeSet<Difficulty>,
}

impl InterviewQuestionCriteria {
    /// Build from the two "All / one value" selects of the question bank.
    #[must_use]
    pub fn from_selection(kind: Option<QuestionKind>, difficulty: Option<Difficulty>) -> Self {
        Self {
            kinds: kind.into_iter().collect(),
            difficulties: difficulty.into_iter().collect(),
        }
    }
}

impl Criteria<InterviewQuestion> for InterviewQuestionCriteria {
    fn matches(&self, question: &InterviewQuestion) -> bool {
        accepts_one(&self.kinds, &question.kind)
            && accepts_one(&self.difficulties, &question.difficulty)
    }
}

//
// ─── INTERVIEWS ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterviewCriteria {
    statuses: BTreeSet<InterviewStatus>,
}

impl InterviewCriteria {
    #[must_use]
    pub fn with_status(status: InterviewStatus) -> Self {
        Self {
            statuses: BTreeSet::from([status]),
        }
    }
}

impl Criteria<Interview> for InterviewCriteria {
    fn matches(&self, interview: &Interview) -> bool {
        accepts_one(&self.statuses, &interview.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExerciseId, ExerciseKind, InterviewQuestionId, ProblemId};

    fn problem(
        id: u64,
        title: &str,
        difficulty: Difficulty,
        topics: &[Topic],
        companies: &[Company],
    ) -> Problem {
        Problem {
            id: ProblemId::new(id),
            title: title.to_string(),
            difficulty,
            topics: topics.to_vec(),
            companies: companies.to_vec(),
            description: String::new(),
            solved: false,
        }
    }

    fn problems() -> Vec<Problem> {
        vec![
            problem(
                1,
                "Two Sum",
                Difficulty::Easy,
                &[Topic::Arrays, Topic::HashTable],
                &[Company::Google, Company::Amazon],
            ),
            problem(
                2,
                "Merge Intervals",
                Difficulty::Medium,
                &[Topic::Arrays, Topic::Sorting],
                &[Company::Amazon, Company::Microsoft],
            ),
            problem(
                3,
                "Trapping Rain Water",
                Difficulty::Hard,
                &[Topic::Arrays, Topic::TwoPointers],
                &[Company::Google],
            ),
            problem(
                4,
                "Valid Parentheses",
                Difficulty::Easy,
                &[Topic::Stack, Topic::Strings],
                &[Company::Facebook],
            ),
        ]
    }

    fn ids(found: &[&Problem]) -> Vec<u64> {
        found.iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn empty_criteria_returns_everything_in_order() {
        let items = problems();
        let found = filter(&items, &ProblemCriteria::new());
        assert_eq!(ids(&found), vec![1, 2, 3, 4]);
    }

    #[test]
    fn values_within_a_dimension_are_alternatives() {
        let items = problems();
        let criteria = ProblemCriteria::new()
            .with_difficulty(Difficulty::Easy)
            .with_difficulty(Difficulty::Hard);
        assert_eq!(ids(&filter(&items, &criteria)), vec![1, 3, 4]);
    }

    #[test]
    fn dimensions_are_combined_with_and() {
        let items = problems();
        let criteria = ProblemCriteria::new()
            .with_topic(Topic::Arrays)
            .with_company(Company::Google);
        assert_eq!(ids(&filter(&items, &criteria)), vec![1, 3]);

        let narrower = criteria.with_difficulty(Difficulty::Hard);
        assert_eq!(ids(&filter(&items, &narrower)), vec![3]);
    }

    #[test]
    fn query_is_case_insensitive_substring_of_title() {
        let items = problems();
        let criteria = ProblemCriteria::new().with_query("RAIN");
        assert_eq!(ids(&filter(&items, &criteria)), vec![3]);

        let none = ProblemCriteria::new().with_query("heap");
        assert!(filter(&items, &none).is_empty());
    }

    #[test]
    fn every_single_dimension_result_is_an_ordered_subset() {
        let items = problems();
        let mut cases: Vec<ProblemCriteria> = Vec::new();
        for difficulty in Difficulty::ALL {
            cases.push(ProblemCriteria::new().with_difficulty(difficulty));
        }
        for topic in Topic::FILTERABLE {
            cases.push(ProblemCriteria::new().with_topic(topic));
        }
        for company in Company::ALL {
            cases.push(ProblemCriteria::new().with_company(company));
        }

        for criteria in cases {
            let found = ids(&filter(&items, &criteria));
            let mut sorted = found.clone();
            sorted.sort_unstable();
            assert_eq!(found, sorted, "order changed for {criteria:?}");
            assert!(found.iter().all(|id| (1..=4).contains(id)));
        }
    }

    #[test]
    fn toggle_selects_then_clears() {
        let mut criteria = ProblemCriteria::new();
        assert!(criteria.toggle_topic(Topic::Graph));
        assert!(criteria.is_topic_selected(Topic::Graph));
        assert!(!criteria.is_empty());
        assert!(!criteria.toggle_topic(Topic::Graph));
        assert!(criteria.is_empty());
    }

    #[test]
    fn exercise_criteria_single_category() {
        let exercise = |id: u64, category| Exercise {
            id: ExerciseId::new(id),
            title: format!("Exercise {id}"),
            kind: ExerciseKind::Interactive,
            category,
            description: String::new(),
            completed: false,
            questions: Vec::new(),
        };
        let items = vec![
            exercise(1, SkillCategory::Communication),
            exercise(2, SkillCategory::Teamwork),
            exercise(3, SkillCategory::Communication),
        ];

        assert_eq!(filter(&items, &ExerciseCriteria::only(None)).len(), 3);
        let found = filter(&items, &ExerciseCriteria::only(Some(SkillCategory::Communication)));
        let found_ids: Vec<u64> = found.iter().map(|e| e.id.value()).collect();
        assert_eq!(found_ids, vec![1, 3]);
    }

    #[test]
    fn question_bank_selects_combine() {
        let question = |id: u64, kind, difficulty| InterviewQuestion {
            id: InterviewQuestionId::new(id),
            question: format!("Q{id}"),
            kind,
            difficulty,
            sample_answer: None,
        };
        let items = vec![
            question(1, QuestionKind::Technical, Difficulty::Easy),
            question(2, QuestionKind::Behavioral, Difficulty::Medium),
            question(3, QuestionKind::Technical, Difficulty::Hard),
        ];

        let technical = InterviewQuestionCriteria::from_selection(Some(QuestionKind::Technical), None);
        assert_eq!(filter(&items, &technical).len(), 2);

        let hard_technical = InterviewQuestionCriteria::from_selection(
            Some(QuestionKind::Technical),
            Some(Difficulty::Hard),
        );
        let found = filter(&items, &hard_technical);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, InterviewQuestionId::new(3));

        let hard_behavioral = InterviewQuestionCriteria::from_selection(
            Some(QuestionKind::Behavioral),
            Some(Difficulty::Hard),
        );
        assert!(filter(&items, &hard_behavioral).is_empty());
    }
}
