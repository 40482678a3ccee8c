use prep_core::model::{Difficulty, Problem, ProblemId};

/// Topics shown inline on a problem row before collapsing into "+N".
const INLINE_TOPICS: usize = 2;

/// UI-ready row for the problem list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemRowVm {
    pub id: ProblemId,
    pub title: String,
    pub solved: bool,
    pub difficulty_label: &'static str,
    pub difficulty_class: &'static str,
    pub topic_pills: Vec<&'static str>,
    pub extra_topics_label: Option<String>,
}

#[must_use]
pub fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "pill pill--easy",
        Difficulty::Medium => "pill pill--medium",
        Difficulty::Hard => "pill pill--hard",
    }
}

#[must_use]
pub fn map_problem_row(problem: &Problem) -> ProblemRowVm {
    let topic_pills = problem
        .topics
        .iter()
        .take(INLINE_TOPICS)
        .map(|topic| topic.label())
        .collect();
    let hidden = problem.topics.len().saturating_sub(INLINE_TOPICS);
    ProblemRowVm {
        id: problem.id,
        title: problem.title.clone(),
        solved: problem.solved,
        difficulty_label: problem.difficulty.label(),
        difficulty_class: difficulty_class(problem.difficulty),
        topic_pills,
        extra_topics_label: (hidden > 0).then(|| format!("+{hidden}")),
    }
}

#[must_use]
pub fn map_problem_rows(problems: &[Problem]) -> Vec<ProblemRowVm> {
    problems.iter().map(map_problem_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::{Company, Topic};

    fn problem(topics: Vec<Topic>) -> Problem {
        Problem {
            id: ProblemId::new(3),
            title: "Trapping Rain Water".into(),
            difficulty: Difficulty::Hard,
            topics,
            companies: vec![Company::Google],
            description: String::new(),
            solved: false,
        }
    }

    #[test]
    fn long_topic_lists_collapse() {
        let row = map_problem_row(&problem(vec![
            Topic::Arrays,
            Topic::TwoPointers,
            Topic::DynamicProgramming,
        ]));
        assert_eq!(row.topic_pills.len(), 2);
        assert_eq!(row.extra_topics_label.as_deref(), Some("+1"));
        assert_eq!(row.difficulty_class, "pill pill--hard");
    }

    #[test]
    fn short_topic_lists_show_everything() {
        let row = map_problem_row(&problem(vec![Topic::Stack]));
        assert_eq!(row.topic_pills, vec![Topic::Stack.label()]);
        assert_eq!(row.extra_topics_label, None);
    }
}
