use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::ids::ProblemId;

//
// ─── TAG VOCABULARIES ──────────────────────────────────────────────────────────
//

/// Difficulty tag shared by coding problems and the interview question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Stable lowercase key, used for CSS hooks and select values.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Problem topic.
///
/// `FILTERABLE` is the vocabulary offered in the filter panel; `TwoPointers`
/// and `Design` only appear as tags on problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Topic {
    Arrays,
    Strings,
    HashTable,
    LinkedList,
    Stack,
    Queue,
    Tree,
    Graph,
    DynamicProgramming,
    Greedy,
    BinarySearch,
    Sorting,
    TwoPointers,
    Design,
}

impl Topic {
    pub const FILTERABLE: [Topic; 12] = [
        Topic::Arrays,
        Topic::Strings,
        Topic::HashTable,
        Topic::LinkedList,
        Topic::Stack,
        Topic::Queue,
        Topic::Tree,
        Topic::Graph,
        Topic::DynamicProgramming,
        Topic::Greedy,
        Topic::BinarySearch,
        Topic::Sorting,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Topic::Arrays => "Arrays",
            Topic::Strings => "Strings",
            Topic::HashTable => "Hash Table",
            Topic::LinkedList => "Linked List",
            Topic::Stack => "Stack",
            Topic::Queue => "Queue",
            Topic::Tree => "Tree",
            Topic::Graph => "Graph",
            Topic::DynamicProgramming => "Dynamic Programming",
            Topic::Greedy => "Greedy",
            Topic::BinarySearch => "Binary Search",
            Topic::Sorting => "Sorting",
            Topic::TwoPointers => "Two Pointers",
            Topic::Design => "Design",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Company {
    Google,
    Amazon,
    Microsoft,
    Facebook,
    Apple,
    Netflix,
    Uber,
    LinkedIn,
}

impl Company {
    pub const ALL: [Company; 8] = [
        Company::Google,
        Company::Amazon,
        Company::Microsoft,
        Company::Facebook,
        Company::Apple,
        Company::Netflix,
        Company::Uber,
        Company::LinkedIn,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Company::Google => "Google",
            Company::Amazon => "Amazon",
            Company::Microsoft => "Microsoft",
            Company::Facebook => "Facebook",
            Company::Apple => "Apple",
            Company::Netflix => "Netflix",
            Company::Uber => "Uber",
            Company::LinkedIn => "LinkedIn",
        }
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Languages offered by the code editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    JavaScript,
    Python,
    Java,
    Cpp,
    Go,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::JavaScript,
        Language::Python,
        Language::Java,
        Language::Cpp,
        Language::Go,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::Go => "Go",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.label() == label)
    }
}

//
// ─── PROBLEM ───────────────────────────────────────────────────────────────────
//

/// A coding challenge in the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: ProblemId,
    pub title: String,
    pub difficulty: Difficulty,
    pub topics: Vec<Topic>,
    pub companies: Vec<Company>,
    pub description: String,
    pub solved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_keys_round_trip() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_key(difficulty.key()), Some(difficulty));
        }
        assert_eq!(Difficulty::from_key("extreme"), None);
    }

    #[test]
    fn filterable_topics_exclude_tag_only_topics() {
        assert!(!Topic::FILTERABLE.contains(&Topic::TwoPointers));
        assert!(!Topic::FILTERABLE.contains(&Topic::Design));
        assert!(Topic::FILTERABLE.contains(&Topic::HashTable));
    }

    #[test]
    fn language_labels_parse_back() {
        assert_eq!(Language::from_label("C++"), Some(Language::Cpp));
        assert_eq!(Language::from_label("Rust"), None);
    }
}
