//! Built-in catalog records.

use chrono::{NaiveDate, NaiveDateTime};
use prep_core::model::{
    ApplicationId, ApplicationStatus, Company, Difficulty, Exercise, ExerciseId, ExerciseKind,
    Interview, InterviewFeedback, InterviewId, InterviewKind, InterviewQuestion,
    InterviewQuestionId, InterviewStatus, JobApplication, Problem, ProblemId, ProfileReview,
    ProfileReviewId, ProfileReviewKind, ProfileReviewStatus, Progress, QuestionId, QuestionKind,
    QuizQuestion, SkillCategory, StudyTask, StudyTaskId, Topic,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_default()
}

#[must_use]
pub fn problems() -> Vec<Problem> {
    vec![
        Problem {
            id: ProblemId::new(1),
            title: "Two Sum".into(),
            difficulty: Difficulty::Easy,
            topics: vec![Topic::Arrays, Topic::HashTable],
            companies: vec![Company::Google, Company::Amazon, Company::Facebook],
            description: "Given an array of integers nums and an integer target, return indices \
                          of the two numbers such that they add up to target."
                .into(),
            solved: true,
        },
        Problem {
            id: ProblemId::new(2),
            title: "Merge Intervals".into(),
            difficulty: Difficulty::Medium,
            topics: vec![Topic::Arrays, Topic::Sorting],
            companies: vec![Company::Amazon, Company::Microsoft],
            description: "Given an array of intervals where intervals[i] = [starti, endi], merge \
                          all overlapping intervals."
                .into(),
            solved: false,
        },
        Problem {
            id: ProblemId::new(3),
            title: "Trapping Rain Water".into(),
            difficulty: Difficulty::Hard,
            topics: vec![Topic::Arrays, Topic::TwoPointers, Topic::DynamicProgramming],
            companies: vec![Company::Google, Company::Amazon, Company::Microsoft],
            description: "Given n non-negative integers representing an elevation map where the \
                          width of each bar is 1, compute how much water it can trap after \
                          raining."
                .into(),
            solved: false,
        },
        Problem {
            id: ProblemId::new(4),
            title: "Valid Parentheses".into(),
            difficulty: Difficulty::Easy,
            topics: vec![Topic::Stack, Topic::Strings],
            companies: vec![Company::Google, Company::Facebook],
            description: "Given a string s containing just the characters '(', ')', '{', '}', \
                          '[' and ']', determine if the input string is valid."
                .into(),
            solved: true,
        },
        Problem {
            id: ProblemId::new(5),
            title: "LRU Cache".into(),
            difficulty: Difficulty::Medium,
            topics: vec![Topic::HashTable, Topic::LinkedList, Topic::Design],
            companies: vec![Company::Amazon, Company::Microsoft, Company::Facebook],
            description: "Design a data structure that follows the constraints of a Least \
                          Recently Used (LRU) cache."
                .into(),
            solved: false,
        },
    ]
}

fn options(items: [&str; 4]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[must_use]
pub fn exercises() -> Vec<Exercise> {
    vec![
        Exercise {
            id: ExerciseId::new(1),
            title: "Effective Communication Quiz".into(),
            kind: ExerciseKind::Quiz,
            category: SkillCategory::Communication,
            description: "Test your knowledge of effective communication principles in a \
                          professional setting."
                .into(),
            completed: true,
            questions: vec![
                QuizQuestion {
                    id: QuestionId::new(1),
                    text: "Which of the following is NOT an effective active listening \
                           technique?"
                        .into(),
                    options: options([
                        "Maintaining eye contact",
                        "Interrupting to show engagement",
                        "Nodding to show understanding",
                        "Asking clarifying questions",
                    ]),
                    correct_answer: 1,
                },
                QuizQuestion {
                    id: QuestionId::new(2),
                    text: "What is the best way to handle a disagreement with a team member?"
                        .into(),
                    options: options([
                        "Avoid the topic completely",
                        "Discuss it privately with other team members",
                        "Address it directly but respectfully",
                        "Escalate to management immediately",
                    ]),
                    correct_answer: 2,
                },
            ],
        },
        Exercise {
            id: ExerciseId::new(2),
            title: "Team Collaboration Scenarios".into(),
            kind: ExerciseKind::Interactive,
            category: SkillCategory::Teamwork,
            description: "Practice responding to common team collaboration challenges through \
                          interactive scenarios."
                .into(),
            completed: false,
            questions: Vec::new(),
        },
        Exercise {
            id: ExerciseId::new(3),
            title: "Problem-Solving Assessment".into(),
            kind: ExerciseKind::Assessment,
            category: SkillCategory::ProblemSolving,
            description: "Evaluate your approach to solving complex problems under time \
                          constraints."
                .into(),
            completed: false,
            questions: Vec::new(),
        },
        Exercise {
            id: ExerciseId::new(4),
            title: "Leadership Style Analysis".into(),
            kind: ExerciseKind::Quiz,
            category: SkillCategory::Leadership,
            description: "Discover your natural leadership style and learn how to adapt it to \
                          different situations."
                .into(),
            completed: false,
            questions: Vec::new(),
        },
    ]
}

#[must_use]
pub fn interviews() -> Vec<Interview> {
    vec![
        Interview {
            id: InterviewId::new(1),
            kind: InterviewKind::Ai,
            title: "Data Structures & Algorithms".into(),
            description: "Focus on arrays, linked lists, and basic algorithm questions".into(),
            duration_minutes: 45,
            scheduled_for: Some(at(2025, 3, 25, 14, 0)),
            status: InterviewStatus::Scheduled,
            feedback: None,
        },
        Interview {
            id: InterviewId::new(2),
            kind: InterviewKind::Peer,
            title: "System Design Basics".into(),
            description: "Practice designing scalable systems and discussing trade-offs".into(),
            duration_minutes: 60,
            scheduled_for: None,
            status: InterviewStatus::Available,
            feedback: None,
        },
        Interview {
            id: InterviewId::new(3),
            kind: InterviewKind::Ai,
            title: "Behavioral Interview".into(),
            description: "Practice answering common behavioral questions".into(),
            duration_minutes: 30,
            scheduled_for: Some(at(2025, 3, 20, 10, 0)),
            status: InterviewStatus::Completed,
            feedback: Some(InterviewFeedback {
                rating: 4,
                comments: "Good communication skills. Work on providing more specific examples."
                    .into(),
            }),
        },
    ]
}

#[must_use]
pub fn interview_questions() -> Vec<InterviewQuestion> {
    vec![
        InterviewQuestion {
            id: InterviewQuestionId::new(1),
            question: "Explain the difference between an array and a linked list.".into(),
            kind: QuestionKind::Technical,
            difficulty: Difficulty::Easy,
            sample_answer: Some(
                "Arrays store elements in contiguous memory locations, allowing for \
                 constant-time access using indices. Linked lists store elements as nodes with \
                 pointers to the next node, allowing for efficient insertions and deletions but \
                 requiring linear-time access to elements."
                    .into(),
            ),
        },
        InterviewQuestion {
            id: InterviewQuestionId::new(2),
            question: "Tell me about a time when you had to work under pressure to meet a \
                       deadline."
                .into(),
            kind: QuestionKind::Behavioral,
            difficulty: Difficulty::Medium,
            sample_answer: Some(
                "During my final year project, our team faced a critical deadline due to \
                 unexpected technical challenges. I organized the team, prioritized tasks, and \
                 worked extra hours to ensure we delivered on time. This experience taught me \
                 the importance of adaptability and clear communication under pressure."
                    .into(),
            ),
        },
        InterviewQuestion {
            id: InterviewQuestionId::new(3),
            question: "Design a URL shortening service like bit.ly.".into(),
            kind: QuestionKind::Technical,
            difficulty: Difficulty::Hard,
            sample_answer: Some(
                "I would design a system with a web server, application logic, and database. \
                 The core functionality would involve generating a unique short code for each \
                 URL using techniques like hashing or base62 encoding. The system would need to \
                 handle high read throughput, so I would implement caching and potentially a \
                 NoSQL database for storage."
                    .into(),
            ),
        },
    ]
}

#[must_use]
pub fn profile_reviews() -> Vec<ProfileReview> {
    vec![
        ProfileReview {
            id: ProfileReviewId::new(1),
            kind: ProfileReviewKind::Resume,
            status: ProfileReviewStatus::Completed,
            submitted_at: at(2025, 3, 15, 10, 30),
            feedback: Some(
                "Your resume effectively highlights your technical skills, but could benefit \
                 from more quantifiable achievements. Consider adding metrics to demonstrate \
                 impact in your previous roles."
                    .into(),
            ),
            score: Some(85),
        },
        ProfileReview {
            id: ProfileReviewId::new(2),
            kind: ProfileReviewKind::LinkedIn,
            status: ProfileReviewStatus::Pending,
            submitted_at: at(2025, 3, 18, 14, 45),
            feedback: None,
            score: None,
        },
    ]
}

#[must_use]
pub fn study_plan() -> Vec<StudyTask> {
    vec![
        StudyTask {
            id: StudyTaskId::new(1),
            title: "Arrays & Strings".into(),
            description: "Master basic array operations and string manipulation".into(),
            completed: true,
            due_date: date(2025, 3, 20),
        },
        StudyTask {
            id: StudyTaskId::new(2),
            title: "Linked Lists".into(),
            description: "Understanding singly and doubly linked lists".into(),
            completed: false,
            due_date: date(2025, 3, 22),
        },
        StudyTask {
            id: StudyTaskId::new(3),
            title: "Trees & Graphs".into(),
            description: "Binary trees, BST, and graph traversal".into(),
            completed: false,
            due_date: date(2025, 3, 25),
        },
    ]
}

#[must_use]
pub fn applications() -> Vec<JobApplication> {
    vec![
        JobApplication {
            id: ApplicationId::new(1),
            company: "Tech Corp".into(),
            role: "SDE I".into(),
            status: ApplicationStatus::Interview,
            next_interview: Some(date(2025, 3, 21)),
        },
        JobApplication {
            id: ApplicationId::new(2),
            company: "Innovation Labs".into(),
            role: "Junior Developer".into(),
            status: ApplicationStatus::Applied,
            next_interview: None,
        },
    ]
}

#[must_use]
pub fn progress() -> Progress {
    Progress {
        completed_challenges: 25,
        total_challenges: 100,
        streak_days: 7,
        badges: vec![
            "Quick Learner".into(),
            "Problem Solver".into(),
            "Consistent".into(),
        ],
        mock_tests_pending: 2,
        upcoming_interviews: 1,
    }
}
