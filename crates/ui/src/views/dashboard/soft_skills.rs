use dioxus::prelude::*;
use prep_core::filter::ExerciseCriteria;
use prep_core::model::{
    Exercise, ExerciseKind, ProfileReview, ProfileReviewKind, ProfileReviewStatus, SkillCategory,
};
use prep_core::quiz::QuizAttempt;
use prep_core::review::ReviewSubmission;

use super::tab_class;
use crate::context::AppContext;
use crate::vm::format_date;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SoftSkillsTab {
    Exercises,
    ProfileReview,
}

impl SoftSkillsTab {
    const ALL: [SoftSkillsTab; 2] = [SoftSkillsTab::Exercises, SoftSkillsTab::ProfileReview];

    fn label(self) -> &'static str {
        match self {
            SoftSkillsTab::Exercises => "Exercises & Quizzes",
            SoftSkillsTab::ProfileReview => "Profile Review",
        }
    }
}

fn option_class(selected: bool) -> &'static str {
    if selected { "quiz-option quiz-option--selected" } else { "quiz-option" }
}

fn category_class(selected: bool) -> &'static str {
    if selected { "category category--selected" } else { "category" }
}

fn kind_class(kind: ExerciseKind) -> &'static str {
    match kind {
        ExerciseKind::Quiz => "pill pill--quiz",
        ExerciseKind::Interactive => "pill pill--interactive",
        ExerciseKind::Assessment => "pill pill--assessment",
    }
}

/// File pickers report either a path or a browser-style `C:\fakepath\name`.
fn file_name_from_picker(value: &str) -> &str {
    value.rsplit(['/', '\\']).next().unwrap_or(value)
}

#[component]
pub fn SoftSkillsPanel() -> Element {
    let mut active = use_signal(|| SoftSkillsTab::Exercises);

    rsx! {
        section { class: "panel soft-skills",
            h2 { "Soft Skills Training" }
            nav { class: "tabs tabs--sub",
                for tab in SoftSkillsTab::ALL {
                    button {
                        key: "{tab.label()}",
                        class: tab_class(active() == tab),
                        r#type: "button",
                        onclick: move |_| active.set(tab),
                        "{tab.label()}"
                    }
                }
            }
            match active() {
                SoftSkillsTab::Exercises => rsx! { ExerciseBrowser {} },
                SoftSkillsTab::ProfileReview => rsx! { ProfileReviewPanel {} },
            }
        }
    }
}

#[component]
fn ExerciseBrowser() -> Element {
    let ctx = use_context::<AppContext>();
    let mut category = use_signal(|| None::<SkillCategory>);
    let mut selected = use_signal(|| None::<Exercise>);

    if let Some(exercise) = selected() {
        return rsx! {
            ExerciseRunner {
                exercise,
                on_back: move |()| selected.set(None),
            }
        };
    }

    let exercises = ctx.catalog().exercises(&ExerciseCriteria::only(category()));

    rsx! {
        div { class: "exercise-browser",
            div { class: "categories",
                for option in SkillCategory::ALL {
                    button {
                        key: "{option.key()}",
                        class: category_class(category() == Some(option)),
                        r#type: "button",
                        onclick: move |_| {
                            let next = if category() == Some(option) { None } else { Some(option) };
                            category.set(next);
                        },
                        "{option.label()}"
                    }
                }
            }
            if exercises.is_empty() {
                p { class: "empty", "No exercises in this category yet." }
            }
            div { class: "exercise-list",
                for exercise in exercises {
                    div {
                        key: "{exercise.id}",
                        class: "exercise-card",
                        onclick: {
                            let exercise = exercise.clone();
                            move |_| selected.set(Some(exercise.clone()))
                        },
                        div { class: "exercise-card-title",
                            h3 { "{exercise.title}" }
                            if exercise.completed {
                                span { class: "completed-mark", "Completed" }
                            }
                        }
                        p { "{exercise.description}" }
                        span { class: kind_class(exercise.kind), "{exercise.kind.label()}" }
                    }
                }
            }
        }
    }
}

/// Render-time copy of the question on screen.
struct QuestionFrame {
    number: usize,
    total: usize,
    progress: u8,
    text: String,
    options: Vec<String>,
    chosen: Option<usize>,
    can_advance: bool,
    next_label: &'static str,
}

impl QuestionFrame {
    fn from_attempt(attempt: &QuizAttempt) -> Self {
        let (text, options) = attempt
            .current_question()
            .map(|question| (question.text.clone(), question.options.clone()))
            .unwrap_or_default();
        Self {
            number: attempt.current_index() + 1,
            total: attempt.questions().len(),
            progress: attempt.progress_percent(),
            text,
            options,
            chosen: attempt.selected_for_current(),
            can_advance: attempt.can_advance(),
            next_label: if attempt.is_last_question() {
                "See Results"
            } else {
                "Next Question"
            },
        }
    }
}

#[component]
fn ExerciseRunner(exercise: Exercise, on_back: EventHandler<()>) -> Element {
    let mut attempt = use_signal({
        let questions = exercise.questions.clone();
        move || QuizAttempt::new(questions)
    });

    let body = if !exercise.is_playable_quiz() {
        rsx! {
            div { class: "exercise-intro",
                p { "This interactive exercise will guide you through various scenarios to practice your skills." }
                button { class: "btn btn-primary", r#type: "button", "Start Exercise" }
            }
        }
    } else if attempt.read().is_finished() {
        let score = attempt.read().score();
        let verdict = attempt.read().verdict();
        rsx! {
            div { class: "quiz-results",
                p { class: "quiz-score", "{score}%" }
                h4 { "Quiz Completed!" }
                p { "{verdict.message()}" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_back.call(()),
                    "Back to Exercises"
                }
            }
        }
    } else {
        let frame = QuestionFrame::from_attempt(&attempt.read());
        rsx! {
            div { class: "quiz",
                div { class: "quiz-progress",
                    span { "Question {frame.number} of {frame.total}" }
                    div { class: "progress-bar",
                        div { class: "progress-bar-fill", style: "width: {frame.progress}%" }
                    }
                }
                h4 { class: "quiz-question", "{frame.text}" }
                div { class: "quiz-options",
                    for (index, option) in frame.options.into_iter().enumerate() {
                        button {
                            key: "{index}",
                            class: option_class(frame.chosen == Some(index)),
                            r#type: "button",
                            onclick: move |_| attempt.write().select(index),
                            "{option}"
                        }
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !frame.can_advance,
                    onclick: move |_| {
                        attempt.write().advance();
                    },
                    "{frame.next_label}"
                }
            }
        }
    };

    rsx! {
        div { class: "exercise-runner",
            button {
                class: "btn btn-ghost",
                r#type: "button",
                onclick: move |_| on_back.call(()),
                "Back to Exercises"
            }
            h3 { "{exercise.title}" }
            p { "{exercise.description}" }
            {body}
        }
    }
}

struct ReviewOffer {
    kind: ProfileReviewKind,
    blurb: &'static str,
    action: &'static str,
}

static REVIEW_OFFERS: [ReviewOffer; 2] = [
    ReviewOffer {
        kind: ProfileReviewKind::Resume,
        blurb: "Get professional feedback on your resume from our AI-powered tool and career experts.",
        action: "Upload Resume",
    },
    ReviewOffer {
        kind: ProfileReviewKind::LinkedIn,
        blurb: "Optimize your LinkedIn profile with personalized recommendations to attract recruiters.",
        action: "Upload Screenshot",
    },
];

#[component]
fn ProfileReviewPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let reviews = ctx.catalog().profile_reviews();
    let mut kind = use_signal(ProfileReviewKind::default);
    let mut file_name = use_signal(|| None::<String>);
    let mut outcome = use_signal(|| None::<Result<&'static str, String>>);

    let on_submit = move |_: MouseEvent| {
        let Some(name) = file_name() else {
            return;
        };
        match ReviewSubmission::new(kind(), &name) {
            Ok(submission) => {
                tracing::info!(kind = ?submission.kind(), file = submission.file_name(), "profile review submitted");
                outcome.set(Some(Ok(submission.confirmation())));
                file_name.set(None);
            }
            Err(err) => outcome.set(Some(Err(err.to_string()))),
        }
    };

    let accept = kind()
        .accepted_extensions()
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",");

    rsx! {
        div { class: "profile-review",
            div { class: "card-grid",
                for offer in REVIEW_OFFERS.iter() {
                    div { class: "review-offer", key: "{offer.kind.title()}",
                        h3 { "{offer.kind.title()}" }
                        p { "{offer.blurb}" }
                        button {
                            class: tab_class(kind() == offer.kind),
                            r#type: "button",
                            onclick: {
                                let offer_kind = offer.kind;
                                move |_| {
                                    kind.set(offer_kind);
                                    file_name.set(None);
                                    outcome.set(None);
                                }
                            },
                            "{offer.action}"
                        }
                    }
                }
            }
            div { class: "upload",
                h3 { "{kind().title()}" }
                label { r#for: "file-upload", "Upload your {kind().upload_hint()}" }
                if let Some(name) = file_name() {
                    p { "Selected file: {name}" }
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| file_name.set(None),
                        "Remove"
                    }
                } else {
                    input {
                        id: "file-upload",
                        r#type: "file",
                        accept: "{accept}",
                        onchange: move |evt| {
                            let value = evt.value();
                            let name = file_name_from_picker(&value);
                            file_name.set((!name.is_empty()).then(|| name.to_string()));
                            outcome.set(None);
                        },
                    }
                }
                match outcome() {
                    Some(Ok(message)) => rsx! { p { class: "form-success", role: "status", "{message}" } },
                    Some(Err(message)) => rsx! { p { class: "form-error", role: "alert", "{message}" } },
                    None => rsx! {},
                }
                button {
                    class: "btn btn-primary btn-block",
                    r#type: "button",
                    disabled: file_name.read().is_none(),
                    onclick: on_submit,
                    "Submit for Review"
                }
            }
            div { class: "previous-reviews",
                h3 { "Previous Reviews" }
                if reviews.is_empty() {
                    p { class: "empty", "No previous reviews found." }
                }
                for review in reviews {
                    ReviewCard { key: "{review.id}", review }
                }
            }
        }
    }
}

#[component]
fn ReviewCard(review: ProfileReview) -> Element {
    let status_class = match review.status {
        ProfileReviewStatus::Completed => "status status--offer",
        ProfileReviewStatus::Pending => "status status--applied",
    };

    rsx! {
        div { class: "review-card",
            div { class: "review-card-header",
                h4 { "{review.kind.title()}" }
                span { class: status_class, "{review.status.label()}" }
            }
            p { class: "review-date", "Submitted on {format_date(review.submitted_at.date())}" }
            if review.status == ProfileReviewStatus::Completed {
                if let Some(score) = review.score {
                    div { class: "progress-bar",
                        div { class: "progress-bar-fill", style: "width: {score}%" }
                    }
                    span { class: "review-score", "{score}%" }
                }
                if let Some(feedback) = review.feedback.as_deref() {
                    p { class: "review-feedback", "{feedback}" }
                }
            } else {
                p { class: "review-pending", "Your review is in progress. You will receive feedback within 48 hours." }
            }
        }
    }
}
