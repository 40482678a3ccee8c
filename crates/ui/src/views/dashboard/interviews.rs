use dioxus::prelude::*;
use prep_core::filter::InterviewQuestionCriteria;
use prep_core::model::{Difficulty, InterviewKind, InterviewQuestionId, QuestionKind};
use prep_core::schedule::ScheduleRequest;

use super::tab_class;
use crate::context::AppContext;
use crate::vm::{InterviewCardVm, difficulty_class, map_interview_card};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InterviewTab {
    Upcoming,
    QuestionBank,
    History,
}

impl InterviewTab {
    const ALL: [InterviewTab; 3] = [
        InterviewTab::Upcoming,
        InterviewTab::QuestionBank,
        InterviewTab::History,
    ];

    fn label(self) -> &'static str {
        match self {
            InterviewTab::Upcoming => "Upcoming Interviews",
            InterviewTab::QuestionBank => "Question Bank",
            InterviewTab::History => "Feedback & History",
        }
    }
}

struct InterviewOffer {
    kind: InterviewKind,
    blurb: &'static str,
    action: &'static str,
}

static OFFERS: [InterviewOffer; 2] = [
    InterviewOffer {
        kind: InterviewKind::Ai,
        blurb: "Practice with our AI interviewer that adapts to your responses and provides instant feedback.",
        action: "Schedule",
    },
    InterviewOffer {
        kind: InterviewKind::Peer,
        blurb: "Connect with another student for a mock interview session and exchange feedback.",
        action: "Find a Partner",
    },
];

fn star_class(filled: bool) -> &'static str {
    if filled { "star star--filled" } else { "star" }
}

#[component]
pub fn InterviewsPanel() -> Element {
    let mut active = use_signal(|| InterviewTab::Upcoming);

    rsx! {
        section { class: "panel interviews",
            h2 { "Mock Interviews" }
            nav { class: "tabs tabs--sub",
                for tab in InterviewTab::ALL {
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
                InterviewTab::Upcoming => rsx! { UpcomingInterviews {} },
                InterviewTab::QuestionBank => rsx! { QuestionBank {} },
                InterviewTab::History => rsx! { InterviewHistory {} },
            }
        }
    }
}

#[component]
fn UpcomingInterviews() -> Element {
    let ctx = use_context::<AppContext>();
    let cards = ctx
        .catalog()
        .upcoming_interviews()
        .iter()
        .map(map_interview_card)
        .collect::<Vec<_>>();
    let mut scheduling = use_signal(|| None::<InterviewKind>);
    let mut date = use_signal(String::new);
    let mut time = use_signal(String::new);
    let mut schedule_error = use_signal(|| None::<String>);
    let mut confirmation = use_signal(|| None::<String>);

    let on_confirm = move |_: MouseEvent| {
        let Some(kind) = scheduling() else {
            return;
        };
        match ScheduleRequest::new(kind, &date(), &time()) {
            Ok(request) => {
                tracing::info!(kind = ?request.kind(), at = %request.starts_at(), "interview scheduled");
                confirmation.set(Some(request.confirmation()));
                schedule_error.set(None);
                scheduling.set(None);
                date.set(String::new());
                time.set(String::new());
            }
            Err(err) => schedule_error.set(Some(err.to_string())),
        }
    };

    rsx! {
        div { class: "upcoming",
            if let Some(message) = confirmation() {
                p { class: "form-success", role: "status", "{message}" }
            }
            h3 { "Scheduled Interviews" }
            if cards.is_empty() {
                p { class: "empty", "No scheduled interviews." }
            } else {
                div { class: "interview-list",
                    for card in cards {
                        InterviewCard { key: "{card.id}", card, show_rating: false }
                    }
                }
            }
            h3 { "Available Interview Types" }
            div { class: "card-grid",
                for offer in OFFERS.iter() {
                    div { class: "interview-offer", key: "{offer.kind.label()}",
                        h4 { "{offer.kind.label()}" }
                        p { "{offer.blurb}" }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: {
                                let kind = offer.kind;
                                move |_| {
                                    scheduling.set(Some(kind));
                                    schedule_error.set(None);
                                    confirmation.set(None);
                                }
                            },
                            "{offer.action}"
                        }
                    }
                }
            }
            if let Some(kind) = scheduling() {
                div { class: "modal",
                    div { class: "modal-card",
                        h3 { "Schedule Interview" }
                        p { class: "modal-subtitle", "{kind.label()}" }
                        if let Some(message) = schedule_error() {
                            p { class: "form-error", role: "alert", "{message}" }
                        }
                        label { r#for: "schedule-date", "Date" }
                        input {
                            id: "schedule-date",
                            r#type: "date",
                            value: "{date}",
                            oninput: move |evt| date.set(evt.value()),
                        }
                        label { r#for: "schedule-time", "Time" }
                        input {
                            id: "schedule-time",
                            r#type: "time",
                            value: "{time}",
                            oninput: move |evt| time.set(evt.value()),
                        }
                        div { class: "modal-actions",
                            button {
                                class: "btn btn-ghost",
                                r#type: "button",
                                onclick: move |_| {
                                    scheduling.set(None);
                                    schedule_error.set(None);
                                },
                                "Cancel"
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: on_confirm,
                                "Schedule"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionBank() -> Element {
    let ctx = use_context::<AppContext>();
    let mut kind = use_signal(|| None::<QuestionKind>);
    let mut difficulty = use_signal(|| None::<Difficulty>);
    let mut expanded = use_signal(|| None::<InterviewQuestionId>);

    let criteria = InterviewQuestionCriteria::from_selection(kind(), difficulty());
    let questions = ctx.catalog().interview_questions(&criteria);
    // "all" parses to None, which leaves that dimension unrestricted.
    let kind_value = kind().map_or("all", QuestionKind::key);
    let difficulty_value = difficulty().map_or("all", Difficulty::key);

    rsx! {
        div { class: "question-bank",
            div { class: "filters filters--inline",
                label { r#for: "question-kind", "Question Type" }
                select {
                    id: "question-kind",
                    value: "{kind_value}",
                    onchange: move |evt| kind.set(QuestionKind::from_key(&evt.value())),
                    option { value: "all", "All Types" }
                    for option_kind in QuestionKind::ALL {
                        option {
                            key: "{option_kind.key()}",
                            value: "{option_kind.key()}",
                            selected: kind() == Some(option_kind),
                            "{option_kind.label()}"
                        }
                    }
                }
                label { r#for: "question-difficulty", "Difficulty" }
                select {
                    id: "question-difficulty",
                    value: "{difficulty_value}",
                    onchange: move |evt| difficulty.set(Difficulty::from_key(&evt.value())),
                    option { value: "all", "All Levels" }
                    for level in Difficulty::ALL {
                        option {
                            key: "{level.key()}",
                            value: "{level.key()}",
                            selected: difficulty() == Some(level),
                            "{level.label()}"
                        }
                    }
                }
            }
            if questions.is_empty() {
                p { class: "empty", "No questions match these filters." }
            }
            for question in questions {
                div { class: "question", key: "{question.id}",
                    button {
                        class: "question-header",
                        r#type: "button",
                        aria_expanded: "{expanded() == Some(question.id)}",
                        onclick: move |_| {
                            let next = if expanded() == Some(question.id) { None } else { Some(question.id) };
                            expanded.set(next);
                        },
                        span { class: "question-kind", "{question.kind.label()}" }
                        span { class: "question-text", "{question.question}" }
                        span { class: difficulty_class(question.difficulty), "{question.difficulty.key()}" }
                    }
                    if expanded() == Some(question.id) {
                        if let Some(answer) = question.sample_answer.as_deref() {
                            div { class: "sample-answer",
                                h4 { "Sample Answer:" }
                                p { "{answer}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn InterviewHistory() -> Element {
    let ctx = use_context::<AppContext>();
    let cards = ctx
        .catalog()
        .completed_interviews()
        .iter()
        .map(map_interview_card)
        .collect::<Vec<_>>();

    rsx! {
        div { class: "history",
            h3 { "Interview History" }
            if cards.is_empty() {
                p { class: "empty", "No completed interviews yet." }
            } else {
                div { class: "interview-list",
                    for card in cards {
                        InterviewCard { key: "{card.id}", card, show_rating: true }
                    }
                }
            }
        }
    }
}

#[component]
fn InterviewCard(card: InterviewCardVm, show_rating: bool) -> Element {
    rsx! {
        div { class: "interview-card",
            div { class: "interview-card-main",
                span { class: "interview-kind", "{card.kind_icon}" }
                h4 { "{card.title}" }
                p { "{card.description}" }
            }
            div { class: "interview-card-side",
                if show_rating {
                    div { class: "stars", aria_label: "rating",
                        for (index, filled) in card.stars.iter().copied().enumerate() {
                            span {
                                key: "{index}",
                                class: star_class(filled),
                                "\u{2605}"
                            }
                        }
                    }
                }
                if let Some(date) = card.date_label.as_deref() {
                    span { class: "interview-date", "{date}" }
                }
                if !show_rating {
                    if let Some(time) = card.time_label.as_deref() {
                        span { class: "interview-time", "{time}" }
                    }
                }
            }
            if let Some(feedback) = card.feedback.as_deref() {
                div { class: "interview-feedback",
                    h5 { "Feedback:" }
                    p { "{feedback}" }
                }
            }
        }
    }
}
