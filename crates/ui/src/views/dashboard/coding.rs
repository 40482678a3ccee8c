use dioxus::prelude::*;
use prep_core::filter::ProblemCriteria;
use prep_core::model::{Company, Difficulty, Language, ProblemId, Topic};
use services::TestRun;

use crate::context::AppContext;
use crate::views::ViewState;
use crate::vm::{difficulty_class, map_problem_rows};

const CODE_PLACEHOLDER: &str = "// Write your code here";

fn chip_class(selected: bool) -> &'static str {
    if selected { "chip chip--selected" } else { "chip" }
}

fn row_class(active: bool) -> &'static str {
    if active { "problem-row problem-row--active" } else { "problem-row" }
}

fn result_class(outcome: TestRun) -> &'static str {
    if outcome.passed {
        "test-result test-result--pass"
    } else {
        "test-result test-result--fail"
    }
}

/// Run state tagged with a generation so results of abandoned runs are dropped.
#[derive(Clone, Debug, PartialEq)]
struct RunSlot {
    generation: u64,
    state: ViewState<TestRun>,
}

impl RunSlot {
    fn new() -> Self {
        Self {
            generation: 0,
            state: ViewState::Idle,
        }
    }

    /// Abandon any in-flight run.
    fn reset(&mut self) {
        self.generation += 1;
        self.state = ViewState::Idle;
    }

    /// Mark a run as started. `None` while one is already running.
    fn begin(&mut self) -> Option<u64> {
        if self.state.is_loading() {
            return None;
        }
        self.state = ViewState::Loading;
        Some(self.generation)
    }

    /// Store the outcome unless the run was abandoned.
    fn finish(&mut self, generation: u64, outcome: TestRun) {
        if generation == self.generation {
            self.state = ViewState::Ready(outcome);
        }
    }

    fn outcome(&self) -> Option<TestRun> {
        match self.state {
            ViewState::Ready(outcome) => Some(outcome),
            _ => None,
        }
    }
}

#[component]
pub fn CodingPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let code_runner = ctx.code_runner();

    let mut criteria = use_signal(ProblemCriteria::new);
    let mut show_filters = use_signal(|| false);
    let mut selected = use_signal(|| None::<ProblemId>);
    let mut language = use_signal(Language::default);
    let mut code = use_signal(|| CODE_PLACEHOLDER.to_string());
    let mut run_slot = use_signal(RunSlot::new);
    let mut submit_message = use_signal(|| None::<&'static str>);

    let rows = map_problem_rows(&catalog.problems(&criteria.read()));
    let problem = selected().and_then(|id| catalog.problem(id));

    let on_run = {
        let problem = problem.clone();
        move |_: MouseEvent| {
            let Some(problem) = problem.clone() else {
                return;
            };
            let Some(generation) = run_slot.write().begin() else {
                return;
            };
            let runner = code_runner.clone();
            let source = code();
            let lang = language();
            let mut run_slot = run_slot;
            submit_message.set(None);
            spawn(async move {
                let outcome = runner.run(&problem, lang, &source).await;
                run_slot.write().finish(generation, outcome);
            });
        }
    };

    let on_submit = {
        let problem = problem.clone();
        let runner = ctx.code_runner();
        move |_: MouseEvent| {
            if let Some(problem) = problem.as_ref() {
                submit_message.set(Some(runner.submit(problem, language())));
            }
        }
    };

    let running = run_slot.read().state.is_loading();
    let run_result = run_slot.read().outcome();
    let filter_label = if show_filters() { "Hide Filters" } else { "Show Filters" };

    rsx! {
        div { class: "coding",
            section { class: "panel problem-browser",
                div { class: "panel-header",
                    h2 { "Problems ({rows.len()})" }
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| show_filters.set(!show_filters()),
                        "{filter_label}"
                    }
                }
                input {
                    class: "search",
                    r#type: "search",
                    placeholder: "Search problems...",
                    value: "{criteria.read().query()}",
                    oninput: move |evt| criteria.write().set_query(evt.value()),
                }
                if show_filters() {
                    div { class: "filters",
                        h3 { "Difficulty" }
                        div { class: "chips",
                            for difficulty in Difficulty::ALL {
                                button {
                                    key: "{difficulty.key()}",
                                    class: chip_class(criteria.read().is_difficulty_selected(difficulty)),
                                    r#type: "button",
                                    onclick: move |_| {
                                        criteria.write().toggle_difficulty(difficulty);
                                    },
                                    "{difficulty.label()}"
                                }
                            }
                        }
                        h3 { "Topics" }
                        div { class: "chips",
                            for topic in Topic::FILTERABLE {
                                button {
                                    key: "{topic.label()}",
                                    class: chip_class(criteria.read().is_topic_selected(topic)),
                                    r#type: "button",
                                    onclick: move |_| {
                                        criteria.write().toggle_topic(topic);
                                    },
                                    "{topic.label()}"
                                }
                            }
                        }
                        h3 { "Companies" }
                        div { class: "chips",
                            for company in Company::ALL {
                                button {
                                    key: "{company.label()}",
                                    class: chip_class(criteria.read().is_company_selected(company)),
                                    r#type: "button",
                                    onclick: move |_| {
                                        criteria.write().toggle_company(company);
                                    },
                                    "{company.label()}"
                                }
                            }
                        }
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| criteria.set(ProblemCriteria::new()),
                            "Clear Filters"
                        }
                    }
                }
                if rows.is_empty() {
                    p { class: "empty", "No problems match your filters" }
                } else {
                    ul { class: "problem-list",
                        for row in rows {
                            li {
                                key: "{row.id}",
                                class: row_class(selected() == Some(row.id)),
                                onclick: move |_| {
                                    selected.set(Some(row.id));
                                    run_slot.write().reset();
                                    submit_message.set(None);
                                },
                                div { class: "problem-row-title",
                                    if row.solved {
                                        span { class: "solved-mark", "\u{2713}" }
                                    }
                                    span { "{row.title}" }
                                }
                                div { class: "problem-row-meta",
                                    span { class: row.difficulty_class, "{row.difficulty_label}" }
                                    for pill in row.topic_pills {
                                        span { class: "pill", key: "{pill}", "{pill}" }
                                    }
                                    if let Some(extra) = row.extra_topics_label {
                                        span { class: "pill pill--more", "{extra}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            section { class: "panel problem-workspace",
                if let Some(problem) = problem {
                    div { class: "problem-detail",
                        div { class: "panel-header",
                            h2 { "{problem.title}" }
                            span { class: difficulty_class(problem.difficulty), "{problem.difficulty.label()}" }
                        }
                        p { class: "problem-description", "{problem.description}" }
                        div { class: "pills",
                            for topic in problem.topics.iter() {
                                span { class: "pill", key: "{topic.label()}", "{topic.label()}" }
                            }
                            for company in problem.companies.iter() {
                                span { class: "pill pill--company", key: "{company.label()}", "{company.label()}" }
                            }
                        }
                        div { class: "editor-toolbar",
                            select {
                                value: "{language().label()}",
                                onchange: move |evt| {
                                    if let Some(lang) = Language::from_label(&evt.value()) {
                                        language.set(lang);
                                    }
                                },
                                for lang in Language::ALL {
                                    option {
                                        key: "{lang.label()}",
                                        value: "{lang.label()}",
                                        selected: language() == lang,
                                        "{lang.label()}"
                                    }
                                }
                            }
                        }
                        textarea {
                            class: "code-editor",
                            spellcheck: false,
                            value: "{code}",
                            oninput: move |evt| code.set(evt.value()),
                        }
                        div { class: "editor-actions",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                disabled: running,
                                onclick: on_run,
                                if running { "Running..." } else { "Run Code" }
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: on_submit,
                                "Submit"
                            }
                        }
                        if let Some(outcome) = run_result {
                            div { class: result_class(outcome),
                                "{outcome.message}"
                            }
                        }
                        if let Some(message) = submit_message() {
                            p { class: "submit-message", "{message}" }
                        }
                    }
                } else {
                    div { class: "problem-placeholder",
                        h2 { "Select a Problem" }
                        p { "Choose a problem from the list to start coding." }
                    }
                }
            }
        }
    }
}
