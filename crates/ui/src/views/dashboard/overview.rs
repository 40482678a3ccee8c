use dioxus::prelude::*;
use prep_core::model::{JobApplicationDraft, toggle_task};

use crate::context::AppContext;
use crate::vm::{format_date, map_application_row, map_progress};

fn check_class(done: bool) -> &'static str {
    if done { "task-check task-check--done" } else { "task-check" }
}

#[component]
pub fn OverviewPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    let mut study_plan = use_signal({
        let catalog = catalog.clone();
        move || catalog.study_plan()
    });
    let mut applications = use_signal({
        let catalog = catalog.clone();
        move || catalog.applications()
    });
    let progress = use_memo({
        let catalog = catalog.clone();
        move || map_progress(&catalog.progress())
    });
    let mut show_add = use_signal(|| false);
    let mut company = use_signal(String::new);
    let mut role = use_signal(String::new);
    let mut add_error = use_signal(|| None::<String>);

    let on_add = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = JobApplicationDraft {
            company: company(),
            role: role(),
        };
        match catalog.new_application(draft) {
            Ok(application) => {
                applications.write().push(application);
                company.set(String::new());
                role.set(String::new());
                add_error.set(None);
                show_add.set(false);
            }
            Err(err) => add_error.set(Some(err.to_string())),
        }
    };

    let progress = progress();
    let rows = applications
        .read()
        .iter()
        .map(map_application_row)
        .collect::<Vec<_>>();

    rsx! {
        div { class: "overview",
            section { class: "panel study-plan",
                div { class: "panel-header",
                    h2 { "Your Study Plan" }
                    span { class: "panel-meta", "Daily Progress" }
                }
                for task in study_plan.read().iter().cloned() {
                    div { class: "study-task", key: "{task.id}",
                        button {
                            class: check_class(task.completed),
                            r#type: "button",
                            aria_pressed: "{task.completed}",
                            onclick: move |_| {
                                toggle_task(&mut study_plan.write(), task.id);
                            },
                            if task.completed { "\u{2713}" } else { "\u{25cb}" }
                        }
                        div { class: "study-task-text",
                            h3 { "{task.title}" }
                            p { "{task.description}" }
                        }
                        span { class: "study-task-due", "Due: {format_date(task.due_date)}" }
                    }
                }
            }
            section { class: "panel progress",
                h2 { "Progress Overview" }
                div { class: "progress-row",
                    span { "Challenges Completed" }
                    span { class: "progress-value", "{progress.challenges_label}" }
                }
                div { class: "progress-bar",
                    div {
                        class: "progress-bar-fill",
                        style: "width: {progress.completion_percent}%",
                    }
                }
                div { class: "stat-grid",
                    div { class: "stat",
                        h3 { "Current Streak" }
                        p { "{progress.streak_label}" }
                    }
                    div { class: "stat",
                        h3 { "Mock Tests" }
                        p { "{progress.mock_tests_label}" }
                    }
                    div { class: "stat",
                        h3 { "Interviews" }
                        p { "{progress.interviews_label}" }
                    }
                }
                h3 { "Earned Badges" }
                div { class: "badges",
                    for badge in progress.badges.iter() {
                        span { class: "badge", key: "{badge}", "{badge}" }
                    }
                }
            }
            section { class: "panel applications",
                div { class: "panel-header",
                    h2 { "Job Applications" }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| show_add.set(true),
                        "Add Application"
                    }
                }
                if show_add() {
                    div { class: "modal",
                        div { class: "modal-card",
                            div { class: "modal-header",
                                h3 { "Add New Application" }
                                button {
                                    class: "btn btn-ghost",
                                    r#type: "button",
                                    onclick: move |_| {
                                        show_add.set(false);
                                        add_error.set(None);
                                    },
                                    "Close"
                                }
                            }
                            form { onsubmit: on_add,
                                if let Some(message) = add_error() {
                                    p { class: "form-error", "{message}" }
                                }
                                label { r#for: "application-company", "Company" }
                                input {
                                    id: "application-company",
                                    r#type: "text",
                                    required: true,
                                    value: "{company}",
                                    oninput: move |evt| company.set(evt.value()),
                                }
                                label { r#for: "application-role", "Role" }
                                input {
                                    id: "application-role",
                                    r#type: "text",
                                    required: true,
                                    value: "{role}",
                                    oninput: move |evt| role.set(evt.value()),
                                }
                                button { class: "btn btn-primary btn-block", r#type: "submit", "Add Application" }
                            }
                        }
                    }
                }
                table { class: "applications-table",
                    thead {
                        tr {
                            th { "Company" }
                            th { "Role" }
                            th { "Status" }
                            th { "Next Step" }
                        }
                    }
                    tbody {
                        for row in rows {
                            tr {
                                td { "{row.company}" }
                                td { "{row.role}" }
                                td {
                                    span { class: row.status_class, "{row.status_label}" }
                                }
                                td { "{row.next_step}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
