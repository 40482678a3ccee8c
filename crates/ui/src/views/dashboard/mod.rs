use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::{AppContext, AuthState};
use crate::routes::Route;

mod coding;
mod interviews;
mod overview;
mod soft_skills;

pub use coding::CodingPanel;
pub use interviews::InterviewsPanel;
pub use overview::OverviewPanel;
pub use soft_skills::SoftSkillsPanel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardTab {
    Overview,
    Coding,
    Interviews,
    SoftSkills,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Overview,
        DashboardTab::Coding,
        DashboardTab::Interviews,
        DashboardTab::SoftSkills,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Coding => "Coding Challenges",
            DashboardTab::Interviews => "Mock Interviews",
            DashboardTab::SoftSkills => "Soft Skills Training",
        }
    }
}

/// Class for a tab button, highlighting the active one.
pub(crate) fn tab_class(active: bool) -> &'static str {
    if active { "tab tab--active" } else { "tab" }
}

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthState>();
    let navigator = use_navigator();
    let mut active = use_signal(|| DashboardTab::Overview);

    let Some(user) = auth.current() else {
        return rsx! {
            div { class: "page dashboard-page dashboard-page--signed-out",
                h2 { "You are not signed in" }
                p { "Sign in to see your study plan, challenges and interviews." }
                Link { class: "btn btn-primary", to: Route::Login {}, "Go to login" }
            }
        };
    };

    let on_logout = move |_: MouseEvent| {
        let session = ctx.session();
        let mut user = auth.user;
        spawn(async move {
            if let Err(err) = session.logout().await {
                tracing::warn!(error = %err, "logout failed");
            }
            user.set(None);
            let _ = navigator.push(Route::Home {});
        });
    };

    rsx! {
        div { class: "page dashboard-page",
            header { class: "dashboard-header",
                Link { class: "brand", to: Route::Home {}, "SDE Prep" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: on_logout,
                    "Logout"
                }
            }
            h1 { class: "dashboard-welcome", "Welcome back, {user.display_name()}!" }
            nav { class: "tabs",
                for tab in DashboardTab::ALL {
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
                DashboardTab::Overview => rsx! { OverviewPanel {} },
                DashboardTab::Coding => rsx! { CodingPanel {} },
                DashboardTab::Interviews => rsx! { InterviewsPanel {} },
                DashboardTab::SoftSkills => rsx! { SoftSkillsPanel {} },
            }
        }
    }
}
