use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use prep_core::model::User;
use prep_core::time::fixed_clock;
use services::{AppServices, AuthConfig, CatalogService, CodeRunner, SessionStore};

use crate::context::{AuthState, UiApp, build_app_context};
use crate::routes::SiteHeader;
use crate::views::{
    CodingPanel, DashboardView, HomeView, InterviewsPanel, LoginView, OverviewPanel,
    SignupView, SoftSkillsPanel,
};

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn session(&self) -> Arc<SessionStore> {
        self.services.session()
    }

    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn code_runner(&self) -> Arc<CodeRunner> {
        self.services.code_runner()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Login,
    Signup,
    Dashboard,
    Overview,
    Coding,
    Interviews,
    SoftSkills,
    Header,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    user: Option<User>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let user = props.user.clone();
    use_context_provider(move || AuthState::new(user));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Signup => rsx! { SignupView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Overview => rsx! { OverviewPanel {} },
        ViewKind::Coding => rsx! { CodingPanel {} },
        ViewKind::Interviews => rsx! { InterviewsPanel {} },
        ViewKind::SoftSkills => rsx! { SoftSkillsPanel {} },
        ViewKind::Header => rsx! { SiteHeader {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, user: Option<User>) -> ViewHarness {
    let app = Arc::new(TestApp {
        services: AppServices::in_memory(fixed_clock(), AuthConfig::instant()),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view, user });
    ViewHarness { dom }
}

/// Build, render once, and return the markup.
pub fn render_view(view: ViewKind, user: Option<User>) -> String {
    let mut harness = setup_view_harness(view, user);
    harness.rebuild();
    harness.render()
}
