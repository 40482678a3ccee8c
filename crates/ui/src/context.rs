use std::sync::Arc;

use dioxus::prelude::*;
use prep_core::model::User;
use services::{CatalogService, CodeRunner, SessionStore};

pub trait UiApp: Send + Sync {
    fn session(&self) -> Arc<SessionStore>;
    fn catalog(&self) -> Arc<CatalogService>;
    fn code_runner(&self) -> Arc<CodeRunner>;
}

#[derive(Clone)]
pub struct AppContext {
    session: Arc<SessionStore>,
    catalog: Arc<CatalogService>,
    code_runner: Arc<CodeRunner>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session: app.session(),
            catalog: app.catalog(),
            code_runner: app.code_runner(),
        }
    }

    #[must_use]
    pub fn session(&self) -> Arc<SessionStore> {
        Arc::clone(&self.session)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn code_runner(&self) -> Arc<CodeRunner> {
        Arc::clone(&self.code_runner)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Reactive copy of the signed-in identity.
///
/// `SessionStore` stays the source of truth; views update this after every
/// successful login, signup, logout, or restore so they re-render.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthState {
    pub user: Signal<Option<User>>,
}

impl AuthState {
    /// Must be called inside a component scope.
    #[must_use]
    pub fn new(initial: Option<User>) -> Self {
        Self {
            user: Signal::new(initial),
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<User> {
        self.user.read().clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }
}
