use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use services::{DEMO_PASSWORD, DEMO_USERNAME};

use crate::context::{AppContext, AuthState};
use crate::routes::Route;
use crate::views::{ViewError, ViewState};

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthState>();
    let navigator = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let submit = use_signal(|| ViewState::<()>::Idle);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submit.read().is_loading() {
            return;
        }
        let session = ctx.session();
        let mut user = auth.user;
        let mut submit = submit;
        spawn(async move {
            submit.set(ViewState::Loading);
            match session.login(&username(), &password()).await {
                Ok(signed_in) => {
                    user.set(Some(signed_in));
                    submit.set(ViewState::Ready(()));
                    let _ = navigator.push(Route::Dashboard {});
                }
                Err(err) => submit.set(ViewState::Error(ViewError::from(&err))),
            }
        });
    };

    let busy = submit.read().is_loading();
    let error = match &*submit.read() {
        ViewState::Error(err) => Some(err.message()),
        _ => None,
    };

    rsx! {
        div { class: "page auth-page",
            form { class: "auth-card", onsubmit: on_submit,
                h2 { "Sign in to your account" }
                if let Some(message) = error {
                    p { class: "form-error", role: "alert", "{message}" }
                }
                label { r#for: "login-username", "Username" }
                input {
                    id: "login-username",
                    r#type: "text",
                    required: true,
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
                label { r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    r#type: "password",
                    required: true,
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Signing in..." } else { "Sign in" }
                }
                p { class: "form-hint", "Demo account: {DEMO_USERNAME} / {DEMO_PASSWORD}" }
                p { class: "form-footer",
                    "Don't have an account? "
                    Link { to: Route::Signup {}, "Sign up" }
                }
            }
        }
    }
}

#[component]
pub fn SignupView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthState>();
    let navigator = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let submit = use_signal(|| ViewState::<()>::Idle);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submit.read().is_loading() {
            return;
        }
        let session = ctx.session();
        let mut user = auth.user;
        let mut submit = submit;
        spawn(async move {
            submit.set(ViewState::Loading);
            match session
                .signup(&username(), &password(), &email(), &name())
                .await
            {
                Ok(created) => {
                    user.set(Some(created));
                    submit.set(ViewState::Ready(()));
                    let _ = navigator.push(Route::Dashboard {});
                }
                Err(err) => submit.set(ViewState::Error(ViewError::from(&err))),
            }
        });
    };

    let busy = submit.read().is_loading();
    let error = match &*submit.read() {
        ViewState::Error(err) => Some(err.message()),
        _ => None,
    };

    rsx! {
        div { class: "page auth-page",
            form { class: "auth-card", onsubmit: on_submit,
                h2 { "Create your account" }
                if let Some(message) = error {
                    p { class: "form-error", role: "alert", "{message}" }
                }
                label { r#for: "signup-name", "Full name" }
                input {
                    id: "signup-name",
                    r#type: "text",
                    required: true,
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                label { r#for: "signup-email", "Email" }
                input {
                    id: "signup-email",
                    r#type: "email",
                    required: true,
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                label { r#for: "signup-username", "Username" }
                input {
                    id: "signup-username",
                    r#type: "text",
                    required: true,
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
                label { r#for: "signup-password", "Password" }
                input {
                    id: "signup-password",
                    r#type: "password",
                    required: true,
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Creating account..." } else { "Sign up" }
                }
                p { class: "form-footer",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
