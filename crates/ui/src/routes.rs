use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};

use crate::context::{AppContext, AuthState};
use crate::views::{DashboardView, HomeView, LoginView, SignupView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/login", LoginView)] Login {},
        #[route("/signup", SignupView)] Signup {},
    #[end_layout]
    #[route("/dashboard", DashboardView)] Dashboard {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            SiteHeader {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

/// Top navigation for the public pages. The dashboard renders its own header.
#[component]
pub fn SiteHeader() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthState>();
    let navigator = use_navigator();
    let mut menu_open = use_signal(|| false);

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

    let nav_class = if menu_open() {
        "site-nav site-nav--open"
    } else {
        "site-nav"
    };

    rsx! {
        header { class: "site-header",
            Link { class: "brand", to: Route::Home {}, "SDE Prep" }
            button {
                class: "menu-toggle",
                r#type: "button",
                onclick: move |_| menu_open.set(!menu_open()),
                if menu_open() { "Close" } else { "Menu" }
            }
            nav { class: nav_class,
                Link { to: Route::Home {}, "Home" }
                if auth.is_authenticated() {
                    Link { to: Route::Dashboard {}, "Dashboard" }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: on_logout,
                        "Logout"
                    }
                } else {
                    Link { class: "nav-login", to: Route::Login {}, "Login" }
                    Link { class: "btn btn-primary", to: Route::Signup {}, "Sign Up" }
                }
            }
        }
    }
}
