use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::{AppContext, AuthState};
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context_provider(|| AuthState::new(None));

    // Restore the persisted identity once per launch.
    let session = ctx.session();
    use_future(move || {
        let session = session.clone();
        let mut user = auth.user;
        async move {
            match session.init().await {
                Ok(restored) => user.set(restored),
                Err(err) => tracing::warn!(error = %err, "could not restore session"),
            }
        }
    });

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "SDE Prep" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
