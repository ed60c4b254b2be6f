//! Dashboard page for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the protected landing route. `App` wraps it in `RequireAuth`, so
//! by the time it renders the session holds a user.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppAuth;
use crate::state::auth::AuthState;
use crate::util::auth::ENTRY_ROUTE;
use crate::util::token_store::TokenStore;

/// One row of the endpoint reference card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ApiEndpoint {
    pub name: &'static str,
    pub path: &'static str,
    pub method: &'static str,
}

pub(crate) const API_ENDPOINTS: [ApiEndpoint; 3] = [
    ApiEndpoint { name: "Register User", path: "/register", method: "POST" },
    ApiEndpoint { name: "User Login", path: "/login", method: "POST" },
    ApiEndpoint { name: "Get User Profile", path: "/profile", method: "GET" },
];

pub(crate) const TOKEN_USAGE_HINT: &str = "Authorization: Bearer [your-token]";

/// Text for the token card: the stored token, or a placeholder.
pub(crate) fn token_display(token: Option<String>) -> String {
    token.filter(|t| !t.trim().is_empty()).unwrap_or_else(|| "No token found".to_owned())
}

pub(crate) fn greeting(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => format!("Welcome, {name}"),
        _ => "Welcome".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let controller = expect_context::<AppAuth>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let stored_token = token_display(controller.tokens().get());

    let on_logout = move |_| {
        let revoke = controller.logout();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(revoke);
        #[cfg(not(feature = "hydrate"))]
        drop(revoke);
        navigate(ENTRY_ROUTE, NavigateOptions::default());
    };

    let user_name = move || auth.with(|s| greeting(s.user.as_ref().map(|u| u.name.as_str())));
    let user_email = move || auth.with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <div>
                    <h1>{user_name}</h1>
                    <p class="dashboard-page__email">{user_email}</p>
                </div>
                <button class="btn dashboard-page__logout" on:click=on_logout>
                    "Sign Out"
                </button>
            </header>

            <section class="endpoint-card">
                <h2 class="endpoint-card__title">"API Endpoints"</h2>
                <ul class="endpoint-card__list">
                    {API_ENDPOINTS
                        .iter()
                        .map(|ep| {
                            view! {
                                <li class="endpoint">
                                    <div class="endpoint__row">
                                        <h3>{ep.name}</h3>
                                        <span class="endpoint__method">{ep.method}</span>
                                    </div>
                                    <code class="endpoint__path">{ep.path}</code>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </section>

            <section class="token-card">
                <h2 class="token-card__title">"Your Authentication Token"</h2>
                <pre class="token-card__value">{stored_token}</pre>
                <p class="token-card__hint">
                    "Use this token in the Authorization header for authenticated requests:"
                    <br/>
                    <code>{TOKEN_USAGE_HINT}</code>
                </p>
            </section>
        </div>
    }
}
