//! Public entry page hosting the auth form.
//!
//! An authenticated session is sent on to the dashboard (or to the
//! protected page it was bounced from).

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_form::AuthForm;
use crate::state::auth::AuthState;
use crate::util::auth::install_entry_redirect;

#[component]
pub fn IndexPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_entry_redirect(auth, use_navigate());

    view! {
        <div class="index-page">
            <div class="index-page__hero">
                <span class="index-page__badge">"Simple REST API"</span>
                <h1>"Authentication API"</h1>
                <p>
                    "A clean, minimalist REST API with user authentication. "
                    "Register, login, and manage user sessions with bearer tokens."
                </p>
            </div>
            <div class="index-page__form">
                <AuthForm/>
            </div>
        </div>
    }
}
