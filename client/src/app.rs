//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::require_auth::RequireAuth;
use crate::components::toasts::Toasts;
use crate::config::AuthConfig;
use crate::net::service::Backend;
use crate::pages::{dashboard::DashboardPage, index::IndexPage, not_found::NotFoundPage};
use crate::state::session::AuthController;
use crate::util::token_store::LocalStorageTokenStore;

/// The session controller type the app provides through context.
pub type AppAuth = AuthController<Backend, LocalStorageTokenStore>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the one session controller for this page, provides it and its
/// signals to descendants, and kicks off the stored-token check in the
/// browser. Server renders stay in the initializing state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AuthConfig::from_build_env();
    let controller: AppAuth =
        AuthController::new(Backend::from_config(&config), LocalStorageTokenStore::new(config.token_key));

    provide_context(controller.state());
    provide_context(controller.notices());
    provide_context(controller.clone());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        controller.restore().await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/authpad.css"/>
        <Title text="Authentication API"/>

        <Router>
            <Toasts/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=IndexPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
