//! Fallback page for unknown routes.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let pathname = use_location().pathname;
    Effect::new(move || {
        log::error!("404: no route for {}", pathname.get());
    });

    view! {
        <div class="not-found-page">
            <span class="not-found-page__code">"404"</span>
            <h1>"Page not found"</h1>
            <p>"Sorry, we couldn't find the page you're looking for."</p>
            <a class="btn" href="/">"Return to Home"</a>
        </div>
    }
}
