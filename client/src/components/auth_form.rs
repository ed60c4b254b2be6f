//! Login / register form with client-side validation.
//!
//! Validation runs before any service call; service failures are reported
//! by the session controller as notices. Field failures reported by the
//! host are shown on the field like local ones.

use leptos::prelude::*;

use crate::app::AppAuth;
#[cfg(feature = "hydrate")]
use crate::net::error::AuthError;
use crate::net::error::{Field, ValidationError};
use crate::state::auth::AuthState;
use crate::util::validation::{validate_login, validate_register};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Login,
    Register,
}

#[component]
pub fn AuthForm() -> impl IntoView {
    let controller = expect_context::<AppAuth>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let tab = RwSignal::new(Tab::Login);
    let field_error = RwSignal::new(None::<ValidationError>);

    let login_email = RwSignal::new(String::new());
    let login_password = RwSignal::new(String::new());

    let reg_name = RwSignal::new(String::new());
    let reg_email = RwSignal::new(String::new());
    let reg_password = RwSignal::new(String::new());
    let reg_confirm = RwSignal::new(String::new());

    let busy = move || auth.with(|s| s.submitting);
    let error_for = move |field: Field| {
        move || {
            field_error
                .get()
                .filter(|e| e.field == field)
                .map(|e| view! { <p class="auth-form__error">{e.message}</p> })
        }
    };

    let switch_to = move |next: Tab| {
        tab.set(next);
        field_error.set(None);
    };

    let login_controller = controller.clone();
    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        match validate_login(&login_email.get(), &login_password.get()) {
            Err(e) => field_error.set(Some(e)),
            Ok(data) => {
                field_error.set(None);
                #[cfg(feature = "hydrate")]
                {
                    let controller = login_controller.clone();
                    leptos::task::spawn_local(async move {
                        match controller.login(data).await {
                            Err(AuthError::Validation(e)) => field_error.set(Some(e)),
                            Err(e) => log::error!("Login error: {e}"),
                            Ok(_) => {}
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (&login_controller, data);
                }
            }
        }
    };

    let register_controller = controller;
    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        match validate_register(&reg_name.get(), &reg_email.get(), &reg_password.get(), &reg_confirm.get()) {
            Err(e) => field_error.set(Some(e)),
            Ok(data) => {
                field_error.set(None);
                #[cfg(feature = "hydrate")]
                {
                    let controller = register_controller.clone();
                    leptos::task::spawn_local(async move {
                        match controller.register(data).await {
                            Err(AuthError::Validation(e)) => field_error.set(Some(e)),
                            Err(e) => log::error!("Registration error: {e}"),
                            Ok(_) => {}
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (&register_controller, data);
                }
            }
        }
    };

    view! {
        <div class="auth-card">
            <h2 class="auth-card__title">"Welcome"</h2>
            <p class="auth-card__subtitle">
                {move || match tab.get() {
                    Tab::Login => "Sign in to your account",
                    Tab::Register => "Create your account",
                }}
            </p>
            <div class="auth-tabs" role="tablist">
                <button
                    class="auth-tabs__tab"
                    class:auth-tabs__tab--active=move || tab.get() == Tab::Login
                    on:click=move |_| switch_to(Tab::Login)
                >
                    "Login"
                </button>
                <button
                    class="auth-tabs__tab"
                    class:auth-tabs__tab--active=move || tab.get() == Tab::Register
                    on:click=move |_| switch_to(Tab::Register)
                >
                    "Register"
                </button>
            </div>
            <Show
                when=move || tab.get() == Tab::Login
                fallback=move || {
                    view! {
                        <form class="auth-form" on:submit=on_register.clone()>
                            <label for="register-name">"Name"</label>
                            <input
                                id="register-name"
                                type="text"
                                placeholder="John Doe"
                                prop:value=move || reg_name.get()
                                on:input=move |ev| reg_name.set(event_target_value(&ev))
                            />
                            {error_for(Field::Name)}
                            <label for="register-email">"Email"</label>
                            <input
                                id="register-email"
                                type="email"
                                placeholder="you@example.com"
                                prop:value=move || reg_email.get()
                                on:input=move |ev| reg_email.set(event_target_value(&ev))
                            />
                            {error_for(Field::Email)}
                            <label for="register-password">"Password"</label>
                            <input
                                id="register-password"
                                type="password"
                                placeholder="••••••••"
                                prop:value=move || reg_password.get()
                                on:input=move |ev| reg_password.set(event_target_value(&ev))
                            />
                            {error_for(Field::Password)}
                            <label for="register-confirm">"Confirm Password"</label>
                            <input
                                id="register-confirm"
                                type="password"
                                placeholder="••••••••"
                                prop:value=move || reg_confirm.get()
                                on:input=move |ev| reg_confirm.set(event_target_value(&ev))
                            />
                            {error_for(Field::ConfirmPassword)}
                            <button class="auth-form__submit" type="submit" disabled=busy>
                                {move || if busy() { "Creating account..." } else { "Create Account" }}
                            </button>
                        </form>
                    }
                }
            >
                <form class="auth-form" on:submit=on_login.clone()>
                    <label for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || login_email.get()
                        on:input=move |ev| login_email.set(event_target_value(&ev))
                    />
                    {error_for(Field::Email)}
                    <label for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        type="password"
                        placeholder="••••••••"
                        prop:value=move || login_password.get()
                        on:input=move |ev| login_password.set(event_target_value(&ev))
                    />
                    {error_for(Field::Password)}
                    <button class="auth-form__submit" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
