//! Sign-in and registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both forms validate locally first, then run the simulated request from
//! `net::auth_api`. A completed sign-in flips `AuthState::signed_in`, and the
//! page-level redirect moves on to the dashboard.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::site_header::SiteHeader;
use crate::net::auth_api::{AuthConfig, simulate_login, simulate_register};
use crate::state::auth::{AuthMode, AuthState};
use crate::util::auth::install_signed_in_redirect;
use crate::util::forms::{Field, FormErrors, LoginForm, RegisterForm, validate_login, validate_register};
use crate::util::password::password_strength;

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("Smart Insights", "AI-powered analysis of your spending patterns and financial habits"),
    ("Goal Tracking", "Set and monitor financial goals with personalized recommendations"),
    ("Secure & Private", "Bank-level security with complete control over your financial data"),
];

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_signed_in_redirect(auth, use_navigate());

    let is_login = move || auth.get().mode == AuthMode::Login;

    view! {
        <div class="auth-page">
            <SiteHeader/>
            <main class="auth-page__main">
                <div class="auth-page__brand">
                    <h1>"Budgey.ai"</h1>
                    <p>"Smart personal finance insights"</p>
                </div>

                <Show when=move || auth.get().notice.is_some()>
                    <p class="auth-notice" role="status">{move || auth.get().notice.unwrap_or_default()}</p>
                </Show>

                <Show when=is_login fallback=|| view! { <RegisterPanel/> }>
                    <LoginPanel/>
                </Show>

                <p class="auth-page__switch">
                    {move || if is_login() { "Don't have an account? " } else { "Already have an account? " }}
                    <button type="button" class="link-button" on:click=move |_| auth.update(AuthState::switch_mode)>
                        {move || if is_login() { "Create one now" } else { "Sign in instead" }}
                    </button>
                </p>
            </main>

            <section class="auth-highlights">
                <h2>"Why choose Budgey.ai?"</h2>
                <div class="auth-highlights__grid">
                    {HIGHLIGHTS
                        .iter()
                        .map(|(title, blurb)| {
                            view! {
                                <div class="auth-highlight">
                                    <h3>{*title}</h3>
                                    <p>{*blurb}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}

/// Per-field validation message.
#[component]
fn FieldError(errors: RwSignal<FormErrors>, field: Field, id: &'static str) -> impl IntoView {
    view! {
        <Show when=move || errors.get().get(field).is_some()>
            <p id=id class="field-error" role="alert" aria-live="polite">
                {move || errors.get().get(field).unwrap_or_default()}
            </p>
        </Show>
    }
}

/// Submit-level error from the simulated request.
#[component]
fn SubmitError(auth: RwSignal<AuthState>) -> impl IntoView {
    view! {
        <Show when=move || auth.get().error.is_some()>
            <div class="form-alert" role="alert" aria-live="polite">
                {move || auth.get().error.unwrap_or_default()}
            </div>
        </Show>
    }
}

fn input_class(errors: RwSignal<FormErrors>, field: Field) -> impl Fn() -> &'static str + Copy {
    move || {
        if errors.get().get(field).is_some() { "form-input form-input--invalid" } else { "form-input" }
    }
}

#[component]
fn LoginPanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let loading = move || auth.get().loading;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        let form = LoginForm { email: email.get_untracked(), password: password.get_untracked() };
        if let Err(found) = validate_login(&form) {
            errors.set(found);
            return;
        }
        errors.set(FormErrors::default());
        auth.update(AuthState::begin_request);
        leptos::task::spawn_local(async move {
            match simulate_login(AuthConfig::default(), &form).await {
                Ok(()) => auth.update(AuthState::complete_login),
                Err(err) => auth.update(|state| state.fail_request(err.to_string())),
            }
        });
    };

    view! {
        <div class="auth-card">
            <h2>"Welcome back"</h2>
            <p class="auth-card__subtitle">"Sign in to your account"</p>
            <form class="auth-form" on:submit=on_submit novalidate>
                <SubmitError auth=auth/>

                <label for="email" class="form-label">"Email address"</label>
                <input
                    id="email"
                    type="email"
                    autocomplete="email"
                    placeholder="Enter your email"
                    class=input_class(errors, Field::Email)
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    disabled=loading
                />
                <FieldError errors=errors field=Field::Email id="email-error"/>

                <label for="password" class="form-label">"Password"</label>
                <input
                    id="password"
                    type="password"
                    autocomplete="current-password"
                    placeholder="Enter your password"
                    class=input_class(errors, Field::Password)
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    disabled=loading
                />
                <FieldError errors=errors field=Field::Password id="password-error"/>

                <div class="auth-form__row">
                    <label class="form-check">
                        <input id="remember-me" name="remember-me" type="checkbox"/>
                        "Remember me"
                    </label>
                    <button type="button" class="link-button">"Forgot password?"</button>
                </div>

                <button type="submit" class="btn btn--primary btn--block" disabled=loading>
                    {move || if loading() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn RegisterPanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let accept_terms = RwSignal::new(false);
    let errors = RwSignal::new(FormErrors::default());
    let loading = move || auth.get().loading;
    let strength = move || password_strength(&password.get());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        let form = RegisterForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
            accept_terms: accept_terms.get_untracked(),
        };
        if let Err(found) = validate_register(&form) {
            errors.set(found);
            return;
        }
        errors.set(FormErrors::default());
        auth.update(AuthState::begin_request);
        leptos::task::spawn_local(async move {
            match simulate_register(AuthConfig::default(), &form).await {
                Ok(()) => auth.update(AuthState::complete_registration),
                Err(err) => auth.update(|state| state.fail_request(err.to_string())),
            }
        });
    };

    view! {
        <div class="auth-card">
            <h2>"Create your account"</h2>
            <p class="auth-card__subtitle">"Join Budgey.ai and start managing your finances"</p>
            <form class="auth-form" on:submit=on_submit novalidate>
                <SubmitError auth=auth/>

                <label for="register-email" class="form-label">"Email address"</label>
                <input
                    id="register-email"
                    type="email"
                    autocomplete="email"
                    placeholder="Enter your email"
                    class=input_class(errors, Field::Email)
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    disabled=loading
                />
                <FieldError errors=errors field=Field::Email id="register-email-error"/>

                <label for="register-password" class="form-label">"Password"</label>
                <input
                    id="register-password"
                    type="password"
                    autocomplete="new-password"
                    placeholder="Create a password"
                    class=input_class(errors, Field::Password)
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    disabled=loading
                />
                <Show when=move || !password.get().is_empty()>
                    <div class="strength-meter">
                        <div class="strength-meter__track">
                            <div
                                class=move || strength().level.class()
                                style=move || format!("width: {}%", strength().percent())
                            ></div>
                        </div>
                        <span class="strength-meter__label">{move || strength().level.label()}</span>
                    </div>
                </Show>
                <FieldError errors=errors field=Field::Password id="register-password-error"/>

                <label for="confirm-password" class="form-label">"Confirm password"</label>
                <input
                    id="confirm-password"
                    type="password"
                    autocomplete="new-password"
                    placeholder="Confirm your password"
                    class=input_class(errors, Field::ConfirmPassword)
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                    disabled=loading
                />
                <FieldError errors=errors field=Field::ConfirmPassword id="confirm-password-error"/>

                <label class="form-check">
                    <input
                        id="accept-terms"
                        type="checkbox"
                        prop:checked=move || accept_terms.get()
                        on:change=move |ev| accept_terms.set(event_target_checked(&ev))
                        disabled=loading
                    />
                    "I agree to the Terms of Service and Privacy Policy"
                </label>
                <FieldError errors=errors field=Field::AcceptTerms id="accept-terms-error"/>

                <button type="submit" class="btn btn--primary btn--block" disabled=loading>
                    {move || if loading() { "Creating account..." } else { "Create account" }}
                </button>
            </form>
        </div>
    }
}
