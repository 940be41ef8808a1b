//! Sign-in and sign-up forms shown to unauthenticated visitors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the route guard on every route while no session exists.
//! Field values live in local signals; only operation lifecycle and provider
//! errors reach the auth store, through `run_operation`.
//!
//! ERROR HANDLING
//! ==============
//! Local validation failures render inside the form and never call the
//! provider. Provider failures land in `AuthState.error` and render in a
//! banner that clears the error when clicked.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::identity::{AuthError, IdentityProvider, OAuthProvider};
use crate::net::provider::RestIdentityProvider;
use crate::state::auth::{AuthAction, AuthOperation, AuthState};
use crate::util::auth::{dispatch, run_operation};

/// `minlength` applied to password inputs.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// Rejected before reaching the provider.
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Provider(#[from] AuthError),
}

/// Check sign-in fields.
///
/// # Errors
///
/// Returns the message to show when email or password is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Please enter your email and password.".to_owned());
    }
    Ok(())
}

/// Check sign-up fields. Confirmation mismatch is reported first.
///
/// # Errors
///
/// Returns the message to show when the fields are incomplete or the
/// passwords differ.
pub fn validate_register_input(email: &str, password: &str, confirm: &str) -> Result<(), String> {
    if password != confirm {
        return Err("Passwords do not match".to_owned());
    }
    validate_login_input(email, password)
}

/// Validate, then sign in through the provider with the store lifecycle.
///
/// # Errors
///
/// [`FormError::Invalid`] without touching the store, or the provider error.
pub async fn submit_sign_in<P, D>(provider: &P, dispatch: &D, email: &str, password: &str) -> Result<(), FormError>
where
    P: IdentityProvider + ?Sized,
    D: Fn(AuthAction),
{
    validate_login_input(email, password).map_err(FormError::Invalid)?;
    let email = email.trim();
    run_operation(dispatch, AuthOperation::SignIn, async {
        provider.sign_in(email, password).await.map(Some)
    })
    .await?;
    Ok(())
}

/// Validate, then register through the provider with the store lifecycle.
///
/// # Errors
///
/// [`FormError::Invalid`] without touching the store, or the provider error.
pub async fn submit_register<P, D>(
    provider: &P,
    dispatch: &D,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), FormError>
where
    P: IdentityProvider + ?Sized,
    D: Fn(AuthAction),
{
    validate_register_input(email, password, confirm).map_err(FormError::Invalid)?;
    let email = email.trim();
    run_operation(dispatch, AuthOperation::Register, async {
        provider.register(email, password).await.map(Some)
    })
    .await?;
    Ok(())
}

/// Run the OAuth popup flow with the store lifecycle.
///
/// # Errors
///
/// The provider error, already recorded in the store.
pub async fn submit_oauth<P, D>(provider: &P, dispatch: &D, oauth: OAuthProvider) -> Result<(), AuthError>
where
    P: IdentityProvider + ?Sized,
    D: Fn(AuthAction),
{
    run_operation(dispatch, AuthOperation::OAuth, async {
        provider.sign_in_with_oauth(oauth).await.map(Some)
    })
    .await?;
    Ok(())
}

#[cfg(feature = "hydrate")]
fn spawn_oauth(auth: RwSignal<AuthState>, provider: crate::app::AppIdentity) {
    leptos::task::spawn_local(async move {
        let send = move |action| dispatch(auth, action);
        let _ = submit_oauth(&provider, &send, OAuthProvider::Google).await;
    });
}

/// Toggle between the sign-in and sign-up forms.
#[component]
pub fn AuthPage() -> impl IntoView {
    let login_mode = RwSignal::new(true);
    let toggle = Callback::new(move |()| login_mode.update(|m| *m = !*m));

    view! {
        <div class="login-page">
            <Show
                when=move || login_mode.get()
                fallback=move || view! { <RegisterForm on_toggle=toggle /> }
            >
                <LoginForm on_toggle=toggle />
            </Show>
        </div>
    }
}

/// Provider error from the store; clicking it acknowledges the error.
#[component]
fn StoreErrorBanner() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    view! {
        <Show when=move || auth.with(|s| s.error.is_some())>
            <p
                class="login-message login-message--error"
                role="alert"
                on:click=move |_| dispatch(auth, AuthAction::ErrorCleared)
            >
                {move || auth.with(|s| s.error.clone().unwrap_or_default())}
            </p>
        </Show>
    }
}

#[component]
pub fn LoginForm(on_toggle: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let local_error = RwSignal::new(None::<String>);
    let loading = move || auth.with(|s| s.loading);
    let identity = StoredValue::new(expect_context::<crate::app::AppIdentity>());
    let configured = identity.with_value(RestIdentityProvider::is_configured);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        if let Err(message) = validate_login_input(&email_value, &password_value) {
            local_error.set(Some(message));
            return;
        }
        local_error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let provider = identity.get_value();
            leptos::task::spawn_local(async move {
                let send = move |action| dispatch(auth, action);
                let _ = submit_sign_in(&provider, &send, &email_value, &password_value).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value);
    };

    let on_google = move |_| {
        if loading() {
            return;
        }
        #[cfg(feature = "hydrate")]
        spawn_oauth(auth, identity.get_value());
    };

    view! {
        <form class="login-card login-form" on:submit=on_submit>
            <h1>"Sign In"</h1>
            <StoreErrorBanner />
            <label class="login-label" for="email">"Email"</label>
            <input
                id="email"
                class="login-input"
                type="email"
                placeholder="Email"
                required=true
                disabled=loading
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <label class="login-label" for="password">"Password"</label>
            <input
                id="password"
                class="login-input"
                type="password"
                placeholder="Password"
                required=true
                minlength=MIN_PASSWORD_LEN.to_string()
                disabled=loading
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <Show when=move || local_error.get().is_some()>
                <p class="login-message">{move || local_error.get().unwrap_or_default()}</p>
            </Show>
            <button class="login-button" type="submit" disabled=loading>
                {move || if loading() { "Signing In..." } else { "Sign In" }}
            </button>
            <Show
                when=move || configured
                fallback=|| view! { <p class="login-message">"Sign-in is not configured."</p> }
            >
                <button class="login-button login-button--secondary" type="button" disabled=loading on:click=on_google>
                    "Sign In with Google"
                </button>
            </Show>
            <p class="login-link">
                "Don't have an account? "
                <a
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        on_toggle.run(());
                    }
                >
                    "Sign Up"
                </a>
            </p>
        </form>
    }
}

#[component]
pub fn RegisterForm(on_toggle: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let local_error = RwSignal::new(None::<String>);
    let loading = move || auth.with(|s| s.loading);
    let identity = StoredValue::new(expect_context::<crate::app::AppIdentity>());
    let configured = identity.with_value(RestIdentityProvider::is_configured);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        let confirm_value = confirm.get();
        if let Err(message) = validate_register_input(&email_value, &password_value, &confirm_value) {
            local_error.set(Some(message));
            return;
        }
        local_error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let provider = identity.get_value();
            leptos::task::spawn_local(async move {
                let send = move |action| dispatch(auth, action);
                let _ = submit_register(&provider, &send, &email_value, &password_value, &confirm_value).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value, confirm_value);
    };

    let on_google = move |_| {
        if loading() {
            return;
        }
        #[cfg(feature = "hydrate")]
        spawn_oauth(auth, identity.get_value());
    };

    view! {
        <form class="login-card login-form" on:submit=on_submit>
            <h1>"Sign Up"</h1>
            <StoreErrorBanner />
            <label class="login-label" for="email">"Email"</label>
            <input
                id="email"
                class="login-input"
                type="email"
                placeholder="Email"
                required=true
                disabled=loading
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <label class="login-label" for="password">"Password"</label>
            <input
                id="password"
                class="login-input"
                type="password"
                placeholder="Password"
                required=true
                minlength=MIN_PASSWORD_LEN.to_string()
                disabled=loading
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <label class="login-label" for="confirm-password">"Confirm Password"</label>
            <input
                id="confirm-password"
                class="login-input"
                type="password"
                placeholder="Confirm Password"
                required=true
                minlength=MIN_PASSWORD_LEN.to_string()
                disabled=loading
                prop:value=move || confirm.get()
                on:input=move |ev| confirm.set(event_target_value(&ev))
            />
            <Show when=move || local_error.get().is_some()>
                <p class="login-message">{move || local_error.get().unwrap_or_default()}</p>
            </Show>
            <button class="login-button" type="submit" disabled=loading>
                {move || if loading() { "Creating Account..." } else { "Sign Up" }}
            </button>
            <Show
                when=move || configured
                fallback=|| view! { <p class="login-message">"Sign-in is not configured."</p> }
            >
                <button class="login-button login-button--secondary" type="button" disabled=loading on:click=on_google>
                    "Sign Up with Google"
                </button>
            </Show>
            <p class="login-link">
                "Already have an account? "
                <a
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        on_toggle.run(());
                    }
                >
                    "Sign In"
                </a>
            </p>
        </form>
    }
}
