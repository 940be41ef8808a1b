//! Left navigation rail with the profile popup and sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links follow the router location; sign-out goes through `run_operation`
//! like every other auth operation, and the route guard swaps to the auth
//! forms once the store reports no user.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::net::identity::{AuthError, IdentityProvider};
use crate::state::auth::{AuthAction, AuthOperation, AuthState};
use crate::state::ui::{SIDEBAR_LINKS, is_active_path};
use crate::util::auth::run_operation;
#[cfg(feature = "hydrate")]
use crate::util::auth::dispatch;

/// Sign out with the store lifecycle.
///
/// # Errors
///
/// The provider error, already recorded in the store.
pub async fn submit_sign_out<P, D>(provider: &P, dispatch: &D) -> Result<(), AuthError>
where
    P: IdentityProvider + ?Sized,
    D: Fn(AuthAction),
{
    run_operation(dispatch, AuthOperation::SignOut, async {
        provider.sign_out().await.map(|()| None)
    })
    .await?;
    Ok(())
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let profile_open = RwSignal::new(false);
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let identity = StoredValue::new(expect_context::<crate::app::AppIdentity>());

    let account_label = move || {
        auth.with(|s| {
            s.user
                .as_ref()
                .map_or_else(|| "User".to_owned(), |u| u.display_label().to_owned())
        })
    };
    let account_email = move || auth.with(|s| s.user.as_ref().and_then(|u| u.email.clone()));

    let on_sign_out = move |_| {
        profile_open.set(false);
        #[cfg(feature = "hydrate")]
        {
            let provider = identity.get_value();
            leptos::task::spawn_local(async move {
                let send = move |action| dispatch(auth, action);
                let _ = submit_sign_out(&provider, &send).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = auth;
    };

    view! {
        <aside class="sidebar">
            <nav class="sidebar__links">
                {SIDEBAR_LINKS
                    .into_iter()
                    .map(|link| {
                        view! {
                            <A href=link.path>
                                <span
                                    title=link.label
                                    class="sidebar__icon"
                                    class:sidebar__icon--active=move || {
                                        pathname.with(|path| is_active_path(link.path, path))
                                    }
                                >
                                    {link.label.chars().next().map(String::from).unwrap_or_default()}
                                </span>
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar__profile">
                <button
                    class="sidebar__icon"
                    class:sidebar__icon--active=move || profile_open.get()
                    aria-label="Account"
                    on:click=move |_| profile_open.update(|open| *open = !*open)
                >
                    "◉"
                </button>
                <Show when=move || profile_open.get()>
                    <div class="sidebar__popup" on:click=|ev| ev.stop_propagation()>
                        <div class="sidebar__popup-user">
                            <div class="sidebar__popup-label">"Signed in as"</div>
                            <div class="sidebar__popup-name">{account_label}</div>
                            {move || {
                                account_email()
                                    .map(|email| view! { <div class="sidebar__popup-email">{email}</div> })
                            }}
                        </div>
                        <button class="btn sidebar__logout" on:click=on_sign_out>
                            "Sign Out"
                        </button>
                    </div>
                </Show>
            </div>
        </aside>
    }
}
