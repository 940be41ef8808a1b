//! Route guard for the authenticated area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every dashboard route. Until the provider reports its first session
//! the guard shows a loading indicator; afterwards it renders either the auth
//! forms or the children. Operation `loading` flags never send it back to the
//! loading screen.

use leptos::prelude::*;

use crate::pages::login::AuthPage;
use crate::state::auth::AuthState;
use crate::util::auth::GuardState;

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let guard = Memo::new(move |prev: Option<&GuardState>| {
        auth.with(|state| match prev {
            Some(prev) => prev.advance(state),
            None => GuardState::from_auth(state),
        })
    });

    move || match guard.get() {
        GuardState::Initializing => view! {
            <div class="guard-loading" role="status">
                <span class="guard-loading__spinner" aria-hidden="true"></span>
                "Loading..."
            </div>
        }
        .into_any(),
        GuardState::Unauthenticated => view! { <AuthPage /> }.into_any(),
        GuardState::Authenticated => children().into_any(),
    }
}
