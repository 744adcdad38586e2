//! In-memory session state and its lifecycle.
//!
//! The session starts in `Loading`, moves to `Authenticated` via a
//! successful login or session check, and to `Unauthenticated` when a
//! check fails or the user logs out. Bootstrap is two-phase: a cached
//! identity promotes the state optimistically while `/auth/me` is
//! re-validated in the background; the validation result always wins.

use std::rc::Rc;

use common::SessionUser;
use yew::prelude::*;

use crate::api_client;
use crate::session;

#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    /// Initial state, before the first session check resolves.
    Loading,
    Authenticated(SessionUser),
    Unauthenticated,
}

impl AuthState {
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum AuthAction {
    /// Optimistic promotion from the durable cache; not yet confirmed.
    Restored(SessionUser),
    /// Backend-confirmed identity (login or session check). Persisted.
    Confirmed(SessionUser),
    /// Session is gone (failed check or logout). Cache is dropped too.
    Cleared,
}

/// Reducer holding the authoritative session state. The durable cache
/// is kept in lockstep here: confirmed identities are written through,
/// cleared sessions are removed.
#[derive(Debug, PartialEq)]
pub struct Auth {
    pub state: AuthState,
}

impl Default for Auth {
    fn default() -> Self {
        Self {
            state: AuthState::Loading,
        }
    }
}

impl Reducible for Auth {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: AuthAction) -> Rc<Self> {
        let state = match action {
            AuthAction::Restored(user) => {
                log::debug!("Session restored optimistically for '{}'", user.username);
                AuthState::Authenticated(user)
            }
            AuthAction::Confirmed(user) => {
                log::info!("Session confirmed for '{}'", user.username);
                session::store(&user);
                AuthState::Authenticated(user)
            }
            AuthAction::Cleared => {
                log::info!("Session cleared");
                session::clear();
                AuthState::Unauthenticated
            }
        };
        Rc::new(Self { state })
    }
}

pub type AuthContext = UseReducerHandle<Auth>;

#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not provided")
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth = use_reducer(Auth::default);

    // Bootstrap: promote a cached identity right away (avoids a loading
    // flash), then re-validate with the backend either way. Without a
    // cache the app stays behind the loading state until the check
    // resolves.
    {
        let auth = auth.clone();
        use_effect_with((), move |_| {
            if let Some(user) = session::load() {
                log::debug!("Found cached session for '{}'", user.username);
                auth.dispatch(AuthAction::Restored(user));
            }

            wasm_bindgen_futures::spawn_local(async move {
                match api_client::auth::current_user().await {
                    Ok(user) => auth.dispatch(AuthAction::Confirmed(user)),
                    Err(e) => {
                        log::debug!("Session check failed: {}", e);
                        auth.dispatch(AuthAction::Cleared);
                    }
                }
            });
            || ()
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Logs out: the backend call is best-effort, local state is cleared
/// unconditionally so logout always works offline.
pub fn logout(auth: AuthContext) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = api_client::auth::logout().await {
            log::warn!("Logout request failed, clearing session anyway: {}", e);
        }
        auth.dispatch(AuthAction::Cleared);
    });
}
