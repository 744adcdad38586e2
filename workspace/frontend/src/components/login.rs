use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client;
use crate::auth::{use_auth, AuthAction, AuthState};
use crate::router::Route;

#[function_component(Login)]
pub fn login() -> Html {
    let auth = use_auth();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    // Already signed in; the login page is not for you.
    if matches!(auth.state, AuthState::Authenticated(_)) {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            username.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            password.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let username = username.clone();
        let password = password.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *is_submitting {
                return;
            }

            let auth = auth.clone();
            let username_value = (*username).clone();
            let password_value = (*password).clone();
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();

            is_submitting.set(true);
            error_message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match api_client::auth::login(&username_value, &password_value).await {
                    Ok(user) => {
                        is_submitting.set(false);
                        // The redirect above takes over on the next render.
                        auth.dispatch(AuthAction::Confirmed(user));
                    }
                    Err(e) => {
                        log::error!("Login failed: {}", e);
                        error_message.set(Some("Invalid username or password".to_string()));
                        is_submitting.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content">
                <div class="card bg-base-100 shadow-xl w-96">
                    <div class="card-body">
                        <h2 class="card-title justify-center text-2xl mb-2">
                            <i class="fas fa-file-invoice-dollar text-primary"></i>
                            {" Accounted"}
                        </h2>
                        <p class="text-center text-sm text-gray-500 mb-4">{"Sign in to your account"}</p>

                        {if let Some(error) = (*error_message).as_ref() {
                            html! {
                                <div class="alert alert-error text-sm">
                                    <i class="fas fa-exclamation-circle"></i>
                                    <span>{error}</span>
                                </div>
                            }
                        } else {
                            html! {}
                        }}

                        <form onsubmit={on_submit} class="space-y-4">
                            <div class="form-control">
                                <label class="label"><span class="label-text">{"Username"}</span></label>
                                <input
                                    type="text"
                                    class="input input-bordered w-full"
                                    value={(*username).clone()}
                                    oninput={on_username}
                                    required={true}
                                    disabled={*is_submitting}
                                />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">{"Password"}</span></label>
                                <input
                                    type="password"
                                    class="input input-bordered w-full"
                                    value={(*password).clone()}
                                    oninput={on_password}
                                    required={true}
                                    disabled={*is_submitting}
                                />
                            </div>
                            <button type="submit" class="btn btn-primary w-full" disabled={*is_submitting}>
                                {if *is_submitting {
                                    html! { <><span class="loading loading-spinner loading-sm"></span>{" Signing in..."}</> }
                                } else {
                                    html! { "Sign In" }
                                }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
