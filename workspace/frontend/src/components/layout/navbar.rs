use yew::prelude::*;

use crate::auth::{self, use_auth};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let auth = use_auth();
    let username = auth
        .state
        .user()
        .map(|user| user.username.clone())
        .unwrap_or_default();

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_| {
            log::info!("Logout clicked");
            auth::logout(auth.clone());
        })
    };

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none lg:hidden">
                <label aria-label="open sidebar" class="btn btn-square btn-ghost" for="main-drawer">
                    <i class="fas fa-bars text-xl"></i>
                </label>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none gap-2 items-center">
                <span class="text-sm text-gray-500 hidden md:block">
                    <i class="fas fa-user mr-1"></i>{ username }
                </span>
                <button class="btn btn-ghost btn-sm" onclick={on_logout}>
                    <i class="fas fa-sign-out-alt"></i>
                    {" Logout"}
                </button>
            </div>
        </div>
    }
}
