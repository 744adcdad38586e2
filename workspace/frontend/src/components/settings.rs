use log::Level;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::components::data_management::DataManagement;
use crate::settings::{get_settings, update_settings};

const LOG_LEVELS: [Level; 5] = [
    Level::Error,
    Level::Warn,
    Level::Info,
    Level::Debug,
    Level::Trace,
];

fn parse_level(value: &str) -> Option<Level> {
    LOG_LEVELS
        .into_iter()
        .find(|level| level.as_str().eq_ignore_ascii_case(value))
}

/// Connection settings form plus the backup tools. Saved values go to
/// localStorage and take effect immediately for subsequent requests.
#[function_component(Settings)]
pub fn settings() -> Html {
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let current = get_settings();
    let api_host = use_state(|| current.api_host.clone());
    let api_port = use_state(|| current.api_port.to_string());
    let api_path = use_state(|| current.api_path.clone());
    let api_use_https = use_state(|| current.api_use_https);
    let log_level = use_state(|| current.log_level);

    let on_host = {
        let api_host = api_host.clone();
        Callback::from(move |e: InputEvent| {
            api_host.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_port = {
        let api_port = api_port.clone();
        Callback::from(move |e: InputEvent| {
            api_port.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_path = {
        let api_path = api_path.clone();
        Callback::from(move |e: InputEvent| {
            api_path.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_https = {
        let api_use_https = api_use_https.clone();
        Callback::from(move |e: Event| {
            api_use_https.set(e.target_unchecked_into::<HtmlInputElement>().checked());
        })
    };

    let on_level = {
        let log_level = log_level.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Some(level) = parse_level(&value) {
                log_level.set(level);
            }
        })
    };

    let on_save = {
        let api_host = api_host.clone();
        let api_port = api_port.clone();
        let api_path = api_path.clone();
        let api_use_https = api_use_https.clone();
        let log_level = log_level.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Ok(port) = api_port.parse::<u16>() else {
                toast_ctx.show_error("Port must be a number between 1 and 65535".to_string());
                return;
            };

            let host = (*api_host).clone();
            let path = (*api_path).clone();
            let use_https = *api_use_https;
            let level = *log_level;

            update_settings(|settings| {
                settings.api_host = host;
                settings.api_port = port;
                settings.api_path = path;
                settings.api_use_https = use_https;
                settings.log_level = level;
            });

            match get_settings().save_to_storage() {
                Ok(()) => {
                    log::info!("Settings saved, API base is now {}", get_settings().api_base_url());
                    toast_ctx.show_success("Settings saved".to_string());
                }
                Err(_) => toast_ctx.show_error("Failed to save settings".to_string()),
            }
        })
    };

    let on_import_success = {
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |_| {
            toast_ctx.show_info("Reload any open pages to see the imported data".to_string());
        })
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Connection Settings"}</h2>
                    <form onsubmit={on_save}>
                        <div class="form-control w-full mt-4">
                            <label class="label"><span class="label-text">{"API Host"}</span></label>
                            <input
                                type="text"
                                class="input input-bordered w-full"
                                value={(*api_host).clone()}
                                oninput={on_host}
                            />
                        </div>
                        <div class="form-control w-full">
                            <label class="label"><span class="label-text">{"API Port"}</span></label>
                            <input
                                type="number"
                                min="1"
                                max="65535"
                                class="input input-bordered w-full"
                                value={(*api_port).clone()}
                                oninput={on_port}
                            />
                        </div>
                        <div class="form-control w-full">
                            <label class="label"><span class="label-text">{"API Path"}</span></label>
                            <input
                                type="text"
                                class="input input-bordered w-full"
                                value={(*api_path).clone()}
                                oninput={on_path}
                            />
                        </div>
                        <div class="form-control w-full">
                            <label class="label"><span class="label-text">{"Log Level"}</span></label>
                            <select class="select select-bordered w-full" onchange={on_level}>
                                {for LOG_LEVELS.iter().map(|level| html! {
                                    <option
                                        value={level.as_str()}
                                        selected={*level == *log_level}
                                    >
                                        {level.as_str()}
                                    </option>
                                })}
                            </select>
                            <label class="label">
                                <span class="label-text-alt">{"Takes effect after a reload"}</span>
                            </label>
                        </div>
                        <div class="form-control w-full">
                            <label class="label cursor-pointer justify-start gap-2">
                                <input
                                    type="checkbox"
                                    class="checkbox"
                                    checked={*api_use_https}
                                    onchange={on_https}
                                />
                                <span class="label-text">{"Use HTTPS"}</span>
                            </label>
                        </div>
                        <div class="card-actions justify-end mt-4">
                            <button type="submit" class="btn btn-primary">{"Save"}</button>
                        </div>
                    </form>
                </div>
            </div>

            <DataManagement on_import_success={on_import_success} />
        </div>
    }
}
