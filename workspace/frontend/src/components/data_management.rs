use chrono::Local;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api_client::data::{export_backup, import_backup};
use crate::common::toast::ToastContext;

#[derive(Properties, PartialEq)]
pub struct DataManagementProps {
    pub on_import_success: Callback<()>,
    /// Bare buttons for page headers instead of the full card.
    #[prop_or_default]
    pub compact: bool,
}

/// Backup export/restore controls. Export streams the backend document
/// into a client-side download; import uploads a previously exported
/// file and replaces the whole data set.
#[function_component(DataManagement)]
pub fn data_management(props: &DataManagementProps) -> Html {
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let is_exporting = use_state(|| false);
    let is_importing = use_state(|| false);
    let file_input = use_node_ref();

    let on_export = {
        let toast_ctx = toast_ctx.clone();
        let is_exporting = is_exporting.clone();

        Callback::from(move |_| {
            if *is_exporting {
                return;
            }
            let toast_ctx = toast_ctx.clone();
            let is_exporting = is_exporting.clone();
            is_exporting.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                match export_backup().await {
                    Ok(bytes) => {
                        let filename = format!(
                            "accounted-backup-{}.json",
                            Local::now().date_naive().format("%Y-%m-%d")
                        );
                        match trigger_download(&bytes, &filename) {
                            Ok(()) => toast_ctx.show_success("Backup downloaded".to_string()),
                            Err(e) => {
                                log::error!("Failed to start backup download: {e}");
                                toast_ctx.show_error("Failed to export data".to_string());
                            }
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to export backup: {e}");
                        toast_ctx.show_error("Failed to export data".to_string());
                    }
                }
                is_exporting.set(false);
            });
        })
    };

    let on_file_change = {
        let toast_ctx = toast_ctx.clone();
        let is_importing = is_importing.clone();
        let on_import_success = props.on_import_success.clone();
        let file_input = file_input.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if *is_importing {
                return;
            }

            let toast_ctx = toast_ctx.clone();
            let is_importing = is_importing.clone();
            let on_import_success = on_import_success.clone();
            let file_input = file_input.clone();
            is_importing.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                match import_backup(&file).await {
                    Ok(()) => {
                        toast_ctx.show_success("Data imported".to_string());
                        on_import_success.emit(());
                    }
                    Err(e) => {
                        log::error!("Failed to import backup: {e}");
                        toast_ctx.show_error("Failed to import data".to_string());
                    }
                }
                is_importing.set(false);
                // Clear the input so picking the same file again
                // re-triggers the change event.
                if let Some(input) = file_input.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
            });
        })
    };

    let buttons = html! {
        <>
            <button
                class="btn btn-outline btn-sm"
                onclick={on_export}
                disabled={*is_exporting}
            >
                {if *is_exporting {
                    html! { <span class="loading loading-spinner loading-sm"></span> }
                } else {
                    html! { <i class="fas fa-download"></i> }
                }}
                {" Export"}
            </button>
            <label class={classes!("btn", "btn-outline", "btn-sm", (*is_importing).then_some("btn-disabled"))}>
                {if *is_importing {
                    html! { <span class="loading loading-spinner loading-sm"></span> }
                } else {
                    html! { <i class="fas fa-upload"></i> }
                }}
                {" Import"}
                <input
                    ref={file_input}
                    type="file"
                    accept="application/json"
                    class="hidden"
                    onchange={on_file_change}
                />
            </label>
        </>
    };

    if props.compact {
        html! { <div class="flex gap-2">{buttons}</div> }
    } else {
        html! {
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">{"Data Management"}</h3>
                    <p class="text-sm opacity-70">
                        {"Download a full backup of your data, or restore from a \
                          previously exported file. Importing replaces all existing data."}
                    </p>
                    <div class="card-actions">{buttons}</div>
                </div>
            </div>
        }
    }
}

fn trigger_download(bytes: &[u8], filename: &str) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes).buffer());
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)
        .map_err(|_| "Failed to build download blob".to_string())?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create object URL".to_string())?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "Document is not available".to_string())?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "Failed to create download link".to_string())?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
