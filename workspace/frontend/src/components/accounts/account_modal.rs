use common::{Account, AccountDraft, AccountKind};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api_client::account::{create_account, update_account};

#[derive(Properties, PartialEq)]
pub struct AccountModalProps {
    pub show: bool,
    pub editing: Option<Account>,
    pub on_close: Callback<()>,
    pub on_success: Callback<()>,
}

#[function_component(AccountModal)]
pub fn account_modal(props: &AccountModalProps) -> Html {
    let draft = use_state(AccountDraft::default);
    let error = use_state(|| None::<String>);
    let is_saving = use_state(|| false);

    // Reseed the form whenever the modal opens, either blank or from
    // the record being edited.
    {
        let draft = draft.clone();
        let error = error.clone();
        use_effect_with(
            (props.show, props.editing.clone()),
            move |(show, editing)| {
                if *show {
                    match editing {
                        Some(account) => draft.set(AccountDraft::from_record(account)),
                        None => draft.set(AccountDraft::default()),
                    }
                    error.set(None);
                }
                || ()
            },
        );
    }

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut updated = (*draft).clone();
            updated.name = e.target_unchecked_into::<HtmlInputElement>().value();
            draft.set(updated);
        })
    };

    let on_kind = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let mut updated = (*draft).clone();
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            updated.kind = AccountKind::parse(&value);
            draft.set(updated);
        })
    };

    let on_number = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut updated = (*draft).clone();
            updated.number = e.target_unchecked_into::<HtmlInputElement>().value();
            draft.set(updated);
        })
    };

    let on_zone = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut updated = (*draft).clone();
            updated.zone = e.target_unchecked_into::<HtmlInputElement>().value();
            draft.set(updated);
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let on_submit = {
        let draft = draft.clone();
        let error = error.clone();
        let is_saving = is_saving.clone();
        let editing_id = props.editing.as_ref().map(|a| a.id.clone());
        let on_close = props.on_close.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_saving {
                return;
            }

            let Some(request) = draft.to_request() else {
                error.set(Some("Please select an account type".to_string()));
                return;
            };

            let draft = draft.clone();
            let error = error.clone();
            let is_saving = is_saving.clone();
            let editing_id = editing_id.clone();
            let on_close = on_close.clone();
            let on_success = on_success.clone();

            is_saving.set(true);
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                let result = match &editing_id {
                    Some(id) => update_account(id, &request).await.map(|_| ()),
                    None => create_account(&request).await.map(|_| ()),
                };

                match result {
                    Ok(()) => {
                        is_saving.set(false);
                        draft.set(AccountDraft::default());
                        on_close.emit(());
                        on_success.emit(());
                    }
                    Err(e) => {
                        log::error!("Failed to save account: {e}");
                        let message = if editing_id.is_some() {
                            "Failed to update account"
                        } else {
                            "Failed to create account"
                        };
                        error.set(Some(message.to_string()));
                        is_saving.set(false);
                    }
                }
            });
        })
    };

    let title = if props.editing.is_some() {
        "Edit Account"
    } else {
        "Add Account"
    };

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))}>
            <div class="modal-box">
                <h3 class="font-bold text-lg mb-4">{title}</h3>

                {if let Some(message) = &*error {
                    html! { <div class="alert alert-error mb-4">{message}</div> }
                } else {
                    html! {}
                }}

                <form onsubmit={on_submit}>
                    <div class="form-control mb-2">
                        <label class="label"><span class="label-text">{"Name"}</span></label>
                        <input
                            type="text"
                            class="input input-bordered"
                            value={draft.name.clone()}
                            oninput={on_name}
                            required=true
                        />
                    </div>

                    <div class="form-control mb-2">
                        <label class="label"><span class="label-text">{"Type"}</span></label>
                        <select class="select select-bordered" onchange={on_kind}>
                            <option value="" selected={draft.kind.is_none()} disabled=true>
                                {"Select a type"}
                            </option>
                            {for AccountKind::ALL.iter().map(|kind| html! {
                                <option
                                    value={kind.as_str()}
                                    selected={draft.kind == Some(*kind)}
                                >
                                    {kind.label()}
                                </option>
                            })}
                        </select>
                    </div>

                    <div class="form-control mb-2">
                        <label class="label"><span class="label-text">{"Number"}</span></label>
                        <input
                            type="text"
                            class="input input-bordered"
                            value={draft.number.clone()}
                            oninput={on_number}
                        />
                    </div>

                    <div class="form-control mb-2">
                        <label class="label"><span class="label-text">{"Zone"}</span></label>
                        <input
                            type="text"
                            class="input input-bordered"
                            value={draft.zone.clone()}
                            oninput={on_zone}
                        />
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn" onclick={on_cancel} disabled={*is_saving}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={*is_saving}>
                            {if *is_saving {
                                html! { <><span class="loading loading-spinner loading-sm"></span>{" Saving..."}</> }
                            } else {
                                html! { "Save" }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
