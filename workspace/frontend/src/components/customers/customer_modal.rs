use common::{Customer, CustomerDraft};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api_client::customer::{create_customer, update_customer};

#[derive(Properties, PartialEq)]
pub struct CustomerModalProps {
    pub show: bool,
    pub editing: Option<Customer>,
    pub on_close: Callback<()>,
    pub on_success: Callback<()>,
}

#[function_component(CustomerModal)]
pub fn customer_modal(props: &CustomerModalProps) -> Html {
    let draft = use_state(CustomerDraft::default);
    let error = use_state(|| None::<String>);
    let is_saving = use_state(|| false);

    {
        let draft = draft.clone();
        let error = error.clone();
        use_effect_with(
            (props.show, props.editing.clone()),
            move |(show, editing)| {
                if *show {
                    match editing {
                        Some(customer) => draft.set(CustomerDraft::from_record(customer)),
                        None => draft.set(CustomerDraft::default()),
                    }
                    error.set(None);
                }
                || ()
            },
        );
    }

    let text_input = |apply: fn(&mut CustomerDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut updated = (*draft).clone();
            apply(&mut updated, e.target_unchecked_into::<HtmlInputElement>().value());
            draft.set(updated);
        })
    };

    let on_first_name = text_input(|d, v| d.first_name = v);
    let on_last_name = text_input(|d, v| d.last_name = v);
    let on_company = text_input(|d, v| d.company = v);
    let on_mobile = text_input(|d, v| d.mobile = v);
    let on_address = text_input(|d, v| d.address = v);

    let on_card_input = {
        let draft = draft.clone();
        Callback::from(move |(index, e): (usize, InputEvent)| {
            let mut updated = (*draft).clone();
            updated.set_credit_card(index, e.target_unchecked_into::<HtmlInputElement>().value());
            draft.set(updated);
        })
    };

    let on_bank_input = {
        let draft = draft.clone();
        Callback::from(move |(index, e): (usize, InputEvent)| {
            let mut updated = (*draft).clone();
            updated.set_bank_account(index, e.target_unchecked_into::<HtmlInputElement>().value());
            draft.set(updated);
        })
    };

    let on_add_card = {
        let draft = draft.clone();
        Callback::from(move |_| {
            let mut updated = (*draft).clone();
            updated.add_credit_card();
            draft.set(updated);
        })
    };

    let on_add_bank = {
        let draft = draft.clone();
        Callback::from(move |_| {
            let mut updated = (*draft).clone();
            updated.add_bank_account();
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
        let editing_id = props.editing.as_ref().map(|c| c.id.clone());
        let on_close = props.on_close.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_saving {
                return;
            }

            let request = draft.to_request();
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
                    Some(id) => update_customer(id, &request).await.map(|_| ()),
                    None => create_customer(&request).await.map(|_| ()),
                };

                match result {
                    Ok(()) => {
                        is_saving.set(false);
                        draft.set(CustomerDraft::default());
                        on_close.emit(());
                        on_success.emit(());
                    }
                    Err(e) => {
                        log::error!("Failed to save customer: {e}");
                        let message = if editing_id.is_some() {
                            "Failed to update customer"
                        } else {
                            "Failed to create customer"
                        };
                        error.set(Some(message.to_string()));
                        is_saving.set(false);
                    }
                }
            });
        })
    };

    let title = if props.editing.is_some() {
        "Edit Customer"
    } else {
        "Add Customer"
    };

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))}>
            <div class="modal-box max-w-2xl">
                <h3 class="font-bold text-lg mb-4">{title}</h3>

                {if let Some(message) = &*error {
                    html! { <div class="alert alert-error mb-4">{message}</div> }
                } else {
                    html! {}
                }}

                <form onsubmit={on_submit}>
                    <div class="grid grid-cols-2 gap-2">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"First name"}</span></label>
                            <input
                                type="text"
                                class="input input-bordered"
                                value={draft.first_name.clone()}
                                oninput={on_first_name}
                                required=true
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Last name"}</span></label>
                            <input
                                type="text"
                                class="input input-bordered"
                                value={draft.last_name.clone()}
                                oninput={on_last_name}
                                required=true
                            />
                        </div>
                    </div>

                    <div class="form-control mb-2">
                        <label class="label"><span class="label-text">{"Company"}</span></label>
                        <input
                            type="text"
                            class="input input-bordered"
                            value={draft.company.clone()}
                            oninput={on_company}
                        />
                    </div>

                    <div class="form-control mb-2">
                        <label class="label"><span class="label-text">{"Mobile"}</span></label>
                        <input
                            type="text"
                            class="input input-bordered"
                            value={draft.mobile.clone()}
                            oninput={on_mobile}
                        />
                    </div>

                    <div class="form-control mb-2">
                        <label class="label"><span class="label-text">{"Address"}</span></label>
                        <input
                            type="text"
                            class="input input-bordered"
                            value={draft.address.clone()}
                            oninput={on_address}
                        />
                    </div>

                    <div class="form-control mb-2">
                        <label class="label"><span class="label-text">{"Credit cards"}</span></label>
                        {for draft.credit_cards.iter().enumerate().map(|(index, card)| {
                            let on_card_input = on_card_input.clone();
                            html! {
                                <input
                                    key={index}
                                    type="text"
                                    class="input input-bordered mb-1"
                                    value={card.clone()}
                                    oninput={Callback::from(move |e: InputEvent| {
                                        on_card_input.emit((index, e));
                                    })}
                                />
                            }
                        })}
                        <button type="button" class="btn btn-ghost btn-xs self-start" onclick={on_add_card}>
                            <i class="fas fa-plus"></i> {" Add card"}
                        </button>
                    </div>

                    <div class="form-control mb-2">
                        <label class="label"><span class="label-text">{"Bank accounts"}</span></label>
                        {for draft.bank_accounts.iter().enumerate().map(|(index, account)| {
                            let on_bank_input = on_bank_input.clone();
                            html! {
                                <input
                                    key={index}
                                    type="text"
                                    class="input input-bordered mb-1"
                                    value={account.clone()}
                                    oninput={Callback::from(move |e: InputEvent| {
                                        on_bank_input.emit((index, e));
                                    })}
                                />
                            }
                        })}
                        <button type="button" class="btn btn-ghost btn-xs self-start" onclick={on_add_bank}>
                            <i class="fas fa-plus"></i> {" Add bank account"}
                        </button>
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
