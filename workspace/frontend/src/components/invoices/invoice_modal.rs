use chrono::Local;
use common::{format_currency, Customer, Invoice, InvoiceDraft, InvoiceStatus};
use rust_decimal::Decimal;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api_client::invoice::{create_invoice, update_invoice};

#[derive(Properties, PartialEq)]
pub struct InvoiceModalProps {
    pub show: bool,
    pub editing: Option<Invoice>,
    pub customers: Vec<Customer>,
    pub on_close: Callback<()>,
    pub on_success: Callback<()>,
}

#[function_component(InvoiceModal)]
pub fn invoice_modal(props: &InvoiceModalProps) -> Html {
    let draft = use_state(|| InvoiceDraft::new(Local::now().date_naive()));
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
                        Some(invoice) => draft.set(InvoiceDraft::from_record(invoice)),
                        None => draft.set(InvoiceDraft::new(Local::now().date_naive())),
                    }
                    error.set(None);
                }
                || ()
            },
        );
    }

    let text_input = |apply: fn(&mut InvoiceDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut updated = (*draft).clone();
            apply(&mut updated, e.target_unchecked_into::<HtmlInputElement>().value());
            draft.set(updated);
        })
    };

    let on_date = text_input(|d, v| d.date = v);
    let on_due_date = text_input(|d, v| d.due_date = v);
    let on_payment_date = text_input(|d, v| d.payment_date = v);
    let on_payment_info = text_input(|d, v| d.payment_info = v);

    let on_customer = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let mut updated = (*draft).clone();
            updated.customer_id = e.target_unchecked_into::<HtmlSelectElement>().value();
            draft.set(updated);
        })
    };

    let on_status = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Some(status) = InvoiceStatus::parse(&value) {
                let mut updated = (*draft).clone();
                updated.status = status;
                draft.set(updated);
            }
        })
    };

    let on_item_description = {
        let draft = draft.clone();
        Callback::from(move |(index, e): (usize, InputEvent)| {
            let mut updated = (*draft).clone();
            updated
                .set_item_description(index, e.target_unchecked_into::<HtmlInputElement>().value());
            draft.set(updated);
        })
    };

    // Unparsable numeric input leaves the line untouched until the
    // field holds a valid value again.
    let on_item_quantity = {
        let draft = draft.clone();
        Callback::from(move |(index, e): (usize, InputEvent)| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            if let Ok(quantity) = value.parse::<u32>() {
                let mut updated = (*draft).clone();
                updated.set_item_quantity(index, quantity);
                draft.set(updated);
            }
        })
    };

    let on_item_unit_price = {
        let draft = draft.clone();
        Callback::from(move |(index, e): (usize, InputEvent)| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            if let Ok(unit_price) = value.parse::<Decimal>() {
                let mut updated = (*draft).clone();
                updated.set_item_unit_price(index, unit_price);
                draft.set(updated);
            }
        })
    };

    let on_add_item = {
        let draft = draft.clone();
        Callback::from(move |_| {
            let mut updated = (*draft).clone();
            updated.add_item();
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
        let editing_id = props.editing.as_ref().map(|i| i.id.clone());
        let on_close = props.on_close.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_saving {
                return;
            }

            if draft.customer_id.is_empty() {
                error.set(Some("Please select a customer".to_string()));
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
                    Some(id) => update_invoice(id, &request).await.map(|_| ()),
                    None => create_invoice(&request).await.map(|_| ()),
                };

                match result {
                    Ok(()) => {
                        is_saving.set(false);
                        draft.set(InvoiceDraft::new(Local::now().date_naive()));
                        on_close.emit(());
                        on_success.emit(());
                    }
                    Err(e) => {
                        log::error!("Failed to save invoice: {e}");
                        let message = if editing_id.is_some() {
                            "Failed to update invoice"
                        } else {
                            "Failed to create invoice"
                        };
                        error.set(Some(message.to_string()));
                        is_saving.set(false);
                    }
                }
            });
        })
    };

    let title = if props.editing.is_some() {
        "Edit Invoice"
    } else {
        "Add Invoice"
    };

    let draft_total: Decimal = draft.items.iter().map(|item| item.amount).sum();

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))}>
            <div class="modal-box max-w-3xl">
                <h3 class="font-bold text-lg mb-4">{title}</h3>

                {if let Some(message) = &*error {
                    html! { <div class="alert alert-error mb-4">{message}</div> }
                } else {
                    html! {}
                }}

                <form onsubmit={on_submit}>
                    <div class="grid grid-cols-2 gap-2">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Customer"}</span></label>
                            <select class="select select-bordered" onchange={on_customer}>
                                <option value="" selected={draft.customer_id.is_empty()} disabled=true>
                                    {"Select a customer"}
                                </option>
                                {for props.customers.iter().map(|customer| html! {
                                    <option
                                        value={customer.id.clone()}
                                        selected={customer.id == draft.customer_id}
                                    >
                                        {customer.full_name()}
                                    </option>
                                })}
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Status"}</span></label>
                            <select class="select select-bordered" onchange={on_status}>
                                {for InvoiceStatus::ALL.iter().map(|status| html! {
                                    <option
                                        value={status.as_str()}
                                        selected={*status == draft.status}
                                    >
                                        {status.label()}
                                    </option>
                                })}
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Date"}</span></label>
                            <input
                                type="date"
                                class="input input-bordered"
                                value={draft.date.clone()}
                                oninput={on_date}
                                required=true
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Due date"}</span></label>
                            <input
                                type="date"
                                class="input input-bordered"
                                value={draft.due_date.clone()}
                                oninput={on_due_date}
                            />
                        </div>
                        {if draft.status.requires_payment_details() {
                            html! {
                                <>
                                    <div class="form-control">
                                        <label class="label"><span class="label-text">{"Payment date"}</span></label>
                                        <input
                                            type="date"
                                            class="input input-bordered"
                                            value={draft.payment_date.clone()}
                                            oninput={on_payment_date}
                                            required=true
                                        />
                                    </div>
                                    <div class="form-control">
                                        <label class="label"><span class="label-text">{"Payment info"}</span></label>
                                        <input
                                            type="text"
                                            class="input input-bordered"
                                            value={draft.payment_info.clone()}
                                            oninput={on_payment_info}
                                        />
                                    </div>
                                </>
                            }
                        } else {
                            html! {}
                        }}
                    </div>

                    <div class="divider">{"Items"}</div>

                    <table class="table table-sm">
                        <thead>
                            <tr>
                                <th>{"Description"}</th>
                                <th class="w-24">{"Qty"}</th>
                                <th class="w-32">{"Unit price"}</th>
                                <th class="w-32 text-right">{"Amount"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for draft.items.iter().enumerate().map(|(index, item)| {
                                let on_item_description = on_item_description.clone();
                                let on_item_quantity = on_item_quantity.clone();
                                let on_item_unit_price = on_item_unit_price.clone();

                                html! {
                                    <tr key={index}>
                                        <td>
                                            <input
                                                type="text"
                                                class="input input-bordered input-sm w-full"
                                                value={item.description.clone()}
                                                oninput={Callback::from(move |e: InputEvent| {
                                                    on_item_description.emit((index, e));
                                                })}
                                            />
                                        </td>
                                        <td>
                                            <input
                                                type="number"
                                                min="1"
                                                class="input input-bordered input-sm w-full"
                                                value={item.quantity.to_string()}
                                                oninput={Callback::from(move |e: InputEvent| {
                                                    on_item_quantity.emit((index, e));
                                                })}
                                            />
                                        </td>
                                        <td>
                                            <input
                                                type="number"
                                                step="0.01"
                                                min="0"
                                                class="input input-bordered input-sm w-full"
                                                value={item.unit_price.to_string()}
                                                oninput={Callback::from(move |e: InputEvent| {
                                                    on_item_unit_price.emit((index, e));
                                                })}
                                            />
                                        </td>
                                        <td class="text-right">{format_currency(item.amount)}</td>
                                    </tr>
                                }
                            })}
                        </tbody>
                        <tfoot>
                            <tr>
                                <td colspan="3" class="text-right font-medium">{"Total"}</td>
                                <td class="text-right font-medium">{format_currency(draft_total)}</td>
                            </tr>
                        </tfoot>
                    </table>

                    <button type="button" class="btn btn-ghost btn-xs" onclick={on_add_item}>
                        <i class="fas fa-plus"></i> {" Add line"}
                    </button>

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
