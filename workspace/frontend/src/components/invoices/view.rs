use common::{format_currency, Customer, Invoice, InvoiceStatus};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::invoice_modal::InvoiceModal;
use crate::api_client::customer::get_customers;
use crate::api_client::invoice::{change_invoice_status, delete_invoice, get_invoices};
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::common::toast::ToastContext;
use crate::components::data_management::DataManagement;

fn status_badge(status: InvoiceStatus) -> &'static str {
    match status {
        InvoiceStatus::Pending => "badge badge-warning",
        InvoiceStatus::Paid => "badge badge-success",
        InvoiceStatus::Overdue => "badge badge-error",
        InvoiceStatus::Cancelled => "badge badge-ghost",
    }
}

#[function_component(Invoices)]
pub fn invoices() -> Html {
    let (fetch_state, refetch) = use_fetch_with_refetch(get_invoices);
    let (customers_state, _) = use_fetch_with_refetch(get_customers);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let show_modal = use_state(|| false);
    let editing = use_state(|| None::<Invoice>);
    let pending_delete = use_state(|| None::<Invoice>);
    let is_deleting = use_state(|| false);

    let customers: Vec<Customer> = customers_state.data().cloned().unwrap_or_default();

    let on_add = {
        let show_modal = show_modal.clone();
        let editing = editing.clone();
        Callback::from(move |_| {
            editing.set(None);
            show_modal.set(true);
        })
    };

    let on_edit = {
        let show_modal = show_modal.clone();
        let editing = editing.clone();
        Callback::from(move |invoice: Invoice| {
            log::debug!("Editing invoice ID: {}", invoice.id);
            editing.set(Some(invoice));
            show_modal.set(true);
        })
    };

    let on_close = {
        let show_modal = show_modal.clone();
        let editing = editing.clone();
        Callback::from(move |_| {
            show_modal.set(false);
            editing.set(None);
        })
    };

    let on_success = {
        let refetch = refetch.clone();
        Callback::from(move |_| refetch.emit(()))
    };

    // Import replaces the whole data set, so the invoice list is stale
    // the moment it succeeds.
    let on_import_success = {
        let refetch = refetch.clone();
        Callback::from(move |_| refetch.emit(()))
    };

    let on_status_change = {
        let refetch = refetch.clone();
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |(invoice, status): (Invoice, InvoiceStatus)| {
            if invoice.status == status {
                return;
            }
            log::debug!(
                "Changing invoice {} status to {}",
                invoice.id,
                status.as_str()
            );

            let refetch = refetch.clone();
            let toast_ctx = toast_ctx.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match change_invoice_status(&invoice, status).await {
                    Ok(_) => refetch.emit(()),
                    Err(e) => {
                        log::error!("Failed to change invoice status: {e}");
                        toast_ctx.show_error("Failed to update invoice status".to_string());
                        // Re-read so the select snaps back to the
                        // backend's idea of the status.
                        refetch.emit(());
                    }
                }
            });
        })
    };

    let on_delete_click = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |invoice: Invoice| {
            log::debug!("Delete requested for invoice ID: {}", invoice.id);
            pending_delete.set(Some(invoice));
        })
    };

    let on_cancel_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| pending_delete.set(None))
    };

    let on_confirm_delete = {
        let pending_delete = pending_delete.clone();
        let is_deleting = is_deleting.clone();
        let refetch = refetch.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |_| {
            let Some(invoice) = (*pending_delete).clone() else {
                return;
            };
            if *is_deleting {
                return;
            }

            let pending_delete = pending_delete.clone();
            let is_deleting = is_deleting.clone();
            let refetch = refetch.clone();
            let toast_ctx = toast_ctx.clone();

            is_deleting.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                match delete_invoice(&invoice.id).await {
                    Ok(()) => {
                        is_deleting.set(false);
                        pending_delete.set(None);
                        refetch.emit(());
                    }
                    Err(_) => {
                        toast_ctx.show_error("Failed to delete invoice".to_string());
                        is_deleting.set(false);
                        pending_delete.set(None);
                    }
                }
            });
        })
    };

    let render = {
        let on_edit = on_edit.clone();
        let on_delete_click = on_delete_click.clone();
        let on_status_change = on_status_change.clone();

        Callback::from(move |invoices: Vec<Invoice>| {
            html! {
                <div class="card bg-base-100 shadow overflow-x-auto">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Customer"}</th>
                                <th>{"Date"}</th>
                                <th>{"Due"}</th>
                                <th class="text-right">{"Total"}</th>
                                <th>{"Status"}</th>
                                <th class="text-right">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for invoices.iter().map(|invoice| {
                                let edit = {
                                    let on_edit = on_edit.clone();
                                    let invoice = invoice.clone();
                                    Callback::from(move |_| on_edit.emit(invoice.clone()))
                                };
                                let delete = {
                                    let on_delete_click = on_delete_click.clone();
                                    let invoice = invoice.clone();
                                    Callback::from(move |_| on_delete_click.emit(invoice.clone()))
                                };
                                let change_status = {
                                    let on_status_change = on_status_change.clone();
                                    let invoice = invoice.clone();
                                    Callback::from(move |e: Event| {
                                        let value =
                                            e.target_unchecked_into::<HtmlSelectElement>().value();
                                        if let Some(status) = InvoiceStatus::parse(&value) {
                                            on_status_change.emit((invoice.clone(), status));
                                        }
                                    })
                                };

                                html! {
                                    <tr key={invoice.id.clone()}>
                                        <td class="font-medium">{&invoice.customer_name}</td>
                                        <td>{&invoice.date}</td>
                                        <td>{&invoice.due_date}</td>
                                        <td class="text-right">{format_currency(invoice.total)}</td>
                                        <td>
                                            <span class={status_badge(invoice.status)}>
                                                {invoice.status.label()}
                                            </span>
                                            <select
                                                class="select select-bordered select-xs ml-2"
                                                onchange={change_status}
                                            >
                                                {for InvoiceStatus::ALL.iter().map(|status| html! {
                                                    <option
                                                        value={status.as_str()}
                                                        selected={*status == invoice.status}
                                                    >
                                                        {status.label()}
                                                    </option>
                                                })}
                                            </select>
                                        </td>
                                        <td class="text-right">
                                            <button class="btn btn-ghost btn-xs" onclick={edit}>
                                                <i class="fas fa-pen"></i> {" Edit"}
                                            </button>
                                            <button class="btn btn-ghost btn-xs text-error" onclick={delete}>
                                                <i class="fas fa-trash"></i> {" Delete"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                </div>
            }
        })
    };

    html! {
        <>
            <div class="flex justify-between items-center mb-4">
                <h2 class="text-2xl font-bold">{"Invoices"}</h2>
                <div class="flex gap-2">
                    <DataManagement on_import_success={on_import_success} compact=true />
                    <button class="btn btn-primary btn-sm" onclick={on_add}>
                        <i class="fas fa-plus"></i> {" Add Invoice"}
                    </button>
                </div>
            </div>

            <FetchRender<Vec<Invoice>>
                state={(*fetch_state).clone()}
                render={render}
                on_retry={Some(refetch.clone())}
            />

            <InvoiceModal
                show={*show_modal}
                editing={(*editing).clone()}
                customers={customers}
                on_close={on_close}
                on_success={on_success}
            />

            <dialog class={classes!("modal", pending_delete.is_some().then_some("modal-open"))}>
                <div class="modal-box">
                    <h3 class="font-bold text-lg">{"Delete Invoice"}</h3>
                    <p class="py-4">{"Are you sure you want to delete this invoice?"}</p>
                    <div class="modal-action">
                        <button class="btn" onclick={on_cancel_delete} disabled={*is_deleting}>
                            {"Cancel"}
                        </button>
                        <button class="btn btn-error" onclick={on_confirm_delete} disabled={*is_deleting}>
                            {if *is_deleting {
                                html! { <><span class="loading loading-spinner loading-sm"></span>{" Deleting..."}</> }
                            } else {
                                html! { "Delete" }
                            }}
                        </button>
                    </div>
                </div>
            </dialog>
        </>
    }
}
