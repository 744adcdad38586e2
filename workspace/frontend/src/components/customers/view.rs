use common::Customer;
use yew::prelude::*;

use super::customer_modal::CustomerModal;
use crate::api_client::customer::{delete_customer, get_customers};
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::common::toast::ToastContext;

#[function_component(Customers)]
pub fn customers() -> Html {
    let (fetch_state, refetch) = use_fetch_with_refetch(get_customers);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let show_modal = use_state(|| false);
    let editing = use_state(|| None::<Customer>);
    let pending_delete = use_state(|| None::<Customer>);
    let is_deleting = use_state(|| false);

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
        Callback::from(move |customer: Customer| {
            log::debug!("Editing customer ID: {}", customer.id);
            editing.set(Some(customer));
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

    let on_delete_click = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |customer: Customer| {
            log::debug!("Delete requested for customer ID: {}", customer.id);
            pending_delete.set(Some(customer));
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
            let Some(customer) = (*pending_delete).clone() else {
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
                match delete_customer(&customer.id).await {
                    Ok(()) => {
                        is_deleting.set(false);
                        pending_delete.set(None);
                        refetch.emit(());
                    }
                    Err(_) => {
                        toast_ctx.show_error("Failed to delete customer".to_string());
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

        Callback::from(move |customers: Vec<Customer>| {
            html! {
                <div class="card bg-base-100 shadow overflow-x-auto">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Name"}</th>
                                <th>{"Company"}</th>
                                <th>{"Mobile"}</th>
                                <th>{"Address"}</th>
                                <th class="text-right">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for customers.iter().map(|customer| {
                                let edit = {
                                    let on_edit = on_edit.clone();
                                    let customer = customer.clone();
                                    Callback::from(move |_| on_edit.emit(customer.clone()))
                                };
                                let delete = {
                                    let on_delete_click = on_delete_click.clone();
                                    let customer = customer.clone();
                                    Callback::from(move |_| on_delete_click.emit(customer.clone()))
                                };

                                html! {
                                    <tr key={customer.id.clone()}>
                                        <td class="font-medium">{customer.full_name()}</td>
                                        <td>{&customer.company}</td>
                                        <td>{&customer.mobile}</td>
                                        <td>{&customer.address}</td>
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
                <h2 class="text-2xl font-bold">{"Customers"}</h2>
                <button class="btn btn-primary btn-sm" onclick={on_add}>
                    <i class="fas fa-plus"></i> {" Add Customer"}
                </button>
            </div>

            <FetchRender<Vec<Customer>>
                state={(*fetch_state).clone()}
                render={render}
                on_retry={Some(refetch.clone())}
            />

            <CustomerModal
                show={*show_modal}
                editing={(*editing).clone()}
                on_close={on_close}
                on_success={on_success}
            />

            <dialog class={classes!("modal", pending_delete.is_some().then_some("modal-open"))}>
                <div class="modal-box">
                    <h3 class="font-bold text-lg">{"Delete Customer"}</h3>
                    <p class="py-4">{"Are you sure you want to delete this customer?"}</p>
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
