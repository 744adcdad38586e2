use common::{Invoice, InvoiceStatus, SaveInvoiceRequest};

use crate::api_client;

/// Get all invoices
pub async fn get_invoices() -> Result<Vec<Invoice>, String> {
    log::trace!("Fetching all invoices");
    let result: Result<Vec<Invoice>, String> = api_client::get("/invoices").await;
    match &result {
        Ok(invoices) => log::info!("Fetched {} invoices", invoices.len()),
        Err(e) => log::error!("Failed to fetch invoices: {}", e),
    }
    result
}

/// Create a new invoice
pub async fn create_invoice(request: &SaveInvoiceRequest) -> Result<Invoice, String> {
    log::debug!("Creating new invoice for customer {}", request.customer_id);
    let result: Result<Invoice, String> = api_client::post("/invoices", request).await;
    match &result {
        Ok(invoice) => log::info!("Created invoice (ID: {})", invoice.id),
        Err(e) => log::error!("Failed to create invoice: {}", e),
    }
    result
}

/// Update an existing invoice
pub async fn update_invoice(id: &str, request: &SaveInvoiceRequest) -> Result<Invoice, String> {
    log::debug!("Updating invoice ID: {}", id);
    let result: Result<Invoice, String> =
        api_client::put(&format!("/invoices/{}", id), request).await;
    match &result {
        Ok(invoice) => log::info!("Updated invoice (ID: {})", invoice.id),
        Err(e) => log::error!("Failed to update invoice {}: {}", id, e),
    }
    result
}

/// Quick status change from the table: sends the full invoice payload
/// with the status (and, for `paid`, a freshly stamped payment date
/// when none was set) overwritten.
pub async fn change_invoice_status(
    invoice: &Invoice,
    status: InvoiceStatus,
) -> Result<Invoice, String> {
    let today = chrono::Local::now().date_naive();
    let payload = invoice.with_status(status, today);
    log::debug!(
        "Changing invoice {} status: {} -> {}",
        invoice.id,
        invoice.status.as_str(),
        status.as_str()
    );
    let result: Result<Invoice, String> =
        api_client::put(&format!("/invoices/{}", invoice.id), &payload).await;
    match &result {
        Ok(updated) => log::info!(
            "Invoice {} status is now {}",
            updated.id,
            updated.status.as_str()
        ),
        Err(e) => log::error!("Failed to change invoice {} status: {}", invoice.id, e),
    }
    result
}

/// Delete an invoice
pub async fn delete_invoice(id: &str) -> Result<(), String> {
    log::debug!("Deleting invoice ID: {}", id);
    let result = api_client::delete(&format!("/invoices/{}", id)).await;
    if let Err(e) = &result {
        log::error!("Failed to delete invoice {}: {}", id, e);
    }
    result
}
