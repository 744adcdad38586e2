use common::{Customer, SaveCustomerRequest};

use crate::api_client;

/// Get all customers
pub async fn get_customers() -> Result<Vec<Customer>, String> {
    log::trace!("Fetching all customers");
    let result: Result<Vec<Customer>, String> = api_client::get("/customers").await;
    match &result {
        Ok(customers) => log::info!("Fetched {} customers", customers.len()),
        Err(e) => log::error!("Failed to fetch customers: {}", e),
    }
    result
}

/// Create a new customer
pub async fn create_customer(request: &SaveCustomerRequest) -> Result<Customer, String> {
    log::debug!(
        "Creating new customer: {} {}",
        request.first_name,
        request.last_name
    );
    let result: Result<Customer, String> = api_client::post("/customers", request).await;
    match &result {
        Ok(customer) => log::info!("Created customer (ID: {})", customer.id),
        Err(e) => log::error!("Failed to create customer: {}", e),
    }
    result
}

/// Update an existing customer
pub async fn update_customer(id: &str, request: &SaveCustomerRequest) -> Result<Customer, String> {
    log::debug!("Updating customer ID: {}", id);
    let result: Result<Customer, String> =
        api_client::put(&format!("/customers/{}", id), request).await;
    match &result {
        Ok(customer) => log::info!("Updated customer (ID: {})", customer.id),
        Err(e) => log::error!("Failed to update customer {}: {}", id, e),
    }
    result
}

/// Delete a customer
pub async fn delete_customer(id: &str) -> Result<(), String> {
    log::debug!("Deleting customer ID: {}", id);
    let result = api_client::delete(&format!("/customers/{}", id)).await;
    if let Err(e) = &result {
        log::error!("Failed to delete customer {}: {}", id, e);
    }
    result
}
