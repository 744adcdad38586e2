use common::{Account, SaveAccountRequest};

use crate::api_client;

/// Get all accounts
pub async fn get_accounts() -> Result<Vec<Account>, String> {
    log::trace!("Fetching all accounts");
    let result: Result<Vec<Account>, String> = api_client::get("/accounts").await;
    match &result {
        Ok(accounts) => log::info!("Fetched {} accounts", accounts.len()),
        Err(e) => log::error!("Failed to fetch accounts: {}", e),
    }
    result
}

/// Create a new account
pub async fn create_account(request: &SaveAccountRequest) -> Result<Account, String> {
    log::debug!("Creating new account: {}", request.name);
    let result: Result<Account, String> = api_client::post("/accounts", request).await;
    match &result {
        Ok(account) => {
            log::info!("Created account: {} (ID: {})", account.name, account.id)
        }
        Err(e) => log::error!("Failed to create account '{}': {}", request.name, e),
    }
    result
}

/// Update an existing account
pub async fn update_account(id: &str, request: &SaveAccountRequest) -> Result<Account, String> {
    log::debug!("Updating account ID: {}", id);
    let result: Result<Account, String> = api_client::put(&format!("/accounts/{}", id), request).await;
    match &result {
        Ok(account) => log::info!("Updated account: {} (ID: {})", account.name, account.id),
        Err(e) => log::error!("Failed to update account {}: {}", id, e),
    }
    result
}

/// Delete an account
pub async fn delete_account(id: &str) -> Result<(), String> {
    log::debug!("Deleting account ID: {}", id);
    let result = api_client::delete(&format!("/accounts/{}", id)).await;
    if let Err(e) = &result {
        log::error!("Failed to delete account {}: {}", id, e);
    }
    result
}
