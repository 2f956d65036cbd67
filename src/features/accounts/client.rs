//! Client helpers for account endpoints. These functions keep endpoint paths
//! centralized and assume the backend enforces authorization.

use crate::{
    app_lib::{AppError, api::bearer, get_json},
    features::accounts::types::Account,
};

/// Fetches an account profile by id after basic input validation.
pub async fn get_account(id: &str, token: &str) -> Result<Account, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Account id is required.".to_string()));
    }

    get_json(&format!("/accounts/{trimmed}"), &bearer(token)).await
}
