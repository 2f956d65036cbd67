//! Client wrappers for the account auth endpoints. These helpers centralize
//! paths and keep credentials out of route code.

use crate::{
    app_lib::{AppError, get_json_or_default, post_json},
    features::auth::{
        types::{LoginRequest, SignupRequest, SignupResponse, TokenResponse, VerifyEmailResponse},
        verification::verify_path,
    },
};

/// Creates an account; the API then mails the verification link.
/// Must never log the request, which carries the password.
pub async fn signup(request: &SignupRequest) -> Result<SignupResponse, AppError> {
    post_json("/accounts", request).await
}

/// Exchanges credentials for a bearer token.
pub async fn login(request: &LoginRequest) -> Result<TokenResponse, AppError> {
    post_json("/accounts/login", request).await
}

/// Confirms email ownership with the token from the one-time link. An empty
/// success body still counts as verified.
pub async fn verify_email(token: &str) -> Result<VerifyEmailResponse, AppError> {
    get_json_or_default(&verify_path(token), &[]).await
}
