//! Client helper for the listings endpoint.

use crate::{
    app_lib::{AppError, api::bearer, post_json_with_headers},
    features::listings::types::{CreateListingRequest, Listing},
};

/// Creates a listing owned by the bearer of `token`.
pub async fn create_listing(
    request: &CreateListingRequest,
    token: &str,
) -> Result<Listing, AppError> {
    post_json_with_headers("/listings", request, &bearer(token)).await
}
