//! Response body decoding shared by the HTTP helpers.

use super::errors::AppError;
use serde::de::DeserializeOwned;

/// Decodes a successful response body, treating an empty body (e.g. `204`)
/// as `T::default()`.
pub fn decode_or_default<T: DeserializeOwned + Default>(body: &str) -> Result<T, AppError> {
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(body)
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

#[cfg(test)]
mod tests {
    use super::decode_or_default;
    use crate::{app_lib::AppError, features::auth::types::VerifyEmailResponse};

    #[test]
    fn empty_success_body_decodes_to_default() {
        let response: VerifyEmailResponse = decode_or_default("").expect("empty body");
        assert_eq!(response.message, None);

        let response: VerifyEmailResponse = decode_or_default(" \n").expect("blank body");
        assert_eq!(response.message, None);
    }

    #[test]
    fn json_body_is_decoded() {
        let response: VerifyEmailResponse =
            decode_or_default(r#"{"message":"Email verified."}"#).expect("json body");
        assert_eq!(response.message.as_deref(), Some("Email verified."));
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let result = decode_or_default::<VerifyEmailResponse>("<html>");
        assert!(matches!(result, Err(AppError::Parse(_))));
    }
}
