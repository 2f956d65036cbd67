//! Request and response types for account auth calls. Signup and login
//! payloads carry the password, so they must never be logged; the password is
//! exposed only while serializing.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};

use super::forms::{LoginSubmission, SignupSubmission};

fn expose<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest {
    pub email: String,
    #[serde(serialize_with = "expose")]
    pub password: SecretString,
    pub fname: String,
    pub lname: String,
}

impl From<SignupSubmission> for SignupRequest {
    fn from(submission: SignupSubmission) -> Self {
        Self {
            email: submission.email,
            password: submission.password,
            fname: submission.first_name,
            lname: submission.last_name,
        }
    }
}

/// Account summary echoed back by signup.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignupResponse {
    pub email: String,
    pub fname: String,
    pub lname: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(serialize_with = "expose")]
    pub password: SecretString,
}

impl From<LoginSubmission> for LoginRequest {
    fn from(submission: LoginSubmission) -> Self {
        Self {
            email: submission.email,
            password: submission.password,
        }
    }
}

/// Bearer token issued on login.
#[derive(Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct VerifyEmailResponse {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{LoginRequest, SignupRequest, TokenResponse};
    use crate::features::auth::forms::{LoginForm, SignupForm};

    #[test]
    fn signup_request_uses_api_field_names() {
        let form = SignupForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "Ada@UManitoba.ca".to_string(),
            password: "Analyt1cal".to_string(),
        };
        let request = SignupRequest::from(form.submit().expect("valid form"));
        let json = serde_json::to_value(&request).expect("serializable");

        assert_eq!(
            json,
            serde_json::json!({
                "email": "ada@umanitoba.ca",
                "password": "Analyt1cal",
                "fname": "Ada",
                "lname": "Lovelace",
            })
        );
    }

    #[test]
    fn login_request_debug_redacts_password() {
        let form = LoginForm {
            email: "ada@umanitoba.ca".to_string(),
            password: "Analyt1cal".to_string(),
        };
        let request = LoginRequest::from(form.submit().expect("valid form"));
        let debug = format!("{request:?}");
        assert!(!debug.contains("Analyt1cal"));

        let json = serde_json::to_string(&request).expect("serializable");
        assert!(json.contains(r#""password":"Analyt1cal""#));
    }

    #[test]
    fn token_response_defaults_token_type() {
        let token: TokenResponse =
            serde_json::from_str(r#"{"access_token":"abc"}"#).expect("valid json");
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.token_type, "bearer");
    }
}
