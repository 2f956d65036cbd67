//! Email verification flow driven by the one-time link
//! `/verify-email?token=...`. The page starts in `Loading`, issues a single
//! verify call and settles in `Success` or `Error`; each terminal state
//! schedules one redirect.
//!
//! Flow Overview: `begin` inspects the token from the URL, the caller runs the
//! verify request for the returned token, and `finish` records the outcome.

use crate::app_lib::AppError;
use url::form_urlencoded;

pub const MISSING_TOKEN_MESSAGE: &str = "No verification token provided.";
pub const DEFAULT_FAILURE_MESSAGE: &str =
    "Email verification failed. Please try again or contact support.";

/// Delay before leaving the page when the link carries no token.
pub const MISSING_TOKEN_REDIRECT_MS: u32 = 2_000;
/// Delay before leaving the page once the verify call settled.
pub const SETTLED_REDIRECT_MS: u32 = 3_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyStatus {
    Loading,
    Success,
    Error(String),
}

impl VerifyStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, VerifyStatus::Loading)
    }
}

/// Navigation scheduled by a terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub path: &'static str,
    pub delay_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationFlow {
    status: VerifyStatus,
    redirect: Option<Redirect>,
}

impl Default for VerificationFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl VerificationFlow {
    pub fn new() -> Self {
        Self {
            status: VerifyStatus::Loading,
            redirect: None,
        }
    }

    pub fn status(&self) -> &VerifyStatus {
        &self.status
    }

    pub fn redirect(&self) -> Option<Redirect> {
        self.redirect
    }

    /// Starts the flow. Returns the token to verify, or settles in `Error`
    /// with a redirect to signup when the link carries none.
    pub fn begin(&mut self, token: Option<&str>) -> Option<String> {
        if self.status.is_terminal() {
            return None;
        }

        match token.map(str::trim).filter(|token| !token.is_empty()) {
            Some(token) => Some(token.to_string()),
            None => {
                self.settle(
                    VerifyStatus::Error(MISSING_TOKEN_MESSAGE.to_string()),
                    Redirect {
                        path: "/signup",
                        delay_ms: MISSING_TOKEN_REDIRECT_MS,
                    },
                );
                None
            }
        }
    }

    /// Records the verify call's outcome. Ignored once the flow has settled.
    pub fn finish(&mut self, result: Result<(), AppError>) -> Option<Redirect> {
        if self.status.is_terminal() {
            return None;
        }

        match result {
            Ok(()) => self.settle(
                VerifyStatus::Success,
                Redirect {
                    path: "/login",
                    delay_ms: SETTLED_REDIRECT_MS,
                },
            ),
            Err(err) => {
                let message = err.api_message().unwrap_or(DEFAULT_FAILURE_MESSAGE);
                self.settle(
                    VerifyStatus::Error(message.to_string()),
                    Redirect {
                        path: "/signup",
                        delay_ms: SETTLED_REDIRECT_MS,
                    },
                );
            }
        }

        self.redirect
    }

    fn settle(&mut self, status: VerifyStatus, redirect: Redirect) {
        self.status = status;
        self.redirect = Some(redirect);
    }
}

/// Extracts the `token` parameter from a query string, with or without `?`.
pub fn token_from_query(search: &str) -> Option<String> {
    let query = search.trim_start_matches('?');
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "token")
        .map(|(_, value)| value.into_owned())
}

/// API path for verifying `token`, percent-encoding the value.
pub fn verify_path(token: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(token.as_bytes()).collect();
    format!("/accounts/verify-email?token={encoded}")
}

#[cfg(test)]
mod tests {
    use super::{
        DEFAULT_FAILURE_MESSAGE, MISSING_TOKEN_MESSAGE, Redirect, VerificationFlow, VerifyStatus,
        token_from_query, verify_path,
    };
    use crate::app_lib::AppError;

    #[test]
    fn starts_loading_without_redirect() {
        let flow = VerificationFlow::new();
        assert_eq!(flow.status(), &VerifyStatus::Loading);
        assert_eq!(flow.redirect(), None);
    }

    #[test]
    fn missing_token_errors_and_redirects_to_signup_after_two_seconds() {
        let mut flow = VerificationFlow::new();
        assert_eq!(flow.begin(None), None);
        assert_eq!(
            flow.status(),
            &VerifyStatus::Error(MISSING_TOKEN_MESSAGE.to_string())
        );
        assert_eq!(
            flow.redirect(),
            Some(Redirect {
                path: "/signup",
                delay_ms: 2_000
            })
        );
    }

    #[test]
    fn blank_token_counts_as_missing() {
        let mut flow = VerificationFlow::new();
        assert_eq!(flow.begin(Some("   ")), None);
        assert!(flow.status().is_terminal());
    }

    #[test]
    fn success_redirects_to_login_after_three_seconds() {
        let mut flow = VerificationFlow::new();
        assert_eq!(flow.begin(Some("abc123")), Some("abc123".to_string()));
        assert_eq!(flow.status(), &VerifyStatus::Loading);

        let redirect = flow.finish(Ok(()));
        assert_eq!(flow.status(), &VerifyStatus::Success);
        assert_eq!(
            redirect,
            Some(Redirect {
                path: "/login",
                delay_ms: 3_000
            })
        );
    }

    #[test]
    fn failure_surfaces_api_message() {
        let mut flow = VerificationFlow::new();
        flow.begin(Some("expired"));
        let redirect = flow.finish(Err(AppError::from_response(
            400,
            r#"{"error_message":"Verification token has expired."}"#,
        )));

        assert_eq!(
            flow.status(),
            &VerifyStatus::Error("Verification token has expired.".to_string())
        );
        assert_eq!(redirect.map(|r| r.path), Some("/signup"));
        assert_eq!(redirect.map(|r| r.delay_ms), Some(3_000));
    }

    #[test]
    fn failure_without_api_message_uses_default() {
        let mut flow = VerificationFlow::new();
        flow.begin(Some("abc"));
        flow.finish(Err(AppError::Network("offline".to_string())));
        assert_eq!(
            flow.status(),
            &VerifyStatus::Error(DEFAULT_FAILURE_MESSAGE.to_string())
        );
    }

    #[test]
    fn terminal_states_are_final() {
        let mut flow = VerificationFlow::new();
        flow.begin(Some("abc"));
        flow.finish(Ok(()));

        assert_eq!(
            flow.finish(Err(AppError::Network("late".to_string()))),
            None
        );
        assert_eq!(flow.begin(None), None);
        assert_eq!(flow.status(), &VerifyStatus::Success);
        assert_eq!(flow.redirect().map(|r| r.path), Some("/login"));
    }

    #[test]
    fn token_from_query_decodes_the_token_parameter() {
        assert_eq!(token_from_query("?token=abc%2B1"), Some("abc+1".to_string()));
        assert_eq!(
            token_from_query("utm=mail&token=xyz"),
            Some("xyz".to_string())
        );
        assert_eq!(token_from_query("?other=1"), None);
        assert_eq!(token_from_query(""), None);
    }

    #[test]
    fn verify_path_percent_encodes_the_token() {
        assert_eq!(verify_path("abc"), "/accounts/verify-email?token=abc");
        assert_eq!(
            verify_path("a+b/c=="),
            "/accounts/verify-email?token=a%2Bb%2Fc%3D%3D"
        );
    }
}
