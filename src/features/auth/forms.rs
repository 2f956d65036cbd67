//! Signup and login form models. Raw input is validated as typed; submission
//! normalizes names and emails and wraps the password so it never reaches a
//! log line or a `Debug` dump.

use crate::features::validation::{FieldErrors, FieldRules, FormField, Pattern};
use secrecy::SecretString;

static FIRST_NAME: FieldRules = FieldRules::new()
    .required("First name is required.")
    .min_length(2, "First name must be at least 2 characters.")
    .max_length(50, "First name is too long.")
    .pattern(
        Pattern::Name,
        "First name can only contain letters, spaces, hyphens, and apostrophes.",
    );

static LAST_NAME: FieldRules = FieldRules::new()
    .required("Last name is required.")
    .min_length(2, "Last name must be at least 2 characters.")
    .max_length(50, "Last name is too long.")
    .pattern(
        Pattern::Name,
        "Last name can only contain letters, spaces, hyphens, and apostrophes.",
    );

static EMAIL: FieldRules = FieldRules::new()
    .required("Email is required.")
    .email("Please enter a valid email.")
    .pattern(Pattern::UniversityEmail, "Must be a UManitoba email.");

static SIGNUP_PASSWORD: FieldRules = FieldRules::new()
    .required("Password is required.")
    .min_length(8, "Password must be at least 8 characters.")
    .max_length(128, "Password is too long.")
    .pattern(
        Pattern::Password,
        "Password must contain uppercase, lowercase, and number.",
    );

static LOGIN_PASSWORD: FieldRules = FieldRules::new()
    .required("Password is required.")
    .min_length(8, "Password must be at least 8 characters.");

/// Normalizes emails for API requests: trimmed and lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupField {
    FirstName,
    LastName,
    Email,
    Password,
}

impl FormField for SignupField {
    const ALL: &'static [Self] = &[
        SignupField::FirstName,
        SignupField::LastName,
        SignupField::Email,
        SignupField::Password,
    ];

    fn rules(self) -> &'static FieldRules {
        match self {
            SignupField::FirstName => &FIRST_NAME,
            SignupField::LastName => &LAST_NAME,
            SignupField::Email => &EMAIL,
            SignupField::Password => &SIGNUP_PASSWORD,
        }
    }

    fn key(self) -> &'static str {
        match self {
            SignupField::FirstName => "first_name",
            SignupField::LastName => "last_name",
            SignupField::Email => "email",
            SignupField::Password => "password",
        }
    }
}

/// Raw signup input as typed by the user.
#[derive(Clone, Debug, Default)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Normalized signup values ready for the API.
#[derive(Debug)]
pub struct SignupSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: SecretString,
}

impl SignupForm {
    pub fn value(&self, field: SignupField) -> &str {
        match field {
            SignupField::FirstName => &self.first_name,
            SignupField::LastName => &self.last_name,
            SignupField::Email => &self.email,
            SignupField::Password => &self.password,
        }
    }

    pub fn errors(&self) -> FieldErrors<SignupField> {
        FieldErrors::collect(|field| self.value(field))
    }

    /// Validates the raw values and returns the normalized submission.
    pub fn submit(&self) -> Result<SignupSubmission, FieldErrors<SignupField>> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(SignupSubmission {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: normalize_email(&self.email),
            password: SecretString::from(self.password.clone()),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

impl FormField for LoginField {
    const ALL: &'static [Self] = &[LoginField::Email, LoginField::Password];

    fn rules(self) -> &'static FieldRules {
        match self {
            LoginField::Email => &EMAIL,
            LoginField::Password => &LOGIN_PASSWORD,
        }
    }

    fn key(self) -> &'static str {
        match self {
            LoginField::Email => "email",
            LoginField::Password => "password",
        }
    }
}

/// Raw login input. The email is trimmed before it is validated.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginSubmission {
    pub email: String,
    pub password: SecretString,
}

impl LoginForm {
    pub fn value(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => self.email.trim(),
            LoginField::Password => &self.password,
        }
    }

    pub fn errors(&self) -> FieldErrors<LoginField> {
        FieldErrors::collect(|field| self.value(field))
    }

    pub fn submit(&self) -> Result<LoginSubmission, FieldErrors<LoginField>> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(LoginSubmission {
            email: normalize_email(&self.email),
            password: SecretString::from(self.password.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{LoginField, LoginForm, SignupField, SignupForm, normalize_email};
    use crate::features::validation::{Pattern, Violation};
    use secrecy::ExposeSecret;

    fn valid_signup() -> SignupForm {
        SignupForm {
            first_name: "  Ada ".to_string(),
            last_name: "Lovelace-King".to_string(),
            email: "Ada.L@MyUManitoba.ca".to_string(),
            password: "Analyt1cal".to_string(),
        }
    }

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email("  Student@UManitoba.CA "), "student@umanitoba.ca");
    }

    #[test]
    fn signup_submit_normalizes_values() {
        let submission = valid_signup().submit().expect("valid signup");
        assert_eq!(submission.first_name, "Ada");
        assert_eq!(submission.last_name, "Lovelace-King");
        assert_eq!(submission.email, "ada.l@myumanitoba.ca");
        assert_eq!(submission.password.expose_secret(), "Analyt1cal");
    }

    #[test]
    fn signup_rejects_surrounding_whitespace_in_email() {
        // The email is validated raw; only the submission is trimmed.
        let mut form = valid_signup();
        form.email = " ada@umanitoba.ca".to_string();
        let errors = form.submit().expect_err("untrimmed email fails syntax");
        assert_eq!(
            errors.get(SignupField::Email).map(|e| e.violation),
            Some(Violation::Email)
        );
        assert_eq!(errors.message(SignupField::Email), "Please enter a valid email.");
    }

    #[test]
    fn signup_empty_form_reports_required_for_every_field() {
        let errors = SignupForm::default().errors();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.message(SignupField::FirstName), "First name is required.");
        assert_eq!(errors.message(SignupField::LastName), "Last name is required.");
        assert_eq!(errors.message(SignupField::Email), "Email is required.");
        assert_eq!(errors.message(SignupField::Password), "Password is required.");
    }

    #[test]
    fn signup_reports_field_specific_messages() {
        let form = SignupForm {
            first_name: "A".to_string(),
            last_name: "Sm1th".to_string(),
            email: "ada@gmail.com".to_string(),
            password: "alllowercase1".to_string(),
        };
        let errors = form.errors();
        assert_eq!(
            errors.message(SignupField::FirstName),
            "First name must be at least 2 characters."
        );
        assert_eq!(
            errors.message(SignupField::LastName),
            "Last name can only contain letters, spaces, hyphens, and apostrophes."
        );
        assert_eq!(errors.message(SignupField::Email), "Must be a UManitoba email.");
        assert_eq!(
            errors.get(SignupField::Password).map(|e| e.violation),
            Some(Violation::Pattern(Pattern::Password))
        );
    }

    #[test]
    fn signup_enforces_length_bounds() {
        let mut form = valid_signup();
        form.first_name = "A".repeat(51);
        form.password = format!("Aa1{}", "x".repeat(126));
        let errors = form.errors();
        assert_eq!(errors.message(SignupField::FirstName), "First name is too long.");
        assert_eq!(errors.message(SignupField::Password), "Password is too long.");

        form.password = "Short1".to_string();
        assert_eq!(
            form.errors().message(SignupField::Password),
            "Password must be at least 8 characters."
        );
    }

    #[test]
    fn login_trims_email_before_validation() {
        let form = LoginForm {
            email: "  Student@UManitoba.ca  ".to_string(),
            password: "whatever1".to_string(),
        };
        let submission = form.submit().expect("valid login");
        assert_eq!(submission.email, "student@umanitoba.ca");
        assert_eq!(submission.password.expose_secret(), "whatever1");
    }

    #[test]
    fn login_only_checks_password_length() {
        let form = LoginForm {
            email: "student@umanitoba.ca".to_string(),
            password: "short".to_string(),
        };
        let errors = form.submit().expect_err("short password");
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message(LoginField::Password),
            "Password must be at least 8 characters."
        );

        let lowercase_only = LoginForm {
            email: "student@umanitoba.ca".to_string(),
            password: "lowercaseonly".to_string(),
        };
        assert!(lowercase_only.submit().is_ok());
    }

    #[test]
    fn login_rejects_non_university_email() {
        let form = LoginForm {
            email: "student@example.com".to_string(),
            password: "Password1".to_string(),
        };
        let errors = form.errors();
        assert_eq!(errors.message(LoginField::Email), "Must be a UManitoba email.");
    }
}
