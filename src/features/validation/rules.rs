//! Declarative field constraints. Each field owns its rules and messages; a
//! check reports only the first failing constraint so the UI shows one message
//! per field.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static NAME: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-Z'\-\s]+$"));
static UNIVERSITY_EMAIL: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^[^@]+@(umanitoba\.ca|myumanitoba\.ca)$"));
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
});
static LOWERCASE: Lazy<Regex> = Lazy::new(|| compile(r"[a-z]"));
static UPPERCASE: Lazy<Regex> = Lazy::new(|| compile(r"[A-Z]"));
static DIGIT: Lazy<Regex> = Lazy::new(|| compile(r"[0-9]"));
static NO_WHITESPACE: Lazy<Regex> = Lazy::new(|| compile(r"^\S{8,}$"));

/// Email addresses longer than this cannot be delivered.
const MAX_EMAIL_LENGTH: usize = 254;
const MAX_EMAIL_LOCAL_LENGTH: usize = 64;

// Patterns are literals; a failure here is a programming error caught by tests.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid pattern {pattern}: {err}"))
}

/// Named format constraints shared by the forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Letters, spaces, hyphens and apostrophes.
    Name,
    /// `umanitoba.ca` or `myumanitoba.ca` addresses, any case.
    UniversityEmail,
    /// Eight or more non-whitespace characters with a lowercase letter, an
    /// uppercase letter and a digit.
    Password,
    /// Absolute `http` or `https` URL.
    HttpUrl,
}

impl Pattern {
    pub fn matches(self, value: &str) -> bool {
        match self {
            Pattern::Name => NAME.is_match(value),
            Pattern::UniversityEmail => UNIVERSITY_EMAIL.is_match(value),
            Pattern::Password => {
                LOWERCASE.is_match(value)
                    && UPPERCASE.is_match(value)
                    && DIGIT.is_match(value)
                    && NO_WHITESPACE.is_match(value)
            }
            Pattern::HttpUrl => Url::parse(value)
                .is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host()),
        }
    }
}

/// Syntactic email check, applied before any domain restriction.
pub fn is_email(value: &str) -> bool {
    let Some((local, _)) = value.split_once('@') else {
        return false;
    };
    value.len() <= MAX_EMAIL_LENGTH
        && local.len() <= MAX_EMAIL_LOCAL_LENGTH
        && EMAIL.is_match(value)
}

/// A single failed constraint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Violation {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Email,
    Number,
    Min(f64),
    Pattern(Pattern),
}

/// User-facing messages for one field. Missing entries render as empty text.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldMessages {
    pub required: Option<&'static str>,
    pub min_length: Option<&'static str>,
    pub max_length: Option<&'static str>,
    pub email: Option<&'static str>,
    pub number: Option<&'static str>,
    pub min: Option<&'static str>,
    pub pattern: Option<&'static str>,
}

/// Constraints for one form field.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub email: bool,
    pub numeric: bool,
    /// Numeric lower bound; implies `numeric`.
    pub min: Option<f64>,
    pub pattern: Option<Pattern>,
    pub messages: FieldMessages,
}

impl FieldRules {
    /// Rules that accept anything, used as the start of a const builder chain.
    pub const fn new() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
            email: false,
            numeric: false,
            min: None,
            pattern: None,
            messages: FieldMessages {
                required: None,
                min_length: None,
                max_length: None,
                email: None,
                number: None,
                min: None,
                pattern: None,
            },
        }
    }

    pub const fn required(mut self, message: &'static str) -> Self {
        self.required = true;
        self.messages.required = Some(message);
        self
    }

    pub const fn min_length(mut self, length: usize, message: &'static str) -> Self {
        self.min_length = Some(length);
        self.messages.min_length = Some(message);
        self
    }

    pub const fn max_length(mut self, length: usize, message: &'static str) -> Self {
        self.max_length = Some(length);
        self.messages.max_length = Some(message);
        self
    }

    pub const fn email(mut self, message: &'static str) -> Self {
        self.email = true;
        self.messages.email = Some(message);
        self
    }

    pub const fn numeric(mut self, message: &'static str) -> Self {
        self.numeric = true;
        self.messages.number = Some(message);
        self
    }

    pub const fn min(mut self, bound: f64, message: &'static str) -> Self {
        self.min = Some(bound);
        self.messages.min = Some(message);
        self
    }

    pub const fn pattern(mut self, pattern: Pattern, message: &'static str) -> Self {
        self.pattern = Some(pattern);
        self.messages.pattern = Some(message);
        self
    }

    /// Returns the first failing constraint in the order required, min length,
    /// max length, email, number, min, pattern. Empty input can only fail
    /// `Required`.
    pub fn check(&self, value: &str) -> Option<Violation> {
        if value.is_empty() {
            return self.required.then_some(Violation::Required);
        }

        let length = value.chars().count();
        if let Some(min) = self.min_length {
            if length < min {
                return Some(Violation::MinLength(min));
            }
        }
        if let Some(max) = self.max_length {
            if length > max {
                return Some(Violation::MaxLength(max));
            }
        }
        if self.email && !is_email(value) {
            return Some(Violation::Email);
        }
        if self.numeric || self.min.is_some() {
            match (parse_number(value), self.min) {
                (None, _) => return Some(Violation::Number),
                (Some(number), Some(min)) if number < min => return Some(Violation::Min(min)),
                _ => {}
            }
        }
        match self.pattern {
            Some(pattern) if !pattern.matches(value) => Some(Violation::Pattern(pattern)),
            _ => None,
        }
    }

    /// Message for a violation of this field, or `""` when none is defined.
    pub fn message(&self, violation: Violation) -> &'static str {
        let messages = &self.messages;
        let message = match violation {
            Violation::Required => messages.required,
            Violation::MinLength(_) => messages.min_length,
            Violation::MaxLength(_) => messages.max_length,
            Violation::Email => messages.email,
            Violation::Number => messages.number,
            Violation::Min(_) => messages.min,
            Violation::Pattern(_) => messages.pattern,
        };
        message.unwrap_or_default()
    }
}

/// Parses a finite decimal number, tolerating surrounding whitespace.
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

#[cfg(test)]
mod tests {
    use super::{FieldMessages, FieldRules, Pattern, Violation, is_email, parse_number};

    #[test]
    fn name_pattern_allows_letters_spaces_hyphens_apostrophes() {
        assert!(Pattern::Name.matches("Mary-Jane O'Neil"));
        assert!(Pattern::Name.matches("Jo Ann"));
        assert!(!Pattern::Name.matches("R2D2"));
        assert!(!Pattern::Name.matches("Zoë"));
        assert!(!Pattern::Name.matches("a_b"));
    }

    #[test]
    fn university_email_accepts_both_domains_case_insensitively() {
        assert!(Pattern::UniversityEmail.matches("student@umanitoba.ca"));
        assert!(Pattern::UniversityEmail.matches("student@myumanitoba.ca"));
        assert!(Pattern::UniversityEmail.matches("Student@MyUManitoba.CA"));
        assert!(!Pattern::UniversityEmail.matches("student@gmail.com"));
        assert!(!Pattern::UniversityEmail.matches("student@cs.umanitoba.ca"));
        assert!(!Pattern::UniversityEmail.matches("student@umanitoba.ca.evil.com"));
    }

    #[test]
    fn password_pattern_requires_mixed_case_digit_and_no_spaces() {
        assert!(Pattern::Password.matches("Passw0rd"));
        assert!(Pattern::Password.matches("aB3!aB3!aB3!"));
        assert!(!Pattern::Password.matches("password1"));
        assert!(!Pattern::Password.matches("PASSWORD1"));
        assert!(!Pattern::Password.matches("Password"));
        assert!(!Pattern::Password.matches("Pass w0rd"));
        assert!(!Pattern::Password.matches("Pa55w0r"));
    }

    #[test]
    fn http_url_pattern_rejects_other_schemes_and_relative_paths() {
        assert!(Pattern::HttpUrl.matches("https://cdn.example.com/couch.png"));
        assert!(Pattern::HttpUrl.matches("http://localhost:8000/img/1"));
        assert!(!Pattern::HttpUrl.matches("ftp://example.com/file"));
        assert!(!Pattern::HttpUrl.matches("/assets/couch.png"));
        assert!(!Pattern::HttpUrl.matches("javascript:alert(1)"));
    }

    #[test]
    fn is_email_checks_syntax_only() {
        assert!(is_email("someone@example.com"));
        assert!(is_email("first.last+tag@umanitoba.ca"));
        assert!(!is_email("someone"));
        assert!(!is_email("someone@"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("some one@example.com"));
        assert!(!is_email(&format!("{}@example.com", "a".repeat(65))));
    }

    #[test]
    fn check_reports_required_only_for_empty_values() {
        let rules = FieldRules {
            required: true,
            min_length: Some(2),
            pattern: Some(Pattern::Name),
            ..FieldRules::default()
        };
        assert_eq!(rules.check(""), Some(Violation::Required));

        let optional = FieldRules {
            min_length: Some(2),
            ..FieldRules::default()
        };
        assert_eq!(optional.check(""), None);
    }

    #[test]
    fn check_reports_first_failure_in_order() {
        let rules = FieldRules {
            required: true,
            min_length: Some(2),
            max_length: Some(5),
            pattern: Some(Pattern::Name),
            ..FieldRules::default()
        };
        assert_eq!(rules.check("1"), Some(Violation::MinLength(2)));
        assert_eq!(rules.check("123456"), Some(Violation::MaxLength(5)));
        assert_eq!(rules.check("12"), Some(Violation::Pattern(Pattern::Name)));
        assert_eq!(rules.check("Al"), None);
    }

    #[test]
    fn check_counts_characters_not_bytes() {
        let rules = FieldRules {
            max_length: Some(3),
            ..FieldRules::default()
        };
        assert_eq!(rules.check("ééé"), None);
        assert_eq!(rules.check("éééé"), Some(Violation::MaxLength(3)));
    }

    #[test]
    fn check_validates_numeric_lower_bound() {
        let rules = FieldRules {
            required: true,
            min: Some(0.0),
            ..FieldRules::default()
        };
        assert_eq!(rules.check("12.50"), None);
        assert_eq!(rules.check("0"), None);
        assert_eq!(rules.check("-1"), Some(Violation::Min(0.0)));
        assert_eq!(rules.check("twelve"), Some(Violation::Number));
        assert_eq!(rules.check("inf"), Some(Violation::Number));
    }

    #[test]
    fn builder_sets_constraints_and_messages() {
        const RULES: FieldRules = FieldRules::new()
            .required("Title is required.")
            .min_length(2, "Too short.")
            .max_length(4, "Too long.");

        assert_eq!(RULES.check(""), Some(Violation::Required));
        assert_eq!(RULES.message(Violation::Required), "Title is required.");
        assert_eq!(RULES.check("abcde"), Some(Violation::MaxLength(4)));
        assert_eq!(RULES.message(Violation::MaxLength(4)), "Too long.");
        assert_eq!(RULES.check("abc"), None);
    }

    #[test]
    fn message_falls_back_to_empty_text() {
        let rules = FieldRules {
            required: true,
            max_length: Some(3),
            messages: FieldMessages {
                required: Some("Needed."),
                ..FieldMessages::default()
            },
            ..FieldRules::default()
        };
        assert_eq!(rules.message(Violation::Required), "Needed.");
        assert_eq!(rules.message(Violation::MaxLength(3)), "");
    }

    #[test]
    fn parse_number_rejects_non_finite_values() {
        assert_eq!(parse_number(" 4.5 "), Some(4.5));
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number(""), None);
    }
}
