//! Client-side form validation shared by the signup, login and listing forms.
//! Rules are declared once per field and checked on every input change; the
//! API re-validates everything, so these checks only drive UX feedback.
//!
//! Flow Overview: a form collects raw input, `FieldErrors::collect` runs each
//! field's rules, and `submit` returns normalized values only when every field
//! passes.

mod rules;

pub use rules::{FieldRules, Pattern, Violation, parse_number};

/// A field of a specific form with statically declared rules.
pub trait FormField: Copy + Eq + 'static {
    /// Every field, in display order.
    const ALL: &'static [Self];

    fn rules(self) -> &'static FieldRules;

    /// Stable key used for element ids and logging.
    fn key(self) -> &'static str;
}

/// First violation of one field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldError<F> {
    pub field: F,
    pub violation: Violation,
    pub message: &'static str,
}

/// Errors of a whole form, at most one per field, in field order.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldErrors<F> {
    errors: Vec<FieldError<F>>,
}

impl<F> Default for FieldErrors<F> {
    fn default() -> Self {
        Self { errors: Vec::new() }
    }
}

impl<F: FormField> FieldErrors<F> {
    /// Checks every field, reading raw values through `value_of`.
    pub fn collect<'a>(value_of: impl Fn(F) -> &'a str) -> Self {
        let errors = F::ALL
            .iter()
            .filter_map(|&field| {
                let rules = field.rules();
                rules.check(value_of(field)).map(|violation| FieldError {
                    field,
                    violation,
                    message: rules.message(violation),
                })
            })
            .collect();
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: F) -> Option<&FieldError<F>> {
        self.errors.iter().find(|error| error.field == field)
    }

    /// Message for `field`, or `""` when the field is valid.
    pub fn message(&self, field: F) -> &'static str {
        self.get(field).map(|error| error.message).unwrap_or_default()
    }

    /// Keys of the failing fields, for logging without values.
    pub fn keys(&self) -> Vec<&'static str> {
        self.errors.iter().map(|error| error.field.key()).collect()
    }
}

/// Per-field touched flags. A message is shown only for touched fields, and a
/// rejected submit touches every field.
#[derive(Clone, Debug, PartialEq)]
pub struct Touched<F> {
    fields: Vec<F>,
}

impl<F> Default for Touched<F> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<F: FormField> Touched<F> {
    pub fn touch(&mut self, field: F) {
        if !self.fields.contains(&field) {
            self.fields.push(field);
        }
    }

    pub fn touch_all(&mut self) {
        for &field in F::ALL {
            self.touch(field);
        }
    }

    pub fn is_touched(&self, field: F) -> bool {
        self.fields.contains(&field)
    }

    /// Message to render for `field` given the current errors.
    pub fn visible_message(&self, errors: &FieldErrors<F>, field: F) -> &'static str {
        if self.is_touched(field) {
            errors.message(field)
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldErrors, FieldRules, FormField, Pattern, Touched, Violation};

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Field {
        Name,
        Nickname,
    }

    const NAME: FieldRules = FieldRules::new()
        .required("Name is required.")
        .pattern(Pattern::Name, "Letters only.");
    const NICKNAME: FieldRules = FieldRules::new().max_length(3, "Nickname is too long.");

    impl FormField for Field {
        const ALL: &'static [Self] = &[Field::Name, Field::Nickname];

        fn rules(self) -> &'static FieldRules {
            match self {
                Field::Name => &NAME,
                Field::Nickname => &NICKNAME,
            }
        }

        fn key(self) -> &'static str {
            match self {
                Field::Name => "name",
                Field::Nickname => "nickname",
            }
        }
    }

    #[test]
    fn collect_records_first_violation_per_field_in_order() {
        let errors = FieldErrors::collect(|field| match field {
            Field::Name => "",
            Field::Nickname => "Robbie",
        });

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Name).map(|e| e.violation), Some(Violation::Required));
        assert_eq!(errors.message(Field::Nickname), "Nickname is too long.");
        assert_eq!(errors.keys(), vec!["name", "nickname"]);
    }

    #[test]
    fn collect_is_empty_for_valid_input() {
        let errors = FieldErrors::collect(|field| match field {
            Field::Name => "Ada",
            Field::Nickname => "",
        });
        assert!(errors.is_empty());
        assert_eq!(errors.message(Field::Name), "");
    }

    #[test]
    fn touched_hides_messages_until_blur_or_submit() {
        let errors = FieldErrors::collect(|field| match field {
            Field::Name => "4",
            Field::Nickname => "Robbie",
        });
        let mut touched = Touched::default();
        assert_eq!(touched.visible_message(&errors, Field::Name), "");

        touched.touch(Field::Name);
        assert_eq!(touched.visible_message(&errors, Field::Name), "Letters only.");
        assert_eq!(touched.visible_message(&errors, Field::Nickname), "");

        touched.touch_all();
        assert!(touched.is_touched(Field::Nickname));
        assert_eq!(
            touched.visible_message(&errors, Field::Nickname),
            "Nickname is too long."
        );
    }
}
