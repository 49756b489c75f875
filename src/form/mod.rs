//! Account form state
//!
//! Holds the four text values and the terms flag. Every change goes through
//! [`SignupForm::update`], keyed by [`Field`].

pub mod input;

pub use input::TextInput;

/// Identifies one attribute of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    AgreedToTerms,
}

impl Field {
    /// The four text fields, in on-screen order
    pub const TEXT_FIELDS: [Field; 4] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    pub fn is_text(self) -> bool {
        !matches!(self, Field::AgreedToTerms)
    }
}

/// A value carried by an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

impl FieldValue {
    fn into_text(self) -> String {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Flag(b) => b.to_string(),
        }
    }

    fn into_flag(self) -> bool {
        match self {
            FieldValue::Flag(b) => b,
            FieldValue::Text(s) => !s.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agreed_to_terms: bool,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite one field, leaving the rest untouched.
    ///
    /// Nothing is validated. A value of the wrong kind is coerced: text into
    /// the flag is `true` when non-empty, a flag into a text field becomes
    /// `"true"`/`"false"`.
    pub fn update(&mut self, field: Field, value: impl Into<FieldValue>) {
        let value = value.into();
        if field.is_text() == matches!(value, FieldValue::Flag(_)) {
            tracing::debug!(?field, ?value, "coercing mismatched field value");
        }

        match field {
            Field::Name => self.name = value.into_text(),
            Field::Email => self.email = value.into_text(),
            Field::Password => self.password = value.into_text(),
            Field::ConfirmPassword => self.confirm_password = value.into_text(),
            Field::AgreedToTerms => self.agreed_to_terms = value.into_flag(),
        }
    }

    /// Text of a text field (`None` for the flag)
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            Field::ConfirmPassword => Some(&self.confirm_password),
            Field::AgreedToTerms => None,
        }
    }

    pub fn value(&self, field: Field) -> FieldValue {
        match self.text(field) {
            Some(text) => FieldValue::Text(text.to_string()),
            None => FieldValue::Flag(self.agreed_to_terms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_empty() {
        let form = SignupForm::new();
        for field in Field::TEXT_FIELDS {
            assert_eq!(form.text(field), Some(""));
        }
        assert!(!form.agreed_to_terms);
    }

    #[test]
    fn test_update_touches_only_target() {
        let mut form = SignupForm::new();
        form.update(Field::Email, "me@example.com");

        assert_eq!(
            form,
            SignupForm {
                email: "me@example.com".to_string(),
                ..SignupForm::default()
            }
        );

        form.update(Field::AgreedToTerms, true);
        assert_eq!(form.email, "me@example.com");
        assert!(form.agreed_to_terms);
        assert!(form.name.is_empty());
        assert!(form.password.is_empty());
        assert!(form.confirm_password.is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let mut form = SignupForm::new();
        form.update(Field::Name, "A");
        form.update(Field::Name, "Ali");
        assert_eq!(form.name, "Ali");
        assert_eq!(form.value(Field::Name), FieldValue::Text("Ali".into()));
    }

    #[test]
    fn test_no_validation() {
        let mut form = SignupForm::new();
        form.update(Field::Password, "hunter2");
        form.update(Field::ConfirmPassword, "something else");
        form.update(Field::Email, "not an email");
        assert_eq!(form.password, "hunter2");
        assert_eq!(form.confirm_password, "something else");
        assert_eq!(form.email, "not an email");
    }

    #[test]
    fn test_mismatched_values_are_coerced() {
        let mut form = SignupForm::new();
        form.update(Field::AgreedToTerms, "yes");
        assert!(form.agreed_to_terms);
        form.update(Field::AgreedToTerms, "");
        assert!(!form.agreed_to_terms);

        form.update(Field::Name, true);
        assert_eq!(form.name, "true");
        assert_eq!(form.value(Field::AgreedToTerms), FieldValue::Flag(false));
    }
}
