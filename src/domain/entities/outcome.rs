//! Result of validating a registration draft.

use super::draft::FieldName;
use serde::Serialize;

/// User-facing messages, one per rule.
pub mod messages {
    pub const FIRST_NAME_TOO_SHORT: &str = "Imię musi mieć więcej niż 2 znaki";
    pub const LAST_NAME_TOO_SHORT: &str = "Nazwisko musi mieć więcej niż 2 znaki";
    pub const INVALID_EMAIL: &str = "Niepoprawny adres email";
    pub const WEAK_PASSWORD: &str = "Hasło musi być co najmniej 8 znaków, zawierające jedną wielką literę, jedną małą literę, jedną cyfrę i jeden znak specjalny";
    pub const PASSWORD_MISMATCH: &str = "Hasła nie są takie same";
    pub const INVALID_AGE: &str = "Nieprawidłowy wiek";
    pub const UNDERAGE: &str = "Musisz mieć co najmniej 18 lat";
    pub const TERMS_NOT_ACCEPTED: &str = "Musisz zaakceptować regulamin";
    pub const GENDER_MISSING: &str = "Proszę wybrać płeć";
    pub const COUNTRY_MISSING: &str = "Proszę wybrać kraj";
    pub const FORM_VALID: &str = "Formularz jest poprawny";
}

/// One failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub field: FieldName,
    pub message: &'static str,
}

/// Ordered list of failures; empty means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub failures: Vec<ValidationFailure>,
}

impl ValidationOutcome {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    pub(crate) fn fail(&mut self, field: FieldName, message: &'static str) {
        self.failures.push(ValidationFailure { field, message });
    }

    /// Messages in rule order.
    pub fn messages(&self) -> Vec<&'static str> {
        self.failures.iter().map(|f| f.message).collect()
    }

    /// Whether the given field has at least one failure.
    pub fn has_failure(&self, field: FieldName) -> bool {
        self.failures.iter().any(|f| f.field == field)
    }

    /// The alerts a user sees after submitting: every failure, or the
    /// single success message.
    pub fn alerts(&self) -> Vec<&'static str> {
        if self.is_ok() {
            vec![messages::FORM_VALID]
        } else {
            self.messages()
        }
    }
}
