//! DTOs for the registration validation endpoint.

use crate::domain::entities::{
    DraftField, Gender, RegistrationDraft, ValidationFailure, ValidationOutcome, messages,
};
use crate::utils::form_input::lenient_age;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

/// Upper bound for free-text fields.
pub const MAX_TEXT_LEN: u64 = 256;

/// Form values submitted as JSON.
///
/// Missing fields take the value an untouched form would have. Keys are
/// snake_case; the camelCase names used by browser clients are accepted too.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct RegistrationRequest {
    #[serde(default, alias = "firstName")]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub first_name: String,

    #[serde(default, alias = "lastName")]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub last_name: String,

    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub password: String,

    #[serde(default, alias = "confirmPassword")]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub confirm_password: String,

    /// Number or numeric string; anything else counts as unset.
    #[serde(default, deserialize_with = "lenient_age")]
    pub age: Option<i64>,

    /// `YYYY-MM-DD`; defaults to today when absent or empty.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default, alias = "birthDate")]
    pub birth_date: Option<NaiveDate>,

    #[serde(default)]
    #[validate(length(max = 8))]
    pub country: String,

    /// `Male`, `Female` or empty.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub gender: Option<Gender>,

    #[serde(default, alias = "marketingConsent")]
    pub marketing_consent: bool,

    #[serde(default, alias = "termsAccepted")]
    pub terms_accepted: bool,
}

impl RegistrationRequest {
    /// Builds the draft these values describe.
    pub fn into_draft(self) -> RegistrationDraft {
        let draft = match self.birth_date {
            Some(date) => RegistrationDraft::with_birth_date(date),
            None => RegistrationDraft::new(),
        };

        draft.with_all([
            DraftField::FirstName(self.first_name),
            DraftField::LastName(self.last_name),
            DraftField::Email(self.email),
            DraftField::Password(self.password),
            DraftField::ConfirmPassword(self.confirm_password),
            DraftField::Age(self.age),
            DraftField::Country(self.country),
            DraftField::Gender(self.gender),
            DraftField::MarketingConsent(self.marketing_consent),
            DraftField::TermsAccepted(self.terms_accepted),
        ])
    }
}

/// Validation result.
///
/// `message` is present only when every rule passed.
#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,

    pub failures: Vec<ValidationFailure>,
}

impl From<ValidationOutcome> for RegistrationResponse {
    fn from(outcome: ValidationOutcome) -> Self {
        let ok = outcome.is_ok();

        Self {
            ok,
            message: ok.then_some(messages::FORM_VALID),
            failures: outcome.failures,
        }
    }
}
