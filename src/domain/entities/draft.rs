//! Registration draft: the in-progress form values for one user.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender choices offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Wire value used by forms and the JSON API.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Label shown next to the radio button.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Mężczyzna",
            Gender::Female => "Kobieta",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a gender value is neither `Male` nor `Female`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gender value: {0}")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            other => Err(UnknownGender(other.to_string())),
        }
    }
}

/// Snapshot of every form field.
///
/// Drafts are values: an input event produces a new draft through
/// [`RegistrationDraft::with`], and validation only reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub age: Option<i64>,
    pub birth_date: NaiveDate,
    /// Country code, empty until one is chosen.
    pub country: String,
    pub gender: Option<Gender>,
    /// Collected but never read by validation.
    pub marketing_consent: bool,
    pub terms_accepted: bool,
}

impl RegistrationDraft {
    /// Empty draft with the birth date set to today, as a fresh form shows it.
    pub fn new() -> Self {
        Self::with_birth_date(Local::now().date_naive())
    }

    /// Empty draft with an explicit birth date.
    pub fn with_birth_date(birth_date: NaiveDate) -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            age: None,
            birth_date,
            country: String::new(),
            gender: None,
            marketing_consent: false,
            terms_accepted: false,
        }
    }

    /// Returns a new draft with one field replaced.
    pub fn with(self, field: DraftField) -> Self {
        match field {
            DraftField::FirstName(v) => Self {
                first_name: v,
                ..self
            },
            DraftField::LastName(v) => Self {
                last_name: v,
                ..self
            },
            DraftField::Email(v) => Self { email: v, ..self },
            DraftField::Password(v) => Self {
                password: v,
                ..self
            },
            DraftField::ConfirmPassword(v) => Self {
                confirm_password: v,
                ..self
            },
            DraftField::Age(v) => Self { age: v, ..self },
            DraftField::BirthDate(v) => Self {
                birth_date: v,
                ..self
            },
            DraftField::Country(v) => Self { country: v, ..self },
            DraftField::Gender(v) => Self { gender: v, ..self },
            DraftField::MarketingConsent(v) => Self {
                marketing_consent: v,
                ..self
            },
            DraftField::TermsAccepted(v) => Self {
                terms_accepted: v,
                ..self
            },
        }
    }

    /// Applies a sequence of field replacements in order.
    pub fn with_all(self, fields: impl IntoIterator<Item = DraftField>) -> Self {
        fields.into_iter().fold(self, Self::with)
    }
}

impl Default for RegistrationDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// A single field update carrying the new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    FirstName(String),
    LastName(String),
    Email(String),
    Password(String),
    ConfirmPassword(String),
    Age(Option<i64>),
    BirthDate(NaiveDate),
    Country(String),
    Gender(Option<Gender>),
    MarketingConsent(bool),
    TermsAccepted(bool),
}

/// Identifies a form field in validation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    Age,
    BirthDate,
    TermsAccepted,
    Gender,
    Country,
}

impl FieldName {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::FirstName => "first_name",
            FieldName::LastName => "last_name",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirm_password",
            FieldName::Age => "age",
            FieldName::BirthDate => "birth_date",
            FieldName::TermsAccepted => "terms_accepted",
            FieldName::Gender => "gender",
            FieldName::Country => "country",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
