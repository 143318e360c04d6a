//! Registration rules.
//!
//! Every rule runs on every call; a failing rule never stops the ones after
//! it. The only dependency between rules is that the password confirmation is
//! compared only when the password itself is acceptable.

use crate::domain::entities::{FieldName, RegistrationDraft, ValidationOutcome, messages};
use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").expect("email pattern is valid")
});

static PASSWORD_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9@$!%*?&]{8,}$").expect("password pattern is valid"));

static LETTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]").expect("letter pattern is valid"));

static DIGIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]").expect("digit pattern is valid"));

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 99;

/// How the birth-date rule is evaluated.
///
/// The derived age the form computes from the birth date cancels every
/// component out and is always zero, so enforcing the rule rejects every
/// draft. `Off` skips it; `Legacy` keeps the arithmetic as it is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BirthDatePolicy {
    #[default]
    Off,
    Legacy,
}

impl BirthDatePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            BirthDatePolicy::Off => "off",
            BirthDatePolicy::Legacy => "legacy",
        }
    }
}

impl fmt::Display for BirthDatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("BIRTH_DATE_CHECK must be 'off' or 'legacy', got '{0}'")]
pub struct UnknownBirthDatePolicy(pub String);

impl FromStr for BirthDatePolicy {
    type Err = UnknownBirthDatePolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(BirthDatePolicy::Off),
            "legacy" => Ok(BirthDatePolicy::Legacy),
            _ => Err(UnknownBirthDatePolicy(s.to_string())),
        }
    }
}

/// Applies the form rules to drafts.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationValidator {
    birth_date_policy: BirthDatePolicy,
}

impl RegistrationValidator {
    pub fn new(birth_date_policy: BirthDatePolicy) -> Self {
        Self { birth_date_policy }
    }

    /// Runs every rule against `draft` and collects the failures in rule order.
    pub fn validate(&self, draft: &RegistrationDraft) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::default();

        if !longer_than_two(&draft.first_name) {
            outcome.fail(FieldName::FirstName, messages::FIRST_NAME_TOO_SHORT);
        }

        if !longer_than_two(&draft.last_name) {
            outcome.fail(FieldName::LastName, messages::LAST_NAME_TOO_SHORT);
        }

        if !is_valid_email(&draft.email) {
            outcome.fail(FieldName::Email, messages::INVALID_EMAIL);
        }

        if !is_valid_password(&draft.password) {
            outcome.fail(FieldName::Password, messages::WEAK_PASSWORD);
        } else if draft.password != draft.confirm_password {
            outcome.fail(FieldName::ConfirmPassword, messages::PASSWORD_MISMATCH);
        }

        if !is_valid_age(draft.age) {
            outcome.fail(FieldName::Age, messages::INVALID_AGE);
        }

        if self.birth_date_policy == BirthDatePolicy::Legacy
            && legacy_birth_date_age(draft.birth_date, Local::now().date_naive()) < MIN_AGE
        {
            outcome.fail(FieldName::BirthDate, messages::UNDERAGE);
        }

        if !draft.terms_accepted {
            outcome.fail(FieldName::TermsAccepted, messages::TERMS_NOT_ACCEPTED);
        }

        if draft.gender.is_none() {
            outcome.fail(FieldName::Gender, messages::GENDER_MISSING);
        }

        if draft.country.is_empty() {
            outcome.fail(FieldName::Country, messages::COUNTRY_MISSING);
        }

        outcome
    }
}

/// Validates with the default policy.
pub fn validate(draft: &RegistrationDraft) -> ValidationOutcome {
    RegistrationValidator::default().validate(draft)
}

/// Length is counted in UTF-16 code units, the unit browsers report for
/// text inputs.
fn longer_than_two(value: &str) -> bool {
    value.encode_utf16().count() > 2
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// At least 8 characters from `[A-Za-z0-9@$!%*?&]` with a letter and a digit.
pub fn is_valid_password(password: &str) -> bool {
    PASSWORD_CHARSET_REGEX.is_match(password)
        && LETTER_REGEX.is_match(password)
        && DIGIT_REGEX.is_match(password)
}

pub fn is_valid_age(age: Option<i64>) -> bool {
    age.is_some_and(|a| (MIN_AGE..=MAX_AGE).contains(&a))
}

/// Age as the form derives it: current year, birth month and birth day each
/// subtracted from themselves. Always zero.
#[allow(clippy::eq_op)]
pub fn legacy_birth_date_age(birth_date: NaiveDate, today: NaiveDate) -> i64 {
    let year = i64::from(today.year());
    let month = i64::from(birth_date.month());
    let day = i64::from(birth_date.day());

    year - year + month - month + day - day
}
