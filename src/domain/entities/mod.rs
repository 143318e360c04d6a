//! Domain entities for the registration form.
//!
//! - [`CountryRecord`] / [`CountryOption`] - loaded countries and selector rows
//! - [`RegistrationDraft`] - current form values
//! - [`ValidationOutcome`] - ordered rule failures

mod country;
mod draft;
mod outcome;

pub use country::{CountryOption, CountryRecord, DEFAULT_FLAG_BASE, flag_url};
pub use draft::{DraftField, FieldName, Gender, RegistrationDraft, UnknownGender};
pub use outcome::{ValidationFailure, ValidationOutcome, messages};
