//! Registration form page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
};
use serde::Deserialize;
use validator::Validate;

use crate::api::dto::registration::MAX_TEXT_LEN;
use crate::application::services::DirectoryState;
use crate::domain::entities::{DraftField, Gender, RegistrationDraft, ValidationOutcome};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::form_input::{checkbox, parse_age, parse_birth_date, parse_gender};

/// Raw urlencoded form body.
///
/// Radio buttons and checkboxes that were not selected are absent.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct RegistrationFormInput {
    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub last_name: String,

    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub password: String,

    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub confirm_password: String,

    #[serde(default)]
    #[validate(length(max = 16))]
    pub age: String,

    #[serde(default)]
    #[validate(length(max = 16))]
    pub birth_date: String,

    #[serde(default)]
    #[validate(length(max = 8))]
    pub country: String,

    #[serde(default)]
    pub gender: String,

    #[serde(default)]
    pub marketing_consent: Option<String>,

    #[serde(default)]
    pub terms_accepted: Option<String>,
}

impl RegistrationFormInput {
    /// Applies the submitted values to a fresh draft.
    ///
    /// An unparseable birth date keeps the fresh draft's default of today,
    /// matching a date input the user never touched.
    pub fn into_draft(self) -> RegistrationDraft {
        let mut fields = vec![
            DraftField::FirstName(self.first_name),
            DraftField::LastName(self.last_name),
            DraftField::Email(self.email),
            DraftField::Password(self.password),
            DraftField::ConfirmPassword(self.confirm_password),
            DraftField::Age(parse_age(&self.age)),
            DraftField::Country(self.country),
            DraftField::Gender(parse_gender(&self.gender)),
            DraftField::MarketingConsent(checkbox(self.marketing_consent.as_deref())),
            DraftField::TermsAccepted(checkbox(self.terms_accepted.as_deref())),
        ];

        if let Some(date) = parse_birth_date(&self.birth_date) {
            fields.push(DraftField::BirthDate(date));
        }

        RegistrationDraft::new().with_all(fields)
    }
}

/// Values echoed back into the inputs. Passwords are never echoed.
#[derive(Debug)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: String,
    pub birth_date: String,
    pub marketing_consent: bool,
    pub terms_accepted: bool,
}

impl From<&RegistrationDraft> for FormValues {
    fn from(draft: &RegistrationDraft) -> Self {
        Self {
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            age: draft.age.map(|a| a.to_string()).unwrap_or_default(),
            birth_date: draft.birth_date.format("%Y-%m-%d").to_string(),
            marketing_consent: draft.marketing_consent,
            terms_accepted: draft.terms_accepted,
        }
    }
}

#[derive(Debug)]
pub struct CountryRow {
    pub value: String,
    pub label: String,
    pub icon_url: String,
    pub selected: bool,
}

#[derive(Debug)]
pub struct GenderRow {
    pub value: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

/// Template for the registration page.
///
/// Renders `templates/registration.html` with:
/// - Form inputs pre-filled from the last submission
/// - Country selector rows with a flag preview of the chosen country,
///   or a loading / error note in their place
/// - Alerts from the last submission
#[derive(Template, WebTemplate)]
#[template(path = "registration.html")]
pub struct RegistrationTemplate {
    pub form: FormValues,
    pub countries: Vec<CountryRow>,
    /// Flag of the selected country; empty when none is selected.
    pub selected_flag: String,
    pub genders: Vec<GenderRow>,
    pub directory_status: &'static str,
    pub directory_error: String,
    pub alerts: Vec<&'static str>,
    pub success: bool,
}

impl RegistrationTemplate {
    pub fn new(
        directory: &DirectoryState,
        draft: &RegistrationDraft,
        outcome: Option<&ValidationOutcome>,
    ) -> Self {
        let countries: Vec<CountryRow> = directory
            .options()
            .into_iter()
            .map(|o| CountryRow {
                selected: o.value == draft.country,
                value: o.value,
                label: o.label,
                icon_url: o.icon_url,
            })
            .collect();

        let selected_flag = countries
            .iter()
            .find(|c| c.selected)
            .map(|c| c.icon_url.clone())
            .unwrap_or_default();

        let genders = Gender::ALL
            .iter()
            .map(|g| GenderRow {
                value: g.as_str(),
                label: g.label(),
                checked: draft.gender == Some(*g),
            })
            .collect();

        Self {
            form: FormValues::from(draft),
            countries,
            selected_flag,
            genders,
            directory_status: directory.status(),
            directory_error: directory
                .error()
                .map(ToString::to_string)
                .unwrap_or_default(),
            alerts: outcome.map(ValidationOutcome::alerts).unwrap_or_default(),
            success: outcome.is_some_and(ValidationOutcome::is_ok),
        }
    }
}

/// Renders an empty registration form.
///
/// # Endpoint
///
/// `GET /`
pub async fn form_handler(State(state): State<AppState>) -> RegistrationTemplate {
    let draft = RegistrationDraft::new();
    RegistrationTemplate::new(&state.country_directory.state(), &draft, None)
}

/// Validates a submitted form and renders it again with the alerts.
///
/// # Endpoint
///
/// `POST /register`
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not a urlencoded form or a field
/// exceeds its length limit.
pub async fn submit_form_handler(
    State(state): State<AppState>,
    input: Result<Form<RegistrationFormInput>, FormRejection>,
) -> Result<RegistrationTemplate, AppError> {
    let Form(input) = input?;
    input.validate()?;

    let draft = input.into_draft();
    let outcome = state.registration_service.submit(&draft);

    Ok(RegistrationTemplate::new(
        &state.country_directory.state(),
        &draft,
        Some(&outcome),
    ))
}
