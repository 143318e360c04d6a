//! Registration submission service.

use std::sync::Arc;

use crate::application::services::CountryDirectory;
use crate::domain::entities::{RegistrationDraft, ValidationOutcome};
use crate::domain::validation::RegistrationValidator;
use tracing::{debug, info};

/// Validates submitted drafts and records the outcome.
///
/// Nothing is stored: a draft is validated, the outcome is returned to the
/// caller, and the draft is dropped.
pub struct RegistrationService {
    validator: RegistrationValidator,
    directory: Arc<CountryDirectory>,
}

impl RegistrationService {
    /// Creates a new registration service.
    pub fn new(validator: RegistrationValidator, directory: Arc<CountryDirectory>) -> Self {
        Self {
            validator,
            directory,
        }
    }

    /// Runs the form rules against `draft`.
    ///
    /// A country code outside the loaded directory is logged but accepted;
    /// the rules only require that some country was chosen.
    pub fn submit(&self, draft: &RegistrationDraft) -> ValidationOutcome {
        let outcome = self.validator.validate(draft);

        if !draft.country.is_empty() && !self.directory.contains(&draft.country) {
            debug!(country = %draft.country, "Submitted country is not in the loaded directory");
        }

        if outcome.is_ok() {
            info!("Registration form accepted");
            metrics::counter!("registration_submissions_total", "outcome" => "accepted")
                .increment(1);
        } else {
            let fields: Vec<&str> = outcome.failures.iter().map(|f| f.field.as_str()).collect();
            info!(failed = ?fields, "Registration form rejected");
            metrics::counter!("registration_submissions_total", "outcome" => "rejected")
                .increment(1);
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        CountryRecord, DEFAULT_FLAG_BASE, DraftField, FieldName, Gender, messages,
    };
    use crate::domain::validation::BirthDatePolicy;
    use chrono::NaiveDate;
    use metrics::{
        Counter, CounterFn, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString,
        Unit,
    };
    use std::sync::Mutex;

    /// Records every counter increment as `name{label=value}`.
    #[derive(Default)]
    struct CountingRecorder {
        hits: Arc<Mutex<Vec<String>>>,
    }

    struct Hit {
        key: String,
        hits: Arc<Mutex<Vec<String>>>,
    }

    impl CounterFn for Hit {
        fn increment(&self, value: u64) {
            let mut hits = self.hits.lock().unwrap();
            for _ in 0..value {
                hits.push(self.key.clone());
            }
        }

        fn absolute(&self, _value: u64) {}
    }

    impl Recorder for CountingRecorder {
        fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
            let labels: Vec<String> = key
                .labels()
                .map(|l| format!("{}={}", l.key(), l.value()))
                .collect();

            Counter::from_arc(Arc::new(Hit {
                key: format!("{}{{{}}}", key.name(), labels.join(",")),
                hits: Arc::clone(&self.hits),
            }))
        }

        fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
            Gauge::noop()
        }

        fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
            Histogram::noop()
        }
    }

    fn service(policy: BirthDatePolicy) -> RegistrationService {
        let directory = CountryDirectory::ready(vec![CountryRecord::new(
            "Poland",
            "PL",
            DEFAULT_FLAG_BASE,
        )]);

        RegistrationService::new(RegistrationValidator::new(policy), Arc::new(directory))
    }

    fn anna() -> RegistrationDraft {
        RegistrationDraft::with_birth_date(NaiveDate::from_ymd_opt(2001, 2, 3).unwrap()).with_all([
            DraftField::FirstName("Anna".to_string()),
            DraftField::LastName("Nowak".to_string()),
            DraftField::Email("anna@example.com".to_string()),
            DraftField::Password("Abcdef12".to_string()),
            DraftField::ConfirmPassword("Abcdef12".to_string()),
            DraftField::Age(Some(25)),
            DraftField::Gender(Some(Gender::Female)),
            DraftField::Country("PL".to_string()),
            DraftField::TermsAccepted(true),
        ])
    }

    #[test]
    fn test_submit_valid_draft() {
        let outcome = service(BirthDatePolicy::Off).submit(&anna());

        assert!(outcome.is_ok());
        assert!(outcome.failures.is_empty());
    }

    #[test]
    fn test_submit_unknown_country_is_accepted() {
        let draft = anna().with(DraftField::Country("XX".to_string()));

        assert!(service(BirthDatePolicy::Off).submit(&draft).is_ok());
    }

    #[test]
    fn test_submit_uses_configured_policy() {
        let outcome = service(BirthDatePolicy::Legacy).submit(&anna());

        assert!(!outcome.is_ok());
        assert!(outcome.has_failure(FieldName::BirthDate));
        assert_eq!(outcome.messages(), vec![messages::UNDERAGE]);
    }

    #[test]
    fn test_submit_counts_outcomes() {
        let recorder = CountingRecorder::default();
        let service = service(BirthDatePolicy::Off);

        metrics::with_local_recorder(&recorder, || {
            service.submit(&anna());
            service.submit(&RegistrationDraft::new());
        });

        assert_eq!(
            *recorder.hits.lock().unwrap(),
            vec![
                "registration_submissions_total{outcome=accepted}".to_string(),
                "registration_submissions_total{outcome=rejected}".to_string(),
            ]
        );
    }
}
