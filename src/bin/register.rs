//! Terminal client for the registration form.
//!
//! Fills the same draft the web page does, runs the same rules and prints
//! the alerts, so the form can be exercised without a browser.
//!
//! # Usage
//!
//! ```bash
//! # Print the country directory
//! cargo run --bin register -- countries
//!
//! # Fill the form interactively
//! cargo run --bin register -- fill
//!
//! # Same, printing the result as JSON
//! cargo run --bin register -- fill --json
//! ```
//!
//! # Environment Variables
//!
//! Reads the same variables as the server (`COUNTRIES_API_URL`,
//! `COUNTRIES_TIMEOUT_SECONDS`, `FLAG_CDN_BASE`, `BIRTH_DATE_CHECK`).
//!
//! # Exit Status
//!
//! `fill` exits with status 1 when any rule failed; `countries` exits with
//! status 1 when the directory could not be loaded.

use registration_form::api::dto::countries::CountriesResponse;
use registration_form::api::dto::registration::RegistrationResponse;
use registration_form::application::services::{
    CountryDirectory, DirectoryState, RegistrationService,
};
use registration_form::config::{self, Config};
use registration_form::domain::entities::{DraftField, Gender, RegistrationDraft, ValidationOutcome};
use registration_form::domain::validation::RegistrationValidator;
use registration_form::infrastructure::directory::RestCountriesRepository;
use registration_form::utils::form_input::{parse_age, parse_birth_date};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password, Select};
use std::process::ExitCode;
use std::sync::Arc;

/// Fill and validate the registration form from a terminal.
#[derive(Parser)]
#[command(name = "register")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print the country directory
    Countries {
        /// Print the directory as JSON
        #[arg(long)]
        json: bool,
    },

    /// Prompt for every field, then validate
    Fill {
        /// Print the validation result as JSON
        #[arg(long)]
        json: bool,

        /// Do not fetch the country list; type the country code instead
        #[arg(long)]
        offline: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Invalid configuration")?;

    let ok = match cli.command {
        Commands::Countries { json } => show_countries(&config, json).await?,
        Commands::Fill { json, offline } => fill(&config, json, offline).await?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn spawn_directory(config: &Config) -> Result<CountryDirectory> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("register/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    let repository = Arc::new(RestCountriesRepository::new(
        client,
        config.countries_api_url.clone(),
        config.flag_cdn_base.clone(),
    ));

    Ok(CountryDirectory::spawn(repository, config.countries_timeout()))
}

/// Prints the loaded directory.
///
/// # Output Format
///
/// ```text
/// 🌍 Countries (250)
///
///   PL  Poland                          https://flagcdn.com/w80/pl.png
/// ```
async fn show_countries(config: &Config, json: bool) -> Result<bool> {
    let directory = spawn_directory(config)?;
    let state = directory.wait().await;

    if json {
        let body = CountriesResponse::from(&state);
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(!matches!(state, DirectoryState::Failed(_)));
    }

    match &state {
        DirectoryState::Failed(e) => {
            eprintln!("{} {}", "❌ Country list unavailable:".red().bold(), e);
            Ok(false)
        }
        _ => {
            let records = state.records();
            println!(
                "{}",
                format!("🌍 Countries ({})", records.len()).bright_blue().bold()
            );
            println!();

            for record in records {
                println!(
                    "  {:<3} {:<32} {}",
                    record.code.bright_cyan(),
                    record.name,
                    record.flag_url.bright_black()
                );
            }

            Ok(true)
        }
    }
}

/// Prompts for each field and prints the alerts.
///
/// # Flow
///
/// 1. Start the country list load (unless `--offline`)
/// 2. Prompt for text fields, passwords, age and birth date
/// 3. Choose gender and country
/// 4. Confirm terms and marketing consent
/// 5. Validate and print every alert
async fn fill(config: &Config, json: bool, offline: bool) -> Result<bool> {
    let directory = Arc::new(if offline {
        CountryDirectory::ready(Vec::new())
    } else {
        spawn_directory(config)?
    });

    println!("{}", "📝 Rejestracja".bright_blue().bold());
    println!();

    let mut fields = vec![
        DraftField::FirstName(prompt_text("Imię")?),
        DraftField::LastName(prompt_text("Nazwisko")?),
        DraftField::Email(prompt_text("Email")?),
        DraftField::Password(prompt_password("Hasło")?),
        DraftField::ConfirmPassword(prompt_password("Potwierdź hasło")?),
        DraftField::Age(parse_age(&prompt_text("Wiek")?)),
    ];

    let today = RegistrationDraft::new().birth_date;
    let raw_date: String = Input::new()
        .with_prompt("Data urodzenia (RRRR-MM-DD)")
        .default(today.format("%Y-%m-%d").to_string())
        .interact_text()?;
    match parse_birth_date(&raw_date) {
        Some(date) => fields.push(DraftField::BirthDate(date)),
        None => println!(
            "{}",
            format!("⚠️  Nieczytelna data, zostaje {today}").yellow()
        ),
    }

    fields.push(DraftField::Gender(prompt_gender()?));

    let state = directory.wait().await;
    fields.push(DraftField::Country(prompt_country(&state, offline)?));

    fields.push(DraftField::TermsAccepted(
        Confirm::new()
            .with_prompt("Akceptuję regulamin")
            .default(false)
            .interact()?,
    ));
    fields.push(DraftField::MarketingConsent(
        Confirm::new()
            .with_prompt("Zgoda na marketing")
            .default(false)
            .interact()?,
    ));

    let draft = RegistrationDraft::new().with_all(fields);

    let service = RegistrationService::new(
        RegistrationValidator::new(config.birth_date_policy),
        directory,
    );
    let outcome = service.submit(&draft);
    let ok = outcome.is_ok();

    if json {
        let body = RegistrationResponse::from(outcome);
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print_alerts(&outcome);
    }

    Ok(ok)
}

fn prompt_text(prompt: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

fn prompt_password(prompt: &str) -> Result<String> {
    Ok(Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()?)
}

fn prompt_gender() -> Result<Option<Gender>> {
    let mut items = vec!["(nie wybrano)".to_string()];
    items.extend(Gender::ALL.iter().map(|g| g.label().to_string()));

    let choice = Select::new()
        .with_prompt("Płeć")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(choice.checked_sub(1).and_then(|i| Gender::ALL.get(i).copied()))
}

fn prompt_country(state: &DirectoryState, offline: bool) -> Result<String> {
    let records = state.records();

    if records.is_empty() {
        if let Some(e) = state.error() {
            println!("{} {}", "⚠️  Lista krajów niedostępna:".yellow(), e);
        } else if !offline {
            println!("{}", "⚠️  Lista krajów jest pusta".yellow());
        }
        return prompt_text("Kod kraju");
    }

    let mut items = vec!["Wybierz kraj".to_string()];
    items.extend(records.iter().map(|r| format!("{} ({})", r.name, r.code)));

    let choice = Select::new()
        .with_prompt("Kraj")
        .items(&items)
        .default(0)
        .max_length(15)
        .interact()?;

    Ok(choice
        .checked_sub(1)
        .and_then(|i| records.get(i))
        .map(|r| r.code.clone())
        .unwrap_or_default())
}

fn print_alerts(outcome: &ValidationOutcome) {
    println!();

    if outcome.is_ok() {
        for alert in outcome.alerts() {
            println!("{}", format!("✅ {alert}").green().bold());
        }
        return;
    }

    println!(
        "{}",
        format!("❌ Błędy ({})", outcome.failures.len()).red().bold()
    );
    for failure in &outcome.failures {
        println!(
            "  {:<18} {}",
            failure.field.as_str().bright_black(),
            failure.message.red()
        );
    }
}
