use crate::config::OutputFormat;
use crate::domain::model::{Field, UserRecord};
use crate::utils::error::{Result, ValidationError};
use crate::utils::logger::LogFormat;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "user-validation")]
#[command(about = "Validate emails, usernames, phone numbers and national IDs")]
pub struct CliConfig {
    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub username: Option<String>,

    #[arg(long)]
    pub phone_number: Option<String>,

    #[arg(long)]
    pub national_id: Option<String>,

    /// TOML file with [[records]] to validate
    #[arg(short, long)]
    pub input: Option<String>,

    /// Overrides the format set in the input file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// The record built from `--email`/`--username`/... flags, if any were given.
    pub fn inline_record(&self) -> Option<UserRecord> {
        let record = UserRecord {
            email: self.email.clone(),
            username: self.username.clone(),
            phone_number: self.phone_number.clone(),
            national_id: self.national_id.clone(),
        };
        (record != UserRecord::default()).then_some(record)
    }

    /// Names the fields passed as flags. Safe to log, unlike the values.
    pub fn supplied_fields(&self) -> Vec<Field> {
        self.inline_record()
            .map(|record| {
                Field::ALL
                    .into_iter()
                    .filter(|&field| record.get(field).is_some())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn log_format(&self) -> LogFormat {
        if self.json_logs {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.input.is_none() && self.inline_record().is_none() {
            return Err(ValidationError::config(
                "nothing to validate: pass --input or at least one of --email, --username, --phone-number, --national-id",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_something_to_validate() {
        let config = CliConfig::parse_from(["user-validation"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["user-validation", "--input", "users.toml"]);
        assert!(config.validate().is_ok());
        assert!(config.inline_record().is_none());
    }

    #[test]
    fn test_inline_record() {
        let config = CliConfig::parse_from([
            "user-validation",
            "--email",
            "user@example.com",
            "--phone-number",
            "01012345678",
            "--format",
            "json",
        ]);
        assert!(config.validate().is_ok());
        assert_eq!(config.format, Some(OutputFormat::Json));

        let record = config.inline_record().unwrap();
        assert_eq!(record.email.as_deref(), Some("user@example.com"));
        assert_eq!(record.username, None);
    }

    #[test]
    fn test_supplied_fields_and_log_format() {
        let config = CliConfig::parse_from([
            "user-validation",
            "--national-id",
            "29001011234567",
            "--username",
            "abc",
            "--json-logs",
        ]);
        assert_eq!(
            config.supplied_fields(),
            vec![Field::Username, Field::NationalId]
        );
        assert_eq!(config.log_format(), LogFormat::Json);

        let config = CliConfig::parse_from(["user-validation", "--input", "users.toml"]);
        assert!(config.supplied_fields().is_empty());
        assert_eq!(config.log_format(), LogFormat::Compact);
    }

    #[test]
    fn test_empty_flag_still_counts_as_input() {
        // an explicit empty value is validated (and rejected), not ignored
        let config = CliConfig::parse_from(["user-validation", "--username", ""]);
        assert!(config.validate().is_ok());
    }
}
