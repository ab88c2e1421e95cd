use crate::config::OutputFormat;
use crate::domain::model::{RecordReport, UserRecord};
use crate::utils::error::{Result, ValidationError};
use crate::utils::validation::{validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("ENV_VAR_REGEX is a valid regex pattern")
});

/// A TOML file of user records to validate in one run.
///
/// ```toml
/// [output]
/// format = "json"
///
/// [[records]]
/// label = "alice"
/// email = "alice@example.com"
/// username = "alice_01"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchFile {
    #[serde(default)]
    pub output: Option<OutputSection>,
    #[serde(default)]
    pub records: Vec<BatchRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRecord {
    pub label: Option<String>,
    #[serde(flatten)]
    pub user: UserRecord,
}

impl BatchFile {
    /// Reads and parses a batch file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses batch TOML after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value, leaving unknown variables as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_REGEX
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .and_then(OutputFormat::parse)
    }

    /// Validates every record, labelling unnamed ones by position.
    pub fn reports(&self) -> Vec<RecordReport> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let label = record
                    .label
                    .clone()
                    .unwrap_or_else(|| format!("record-{}", i + 1));
                record.user.report(label)
            })
            .collect()
    }
}

impl Validate for BatchFile {
    fn validate(&self) -> Result<()> {
        if self.records.is_empty() {
            return Err(ValidationError::config(
                "batch file must contain at least one [[records]] entry",
            ));
        }

        if let Some(format) = self.output.as_ref().and_then(|o| o.format.as_deref()) {
            validate_one_of("output.format", format, OutputFormat::NAMES)?;
        }

        Ok(())
    }
}
