use serde::{Deserialize, Serialize};
use std::fmt;

/// The four kinds of user input the validator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Email,
    Username,
    PhoneNumber,
    NationalId,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Email,
        Field::Username,
        Field::PhoneNumber,
        Field::NationalId,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Username => "username",
            Field::PhoneNumber => "phone_number",
            Field::NationalId => "national_id",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the two accepted phone layouts a number matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneForm {
    /// 11 digits, operator prefix 010/011/012/015.
    Local,
    /// 12 digits, country code 20 followed by 10/11/12/15.
    International,
}

/// A national ID split into its fixed-width fields.
///
/// Only built from input that passed every field check. The trailing
/// sequence digits are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationalId {
    pub century: u8,
    pub year: u8,
    pub month: u8,
    pub day: u8,
    pub governorate: u8,
    pub sequence: String,
}

/// One user's worth of raw, unvalidated input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub national_id: Option<String>,
}

impl UserRecord {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => self.email.as_deref(),
            Field::Username => self.username.as_deref(),
            Field::PhoneNumber => self.phone_number.as_deref(),
            Field::NationalId => self.national_id.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldReport {
    pub field: Field,
    pub value: Option<String>,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordReport {
    pub label: String,
    pub fields: Vec<FieldReport>,
}

impl RecordReport {
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|f| f.valid)
    }

    pub fn rejected(&self) -> impl Iterator<Item = &FieldReport> {
        self.fields.iter().filter(|f| !f.valid)
    }
}
