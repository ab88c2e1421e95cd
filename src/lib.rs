pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{batch::BatchFile, OutputFormat};
pub use core::validator::{
    check, check_email, check_national_id, check_phone_number, check_username, validate,
    validate_email, validate_national_id, validate_phone_number, validate_username,
};
pub use domain::model::{Field, FieldReport, NationalId, PhoneForm, RecordReport, UserRecord};
pub use utils::error::{Result, ValidationError};
