pub mod national_id;
pub mod report;
pub mod validator;

pub use crate::domain::model::{Field, NationalId, PhoneForm, RecordReport, UserRecord};
pub use crate::utils::error::Result;
