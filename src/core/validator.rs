//! Format rules for the four supported input kinds.
//!
//! Every `validate_*` function is total: absent, empty and malformed input
//! all collapse to `false`. The matching `check_*` function applies the same
//! rule but says why the input was rejected.

use crate::domain::model::{Field, NationalId, PhoneForm};
use crate::utils::error::{Result, ValidationError};
use crate::utils::validation::validate_required_field;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("EMAIL_REGEX is a valid regex pattern")
});

static USERNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_]{3,20}$").expect("USERNAME_REGEX is a valid regex pattern")
});

static LOCAL_PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(010|011|012|015)[0-9]{8}$").expect("LOCAL_PHONE_REGEX is a valid regex pattern")
});

static INTERNATIONAL_PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^20(10|11|12|15)[0-9]{8}$")
        .expect("INTERNATIONAL_PHONE_REGEX is a valid regex pattern")
});

impl PhoneForm {
    pub fn detect(phone: &str) -> Option<Self> {
        if LOCAL_PHONE_REGEX.is_match(phone) {
            Some(PhoneForm::Local)
        } else if INTERNATIONAL_PHONE_REGEX.is_match(phone) {
            Some(PhoneForm::International)
        } else {
            None
        }
    }
}

pub fn check_email(email: Option<&str>) -> Result<()> {
    let email = validate_required_field(Field::Email.as_str(), email)?;
    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::invalid_format(
            Field::Email.as_str(),
            email,
            "expected local-part@domain.tld with a TLD of at least 2 letters",
        ));
    }
    Ok(())
}

pub fn check_username(username: Option<&str>) -> Result<()> {
    let username = validate_required_field(Field::Username.as_str(), username)?;
    if !USERNAME_REGEX.is_match(username) {
        return Err(ValidationError::invalid_format(
            Field::Username.as_str(),
            username,
            "must be 3-20 letters, digits or underscores",
        ));
    }
    Ok(())
}

pub fn check_phone_number(phone: Option<&str>) -> Result<PhoneForm> {
    let phone = validate_required_field(Field::PhoneNumber.as_str(), phone)?;
    PhoneForm::detect(phone).ok_or_else(|| {
        ValidationError::invalid_format(
            Field::PhoneNumber.as_str(),
            phone,
            "expected 010/011/012/015 plus 8 digits, or 20 plus 10/11/12/15 plus 8 digits",
        )
    })
}

pub fn check_national_id(national_id: Option<&str>) -> Result<NationalId> {
    let national_id = validate_required_field(Field::NationalId.as_str(), national_id)?;
    NationalId::parse(national_id)
}

/// Dispatches to the `check_*` function for `field`.
pub fn check(field: Field, input: Option<&str>) -> Result<()> {
    match field {
        Field::Email => check_email(input),
        Field::Username => check_username(input),
        Field::PhoneNumber => check_phone_number(input).map(|_| ()),
        Field::NationalId => check_national_id(input).map(|_| ()),
    }
}

pub fn validate_email(email: Option<&str>) -> bool {
    check_email(email).is_ok()
}

pub fn validate_username(username: Option<&str>) -> bool {
    check_username(username).is_ok()
}

pub fn validate_phone_number(phone: Option<&str>) -> bool {
    check_phone_number(phone).is_ok()
}

pub fn validate_national_id(national_id: Option<&str>) -> bool {
    check_national_id(national_id).is_ok()
}

pub fn validate(field: Field, input: Option<&str>) -> bool {
    check(field, input).is_ok()
}
