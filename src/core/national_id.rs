use crate::domain::model::NationalId;
use crate::utils::error::{Result, ValidationError};
use crate::utils::validation::validate_range;
use regex::Regex;
use std::sync::LazyLock;

const FIELD: &str = "national_id";

static NATIONAL_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{14}$").expect("NATIONAL_ID_REGEX is a valid regex pattern")
});

/// Reads two ASCII digits starting at `start`. Callers guarantee the bytes are digits.
fn two_digits(bytes: &[u8], start: usize) -> u8 {
    (bytes[start] - b'0') * 10 + (bytes[start + 1] - b'0')
}

impl NationalId {
    /// Decomposes a 14-digit national ID, rejecting it on the first bad field.
    ///
    /// Layout: `C YY MM DD GG SSSSS` (century, year, month, day,
    /// governorate, sequence). Day is only checked against 1..=31, not the
    /// length of the month, and the sequence digits are never inspected.
    pub fn parse(input: &str) -> Result<Self> {
        if !NATIONAL_ID_REGEX.is_match(input) {
            return Err(ValidationError::invalid_format(
                FIELD,
                input,
                "must be exactly 14 digits",
            ));
        }

        let bytes = input.as_bytes();
        let century = bytes[0];
        if century != b'2' && century != b'3' {
            return Err(ValidationError::InvalidCentury {
                value: century as char,
            });
        }

        let year = two_digits(bytes, 1);
        let month = two_digits(bytes, 3);
        let day = two_digits(bytes, 5);
        let governorate = two_digits(bytes, 7);

        validate_range(FIELD, "month", month.into(), 1, 12)?;
        validate_range(FIELD, "day", day.into(), 1, 31)?;
        validate_range(FIELD, "governorate", governorate.into(), 1, 88)?;

        Ok(Self {
            century: century - b'0',
            year,
            month,
            day,
            governorate,
            sequence: input[9..].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fields() {
        let id = NationalId::parse("29001011234567").unwrap();
        assert_eq!(id.century, 2);
        assert_eq!(id.year, 90);
        assert_eq!(id.month, 1);
        assert_eq!(id.day, 1);
        assert_eq!(id.governorate, 12);
        assert_eq!(id.sequence, "34567");
    }

    #[test]
    fn test_century_rejected_before_dates() {
        // month 13 as well, but the century is reported first
        let err = NationalId::parse("19013011234567").unwrap_err();
        assert_eq!(err.code(), "invalid_century");
    }

    #[test]
    fn test_out_of_range_component() {
        match NationalId::parse("29001321234567").unwrap_err() {
            ValidationError::OutOfRange { component, value, .. } => {
                assert_eq!(component, "day");
                assert_eq!(value, 32);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_governorate_bounds() {
        assert!(NationalId::parse("29001018812345").is_ok());
        assert!(NationalId::parse("29001010112345").is_ok());
        assert!(NationalId::parse("29001018912345").is_err());
        assert!(NationalId::parse("29001010012345").is_err());
    }

    #[test]
    fn test_day_not_checked_against_month() {
        // 31 February
        assert!(NationalId::parse("29002311234567").is_ok());
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic digits are not accepted as digits here
        assert!(NationalId::parse("٢٩٠٠١٠١١٢٣٤٥٦٧").is_err());
        assert!(NationalId::parse("2900101123456a").is_err());
        assert!(NationalId::parse("29001011234567\n").is_err());
    }
}
