use crate::core::validator::check;
use crate::domain::model::{Field, FieldReport, RecordReport, UserRecord};
use crate::utils::error::Result;

impl UserRecord {
    /// Runs every validator over its own field. Fields are checked
    /// independently; one rejection never affects another field.
    pub fn report(&self, label: impl Into<String>) -> RecordReport {
        self.build_report(label.into(), &Field::ALL)
    }

    /// Like [`UserRecord::report`], but fields left as `None` are skipped
    /// instead of being reported as missing.
    pub fn report_supplied(&self, label: impl Into<String>) -> RecordReport {
        let supplied: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|&field| self.get(field).is_some())
            .collect();
        self.build_report(label.into(), &supplied)
    }

    fn build_report(&self, label: String, fields: &[Field]) -> RecordReport {
        let fields = fields
            .iter()
            .map(|&field| {
                let value = self.get(field);
                match check(field, value) {
                    Ok(()) => FieldReport {
                        field,
                        value: value.map(str::to_string),
                        valid: true,
                        reason: None,
                    },
                    Err(e) => {
                        tracing::debug!(record = %label, %field, code = e.code(), "field rejected");
                        FieldReport {
                            field,
                            value: value.map(str::to_string),
                            valid: false,
                            reason: Some(e.to_string()),
                        }
                    }
                }
            })
            .collect();

        RecordReport { label, fields }
    }
}

impl RecordReport {
    /// Pretty-printed JSON array of `reports`.
    pub fn list_to_json(reports: &[RecordReport]) -> Result<String> {
        Ok(serde_json::to_string_pretty(reports)?)
    }

    /// One line per field, `✅`/`❌` prefixed.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n", self.label);
        for field in &self.fields {
            match &field.reason {
                None => out.push_str(&format!("  ✅ {}\n", field.field)),
                Some(reason) => out.push_str(&format!("  ❌ {}: {}\n", field.field, reason)),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_record() -> UserRecord {
        UserRecord {
            email: Some("user@example.com".to_string()),
            username: Some("john_doe123".to_string()),
            phone_number: Some("01012345678".to_string()),
            national_id: Some("29001011234567".to_string()),
        }
    }

    #[test]
    fn test_report_all_valid() {
        let report = valid_record().report("alice");
        assert_eq!(report.label, "alice");
        assert_eq!(report.fields.len(), 4);
        assert!(report.is_valid());
        assert_eq!(report.rejected().count(), 0);
    }

    #[test]
    fn test_fields_are_independent() {
        let record = UserRecord {
            username: Some("ab".to_string()),
            ..valid_record()
        };
        let report = record.report("bob");
        assert!(!report.is_valid());

        let rejected: Vec<_> = report.rejected().map(|f| f.field).collect();
        assert_eq!(rejected, vec![Field::Username]);
    }

    #[test]
    fn test_missing_field_reason() {
        let record = UserRecord {
            phone_number: None,
            ..valid_record()
        };
        let report = record.report("carol");
        let phone = report
            .fields
            .iter()
            .find(|f| f.field == Field::PhoneNumber)
            .unwrap();
        assert!(!phone.valid);
        assert_eq!(phone.value, None);
        assert_eq!(phone.reason.as_deref(), Some("phone_number is required"));
    }

    #[test]
    fn test_report_supplied_skips_absent_fields() {
        let record = UserRecord {
            email: Some("USER@MAIL.COM".to_string()),
            username: Some(String::new()),
            ..UserRecord::default()
        };
        let report = record.report_supplied("cli");
        let fields: Vec<_> = report.fields.iter().map(|f| (f.field, f.valid)).collect();
        // an empty value is still supplied and still rejected
        assert_eq!(fields, vec![(Field::Email, true), (Field::Username, false)]);
    }

    #[test]
    fn test_report_serializes_snake_case() {
        let report = UserRecord::default().report("empty");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["fields"][3]["field"], "national_id");
        assert_eq!(json["fields"][0]["valid"], false);
    }

    #[test]
    fn test_list_to_json() {
        let reports = vec![valid_record().report("alice"), UserRecord::default().report("empty")];
        let json = RecordReport::list_to_json(&reports).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(2));
        assert_eq!(parsed[0]["label"], "alice");
        assert_eq!(parsed[1]["fields"][1]["reason"], "username is required");
    }

    #[test]
    fn test_to_text() {
        let record = UserRecord {
            email: Some("user@mail.c".to_string()),
            ..valid_record()
        };
        let text = record.report("dave").to_text();
        assert!(text.starts_with("dave\n"));
        assert!(text.contains("❌ email: Invalid email 'user@mail.c'"));
        assert!(text.contains("✅ username"));
    }
}
