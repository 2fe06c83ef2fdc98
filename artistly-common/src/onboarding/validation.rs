//! Field rules for the onboarding schema
//!
//! Each rule yields the human-readable message shown next to the field.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::application::ApplicationDraft;
use super::options::{EXPERIENCE_LEVELS, FEE_RANGES};

/// Onboarding form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Location,
    Bio,
    Categories,
    Experience,
    Languages,
    FeeRange,
    Availability,
}

impl FormField {
    pub const ALL: [FormField; 10] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Location,
        FormField::Bio,
        FormField::Categories,
        FormField::Experience,
        FormField::Languages,
        FormField::FeeRange,
        FormField::Availability,
    ];
}

/// Field-level messages, keyed by field
pub type FieldErrors = BTreeMap<FormField, String>;

// Local part may not start with '.' or contain ".."; checked separately
// since the regex crate has no lookaround.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

fn min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Validate one field, returning its message on failure
pub fn validate_field(draft: &ApplicationDraft, field: FormField) -> Option<String> {
    let failed = match field {
        FormField::Name => !min_chars(&draft.name, 2),
        FormField::Email => !is_valid_email(&draft.email),
        FormField::Phone => !min_chars(&draft.phone, 10),
        FormField::Location => !min_chars(&draft.location, 2),
        FormField::Bio => !min_chars(&draft.bio, 50),
        FormField::Categories => draft.categories.is_empty(),
        FormField::Experience => !EXPERIENCE_LEVELS.contains(&draft.experience.as_str()),
        FormField::Languages => draft.languages.is_empty(),
        FormField::FeeRange => !FEE_RANGES.contains(&draft.fee_range.as_str()),
        FormField::Availability => draft.availability.is_empty(),
    };

    failed.then(|| message(field).to_string())
}

fn message(field: FormField) -> &'static str {
    match field {
        FormField::Name => "Name must be at least 2 characters",
        FormField::Email => "Invalid email address",
        FormField::Phone => "Phone number must be at least 10 digits",
        FormField::Location => "Location is required",
        FormField::Bio => "Bio must be at least 50 characters",
        FormField::Categories => "Select at least one category",
        FormField::Experience => "Please select your experience level",
        FormField::Languages => "Select at least one language",
        FormField::FeeRange => "Please select a fee range",
        FormField::Availability => "Select your availability",
    }
}

/// Validate a set of fields, collecting every failure
pub fn validate_fields(draft: &ApplicationDraft, fields: &[FormField]) -> FieldErrors {
    fields
        .iter()
        .filter_map(|&field| validate_field(draft, field).map(|msg| (field, msg)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("artist@example.com"));
        assert!(is_valid_email("first.last+gigs@mail.example.co"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email(".lead@example.com"));
        assert!(!is_valid_email("dou..ble@example.com"));
        assert!(!is_valid_email("trailing.@example.com"));
    }

    #[test]
    fn test_empty_draft_fails_every_field() {
        let errors = validate_fields(&ApplicationDraft::default(), &FormField::ALL);
        assert_eq!(errors.len(), FormField::ALL.len());
        assert_eq!(errors[&FormField::Email], "Invalid email address");
        assert_eq!(errors[&FormField::Bio], "Bio must be at least 50 characters");
    }

    #[test]
    fn test_length_rules_count_characters() {
        let draft = ApplicationDraft {
            name: "Zé".to_string(),
            phone: "555-010-01".to_string(),
            ..Default::default()
        };
        assert_eq!(validate_field(&draft, FormField::Name), None);
        assert_eq!(validate_field(&draft, FormField::Phone), None);
        assert!(validate_field(&draft, FormField::Location).is_some());
    }

    #[test]
    fn test_selects_must_use_listed_choices() {
        let mut draft = ApplicationDraft {
            fee_range: "$1".to_string(),
            experience: "Expert (10+ years)".to_string(),
            ..Default::default()
        };
        assert_eq!(
            validate_field(&draft, FormField::FeeRange).as_deref(),
            Some("Please select a fee range")
        );
        assert_eq!(validate_field(&draft, FormField::Experience), None);

        draft.fee_range = "$300-500".to_string();
        assert_eq!(validate_field(&draft, FormField::FeeRange), None);
    }

    #[test]
    fn test_field_errors_serialize_with_snake_case_keys() {
        let errors = validate_fields(&ApplicationDraft::default(), &[FormField::FeeRange]);
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["fee_range"], "Please select a fee range");
    }
}
