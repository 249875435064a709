//! Validation utilities for Mitra forms
//!
//! Every check here runs before any network call is made. Failures carry an
//! English and a Hindi message so they can be shown to the user directly.

use thiserror::Error;

/// A form field that failed validation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub message_hi: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str, message_hi: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            message_hi: message_hi.to_string(),
        }
    }
}

pub type ValidationResult = Result<(), ValidationError>;

// ============================================================================
// General Validations
// ============================================================================

/// Validate that a required field is filled in
pub fn validate_required(field: &str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::new(
            field,
            "Please fill in all fields",
            "कृपया सभी फ़ील्ड भरें",
        ));
    }
    Ok(())
}

/// Validate several required fields, reporting the first empty one
pub fn validate_all_required(fields: &[(&str, &str)]) -> ValidationResult {
    fields
        .iter()
        .try_for_each(|(field, value)| validate_required(field, value))
}

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> ValidationResult {
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    };
    if !valid {
        return Err(ValidationError::new(
            "email",
            "Invalid email format",
            "ईमेल का प्रारूप अमान्य है",
        ));
    }
    Ok(())
}

// ============================================================================
// Phone Verification
// ============================================================================

/// Validate an Indian mobile number: exactly 10 digits, no separators
pub fn validate_phone_number(phone: &str) -> ValidationResult {
    if phone.len() != 10 || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new(
            "phone",
            "Please enter a valid 10-digit phone number",
            "कृपया मान्य 10 अंकों का फ़ोन नंबर दर्ज करें",
        ));
    }
    Ok(())
}

/// Validate a one-time password: exactly 6 digits
pub fn validate_otp(otp: &str) -> ValidationResult {
    if otp.len() != 6 || !otp.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new(
            "otp",
            "Please enter the complete 6-digit code",
            "कृपया पूरा 6 अंकों का कोड दर्ज करें",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_required_field() {
        assert!(validate_required("crop", "rice").is_ok());
        assert!(validate_required("crop", "").is_err());
        assert_eq!(validate_required("crop", "   ").unwrap_err().field, "crop");
    }

    #[test]
    fn test_all_required_reports_first_missing() {
        let err = validate_all_required(&[("crop", "rice"), ("region", ""), ("season", "")])
            .unwrap_err();
        assert_eq!(err.field, "region");
        assert!(validate_all_required(&[("crop", "rice"), ("season", "rabi")]).is_ok());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("farmer@example.com").is_ok());
        assert!(validate_email("farmer.example.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("farmer@example").is_err());
    }

    #[test]
    fn test_phone_number() {
        assert!(validate_phone_number("9876543210").is_ok());
        assert!(validate_phone_number("987654321").is_err());
        assert!(validate_phone_number("98765432101").is_err());
        assert!(validate_phone_number("98765-43210").is_err());
        assert!(validate_phone_number("+919876543210").is_err());
    }

    #[test]
    fn test_otp() {
        assert!(validate_otp("123456").is_ok());
        assert!(validate_otp("12345").is_err());
        assert!(validate_otp("12345a").is_err());
        assert_eq!(validate_otp("").unwrap_err().field, "otp");
    }

    proptest! {
        #[test]
        fn prop_ten_digit_numbers_are_valid(phone in "[0-9]{10}") {
            prop_assert!(validate_phone_number(&phone).is_ok());
        }

        #[test]
        fn prop_other_lengths_are_invalid(phone in "[0-9]{0,9}|[0-9]{11,14}") {
            prop_assert!(validate_phone_number(&phone).is_err());
        }
    }
}
