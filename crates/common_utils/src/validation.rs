//! Custom validations for caller-supplied form values.

use error_stack::report;

use crate::errors::{CustomResult, ValidationError};

/// Strips every character that is not an ASCII digit from caller-supplied
/// amount text, mirroring the numeric-only restriction of the refund form.
pub fn sanitize_amount(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Validates that an amount is a non-empty string of ASCII digits.
pub fn validate_amount(amount: &str) -> CustomResult<(), ValidationError> {
    if amount.is_empty() {
        return Err(report!(ValidationError::MissingRequiredField {
            field_name: "amount".to_string()
        }));
    }

    if !amount.chars().all(|character| character.is_ascii_digit()) {
        return Err(report!(ValidationError::IncorrectValueProvided {
            field_name: "amount"
        }));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("Rs 1,499" => "1499"; "currency prefix and separator")]
    #[test_case("953" => "953"; "already numeric")]
    #[test_case("₹500.00" => "50000"; "symbol and decimal point")]
    #[test_case("" => ""; "empty input")]
    fn sanitize_amount_keeps_digits_only(input: &str) -> String {
        sanitize_amount(input)
    }

    #[test]
    fn validate_amount_accepts_digits() {
        assert!(validate_amount("953").is_ok());
    }

    #[test]
    fn validate_amount_rejects_empty_and_non_numeric() {
        assert!(validate_amount("").is_err());
        assert!(validate_amount("95a3").is_err());
        assert!(validate_amount("Rs 953").is_err());
    }
}
