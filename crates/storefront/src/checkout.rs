//! Checkout field validation.
//!
//! A pure, all-or-nothing validation pass over the four payment fields.
//! Each field is checked independently; submission succeeds only if every
//! field passes, and each failing field carries its own message. Nothing
//! here talks to a payment processor; on success the caller simply signals
//! success.
//!
//! Expiry and CVV are required but otherwise unconstrained, matching the
//! storefront this shop descends from.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

/// Four groups of four digits, each group optionally separated by a hyphen
/// or space. Reduces to exactly 16 digits once separators are stripped.
static CARD_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}[ -]?\d{4}[ -]?\d{4}[ -]?\d{4}$").expect("card number pattern is valid")
});

const CARD_NUMBER_MIN_LENGTH: usize = 16;
const CARD_NUMBER_MAX_LENGTH: usize = 19;

/// The submitted checkout form. Never persisted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutForm {
    pub card_number: String,
    pub holder_name: String,
    pub expiry: String,
    pub cvv: String,
}

/// Per-field validation messages. A `None` field passed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub card_number: Option<&'static str>,
    pub holder_name: Option<&'static str>,
    pub expiry: Option<&'static str>,
    pub cvv: Option<&'static str>,
}

impl FieldErrors {
    /// Whether every field passed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.card_number.is_none()
            && self.holder_name.is_none()
            && self.expiry.is_none()
            && self.cvv.is_none()
    }
}

/// Validate a submitted checkout form.
///
/// # Errors
///
/// Returns the per-field messages if any field fails. The caller re-renders
/// the form with the submitted values attached, so nothing is lost.
pub fn validate(form: &CheckoutForm) -> Result<(), FieldErrors> {
    let errors = FieldErrors {
        card_number: card_number_error(form.card_number.trim()),
        holder_name: required(form.holder_name.trim(), "Card holder name is required"),
        expiry: required(form.expiry.trim(), "Expiry date is required"),
        cvv: required(form.cvv.trim(), "CVV is required"),
    };

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    if value.is_empty() { Some(message) } else { None }
}

fn card_number_error(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("Card number is required");
    }
    if value.len() < CARD_NUMBER_MIN_LENGTH || value.len() > CARD_NUMBER_MAX_LENGTH {
        return Some("Card number must be 16 to 19 characters");
    }
    if !CARD_NUMBER.is_match(value) {
        return Some("Card number must be four groups of four digits");
    }
    None
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            card_number: "4111-1111-1111-1111".to_string(),
            holder_name: "A Shopper".to_string(),
            expiry: "12/27".to_string(),
            cvv: "123".to_string(),
        }
    }

    #[test]
    fn test_all_fields_valid_is_accepted() {
        assert!(validate(&valid_form()).is_ok());
    }

    #[test]
    fn test_hyphenated_card_number_is_valid() {
        let form = CheckoutForm {
            card_number: "4111-1111-1111-1111".to_string(),
            ..valid_form()
        };
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_space_separated_and_bare_card_numbers_are_valid() {
        for number in ["4111 1111 1111 1111", "4111111111111111"] {
            let form = CheckoutForm {
                card_number: number.to_string(),
                ..valid_form()
            };
            assert!(validate(&form).is_ok(), "expected {number:?} to validate");
        }
    }

    #[test]
    fn test_short_card_number_fails_on_length() {
        let form = CheckoutForm {
            card_number: "1234".to_string(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.card_number,
            Some("Card number must be 16 to 19 characters")
        );
    }

    #[test]
    fn test_card_number_with_letters_fails_on_pattern() {
        let form = CheckoutForm {
            card_number: "4111111111111abc".to_string(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.card_number,
            Some("Card number must be four groups of four digits")
        );
    }

    #[test]
    fn test_missing_holder_name_has_specific_error() {
        let form = CheckoutForm {
            holder_name: "  ".to_string(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.holder_name, Some("Card holder name is required"));
        assert_eq!(errors.card_number, None);
        assert_eq!(errors.expiry, None);
        assert_eq!(errors.cvv, None);
    }

    #[test]
    fn test_every_empty_field_carries_its_own_message() {
        let errors = validate(&CheckoutForm::default()).unwrap_err();
        assert!(errors.card_number.is_some());
        assert!(errors.holder_name.is_some());
        assert!(errors.expiry.is_some());
        assert!(errors.cvv.is_some());
    }

    #[test]
    fn test_expiry_and_cvv_accept_any_non_empty_value() {
        let form = CheckoutForm {
            expiry: "whenever".to_string(),
            cvv: "not-digits".to_string(),
            ..valid_form()
        };
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_seventeen_digit_number_fails_on_pattern() {
        // 17 raw digits passes the length window but not the grouping rule.
        let form = CheckoutForm {
            card_number: "41111111111111111".to_string(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.card_number,
            Some("Card number must be four groups of four digits")
        );
    }
}
