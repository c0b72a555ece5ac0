//! Contact detail rules
//!
//! # Rules
//!
//! - Phone: exactly ten ASCII digits, no separators or country prefix
//! - Email: `local@domain.tld`, accepted by the `validator` crate's email
//!   check and additionally required to carry a dotted host name; IP
//!   literals and NUL characters are refused

use core_kernel::{reject_nul, ValidationError};
use validator::ValidateEmail;

/// Number of digits a phone number must have
pub const PHONE_DIGITS: usize = 10;

/// Checks that a phone number is exactly ten digits
pub fn validate_phone(phone: String) -> Result<String, ValidationError> {
    if phone.len() != PHONE_DIGITS || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::new(
            "phone",
            format!("must be exactly {} digits, got '{}'", PHONE_DIGITS, phone),
        ));
    }
    Ok(phone)
}

/// Checks that an email address has the `local@domain.tld` shape
pub fn validate_email(email: String) -> Result<String, ValidationError> {
    reject_nul("email", &email)?;
    if !email.validate_email() || !has_dotted_domain(&email) {
        return Err(ValidationError::new(
            "email",
            format!("must look like local@domain.tld, got '{}'", email),
        ));
    }
    Ok(email)
}

fn has_dotted_domain(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('[')
                && domain.contains('.')
                && domain.split('.').all(|label| !label.is_empty())
                && !domain
                    .rsplit('.')
                    .next()
                    .is_some_and(|tld| tld.bytes().all(|b| b.is_ascii_digit()))
        }
        None => false,
    }
}
