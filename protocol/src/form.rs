use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PHONE_DIGITS: core::ops::RangeInclusive<usize> = 10..=15;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your phone number")]
    MissingPhone,
    #[error("Please enter your invoice number")]
    MissingInvoice,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

/// Form fields exactly as the customer typed them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub phone: String,
    pub invoice: String,
}

impl Submission {
    pub fn new(phone: impl Into<String>, invoice: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            invoice: invoice.into(),
        }
    }

    /// Checks the fields in display order and reports the first problem.
    ///
    /// Whitespace inside the phone number is tolerated; what remains must be 10 to 15 digits.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.phone.trim().is_empty() {
            return Err(ValidationError::MissingPhone);
        }
        if self.invoice.trim().is_empty() {
            return Err(ValidationError::MissingInvoice);
        }

        let mut digits = 0;
        for c in self.phone.chars().filter(|c| !c.is_whitespace()) {
            if !c.is_ascii_digit() {
                return Err(ValidationError::InvalidPhone);
            }
            digits += 1;
        }
        if !PHONE_DIGITS.contains(&digits) {
            return Err(ValidationError::InvalidPhone);
        }

        Ok(())
    }

    /// `application/x-www-form-urlencoded` body with the fields as typed.
    pub fn form_body(&self) -> String {
        format!(
            "phone={}&invoice={}",
            encode_uri_component(&self.phone),
            encode_uri_component(&self.invoice)
        )
    }
}

/// Everything `encodeURIComponent` escapes: all but ASCII alphanumerics and `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes UTF-8 text the way `encodeURIComponent` does.
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}
