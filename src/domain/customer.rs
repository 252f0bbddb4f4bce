use crate::error::OrderError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("Invalid regex"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("Invalid regex"));

/// A phone number made of exactly ten digits with no separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(raw: &str) -> Result<Self, OrderError> {
        let candidate = raw.trim();
        if PHONE_RE.is_match(candidate) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(OrderError::ValidationError(
                "Invalid phone number. Please enter a valid 10-digit phone number.".to_string(),
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An email address of the shape `local@domain.tld`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: &str) -> Result<Self, OrderError> {
        let candidate = raw.trim();
        if EMAIL_RE.is_match(candidate) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(OrderError::ValidationError(
                "Invalid email format. Please enter a valid email.".to_string(),
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Contact details captured once at the start of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: PhoneNumber,
    pub email: EmailAddress,
}

impl CustomerInfo {
    pub fn new(name: impl Into<String>, phone: PhoneNumber, email: EmailAddress) -> Self {
        Self {
            name: name.into(),
            phone,
            email,
        }
    }
}
