//! # Contact Validation
//!
//! Field-level validation of contact records. Every violation carries the
//! offending field and a specific message so a front end can annotate
//! individual inputs rather than showing one generic error.
//!
//! The email check is the same basic address pattern the rest of the system
//! assumes: a non-empty local part, one `@`, and a dot-separated domain with
//! non-empty labels around the final dot. It is deliberately not a full
//! RFC 5322 parser.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact::{Contact, ContactType};

// ---------------------------------------------------------------------------
// ContactField
// ---------------------------------------------------------------------------

/// The contact fields validation can report against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    /// The derived display name.
    Name,
    /// Given name.
    FirstName,
    /// Family name.
    LastName,
    /// Company name.
    CompanyName,
    /// Email address.
    Email,
    /// First address line.
    AddressLine1,
    /// City.
    City,
    /// Country.
    Country,
}

impl ContactField {
    /// Return the wire name of the field (the contact's serialized key).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::CompanyName => "companyName",
            Self::Email => "email",
            Self::AddressLine1 => "addressLine1",
            Self::City => "city",
            Self::Country => "country",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Violations
// ---------------------------------------------------------------------------

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// The offending field.
    pub field: ContactField,
    /// Specific, human-readable message for that field.
    pub message: String,
}

impl FieldViolation {
    fn new(field: ContactField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// The full set of violations for one contact.
///
/// A save attempt is blocked as long as this is non-empty; the caller gets
/// every violation at once, not just the first.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("contact validation failed: {}", summary(.violations))]
pub struct ContactValidationError {
    /// All field-level violations, in field declaration order.
    pub violations: Vec<FieldViolation>,
}

impl ContactValidationError {
    /// Look up the message for a specific field, if that field failed.
    pub fn message_for(&self, field: ContactField) -> Option<&str> {
        self.violations
            .iter()
            .find(|v| v.field == field)
            .map(|v| v.message.as_str())
    }
}

fn summary(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a contact against the save invariants.
///
/// Checks the always-required fields (`name`, `email`, `addressLine1`,
/// `city`, `country`) and the type-dependent ones: individuals need
/// `firstName`/`lastName`, companies need `companyName`. Whitespace-only
/// values count as empty.
pub fn validate_contact(contact: &Contact) -> Result<(), ContactValidationError> {
    let mut violations = Vec::new();

    if contact.name.trim().is_empty() {
        violations.push(FieldViolation::new(ContactField::Name, "Name is required"));
    }

    let email = contact.email.trim();
    if email.is_empty() {
        violations.push(FieldViolation::new(
            ContactField::Email,
            "Email is required",
        ));
    } else if !email_format_ok(email) {
        violations.push(FieldViolation::new(
            ContactField::Email,
            "Email is not valid",
        ));
    }

    if contact.address_line1.trim().is_empty() {
        violations.push(FieldViolation::new(
            ContactField::AddressLine1,
            "Address line 1 is required",
        ));
    }
    if contact.city.trim().is_empty() {
        violations.push(FieldViolation::new(ContactField::City, "City is required"));
    }
    if contact.country.trim().is_empty() {
        violations.push(FieldViolation::new(
            ContactField::Country,
            "Country is required",
        ));
    }

    match contact.contact_type {
        ContactType::Company => {
            if is_blank(contact.company_name.as_deref()) {
                violations.push(FieldViolation::new(
                    ContactField::CompanyName,
                    "Company name is required for companies",
                ));
            }
        }
        ContactType::Individual => {
            if is_blank(contact.first_name.as_deref()) {
                violations.push(FieldViolation::new(
                    ContactField::FirstName,
                    "First name is required for individuals",
                ));
            }
            if is_blank(contact.last_name.as_deref()) {
                violations.push(FieldViolation::new(
                    ContactField::LastName,
                    "Last name is required for individuals",
                ));
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ContactValidationError { violations })
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Basic email shape: `local@domain.tld`, no whitespace, exactly one `@`,
/// non-empty labels around the domain's final dot.
fn email_format_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };
    if parts.next().is_some() || local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tld)) => !head.is_empty() && !tld.is_empty(),
        None => false,
    }
}
