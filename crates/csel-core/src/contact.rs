//! # Contact Records
//!
//! The contact record shared by every component: the selection state, the
//! picker, the search mapping, and the audit payloads. Serialized field
//! names are camelCase for compatibility with the persisted state format.
//!
//! ## Derived Name
//!
//! `name` is never entered directly for the final record — it is recomputed
//! on every save via [`Contact::with_derived_name`]: individuals get
//! `"{firstName} {lastName}"` (trimmed), companies get their `companyName`
//! (keeping the existing `name` when no company name is present).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// ContactId
// ---------------------------------------------------------------------------

/// A contact identifier.
///
/// Freshly created contacts get a random UUID-backed identifier. Contacts
/// mapped from the external search service carry a prefixed synthetic
/// identifier (`remote-{id}`) so the two populations can never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    /// Create a new random contact identifier for a freshly created record.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create the synthetic identifier for a record mapped from the external
    /// search service.
    pub fn remote(id: u64) -> Self {
        Self(format!("remote-{id}"))
    }

    /// Create an identifier from an existing string.
    pub fn from_string(id: String) -> Self {
        Self(id)
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this identifier originated from the external search service.
    pub fn is_remote(&self) -> bool {
        self.0.starts_with("remote-")
    }
}

impl std::fmt::Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// ContactType
// ---------------------------------------------------------------------------

/// Whether a contact is a natural person or a company.
///
/// The type determines which fields are required at save time: individuals
/// need `firstName`/`lastName`, companies need `companyName`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    /// A natural person.
    Individual,
    /// A company or organization.
    Company,
}

impl ContactType {
    /// Return the string value used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Company => "company",
        }
    }
}

impl std::fmt::Display for ContactType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

/// A contact record.
///
/// The optional fields are type-dependent: `first_name`/`last_name` are
/// meaningful for individuals, `company_name` for companies. Validation of
/// the type-dependent requirements lives in [`crate::validation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Unique identifier (fresh UUID or `remote-{id}` synthetic).
    pub id: ContactId,
    /// Individual or company.
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    /// Display name, derived from the type-dependent name fields on save.
    pub name: String,
    /// Given name (required for individuals).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name (required for individuals).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Company name (required for companies).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Email address.
    pub email: String,
    /// First address line.
    pub address_line1: String,
    /// City.
    pub city: String,
    /// Country.
    pub country: String,
}

impl Contact {
    /// Create a blank contact for the create flow: fresh identifier,
    /// type `individual`, every text field empty.
    pub fn blank() -> Self {
        Self {
            id: ContactId::fresh(),
            contact_type: ContactType::Individual,
            name: String::new(),
            first_name: Some(String::new()),
            last_name: Some(String::new()),
            company_name: Some(String::new()),
            email: String::new(),
            address_line1: String::new(),
            city: String::new(),
            country: String::new(),
        }
    }

    /// Recompute the derived `name` from the type-dependent name fields.
    ///
    /// Individuals: `"{firstName} {lastName}"`, trimmed. Companies: the
    /// company name, or the existing `name` when no company name is set.
    pub fn with_derived_name(mut self) -> Self {
        self.name = match self.contact_type {
            ContactType::Individual => {
                let first = self.first_name.as_deref().unwrap_or("");
                let last = self.last_name.as_deref().unwrap_or("");
                format!("{first} {last}").trim().to_string()
            }
            ContactType::Company => match self.company_name.as_deref() {
                Some(company) if !company.is_empty() => company.to_string(),
                _ => self.name.clone(),
            },
        };
        self
    }
}
