//! Response types for the user-search service and their mapping into
//! contact records.
//!
//! Fields use `#[serde(default)]` for resilience against schema evolution in
//! the live service; it may return additional fields not modeled here —
//! `serde(deny_unknown_fields)` is intentionally NOT used.

use serde::Deserialize;

use csel_core::{Contact, ContactId, ContactType};

/// A user as returned by the search service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteUser {
    /// Numeric identifier in the remote service.
    pub id: u64,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Employer, if the service returns one.
    #[serde(default)]
    pub company: Option<RemoteCompany>,
    /// Postal address, if the service returns one.
    #[serde(default)]
    pub address: Option<RemoteAddress>,
}

/// The company object nested in a remote user.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteCompany {
    /// Company name.
    #[serde(default)]
    pub name: Option<String>,
}

/// The address object nested in a remote user.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteAddress {
    /// Street address line.
    #[serde(default)]
    pub address: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// Country.
    #[serde(default)]
    pub country: Option<String>,
}

/// The search response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct UserSearchResponse {
    /// The page of matching users.
    #[serde(default)]
    pub users: Vec<RemoteUser>,
    /// Total match count, if reported.
    #[serde(default)]
    pub total: Option<u64>,
    /// Page offset, if reported.
    #[serde(default)]
    pub skip: Option<u64>,
    /// Page size, if reported.
    #[serde(default)]
    pub limit: Option<u64>,
}

/// Map one remote user into a contact record.
///
/// Search results are always typed `individual`; the company name and
/// address fields are carried across so an edit starting from a search
/// result keeps them.
pub fn into_contact(user: RemoteUser) -> Contact {
    let company_name = user.company.and_then(|c| c.name);
    let (address_line1, city, country) = match user.address {
        Some(addr) => (
            addr.address.unwrap_or_default(),
            addr.city.unwrap_or_default(),
            addr.country.unwrap_or_default(),
        ),
        None => (String::new(), String::new(), String::new()),
    };

    Contact {
        id: ContactId::remote(user.id),
        contact_type: ContactType::Individual,
        name: String::new(),
        first_name: Some(user.first_name),
        last_name: Some(user.last_name),
        company_name,
        email: user.email,
        address_line1,
        city,
        country,
    }
    .with_derived_name()
}
