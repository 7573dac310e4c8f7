//! Contact draft: the create/edit cycle behind the picker's modal.
//!
//! A draft starts blank (create) or as a copy of the current value (edit),
//! accepts field edits addressed by [`ContactField`], and on finish derives
//! the display name and validates the type-dependent invariants. A finish
//! with violations blocks the save and hands back every field-level message.

use csel_core::{
    validate_contact, Contact, ContactField, ContactType, ContactValidationError,
};

/// Whether the draft was opened to create a new contact or edit the
/// current one. Affects create/update classification at save time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    /// Start from a blank individual contact with a fresh identifier.
    Create,
    /// Start from a copy of the picker's current value.
    Edit,
}

/// An in-progress contact edit.
#[derive(Debug, Clone)]
pub struct ContactDraft {
    mode: DraftMode,
    contact: Contact,
}

impl ContactDraft {
    /// Open a create draft: fresh identifier, type `individual`, all fields
    /// empty.
    pub fn create() -> Self {
        Self {
            mode: DraftMode::Create,
            contact: Contact::blank(),
        }
    }

    /// Open an edit draft from the current value. With no current value the
    /// draft starts blank, and the save still classifies as a create.
    pub fn edit(current: Option<&Contact>) -> Self {
        Self {
            mode: DraftMode::Edit,
            contact: current.cloned().unwrap_or_else(Contact::blank),
        }
    }

    /// The draft's mode.
    pub fn mode(&self) -> DraftMode {
        self.mode
    }

    /// The draft contact as it currently stands.
    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    /// Switch the contact type. Field values are kept so toggling back and
    /// forth loses nothing.
    pub fn set_type(&mut self, contact_type: ContactType) {
        self.contact.contact_type = contact_type;
    }

    /// Set a text field addressed by its wire name.
    pub fn set_field(&mut self, field: ContactField, value: &str) {
        let value = value.to_string();
        match field {
            ContactField::Name => self.contact.name = value,
            ContactField::FirstName => self.contact.first_name = Some(value),
            ContactField::LastName => self.contact.last_name = Some(value),
            ContactField::CompanyName => self.contact.company_name = Some(value),
            ContactField::Email => self.contact.email = value,
            ContactField::AddressLine1 => self.contact.address_line1 = value,
            ContactField::City => self.contact.city = value,
            ContactField::Country => self.contact.country = value,
        }
    }

    /// Derive the display name and validate.
    ///
    /// On success returns the finished contact; on failure returns every
    /// field-level violation and the draft may be corrected and finished
    /// again.
    pub fn finish(&self) -> Result<Contact, ContactValidationError> {
        let contact = self.contact.clone().with_derived_name();
        validate_contact(&contact)?;
        Ok(contact)
    }
}
