//! # Selection State
//!
//! The ordered mapping from slot to optional contact. Serializes to the
//! legacy object shape `{client, primaryContact, secondaryContact}` with
//! explicit `null` for empty slots, and deserializes leniently: a slot whose
//! stored value does not parse as a contact loads as empty instead of
//! failing the whole state.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use csel_core::{Contact, SlotKey};

/// The full selection state: one optional contact per slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawSelectionState", into = "RawSelectionState")]
pub struct SelectionState {
    slots: BTreeMap<SlotKey, Contact>,
}

impl SelectionState {
    /// The all-empty state.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The contact currently occupying a slot, if any.
    pub fn get(&self, slot: SlotKey) -> Option<&Contact> {
        self.slots.get(&slot)
    }

    /// Populate (or replace) a slot. Returns the prior occupant.
    pub fn set(&mut self, slot: SlotKey, contact: Contact) -> Option<Contact> {
        self.slots.insert(slot, contact)
    }

    /// Reset a slot to empty. Returns the prior occupant.
    pub fn clear(&mut self, slot: SlotKey) -> Option<Contact> {
        self.slots.remove(&slot)
    }

    /// Whether every slot is populated.
    pub fn is_complete(&self) -> bool {
        SlotKey::ALL.iter().all(|s| self.slots.contains_key(s))
    }

    /// Iterate the slots in display order with their occupants.
    pub fn iter(&self) -> impl Iterator<Item = (SlotKey, Option<&Contact>)> {
        SlotKey::ALL.into_iter().map(|s| (s, self.slots.get(&s)))
    }
}

// ---------------------------------------------------------------------------
// Wire shape
// ---------------------------------------------------------------------------

/// The persisted object shape. Empty slots serialize as explicit `null`;
/// unparseable slot values deserialize as empty.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSelectionState {
    #[serde(default, deserialize_with = "lenient_contact")]
    client: Option<Contact>,
    #[serde(default, deserialize_with = "lenient_contact")]
    primary_contact: Option<Contact>,
    #[serde(default, deserialize_with = "lenient_contact")]
    secondary_contact: Option<Contact>,
}

/// Deserialize a slot value, mapping anything that is not a valid contact
/// (including `null`) to an empty slot.
fn lenient_contact<'de, D>(deserializer: D) -> Result<Option<Contact>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or(None))
}

impl From<RawSelectionState> for SelectionState {
    fn from(raw: RawSelectionState) -> Self {
        let mut state = SelectionState::empty();
        for (slot, value) in [
            (SlotKey::Client, raw.client),
            (SlotKey::PrimaryContact, raw.primary_contact),
            (SlotKey::SecondaryContact, raw.secondary_contact),
        ] {
            if let Some(contact) = value {
                state.set(slot, contact);
            }
        }
        state
    }
}

impl From<SelectionState> for RawSelectionState {
    fn from(state: SelectionState) -> Self {
        let mut state = state;
        Self {
            client: state.clear(SlotKey::Client),
            primary_contact: state.clear(SlotKey::PrimaryContact),
            secondary_contact: state.clear(SlotKey::SecondaryContact),
        }
    }
}
