//! # Selection Flow
//!
//! The page-level flow: load the selection state through the store port
//! (defaulting on anything unreadable), apply slot transitions, and persist
//! the whole state after every change. Persistence failures are reported and
//! swallowed — losing a write never blocks the selection flow itself.

use std::sync::Arc;

use parking_lot::RwLock;

use csel_core::{Contact, SlotKey};

use crate::selection::SelectionState;
use crate::store::{StateStore, STATE_KEY};

/// The record of one slot transition.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotTransition {
    /// The slot that changed.
    pub slot: SlotKey,
    /// The occupant that was replaced, if the slot was populated.
    pub prior: Option<Contact>,
}

/// The selection flow state machine.
///
/// Thread-safe: the state sits behind a `parking_lot::RwLock` and the store
/// is shared via `Arc`, so front ends can hold the flow wherever they need.
pub struct SelectionFlow {
    store: Arc<dyn StateStore>,
    state: RwLock<SelectionState>,
}

impl SelectionFlow {
    /// Restore the flow from the store.
    ///
    /// Missing state, a read failure, or unparseable stored JSON all load as
    /// the all-empty default — restore never fails. Individually invalid
    /// slots default per-slot (see [`SelectionState`] deserialization).
    pub fn load(store: Arc<dyn StateStore>) -> Self {
        let state = match store.get(STATE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!(error = %e, "stored selection state unparseable; resetting");
                    SelectionState::empty()
                }
            },
            Ok(None) => SelectionState::empty(),
            Err(e) => {
                tracing::warn!(error = %e, "state store read failed; starting empty");
                SelectionState::empty()
            }
        };
        Self {
            store,
            state: RwLock::new(state),
        }
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> SelectionState {
        self.state.read().clone()
    }

    /// The contact currently occupying a slot, if any.
    pub fn get(&self, slot: SlotKey) -> Option<Contact> {
        self.state.read().get(slot).cloned()
    }

    /// Populate (or replace) a slot and persist the full state.
    pub fn set_slot(&self, slot: SlotKey, contact: Contact) -> SlotTransition {
        let prior = {
            let mut state = self.state.write();
            state.set(slot, contact)
        };
        self.persist();
        tracing::debug!(slot = %slot, replaced = prior.is_some(), "slot populated");
        SlotTransition { slot, prior }
    }

    /// Reset a slot to empty and persist the full state.
    pub fn reset_slot(&self, slot: SlotKey) -> Option<Contact> {
        let prior = {
            let mut state = self.state.write();
            state.clear(slot)
        };
        self.persist();
        prior
    }

    /// Reset every slot and persist the empty state.
    pub fn reset_all(&self) {
        *self.state.write() = SelectionState::empty();
        self.persist();
    }

    /// Serialize the current state and write it through the store.
    ///
    /// Failures are warn-logged and swallowed: the in-memory state is already
    /// updated and the user keeps working.
    fn persist(&self) {
        let state = self.state.read().clone();
        let serialized = match serde_json::to_string(&state) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "selection state serialization failed");
                return;
            }
        };
        if let Err(e) = self.store.set(STATE_KEY, &serialized) {
            tracing::warn!(error = %e, "selection state persist failed");
        }
    }
}

impl std::fmt::Debug for SelectionFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionFlow")
            .field("state", &*self.state.read())
            .finish()
    }
}
