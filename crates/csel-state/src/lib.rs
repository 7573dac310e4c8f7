//! # csel-state — Selection State Machine
//!
//! Holds the page-level selection state: an ordered mapping from [`SlotKey`]
//! to an optional contact, persisted through the [`StateStore`] port on every
//! transition and restored (with defaulting) on load.
//!
//! ## State Machine
//!
//! Each slot moves `empty → populated` on selection and
//! `populated → populated` on replace. A slot can be reset to empty, but
//! slots are never removed from the mapping. A corrupt or unreadable stored
//! state never fails the load — it resets to the all-empty default.
//!
//! ## Persistence Port
//!
//! Storage is injected via [`StateStore`] (`get`/`set` of namespaced keys) so
//! the state machine can be unit-tested without a real backing medium. The
//! file-backed implementation is the production store; the in-memory one is
//! for tests and embedding.
//!
//! [`SlotKey`]: csel_core::SlotKey

pub mod flow;
pub mod selection;
pub mod store;

pub use flow::{SelectionFlow, SlotTransition};
pub use selection::SelectionState;
pub use store::{FileStateStore, MemoryStateStore, StateStore, StoreError, STATE_KEY};
