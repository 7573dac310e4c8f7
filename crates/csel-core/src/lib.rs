#![deny(missing_docs)]

//! # csel-core — Foundational Types for the Contact Selection Stack
//!
//! This crate defines the types that every other crate in the workspace
//! depends on. It has no internal crate dependencies — only `serde`,
//! `serde_json`, `thiserror`, `chrono`, and `uuid` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** A [`ContactId`] is a
//!    distinct type, not a bare string.
//!
//! 2. **Single [`SlotKey`] enum.** One ordered definition of the selection
//!    slots, exhaustive `match` everywhere. No independent slot lists that
//!    can diverge across components.
//!
//! 3. **Validation produces field-level diagnostics.** [`validate_contact`]
//!    returns every violation with the offending field and a specific
//!    message, so a front end can annotate individual inputs.
//!
//! 4. **UTC-only timestamps on the wire.** Log entries carry
//!    `chrono::DateTime<Utc>` serialized as ISO 8601 with a `Z` suffix.

pub mod contact;
pub mod log;
pub mod slot;
pub mod validation;

// Re-export primary types at crate root for ergonomic imports.
pub use contact::{Contact, ContactId, ContactType};
pub use log::{LogAction, LogEntry, LogRequest};
pub use slot::SlotKey;
pub use validation::{validate_contact, ContactField, ContactValidationError, FieldViolation};
