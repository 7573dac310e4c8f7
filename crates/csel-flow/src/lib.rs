//! # csel-flow — Picker and Flow Controllers
//!
//! The interaction layer between a front end and the selection state
//! machine. A [`Picker`] manages one slot: a debounced, cancellable search
//! against the [`Searcher`] port, immediate selection, and the create/edit
//! draft cycle with field-level validation. The [`FlowController`] wires one
//! picker per slot to a shared [`SelectionFlow`] and owns the page-level
//! submit operation.
//!
//! ## Ports
//!
//! Search and change notification are injected as object-safe async traits
//! ([`Searcher`], [`ChangeNotifier`]) so controllers can be unit-tested
//! without a network. Production implementations delegate to
//! [`csel_search::SearchClient`] and the logging endpoint.
//!
//! ## Cancellation Discipline
//!
//! A new query aborts the previous pending lookup (timer and request) and
//! bumps a generation counter; a superseded lookup's result is never
//! applied, even if the abort loses the race.
//!
//! [`SelectionFlow`]: csel_state::SelectionFlow

pub mod draft;
pub mod flow;
pub mod notify;
pub mod picker;
pub mod ports;

pub use draft::{ContactDraft, DraftMode};
pub use flow::{FlowController, SubmitReceipt};
pub use notify::{HttpChangeNotifier, LogAck, NotifyError, NullNotifier};
pub use picker::{Picker, PickerSnapshot, SaveOutcome};
pub use ports::{ChangeNotifier, Searcher};
