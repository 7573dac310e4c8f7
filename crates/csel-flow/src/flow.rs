//! The page-level flow controller.
//!
//! Wires one picker per slot to the shared selection flow and owns the
//! final submit: the full current state is serialized and delivered to the
//! logging endpoint. Submission has no server-side effect beyond the
//! appended audit line, so a failed submit leaves the in-memory state
//! untouched and may simply be retried.

use std::sync::Arc;
use std::time::Duration;

use csel_core::{LogRequest, SlotKey};
use csel_state::SelectionFlow;

use crate::notify::NotifyError;
use crate::picker::Picker;
use crate::ports::{ChangeNotifier, Searcher};

/// Acknowledgement of a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// True when the server recorded the entry on its diagnostic channel
    /// because its journal was unwritable.
    pub logged_to_console: bool,
}

impl SubmitReceipt {
    /// Human-readable notice for the front end.
    pub fn notice(&self) -> &'static str {
        "All selections submitted and logged successfully"
    }
}

/// Controller wiring pickers, the selection flow, and the audit log.
pub struct FlowController {
    flow: Arc<SelectionFlow>,
    searcher: Arc<dyn Searcher>,
    notifier: Arc<dyn ChangeNotifier>,
    debounce: Option<Duration>,
}

impl FlowController {
    /// Create a controller over a restored selection flow.
    pub fn new(
        flow: Arc<SelectionFlow>,
        searcher: Arc<dyn Searcher>,
        notifier: Arc<dyn ChangeNotifier>,
    ) -> Self {
        Self {
            flow,
            searcher,
            notifier,
            debounce: None,
        }
    }

    /// Override the pickers' debounce quiet period (tests).
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = Some(debounce);
        self
    }

    /// The underlying selection flow.
    pub fn flow(&self) -> &Arc<SelectionFlow> {
        &self.flow
    }

    /// Build the picker for one slot.
    ///
    /// The picker's value is seeded from the restored state and its
    /// `on_change` writes back through the selection flow, persisting on
    /// every change.
    pub fn picker(&self, slot: SlotKey) -> Picker {
        let flow = Arc::clone(&self.flow);
        let picker = Picker::new(
            slot,
            Arc::clone(&self.searcher),
            Arc::clone(&self.notifier),
            Arc::new(move |slot, contact| {
                flow.set_slot(slot, contact);
            }),
        )
        .with_value(self.flow.get(slot));
        match self.debounce {
            Some(debounce) => picker.with_debounce(debounce),
            None => picker,
        }
    }

    /// Submit the full current state to the logging endpoint.
    ///
    /// A non-success response or transport failure is returned to the
    /// caller; the in-memory state is not altered either way, and the
    /// submit may be retried idempotently.
    pub async fn submit(&self) -> Result<SubmitReceipt, NotifyError> {
        let state = self.flow.snapshot();
        let payload = match serde_json::to_value(&state) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "selection state serialization failed");
                serde_json::Value::Null
            }
        };
        let request = LogRequest::submission(payload);

        let ack = self.notifier.notify(&request).await?;
        tracing::info!(
            logged_to_console = ack.logged_to_console,
            "selection state submitted"
        );
        Ok(SubmitReceipt {
            logged_to_console: ack.logged_to_console,
        })
    }
}
