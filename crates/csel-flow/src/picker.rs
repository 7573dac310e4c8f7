//! The per-slot picker controller.
//!
//! Owns the search box state for one slot: the query, the debounced lookup,
//! the result list, the loading/error indicators, and the current value.
//! Selection and successful saves emit the new value through the `on_change`
//! callback the front end registered; the picker itself never touches the
//! page-level state directly.
//!
//! `set_query` and `save_draft` spawn onto the ambient Tokio runtime;
//! construct pickers inside one.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use csel_core::{Contact, ContactValidationError, LogAction, LogRequest, SlotKey};

use crate::draft::{ContactDraft, DraftMode};
use crate::ports::{ChangeNotifier, Searcher};

/// Quiet period between the last keystroke and the lookup.
pub const DEBOUNCE: Duration = Duration::from_millis(400);

type OnChange = Arc<dyn Fn(SlotKey, Contact) + Send + Sync>;

/// Observable picker state for a front end to render.
#[derive(Debug, Clone, Default)]
pub struct PickerSnapshot {
    /// The currently selected contact, if any.
    pub value: Option<Contact>,
    /// The current query text.
    pub query: String,
    /// The result list for the last applied lookup.
    pub results: Vec<Contact>,
    /// Whether a lookup is scheduled or in flight.
    pub loading: bool,
    /// The last lookup failure, if the latest lookup failed.
    pub error: Option<String>,
}

/// The result of a successful draft save.
#[derive(Debug, Clone)]
pub struct SaveOutcome {
    /// How the save was classified for the audit log.
    pub action: LogAction,
    /// The finished contact, as emitted through `on_change`.
    pub contact: Contact,
}

impl SaveOutcome {
    /// Human-readable notice for the front end.
    pub fn notice(&self) -> &'static str {
        match self.action {
            LogAction::Create => "Contact created successfully",
            _ => "Contact updated successfully",
        }
    }
}

#[derive(Default)]
struct PickerInner {
    value: Option<Contact>,
    query: String,
    results: Vec<Contact>,
    loading: bool,
    error: Option<String>,
    /// Bumped on every query change; a lookup only applies its result while
    /// its generation is still current.
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

/// Controller for one slot's contact picker.
pub struct Picker {
    slot: SlotKey,
    searcher: Arc<dyn Searcher>,
    notifier: Arc<dyn ChangeNotifier>,
    on_change: OnChange,
    debounce: Duration,
    inner: Arc<Mutex<PickerInner>>,
}

impl Picker {
    /// Create a picker for `slot`.
    pub fn new(
        slot: SlotKey,
        searcher: Arc<dyn Searcher>,
        notifier: Arc<dyn ChangeNotifier>,
        on_change: OnChange,
    ) -> Self {
        Self {
            slot,
            searcher,
            notifier,
            on_change,
            debounce: DEBOUNCE,
            inner: Arc::new(Mutex::new(PickerInner::default())),
        }
    }

    /// Override the debounce quiet period (tests).
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Seed the current value, e.g. from restored state.
    pub fn with_value(self, value: Option<Contact>) -> Self {
        self.inner.lock().value = value;
        self
    }

    /// The slot this picker manages.
    pub fn slot(&self) -> SlotKey {
        self.slot
    }

    /// The currently selected contact, if any.
    pub fn value(&self) -> Option<Contact> {
        self.inner.lock().value.clone()
    }

    /// A copy of the observable state.
    pub fn snapshot(&self) -> PickerSnapshot {
        let inner = self.inner.lock();
        PickerSnapshot {
            value: inner.value.clone(),
            query: inner.query.clone(),
            results: inner.results.clone(),
            loading: inner.loading,
            error: inner.error.clone(),
        }
    }

    /// Record a keystroke.
    ///
    /// Cancels any pending lookup (timer and request). A blank query clears
    /// the result list without issuing a request; otherwise a lookup is
    /// scheduled after the quiet period. A superseded lookup's result is
    /// never applied: cancellation aborts it at its next await point, and
    /// the generation check catches the remainder of the race.
    pub fn set_query(&self, query: &str) {
        let trimmed = query.trim().to_string();
        let generation = {
            let mut inner = self.inner.lock();
            inner.query = query.to_string();
            inner.generation += 1;
            if let Some(pending) = inner.pending.take() {
                pending.abort();
            }
            if trimmed.is_empty() {
                inner.results.clear();
                inner.loading = false;
                inner.error = None;
                return;
            }
            inner.loading = true;
            inner.error = None;
            inner.generation
        };

        let searcher = Arc::clone(&self.searcher);
        let state = Arc::clone(&self.inner);
        let debounce = self.debounce;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            let outcome = searcher.search(&trimmed).await;
            let mut inner = state.lock();
            if inner.generation != generation {
                // Superseded while in flight; drop the result.
                return;
            }
            inner.loading = false;
            inner.pending = None;
            match outcome {
                Ok(contacts) => {
                    inner.results = contacts;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "contact lookup failed");
                    inner.results.clear();
                    inner.error = Some(e.to_string());
                }
            }
        });
        self.inner.lock().pending = Some(handle);
    }

    /// Select a result as the picker's value immediately (no draft cycle)
    /// and emit it through `on_change`.
    pub fn select(&self, contact: Contact) {
        self.inner.lock().value = Some(contact.clone());
        (self.on_change)(self.slot, contact);
    }

    /// Open a create draft.
    pub fn begin_create(&self) -> ContactDraft {
        ContactDraft::create()
    }

    /// Open an edit draft over the current value.
    pub fn begin_edit(&self) -> ContactDraft {
        ContactDraft::edit(self.value().as_ref())
    }

    /// Finish a draft: validate, apply, emit, and notify the audit log.
    ///
    /// Validation failure blocks the save (no value change, no `on_change`,
    /// no notification) and returns every field-level message. On success
    /// the save classifies as `create` (create mode, or no prior value) or
    /// `update`, and the audit notification is fired asynchronously —
    /// a notification failure is warn-logged and never rolls the save back.
    pub fn save_draft(
        &self,
        draft: &ContactDraft,
    ) -> Result<SaveOutcome, ContactValidationError> {
        let contact = draft.finish()?;

        let action = {
            let mut inner = self.inner.lock();
            let action = if draft.mode() == DraftMode::Create || inner.value.is_none() {
                LogAction::Create
            } else {
                LogAction::Update
            };
            inner.value = Some(contact.clone());
            action
        };
        (self.on_change)(self.slot, contact.clone());

        match serde_json::to_value(&contact) {
            Ok(payload) => {
                let request = LogRequest::contact_saved(action, self.slot, payload);
                let notifier = Arc::clone(&self.notifier);
                tokio::spawn(async move {
                    if let Err(e) = notifier.notify(&request).await {
                        tracing::warn!(error = %e, action = %request.action, "change notification failed");
                    }
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "contact payload serialization failed; skipping notification");
            }
        }

        Ok(SaveOutcome { action, contact })
    }
}

impl std::fmt::Debug for Picker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Picker")
            .field("slot", &self.slot)
            .field("debounce", &self.debounce)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use csel_core::{ContactField, ContactId, ContactType};
    use csel_search::SearchApiError;

    use crate::notify::{LogAck, NotifyError, NullNotifier};

    fn contact(name: &str) -> Contact {
        Contact {
            id: ContactId::fresh(),
            contact_type: ContactType::Individual,
            name: name.to_string(),
            first_name: Some(name.to_string()),
            last_name: Some("Tester".into()),
            company_name: None,
            email: format!("{}@example.com", name.to_lowercase()),
            address_line1: "1 Test St".into(),
            city: "Testville".into(),
            country: "US".into(),
        }
    }

    /// Searcher that records queries and answers with canned contacts named
    /// after the query, optionally after a delay.
    struct RecordingSearcher {
        calls: Mutex<Vec<String>>,
        delay: Duration,
        fail: bool,
    }

    impl RecordingSearcher {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                delay: Duration::ZERO,
                fail: false,
            }
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }

        fn failing(mut self) -> Self {
            self.fail = true;
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl Searcher for RecordingSearcher {
        async fn search(&self, query: &str) -> Result<Vec<Contact>, SearchApiError> {
            self.calls.lock().push(query.to_string());
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            if self.fail {
                return Err(SearchApiError::Api {
                    endpoint: "GET /users/search".into(),
                    status: 503,
                    body: "down".into(),
                });
            }
            Ok(vec![contact(&format!("Result-{query}"))])
        }
    }

    /// Notifier that records every request it receives.
    #[derive(Default)]
    struct RecordingNotifier {
        requests: Mutex<Vec<LogRequest>>,
        fail: bool,
    }

    #[async_trait]
    impl ChangeNotifier for RecordingNotifier {
        async fn notify(&self, request: &LogRequest) -> Result<LogAck, NotifyError> {
            self.requests.lock().push(request.clone());
            if self.fail {
                return Err(NotifyError::BadResponse);
            }
            Ok(LogAck {
                logged_to_console: false,
            })
        }
    }

    fn picker_with(
        searcher: Arc<dyn Searcher>,
        notifier: Arc<dyn ChangeNotifier>,
    ) -> (Picker, Arc<Mutex<Vec<(SlotKey, Contact)>>>) {
        let emitted = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&emitted);
        let picker = Picker::new(
            SlotKey::Client,
            searcher,
            notifier,
            Arc::new(move |slot, contact| sink.lock().push((slot, contact))),
        );
        (picker, emitted)
    }

    /// Let spawned tasks run to completion on the current-thread test runtime.
    async fn settle() {
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_typing_issues_exactly_one_lookup() {
        let searcher = Arc::new(RecordingSearcher::new());
        let (picker, _) = picker_with(searcher.clone(), Arc::new(NullNotifier));

        picker.set_query("an");
        tokio::time::sleep(Duration::from_millis(200)).await;
        picker.set_query("ann");
        tokio::time::sleep(Duration::from_millis(450)).await;
        settle().await;

        assert_eq!(searcher.calls(), vec!["ann".to_string()]);
        let snap = picker.snapshot();
        assert_eq!(snap.results.len(), 1);
        assert_eq!(snap.results[0].name, "Result-ann");
        assert!(!snap.loading);
        assert!(snap.error.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn stale_in_flight_result_is_never_applied() {
        let searcher = Arc::new(RecordingSearcher::new().with_delay(Duration::from_millis(100)));
        let (picker, _) = picker_with(searcher.clone(), Arc::new(NullNotifier));

        picker.set_query("an");
        // Let the first lookup fire and enter its slow request.
        tokio::time::sleep(Duration::from_millis(450)).await;
        picker.set_query("ann");
        tokio::time::sleep(Duration::from_millis(600)).await;
        settle().await;

        let snap = picker.snapshot();
        assert_eq!(snap.results.len(), 1);
        assert_eq!(snap.results[0].name, "Result-ann");
    }

    #[tokio::test(start_paused = true)]
    async fn blank_query_clears_without_request() {
        let searcher = Arc::new(RecordingSearcher::new());
        let (picker, _) = picker_with(searcher.clone(), Arc::new(NullNotifier));

        picker.set_query("ann");
        tokio::time::sleep(Duration::from_millis(450)).await;
        settle().await;
        assert_eq!(picker.snapshot().results.len(), 1);

        picker.set_query("   ");
        tokio::time::sleep(Duration::from_millis(450)).await;
        settle().await;

        let snap = picker.snapshot();
        assert!(snap.results.is_empty());
        assert!(!snap.loading);
        assert_eq!(searcher.calls(), vec!["ann".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn blank_query_cancels_pending_lookup() {
        let searcher = Arc::new(RecordingSearcher::new());
        let (picker, _) = picker_with(searcher.clone(), Arc::new(NullNotifier));

        picker.set_query("ann");
        tokio::time::sleep(Duration::from_millis(200)).await;
        picker.set_query("");
        tokio::time::sleep(Duration::from_millis(600)).await;
        settle().await;

        assert!(searcher.calls().is_empty());
        assert!(picker.snapshot().results.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn lookup_failure_surfaces_error_and_clears_loading() {
        let searcher = Arc::new(RecordingSearcher::new().failing());
        let (picker, _) = picker_with(searcher, Arc::new(NullNotifier));

        picker.set_query("ann");
        tokio::time::sleep(Duration::from_millis(450)).await;
        settle().await;

        let snap = picker.snapshot();
        assert!(snap.results.is_empty());
        assert!(!snap.loading);
        assert!(snap.error.unwrap().contains("503"));
    }

    #[tokio::test]
    async fn select_sets_value_and_emits() {
        let (picker, emitted) =
            picker_with(Arc::new(RecordingSearcher::new()), Arc::new(NullNotifier));
        let choice = contact("Ada");
        picker.select(choice.clone());

        assert_eq!(picker.value().unwrap().id, choice.id);
        let emitted = emitted.lock();
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].0, SlotKey::Client);
        assert_eq!(emitted[0].1.id, choice.id);
    }

    #[tokio::test]
    async fn invalid_draft_blocks_save_and_emits_nothing() {
        let notifier = Arc::new(RecordingNotifier::default());
        let (picker, emitted) =
            picker_with(Arc::new(RecordingSearcher::new()), notifier.clone());

        let mut draft = picker.begin_create();
        draft.set_field(ContactField::FirstName, "Ada");
        // Missing everything else.
        let err = picker.save_draft(&draft).unwrap_err();
        assert!(err.message_for(ContactField::LastName).is_some());

        settle().await;
        assert!(picker.value().is_none());
        assert!(emitted.lock().is_empty());
        assert!(notifier.requests.lock().is_empty());
    }

    #[tokio::test]
    async fn first_save_classifies_as_create_and_notifies() {
        let notifier = Arc::new(RecordingNotifier::default());
        let (picker, emitted) =
            picker_with(Arc::new(RecordingSearcher::new()), notifier.clone());

        let mut draft = picker.begin_create();
        draft.set_field(ContactField::FirstName, "Ada");
        draft.set_field(ContactField::LastName, "Lovelace");
        draft.set_field(ContactField::Email, "ada@example.com");
        draft.set_field(ContactField::AddressLine1, "1 Analytical Way");
        draft.set_field(ContactField::City, "London");
        draft.set_field(ContactField::Country, "UK");

        let outcome = picker.save_draft(&draft).unwrap();
        assert_eq!(outcome.action, LogAction::Create);
        assert_eq!(outcome.notice(), "Contact created successfully");
        assert_eq!(outcome.contact.name, "Ada Lovelace");
        assert_eq!(emitted.lock().len(), 1);

        settle().await;
        let requests = notifier.requests.lock();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].action, LogAction::Create);
        assert_eq!(requests[0].field.as_deref(), Some("client"));
    }

    #[tokio::test]
    async fn editing_existing_value_classifies_as_update() {
        let notifier = Arc::new(RecordingNotifier::default());
        let (picker, _) = picker_with(Arc::new(RecordingSearcher::new()), notifier.clone());
        picker.select(contact("Ada"));

        let mut draft = picker.begin_edit();
        draft.set_field(ContactField::City, "Cambridge");
        let outcome = picker.save_draft(&draft).unwrap();

        assert_eq!(outcome.action, LogAction::Update);
        assert_eq!(outcome.contact.city, "Cambridge");

        settle().await;
        assert_eq!(notifier.requests.lock()[0].action, LogAction::Update);
    }

    #[tokio::test]
    async fn create_mode_over_existing_value_still_classifies_as_create() {
        let notifier = Arc::new(RecordingNotifier::default());
        let (picker, _) = picker_with(Arc::new(RecordingSearcher::new()), notifier.clone());
        picker.select(contact("Ada"));

        let mut draft = picker.begin_create();
        draft.set_field(ContactField::FirstName, "Grace");
        draft.set_field(ContactField::LastName, "Hopper");
        draft.set_field(ContactField::Email, "grace@example.com");
        draft.set_field(ContactField::AddressLine1, "2 Navy Yard");
        draft.set_field(ContactField::City, "Arlington");
        draft.set_field(ContactField::Country, "US");

        let outcome = picker.save_draft(&draft).unwrap();
        assert_eq!(outcome.action, LogAction::Create);
    }

    #[tokio::test]
    async fn notification_failure_does_not_roll_back_save() {
        let notifier = Arc::new(RecordingNotifier {
            fail: true,
            ..Default::default()
        });
        let (picker, emitted) =
            picker_with(Arc::new(RecordingSearcher::new()), notifier.clone());

        let mut draft = picker.begin_create();
        draft.set_field(ContactField::FirstName, "Ada");
        draft.set_field(ContactField::LastName, "Lovelace");
        draft.set_field(ContactField::Email, "ada@example.com");
        draft.set_field(ContactField::AddressLine1, "1 Analytical Way");
        draft.set_field(ContactField::City, "London");
        draft.set_field(ContactField::Country, "UK");

        let outcome = picker.save_draft(&draft).unwrap();
        settle().await;

        // The notifier was reached and failed; the local save stands.
        assert_eq!(notifier.requests.lock().len(), 1);
        assert_eq!(picker.value().unwrap().id, outcome.contact.id);
        assert_eq!(emitted.lock().len(), 1);
    }
}
