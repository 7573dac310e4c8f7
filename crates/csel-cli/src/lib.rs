//! # csel-cli — CLI Front End for the Contact Selection Stack
//!
//! The rendering collaborator: a thin terminal surface that drives the
//! selection flow through the same controllers an interactive front end
//! would use. Holds no business logic of its own.
//!
//! ## Subcommands
//!
//! - `csel show` — print the current selection state.
//! - `csel search <query>` — search contacts and print the result page.
//! - `csel select <slot> <query>` — search and select a result into a slot.
//! - `csel edit <slot>` — create or edit a slot's contact from flag values.
//! - `csel reset [<slot>]` — reset one slot, or all of them.
//! - `csel submit` — submit the full selection to the logging endpoint.

pub mod edit;
pub mod search;
pub mod select;
pub mod show;
pub mod submit;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use csel_core::Contact;
use csel_flow::{FlowController, HttpChangeNotifier, Picker, PickerSnapshot};
use csel_search::{SearchApiConfig, SearchClient};
use csel_state::{FileStateStore, SelectionFlow};

/// Directory (under the working directory) holding the persisted state.
pub const STATE_DIR: &str = ".csel";

/// How long `select` waits for a debounced lookup to finish.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(15);

/// Resolve the logging endpoint base URL.
///
/// `CSEL_LOG_API_URL` overrides; the default targets a local server.
pub fn log_api_url() -> anyhow::Result<Url> {
    let raw = std::env::var("CSEL_LOG_API_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    Ok(Url::parse(&raw)?)
}

/// Load the selection flow from the file-backed store in `root`.
pub fn load_flow(root: &Path) -> Arc<SelectionFlow> {
    let store = Arc::new(FileStateStore::new(root.join(STATE_DIR)));
    Arc::new(SelectionFlow::load(store))
}

/// Build the flow controller over the file-backed store in `root`.
pub fn build_controller(root: &Path) -> anyhow::Result<FlowController> {
    let flow = load_flow(root);
    let searcher = Arc::new(SearchClient::new(SearchApiConfig::from_env()?)?);
    let notifier = Arc::new(HttpChangeNotifier::new(log_api_url()?)?);
    Ok(FlowController::new(flow, searcher, notifier))
}

/// Wait for a picker's pending lookup to settle and return the snapshot.
pub async fn await_lookup(picker: &Picker) -> PickerSnapshot {
    let deadline = tokio::time::Instant::now() + LOOKUP_TIMEOUT;
    loop {
        let snapshot = picker.snapshot();
        if !snapshot.loading || tokio::time::Instant::now() >= deadline {
            return snapshot;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}

/// Print one contact in the list format shared by `show` and `search`.
pub fn print_contact(contact: &Contact) {
    println!(
        "  {} <{}> — {}",
        contact.name, contact.email, contact.contact_type
    );
    if !contact.address_line1.is_empty() || !contact.city.is_empty() {
        println!(
            "    {}, {}, {}",
            contact.address_line1, contact.city, contact.country
        );
    }
    if let Some(company) = contact.company_name.as_deref() {
        if !company.is_empty() {
            println!("    company: {company}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csel_core::SlotKey;

    #[test]
    fn load_flow_on_fresh_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let flow = load_flow(dir.path());
        for slot in SlotKey::ALL {
            assert!(flow.get(slot).is_none());
        }
    }

    #[test]
    fn load_flow_survives_corrupt_state_file() {
        let dir = tempfile::tempdir().unwrap();
        let state_dir = dir.path().join(STATE_DIR);
        std::fs::create_dir_all(&state_dir).unwrap();
        std::fs::write(
            state_dir.join(format!("{}.json", csel_state::STATE_KEY)),
            "garbage",
        )
        .unwrap();

        let flow = load_flow(dir.path());
        assert!(flow.get(SlotKey::Client).is_none());
    }

    #[test]
    fn default_log_api_url_is_local() {
        if std::env::var("CSEL_LOG_API_URL").is_err() {
            let url = log_api_url().unwrap();
            assert_eq!(url.host_str(), Some("127.0.0.1"));
        }
    }
}
