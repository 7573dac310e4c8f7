//! `csel select` — search and select a result into a slot.
//!
//! Drives the same picker controller an interactive front end would:
//! the query goes through the debounced lookup, and the chosen result is
//! selected into the slot (persisting the state as a side effect).

use std::path::Path;

use clap::Args;

use csel_core::SlotKey;

use crate::{await_lookup, build_controller, print_contact};

/// Arguments for `csel select`.
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// The slot to fill (client, primary, secondary).
    pub slot: SlotKey,

    /// Free-text query: a name, email, or company.
    pub query: String,

    /// Which result to select, 1-based.
    #[arg(long, default_value_t = 1)]
    pub pick: usize,
}

/// Search, pick one result, and select it into the slot.
pub async fn run_select(args: &SelectArgs, root: &Path) -> anyhow::Result<u8> {
    let controller = build_controller(root)?;
    let picker = controller.picker(args.slot);

    picker.set_query(&args.query);
    let snapshot = await_lookup(&picker).await;

    if let Some(error) = snapshot.error {
        anyhow::bail!("search failed: {error}");
    }
    if snapshot.results.is_empty() {
        println!("No matches for \"{}\".", args.query.trim());
        return Ok(1);
    }
    let Some(contact) = snapshot.results.get(args.pick.saturating_sub(1)) else {
        anyhow::bail!(
            "--pick {} is out of range ({} results)",
            args.pick,
            snapshot.results.len()
        );
    };

    picker.select(contact.clone());
    println!("Selected for {}:", args.slot.label());
    print_contact(contact);
    Ok(0)
}
