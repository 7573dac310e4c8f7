//! `csel search` — one-shot contact search against the external service.

use std::path::Path;

use clap::Args;

use csel_search::{SearchApiConfig, SearchClient};

use crate::print_contact;

/// Arguments for `csel search`.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text query: a name, email, or company.
    pub query: String,
}

/// Run a search and print the result page.
pub async fn run_search(args: &SearchArgs, _root: &Path) -> anyhow::Result<u8> {
    let query = args.query.trim();
    if query.is_empty() {
        println!("Empty query — nothing to search.");
        return Ok(0);
    }

    let client = SearchClient::new(SearchApiConfig::from_env()?)?;
    let contacts = client.search(query).await?;

    if contacts.is_empty() {
        println!("No matches for \"{query}\".");
        return Ok(0);
    }
    for (index, contact) in contacts.iter().enumerate() {
        println!("{}.", index + 1);
        print_contact(contact);
    }
    Ok(0)
}
