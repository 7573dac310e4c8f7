//! `csel submit` — submit the full selection to the logging endpoint.
//!
//! A failed submit changes nothing locally; running the command again
//! retries idempotently.

use std::path::Path;

use crate::build_controller;

/// Submit the current selection state.
pub async fn run_submit(root: &Path) -> anyhow::Result<u8> {
    let controller = build_controller(root)?;

    match controller.submit().await {
        Ok(receipt) => {
            println!("{}", receipt.notice());
            if receipt.logged_to_console {
                println!("(server storage was unwritable; the entry went to its diagnostic log)");
            }
            Ok(0)
        }
        Err(e) => {
            println!("Failed to submit: {e}");
            println!("Nothing was changed locally — you can retry.");
            Ok(1)
        }
    }
}
