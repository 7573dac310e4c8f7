//! `csel show` and `csel reset` — inspect and reset the selection state.

use std::path::Path;

use clap::Args;

use csel_core::SlotKey;

use crate::{load_flow, print_contact};

/// Print the current selection state.
pub fn run_show(root: &Path) -> anyhow::Result<u8> {
    let flow = load_flow(root);
    let state = flow.snapshot();

    for (slot, contact) in state.iter() {
        println!("{}:", slot.label());
        match contact {
            Some(contact) => print_contact(contact),
            None => println!("  (empty)"),
        }
    }
    if state.is_complete() {
        println!("\nAll slots populated — ready to submit.");
    }
    Ok(0)
}

/// Arguments for `csel reset`.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// The slot to reset; omit to reset all slots.
    pub slot: Option<SlotKey>,
}

/// Reset one slot, or all of them.
pub fn run_reset(args: &ResetArgs, root: &Path) -> anyhow::Result<u8> {
    let flow = load_flow(root);
    match args.slot {
        Some(slot) => {
            match flow.reset_slot(slot) {
                Some(prior) => println!("Reset {} (was {})", slot.label(), prior.name),
                None => println!("{} was already empty", slot.label()),
            }
        }
        None => {
            flow.reset_all();
            println!("All slots reset");
        }
    }
    Ok(0)
}
