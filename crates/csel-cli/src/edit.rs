//! `csel edit` — create or edit a slot's contact from flag values.
//!
//! Runs the same draft cycle as an interactive modal: start from blank
//! (`--create`) or the slot's current value, apply the provided fields,
//! then save with full validation. A blocked save prints every field-level
//! message and changes nothing.

use std::path::Path;
use std::time::Duration;

use clap::Args;

use csel_core::{ContactField, ContactType, SlotKey};

use crate::{build_controller, print_contact};

/// Arguments for `csel edit`.
#[derive(Args, Debug)]
pub struct EditArgs {
    /// The slot to edit (client, primary, secondary).
    pub slot: SlotKey,

    /// Start from a blank contact instead of the slot's current value.
    #[arg(long)]
    pub create: bool,

    /// Contact type: individual or company.
    #[arg(long = "type")]
    pub contact_type: Option<String>,

    /// Given name (individuals).
    #[arg(long)]
    pub first_name: Option<String>,

    /// Family name (individuals).
    #[arg(long)]
    pub last_name: Option<String>,

    /// Company name (companies).
    #[arg(long)]
    pub company_name: Option<String>,

    /// Email address.
    #[arg(long)]
    pub email: Option<String>,

    /// First address line.
    #[arg(long)]
    pub address: Option<String>,

    /// City.
    #[arg(long)]
    pub city: Option<String>,

    /// Country.
    #[arg(long)]
    pub country: Option<String>,
}

/// Apply the flags to a draft and save it through the picker.
pub async fn run_edit(args: &EditArgs, root: &Path) -> anyhow::Result<u8> {
    let controller = build_controller(root)?;
    let picker = controller.picker(args.slot);

    let mut draft = if args.create {
        picker.begin_create()
    } else {
        picker.begin_edit()
    };

    if let Some(raw) = args.contact_type.as_deref() {
        let contact_type = match raw {
            "individual" => ContactType::Individual,
            "company" => ContactType::Company,
            other => anyhow::bail!("unknown contact type: \"{other}\" (expected individual or company)"),
        };
        draft.set_type(contact_type);
    }

    let fields = [
        (ContactField::FirstName, args.first_name.as_deref()),
        (ContactField::LastName, args.last_name.as_deref()),
        (ContactField::CompanyName, args.company_name.as_deref()),
        (ContactField::Email, args.email.as_deref()),
        (ContactField::AddressLine1, args.address.as_deref()),
        (ContactField::City, args.city.as_deref()),
        (ContactField::Country, args.country.as_deref()),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            draft.set_field(field, value);
        }
    }

    match picker.save_draft(&draft) {
        Ok(outcome) => {
            println!("{} — {}:", outcome.notice(), args.slot.label());
            print_contact(&outcome.contact);
            // The audit notification is fire-and-forget on a background
            // task; give it a beat to leave the process before exit.
            tokio::time::sleep(Duration::from_millis(300)).await;
            Ok(0)
        }
        Err(validation) => {
            println!("Save blocked — fix the following fields:");
            for violation in &validation.violations {
                println!("  {}: {}", violation.field, violation.message);
            }
            Ok(1)
        }
    }
}
