//! # Selection Slots
//!
//! The ordered slot identifiers for the selection state. One definition,
//! three variants, exhaustive `match` everywhere — components never carry
//! their own slot-name strings.

use serde::{Deserialize, Serialize};

/// One of the named contact positions in the selection state.
///
/// Ordered: `Client` < `PrimaryContact` < `SecondaryContact`. The wire
/// names match the persisted state's object keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum SlotKey {
    /// The client being onboarded.
    Client,
    /// The client's primary contact.
    PrimaryContact,
    /// The client's secondary contact.
    SecondaryContact,
}

impl SlotKey {
    /// All slots, in display order.
    pub const ALL: [SlotKey; 3] = [
        SlotKey::Client,
        SlotKey::PrimaryContact,
        SlotKey::SecondaryContact,
    ];

    /// Return the wire name (the persisted state's object key).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::PrimaryContact => "primaryContact",
            Self::SecondaryContact => "secondaryContact",
        }
    }

    /// Human-readable label for front ends.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Client => "Client 1",
            Self::PrimaryContact => "Client 1 Primary Contact",
            Self::SecondaryContact => "Client 1 Secondary Contact",
        }
    }
}

impl std::fmt::Display for SlotKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SlotKey {
    type Err = UnknownSlot;

    /// Parse a slot from its wire name or a short alias
    /// (`client`, `primary`, `secondary`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(Self::Client),
            "primaryContact" | "primary" => Ok(Self::PrimaryContact),
            "secondaryContact" | "secondary" => Ok(Self::SecondaryContact),
            other => Err(UnknownSlot(other.to_string())),
        }
    }
}

/// Error for an unrecognized slot name.
#[derive(Debug, thiserror::Error)]
#[error("unknown slot: \"{0}\" (expected client, primary, or secondary)")]
pub struct UnknownSlot(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_serde() {
        for slot in SlotKey::ALL {
            let json = serde_json::to_string(&slot).unwrap();
            assert_eq!(json, format!("\"{}\"", slot.as_str()));
        }
    }

    #[test]
    fn ordered_as_displayed() {
        let mut slots = [
            SlotKey::SecondaryContact,
            SlotKey::Client,
            SlotKey::PrimaryContact,
        ];
        slots.sort();
        assert_eq!(slots, SlotKey::ALL);
    }

    #[test]
    fn parses_wire_names_and_aliases() {
        assert_eq!("client".parse::<SlotKey>().unwrap(), SlotKey::Client);
        assert_eq!(
            "primaryContact".parse::<SlotKey>().unwrap(),
            SlotKey::PrimaryContact
        );
        assert_eq!(
            "secondary".parse::<SlotKey>().unwrap(),
            SlotKey::SecondaryContact
        );
        assert!("tertiary".parse::<SlotKey>().is_err());
    }
}
