use std::fmt;

use crate::normalize::{CISCO_MAC_ADDRESS_RE, MAC_ADDRESS_RE};

/// A textual MAC address notation recognised by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Three dot-separated groups of up to four hex digits: `0123.4567.89ab`.
    Cisco,

    /// Six groups of one or two hex digits, each optionally followed by `:`
    /// or `-`: `00:1A:2B:3C:4D:5E`, `00-1a-2b-3c-4d-5e`, `001a2b3c4d5e`.
    Delimited,
}

impl Notation {
    /// Detects which notation `input` is written in.
    ///
    /// Cisco notation is tried first, the same order the normalizer uses.
    /// Returns `None` if neither notation matches.
    pub fn detect(input: &str) -> Option<Self> {
        if CISCO_MAC_ADDRESS_RE.is_match(input) {
            Some(Notation::Cisco)
        } else if MAC_ADDRESS_RE.is_match(input) {
            Some(Notation::Delimited)
        } else {
            None
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Cisco => write!(f, "Cisco"),
            Notation::Delimited => write!(f, "Delimited"),
        }
    }
}
