//! Parsing of the textual MAC address notations accepted by this crate.
//!
//! Two notations are recognised, tried in this order:
//!
//! - Cisco dotted notation, three groups of up to four hex digits:
//!   `0123.4567.89ab`
//! - Delimited-octet notation, six groups of one or two hex digits each
//!   optionally followed by `:` or `-`: `00:1A:2B:3C:4D:5E`,
//!   `00-1a-2b-3c-4d-5e`, `001a2b3c4d5e`
//!
//! Both patterns anchor only at the start of the input. Anything after a
//! complete match is ignored.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::chunk::chunk_str;

/// Matches a MAC address as `00-00-00-00-00-00`, `00:00:00:00:00:00` or
/// `000000000000`. Delimiters may be mixed or left out per group, but a
/// single-digit group other than the last must be followed by one, so a
/// two-digit group is never split in half to make up the count.
///
/// Each of the first five captures includes its trailing delimiter, if any.
pub static MAC_ADDRESS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^
        ([0-9A-Fa-f]{2}[:-]?|[0-9A-Fa-f][:-])
        ([0-9A-Fa-f]{2}[:-]?|[0-9A-Fa-f][:-])
        ([0-9A-Fa-f]{2}[:-]?|[0-9A-Fa-f][:-])
        ([0-9A-Fa-f]{2}[:-]?|[0-9A-Fa-f][:-])
        ([0-9A-Fa-f]{2}[:-]?|[0-9A-Fa-f][:-])
        ([0-9A-Fa-f]{1,2})
        ",
    )
    .expect("MAC address pattern is valid")
});

/// Matches a Cisco-style MAC address such as `0123.4567.89ab`.
pub static CISCO_MAC_ADDRESS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9A-Fa-f]{0,4})\.([0-9A-Fa-f]{0,4})\.([0-9A-Fa-f]{0,4})")
        .expect("Cisco MAC address pattern is valid")
});

/// Strips delimiters from every capture group of `caps` and zero-pads the
/// remaining digits to `width` characters.
fn padded_groups(caps: &Captures<'_>, width: usize) -> Vec<String> {
    caps.iter()
        .skip(1)
        .map(|group| {
            let digits = group.map_or("", |m| m.as_str().trim_end_matches([':', '-']));
            format!("{digits:0>width$}")
        })
        .collect()
}

/// Takes a MAC address in any accepted notation and returns it as
/// `XX:XX:XX:XX:XX:XX` in uppercase hex.
///
/// Returns `None` when the input matches neither notation.
///
/// # Examples
///
/// ```
/// use spoofmac_util::normalize_mac_address;
///
/// assert_eq!(normalize_mac_address("0123.4567.89ab").as_deref(), Some("01:23:45:67:89:AB"));
/// assert_eq!(normalize_mac_address("1a2b3c4d5e6f").as_deref(), Some("1A:2B:3C:4D:5E:6F"));
/// assert_eq!(normalize_mac_address("not-a-mac"), None);
/// ```
pub fn normalize_mac_address(mac: &str) -> Option<String> {
    if let Some(caps) = CISCO_MAC_ADDRESS_RE.captures(mac) {
        let hex = padded_groups(&caps, 4).concat();
        return Some(chunk_str(&hex, 2).join(":").to_ascii_uppercase());
    }

    if let Some(caps) = MAC_ADDRESS_RE.captures(mac) {
        return Some(padded_groups(&caps, 2).join(":").to_ascii_uppercase());
    }

    log::debug!("rejected MAC address input {mac:?}");
    None
}
