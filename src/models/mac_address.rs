use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{normalize_mac_address, MacError, MacResult};

/// Bit 0 of the first octet: group (multicast) address.
pub(crate) const MULTICAST_BIT: u8 = 0x01;

/// Bit 1 of the first octet: locally administered address.
pub(crate) const LOCAL_ADMIN_BIT: u8 = 0x02;

/// A 6-octet MAC address.
///
/// Displays in the canonical `XX:XX:XX:XX:XX:XX` form and parses from any
/// notation accepted by [`normalize_mac_address`].
///
/// # Examples
///
/// ```
/// use spoofmac_util::MacAddress;
///
/// let mac: MacAddress = "0205.6912.3456".parse()?;
/// assert_eq!(mac.to_string(), "02:05:69:12:34:56");
/// assert!(mac.is_local_admin());
/// # Ok::<(), spoofmac_util::MacError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// Creates an address from its six octets.
    pub const fn new(octets: [u8; 6]) -> Self {
        MacAddress(octets)
    }

    /// Returns the six octets of the address.
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Returns the organizationally unique identifier (first three octets).
    pub fn oui(&self) -> [u8; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }

    /// Whether the locally administered bit of the first octet is set.
    pub fn is_local_admin(&self) -> bool {
        self.0[0] & LOCAL_ADMIN_BIT != 0
    }

    /// Whether this is a group (multicast) address.
    pub fn is_multicast(&self) -> bool {
        self.0[0] & MULTICAST_BIT != 0
    }

    /// Returns a copy of the address with the locally administered bit set
    /// or cleared.
    pub fn with_local_admin(self, local_admin: bool) -> Self {
        let mut octets = self.0;
        if local_admin {
            octets[0] |= LOCAL_ADMIN_BIT;
        } else {
            octets[0] &= !LOCAL_ADMIN_BIT;
        }
        MacAddress(octets)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, byte) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ":{byte:02X}")?;
            } else {
                write!(f, "{byte:02X}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for MacAddress {
    type Err = MacError;

    fn from_str(s: &str) -> MacResult<Self> {
        let invalid = || MacError::InvalidAddress(s.to_string());
        let canonical = normalize_mac_address(s).ok_or_else(invalid)?;

        let mut octets = [0u8; 6];
        for (octet, digits) in octets.iter_mut().zip(canonical.split(':')) {
            *octet = u8::from_str_radix(digits, 16).map_err(|_| invalid())?;
        }
        Ok(MacAddress(octets))
    }
}

impl TryFrom<&str> for MacAddress {
    type Error = MacError;

    fn try_from(value: &str) -> MacResult<Self> {
        value.parse()
    }
}

impl TryFrom<String> for MacAddress {
    type Error = MacError;

    fn try_from(value: String) -> MacResult<Self> {
        value.parse()
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(octets: [u8; 6]) -> Self {
        MacAddress(octets)
    }
}

impl From<MacAddress> for [u8; 6] {
    fn from(mac: MacAddress) -> Self {
        mac.0
    }
}

impl From<MacAddress> for String {
    fn from(mac: MacAddress) -> Self {
        mac.to_string()
    }
}
