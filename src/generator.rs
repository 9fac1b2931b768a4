use rand::Rng;

use crate::models::mac_address::MULTICAST_BIT;
use crate::{MacAddress, MacError, MacResult};

/// Vendor block used for generated addresses. It is recognisable as a
/// software-assigned range, which keeps collisions with physical hardware
/// unlikely.
pub const DEFAULT_VENDOR_PREFIX: [u8; 3] = [0x00, 0x05, 0x69];

/// Upper bound (inclusive) for the fourth octet of generated addresses.
const FOURTH_OCTET_MAX: u8 = 0x7F;

/// Generates random MAC addresses inside a vendor block.
///
/// The first three octets are the vendor prefix, the fourth is drawn from
/// `0x00..=0x7F` and the last two from the full byte range. Each call is
/// independent; nothing tracks previously generated addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacGenerator {
    vendor_prefix: [u8; 3],
    local_admin: bool,
}

impl Default for MacGenerator {
    fn default() -> Self {
        MacGenerator {
            vendor_prefix: DEFAULT_VENDOR_PREFIX,
            local_admin: true,
        }
    }
}

impl MacGenerator {
    /// Create a new generator builder.
    pub fn builder() -> MacGeneratorBuilder {
        MacGeneratorBuilder::default()
    }

    /// The vendor prefix placed in the first three octets.
    pub fn vendor_prefix(&self) -> [u8; 3] {
        self.vendor_prefix
    }

    /// Whether generated addresses get the locally administered bit.
    pub fn local_admin(&self) -> bool {
        self.local_admin
    }

    /// Generates an address using the thread-local random source.
    pub fn generate(&self) -> MacAddress {
        self.generate_with(&mut rand::rng())
    }

    /// Generates an address drawing from `rng`.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> MacAddress {
        let [a, b, c] = self.vendor_prefix;
        let mut mac = MacAddress::new([
            a,
            b,
            c,
            rng.random_range(0x00..=FOURTH_OCTET_MAX),
            rng.random(),
            rng.random(),
        ]);

        // Without local_admin the prefix is left untouched.
        if self.local_admin {
            mac = mac.with_local_admin(true);
        }

        log::trace!("generated MAC address {mac}");
        mac
    }
}

/// Builder for [`MacGenerator`].
#[derive(Debug)]
pub struct MacGeneratorBuilder {
    vendor_prefix: [u8; 3],
    local_admin: bool,
}

impl Default for MacGeneratorBuilder {
    fn default() -> Self {
        let defaults = MacGenerator::default();
        MacGeneratorBuilder {
            vendor_prefix: defaults.vendor_prefix,
            local_admin: defaults.local_admin,
        }
    }
}

impl MacGeneratorBuilder {
    /// Sets the vendor prefix (first three octets).
    pub fn vendor_prefix(mut self, prefix: [u8; 3]) -> Self {
        self.vendor_prefix = prefix;
        self
    }

    /// Sets whether to mark generated addresses as locally administered.
    pub fn local_admin(mut self, local_admin: bool) -> Self {
        self.local_admin = local_admin;
        self
    }

    /// Build the generator.
    ///
    /// # Errors
    ///
    /// Returns [`MacError::ConfigurationError`] if the vendor prefix has the
    /// multicast bit set, since generated addresses must be unicast.
    pub fn build(self) -> MacResult<MacGenerator> {
        if self.vendor_prefix[0] & MULTICAST_BIT != 0 {
            return Err(MacError::ConfigurationError(format!(
                "Vendor prefix {:02X}:{:02X}:{:02X} is a multicast prefix",
                self.vendor_prefix[0], self.vendor_prefix[1], self.vendor_prefix[2]
            )));
        }

        Ok(MacGenerator {
            vendor_prefix: self.vendor_prefix,
            local_admin: self.local_admin,
        })
    }
}

/// Generates a random MAC address in the `00:05:69` vendor block and
/// returns it in canonical `XX:XX:XX:XX:XX:XX` form.
///
/// With `local_admin` the locally administered bit of the first octet is
/// set, turning the prefix into `02:05:69`.
///
/// # Examples
///
/// ```
/// use spoofmac_util::random_mac_address;
///
/// let mac = random_mac_address(true);
/// assert!(mac.starts_with("02:05:69:"));
/// assert_eq!(mac.len(), 17);
/// ```
pub fn random_mac_address(local_admin: bool) -> String {
    random_mac_address_with(&mut rand::rng(), local_admin)
}

/// Same as [`random_mac_address`], drawing from `rng`.
pub fn random_mac_address_with<R: Rng + ?Sized>(rng: &mut R, local_admin: bool) -> String {
    MacGenerator {
        local_admin,
        ..MacGenerator::default()
    }
    .generate_with(rng)
    .to_string()
}
