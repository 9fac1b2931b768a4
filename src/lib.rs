//! # spoofmac-util
//!
//! Normalization and generation of MAC (hardware) address strings.
//!
//! The crate accepts MAC addresses written in the common textual notations
//! and re-emits them in one canonical form, `XX:XX:XX:XX:XX:XX` with
//! uppercase hex digits. It can also generate random addresses inside a
//! software-assigned vendor block, optionally marked as locally
//! administered.
//!
//! ## Features
//!
//! - Cisco dotted (`0123.4567.89ab`) and delimited (`00:1a:2b:3c:4d:5e`,
//!   `00-1A-2B-3C-4D-5E`, `001a2b3c4d5e`) input notations
//! - Typed [`MacAddress`] with `FromStr`/`Display` and optional serde support
//! - Configurable random address generator
//!
//! ## Example
//!
//! ```rust
//! use spoofmac_util::{normalize_mac_address, random_mac_address, MacAddress, MacGenerator};
//!
//! assert_eq!(
//!     normalize_mac_address("00-1A-2B-3C-4D-5E").as_deref(),
//!     Some("00:1A:2B:3C:4D:5E")
//! );
//! assert_eq!(normalize_mac_address("zz:zz:zz:zz:zz:zz"), None);
//!
//! let spoofed = random_mac_address(true);
//! assert!(spoofed.starts_with("02:05:69:"));
//!
//! let generator = MacGenerator::builder()
//!     .vendor_prefix([0x52, 0x54, 0x00])
//!     .local_admin(false)
//!     .build()?;
//! let mac: MacAddress = generator.generate();
//! assert_eq!(mac.oui(), [0x52, 0x54, 0x00]);
//! # Ok::<(), spoofmac_util::MacError>(())
//! ```

mod chunk;
mod error;
mod generator;
pub mod models;
mod normalize;

pub use error::{MacError, MacResult};
pub use generator::{
    random_mac_address, random_mac_address_with, MacGenerator, MacGeneratorBuilder,
    DEFAULT_VENDOR_PREFIX,
};
pub use models::mac_address::MacAddress;
pub use models::notation::Notation;
pub use normalize::{normalize_mac_address, CISCO_MAC_ADDRESS_RE, MAC_ADDRESS_RE};
