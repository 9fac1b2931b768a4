//! Data models for MAC addresses.
//!
//! This module contains the typed address and the notations it can be
//! parsed from.

pub mod mac_address;
pub mod notation;
