use std::collections::HashSet;

use pretty_assertions::assert_eq;
use spoofmac_util::{
    normalize_mac_address, random_mac_address, random_mac_address_with, MacError, MacGenerator,
    DEFAULT_VENDOR_PREFIX,
};

mod common;

use common::{assert_canonical, first_octet, seeded_rng};

#[test]
fn test_random_mac_is_canonical() {
    for _ in 0..200 {
        assert_canonical(&random_mac_address(true));
        assert_canonical(&random_mac_address(false));
    }
}

#[test]
fn test_local_admin_sets_bit_one_of_first_octet() {
    for _ in 0..200 {
        let mac = random_mac_address(true);
        assert_eq!(first_octet(&mac) & 0x02, 0x02);
        assert!(mac.starts_with("02:05:69:"), "unexpected prefix in {mac}");
    }
}

#[test]
fn test_universal_keeps_vendor_prefix() {
    for _ in 0..200 {
        let mac = random_mac_address(false);
        assert_eq!(first_octet(&mac), 0x00);
        assert!(mac.starts_with("00:05:69:"), "unexpected prefix in {mac}");
    }
}

#[test]
fn test_fourth_octet_stays_below_0x80() {
    let mut rng = seeded_rng(7);
    for _ in 0..1000 {
        let mac = random_mac_address_with(&mut rng, true);
        let fourth = u8::from_str_radix(&mac[9..11], 16).unwrap();
        assert!(fourth <= 0x7F, "fourth octet out of range in {mac}");
    }
}

#[test]
fn test_seeded_generation_is_deterministic() {
    let a: Vec<String> = {
        let mut rng = seeded_rng(42);
        (0..10).map(|_| random_mac_address_with(&mut rng, true)).collect()
    };
    let b: Vec<String> = {
        let mut rng = seeded_rng(42);
        (0..10).map(|_| random_mac_address_with(&mut rng, true)).collect()
    };
    assert_eq!(a, b);
}

#[test]
fn test_generated_addresses_vary() {
    let mut rng = seeded_rng(1);
    let seen: HashSet<String> = (0..100).map(|_| random_mac_address_with(&mut rng, false)).collect();
    assert!(seen.len() > 90);
}

#[test]
fn test_generated_address_normalizes_to_itself() {
    let mac = random_mac_address(true);
    assert_eq!(normalize_mac_address(&mac), Some(mac));
}

#[test]
fn test_generator_defaults() {
    let generator = MacGenerator::default();
    assert_eq!(generator.vendor_prefix(), DEFAULT_VENDOR_PREFIX);
    assert!(generator.local_admin());
    assert_eq!(MacGenerator::builder().build().unwrap(), generator);
}

#[test]
fn test_generator_custom_prefix() {
    let generator = MacGenerator::builder()
        .vendor_prefix([0x52, 0x54, 0x00])
        .local_admin(false)
        .build()
        .unwrap();

    let mut rng = seeded_rng(3);
    for _ in 0..100 {
        let mac = generator.generate_with(&mut rng);
        assert_eq!(mac.oui(), [0x52, 0x54, 0x00]);
        assert!(!mac.is_multicast());
    }
}

#[test]
fn test_generator_local_admin_on_custom_prefix() {
    let generator = MacGenerator::builder().vendor_prefix([0x00, 0x16, 0x3E]).build().unwrap();
    let mac = generator.generate();
    assert!(mac.is_local_admin());
    assert_eq!(mac.oui(), [0x02, 0x16, 0x3E]);
}

#[test]
fn test_generator_rejects_multicast_prefix() {
    let err = MacGenerator::builder().vendor_prefix([0x01, 0x00, 0x5E]).build().unwrap_err();
    match err {
        MacError::ConfigurationError(msg) => assert!(msg.contains("01:00:5E")),
        other => panic!("Expected ConfigurationError, got {other:?}"),
    }
}
