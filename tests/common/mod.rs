use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;

/// Assert that `mac` is in canonical `XX:XX:XX:XX:XX:XX` form
#[allow(dead_code)]
pub fn assert_canonical(mac: &str) {
    let canonical = Regex::new(r"^[0-9A-F]{2}:([0-9A-F]{2}:){4}[0-9A-F]{2}$").unwrap();
    assert!(canonical.is_match(mac), "not in canonical form: {mac:?}");
}

/// Deterministic random source for generator tests
#[allow(dead_code)]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Parse the first octet of a canonical address
#[allow(dead_code)]
pub fn first_octet(mac: &str) -> u8 {
    u8::from_str_radix(&mac[..2], 16).unwrap()
}
