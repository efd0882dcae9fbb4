use std::net::Ipv4Addr;

use cidrex_core::{CidrSpec, Ipv4Range, list};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Every address of `range` matches; a few on either side do not.
fn assert_exhaustive(range: Ipv4Range) {
    let token = range.to_string();
    let re = list::compile(&token).unwrap();

    let start = u32::from(range.start_addr);
    let end = u32::from(range.end_addr);
    let window = Ipv4Range::new(
        Ipv4Addr::from(start.saturating_sub(3)),
        Ipv4Addr::from(end.saturating_add(3)),
    );

    for ip in window.iter() {
        assert_eq!(
            re.is_match(&ip.to_string()),
            range.contains(ip),
            "{token} on {ip} with pattern {}",
            re.as_str()
        );
    }
}

#[test]
fn explicit_ranges_are_exhaustive() {
    let cases = [
        ("192.168.50.100", "192.168.50.105"),
        ("1.2.3.4", "1.2.5.14"),
        ("10.0.0.0", "10.0.0.255"),
        ("10.0.0.255", "10.0.1.0"),
        ("9.255.255.250", "10.0.0.7"),
        ("172.16.254.3", "172.17.1.9"),
        ("0.0.0.0", "0.0.1.10"),
        ("255.255.254.200", "255.255.255.255"),
    ];

    for (start, end) in cases {
        let range = Ipv4Range::new(start.parse().unwrap(), end.parse().unwrap());
        assert_exhaustive(range);
    }
}

#[test]
fn random_ranges_are_exhaustive() {
    let mut rng = StdRng::seed_from_u64(0x1234_5678);

    for _ in 0..40 {
        let start: u32 = rng.random_range(0..=u32::MAX - 5000);
        let len: u32 = rng.random_range(0..3000);
        let range = Ipv4Range::new(Ipv4Addr::from(start), Ipv4Addr::from(start + len));
        assert_exhaustive(range);
    }
}

#[test]
fn wide_ranges_hold_at_their_edges() {
    let range = Ipv4Range::new(Ipv4Addr::new(10, 200, 17, 3), Ipv4Addr::new(57, 4, 0, 250));
    let re = list::compile(&range.to_string()).unwrap();

    let inside = ["10.200.17.3", "10.200.17.4", "10.201.0.0", "33.33.33.33", "57.3.255.255", "57.4.0.250"];
    let outside = ["10.200.17.2", "10.199.255.255", "57.4.0.251", "57.4.1.0", "58.0.0.0", "9.255.255.255"];

    for ip in inside {
        assert!(re.is_match(ip), "{ip} should match");
    }
    for ip in outside {
        assert!(!re.is_match(ip), "{ip} should not match");
    }
}

#[test]
fn random_prefixes_match_their_network() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..60 {
        let ip = Ipv4Addr::from(rng.random::<u32>());
        let bits: u8 = rng.random_range(1..=32);
        let token = format!("{ip}/{bits}");

        let spec: CidrSpec = token.parse().unwrap();
        let block = spec.addresses().unwrap();
        assert_eq!(block, Ipv4Range::from_prefix(ip, bits).unwrap());

        let re = list::compile(&token).unwrap();
        let start = u32::from(block.start_addr);
        let end = u32::from(block.end_addr);

        let mut probes = vec![start, end];
        probes.extend((0..20).map(|_| rng.random_range(start..=end)));
        for probe in probes {
            let probe = Ipv4Addr::from(probe);
            assert!(re.is_match(&probe.to_string()), "{token} should match {probe}");
        }

        if let Some(below) = start.checked_sub(1) {
            let below = Ipv4Addr::from(below);
            assert!(!re.is_match(&below.to_string()), "{token} should not match {below}");
        }
        if let Some(above) = end.checked_add(1) {
            let above = Ipv4Addr::from(above);
            assert!(!re.is_match(&above.to_string()), "{token} should not match {above}");
        }
    }
}
