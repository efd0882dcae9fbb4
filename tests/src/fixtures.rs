use cidrex_core::{ErrorKind, list, range};
use regex::Regex;

fn cidr_matcher(cidrs: &str) -> Regex {
    let result = list::compile(cidrs);
    assert!(result.is_ok(), "{cidrs} failed to compile: {:?}", result.as_ref().err());
    result.unwrap()
}

#[test]
fn range_fixtures() {
    assert_eq!(range::pattern(10, 0), "");
    assert_eq!(range::pattern(0, 9), r"\d");
    assert_eq!(range::pattern(1, 9), "[1-9]");
    assert_eq!(range::pattern(-11, 17), r"(?:-(?:[1-9]|1[01])|\d|1[0-7])");

    for v in -10..=10 {
        assert_eq!(range::pattern(v, v), v.to_string());
    }
}

#[test]
fn range_matches_inclusive_bounds() {
    let (min, max) = (-11, 17);
    let re = range::compile(min, max).unwrap();

    assert!(!re.is_match(&(min - 1).to_string()));
    assert!(!re.is_match(&(max + 1).to_string()));
    for v in min..=max {
        assert!(re.is_match(&v.to_string()), "{v} should match");
    }
}

#[test]
fn cidr_matching_fixtures() {
    let re = cidr_matcher("10/8");
    assert!(re.is_match("10.1.2.3"));
    assert!(re.is_match("10.255.255.255"));
    assert!(!re.is_match("10.1.2"));
    assert!(!re.is_match("10.256.255.255"));

    let re = cidr_matcher("10.1.2.3");
    assert!(re.is_match("10.1.2.3"));
    assert!(!re.is_match("10.1.2.0"));
    assert!(!re.is_match("10.256.255.255"));

    let re = cidr_matcher("10.1.2.*");
    assert!(re.is_match("10.1.2.0"));
    assert!(re.is_match("10.1.2.255"));
    assert!(!re.is_match("10.1.3.0"));
    assert!(!re.is_match("10.256.255.255"));
    assert!(!re.is_match("192.168.9.11"));

    let re = cidr_matcher("*.18.23/24");
    assert!(re.is_match("1.18.23.44"));
    assert!(re.is_match("220.18.23.102"));
    assert!(re.is_match("0.18.23.0"));
    assert!(!re.is_match("1.19.23.0"));
}

#[test]
fn list_fixture() {
    let re = cidr_matcher("10.1.2.3,192.168.9.10");
    assert!(re.is_match("10.1.2.3"));
    assert!(re.is_match("192.168.9.10"));
    assert!(!re.is_match("10.1.2.0"));
    assert!(!re.is_match("10.256.255.255"));
    assert!(!re.is_match("192.168.9.11"));
}

#[test]
fn range_pattern_fixtures() {
    assert_eq!(list::pattern("1.2.3.4-1.2.3.5").unwrap(), r"1\.2\.3\.[45]");
    assert_eq!(
        list::pattern("1.2.3.4-1.2.4.5").unwrap(),
        r"1\.2\.(?:3\.(?:[4-9]|[1-9]\d|1\d{2}|2(?:[0-4]\d|5[0-5]))|4\.[0-5])"
    );
}

#[test]
fn error_fixtures() {
    let cases = [
        ("not even numbers", ErrorKind::Syntax),
        ("10", ErrorKind::MissingPrefix),
        ("256/8", ErrorKind::Syntax),
        ("1.2.3.4.5", ErrorKind::Syntax),
        ("1.2.3-1.2.3.4", ErrorKind::RangeForm),
        ("1.2.3.4-1.1.3.4", ErrorKind::OutOfOrder),
        (" , ", ErrorKind::EmptyList),
    ];

    for (input, expected) in cases {
        let err = list::pattern(input).unwrap_err();
        assert_eq!(err.kind(), expected, "{input}: {err}");
    }
}

#[test]
fn error_descriptions() {
    let message = |input: &str| list::pattern(input).unwrap_err().to_string();

    assert!(message("10").starts_with("prefix length required unless full address provided"));
    assert!(message("1.2.3-1.2.3.4").starts_with("full start address required for address range"));
    assert!(message("1.2.3.4-1.1.3.4").starts_with("range must be in order"));
    assert!(message("256/8").starts_with("not a CIDR pattern"));
}
