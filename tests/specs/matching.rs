//! Matching and capture-collection behavior.

use crate::prelude::*;

const FULLNAME: &str = r"(?<firstname>\w+)\s(\w+)\s(?<lastname>\w+)";

#[test]
fn matches_collect_numbered_captures_in_scan_order() {
    let m = "fuzbarfuzbaz".matches_pattern("ba(r|z)", "").unwrap();
    assert_eq!(m.group(0).unwrap(), "bar");
    assert_eq!(m.group(1).unwrap(), "r");
    assert_eq!(m.group(2).unwrap(), "baz");
    assert_eq!(m.group(3).unwrap(), "z");
    assert_eq!(m.len(), 4);
}

#[test]
fn later_matches_overwrite_named_captures() {
    let m = "fuzbarfuzbaz".matches_pattern("ba(?<named>r|z)", "").unwrap();
    assert_eq!(m.len(), 3);
    assert_eq!(m.group(0).unwrap(), "bar");
    assert_eq!(m.group(1).unwrap(), "baz");
    assert_eq!(m.named("named"), Some("z"));
}

#[test]
fn numbered_and_named_captures_coexist() {
    let m = "John Wilkes Booth".matches_pattern(FULLNAME, "").unwrap();
    assert_eq!(m.group(0).unwrap(), "John Wilkes Booth");
    assert_eq!(m.named("firstname"), Some("John"));
    assert_eq!(m.group(1).unwrap(), "Wilkes");
    assert_eq!(m.named("lastname"), Some("Booth"));
    assert_eq!(m.len(), 4);
}

#[test]
fn groups_inside_repetition_keep_the_last_capture() {
    let m = "foo%123%456%789".matches_pattern(r"^([a-z]+)(?:%([0-9]+))+$", "").unwrap();
    assert_eq!(m.group(0).unwrap(), "foo%123%456%789");
    assert_eq!(m.group(1).unwrap(), "foo");
    assert_eq!(m.group(2).unwrap(), "789");
    assert_eq!(m.len(), 3);
}

#[test]
fn match_collects_the_first_match_only() {
    let m = "fuzbarfuzbaz".match_pattern("ba(r|z)", "").unwrap().unwrap();
    assert_eq!(m.group(0).unwrap(), "bar");
    assert_eq!(m.group(1).unwrap(), "r");
    assert_eq!(m.len(), 2);
}

#[test]
fn match_is_none_when_the_pattern_never_occurs() {
    assert!("haystack".match_pattern("needle", "").unwrap().is_none());
    let all = "haystack".matches_pattern("needle", "").unwrap();
    assert!(all.is_empty());
}

#[test]
fn matches_after_an_offset_ignore_the_prefix() {
    let subject = "I Love You Jon Bon Jovie";
    let m = subject.matches_pattern_at(FULLNAME, "", "I Love You ".len()).unwrap();
    assert_eq!(m.len(), 4);
    assert_eq!(m.named("firstname"), Some("Jon"));
}

#[test]
fn captures_enumerate_numbered_then_named() {
    let m = "John Wilkes Booth".matches_pattern(FULLNAME, "").unwrap();
    let captures: Vec<_> = m.iter().collect();
    assert_eq!(captures, vec!["John Wilkes Booth", "Wilkes", "John", "Booth"]);
}

#[test]
fn capture_names_are_listed_in_declaration_order() {
    let m = "Steven Baldwin"
        .matches_pattern(r"(?<firstname>\w+)\s(?<lastname>\w+)", "")
        .unwrap();
    assert_eq!(m.names().collect::<Vec<_>>(), vec!["firstname", "lastname"]);
}

#[test]
fn numbered_captures_expose_positions() {
    let m = "John Wilkes Booth".matches_pattern(FULLNAME, "").unwrap();
    assert_eq!(m.begin(1).unwrap(), 5);
    assert_eq!(m.end(1).unwrap(), 11);
}

#[test]
fn named_captures_expose_positions() {
    let m = "John Wilkes Booth".matches_pattern(FULLNAME, "").unwrap();
    assert_eq!(m.named_begin("firstname"), Some(0));
    assert_eq!(m.named_end("firstname"), Some(4));
    assert_eq!(m.named_begin("lastname"), Some(12));
    assert_eq!(m.named_end("lastname"), Some(17));
}

#[test]
fn an_invalid_index_is_an_error() {
    let m = "John Wilkes Booth".matches_pattern(FULLNAME, "").unwrap();
    assert!(matches!(m.group(4), Err(PatternError::IndexOutOfRange { .. })));
    assert!(matches!(m.begin(4), Err(PatternError::IndexOutOfRange { .. })));
}

#[test]
fn an_absent_name_is_null_not_an_error() {
    let m = "John Wilkes Booth".matches_pattern(FULLNAME, "").unwrap();
    assert_eq!(m.named("middlename"), None);
    assert_eq!(m.named_begin("middlename"), None);
}

#[test]
fn explicit_capture_drops_unnamed_groups() {
    let m = "fuzbarfuzbaz".matches_pattern("ba(r|z)", "e").unwrap();
    assert_eq!(m.len(), 2);
    assert_eq!(m.group(0).unwrap(), "bar");
    assert_eq!(m.group(1).unwrap(), "baz");

    let m = "fuzbarfuzbaz".matches_pattern("ba(?<named>r|z)", "e").unwrap();
    assert_eq!(m.len(), 3);
    assert_eq!(m.named("named"), Some("z"));
}

#[test]
fn right_to_left_aggregates_matches_in_reverse() {
    let m = "fuzbarfuzbaz".matches_pattern("ba(r|z)", "r").unwrap();
    assert_eq!(m.group(0).unwrap(), "baz");
    assert_eq!(m.group(1).unwrap(), "z");
    assert_eq!(m.group(2).unwrap(), "bar");
    assert_eq!(m.group(3).unwrap(), "r");
}
