//! Substitution behavior: first-occurrence and global replacement.

use crate::prelude::*;

#[test]
fn sub_replaces_the_first_occurrence() {
    assert_eq!("foobarfoobaz".sub("foo", "fuz").unwrap(), "fuzbarfoobaz");
    assert_eq!(
        "A man, a plan, a canal, panama".sub("a.", "ax").unwrap(),
        "A max, a plan, a canal, panama"
    );
}

#[test]
fn gsub_replaces_every_occurrence() {
    assert_eq!("foobarfoobaz".gsub("foo", "fuz").unwrap(), "fuzbarfuzbaz");
    assert_eq!(
        "A man, a plan, a canal, panama".gsub("a.", "ax").unwrap(),
        "A max, axplax, axcaxax, paxaxa"
    );
}

#[test]
fn sub_closure_replaces_the_first_occurrence() {
    let result = "foobarfuzbaz"
        .sub_with("foo", |m| {
            if matches!(m.group(0), Ok("foo")) { "fuz".to_string() } else { "foo".to_string() }
        })
        .unwrap();
    assert_eq!(result, "fuzbarfuzbaz");
}

#[test]
fn gsub_closure_sees_each_match() {
    let result = "foobarfoobaz"
        .gsub_with("ba(r|z)", |m| {
            if matches!(m.group(0), Ok("bar")) { "baz".to_string() } else { "xxx".to_string() }
        })
        .unwrap();
    assert_eq!(result, "foobazfooxxx");
}

#[test]
fn gsub_closure_reads_named_captures() {
    let result = "Alec Balwin Daniel Balwdin William Baldwin"
        .gsub_with(r"(?<firstname>\w+)\s(?<lastname>\w+)", |m| {
            assert!(m.named("firstname").is_some());
            assert!(m.named("lastname").is_some());
            "Steven Baldwin".to_string()
        })
        .unwrap();
    assert_eq!(result, "Steven Baldwin Steven Baldwin Steven Baldwin");
}

#[test]
fn replacement_templates_expand_group_references() {
    assert_eq!(
        "80304-6667".sub(r"^(\d{5})-(\d{4})$", "$2 $1").unwrap(),
        "6667 80304"
    );
    assert_eq!(
        "John Smith".gsub(r"(?<first>\w+)\s(?<last>\w+)", "$last, $first").unwrap(),
        "Smith, John"
    );
}

#[test]
fn substitution_leaves_nonmatching_subjects_untouched() {
    assert_eq!("quux".sub("foo", "fuz").unwrap(), "quux");
    assert_eq!("quux".gsub("foo", "fuz").unwrap(), "quux");
}

#[test]
fn global_replacement_visits_empty_matches_once_per_position() {
    assert_eq!("ab".gsub("b*", "-").unwrap(), "-a--");
}
