// Unit tests for recipient-list parsing

use meeting_notes_backend::mailer::parse_recipients;

#[test]
fn test_splits_and_trims_recipients() {
    let parsed = parse_recipients("a@x.com, b@y.com");

    assert_eq!(parsed, vec!["a@x.com", "b@y.com"]);
}

#[test]
fn test_single_recipient() {
    assert_eq!(parse_recipients("a@x.com"), vec!["a@x.com"]);
}

#[test]
fn test_order_is_preserved() {
    let parsed = parse_recipients("  c@z.com ,a@x.com,  b@y.com");

    assert_eq!(parsed, vec!["c@z.com", "a@x.com", "b@y.com"]);
}

#[test]
fn test_empty_segments_are_dropped() {
    let parsed = parse_recipients("a@x.com,,b@y.com,");

    assert_eq!(parsed, vec!["a@x.com", "b@y.com"]);
}

#[test]
fn test_empty_input_yields_no_recipients() {
    assert!(parse_recipients("").is_empty());
    assert!(parse_recipients("  , ,").is_empty());
}
