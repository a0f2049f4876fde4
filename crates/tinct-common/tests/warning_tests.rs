//! Integration tests for the deduplicated warning system.

use tinct_common::warning::{has_warned, warn_once};

#[test]
fn test_warn_once_records_message() {
    warn_once("test-record", "surface color missing");
    assert!(has_warned("test-record", "surface color missing"));
    assert!(!has_warned("test-record", "some other message"));
}

#[test]
fn test_messages_are_keyed_by_component() {
    warn_once("test-key-a", "duplicate text");
    assert!(has_warned("test-key-a", "duplicate text"));
    assert!(!has_warned("test-key-b", "duplicate text"));
}
