use super::*;
use crate::{implicit_call_super, not_a_class, unknown_excluded_field, ErrorCode};

#[test]
fn test_emission_order_is_preserved() {
    let mut queue = DiagnosticQueue::new();
    queue.warn(unknown_excluded_field("a", 0));
    queue.warn(unknown_excluded_field("b", 1));
    queue.warn(implicit_call_super("Base"));

    let flushed = queue.flush();
    let codes: Vec<_> = flushed.iter().map(|d| d.code).collect();
    assert_eq!(codes, [ErrorCode::W2004, ErrorCode::W2004, ErrorCode::W2001]);
    assert!(queue.is_empty());
}

#[test]
fn test_exact_duplicates_are_dropped() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.push(unknown_excluded_field("a", 0)));
    assert!(!queue.push(unknown_excluded_field("a", 0)));
    // Same name at another position is a different diagnostic.
    assert!(queue.push(unknown_excluded_field("a", 1)));
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_emit_error_queues_the_error() {
    let mut queue = DiagnosticQueue::new();
    queue.warn(implicit_call_super("Base"));
    let _guarantee = queue.emit_error(not_a_class("Shape", "interface"));

    let flushed = queue.flush();
    assert_eq!(flushed.len(), 2);
    assert!(flushed[1].is_error());
    assert!(queue.is_empty());
}
