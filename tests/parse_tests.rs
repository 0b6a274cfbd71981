//! Tests for log line parsing.

use latreport::error::AnalyzeError;
use latreport::parse::parse_line;
use latreport::types::Action;

#[test]
fn test_parse_without_size() {
    let event = parse_line("(ID: msg-1) SENT AT TIME - 42").unwrap();
    assert_eq!(event.message_id, "msg-1");
    assert_eq!(event.action, Action::Sent);
    assert_eq!(event.timestamp, 42);
    assert_eq!(event.payload_size, None);
}

#[test]
fn test_parse_with_size() {
    let event = parse_line("(ID: a) DELIVERED AT TIME - 25 WITH SIZE 50").unwrap();
    assert_eq!(event.message_id, "a");
    assert_eq!(event.action, Action::Delivered);
    assert_eq!(event.timestamp, 25);
    assert_eq!(event.payload_size, Some(50));
}

#[test]
fn test_parse_all_actions() {
    let cases = [
        ("SENT", Action::Sent),
        ("DELIVERED", Action::Delivered),
        ("SENT_UNSCHEDULED", Action::SentUnscheduled),
        ("RECEIVED_UNSCHEDULED", Action::ReceivedUnscheduled),
    ];
    for (token, expected) in cases {
        let line = format!("(ID: x) {token} AT TIME - 1");
        let event = parse_line(&line).unwrap();
        assert_eq!(event.action, expected, "action token {token}");
    }
}

#[test]
fn test_parse_negative_timestamp() {
    let event = parse_line("(ID: a) SENT AT TIME - -7").unwrap();
    assert_eq!(event.timestamp, -7);
}

#[test]
fn test_parse_large_values() {
    let event = parse_line("(ID: a) SENT AT TIME - 9007199254740993 WITH SIZE 123456789").unwrap();
    assert_eq!(event.timestamp, 9007199254740993);
    assert_eq!(event.payload_size, Some(123456789));
}

#[test]
fn test_malformed_lines_are_fatal() {
    let bad = [
        "",
        "garbage",
        "(ID: a SENT AT TIME - 10",
        "(ID: a) RECEIVED AT TIME - 10",
        "(ID: a) SENT AT TIME - ten",
        "(ID: a) SENT AT TIME - 10 WITH SIZE many",
        "(ID: a) SENT AT TIME - 10 WITH SIZE -5",
        "(ID: ) SENT AT TIME - 10",
        "(ID: a b) SENT AT TIME - 10",
        "ID: a) SENT AT TIME - 10",
    ];
    for line in bad {
        let err = parse_line(line).unwrap_err();
        assert!(
            matches!(err, AnalyzeError::MalformedLine { .. }),
            "line {line:?} should be malformed"
        );
    }
}

#[test]
fn test_malformed_error_carries_line() {
    let err = parse_line("not a record").unwrap_err();
    assert!(err.to_string().contains("not a record"));
}
