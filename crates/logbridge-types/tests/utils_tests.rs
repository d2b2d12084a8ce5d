use logbridge_types::*;

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");

    let truncated = truncate("this is a very long string", 10);
    assert_eq!(truncated, "this is a ...");
}

#[test]
fn test_truncate_counts_chars_not_bytes() {
    assert_eq!(truncate("æøåæøå", 3), "æøå...");
}

#[test]
fn test_short_session_id() {
    assert_eq!(
        short_session_id("0f9e2c1a-1111-2222-3333-444455556666"),
        "0f9e2c1a"
    );
    assert_eq!(short_session_id("abc"), "abc");
    assert_eq!(short_session_id("ééééééééé"), "éééééééé");
}

#[test]
fn test_expand_tilde_passthrough() {
    assert_eq!(
        expand_tilde("/var/log/x"),
        std::path::PathBuf::from("/var/log/x")
    );
}
