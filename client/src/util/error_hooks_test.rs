use super::*;

#[test]
fn describe_error_includes_location() {
    assert_eq!(
        describe_error("boom", "/pkg/lumina.js", 12),
        "uncaught error: boom (/pkg/lumina.js:12)"
    );
}

#[test]
fn describe_error_without_source() {
    assert_eq!(describe_error("boom", "", 0), "uncaught error: boom");
}

#[test]
fn describe_rejection_prefixes_reason() {
    assert_eq!(describe_rejection("timeout"), "unhandled rejection: timeout");
}

#[test]
fn install_is_noop_off_browser() {
    install();
}
