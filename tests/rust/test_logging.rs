use super::*;

#[test]
fn test_cli_flag_wins() {
    assert_eq!(
        resolve_level(Some(LogLevel::Debug), Some("error")),
        tracing::Level::DEBUG
    );
}

#[test]
fn test_env_value_used_without_flag() {
    assert_eq!(resolve_level(None, Some(" Info ")), tracing::Level::INFO);
    assert_eq!(resolve_level(None, Some("warning")), tracing::Level::WARN);
    assert_eq!(resolve_level(None, Some("trace")), tracing::Level::TRACE);
}

#[test]
fn test_default_is_warn() {
    assert_eq!(resolve_level(None, None), tracing::Level::WARN);
    assert_eq!(resolve_level(None, Some("loud")), tracing::Level::WARN);
}
