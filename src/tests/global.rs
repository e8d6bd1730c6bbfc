use std::ptr;

use crate::{default_logger, set_log_label, set_log_level, Severity};

// The only test touching the process-wide default; everything else builds
// its own logger.
#[test]
fn test_default_logger_forwarding() {
    assert!(ptr::eq(default_logger(), default_logger()));
    assert_eq!(default_logger().threshold(), Severity::Debug);
    assert!(default_logger().label().is_none());

    set_log_label("svc");
    assert_eq!(default_logger().label().as_deref(), Some("svc"));

    // Nothing below Error reaches stdout from here on.
    set_log_level(Severity::Error);
    assert_eq!(default_logger().threshold(), Severity::Error);

    crate::info(&[&"suppressed", &1]);
    crate::infof!("suppressed {}", 2);
    crate::debugf!("suppressed {}", 3);
    crate::warnf!("suppressed {}", 4);
    crate::warn(&[&"suppressed"]);
    crate::debug(&[&"suppressed"]);
    crate::check("suppressed", &Ok::<(), String>(()));

    set_log_label("");
    assert!(default_logger().label().is_none());
}
