use super::*;

#[test]
fn banner_class_uses_severity_modifier() {
    assert_eq!(banner_class(AlertSeverity::Success), "alert-banner alert-banner--success");
    assert_eq!(banner_class(AlertSeverity::Warning), "alert-banner alert-banner--warning");
    assert_eq!(banner_class(AlertSeverity::Failure), "alert-banner alert-banner--danger");
}
