use super::*;

#[test]
fn test_severity_ordering() {
    assert!(Severity::Worry < Severity::Sorry);
    assert!(Severity::Sorry < Severity::Panic);
}

#[test]
fn test_severity_display() {
    assert_eq!(Severity::Worry.to_string(), "worry");
    assert_eq!(Severity::Sorry.to_string(), "sorry");
    assert_eq!(Severity::Panic.to_string(), "panic");
}

#[test]
fn test_counted_pluralizes() {
    assert_eq!(Severity::Worry.counted(1), "1 worry");
    assert_eq!(Severity::Worry.counted(3), "3 worries");
    assert_eq!(Severity::Sorry.counted(0), "0 sorries");
    assert_eq!(Severity::Panic.counted(2), "2 panics");
}

#[test]
fn test_only_panics_are_unbufferable() {
    assert!(Severity::Worry.is_bufferable());
    assert!(Severity::Sorry.is_bufferable());
    assert!(!Severity::Panic.is_bufferable());
}
