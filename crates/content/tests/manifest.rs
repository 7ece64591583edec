//! Package metadata inherited from the workspace root

#[test]
fn test_workspace_package_fields_resolve() {
    assert_eq!(env!("CARGO_PKG_NAME"), "everymode-content");
    assert_eq!(env!("CARGO_PKG_VERSION"), "0.1.0");
    assert_eq!(env!("CARGO_PKG_LICENSE"), "MIT");
    assert!(env!("CARGO_PKG_DESCRIPTION").starts_with("Everymode"));
}
