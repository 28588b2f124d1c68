//! Configuration loading tests

use tenantguard::{
    AccessGate, ConfigError, Membership, Operation, PrivilegeTable, ProjectContext,
    RequestContext, Resource, Role, load_config_from_str,
};

const FULL_CONFIG: &str = r#"
[access_control.roles.OWNER]
PROJECTS = ["CREATE", "READ", "UPDATE", "DELETE"]
PROJECT_USERS = ["CREATE", "READ", "UPDATE", "DELETE"]
PROJECT_INVITATIONS = ["CREATE", "READ", "UPDATE", "DELETE"]

[access_control.roles.ADMIN]
PROJECTS = ["CREATE", "READ", "UPDATE"]
PROJECT_USERS = ["CREATE", "READ", "UPDATE", "DELETE"]
PROJECT_INVITATIONS = ["CREATE", "READ"]

[access_control.roles.MEMBER]
PROJECTS = ["READ"]
PROJECT_USERS = ["READ"]
PROJECT_INVITATIONS = []
"#;

#[test]
fn test_full_config_builds_table() {
    let config = load_config_from_str(FULL_CONFIG).unwrap();
    let table = PrivilegeTable::from_config(&config.access_control).unwrap();

    // Tightened-down deployment: admins may not delete projects here
    assert!(table.is_allowed(Role::Owner, Resource::Projects, Operation::Delete));
    assert!(!table.is_allowed(Role::Admin, Resource::Projects, Operation::Delete));

    // Empty list means no access, not missing
    for op in Operation::all() {
        assert!(!table.is_allowed(Role::Member, Resource::ProjectInvitations, *op));
    }
}

#[test]
fn test_empty_config_is_canonical_matrix() {
    let config = load_config_from_str("").unwrap();
    let table = PrivilegeTable::from_config(&config.access_control).unwrap();
    assert_eq!(table, PrivilegeTable::default());
    assert!(table.is_monotonic());
}

#[test]
fn test_unknown_role_fails_at_load() {
    let toml = r#"
[access_control.roles.SUPERADMIN]
PROJECTS = ["READ"]
"#;
    assert!(matches!(
        load_config_from_str(toml).unwrap_err(),
        ConfigError::UnknownRole { .. }
    ));
}

#[test]
fn test_unknown_resource_fails_at_load() {
    let toml = r#"
[access_control.roles.OWNER]
PROJECTS = ["READ"]
BILLING = ["READ"]
"#;
    assert!(matches!(
        load_config_from_str(toml).unwrap_err(),
        ConfigError::UnknownResource { .. }
    ));
}

#[test]
fn test_unknown_operation_fails_at_load() {
    let toml = r#"
[access_control.roles.OWNER]
PROJECTS = ["READ", "EXECUTE"]
"#;
    assert!(matches!(
        load_config_from_str(toml).unwrap_err(),
        ConfigError::UnknownOperation { .. }
    ));
}

#[test]
fn test_partial_matrix_fails_at_load() {
    // Stating one role replaces the default grants entirely, so the other
    // roles must be spelled out too - silence is an error
    let toml = r#"
[access_control.roles.OWNER]
PROJECTS = ["CREATE", "READ", "UPDATE", "DELETE"]
PROJECT_USERS = ["CREATE", "READ", "UPDATE", "DELETE"]
PROJECT_INVITATIONS = ["CREATE", "READ", "UPDATE", "DELETE"]
"#;
    assert!(matches!(
        load_config_from_str(toml).unwrap_err(),
        ConfigError::MissingGrant { resource: None, .. }
    ));
}

#[test]
fn test_missing_resource_fails_at_load() {
    let toml = r#"
[access_control.roles.OWNER]
PROJECTS = ["CREATE", "READ", "UPDATE", "DELETE"]
PROJECT_USERS = ["CREATE", "READ", "UPDATE", "DELETE"]
PROJECT_INVITATIONS = ["CREATE", "READ", "UPDATE", "DELETE"]

[access_control.roles.ADMIN]
PROJECTS = ["CREATE", "READ", "UPDATE", "DELETE"]
PROJECT_USERS = ["CREATE", "READ", "UPDATE", "DELETE"]
PROJECT_INVITATIONS = ["CREATE", "READ", "UPDATE", "DELETE"]

[access_control.roles.MEMBER]
PROJECTS = ["READ"]
PROJECT_USERS = ["READ"]
"#;
    let err = load_config_from_str(toml).unwrap_err();
    match err {
        ConfigError::MissingGrant { role, resource } => {
            assert_eq!(role, "MEMBER");
            assert_eq!(resource.as_deref(), Some("PROJECT_INVITATIONS"));
        }
        other => panic!("expected MissingGrant, got {other:?}"),
    }
}

#[test]
fn test_configured_table_drives_the_gate() {
    let config = load_config_from_str(FULL_CONFIG).unwrap();
    let table = PrivilegeTable::from_config(&config.access_control).unwrap();
    let gate = AccessGate::new(table);

    let admin_ctx = RequestContext::with_project(
        "a1",
        ProjectContext::new(vec![Membership::new("a1", Role::Admin)]),
    );
    assert!(gate.is_allowed(&admin_ctx, Resource::Projects, Operation::Update));
    assert!(!gate.is_allowed(&admin_ctx, Resource::Projects, Operation::Delete));
}

#[test]
#[serial_test::serial]
fn test_load_config_from_file() {
    use std::fs;
    use tempfile::tempdir;
    use tenantguard::load_config;

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("tenantguard.toml");
    fs::write(&config_path, FULL_CONFIG).unwrap();

    let config = load_config(Some(config_path.to_str().unwrap())).unwrap();
    let member = config.access_control.roles.get("MEMBER").unwrap();
    assert_eq!(member.get("PROJECTS").unwrap(), &vec!["READ".to_string()]);
}

#[test]
#[serial_test::serial]
fn test_load_config_missing_file_errors() {
    use tenantguard::load_config;

    let result = load_config(Some("/nonexistent/tenantguard.toml"));
    assert!(matches!(result.unwrap_err(), ConfigError::Load(_)));
}

#[test]
#[serial_test::serial]
fn test_env_vars_cannot_reach_grants() {
    use std::env;
    use tenantguard::load_config;

    // The configuration is nested string-keyed grant tables, which
    // environment variables cannot address; loading must ignore them and
    // return the canonical defaults untouched.
    unsafe {
        env::set_var(
            "TENANTGUARD_ACCESS_CONTROL__ROLES__MEMBER__PROJECTS",
            "READ",
        );
    }

    let config = load_config(None).unwrap();
    let member = config.access_control.roles.get("MEMBER").unwrap();
    assert_eq!(
        member.get("PROJECTS").unwrap(),
        &vec!["CREATE".to_string(), "READ".to_string()]
    );

    unsafe {
        env::remove_var("TENANTGUARD_ACCESS_CONTROL__ROLES__MEMBER__PROJECTS");
    }
}

#[test]
#[serial_test::serial]
fn test_load_config_invalid_grants_in_file() {
    use std::fs;
    use tempfile::tempdir;
    use tenantguard::load_config;

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("tenantguard.toml");
    fs::write(
        &config_path,
        r#"
[access_control.roles.OWNER]
PROJECTS = ["READ", "FROBNICATE"]
"#,
    )
    .unwrap();

    let result = load_config(Some(config_path.to_str().unwrap()));
    assert!(matches!(
        result.unwrap_err(),
        ConfigError::UnknownOperation { .. }
    ));
}
