//! Configuration loader
//!
//! Loads configuration with the following precedence (highest to lowest):
//! 1. Configuration file (TOML), at an explicit or well-known path
//! 2. Default values (the canonical privilege matrix)
//!
//! Grants are file-configured only: the whole configuration is nested
//! string-keyed tables, which environment variables cannot address.
//!
//! Loading validates the grants by building a privilege table, so an
//! incomplete or misspelled matrix fails at startup rather than at the
//! first lookup.

use crate::access_control::PrivilegeTable;
use crate::config::types::AppConfig;
use crate::error::ConfigError;
use config::{Config, File, FileFormat};
use std::path::Path;

/// Default configuration file paths to check (in order)
const DEFAULT_CONFIG_PATHS: &[&str] = &[
    "tenantguard.toml",
    ".tenantguard.toml",
    "~/.config/tenantguard/config.toml",
    "/etc/tenantguard/config.toml",
];

/// Load configuration from a TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from_str(toml_str, FileFormat::Toml))
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Load configuration from a file, falling back to the canonical defaults
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. Start with defaults (handled by serde defaults on AppConfig)

    // 2. Add configuration file
    if let Some(path) = config_path {
        // Explicit path provided - must exist
        if !Path::new(path).exists() {
            return Err(ConfigError::Load(format!(
                "Configuration file not found: {}",
                path
            )));
        }
        builder = builder.add_source(File::new(path, FileFormat::Toml));
    } else {
        // Try default paths (first existing one wins)
        for path in DEFAULT_CONFIG_PATHS {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                builder = builder.add_source(File::new(&expanded, FileFormat::Toml));
                break;
            }
        }
    }

    let config = builder
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Validate configuration values
///
/// Grants are validated by building a table from them: unknown names and
/// missing (role, resource) pairs surface as `ConfigError`s here.
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.access_control.roles.is_empty() {
        return Err(ConfigError::Invalid {
            message: "access_control.roles must not be empty".to_string(),
        });
    }

    PrivilegeTable::from_config(&config.access_control)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_from_str_basic() {
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
PROJECT_INVITATIONS = []
"#;

        let config = load_config_from_str(toml).unwrap();
        let member = config.access_control.roles.get("MEMBER").unwrap();
        assert_eq!(member.get("PROJECTS").unwrap(), &vec!["READ".to_string()]);
        assert!(member.get("PROJECT_INVITATIONS").unwrap().is_empty());
    }

    #[test]
    fn test_empty_toml_uses_canonical_defaults() {
        let config = load_config_from_str("").unwrap();
        let table = PrivilegeTable::from_config(&config.access_control).unwrap();
        assert_eq!(table, PrivilegeTable::default());
    }

    #[test]
    fn test_unknown_role_rejected() {
        let toml = r#"
[access_control.roles.SUPERUSER]
PROJECTS = ["READ"]
"#;
        let result = load_config_from_str(toml);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::UnknownRole { .. }
        ));
    }

    #[test]
    fn test_unknown_operation_rejected() {
        let mut config = crate::config::AccessControlConfig::default();
        config
            .roles
            .get_mut("MEMBER")
            .unwrap()
            .insert("PROJECTS".to_string(), vec!["EXECUTE".to_string()]);

        let result = PrivilegeTable::from_config(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::UnknownOperation { .. }
        ));
    }

    #[test]
    fn test_missing_resource_grant_rejected() {
        let mut config = crate::config::AccessControlConfig::default();
        config
            .roles
            .get_mut("MEMBER")
            .unwrap()
            .remove("PROJECT_USERS");

        let result = PrivilegeTable::from_config(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::MissingGrant {
                resource: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn test_missing_role_grant_rejected() {
        let mut config = crate::config::AccessControlConfig::default();
        config.roles.remove("ADMIN");

        let result = PrivilegeTable::from_config(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::MissingGrant { resource: None, .. }
        ));
    }
}
