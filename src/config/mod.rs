//! Configuration module
//!
//! Declarative grant configuration and its layered loader. The grants are
//! turned into a [`PrivilegeTable`](crate::access_control::PrivilegeTable)
//! once at startup; anything incomplete or misspelled fails there.

pub mod loader;
pub mod types;

pub use loader::{load_config, load_config_from_str};
pub use types::{AccessControlConfig, AppConfig};
