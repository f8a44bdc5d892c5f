//! Settings module for surfconv
//!
//! This module contains the configuration that drives the static parts of
//! the generated document.

pub mod toml_settings;

use thiserror::Error;

pub use toml_settings::{
    load_settings_from_file, GeneralSettings, ManagedConfigSettings, ProxyGroupSettings,
    RuleSettings, SurfboardSettings,
};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings: {0}")]
    Toml(#[from] toml::de::Error),
}
