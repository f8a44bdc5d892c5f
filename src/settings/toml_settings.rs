use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use super::SettingsError;

fn default_managed_config_url() -> String {
    "https://jv20.pages.dev/index.html".to_string()
}

fn default_update_interval() -> u32 {
    86400 // 24 hours
}

fn default_test_url() -> String {
    "http://www.gstatic.com/generate_204".to_string()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Managed config header settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ManagedConfigSettings {
    /// Whether the `#!MANAGED-CONFIG` line is written at all
    pub enabled: bool,
    pub url: String,
    pub interval: u32,
    pub strict: bool,
}

impl Default for ManagedConfigSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            url: default_managed_config_url(),
            interval: default_update_interval(),
            strict: true,
        }
    }
}

/// `[General]` section settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralSettings {
    pub loglevel: String,
    pub interface: String,
    pub skip_proxy: Vec<String>,
    pub ipv6: bool,
    pub dns_server: Vec<String>,
    pub enhanced_mode_by_rule: bool,
    pub udp_relay: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            loglevel: "notify".to_string(),
            interface: "127.0.0.1".to_string(),
            skip_proxy: to_strings(&[
                "127.0.0.1",
                "192.168.0.0/16",
                "10.0.0.0/8",
                "172.16.0.0/12",
                "100.64.0.0/10",
                "localhost",
                "*.local",
            ]),
            ipv6: true,
            dns_server: to_strings(&["223.5.5.5", "2400:3200::1"]),
            enhanced_mode_by_rule: true,
            udp_relay: true,
        }
    }
}

/// Proxy group names and health-check parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProxyGroupSettings {
    pub test_url: String,
    pub interval: u32,
    pub tolerance: u32,
    /// Latency based `url-test` group
    pub auto_select: String,
    /// `fallback` group
    pub failover: String,
    /// Manual `select` group, also the catch-all rule target
    pub manual_select: String,
    /// Block-list group used by the ad rules
    pub ad_block: String,
}

impl Default for ProxyGroupSettings {
    fn default() -> Self {
        Self {
            test_url: default_test_url(),
            interval: 300,
            tolerance: 100,
            auto_select: "🌏 自动选择".to_string(),
            failover: "🔄 故障切换".to_string(),
            manual_select: "🚀 节点选择".to_string(),
            ad_block: "🚫 广告拦截".to_string(),
        }
    }
}

/// `[Rule]` section settings
///
/// Rules are written as `TYPE,VALUE`; the policy is appended when rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RuleSettings {
    pub direct: Vec<String>,
    /// Region code for the `GEOIP` direct rule, empty to leave it out
    pub geoip_region: String,
    pub ad_block: Vec<String>,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            direct: to_strings(&[
                "DOMAIN-SUFFIX,local",
                "IP-CIDR,127.0.0.0/8",
                "IP-CIDR,192.168.0.0/16",
                "IP-CIDR,10.0.0.0/8",
                "IP-CIDR,172.16.0.0/12",
            ]),
            geoip_region: "CN".to_string(),
            ad_block: to_strings(&[
                "DOMAIN-SUFFIX,ad.com",
                "DOMAIN-KEYWORD,adservice",
                "DOMAIN-SUFFIX,doubleclick.net",
            ]),
        }
    }
}

/// Everything that shapes the generated Surfboard document apart from the nodes.
///
/// The defaults reproduce the stock document; a TOML file only needs to list
/// the keys it changes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SurfboardSettings {
    pub managed_config: ManagedConfigSettings,
    pub general: GeneralSettings,
    pub proxy_group: ProxyGroupSettings,
    pub rule: RuleSettings,
}

impl SurfboardSettings {
    /// Parses settings from TOML text. Missing sections and keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }
}

/// Loads settings from a TOML file.
pub fn load_settings_from_file(path: impl AsRef<Path>) -> Result<SurfboardSettings, SettingsError> {
    let path = path.as_ref();
    info!("Loading settings from {}", path.display());
    let content = fs::read_to_string(path)?;
    SurfboardSettings::from_toml_str(&content)
}
