//! Group generation utilities
//!
//! This module builds the fixed set of proxy groups written to `[Proxy Group]`.

use crate::models::{ProxyGroupConfig, ProxyGroupConfigs, ProxyGroupType};
use crate::settings::ProxyGroupSettings;

pub const DIRECT: &str = "DIRECT";
pub const REJECT: &str = "REJECT";

/// Generates the auto-select, failover, manual-select and block-list groups
///
/// # Arguments
///
/// * `proxy_names` - Final (sanitized and suffixed) proxy names, in `[Proxy]` order
/// * `settings` - Group names and health-check parameters
pub fn group_generate(proxy_names: &[String], settings: &ProxyGroupSettings) -> ProxyGroupConfigs {
    let mut auto_select =
        ProxyGroupConfig::new(settings.auto_select.clone(), ProxyGroupType::URLTest);
    auto_select.proxies = proxy_names.to_vec();
    auto_select.url = settings.test_url.clone();
    auto_select.interval = settings.interval;
    auto_select.tolerance = settings.tolerance;

    let mut failover = ProxyGroupConfig::new(settings.failover.clone(), ProxyGroupType::Fallback);
    failover.proxies = proxy_names.to_vec();
    failover.url = settings.test_url.clone();
    failover.interval = settings.interval;

    let mut manual_select =
        ProxyGroupConfig::new(settings.manual_select.clone(), ProxyGroupType::Select);
    manual_select.proxies = proxy_names.to_vec();
    manual_select.proxies.extend([
        settings.auto_select.clone(),
        settings.failover.clone(),
        DIRECT.to_string(),
    ]);

    let mut ad_block = ProxyGroupConfig::new(settings.ad_block.clone(), ProxyGroupType::Select);
    ad_block.proxies = vec![REJECT.to_string(), DIRECT.to_string()];

    vec![auto_select, failover, manual_select, ad_block]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_generate_members() {
        let names = vec!["a_1".to_string(), "b_2".to_string()];
        let settings = ProxyGroupSettings::default();
        let groups = group_generate(&names, &settings);

        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0].group_type, ProxyGroupType::URLTest);
        assert_eq!(groups[0].proxies, names);
        assert_eq!(groups[0].tolerance, 100);
        assert_eq!(groups[1].type_str(), "fallback");
        assert_eq!(groups[1].tolerance, 0);
        assert_eq!(
            groups[2].proxies,
            vec!["a_1", "b_2", "🌏 自动选择", "🔄 故障切换", "DIRECT"]
        );
        assert_eq!(groups[3].proxies, vec!["REJECT", "DIRECT"]);
    }
}
