use crate::settings::{ProxyGroupSettings, RuleSettings};

use super::group::DIRECT;

/// Expands the rule settings into `TYPE,VALUE,POLICY` lines
///
/// Order: direct rules, the GEOIP direct rule, ad rules routed to the
/// block-list group, then `FINAL` to the manual-select group.
pub fn process_rules_for_surfboard(
    rules: &RuleSettings,
    groups: &ProxyGroupSettings,
) -> Vec<String> {
    let mut lines: Vec<String> = rules
        .direct
        .iter()
        .map(|rule| format!("{},{}", rule, DIRECT))
        .collect();

    if !rules.geoip_region.is_empty() {
        lines.push(format!("GEOIP,{},{}", rules.geoip_region, DIRECT));
    }

    lines.extend(
        rules
            .ad_block
            .iter()
            .map(|rule| format!("{},{}", rule, groups.ad_block)),
    );
    lines.push(format!("FINAL,{}", groups.manual_select));
    lines
}
