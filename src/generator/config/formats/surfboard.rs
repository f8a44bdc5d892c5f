use crate::generator::config::group::group_generate;
use crate::generator::config::ruleconvert::process_rules_for_surfboard;
use crate::models::{ProxyGroupConfig, ProxyNode};
use crate::settings::{GeneralSettings, ManagedConfigSettings, SurfboardSettings};
use crate::utils::bool_str;

/// Convert proxies to Surfboard format
///
/// Renders the managed-config header followed by the `[General]`, `[Proxy]`,
/// `[Proxy Group]` and `[Rule]` sections, separated by blank lines. Node
/// names are used as-is, so they should already have been through
/// [`process_remarks`](crate::generator::config::remark::process_remarks).
///
/// # Arguments
/// * `nodes` - Decoded nodes, in output order
/// * `settings` - Static parts of the document
pub fn proxy_to_surfboard(nodes: &[ProxyNode], settings: &SurfboardSettings) -> String {
    let proxy_names: Vec<String> = nodes.iter().map(|node| node.display_name.clone()).collect();

    let mut config = String::new();

    if settings.managed_config.enabled {
        config.push_str(&managed_config_line(&settings.managed_config));
        config.push('\n');
    }

    config.push_str(&general_section(&settings.general));
    config.push('\n');

    // With no nodes this still leaves one empty line under the header.
    let proxy_lines: Vec<String> = nodes.iter().map(proxy_line).collect();
    config.push_str("[Proxy]\n");
    config.push_str(&proxy_lines.join("\n"));
    config.push_str("\n\n");

    config.push_str("[Proxy Group]\n");
    for group in group_generate(&proxy_names, &settings.proxy_group) {
        config.push_str(&group_line(&group));
        config.push('\n');
    }
    config.push('\n');

    config.push_str("[Rule]\n");
    for rule in process_rules_for_surfboard(&settings.rule, &settings.proxy_group) {
        config.push_str(&rule);
        config.push('\n');
    }

    config
}

/// `#!MANAGED-CONFIG <url> interval=<seconds> strict=<bool>`
pub fn managed_config_line(managed: &ManagedConfigSettings) -> String {
    format!(
        "#!MANAGED-CONFIG {} interval={} strict={}",
        managed.url,
        managed.interval,
        bool_str(managed.strict)
    )
}

fn general_section(general: &GeneralSettings) -> String {
    let mut section = String::from("[General]\n");
    section.push_str(&format!("loglevel = {}\n", general.loglevel));
    section.push_str(&format!("interface = {}\n", general.interface));
    section.push_str(&format!("skip-proxy = {}\n", general.skip_proxy.join(", ")));
    section.push_str(&format!("ipv6 = {}\n", bool_str(general.ipv6)));
    section.push_str(&format!("dns-server = {}\n", general.dns_server.join(", ")));
    section.push_str(&format!(
        "enhanced-mode-by-rule = {}\n",
        bool_str(general.enhanced_mode_by_rule)
    ));
    section.push_str(&format!("udp-relay = {}\n", bool_str(general.udp_relay)));
    section
}

/// `name = protocol, address, port, key=value, ...`
pub fn proxy_line(node: &ProxyNode) -> String {
    let mut line = format!(
        "{} = {}, {}, {}",
        node.display_name,
        node.protocol.as_str(),
        node.address,
        node.port
    );
    for (key, value) in node.fields.iter() {
        line.push_str(&format!(", {}={}", key, value));
    }
    line
}

/// `name = type, members..., url=..., interval=..., tolerance=...`
///
/// Options that are unset are left out, as is an empty member list.
pub fn group_line(group: &ProxyGroupConfig) -> String {
    let mut parts = vec![group.type_str().to_string()];
    parts.extend(group.proxies.iter().cloned());
    if !group.url.is_empty() {
        parts.push(format!("url={}", group.url));
    }
    if group.interval > 0 {
        parts.push(format!("interval={}", group.interval));
    }
    if group.tolerance > 0 {
        parts.push(format!("tolerance={}", group.tolerance));
    }
    format!("{} = {}", group.name, parts.join(", "))
}
