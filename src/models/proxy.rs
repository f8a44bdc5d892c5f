//! Proxy model definitions
//!
//! Contains the core data structures for decoded proxy nodes.

use std::fmt;

use linked_hash_map::LinkedHashMap;

/// Represents the protocol of a decoded proxy node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    VMess,
    Trojan,
    Shadowsocks,
    Vless,
}

impl Protocol {
    /// Keyword used for this protocol in a Surfboard `[Proxy]` line.
    pub fn as_str(self) -> &'static str {
        match self {
            Protocol::VMess => "vmess",
            Protocol::Trojan => "trojan",
            Protocol::Shadowsocks => "ss",
            Protocol::Vless => "vless",
        }
    }

    /// URI scheme prefix, including the `://` separator.
    pub fn scheme(self) -> &'static str {
        match self {
            Protocol::VMess => "vmess://",
            Protocol::Trojan => "trojan://",
            Protocol::Shadowsocks => "ss://",
            Protocol::Vless => "vless://",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Protocol::VMess => "VMess",
            Protocol::Trojan => "Trojan",
            Protocol::Shadowsocks => "Shadowsocks",
            Protocol::Vless => "VLESS",
        };
        f.write_str(name)
    }
}

/// Ordered `key=value` columns of a proxy line.
///
/// Insertion order is the emission order. Empty values are never stored, so
/// a rendered line can not contain a bare `key=`. Control characters are
/// dropped from values so a column can not break out of its line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldList {
    entries: LinkedHashMap<String, String>,
}

impl FieldList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key=value`, skipping empty values.
    ///
    /// Setting a key that is already present replaces its value without
    /// moving it.
    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        let mut value = value.into();
        value.retain(|c| !c.is_control());
        if value.is_empty() {
            return;
        }
        if let Some(existing) = self.entries.get_mut(key) {
            *existing = value;
        } else {
            self.entries.insert(key.to_string(), value);
        }
    }

    /// Appends `key=value` only when a non-empty value is present.
    pub fn append_if(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Represents one decoded subscription link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyNode {
    /// Label taken from the link. Only safe for output after remark processing.
    pub display_name: String,
    pub protocol: Protocol,
    pub address: String,
    pub port: u16,
    pub fields: FieldList,
}

impl ProxyNode {
    pub fn new(
        protocol: Protocol,
        display_name: impl Into<String>,
        address: impl Into<String>,
        port: u16,
    ) -> Self {
        ProxyNode {
            display_name: display_name.into(),
            protocol,
            address: address.into(),
            port,
            fields: FieldList::new(),
        }
    }

    /// Shortcut for `self.fields.get(key)`.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key)
    }
}

/// Default remarks used when a link carries no usable label.
pub const VMESS_DEFAULT_REMARK: &str = "vmess";
pub const SS_DEFAULT_REMARK: &str = "ss";
pub const DEFAULT_NODE_NAME: &str = "node";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_list_skips_empty_values() {
        let mut fields = FieldList::new();
        fields.push("username", "abc");
        fields.push("cipher", "");
        fields.append_if("sni", None);
        fields.append_if("alpn", Some(""));
        fields.append_if("fingerprint", Some("chrome"));

        assert_eq!(fields.len(), 2);
        assert!(!fields.contains_key("cipher"));
        assert_eq!(
            fields.iter().collect::<Vec<_>>(),
            vec![("username", "abc"), ("fingerprint", "chrome")]
        );
    }

    #[test]
    fn test_field_list_overwrite_keeps_position() {
        let mut fields = FieldList::new();
        fields.push("a", "1");
        fields.push("b", "2");
        fields.push("a", "3");

        assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(fields.get("a"), Some("3"));
    }

    #[test]
    fn test_field_list_drops_control_chars() {
        let mut fields = FieldList::new();
        fields.push("sni", "a.example\n[Rule]\r\n");
        fields.push("obfs-host", "\n");

        assert_eq!(fields.get("sni"), Some("a.example[Rule]"));
        assert!(!fields.contains_key("obfs-host"));
    }

    #[test]
    fn test_protocol_keywords() {
        assert_eq!(Protocol::Shadowsocks.as_str(), "ss");
        assert_eq!(Protocol::Shadowsocks.scheme(), "ss://");
        assert_eq!(Protocol::VMess.to_string(), "VMess");
    }
}
