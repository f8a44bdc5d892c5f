use log::debug;

use crate::models::{Protocol, ProxyNode, SS_DEFAULT_REMARK};
use crate::parser::DecodeError;
use crate::utils::{url_decode, url_safe_base64_decode};

use super::common::{parse_port, split_host_port, ProtocolDecoder};

/// Decoder for Shadowsocks links
///
/// Both the legacy `ss://base64(method:password@host:port)#remark` form and
/// SIP002 `ss://base64(method:password)@host:port/?plugin=...#remark` are
/// accepted.
pub struct ShadowsocksDecoder;

impl ProtocolDecoder for ShadowsocksDecoder {
    fn protocol(&self) -> Protocol {
        Protocol::Shadowsocks
    }

    fn decode(&self, body: &str) -> Result<ProxyNode, DecodeError> {
        let content = body.trim().replace("/?", "?");

        let (content, remark) = match content.split_once('#') {
            Some((rest, fragment)) => (rest, url_decode(fragment)),
            None => (content.as_str(), String::new()),
        };
        let (content, query) = content.split_once('?').unwrap_or((content, ""));

        let (secret, server) = match content.rsplit_once('@') {
            // SIP002
            Some((userinfo, server)) => (decode_userinfo(userinfo)?, server.to_string()),
            // Legacy
            None => {
                let decoded = String::from_utf8(url_safe_base64_decode(content)?)?;
                let (secret, server) = decoded.rsplit_once('@').ok_or_else(|| {
                    DecodeError::malformed(Protocol::Shadowsocks, "missing '@' separator")
                })?;
                (secret.to_string(), server.to_string())
            }
        };

        let (method, password) = secret
            .split_once(':')
            .ok_or_else(|| DecodeError::missing(Protocol::Shadowsocks, "password"))?;
        if method.is_empty() {
            return Err(DecodeError::missing(Protocol::Shadowsocks, "method"));
        }
        if password.is_empty() {
            return Err(DecodeError::missing(Protocol::Shadowsocks, "password"));
        }

        let server = server.trim_end_matches('/');
        let (host, port) = split_host_port(server)
            .ok_or_else(|| DecodeError::missing(Protocol::Shadowsocks, "port"))?;
        if host.is_empty() {
            return Err(DecodeError::missing(Protocol::Shadowsocks, "host"));
        }
        let port = parse_port(Protocol::Shadowsocks, port)?;

        let remark = if remark.is_empty() {
            SS_DEFAULT_REMARK.to_string()
        } else {
            remark
        };

        let mut node = ProxyNode::new(Protocol::Shadowsocks, remark, host, port);
        node.fields.push("encrypt-method", method);
        node.fields.push("password", password);

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if key == "plugin" {
                apply_plugin(&mut node, &value);
            }
        }

        Ok(node)
    }
}

/// SIP002 userinfo is Base64, except for AEAD-2022 ciphers where it is
/// percent-encoded plain text.
fn decode_userinfo(userinfo: &str) -> Result<String, DecodeError> {
    let plain = url_decode(userinfo);
    if plain.contains(':') {
        return Ok(plain);
    }
    Ok(String::from_utf8(url_safe_base64_decode(&plain)?)?)
}

/// Maps `obfs-local`/`simple-obfs` plugin options onto Surfboard's `obfs` keys.
fn apply_plugin(node: &mut ProxyNode, plugin: &str) {
    let mut parts = plugin.split(';');
    let name = parts.next().unwrap_or_default();
    if name != "obfs-local" && name != "simple-obfs" {
        debug!("Ignoring unsupported Shadowsocks plugin: {}", name);
        return;
    }

    for opt in parts {
        match opt.split_once('=') {
            Some(("obfs", mode)) => node.fields.push("obfs", mode),
            Some(("obfs-host", host)) => node.fields.push("obfs-host", host),
            _ => {}
        }
    }
}
