use std::collections::HashMap;

use url::Url;

use crate::models::{Protocol, ProxyNode};
use crate::parser::DecodeError;
use crate::utils::{bool_str, is_truthy, url_decode};

use super::common::ProtocolDecoder;

const TROJAN_DEFAULT_PORT: u16 = 443;

/// Decoder for `trojan://password@host[:port][?params][#remark]` links
pub struct TrojanDecoder;

impl ProtocolDecoder for TrojanDecoder {
    fn protocol(&self) -> Protocol {
        Protocol::Trojan
    }

    fn decode(&self, body: &str) -> Result<ProxyNode, DecodeError> {
        // The password is taken verbatim, so split before handing the rest to the URL parser
        let (password, remainder) = body
            .split_once('@')
            .ok_or_else(|| DecodeError::malformed(Protocol::Trojan, "missing '@' separator"))?;
        if password.is_empty() {
            return Err(DecodeError::missing(Protocol::Trojan, "password"));
        }

        let url = Url::parse(&format!("trojan://{}", remainder))?;

        let host = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| DecodeError::missing(Protocol::Trojan, "host"))?;
        let port = url.port().unwrap_or(TROJAN_DEFAULT_PORT);
        if port == 0 {
            return Err(DecodeError::InvalidPort {
                protocol: Protocol::Trojan,
                value: port.to_string(),
            });
        }

        let params: HashMap<String, String> = url.query_pairs().into_owned().collect();
        let param = |key: &str| params.get(key).map(String::as_str).filter(|v| !v.is_empty());

        let remark = url
            .fragment()
            .map(url_decode)
            .filter(|remark| !remark.is_empty())
            .unwrap_or_else(|| host.to_string());

        // "peer" is the older spelling of "sni"
        let sni = param("peer").or_else(|| param("sni")).unwrap_or(host);
        let skip_cert_verify = param("allowInsecure").is_some_and(is_truthy);

        let mut node = ProxyNode::new(Protocol::Trojan, remark, host, port);
        let fields = &mut node.fields;
        fields.push("password", password);
        fields.push("tls", "true");
        fields.push("sni", sni);
        fields.append_if("alpn", param("alpn"));
        fields.append_if("fingerprint", param("fp"));
        fields.push("skip-cert-verify", bool_str(skip_cert_verify));

        Ok(node)
    }
}
