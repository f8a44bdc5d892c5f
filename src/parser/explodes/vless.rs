use crate::models::{Protocol, ProxyNode};
use crate::parser::DecodeError;
use crate::utils::url_decode;

use super::common::{parse_port, split_host_port, ProtocolDecoder};

/// Decoder for `vless://uuid@host:port[?params][#remark]` links
///
/// Query parameters are copied onto the node as-is, in link order, except
/// `uuid` which always comes from the userinfo.
pub struct VlessDecoder;

impl ProtocolDecoder for VlessDecoder {
    fn protocol(&self) -> Protocol {
        Protocol::Vless
    }

    fn decode(&self, body: &str) -> Result<ProxyNode, DecodeError> {
        let (body, fragment) = body.trim().split_once('#').unwrap_or((body.trim(), ""));

        let (uuid, rest) = body
            .split_once('@')
            .ok_or_else(|| DecodeError::malformed(Protocol::Vless, "missing '@' separator"))?;
        if uuid.is_empty() {
            return Err(DecodeError::missing(Protocol::Vless, "uuid"));
        }

        let (server, query) = rest.split_once('?').unwrap_or((rest, ""));
        let server = server.trim_end_matches('/');
        let (host, port) = split_host_port(server)
            .ok_or_else(|| DecodeError::missing(Protocol::Vless, "port"))?;
        if host.is_empty() {
            return Err(DecodeError::missing(Protocol::Vless, "host"));
        }
        let port = parse_port(Protocol::Vless, port)?;

        let remark = match url_decode(fragment) {
            remark if remark.is_empty() => host.to_string(),
            remark => remark,
        };

        let mut node = ProxyNode::new(Protocol::Vless, remark, host, port);
        node.fields.push("uuid", uuid);
        for pair in query.split('&') {
            if let Some((key, value)) = pair.split_once('=') {
                if !key.is_empty() && key != "uuid" {
                    node.fields.push(key, value);
                }
            }
        }

        Ok(node)
    }
}
