use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::{Protocol, ProxyNode, VMESS_DEFAULT_REMARK};
use crate::parser::DecodeError;
use crate::utils::{bool_str, is_truthy, url_safe_base64_decode};

use super::common::{parse_port, ProtocolDecoder};

/// The JSON object carried by a v2rayN style `vmess://` link.
///
/// Every key is optional. Scalars are accepted as strings, numbers or
/// booleans and normalised to strings; empty strings and `null` become `None`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VmessPayload {
    #[serde(deserialize_with = "lenient_string")]
    pub ps: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub add: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub port: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub aid: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub net: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub type_field: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub host: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub path: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub sni: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub tls: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub scy: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub alpn: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub fp: Option<String>,
    #[serde(rename = "allowInsecure", deserialize_with = "lenient_string")]
    pub allow_insecure: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let text = match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        // Some clients write alpn as a list
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(","),
        Value::Null | Value::Object(_) => String::new(),
    };
    let text = text.trim().to_string();
    Ok(if text.is_empty() { None } else { Some(text) })
}

impl VmessPayload {
    fn has_control_chars(&self) -> bool {
        [
            &self.ps,
            &self.add,
            &self.port,
            &self.id,
            &self.aid,
            &self.net,
            &self.type_field,
            &self.host,
            &self.path,
            &self.sni,
            &self.tls,
            &self.scy,
            &self.alpn,
            &self.fp,
            &self.allow_insecure,
        ]
        .into_iter()
        .flatten()
        .any(|value| value.chars().any(char::is_control))
    }

    /// Maps the payload onto a Surfboard `vmess` node.
    ///
    /// Values holding line breaks or other control characters are refused,
    /// since every column ends up on a single config line.
    pub fn into_node(self) -> Result<ProxyNode, DecodeError> {
        if self.has_control_chars() {
            return Err(DecodeError::malformed(
                Protocol::VMess,
                "control character in payload value",
            ));
        }

        let remark = self
            .ps
            .clone()
            .or_else(|| self.add.clone())
            .unwrap_or_else(|| VMESS_DEFAULT_REMARK.to_string());

        let address = self
            .add
            .ok_or_else(|| DecodeError::missing(Protocol::VMess, "address"))?;
        let port = self
            .port
            .ok_or_else(|| DecodeError::missing(Protocol::VMess, "port"))
            .and_then(|port| parse_port(Protocol::VMess, &port))?;
        let id = self
            .id
            .ok_or_else(|| DecodeError::missing(Protocol::VMess, "id"))?;

        let network = self
            .net
            .map(|net| net.to_lowercase())
            .unwrap_or_else(|| "tcp".to_string());
        let header_type = self
            .type_field
            .map(|t| t.to_lowercase())
            .unwrap_or_default();
        let host = self.host.unwrap_or_default();
        let path = self.path.unwrap_or_default();
        let tls = self
            .tls
            .as_deref()
            .is_some_and(|tls| !tls.eq_ignore_ascii_case("none"));
        let sni = self.sni.unwrap_or_else(|| host.clone());
        let allow_insecure = self.allow_insecure.as_deref().is_some_and(is_truthy);

        let mut node = ProxyNode::new(Protocol::VMess, remark, address, port);
        let fields = &mut node.fields;

        fields.push("username", id);
        fields.push("alterId", self.aid.unwrap_or_else(|| "0".to_string()));
        fields.append_if("cipher", self.scy.as_deref());
        fields.push("network", network.as_str());
        fields.push("header-type", header_type.as_str());

        match network.as_str() {
            "tcp" if header_type == "http" => {
                fields.push("http", "true");
                if !host.is_empty() {
                    fields.push("headers", format!("Host:{}", host));
                }
            }
            "ws" => {
                fields.push("ws", "true");
                fields.push("ws-path", path.as_str());
                if !host.is_empty() {
                    fields.push("ws-headers", format!("Host:{}", host));
                }
            }
            "grpc" => {
                fields.push("grpc", "true");
                fields.push("grpc-service-name", path.as_str());
                let mode = if header_type.is_empty() {
                    "gun"
                } else {
                    header_type.as_str()
                };
                fields.push("grpc-mode", mode);
            }
            "h2" => {
                fields.push("h2", "true");
                fields.push("h2-path", path.as_str());
                fields.push("h2-host", host.as_str());
            }
            _ => {}
        }

        if tls {
            fields.push("tls", "true");
        }
        fields.push("sni", sni);
        fields.append_if("alpn", self.alpn.as_deref());
        fields.append_if("fingerprint", self.fp.as_deref());
        fields.push("skip-cert-verify", bool_str(allow_insecure));

        Ok(node)
    }
}

/// Decoder for `vmess://<base64 json>` links
pub struct VmessDecoder;

impl ProtocolDecoder for VmessDecoder {
    fn protocol(&self) -> Protocol {
        Protocol::VMess
    }

    fn decode(&self, body: &str) -> Result<ProxyNode, DecodeError> {
        let bytes = url_safe_base64_decode(body)?;
        let json = String::from_utf8(bytes)?;
        let payload: VmessPayload = serde_json::from_str(&json)?;
        payload.into_node()
    }
}
