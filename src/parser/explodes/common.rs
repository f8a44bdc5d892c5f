use std::fmt;

use log::{debug, warn};

use crate::models::{Protocol, ProxyNode};
use crate::parser::DecodeError;
use crate::utils::{snippet, url_safe_base64_decode_str};

use super::{ShadowsocksDecoder, TrojanDecoder, VlessDecoder, VmessDecoder};

/// How much of an offending line is quoted in a diagnostic.
const SNIPPET_LEN: usize = 30;

/// A decoder for one URI scheme.
pub trait ProtocolDecoder: Sync {
    fn protocol(&self) -> Protocol;

    /// Decodes the text that follows the scheme prefix.
    fn decode(&self, body: &str) -> Result<ProxyNode, DecodeError>;

    fn scheme(&self) -> &'static str {
        self.protocol().scheme()
    }
}

static DECODERS: [&dyn ProtocolDecoder; 4] = [
    &VmessDecoder,
    &TrojanDecoder,
    &ShadowsocksDecoder,
    &VlessDecoder,
];

/// Explode a proxy link into a ProxyNode
///
/// Blank lines yield `Ok(None)`. A prefix that matches no registered decoder
/// is reported as [`DecodeError::UnsupportedScheme`].
pub fn explode(link: &str) -> Result<Option<ProxyNode>, DecodeError> {
    let link = link.trim();
    if link.is_empty() {
        return Ok(None);
    }

    let (decoder, body) = DECODERS
        .iter()
        .find_map(|decoder| {
            link.strip_prefix(decoder.scheme())
                .map(|body| (*decoder, body))
        })
        .ok_or_else(|| DecodeError::UnsupportedScheme(snippet(link, SNIPPET_LEN)))?;

    decoder.decode(body).map(Some)
}

/// One skipped subscription line.
#[derive(Debug)]
pub struct Diagnostic {
    /// 1-based line number within the (decoded) subscription
    pub line: usize,
    pub snippet: String,
    pub error: DecodeError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} ({}): {}", self.line, self.snippet, self.error)
    }
}

/// Nodes decoded from a subscription, in input order, plus the lines that were skipped.
#[derive(Debug, Default)]
pub struct SubParseResult {
    pub nodes: Vec<ProxyNode>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Explode a subscription content into ProxyNodes
///
/// The content is either a plain list of links or the whole list encoded as
/// Base64. Bad lines never abort the run; each one becomes a [`Diagnostic`].
pub fn explode_sub(sub: &str) -> SubParseResult {
    let sub = sub.trim();
    let mut result = SubParseResult::default();
    if sub.is_empty() {
        return result;
    }

    // A plain link list always contains ':', which is outside the Base64 alphabet
    let decoded = match url_safe_base64_decode_str(sub) {
        Some(text) if text.contains("://") => {
            debug!("Subscription content is Base64 encoded");
            text
        }
        _ => sub.to_string(),
    };

    for (index, line) in decoded.lines().enumerate() {
        match explode(line) {
            Ok(Some(node)) => {
                debug!(
                    "Decoded {} node {}:{} from line {}",
                    node.protocol,
                    node.address,
                    node.port,
                    index + 1
                );
                result.nodes.push(node);
            }
            Ok(None) => {}
            Err(error) => {
                let diagnostic = Diagnostic {
                    line: index + 1,
                    snippet: snippet(line.trim(), SNIPPET_LEN),
                    error,
                };
                warn!("Skipping {}", diagnostic);
                result.diagnostics.push(diagnostic);
            }
        }
    }

    result
}

/// Parses a port, rejecting anything that is not a non-zero `u16`.
pub(crate) fn parse_port(protocol: Protocol, value: &str) -> Result<u16, DecodeError> {
    match value.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(DecodeError::InvalidPort {
            protocol,
            value: value.to_string(),
        }),
    }
}

/// Splits `host:port` on the last colon, so `[::1]:443` keeps its brackets.
pub(crate) fn split_host_port(server: &str) -> Option<(&str, &str)> {
    server.rsplit_once(':')
}
