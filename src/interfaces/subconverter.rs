use log::info;

use crate::generator::config::formats::surfboard::proxy_to_surfboard;
use crate::generator::config::remark::process_remarks;
use crate::models::ProxyNode;
use crate::parser::{explode_sub, Diagnostic, SubParseResult};
use crate::settings::SurfboardSettings;

/// Outcome of one conversion run
#[derive(Debug)]
pub struct Conversion {
    /// Decoded nodes with their final `<name>_<index>` names, in input order
    pub nodes: Vec<ProxyNode>,
    /// One entry per skipped line
    pub diagnostics: Vec<Diagnostic>,
    /// The complete Surfboard document
    pub document: String,
}

/// Converts subscription text into a Surfboard document.
///
/// Lines that fail to decode are skipped and reported in
/// [`Conversion::diagnostics`]; they never abort the conversion.
pub fn convert(content: &str, settings: &SurfboardSettings) -> Conversion {
    let SubParseResult {
        mut nodes,
        diagnostics,
    } = explode_sub(content);

    process_remarks(&mut nodes);
    let document = proxy_to_surfboard(&nodes, settings);

    info!(
        "Converted {} node(s), skipped {} line(s)",
        nodes.len(),
        diagnostics.len()
    );

    Conversion {
        nodes,
        diagnostics,
        document,
    }
}
