//! Subscription parsing
//!
//! Turns subscription text into [`ProxyNode`](crate::models::ProxyNode)s.
//! Each supported scheme has its own decoder under [`explodes`]; the
//! registry in [`explodes::common`] picks one by prefix.

pub mod error;
pub mod explodes;

pub use error::DecodeError;
pub use explodes::common::{explode, explode_sub, Diagnostic, ProtocolDecoder, SubParseResult};
