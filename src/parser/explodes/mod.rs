pub mod common;
pub mod ss;
pub mod trojan;
pub mod vless;
pub mod vmess;

pub use ss::ShadowsocksDecoder;
pub use trojan::TrojanDecoder;
pub use vless::VlessDecoder;
pub use vmess::{VmessDecoder, VmessPayload};
