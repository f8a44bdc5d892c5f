pub mod base64;
pub mod string;
pub mod url;

// Re-export common utilities
pub use self::base64::{url_safe_base64_decode, url_safe_base64_decode_str};
pub use self::string::{bool_str, is_truthy, snippet};
pub use self::url::url_decode;
