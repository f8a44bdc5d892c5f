pub mod config;

// Re-export format converters
pub use config::formats::surfboard::proxy_to_surfboard;

// Re-export node name processing
pub use config::remark::{process_remarks, sanitize_name};
