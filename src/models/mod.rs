//! Core data models for the application
//!
//! This module contains the primary data structures used throughout the application,
//! separated from the logic that operates on them.
//!
//! # Usage
//!
//! ```rust
//! use surfconv::models::{ProxyNode, Protocol};
//!
//! let mut node = ProxyNode::new(Protocol::Trojan, "edge", "example.com", 443);
//! node.fields.push("password", "secret");
//! node.fields.append_if("sni", None);
//!
//! assert_eq!(node.field("password"), Some("secret"));
//! assert!(node.field("sni").is_none());
//! ```

mod proxy;
pub mod proxy_group_config;

pub use proxy::*;
pub use proxy_group_config::{ProxyGroupConfig, ProxyGroupConfigs, ProxyGroupType};
