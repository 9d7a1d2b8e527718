//! Core data models for the application
//!
//! This module contains the primary data structures used throughout the application,
//! separated from the logic that operates on them.
//!
//! # Usage
//!
//! ```rust
//! use clash_subconverter::models::{Proxy, ProxyKind};
//!
//! let proxy = Proxy {
//!     name: "HK-01".to_string(),
//!     server: "hk.example.com".to_string(),
//!     port: 443,
//!     kind: ProxyKind::Trojan {
//!         password: "secret".to_string(),
//!         sni: "hk.example.com".to_string(),
//!     },
//! };
//! assert!(proxy.is_complete());
//! ```

pub mod configs;
pub mod proxy;
pub mod proxy_group_config;
pub mod ruleset;

pub use configs::*;
pub use proxy::*;
pub use proxy_group_config::*;
pub use ruleset::*;
