//! Share link decoding
//!
//! `explodes` holds one decoder per protocol, `subparser` turns a whole
//! subscription body into a list of proxies.

pub mod explodes;
pub mod subparser;
pub mod types;

pub use subparser::{explode_sub, normalize};
pub use types::{DecodeError, LinkBatch, SkippedLink};
