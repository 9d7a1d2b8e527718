use thiserror::Error;

use crate::models::{Proxy, ProxyType};

/// Why a single share link could not be turned into a [`Proxy`].
///
/// These never abort a batch; the normalizer records them and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("payload is not valid Base64")]
    MalformedBase64,

    #[error("payload is not valid JSON: {0}")]
    MalformedJson(String),

    #[error("link is not a valid URI: {0}")]
    MalformedUri(String),

    #[error("required field `{0}` is missing or empty")]
    MissingField(&'static str),

    #[error("field `{field}` is not a valid number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{0} links are not supported")]
    Unsupported(ProxyType),
}

/// A link that was dropped from a batch, kept for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLink {
    /// 1-based position among the non-empty lines of the body
    pub line: usize,
    /// Truncated copy of the link, safe to log
    pub preview: String,
    pub error: DecodeError,
}

/// Outcome of decoding every link in a subscription body
#[derive(Debug, Clone, Default)]
pub struct LinkBatch {
    /// Accepted records, in input order
    pub proxies: Vec<Proxy>,
    pub failures: Vec<SkippedLink>,
}

impl LinkBatch {
    pub fn total(&self) -> usize {
        self.proxies.len() + self.failures.len()
    }
}
