//! Per-protocol share link decoders

pub mod common;
pub mod ss;
pub mod trojan;
pub mod vmess;

use std::str::FromStr;

use url::Url;

use crate::parser::types::DecodeError;
use crate::utils::url::url_decode;

pub use common::explode;

/// Parse a base-10 field, naming the field in the error
pub(crate) fn parse_number<T: FromStr>(field: &'static str, value: &str) -> Result<T, DecodeError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| DecodeError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Port from the authority of a URI-shaped link; absent and zero ports are rejected
pub(crate) fn link_port(url: &Url) -> Result<u16, DecodeError> {
    match url.port() {
        Some(0) => Err(DecodeError::InvalidNumber {
            field: "port",
            value: "0".to_string(),
        }),
        Some(port) => Ok(port),
        None => Err(DecodeError::MissingField("port")),
    }
}

/// Percent-decoded fragment, `None` when absent or empty
pub(crate) fn link_remark(url: &Url) -> Option<String> {
    url.fragment()
        .map(url_decode)
        .filter(|remark| !remark.trim().is_empty())
}
