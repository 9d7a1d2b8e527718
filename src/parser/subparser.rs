use log::{debug, info, warn};

use crate::interfaces::converter::ConvertError;
use crate::models::Proxy;
use crate::parser::explodes::explode;
use crate::parser::types::{LinkBatch, SkippedLink};
use crate::utils::base64::base64_decode;
use crate::utils::string::preview;

/// Bodies at or under this length are never treated as a Base64 blob
const MIN_BASE64_BODY_LEN: usize = 20;
/// Characters of a link kept in log lines
const LOG_PREVIEW_LEN: usize = 50;

/// Undo whole-body Base64 encoding, if the body looks encoded
///
/// A body qualifies when it has no `://` anywhere and is longer than 20
/// characters, surrounding whitespace included. If decoding fails (or yields
/// non-UTF-8 bytes) the body is returned unchanged.
pub fn decode_body(body: &str) -> String {
    if body.contains("://") || body.chars().count() <= MIN_BASE64_BODY_LEN {
        return body.to_string();
    }

    match base64_decode(body.trim()) {
        Some(decoded) => {
            debug!("Subscription body decoded from Base64");
            decoded
        }
        None => {
            debug!("Subscription body is not Base64, splitting it as is");
            body.to_string()
        }
    }
}

/// Non-empty, trimmed lines of a body
pub fn split_links(body: &str) -> Vec<&str> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Explode a subscription body into every proxy it holds
///
/// Each line is decoded on its own; a bad line is recorded in
/// [`LinkBatch::failures`] and never stops the rest of the batch.
pub fn explode_sub(body: &str) -> LinkBatch {
    let decoded = decode_body(body);

    split_links(&decoded).into_iter().enumerate().fold(
        LinkBatch::default(),
        |mut batch, (index, link)| {
            match explode(link) {
                Ok(node) => {
                    info!("Parsed node: {}", node.name);
                    batch.proxies.push(node);
                }
                Err(error) => {
                    let preview = preview(link, LOG_PREVIEW_LEN);
                    warn!("Skipping link {} ({}): {}", index + 1, preview, error);
                    batch.failures.push(SkippedLink {
                        line: index + 1,
                        preview,
                        error,
                    });
                }
            }
            batch
        },
    )
}

/// Decode a subscription body, failing only when nothing usable is left
pub fn normalize(body: &str) -> Result<Vec<Proxy>, ConvertError> {
    let batch = explode_sub(body);
    info!(
        "Recognized {} of {} links",
        batch.proxies.len(),
        batch.total()
    );

    if batch.proxies.is_empty() {
        return Err(ConvertError::EmptyResult);
    }
    Ok(batch.proxies)
}
