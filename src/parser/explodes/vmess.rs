use serde_json::Value;

use crate::models::{
    default_remark, Proxy, ProxyKind, VMessSettings, VMESS_DEFAULT_CIPHER, VMESS_DEFAULT_NETWORK,
};
use crate::parser::types::DecodeError;
use crate::utils::base64::base64_decode_bytes;

use super::parse_number;

const VMESS_PREFIX: &str = "vmess://";

/// Read a JSON field that providers emit either as a string or as a number
fn string_or_number(json: &Value, key: &str) -> Option<String> {
    let value = match &json[key] {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    };
    value.filter(|s| !s.is_empty())
}

/// Read an optional string field, treating the empty string as absent
fn non_empty_str(json: &Value, key: &str) -> Option<String> {
    json[key]
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parse a VMess link into a Proxy object
///
/// Format: `vmess://BASE64({"ps": ..., "add": ..., "port": ..., "id": ..., ...})`
pub fn explode_vmess(vmess: &str) -> Result<Proxy, DecodeError> {
    let encoded = vmess.get(VMESS_PREFIX.len()..).unwrap_or_default();

    let decoded = base64_decode_bytes(encoded).ok_or(DecodeError::MalformedBase64)?;
    let json: Value = serde_json::from_slice(&decoded)
        .map_err(|e| DecodeError::MalformedJson(e.to_string()))?;
    if !json.is_object() {
        return Err(DecodeError::MalformedJson(
            "expected a JSON object".to_string(),
        ));
    }

    let server = string_or_number(&json, "add").ok_or(DecodeError::MissingField("add"))?;
    let port = string_or_number(&json, "port").ok_or(DecodeError::MissingField("port"))?;
    let port = parse_number::<u16>("port", &port)?;
    if port == 0 {
        return Err(DecodeError::InvalidNumber {
            field: "port",
            value: "0".to_string(),
        });
    }

    let user_id = non_empty_str(&json, "id").ok_or(DecodeError::MissingField("id"))?;
    let alter_id = match string_or_number(&json, "aid") {
        Some(aid) => parse_number::<u16>("aid", &aid)?,
        None => 0,
    };

    let network =
        non_empty_str(&json, "net").unwrap_or_else(|| VMESS_DEFAULT_NETWORK.to_string());
    let tls = json["tls"].as_str() == Some("tls");

    let name = string_or_number(&json, "ps").unwrap_or_else(|| default_remark(&server, port));

    Ok(Proxy {
        name,
        server,
        port,
        kind: ProxyKind::VMess(VMessSettings {
            user_id,
            alter_id,
            cipher: VMESS_DEFAULT_CIPHER.to_string(),
            network,
            tls,
            path: non_empty_str(&json, "path"),
            host: non_empty_str(&json, "host"),
        }),
    })
}
