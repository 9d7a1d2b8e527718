use serde::Serialize;

fn is_empty_option_string(s: &Option<String>) -> bool {
    s.as_ref().map_or(true, |s| s.is_empty())
}

/// Fields every Clash proxy carries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommonProxyOptions {
    pub name: String,
    pub server: String,
    pub port: u16,
}

impl CommonProxyOptions {
    pub fn new(name: String, server: String, port: u16) -> Self {
        Self { name, server, port }
    }
}

/// `Host` header map of a WebSocket transport
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WsHeaders {
    #[serde(rename = "Host")]
    pub host: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WsOptions {
    #[serde(skip_serializing_if = "is_empty_option_string")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<WsHeaders>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct H2Options {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub host: Vec<String>,
    #[serde(skip_serializing_if = "is_empty_option_string")]
    pub path: Option<String>,
}

/// `Host` header list of an HTTP transport
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpHeaders {
    #[serde(rename = "Host")]
    pub host: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpOptions {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HttpHeaders>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrpcOptions {
    #[serde(rename = "grpc-service-name")]
    pub grpc_service_name: String,
}

/// Represents a single proxy in Clash configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ClashProxy {
    #[serde(rename = "ss")]
    Shadowsocks {
        #[serde(flatten)]
        common: CommonProxyOptions,
        cipher: String,
        password: String,
    },
    #[serde(rename = "vmess")]
    VMess {
        #[serde(flatten)]
        common: CommonProxyOptions,
        uuid: String,
        #[serde(rename = "alterId")]
        alter_id: u16,
        cipher: String,
        network: String,
        tls: bool,
        #[serde(rename = "ws-opts", skip_serializing_if = "Option::is_none")]
        ws_opts: Option<WsOptions>,
        #[serde(rename = "h2-opts", skip_serializing_if = "Option::is_none")]
        h2_opts: Option<H2Options>,
        #[serde(rename = "http-opts", skip_serializing_if = "Option::is_none")]
        http_opts: Option<HttpOptions>,
        #[serde(rename = "grpc-opts", skip_serializing_if = "Option::is_none")]
        grpc_opts: Option<GrpcOptions>,
    },
    #[serde(rename = "trojan")]
    Trojan {
        #[serde(flatten)]
        common: CommonProxyOptions,
        password: String,
        sni: String,
    },
}
