use crate::generator::yaml::clash_output::{
    ClashProxy, CommonProxyOptions, GrpcOptions, H2Options, HttpHeaders, HttpOptions, WsHeaders,
    WsOptions,
};
use crate::generator::yaml::proxy_group_output::{ClashConfig, ClashProxyGroup};
use crate::models::{
    ConfigDocument, Proxy, ProxyGroupConfig, ProxyGroupType, ProxyKind, VMessSettings,
};

/// Transport options of a VMess node, keyed by network
struct TransportOptions {
    ws: Option<WsOptions>,
    h2: Option<H2Options>,
    http: Option<HttpOptions>,
    grpc: Option<GrpcOptions>,
}

impl TransportOptions {
    fn none() -> Self {
        Self {
            ws: None,
            h2: None,
            http: None,
            grpc: None,
        }
    }
}

/// Path and host only mean something for path-based transports; plain
/// tcp nodes never carry an options block.
fn transport_options(settings: &VMessSettings) -> TransportOptions {
    let path = settings.path.clone();
    let host = settings.host.clone();
    if path.is_none() && host.is_none() {
        return TransportOptions::none();
    }

    let mut opts = TransportOptions::none();
    match settings.network.as_str() {
        "ws" => {
            opts.ws = Some(WsOptions {
                path,
                headers: host.map(|host| WsHeaders { host }),
            });
        }
        "h2" => {
            opts.h2 = Some(H2Options {
                host: host.into_iter().collect(),
                path,
            });
        }
        "http" => {
            opts.http = Some(HttpOptions {
                path: path.into_iter().collect(),
                headers: host.map(|host| HttpHeaders { host: vec![host] }),
            });
        }
        "grpc" => {
            opts.grpc = path.map(|grpc_service_name| GrpcOptions { grpc_service_name });
        }
        _ => {}
    }
    opts
}

/// Convert one proxy record into its Clash entry
pub fn proxy_to_clash_proxy(node: &Proxy) -> ClashProxy {
    let common = CommonProxyOptions::new(node.name.clone(), node.server.clone(), node.port);

    match &node.kind {
        ProxyKind::VMess(settings) => {
            let transport = transport_options(settings);
            ClashProxy::VMess {
                common,
                uuid: settings.user_id.clone(),
                alter_id: settings.alter_id,
                cipher: settings.cipher.clone(),
                network: settings.network.clone(),
                tls: settings.tls,
                ws_opts: transport.ws,
                h2_opts: transport.h2,
                http_opts: transport.http,
                grpc_opts: transport.grpc,
            }
        }
        ProxyKind::Shadowsocks { cipher, password } => ClashProxy::Shadowsocks {
            common,
            cipher: cipher.clone(),
            password: password.clone(),
        },
        ProxyKind::Trojan { password, sni } => ClashProxy::Trojan {
            common,
            password: password.clone(),
            sni: sni.clone(),
        },
    }
}

pub fn group_to_clash_group(group: &ProxyGroupConfig) -> ClashProxyGroup {
    match group.group_type {
        ProxyGroupType::Select => ClashProxyGroup::Select {
            name: group.name.clone(),
            proxies: group.proxies.clone(),
        },
        ProxyGroupType::URLTest => ClashProxyGroup::UrlTest {
            name: group.name.clone(),
            proxies: group.proxies.clone(),
            url: group.url.clone(),
            interval: group.interval,
        },
    }
}

/// Structured view of a document, in Clash key names
pub fn document_to_clash_config(doc: &ConfigDocument) -> ClashConfig {
    ClashConfig {
        name: doc.name.clone(),
        proxies: doc.proxies.iter().map(proxy_to_clash_proxy).collect(),
        proxy_groups: doc.proxy_groups.iter().map(group_to_clash_group).collect(),
        rules: doc.rules.iter().map(|rule| rule.to_string()).collect(),
    }
}
