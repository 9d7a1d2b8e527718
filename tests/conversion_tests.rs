use chrono::{TimeZone, Utc};
use clash_subconverter::generator::config::group::{
    GROUP_AUTO_SELECT, GROUP_DIRECT, GROUP_NODE_SELECT,
};
use clash_subconverter::interfaces::converter::{build_share_link, decode_share_segment};
use clash_subconverter::models::{ClashGeneral, ProxyKind};
use clash_subconverter::parser::explode_sub;
use clash_subconverter::parser::explodes::explode;
use clash_subconverter::utils::base64::base64_encode;
use clash_subconverter::{assemble, assemble_with, normalize, serialize, ConvertError};

const SCENARIO_BODY: &str = "ss://YWVzLTI1Ni1nY206cGFzczEyMw==@example.com:8388#MyNode
trojan://secret@host2.example:443?sni=host2.example#Node2
vless://skip-me@x:1
";

#[cfg(test)]
mod conversion_tests {
    use super::*;

    #[test]
    fn test_mixed_subscription_scenario() {
        let proxies = normalize(SCENARIO_BODY).unwrap();
        assert_eq!(proxies.len(), 2);

        assert_eq!(proxies[0].name, "MyNode");
        assert_eq!(
            proxies[0].kind,
            ProxyKind::Shadowsocks {
                cipher: "aes-256-gcm".to_string(),
                password: "pass123".to_string(),
            }
        );
        assert_eq!(proxies[1].name, "Node2");
        match &proxies[1].kind {
            ProxyKind::Trojan { sni, .. } => assert_eq!(sni, "host2.example"),
            other => panic!("expected trojan, got {:?}", other),
        }

        let doc = assemble(proxies, "Scenario");
        let selector = &doc.proxy_groups[0];
        assert_eq!(selector.name, GROUP_NODE_SELECT);
        assert_eq!(
            selector.proxies,
            vec![GROUP_AUTO_SELECT, GROUP_DIRECT, "MyNode", "Node2"]
        );
    }

    #[test]
    fn test_vless_only_body_fails() {
        assert!(matches!(
            normalize("vless://only@x:1"),
            Err(ConvertError::EmptyResult)
        ));
    }

    #[test]
    fn test_partial_failures_keep_order() {
        let body = "trojan://a@one.example:443#One\n\
            vmess://%%%\n\
            ss://bm90LWEtdmFsaWQtc3M=\n\
            trojan://b@two.example:443#Two\n\
            trojan://c@three.example:notaport#Bad\n\
            trojan://d@four.example:443#Four\n";

        let batch = explode_sub(body);
        let names: Vec<&str> = batch.proxies.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["One", "Two", "Four"]);
        assert_eq!(batch.failures.len(), 3);
        assert_eq!(
            batch.failures.iter().map(|f| f.line).collect::<Vec<_>>(),
            vec![2, 3, 5]
        );
    }

    #[test]
    fn test_base64_wrapped_subscription() {
        let wrapped = base64_encode(SCENARIO_BODY);
        let proxies = normalize(&wrapped).unwrap();
        assert_eq!(proxies.len(), 2);
        assert_eq!(proxies[1].name, "Node2");
    }

    #[test]
    fn test_serialized_document_parses_as_yaml() {
        let doc = assemble(normalize(SCENARIO_BODY).unwrap(), "Scenario");
        let yaml = serialize(&doc);
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(value["mode"], serde_yaml::Value::from("rule"));
        assert_eq!(value["socks-port"], serde_yaml::Value::from(7891));
        assert_eq!(value["proxies"][0]["type"], serde_yaml::Value::from("ss"));
        assert_eq!(value["proxies"][0]["port"], serde_yaml::Value::from(8388));
        assert_eq!(value["proxies"][1]["type"], serde_yaml::Value::from("trojan"));
        assert_eq!(
            value["proxy-groups"][2]["proxies"][0],
            serde_yaml::Value::from("DIRECT")
        );
        assert_eq!(
            value["rules"][6],
            serde_yaml::Value::from("MATCH,🚀 节点选择")
        );
    }

    #[test]
    fn test_serialize_is_idempotent_for_fixed_time() {
        let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let render = || {
            serialize(&assemble_with(
                normalize(SCENARIO_BODY).unwrap(),
                "Scenario",
                ClashGeneral::default(),
                at,
            ))
        };

        let first = render();
        assert_eq!(first, render());
        assert!(first.contains("# Generated at: 2025-01-02T03:04:05.000Z"));
    }

    #[test]
    fn test_decoders_reject_hostile_links() {
        let hostile = vec![
            "vmess://".to_string(),
            "vmess://日本語テキスト".to_string(),
            format!("vmess://{}", base64_encode("[1, 2, 3]")),
            format!("vmess://{}", base64_encode("\"just a string\"")),
            "ss://".to_string(),
            "ss://@:1".to_string(),
            "ss://ñandú".to_string(),
            "ss://YWVz".to_string(),
            "trojan://".to_string(),
            "trojan://日本語".to_string(),
            "trojan://@:443".to_string(),
            "VMESS://%%%".to_string(),
        ];

        for link in &hostile {
            assert!(explode(link).is_err(), "accepted {:?}", link);
        }
        assert!(matches!(
            normalize(&hostile.join("\n")),
            Err(ConvertError::EmptyResult)
        ));
    }

    #[test]
    fn test_vmess_ws_tls_reaches_yaml() {
        let link = format!(
            "vmess://{}",
            base64_encode(
                r#"{"v":"2","ps":"WS-TLS","add":"ws.example.com","port":"443","id":"b831381d-6324-4d53-ad4f-8cda48b30811","aid":"0","net":"ws","type":"none","host":"cdn.example.com","path":"/ray","tls":"tls"}"#
            )
        );

        let doc = assemble(normalize(&link).unwrap(), "Vmess");
        let value: serde_yaml::Value = serde_yaml::from_str(&serialize(&doc)).unwrap();
        let proxy = &value["proxies"][0];

        assert_eq!(proxy["name"], serde_yaml::Value::from("WS-TLS"));
        assert_eq!(proxy["type"], serde_yaml::Value::from("vmess"));
        assert_eq!(proxy["port"], serde_yaml::Value::from(443));
        assert_eq!(
            proxy["uuid"],
            serde_yaml::Value::from("b831381d-6324-4d53-ad4f-8cda48b30811")
        );
        assert_eq!(proxy["alterId"], serde_yaml::Value::from(0));
        assert_eq!(proxy["cipher"], serde_yaml::Value::from("auto"));
        assert_eq!(proxy["network"], serde_yaml::Value::from("ws"));
        assert_eq!(proxy["tls"], serde_yaml::Value::from(true));
        assert_eq!(proxy["ws-opts"]["path"], serde_yaml::Value::from("/ray"));
        assert_eq!(
            proxy["ws-opts"]["headers"]["Host"],
            serde_yaml::Value::from("cdn.example.com")
        );
        assert_eq!(
            value["proxy-groups"][1]["proxies"][0],
            serde_yaml::Value::from("WS-TLS")
        );
    }

    #[test]
    fn test_share_link_round_trip() {
        let doc = assemble(normalize(SCENARIO_BODY).unwrap(), "我的配置 🚀");
        let yaml = serialize(&doc);

        let link = build_share_link("https://sub.example.com/", &yaml);
        let segment = link
            .strip_prefix("https://sub.example.com/clash/")
            .unwrap();
        assert!(!segment.contains('/'));
        assert_eq!(decode_share_segment(segment).unwrap(), yaml);
    }
}
