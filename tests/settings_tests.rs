use clash_subconverter::settings::settings::settings_struct::Settings;

#[cfg(test)]
mod settings_tests {
    use super::*;

    #[test]
    fn test_settings_toml() {
        let toml_content = r#"
[common]
log_level = "debug"
default_config_name = "Team Config"
fetch_timeout = 30
proxy_subscription = "http://127.0.0.1:8080"

[server]
listen_address = "0.0.0.0"
listen_port = 8080

[clash]
port = 7900
allow-lan = false
"#;

        let settings = Settings::load_from_content(toml_content).unwrap();

        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.default_config_name, "Team Config");
        assert_eq!(settings.fetch_timeout, 30);
        assert_eq!(settings.proxy_subscription, "http://127.0.0.1:8080");
        assert_eq!(settings.bind_address(), "0.0.0.0:8080");
        assert_eq!(settings.clash_general.port, 7900);
        assert!(!settings.clash_general.allow_lan);
        // Untouched keys keep their defaults
        assert_eq!(settings.clash_general.socks_port, 7891);
        assert_eq!(settings.clash_general.dns.enhanced_mode, "fake-ip");
        assert_eq!(settings.update_interval, 24);
    }

    #[test]
    fn test_settings_yaml() {
        let yaml_content = r#"
common:
  user_agent: "my-agent"
  update_interval: 12
clash:
  mode: global
  dns:
    nameserver:
      - 1.1.1.1
"#;

        let settings = Settings::load_from_content(yaml_content).unwrap();

        assert_eq!(settings.user_agent, "my-agent");
        assert_eq!(settings.update_interval, 12);
        assert_eq!(settings.clash_general.mode, "global");
        assert_eq!(settings.clash_general.dns.nameserver, vec!["1.1.1.1"]);
        assert_eq!(settings.default_config_name, "My Clash Config");
        assert_eq!(settings.bind_address(), "127.0.0.1:25500");
    }

    #[test]
    fn test_settings_empty_content_uses_defaults() {
        let settings = Settings::load_from_content("").unwrap();
        assert_eq!(settings.listen_port, 25500);
        assert_eq!(settings.fetch_timeout, 15);
        assert_eq!(settings.clash_general.port, 7890);
    }

    #[test]
    fn test_settings_invalid_content() {
        assert!(Settings::load_from_content("[common\nport: : :").is_err());
    }
}
