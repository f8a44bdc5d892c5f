use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use surfconv::generator::sanitize_name;
use surfconv::parser::explode;
use surfconv::{convert, DecodeError, Protocol, SurfboardSettings};

fn vmess_link(json: &str) -> String {
    format!("vmess://{}", STANDARD.encode(json))
}

fn section<'a>(document: &'a str, header: &str) -> Vec<&'a str> {
    document
        .split("\n\n")
        .map(str::trim_start)
        .find(|block| block.starts_with(header))
        .map(|block| block.lines().skip(1).filter(|l| !l.is_empty()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod conversion_tests {
    use super::*;

    #[test]
    fn test_ss_scenario() {
        let node = explode("ss://YWVzLTI1Ni1nY206cGFzc3dvcmQ=@example.com:8388#MyNode")
            .unwrap()
            .unwrap();

        assert_eq!(node.protocol, Protocol::Shadowsocks);
        assert_eq!(node.display_name, "MyNode");
        assert_eq!(node.address, "example.com");
        assert_eq!(node.port, 8388);
        assert_eq!(node.field("encrypt-method"), Some("aes-256-gcm"));
        assert_eq!(node.field("password"), Some("password"));
    }

    #[test]
    fn test_vmess_ws_scenario() {
        let link = vmess_link(
            r#"{"ps":"A","add":"1.2.3.4","port":"443","id":"uuid","net":"ws","path":"/p","host":"h.com","tls":"tls"}"#,
        );
        let conversion = convert(&link, &SurfboardSettings::default());
        let proxies = section(&conversion.document, "[Proxy]");

        assert_eq!(proxies.len(), 1);
        let line = proxies[0];
        assert!(line.starts_with("A_1 = vmess, 1.2.3.4, 443, username=uuid"));
        assert!(line.contains("ws=true"));
        assert!(line.contains("ws-path=/p"));
        assert!(line.contains("ws-headers=Host:h.com"));
        assert!(line.contains("tls=true"));
    }

    #[test]
    fn test_garbled_line_is_skipped_and_reported() {
        let input = "vmess://eyJwcyI6IkEiLCJhZGQi\nss://YWVzLTI1Ni1nY206cGFzc3dvcmQ=@example.com:8388#MyNode\n";
        let conversion = convert(input, &SurfboardSettings::default());

        assert_eq!(conversion.nodes.len(), 1);
        assert_eq!(conversion.nodes[0].display_name, "MyNode_1");
        assert_eq!(conversion.diagnostics.len(), 1);
        assert_eq!(conversion.diagnostics[0].line, 1);
        assert!(matches!(
            conversion.diagnostics[0].error,
            DecodeError::Json(_) | DecodeError::Base64(_)
        ));
        assert_eq!(
            section(&conversion.document, "[Proxy]"),
            vec!["MyNode_1 = ss, example.com, 8388, encrypt-method=aes-256-gcm, password=password"]
        );
    }

    #[test]
    fn test_unsupported_scheme_is_reported() {
        let input = "hysteria2://pw@example.com:443\ntrojan://pw@example.com:443#ok";
        let conversion = convert(input, &SurfboardSettings::default());

        assert_eq!(conversion.nodes.len(), 1);
        assert_eq!(conversion.diagnostics.len(), 1);
        assert!(matches!(
            &conversion.diagnostics[0].error,
            DecodeError::UnsupportedScheme(s) if s.starts_with("hysteria2://")
        ));
    }

    #[test]
    fn test_empty_input() {
        for input in ["", "\n\n   \n"] {
            let conversion = convert(input, &SurfboardSettings::default());

            assert!(conversion.nodes.is_empty());
            assert!(conversion.diagnostics.is_empty());
            assert!(section(&conversion.document, "[Proxy]").is_empty());
            assert_eq!(
                section(&conversion.document, "[Proxy Group]"),
                vec![
                    "🌏 自动选择 = url-test, url=http://www.gstatic.com/generate_204, interval=300, tolerance=100",
                    "🔄 故障切换 = fallback, url=http://www.gstatic.com/generate_204, interval=300",
                    "🚀 节点选择 = select, 🌏 自动选择, 🔄 故障切换, DIRECT",
                    "🚫 广告拦截 = select, REJECT, DIRECT",
                ]
            );
            assert_eq!(
                section(&conversion.document, "[Rule]").last(),
                Some(&"FINAL,🚀 节点选择")
            );
        }
    }

    #[test]
    fn test_names_are_unique_and_ordered() {
        let input = [
            "trojan://pw@a.example:443#same",
            "trojan://pw@b.example:443#same",
            "vless://id@c.example:443?security=tls#same",
            "ss://YWVzLTI1Ni1nY206cGFzc3dvcmQ=@d.example:8388",
            "trojan://pw@e.example:443#%F0%9F%87%AD%F0%9F%87%B0%20%E9%A6%99%E6%B8%AF%2001",
        ]
        .join("\n");
        let conversion = convert(&input, &SurfboardSettings::default());

        let names: Vec<_> = conversion
            .nodes
            .iter()
            .map(|n| n.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["same_1", "same_2", "same_3", "ss_4", "香港_01_5"]);

        let proxies = section(&conversion.document, "[Proxy]");
        assert_eq!(proxies.len(), names.len());
        for (line, name) in proxies.iter().zip(&names) {
            assert!(line.starts_with(&format!("{} = ", name)));
        }

        let manual = section(&conversion.document, "[Proxy Group]")[2];
        assert_eq!(
            manual,
            "🚀 节点选择 = select, same_1, same_2, same_3, ss_4, 香港_01_5, 🌏 自动选择, 🔄 故障切换, DIRECT"
        );
    }

    #[test]
    fn test_no_empty_fields_rendered() {
        let input = [
            vmess_link(r#"{"ps":"","add":"v.example","port":443,"id":"x","scy":"","net":"grpc","path":"","host":"","sni":"","alpn":"","fp":""}"#),
            "trojan://pw@t.example:443?alpn=&fp=#".to_string(),
            "vless://id@l.example:443?flow=&security=tls&sni=".to_string(),
        ]
        .join("\n");
        let conversion = convert(&input, &SurfboardSettings::default());
        assert_eq!(conversion.nodes.len(), 3);

        for line in section(&conversion.document, "[Proxy]") {
            for column in line.split(", ").skip(3) {
                let (key, value) = column.split_once('=').unwrap();
                assert!(!key.is_empty(), "line: {}", line);
                assert!(!value.is_empty(), "empty {} in line: {}", key, line);
            }
        }
    }

    #[test]
    fn test_decoded_fields_survive_rendering() {
        let input = [
            vmess_link(r#"{"ps":"v","add":"v.example","port":"10086","id":"id-v","aid":"2","scy":"aes-128-gcm","net":"h2","path":"/x","host":"hh.example","tls":"tls","alpn":"h2","fp":"safari"}"#),
            "trojan://secret@t.example:8443?peer=p.example&alpn=h2&fp=firefox&allowInsecure=1#t".to_string(),
            "vless://id-l@l.example:2053?security=reality&pbk=abc&sid=01&type=grpc&serviceName=svc#l".to_string(),
            "ss://YWVzLTEyOC1nY206cHc@s.example:443?plugin=obfs-local%3Bobfs%3Dtls%3Bobfs-host%3Dh.example#s".to_string(),
        ]
        .join("\n");
        let conversion = convert(&input, &SurfboardSettings::default());
        let proxies = section(&conversion.document, "[Proxy]");
        assert_eq!(proxies.len(), 4);

        for (node, line) in conversion.nodes.iter().zip(&proxies) {
            assert!(line.contains(&format!(", {}, {}", node.address, node.port)));
            for (key, value) in node.fields.iter() {
                assert!(
                    line.contains(&format!(", {}={}", key, value)),
                    "{}={} missing from {}",
                    key,
                    value,
                    line
                );
            }
        }

        let vless = &conversion.nodes[2];
        assert_eq!(vless.field("serviceName"), Some("svc"));
        assert_eq!(vless.field("pbk"), Some("abc"));
        let ss = &conversion.nodes[3];
        assert_eq!(ss.field("obfs"), Some("tls"));
        assert_eq!(ss.field("obfs-host"), Some("h.example"));
    }

    #[test]
    fn test_sanitize_idempotent_over_link_labels() {
        let labels = [
            "🇺🇸 US | 01",
            "日本 Tokyo #2",
            "name=with,separators",
            "tab\tand\nnewline",
            "%E4%B8%AD%E5%9B%BD%20%F0%9F%9A%80",
            "___",
            "plain-name",
        ];
        for label in labels {
            let encoded = urlencoding::encode(label);
            let once = sanitize_name(&encoded);
            assert_eq!(sanitize_name(&once), once);
            assert!(!once.is_empty());
            assert!(!once.contains(['=', ',', ' ']));
        }
    }

    #[test]
    fn test_values_can_not_inject_sections() {
        let input = [
            vmess_link(r#"{"ps":"v","add":"v.example","port":"443","id":"x","net":"ws","path":"/p\n[Rule]\nFINAL,DIRECT"}"#),
            "trojan://pw@t.example:443?sni=s.example%0A%5BRule%5D%0AFINAL,DIRECT#t".to_string(),
            "ss://YWVzLTI1Ni1nY206cGFzc3dvcmQ=@s.example:8388?plugin=obfs-local%3Bobfs%3Dhttp%3Bobfs-host%3Dh.example%0A%5BRule%5D#s".to_string(),
        ]
        .join("\n");
        let conversion = convert(&input, &SurfboardSettings::default());

        assert_eq!(conversion.nodes.len(), 2);
        assert_eq!(conversion.diagnostics.len(), 1);
        assert_eq!(conversion.diagnostics[0].line, 1);
        assert_eq!(
            conversion
                .document
                .lines()
                .filter(|line| *line == "[Rule]")
                .count(),
            1
        );
        assert_eq!(section(&conversion.document, "[Proxy]").len(), 2);
        assert!(!conversion.document.contains("\nFINAL,DIRECT\n"));
    }

    #[test]
    fn test_crlf_input() {
        let input = "trojan://pw@a.example:443#a\r\n\r\ntrojan://pw@b.example:443#b\r\n";
        let conversion = convert(input, &SurfboardSettings::default());
        assert_eq!(conversion.nodes.len(), 2);
        assert!(conversion.diagnostics.is_empty());
        assert_eq!(conversion.nodes[1].display_name, "b_2");
    }
}
