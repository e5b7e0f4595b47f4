use super::*;

#[test]
fn port_label_uses_private_public_type_order() {
    let p = PortMapping::new(80, 8080, "tcp", "0.0.0.0");
    assert_eq!(p.label(), "80 -> 8080 tcp");
}

#[test]
fn ipv6_wildcard_ports_are_left_out_of_the_summary() {
    let c = ContainerRecord::new(
        "nginx",
        vec![
            PortMapping::new(80, 8080, "tcp", "0.0.0.0"),
            PortMapping::new(80, 8080, "tcp", "::"),
            PortMapping::new(443, 8443, "tcp", "127.0.0.1"),
        ],
    );
    assert_eq!(c.port_summary(), "80 -> 8080 tcp, 443 -> 8443 tcp");
    assert_eq!(c.listed_ports().count(), 2);
}

#[test]
fn container_without_ports_has_empty_summary() {
    let c = ContainerRecord::new("redis", Vec::new());
    assert_eq!(c.port_summary(), "");
}

#[test]
fn display_name_strips_leading_slash() {
    let mut c = ContainerRecord::new("redis", Vec::new());
    assert_eq!(c.display_name(), None);
    c.names = vec!["/cache".to_string(), "/alias".to_string()];
    assert_eq!(c.display_name(), Some("cache"));
}

#[test]
fn short_id_truncates_to_twelve_chars() {
    let mut c = ContainerRecord::default();
    c.id = "0123456789abcdef0123".to_string();
    assert_eq!(c.short_id(), "0123456789ab");
    c.id = "abc".to_string();
    assert_eq!(c.short_id(), "abc");
}

#[test]
fn records_deserialize_with_missing_fields() {
    let json = r#"{"image":"nginx","ports":[{"private_port":80,"public_port":8080,"type":"tcp","bind_address":"0.0.0.0"}]}"#;
    let c: ContainerRecord = serde_json::from_str(json).unwrap();
    assert_eq!(c.image, "nginx");
    assert_eq!(c.ports[0].kind, "tcp");
    assert!(c.names.is_empty());
}
