use super::*;
use tempfile::tempdir;

#[test]
fn missing_fields_take_defaults() {
    let s: Settings = serde_json::from_str(r#"{"all": true}"#).unwrap();
    assert!(s.all);
    assert_eq!(s.timeout_secs, 10);
    assert!(s.enable_mouse);
    assert_eq!(s.docker_host, None);
}

#[test]
fn no_files_means_defaults() {
    let dir = tempdir().unwrap();
    let absent = dir.path().join("settings.json");
    let s = load_settings_from(None, Some(absent)).unwrap();
    assert_eq!(s, Settings::default());

    let s = load_settings_from(None, None).unwrap();
    assert_eq!(s, Settings::default());
}

#[test]
fn explicit_file_is_loaded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.json");
    std::fs::write(&path, r#"{"docker_host":"tcp://10.0.0.2:2375","timeout_secs":3}"#).unwrap();

    let s = load_settings_from(Some(path), None).unwrap();
    assert_eq!(s.docker_host.as_deref(), Some("tcp://10.0.0.2:2375"));
    assert_eq!(s.timeout_secs, 3);
}

#[test]
fn explicit_file_must_exist_and_parse() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(matches!(
        load_settings_from(Some(missing), None),
        Err(ConfigError::Io { .. })
    ));

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{ not json").unwrap();
    let err = load_settings_from(Some(broken.clone()), None).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(&broken.display().to_string()));
}

#[test]
fn broken_default_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "[1, 2").unwrap();

    let s = load_settings_from(None, Some(path)).unwrap();
    assert_eq!(s, Settings::default());
}
