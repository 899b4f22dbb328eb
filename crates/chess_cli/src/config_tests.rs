use super::*;

#[test]
fn test_defaults() {
    let config = CliConfig::default();
    assert_eq!(config.depth, 6);
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.human_plays_white, None);
    assert_eq!(CliConfig::load(None).unwrap(), config);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let config = CliConfig::from_toml("depth = 3\n").unwrap();
    assert_eq!(config.depth, 3);
    assert_eq!(config.log_level, "warn");

    let empty = CliConfig::from_toml("").unwrap();
    assert_eq!(empty, CliConfig::default());
}

#[test]
fn test_full_file() {
    let text = r#"
depth = 4
log_level = "minimax_engine=debug"
human_plays_white = false
"#;
    let config = CliConfig::from_toml(text).unwrap();
    assert_eq!(
        config,
        CliConfig {
            depth: 4,
            log_level: "minimax_engine=debug".to_string(),
            human_plays_white: Some(false),
        }
    );
}

#[test]
fn test_rejects_bad_files() {
    assert!(CliConfig::from_toml("depth = 0").is_err());
    assert!(CliConfig::from_toml("depth = 11").is_err());
    assert!(CliConfig::from_toml("depth = \"six\"").is_err());
    assert!(CliConfig::from_toml("threads = 4").is_err());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let err = CliConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
    assert!(err.to_string().contains("failed to read config"));
}

#[test]
fn test_overrides() {
    let config = CliConfig::default()
        .with_overrides(Some(2), Some(true))
        .unwrap();
    assert_eq!(config.depth, 2);
    assert_eq!(config.human_plays_white, Some(true));

    let untouched = CliConfig::from_toml("human_plays_white = false")
        .unwrap()
        .with_overrides(None, None)
        .unwrap();
    assert_eq!(untouched.human_plays_white, Some(false));

    assert!(CliConfig::default().with_overrides(Some(42), None).is_err());
}

#[test]
fn test_roundtrips_through_toml() {
    let config = CliConfig {
        depth: 5,
        log_level: "info".to_string(),
        human_plays_white: Some(true),
    };
    let text = toml::to_string(&config).unwrap();
    assert_eq!(CliConfig::from_toml(&text).unwrap(), config);
}
