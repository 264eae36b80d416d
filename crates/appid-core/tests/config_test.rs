use appid_core::config::loader::{ConfigError, ConfigLoader};
use appid_core::config::schema::{AppIdConfig, PolicyKind};
use appid_core::{FallbackPolicy, Platform, ResolveError};
use std::io::Write;
use tempfile::NamedTempFile;

// Reads ./appids.yaml and ~/.appid/config.yaml when present, so only the
// invariants every valid config shares are checked here.
#[tokio::test]
async fn test_default_config_loading() {
    let config = ConfigLoader::load_default()
        .await
        .expect("Failed to load default config");
    assert!(config.identifiers.get(Platform::Android).is_some());
    assert!(config.identifiers.get(Platform::Ios).is_some());
}

#[tokio::test]
async fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
fallback:
  policy: strict
identifiers:
  android: com.example.shop
  ios: com.example.Shop
"#
    )
    .unwrap();

    let config = ConfigLoader::load_from(file.path())
        .await
        .expect("Failed to load config from file");

    assert_eq!(config.fallback.policy, PolicyKind::Strict);
    assert_eq!(
        config.identifiers.get(Platform::Android),
        Some("com.example.shop")
    );

    let resolver = config.into_resolver().unwrap();
    assert_eq!(resolver.resolve("ios").unwrap(), "com.example.Shop");
    assert_eq!(
        resolver.resolve("windows"),
        Err(ResolveError::UnknownPlatform("windows".to_string()))
    );
}

#[test]
fn test_default_values() {
    let config = AppIdConfig::default();
    assert_eq!(config.fallback.policy, PolicyKind::Default);
    assert_eq!(config.fallback.platform, Platform::Ios);
    assert_eq!(
        config.fallback.to_policy(),
        FallbackPolicy::Default(Platform::Ios)
    );
    assert_eq!(
        config.identifiers.get(Platform::Android),
        Some("io.appium.android.apis")
    );
    assert_eq!(
        config.identifiers.get(Platform::Ios),
        Some("com.example.apple-samplecode.UICatalog")
    );
}

#[tokio::test]
async fn test_force_strict_overrides_default_policy() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
fallback:
  policy: default
  platform: ios
"#
    )
    .unwrap();

    let mut config = ConfigLoader::load_from(file.path()).await.unwrap();
    assert_eq!(config.fallback.policy, PolicyKind::Default);

    config.fallback.force_strict();
    assert_eq!(config.fallback.to_policy(), FallbackPolicy::Strict);

    let resolver = config.into_resolver().unwrap();
    assert_eq!(
        resolver.resolve("windows"),
        Err(ResolveError::UnknownPlatform("windows".to_string()))
    );
    assert_eq!(
        resolver.resolve_optional(None),
        Err(ResolveError::MissingPlatform)
    );
    assert_eq!(
        resolver.resolve("android").unwrap(),
        "io.appium.android.apis"
    );
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_load_from_nonexistent_file() {
    let result =
        ConfigLoader::load_from(std::path::Path::new("/nonexistent/path/appids.yaml")).await;
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[tokio::test]
async fn test_load_from_invalid_yaml() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{{invalid yaml: [unclosed").unwrap();

    let result = ConfigLoader::load_from(file.path()).await;
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[tokio::test]
async fn test_load_from_empty_file() {
    let file = NamedTempFile::new().unwrap();

    let config = ConfigLoader::load_from(file.path())
        .await
        .expect("Empty file should load builtin config");
    assert_eq!(config.identifiers.len(), 2);
}

#[tokio::test]
async fn test_load_from_partial_config() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
fallback:
  platform: android
"#
    )
    .unwrap();

    let config = ConfigLoader::load_from(file.path())
        .await
        .expect("Should load partial config");

    assert_eq!(config.fallback.platform, Platform::Android);
    assert_eq!(config.fallback.policy, PolicyKind::Default);
    assert_eq!(
        config.identifiers.get(Platform::Ios),
        Some("com.example.apple-samplecode.UICatalog")
    );
}

#[tokio::test]
async fn test_load_with_unknown_platform_key() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
fallback:
  platform: windows
"#
    )
    .unwrap();

    let result = ConfigLoader::load_from(file.path()).await;
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[tokio::test]
async fn test_load_with_missing_identifier() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
identifiers:
  android: io.appium.android.apis
"#
    )
    .unwrap();

    // The identifiers map replaces the builtin one as a whole.
    let result = ConfigLoader::load_from(file.path()).await;
    assert!(matches!(
        result,
        Err(ConfigError::MissingIdentifier(Platform::Ios))
    ));
}

#[tokio::test]
async fn test_load_with_blank_identifier() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
identifiers:
  android: ""
  ios: com.example.apple-samplecode.UICatalog
"#
    )
    .unwrap();

    let result = ConfigLoader::load_from(file.path()).await;
    assert!(matches!(
        result,
        Err(ConfigError::MissingIdentifier(Platform::Android))
    ));
}
