use serial_test::serial;
use shoe_card::catalog::ColorToken;
use shoe_card::config::AppConfig;
use shoe_card::error::Error;
use std::env;
use std::fs;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("SHOE_CARD_SERVER__PORT");
        env::remove_var("SHOE_CARD_CATALOG__RECENCY_DAYS");
        env::remove_var("SHOE_CARD_CATALOG__CURRENCY_SYMBOL");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
    }
}

fn load(args: &[&str]) -> Result<AppConfig, Error> {
    let mut argv = vec!["shoe-card"];
    argv.extend_from_slice(args);
    AppConfig::load_from_args(argv)
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = load(&[]).expect("defaults should load");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.catalog.detail_prefix, "/shoe");
    assert_eq!(config.catalog.minor_units, 2);
    assert_eq!(config.catalog.recency_days, 30);
    assert_eq!(
        config.theme.color(ColorToken::Primary),
        Some("hsl(340deg 65% 47%)")
    );
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("SHOE_CARD_SERVER__PORT", "9090");
        env::set_var("SHOE_CARD_CATALOG__RECENCY_DAYS", "14");
    }

    let config = load(&[]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.catalog.recency_days, 14);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("SHOE_CARD_SERVER__PORT", "9090");
    }

    let config = load(&["--port", "7171", "--recency-days", "7"]).expect("Failed to load config");
    assert_eq!(config.server.port, 7171);
    assert_eq!(config.catalog.recency_days, 7);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("shoe-card.yaml");
    fs::write(
        &file_path,
        r#"
server:
  port: 7070
catalog:
  currency_symbol: "€"
  minor_units: 0
theme:
  primary: "crimson"
  gray:
    "700": "red"
"#,
    )
    .expect("Failed to write temp config");

    let config = load(&["--config", file_path.to_str().unwrap()])
        .expect("Failed to load config from file");

    assert_eq!(config.server.port, 7070);
    assert_eq!(config.catalog.currency_symbol, "€");
    assert_eq!(config.theme.primary, "crimson");
    // Untouched tokens keep their defaults.
    assert_eq!(config.theme.weights.bold, 800);
    assert_eq!(config.theme.color(ColorToken::Gray(700)), Some("red"));
    assert_eq!(
        config.theme.color(ColorToken::Gray(900)),
        Some("hsl(220deg 3% 20%)")
    );

    let env = config.card_env();
    assert_eq!(env.formatter.format_price(120.0), "€120");
    assert_eq!(env.router.detail_target("air-zoom").href(), "/shoe/air-zoom");
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.yaml"), "server:\n  port: 6060\n")
        .expect("Failed to write ./config.yaml");

    let original = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();
    let config = load(&[]);
    env::set_current_dir(original).unwrap();

    assert_eq!(config.expect("Failed to load config").server.port, 6060);
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    let result = load(&["--config", "/nonexistent/shoe-card.yaml"]);
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_negative_recency_rejected() {
    clear_env_vars();
    unsafe {
        env::set_var("SHOE_CARD_CATALOG__RECENCY_DAYS", "-3");
    }

    let result = load(&[]);
    assert!(matches!(result, Err(Error::InvalidSetting(_))));

    clear_env_vars();
}

#[test]
#[serial]
fn test_out_of_range_recency_rejected() {
    clear_env_vars();

    let result = load(&["--recency-days", "9223372036854775807"]);
    assert!(matches!(result, Err(Error::InvalidSetting(_))));
}
