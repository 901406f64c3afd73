//! Tests for configuration layering and validation.

use std::path::Path;

use figment::Jail;

use crate::config::{ConfigError, GraphkitConfig, LogFormat, OutputFormat};
use crate::graph::Direction;

#[test]
fn test_defaults_without_file() {
    Jail::expect_with(|_jail| {
        let config = GraphkitConfig::load(None).map_err(|e| e.to_string())?;
        assert_eq!(config, GraphkitConfig::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.input.direction, Direction::Undirected);
        assert_eq!(config.input.comment_prefix, "#");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.precision, 2);
        Ok(())
    });
}

#[test]
fn test_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "graphkit.toml",
            r#"
            [input]
            direction = "directed"
            comment_prefix = "%"

            [output]
            format = "json"
            "#,
        )?;
        let config = GraphkitConfig::load(None).map_err(|e| e.to_string())?;
        assert_eq!(config.input.direction, Direction::Directed);
        assert_eq!(config.input.comment_prefix, "%");
        assert_eq!(config.output.format, OutputFormat::Json);
        // Keys absent from the file keep their defaults.
        assert_eq!(config.input.symbol_delimiter, " ");
        assert_eq!(config.output.precision, 2);
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("graphkit.toml", "[output]\nprecision = 3\n")?;
        jail.set_env("GRAPHKIT_OUTPUT__PRECISION", "5");
        jail.set_env("GRAPHKIT_LOGGING__FORMAT", "compact");
        let config = GraphkitConfig::load(None).map_err(|e| e.to_string())?;
        assert_eq!(config.output.precision, 5);
        assert_eq!(config.logging.format, LogFormat::Compact);
        Ok(())
    });
}

#[test]
fn test_explicit_path() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[logging]\nlevel = \"debug\"\n")?;
        let config =
            GraphkitConfig::load(Some(Path::new("custom.toml"))).map_err(|e| e.to_string())?;
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn test_explicit_missing_path_is_error() {
    let err = GraphkitConfig::load(Some(Path::new("/nonexistent/graphkit.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
    assert!(err.to_string().contains("/nonexistent/graphkit.toml"));
}

#[test]
fn test_wrong_type_is_load_error() {
    Jail::expect_with(|jail| {
        jail.create_file("graphkit.toml", "[output]\nprecision = \"many\"\n")?;
        let err = GraphkitConfig::load(None).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
        Ok(())
    });
}

#[test]
fn test_validation_rejects_bad_values() {
    let mut config = GraphkitConfig::default();
    config.input.comment_prefix.clear();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "input.comment_prefix"));

    let mut config = GraphkitConfig::default();
    config.logging.level = "loud".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("logging.level"));

    let mut config = GraphkitConfig::default();
    config.output.precision = 40;
    assert!(config.validate().is_err());

    let mut config = GraphkitConfig::default();
    config.input.max_vertices = 0;
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "input.max_vertices"));
}

#[test]
fn test_invalid_file_value_fails_load() {
    Jail::expect_with(|jail| {
        jail.create_file("graphkit.toml", "[input]\nsymbol_delimiter = \"\"\n")?;
        let err = GraphkitConfig::load(None).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        Ok(())
    });
}

#[test]
fn test_level_filter_parsing() {
    let mut config = GraphkitConfig::default();
    config.logging.level = "WARN".to_string();
    assert_eq!(
        config.logging.level_filter().unwrap(),
        tracing::level_filters::LevelFilter::WARN
    );
}

#[test]
fn test_to_toml_round_trips() {
    let mut config = GraphkitConfig::default();
    config.input.direction = Direction::Directed;
    config.output.precision = 4;

    let rendered = config.to_toml().unwrap();
    assert!(rendered.contains("[input]"));
    assert!(rendered.contains("direction = \"directed\""));

    let parsed: GraphkitConfig = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_edge_list_options_from_input() {
    let mut config = GraphkitConfig::default();
    config.input.direction = Direction::Directed;
    config.input.comment_prefix = "//".to_string();
    config.input.max_vertices = 100;

    let options = config.input.edge_list_options();
    assert_eq!(options.direction, Direction::Directed);
    assert_eq!(options.comment_prefix, "//");
    assert_eq!(options.max_vertices, 100);
}
