//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and working-directory manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use rvw_config::{ConfigError, RvwConfig};

#[test]
fn loads_convert_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[convert]
input = "data/tripadvisor.csv"
output = "app/data/reviewsData.js"
export_name = "tripReviews"
ascii_only = true
"#,
        )?;

        let config: RvwConfig = Figment::from(Serialized::defaults(RvwConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.convert.input, "data/tripadvisor.csv");
        assert_eq!(config.convert.output, "app/data/reviewsData.js");
        assert_eq!(config.convert.export_name, "tripReviews");
        assert!(config.convert.ascii_only);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[convert]
output = "out.js"
"#,
        )?;

        let config: RvwConfig = Figment::from(Serialized::defaults(RvwConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.convert.input, "reviews.csv");
        assert_eq!(config.convert.output, "out.js");
        assert_eq!(config.convert.export_name, "reviewsData");
        assert!(!config.convert.ascii_only);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_from_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "rvw.toml",
            r#"
[convert]
input = "local.csv"
"#,
        )?;

        let config = RvwConfig::from_figment(&RvwConfig::layered(
            None,
            std::path::Path::new(rvw_config::PROJECT_CONFIG_FILE),
        ))
        .expect("config loads");
        assert_eq!(config.convert.input, "local.csv");
        Ok(())
    });
}

#[test]
fn project_file_beats_global_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "global.toml",
            r#"
[convert]
input = "global.csv"
export_name = "globalName"
"#,
        )?;
        jail.create_file(
            "rvw.toml",
            r#"
[convert]
input = "local.csv"
"#,
        )?;

        let global = jail.directory().join("global.toml");
        let config =
            RvwConfig::from_figment(&RvwConfig::layered(Some(global), std::path::Path::new("rvw.toml")))
                .expect("config loads");

        assert_eq!(config.convert.input, "local.csv");
        assert_eq!(config.convert.export_name, "globalName");
        Ok(())
    });
}

#[test]
fn explicit_file_replaces_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file("rvw.toml", "[convert]\ninput = \"local.csv\"\n")?;
        jail.create_file("alt.toml", "[convert]\ninput = \"alt.csv\"\n")?;

        let config = RvwConfig::load_from_file(&jail.directory().join("alt.toml"))
            .expect("config loads");
        assert_eq!(config.convert.input, "alt.csv");
        Ok(())
    });
}

#[test]
fn invalid_export_name_in_toml_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("rvw.toml", "[convert]\nexport_name = \"class\"\n")?;

        let err = RvwConfig::from_figment(&RvwConfig::layered(None, std::path::Path::new("rvw.toml")))
            .expect_err("reserved word should fail");
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "convert.export_name"));
        Ok(())
    });
}

#[test]
fn malformed_toml_surfaces_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("rvw.toml", "[convert\ninput = ")?;

        let err = RvwConfig::from_figment(&RvwConfig::layered(None, std::path::Path::new("rvw.toml")))
            .expect_err("malformed toml should fail");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
