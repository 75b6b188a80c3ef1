//! config.toml 로드/저장 테스트.
use flexo_roi::config::{load_from, load_or_default_from, Config, ConfigError};
use flexo_roi::report::ReportFormat;
use flexo_roi::roi::RoiParams;
use flexo_roi::substrate::SubstrateKind;

#[test]
fn missing_file_gives_defaults_without_writing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = load_or_default_from(&path).expect("defaults");
    assert_eq!(cfg, Config::default());
    assert!(!path.exists());
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.substrate = SubstrateKind::Polyester;
    cfg.params.haas_price = 18_000.0;
    cfg.report.site_name = Some("Line 3".to_string());
    cfg.report.format = ReportFormat::Markdown;
    cfg.save_to(&path).expect("save");
    assert_eq!(load_from(&path).expect("load"), cfg);
}

#[test]
fn partial_file_fills_missing_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
substrate = "paper"

[params]
web_width_m = 0.25
"#,
    )
    .expect("write");
    let cfg = load_from(&path).expect("load");
    assert_eq!(cfg.substrate, SubstrateKind::PaperLabel);
    assert_eq!(cfg.params.web_width_m, 0.25);
    assert_eq!(cfg.params.haas_price, RoiParams::baseline().haas_price);
    assert_eq!(cfg.report.format, ReportFormat::Text);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "params = [").expect("write");
    assert!(matches!(load_from(&path), Err(ConfigError::Serde(_))));
}
