use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::report::{ReportFormat, ReportOptions};
use crate::roi::RoiParams;
use crate::substrate::SubstrateKind;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 보고서 관련 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub title: String,
    pub site_name: Option<String>,
    pub format: ReportFormat,
}

impl Default for ReportSettings {
    fn default() -> Self {
        let opts = ReportOptions::default();
        Self {
            title: opts.title,
            site_name: opts.site_name,
            format: ReportFormat::Text,
        }
    }
}

/// 애플리케이션 설정을 표현한다. `params`는 시작 시 화면에 채울 초기값이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub substrate: SubstrateKind,
    pub params: RoiParams,
    pub report: ReportSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            substrate: SubstrateKind::default(),
            params: RoiParams::baseline(),
            report: ReportSettings::default(),
        }
    }
}

impl Config {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            title: self.report.title.clone(),
            site_name: self.report.site_name.clone(),
            substrate: self.substrate,
        }
    }

    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml이 있으면 읽고, 없으면 기본 설정을 돌려준다. 파일을 새로 만들지는 않는다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_from(DEFAULT_CONFIG_PATH)
}

pub fn load_or_default_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        load_from(path)
    } else {
        log::debug!("{} 없음, 기본 설정 사용", path.display());
        Ok(Config::default())
    }
}

pub fn load_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    Ok(cfg)
}
