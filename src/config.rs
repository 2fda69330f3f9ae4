//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::matcher::ComparatorKind;

/// 설정 파일 로드/저장 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 읽기/쓰기 실패
    Io(std::io::Error),
    /// JSON 파싱/직렬화 실패
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "설정 파일 입출력 오류: {}", e),
            ConfigError::Parse(s) => write!(f, "설정 파일 형식 오류: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

/// kstring 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KStringConfig {
    /// 검색에 사용할 기본 비교기
    #[serde(default)]
    pub comparator: ComparatorKind,
    /// 로그 필터 (env_logger 형식, RUST_LOG가 우선)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for KStringConfig {
    fn default() -> Self {
        Self {
            comparator: ComparatorKind::default(),
            log_level: default_log_level(),
        }
    }
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/kstring/config.json 또는 ~/.config/kstring/config.json
pub fn config_path() -> PathBuf {
    let valid_dir = |var: &str| {
        std::env::var(var)
            .ok()
            .map(PathBuf::from)
            .filter(|p| p.is_absolute() && p.is_dir())
    };

    let base = valid_dir("XDG_CONFIG_HOME")
        .or_else(|| valid_dir("HOME").map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    base.join("kstring").join("config.json")
}

/// 지정 경로에서 설정 읽기
pub fn read_config(path: &Path) -> Result<KStringConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> KStringConfig {
    let path = config_path();
    match read_config(&path) {
        Ok(config) => config,
        Err(ConfigError::Io(e)) => {
            log::debug!("설정 파일 없음 ({}): {}", path.display(), e);
            KStringConfig::default()
        }
        Err(e) => {
            log::warn!("설정 파일 무시, 기본값 사용: {}", e);
            KStringConfig::default()
        }
    }
}

/// 지정 경로에 설정 저장
pub fn write_config(path: &Path, config: &KStringConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json =
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::Parse(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

/// 설정 파일 저장
pub fn save_config(config: &KStringConfig) -> Result<(), ConfigError> {
    write_config(&config_path(), config)
}
