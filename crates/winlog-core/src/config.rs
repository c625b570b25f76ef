//! 애플리케이션 설정 구조체.
//!
//! 폴링 주기와 로그 파일 경로 등 런타임 설정을 정의한다.
//! `ConfigManager`를 통해 JSON 파일에서 로드/저장.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// 기본 로그 파일 이름
pub const DEFAULT_LOG_FILE_NAME: &str = "window-logger.log";

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 모니터링 설정
    #[serde(default)]
    pub monitor: MonitorConfig,
    /// 로그 저장소 설정
    #[serde(default)]
    pub storage: StorageConfig,
}

/// 모니터링 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// 폴링 간격 (초)
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

/// 로그 저장소 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// 로그 파일 경로 (None이면 플랫폼 기본 경로)
    #[serde(default)]
    pub log_path: Option<PathBuf>,
}

fn default_poll_interval_secs() -> u64 {
    1
}

impl AppConfig {
    /// 기본 설정 생성
    pub fn default_config() -> Self {
        Self::default()
    }

    /// 폴링 간격
    pub fn poll_interval(&self) -> Duration {
        // 0초 설정은 busy-loop가 되므로 기본값으로 되돌린다
        let secs = self.monitor.poll_interval_secs.max(1);
        Duration::from_secs(secs)
    }

    /// 로그 파일 경로 결정 (설정값 또는 플랫폼 기본 경로)
    ///
    /// 기본: `<로컬 데이터 디렉토리>/window-logger.log`
    /// (Linux: `~/.local/share/window-logger.log` — 오프라인 분석 도구의
    /// 기본 경로와 일치해야 한다)
    pub fn resolve_log_path(&self) -> PathBuf {
        if let Some(ref path) = self.storage.log_path {
            return path.clone();
        }
        directories::BaseDirs::new()
            .map(|dirs| dirs.data_local_dir().join(DEFAULT_LOG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE_NAME))
    }
}
