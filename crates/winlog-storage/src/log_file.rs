//! JSONL 로그 파일 싱크.
//!
//! `LogSink` 포트 구현. 레코드를 한 줄로 직렬화해 파일 끝에 추가한다.
//! 저장 실패는 best-effort로 흡수된다 — 기록 한 건의 실패가 폴링 루프를
//! 위협해서는 안 되며, 유일한 외부 증상은 조용히 빠진 로그 줄이다.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use winlog_core::error::CoreError;
use winlog_core::models::LogRecord;
use winlog_core::ports::LogSink;

/// append-only JSONL 파일
pub struct JsonlLogFile {
    path: PathBuf,
}

impl JsonlLogFile {
    /// 지정 경로의 로그 파일 싱크 생성 (파일은 첫 기록 시 생성)
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// 로그 파일 경로
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl LogSink for JsonlLogFile {
    async fn append(&self, record: &LogRecord) -> Result<(), CoreError> {
        // 직렬화 실패는 내부 버그이므로 전파 (틱 경계에서 잡혀 로깅됨)
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        // 디렉토리 생성은 best-effort — 이미 존재하는 것이 정상 경로
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent).await {
                debug!("로그 디렉토리 생성 실패 (무시): {}: {}", parent.display(), e);
            }
        }

        let mut file = match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
        {
            Ok(file) => file,
            Err(e) => {
                warn!("로그 파일 열기 실패: {}: {}", self.path.display(), e);
                return Ok(());
            }
        };

        if let Err(e) = file.write_all(line.as_bytes()).await {
            warn!("로그 기록 실패: {}: {}", self.path.display(), e);
        }
        Ok(())
    }
}
