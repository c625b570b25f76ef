//! 로그 저장소 포트.
//!
//! 구현: `winlog-storage` crate (append-only JSONL 파일)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::LogRecord;

/// append-only 레코드 싱크
#[async_trait]
pub trait LogSink: Send + Sync {
    /// 레코드 한 건을 한 줄로 추가
    ///
    /// 저장 실패는 best-effort로 흡수되어야 한다 — 한 번의 기록 실패가
    /// 폴링 루프를 중단시키거나 다음 틱을 건너뛰게 해서는 안 된다.
    async fn append(&self, record: &LogRecord) -> Result<(), CoreError>;
}
