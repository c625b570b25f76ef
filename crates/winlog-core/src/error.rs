//! WINLOG 핵심 에러 타입.
//!
//! 호스트 질의 실패(유휴 시간, 잠금 상태, 창 열거, cmdline)는 에러가 아니라
//! 안전한 기본값으로 어댑터 경계에서 흡수된다. `CoreError`는 직렬화/설정/IO 등
//! 실제로 전파할 가치가 있는 실패만 표현한다.

use thiserror::Error;

/// 코어 레이어 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),

    /// 내부 에러 (예상치 못한 상황)
    #[error("내부 에러: {0}")]
    Internal(String),
}
