//! 호스트 세션 포트.
//!
//! 구현: `winlog-monitor` crate (외부 도구 호출 + sysinfo)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::WindowObservation;

/// 열린 창 열거
#[async_trait]
pub trait WindowEnumerator: Send + Sync {
    /// 현재 열린 창 목록 조회 (호스트 제공 순서 유지)
    ///
    /// 핸들을 확인할 수 없는 창은 목록에서 빠진다. 열거 자체가 실패해도
    /// 폴링 루프가 멈추면 안 되므로 구현은 가급적 빈 목록으로 흡수한다.
    async fn enumerate_windows(&self) -> Result<Vec<WindowObservation>, CoreError>;
}

/// 유휴/잠금 상태 조회
#[async_trait]
pub trait SessionProbe: Send + Sync {
    /// 마지막 사용자 입력 이후 경과 시간 (밀리초, 조회 실패 시 None)
    async fn idle_duration_ms(&self) -> Option<u64>;

    /// 화면 잠금 여부 (조회 불가 시 None)
    async fn screen_locked(&self) -> Option<bool>;
}

/// PID → 프로세스 커맨드라인 조회
pub trait CommandResolver: Send + Sync {
    /// 커맨드라인 문자열 조회
    ///
    /// 프로세스가 이미 종료되었거나 조회가 실패하면 None. 절대 패닉하지 않는다.
    fn command_line(&self, pid: u32) -> Option<String>;
}
