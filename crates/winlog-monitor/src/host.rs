//! 호스트 포트 구현.
//!
//! `WindowEnumerator` / `SessionProbe`를 플랫폼 디스패치 함수에 위임한다.

use async_trait::async_trait;
use winlog_core::error::CoreError;
use winlog_core::models::WindowObservation;
use winlog_core::ports::{SessionProbe, WindowEnumerator};

/// 호스트 창 열거기 — `WindowEnumerator` 포트 구현
pub struct HostWindowEnumerator;

#[async_trait]
impl WindowEnumerator for HostWindowEnumerator {
    async fn enumerate_windows(&self) -> Result<Vec<WindowObservation>, CoreError> {
        // 어댑터가 실패를 빈 목록으로 흡수하므로 여기서는 에러가 나지 않는다
        Ok(crate::window::list_windows())
    }
}

/// 호스트 세션 프로브 — `SessionProbe` 포트 구현
pub struct HostSessionProbe;

#[async_trait]
impl SessionProbe for HostSessionProbe {
    async fn idle_duration_ms(&self) -> Option<u64> {
        crate::idle::get_idle_time_ms()
    }

    async fn screen_locked(&self) -> Option<bool> {
        crate::lock::get_screen_locked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn enumerate_windows_is_infallible() {
        let enumerator = HostWindowEnumerator;
        assert!(enumerator.enumerate_windows().await.is_ok());
    }

    #[tokio::test]
    async fn probe_returns_options() {
        let probe = HostSessionProbe;
        let _ = probe.idle_duration_ms().await;
        let _ = probe.screen_locked().await;
    }
}
