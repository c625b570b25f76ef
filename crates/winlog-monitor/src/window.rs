//! 열린 창 열거 (플랫폼 디스패치).

use winlog_core::models::WindowObservation;

/// 현재 열린 창 목록 조회
///
/// 순서는 호스트가 제공하는 스태킹/활성화 순서를 그대로 따른다.
/// 지원하지 않는 플랫폼이나 실패 시 빈 목록.
pub fn list_windows() -> Vec<WindowObservation> {
    #[cfg(target_os = "linux")]
    {
        crate::linux::list_windows_linux()
    }

    #[cfg(not(target_os = "linux"))]
    {
        // 기타 플랫폼: 미구현
        Vec::new()
    }
}
