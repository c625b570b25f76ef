//! 화면 잠금 상태 조회 (플랫폼 디스패치).

/// 화면 잠금 여부 조회
///
/// 조회 불가 시 None — 호출자는 잠금 아님으로 취급한다.
pub fn get_screen_locked() -> Option<bool> {
    #[cfg(target_os = "linux")]
    {
        crate::linux::get_screen_locked_linux()
    }

    #[cfg(not(target_os = "linux"))]
    {
        // 기타 플랫폼: 미구현
        None
    }
}
