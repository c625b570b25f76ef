//! 유휴 시간 조회 (플랫폼 디스패치).

/// 마지막 사용자 입력 이후 경과 시간 조회 (밀리초)
///
/// 플랫폼 미지원 또는 질의 실패 시 None — 호출자는 해당 틱을
/// "변경 없음"으로 처리한다.
pub fn get_idle_time_ms() -> Option<u64> {
    #[cfg(target_os = "linux")]
    {
        crate::linux::get_idle_time_ms_linux()
    }

    #[cfg(not(target_os = "linux"))]
    {
        // 기타 플랫폼: 미구현
        None
    }
}
