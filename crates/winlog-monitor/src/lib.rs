//! # winlog-monitor
//!
//! 호스트 세션 어댑터.
//! 열린 창 목록, 유휴 시간, 화면 잠금 상태, 프로세스 커맨드라인을 수집한다.
//! 모든 질의는 best-effort — 도구 부재나 실패는 빈 목록/None으로 흡수된다.

pub mod host;
pub mod idle;
pub mod lock;
pub mod process;
pub mod window;

#[cfg(target_os = "linux")]
pub mod linux;
