//! # winlog-engine
//!
//! 스냅샷 비교/식별자 해싱 엔진.
//! 틱마다 호스트 관측값을 스냅샷으로 빌드하고, 유휴/잠금 전이를 감지하며,
//! 변경 게이트를 통과한 경우에만 최소한의 로그 레코드를 생성한다.
//! 호스트 접근이 전혀 없는 순수 로직 — 모든 입력은 값으로 주입된다.

pub mod gate;
pub mod identity;
pub mod session;
pub mod snapshot;
pub mod transition;

pub use session::SessionRecorder;
