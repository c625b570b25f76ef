//! 포트 정의 (hexagonal architecture).
//!
//! 코어는 호스트 데스크톱 환경과 저장소를 좁은 trait 경계로만 접근한다.

pub mod host;
pub mod sink;

pub use host::{CommandResolver, SessionProbe, WindowEnumerator};
pub use sink::LogSink;
