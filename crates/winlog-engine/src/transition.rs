//! 유휴/잠금 전이 감지.
//!
//! 틱마다 불리언 상태를 관측해 값이 뒤집힌 틱에서만 변경을 보고한다
//! (상태가 유지되는 동안에는 보고하지 않음). 초기 상태는 항상
//! "유휴 아님, 잠금 아님"이며 첫 관측은 변경으로 치지 않는다.

use std::time::Duration;

/// 불리언 에지 감지기
#[derive(Debug)]
pub struct EdgeDetector {
    state: bool,
}

impl EdgeDetector {
    /// false 상태로 시작하는 감지기 생성
    pub fn new() -> Self {
        Self { state: false }
    }

    /// 현재 값을 관측하고 직전 관측과 달라졌는지 반환
    pub fn observe(&mut self, current: bool) -> bool {
        let changed = current != self.state;
        self.state = current;
        changed
    }

    /// 마지막으로 관측된 상태
    pub fn current(&self) -> bool {
        self.state
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// 유휴 에지 감지기
///
/// 유휴 시간(밀리초)이 폴링 간격의 7/8을 넘으면 "유휴"로 판정한다.
/// 7/8 임계값은 폴링 타이밍 지터로 인한 간격 경계 근처의 거짓 유휴
/// 플립을 막으면서도 대략 한 간격 안에 실제 비활성을 감지한다.
#[derive(Debug)]
pub struct IdleEdge {
    threshold_ms: u64,
    inner: EdgeDetector,
}

impl IdleEdge {
    /// 폴링 간격으로부터 임계값을 유도해 감지기 생성
    pub fn for_interval(poll_interval: Duration) -> Self {
        Self {
            threshold_ms: poll_interval.as_millis() as u64 * 7 / 8,
            inner: EdgeDetector::new(),
        }
    }

    /// 유휴 시간을 관측하고 유휴 여부가 뒤집혔는지 반환
    ///
    /// 호스트 질의가 실패한 틱(None)은 변경 없음으로 보고하고 저장된
    /// 상태도 건드리지 않는다.
    pub fn observe(&mut self, idle_ms: Option<u64>) -> bool {
        match idle_ms {
            Some(ms) => self.inner.observe(ms > self.threshold_ms),
            None => false,
        }
    }

    /// 현재 유휴 상태
    pub fn is_idle(&self) -> bool {
        self.inner.current()
    }

    /// 유휴 판정 임계값 (밀리초)
    pub fn threshold_ms(&self) -> u64 {
        self.threshold_ms
    }
}

/// 잠금 에지 감지기
///
/// 잠금 상태를 조회할 수 없으면 false로 간주한다 (잠금 화면이 없는
/// 환경과 동일하게 취급).
#[derive(Debug, Default)]
pub struct LockEdge {
    inner: EdgeDetector,
}

impl LockEdge {
    /// 잠금 아님 상태로 시작하는 감지기 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 잠금 여부를 관측하고 뒤집혔는지 반환
    pub fn observe(&mut self, locked: Option<bool>) -> bool {
        self.inner.observe(locked.unwrap_or(false))
    }

    /// 현재 잠금 상태
    pub fn is_locked(&self) -> bool {
        self.inner.current()
    }
}
