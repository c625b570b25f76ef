//! 세션 레코더 — 틱 단위 상태 기계.
//!
//! 한 enable/disable 사이클의 가변 상태(레지스트리, seen-set, 에지 감지기,
//! 게이트 지문)를 전부 소유한다. enable 시 새 인스턴스를 만들고 disable 시
//! 통째로 버린다 — 제자리 리셋으로 인한 stale 참조 버그를 피한다.

use std::time::Duration;

use tracing::debug;
use winlog_core::error::CoreError;
use winlog_core::models::{LogRecord, WindowObservation};
use winlog_core::ports::CommandResolver;

use crate::gate::{fingerprint, ChangeGate};
use crate::identity::TitleRegistry;
use crate::snapshot::SnapshotBuilder;
use crate::transition::{IdleEdge, LockEdge};

/// 세션 레코더
pub struct SessionRecorder {
    registry: TitleRegistry,
    builder: SnapshotBuilder,
    idle_edge: IdleEdge,
    lock_edge: LockEdge,
    gate: ChangeGate,
}

impl SessionRecorder {
    /// 새 세션 시작 (모든 상태 초기화)
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            registry: TitleRegistry::new(),
            builder: SnapshotBuilder::new(),
            idle_edge: IdleEdge::for_interval(poll_interval),
            lock_edge: LockEdge::new(),
            gate: ChangeGate::new(),
        }
    }

    /// 틱 하나 처리
    ///
    /// 에지 감지 → 스냅샷 빌드 → 지문 비교 순으로 진행하고, 게이트가
    /// 발화한 경우에만 현재 유휴/잠금 상태와 전체 스냅샷을 담은 레코드를
    /// 반환한다. 발화하지 않으면 None (억제).
    pub fn tick(
        &mut self,
        observations: &[WindowObservation],
        idle_ms: Option<u64>,
        locked: Option<bool>,
        now_unix: i64,
        commands: &dyn CommandResolver,
    ) -> Result<Option<LogRecord>, CoreError> {
        let idle_changed = self.idle_edge.observe(idle_ms);
        let locked_changed = self.lock_edge.observe(locked);

        let windows = self
            .builder
            .build(observations, now_unix, &mut self.registry, commands);
        let fp = fingerprint(&windows)?;

        if !self.gate.should_log(&fp, idle_changed, locked_changed) {
            return Ok(None);
        }

        debug!(
            ts = now_unix,
            idle_changed,
            locked_changed,
            windows = windows.len(),
            "상태 변경 기록"
        );
        Ok(Some(LogRecord::state(
            now_unix,
            self.idle_edge.is_idle(),
            self.lock_edge.is_locked(),
            windows,
        )))
    }

    /// 등록된 제목 수 (진단용)
    pub fn known_titles(&self) -> usize {
        self.registry.len()
    }
}
