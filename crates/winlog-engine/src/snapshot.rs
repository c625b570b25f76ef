//! 상태 스냅샷 빌더.
//!
//! 호스트 관측값을 레지스트리와 seen-set을 거쳐 직렬화 가능한
//! `WindowRecord` 목록으로 변환한다. 순서는 호스트 열거 순서를 그대로
//! 따른다 (별도 정렬 없음).

use winlog_core::models::{WindowObservation, WindowRecord};
use winlog_core::ports::CommandResolver;

use crate::identity::TitleRegistry;
use std::collections::HashSet;

/// 스냅샷 빌더
///
/// 세션 동안 전체 제목 문자열이 이미 로그에 기록된 제목의 집합(seen-set)을
/// 소유한다. 집합은 단조 증가하며 세션 리셋 시에만 비워진다.
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    seen_titles: HashSet<String>,
}

impl SnapshotBuilder {
    /// 빈 seen-set으로 빌더 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 관측값들로부터 스냅샷 빌드
    ///
    /// 제목이 seen-set에 없으면 레코드에 전체 제목을 싣고 집합에 추가한다.
    /// 같은 틱 안에서 제목이 중복되면 먼저 처리된 창만 제목을 싣는다.
    /// 커맨드라인 조회 실패는 null로 흡수되며 빌드를 실패시키지 않는다.
    pub fn build(
        &mut self,
        observations: &[WindowObservation],
        now_unix: i64,
        registry: &mut TitleRegistry,
        commands: &dyn CommandResolver,
    ) -> Vec<WindowRecord> {
        let mut records = Vec::with_capacity(observations.len());

        for obs in observations {
            let hash = registry.resolve(&obs.title, now_unix);
            let cmd = obs.pid.and_then(|pid| commands.command_line(pid));

            let title = if self.seen_titles.contains(&obs.title) {
                None
            } else {
                self.seen_titles.insert(obs.title.clone());
                Some(obs.title.clone())
            };

            records.push(WindowRecord {
                pid: obs.pid,
                cmd,
                focused: obs.focused,
                title,
                hash,
            });
        }

        records
    }

    /// 제목이 이미 기록되었는지 확인
    pub fn has_seen(&self, title: &str) -> bool {
        self.seen_titles.contains(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoCommands;

    impl CommandResolver for NoCommands {
        fn command_line(&self, _pid: u32) -> Option<String> {
            None
        }
    }

    struct FixedCommands;

    impl CommandResolver for FixedCommands {
        fn command_line(&self, pid: u32) -> Option<String> {
            (pid == 42).then(|| "/usr/bin/editor".to_string())
        }
    }

    #[test]
    fn first_sighting_carries_title_then_omits_it() {
        let mut builder = SnapshotBuilder::new();
        let mut registry = TitleRegistry::new();
        let obs = vec![WindowObservation::new("Editor", Some(42), true)];

        let first = builder.build(&obs, 1000, &mut registry, &FixedCommands);
        assert_eq!(first[0].title.as_deref(), Some("Editor"));
        assert_eq!(first[0].cmd.as_deref(), Some("/usr/bin/editor"));

        let second = builder.build(&obs, 1001, &mut registry, &FixedCommands);
        assert!(second[0].title.is_none());
        // 식별자는 첫 목격 시각에 고정
        assert_eq!(second[0].hash, first[0].hash);
    }

    #[test]
    fn duplicate_titles_in_one_tick_share_seen_flag() {
        let mut builder = SnapshotBuilder::new();
        let mut registry = TitleRegistry::new();
        let obs = vec![
            WindowObservation::new("Terminal", Some(1), true),
            WindowObservation::new("Terminal", Some(2), false),
        ];

        let records = builder.build(&obs, 1000, &mut registry, &NoCommands);
        assert_eq!(records[0].title.as_deref(), Some("Terminal"));
        assert!(records[1].title.is_none());
        // 같은 제목이므로 같은 식별자
        assert_eq!(records[0].hash, records[1].hash);
    }

    #[test]
    fn preserves_host_order() {
        let mut builder = SnapshotBuilder::new();
        let mut registry = TitleRegistry::new();
        let obs = vec![
            WindowObservation::new("B", None, false),
            WindowObservation::new("A", None, true),
        ];

        let records = builder.build(&obs, 1000, &mut registry, &NoCommands);
        assert_eq!(records[0].title.as_deref(), Some("B"));
        assert_eq!(records[1].title.as_deref(), Some("A"));
    }

    #[test]
    fn missing_pid_yields_null_cmd() {
        let mut builder = SnapshotBuilder::new();
        let mut registry = TitleRegistry::new();
        let obs = vec![WindowObservation::new("Editor", None, true)];

        let records = builder.build(&obs, 1000, &mut registry, &FixedCommands);
        assert!(records[0].pid.is_none());
        assert!(records[0].cmd.is_none());
    }
}
