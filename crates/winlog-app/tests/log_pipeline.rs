//! 엔진 → 싱크 → 로그 파일 파이프라인 통합 테스트.
//!
//! 오프라인 분석 도구가 기대하는 줄 단위 JSON 계약을 실제 파일로 검증한다.

use std::time::Duration;

use serde_json::Value;
use winlog_core::models::{LogRecord, WindowObservation};
use winlog_core::ports::{CommandResolver, LogSink};
use winlog_engine::identity::TitleRegistry;
use winlog_engine::SessionRecorder;
use winlog_storage::JsonlLogFile;

struct ScriptedCommands;

impl CommandResolver for ScriptedCommands {
    fn command_line(&self, pid: u32) -> Option<String> {
        (pid == 42).then(|| "/usr/bin/editor --reuse-window".to_string())
    }
}

/// enable(ts=1000) → 동일 상태 틱 2회 → disable 시나리오.
/// 로그에는 restart, 첫 스냅샷, stopped 세 줄만 남아야 한다.
#[tokio::test]
async fn end_to_end_session_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("window-logger.log");
    let sink = JsonlLogFile::new(path.clone());

    let mut recorder = SessionRecorder::new(Duration::from_secs(1));
    let observations = [WindowObservation::new("Editor", Some(42), true)];

    // enable
    sink.append(&LogRecord::restart(1000)).await.unwrap();

    // 첫 틱: 상태 레코드
    if let Some(record) = recorder
        .tick(&observations, Some(0), Some(false), 1001, &ScriptedCommands)
        .unwrap()
    {
        sink.append(&record).await.unwrap();
    }

    // 두 번째 틱: 동일 상태 → 억제
    if let Some(record) = recorder
        .tick(&observations, Some(0), Some(false), 1002, &ScriptedCommands)
        .unwrap()
    {
        sink.append(&record).await.unwrap();
    }

    // disable
    sink.append(&LogRecord::stopped(1003)).await.unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<Value> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);

    assert_eq!(lines[0], serde_json::json!({"ts": 1000, "restart": true}));

    // 해시는 제목만의 함수 — 독립 레지스트리로 재계산해 교차 검증
    let expected_hash = TitleRegistry::new().resolve("Editor", 1001);
    assert_eq!(
        lines[1],
        serde_json::json!({
            "ts": 1001,
            "idle": false,
            "locked": false,
            "windows": [{
                "pid": 42,
                "cmd": "/usr/bin/editor --reuse-window",
                "focused": true,
                "title": "Editor",
                "hash": expected_hash,
            }]
        })
    );

    assert_eq!(lines[2], serde_json::json!({"ts": 1003, "stopped": true}));
}

/// 포커스 전환 시퀀스가 분석 도구가 재생 가능한 형태로 기록되는지 확인.
#[tokio::test]
async fn focus_switch_replayable_from_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("window-logger.log");
    let sink = JsonlLogFile::new(path.clone());

    let mut recorder = SessionRecorder::new(Duration::from_secs(1));
    let editor_focused = [
        WindowObservation::new("Editor", Some(42), true),
        WindowObservation::new("Browser", Some(7), false),
    ];
    let browser_focused = [
        WindowObservation::new("Editor", Some(42), false),
        WindowObservation::new("Browser", Some(7), true),
    ];

    sink.append(&LogRecord::restart(2000)).await.unwrap();
    for (ts, obs) in [
        (2001, &editor_focused),
        (2002, &browser_focused),
        (2003, &browser_focused), // 유지 → 억제
        (2004, &editor_focused),
    ] {
        if let Some(record) = recorder
            .tick(obs, Some(0), Some(false), ts, &ScriptedCommands)
            .unwrap()
        {
            sink.append(&record).await.unwrap();
        }
    }

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<Value> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    // restart + 스냅샷 3건 (2003 틱은 억제)
    assert_eq!(lines.len(), 4);

    // 제목은 세션 전체에서 창당 정확히 한 번
    let titled: usize = lines
        .iter()
        .filter_map(|v| v.get("windows"))
        .flat_map(|w| w.as_array().unwrap())
        .filter(|w| w.get("title").is_some())
        .count();
    assert_eq!(titled, 2);

    // 포커스 이력: Editor → Browser → Editor
    let focused_hashes: Vec<&str> = lines
        .iter()
        .filter_map(|v| v.get("windows"))
        .map(|w| {
            w.as_array()
                .unwrap()
                .iter()
                .find(|e| e["focused"] == Value::Bool(true))
                .unwrap()["hash"]
                .as_str()
                .unwrap()
        })
        .collect();
    assert_eq!(focused_hashes.len(), 3);
    assert_eq!(focused_hashes[0], focused_hashes[2]);
    assert_ne!(focused_hashes[0], focused_hashes[1]);
}

/// 유휴/잠금 전이가 일급 이벤트로 기록되는지 확인.
#[tokio::test]
async fn idle_and_lock_transitions_logged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("window-logger.log");
    let sink = JsonlLogFile::new(path.clone());

    let mut recorder = SessionRecorder::new(Duration::from_secs(1));
    let obs = [WindowObservation::new("Editor", Some(42), true)];

    // (유휴ms, 잠금) 시퀀스: 활성 → 유휴 → 유휴+잠금 → 복귀
    let script: [(u64, bool); 4] = [(0, false), (10_000, false), (11_000, true), (0, false)];
    for (i, (idle_ms, locked)) in script.iter().enumerate() {
        let ts = 3001 + i as i64;
        if let Some(record) = recorder
            .tick(&obs, Some(*idle_ms), Some(*locked), ts, &ScriptedCommands)
            .unwrap()
        {
            sink.append(&record).await.unwrap();
        }
    }

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<Value> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    // 네 틱 모두 에지 또는 첫 스냅샷으로 발화
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["idle"], Value::Bool(false));
    assert_eq!(lines[1]["idle"], Value::Bool(true));
    assert_eq!(lines[1]["locked"], Value::Bool(false));
    assert_eq!(lines[2]["locked"], Value::Bool(true));
    assert_eq!(lines[3]["idle"], Value::Bool(false));
    assert_eq!(lines[3]["locked"], Value::Bool(false));
}
