//! 로그 파일에 기록되는 레코드 형태.
//!
//! 로그는 한 줄에 JSON 레코드 하나인 append-only 스트림이다.
//! 오프라인 분석 도구는 키 존재 여부(`restart`/`stopped`/`windows`)로
//! 레코드 종류를 구분하므로 필드 순서와 생략 규칙이 외부 계약이다.

use serde::{Deserialize, Serialize};

/// 스냅샷에 포함되는 창 레코드.
///
/// 세션에서 제목이 처음 목격된 레코드만 `title`을 싣고, 이후에는
/// `hash` 식별자만 실어 로그 크기를 줄인다. 필드 선언 순서가 곧
/// 직렬화 순서다 (변경 금지).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    /// 프로세스 ID (호스트가 모르면 null)
    pub pid: Option<u32>,
    /// 프로세스 커맨드라인 (조회 실패 시 null)
    pub cmd: Option<String>,
    /// 포커스 여부
    pub focused: bool,
    /// 창 제목 — 세션 내 첫 목격 시에만 존재
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// 세션 스코프 식별자 `"<생성시각unix>-<hash4>"`
    pub hash: String,
}

/// 로그 레코드.
///
/// `restart`/`stopped`는 라이프사이클 마커, `State`는 변경 게이트가
/// 발화했을 때의 전체 스냅샷이다. `idle`/`locked`는 현재 상태값이다
/// (변경 여부가 아님).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogRecord {
    /// 세션 시작 마커 — enable마다 한 번
    Restart { ts: i64, restart: bool },
    /// 세션 종료 마커 — disable마다 한 번
    Stopped { ts: i64, stopped: bool },
    /// 상태 변경 스냅샷
    State {
        ts: i64,
        idle: bool,
        locked: bool,
        windows: Vec<WindowRecord>,
    },
}

impl LogRecord {
    /// 시작 마커 생성
    pub fn restart(ts: i64) -> Self {
        Self::Restart { ts, restart: true }
    }

    /// 종료 마커 생성
    pub fn stopped(ts: i64) -> Self {
        Self::Stopped { ts, stopped: true }
    }

    /// 상태 스냅샷 레코드 생성
    pub fn state(ts: i64, idle: bool, locked: bool, windows: Vec<WindowRecord>) -> Self {
        Self::State {
            ts,
            idle,
            locked,
            windows,
        }
    }

    /// 레코드 타임스탬프 (unix 초)
    pub fn ts(&self) -> i64 {
        match self {
            Self::Restart { ts, .. } | Self::Stopped { ts, .. } | Self::State { ts, .. } => *ts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restart_marker_shape() {
        let json = serde_json::to_string(&LogRecord::restart(1000)).unwrap();
        assert_eq!(json, r#"{"ts":1000,"restart":true}"#);
    }

    #[test]
    fn stopped_marker_shape() {
        let json = serde_json::to_string(&LogRecord::stopped(1234)).unwrap();
        assert_eq!(json, r#"{"ts":1234,"stopped":true}"#);
    }

    #[test]
    fn first_sighting_record_carries_title() {
        let record = WindowRecord {
            pid: Some(42),
            cmd: Some("/usr/bin/editor".to_string()),
            focused: true,
            title: Some("Editor".to_string()),
            hash: "1001-0ux9".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"pid":42,"cmd":"/usr/bin/editor","focused":true,"title":"Editor","hash":"1001-0ux9"}"#
        );
    }

    #[test]
    fn later_sighting_record_omits_title() {
        let record = WindowRecord {
            pid: None,
            cmd: None,
            focused: false,
            title: None,
            hash: "1001-0ux9".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"pid":null,"cmd":null,"focused":false,"hash":"1001-0ux9"}"#
        );
    }

    #[test]
    fn state_record_shape() {
        let record = LogRecord::state(1001, false, false, vec![]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"ts":1001,"idle":false,"locked":false,"windows":[]}"#);
    }
}
