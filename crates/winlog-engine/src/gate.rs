//! 스냅샷 변경 게이트.
//!
//! 새 스냅샷의 정준 직렬화(지문)를 직전 지문과 바이트 단위로 비교해
//! 로그 기록 여부를 결정한다. 지문은 비교 전용이며 다시 파싱되지 않는다.

use serde::Serialize;
use winlog_core::error::CoreError;
use winlog_core::models::WindowRecord;

/// 지문에 들어가는 창 상태의 정준 투영.
///
/// `title`은 의도적으로 제외한다 — 제목은 첫 목격 레코드에만 실리는
/// 일회성 장식이라 지문에 포함하면 첫 목격 바로 다음 틱이 내용 변경으로
/// 오판되어 동일 상태가 중복 기록된다. pid/cmd/focused/hash가 창의
/// 의미론적 상태 전부다.
#[derive(Serialize)]
struct FingerprintEntry<'a> {
    pid: Option<u32>,
    cmd: Option<&'a str>,
    focused: bool,
    hash: &'a str,
}

/// 스냅샷의 정준 지문 계산
pub fn fingerprint(records: &[WindowRecord]) -> Result<String, CoreError> {
    let entries: Vec<FingerprintEntry<'_>> = records
        .iter()
        .map(|r| FingerprintEntry {
            pid: r.pid,
            cmd: r.cmd.as_deref(),
            focused: r.focused,
            hash: &r.hash,
        })
        .collect();
    Ok(serde_json::to_string(&entries)?)
}

/// 변경 게이트
///
/// 마지막으로 통과했거나 동일 확인된 스냅샷의 지문을 보관한다.
#[derive(Debug, Default)]
pub struct ChangeGate {
    last_fingerprint: Option<String>,
}

impl ChangeGate {
    /// 빈 지문으로 게이트 생성 (첫 스냅샷은 항상 통과)
    pub fn new() -> Self {
        Self::default()
    }

    /// 로그 기록 여부 결정
    ///
    /// 유휴/잠금이 뒤집혔거나 지문이 직전과 다르면 true. true를 반환하는
    /// 틱에는 발화 사유와 무관하게 저장된 지문을 새 값으로 전진시킨다.
    pub fn should_log(
        &mut self,
        fingerprint: &str,
        idle_changed: bool,
        locked_changed: bool,
    ) -> bool {
        let content_changed = self.last_fingerprint.as_deref() != Some(fingerprint);
        let fire = idle_changed || locked_changed || content_changed;
        if fire {
            self.last_fingerprint = Some(fingerprint.to_owned());
        }
        fire
    }
}
