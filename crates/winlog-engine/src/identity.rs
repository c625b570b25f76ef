//! 창 제목 아이덴티티 레지스트리.
//!
//! 제목 문자열에 세션 스코프의 안정 식별자 `"<최초목격unix>-<hash4>"`를
//! 부여한다. 같은 프로세스 수명 안에서는 같은 제목이 항상 같은 식별자로
//! 해석된다. 세션이 끝나면 레지스트리가 통째로 버려진다.

use std::collections::HashMap;

/// 제목 하나에 대한 아이덴티티 (레지스트리 수명 동안 불변)
#[derive(Debug, Clone)]
pub struct TitleIdentity {
    /// 최초 목격 시각 (unix 초)
    pub created_at_unix: i64,
    /// 제목만의 함수인 4자리 base-36 해시
    pub hash4: String,
    /// `"<created_at_unix>-<hash4>"`
    pub full_id: String,
}

/// 제목 → 아이덴티티 레지스트리
#[derive(Debug, Default)]
pub struct TitleRegistry {
    entries: HashMap<String, TitleIdentity>,
}

impl TitleRegistry {
    /// 빈 레지스트리 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 제목을 식별자로 해석
    ///
    /// 이미 등록된 제목이면 저장된 식별자를 그대로 반환한다 (`now_unix` 무시).
    /// 처음 보는 제목이면 해시를 계산해 등록하고 반환한다. 제거 연산은 없다.
    pub fn resolve(&mut self, title: &str, now_unix: i64) -> String {
        if let Some(entry) = self.entries.get(title) {
            return entry.full_id.clone();
        }

        let hash4 = rolling_hash4(title);
        let full_id = format!("{now_unix}-{hash4}");
        self.entries.insert(
            title.to_string(),
            TitleIdentity {
                created_at_unix: now_unix,
                hash4,
                full_id: full_id.clone(),
            },
        );
        full_id
    }

    /// 등록된 제목 수
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 비어 있는지 확인
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 제목의 4자리 base-36 해시.
///
/// 고전적 다항 롤링 해시 `h = h*31 + unit (mod 2^32)`를 UTF-16 코드 유닛
/// 단위로 돌린다 (로그 포맷의 기원인 JS `charCodeAt` 루프와 동일한 값).
/// base-36 소문자 표기의 마지막 4자를 취하고 왼쪽을 0으로 채운다.
fn rolling_hash4(title: &str) -> String {
    let mut h: u32 = 0;
    for unit in title.encode_utf16() {
        h = h.wrapping_mul(31).wrapping_add(u32::from(unit));
    }

    let base36 = to_base36(h);
    let tail = &base36[base36.len().saturating_sub(4)..];
    format!("{tail:0>4}")
}

/// u32의 base-36 소문자 표기
fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut buf = Vec::with_capacity(7);
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();
    String::from_utf8(buf).unwrap_or_default()
}
