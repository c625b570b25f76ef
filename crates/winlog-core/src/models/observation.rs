//! 호스트가 틱마다 공급하는 원시 창 관측값.

use serde::{Deserialize, Serialize};

/// 창 관측값 (틱 단위 수명)
///
/// 호스트 창 열거가 제공하는 원시 속성만 담는다. 제목 동일성 외의
/// 아이덴티티는 없으며, 식별자 부여는 winlog-engine의 레지스트리가 담당한다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowObservation {
    /// 창 제목
    pub title: String,
    /// 소유 프로세스 ID (호스트가 모르면 None)
    pub pid: Option<u32>,
    /// 포커스 여부
    pub focused: bool,
}

impl WindowObservation {
    /// 새 관측값 생성
    pub fn new(title: impl Into<String>, pid: Option<u32>, focused: bool) -> Self {
        Self {
            title: title.into(),
            pid,
            focused,
        }
    }
}
