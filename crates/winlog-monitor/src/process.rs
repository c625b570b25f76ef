//! 프로세스 커맨드라인 조회.
//!
//! `CommandResolver` 포트 구현 (sysinfo).

use std::sync::Mutex;
use sysinfo::{Pid, ProcessesToUpdate, System};
use winlog_core::ports::CommandResolver;

/// 커맨드라인 해석기 — `CommandResolver` 포트 구현
///
/// 틱마다 관측된 PID만 개별 갱신한다 (전체 프로세스 테이블 갱신은
/// 1초 폴링에는 과하다).
pub struct CommandLineResolver {
    sys: Mutex<System>,
}

impl CommandLineResolver {
    /// 새 해석기 생성
    pub fn new() -> Self {
        Self {
            sys: Mutex::new(System::new()),
        }
    }
}

impl Default for CommandLineResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandResolver for CommandLineResolver {
    fn command_line(&self, pid: u32) -> Option<String> {
        let mut sys = self.sys.lock().ok()?;
        let pid = Pid::from_u32(pid);
        sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);

        let cmd = sys
            .process(pid)?
            .cmd()
            .iter()
            .map(|arg| arg.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ");
        // 커널 스레드 등 cmdline이 비어 있으면 미상으로 취급
        (!cmd.is_empty()).then_some(cmd)
    }
}
