//! Linux 플랫폼 지원.
//!
//! X11(및 XWayland) 환경에서 창 목록, 유휴 시간, 화면 잠금을 조회한다.
//!
//! - 창 목록: `wmctrl -lp` (스태킹 순서, PID 포함)
//! - 포커스 창: `xdotool getactivewindow`
//! - 유휴 시간: `xprintidle` (밀리초)
//! - 화면 잠금: `gdbus`로 org.gnome.ScreenSaver.GetActive 호출
//!
//! Wayland 네이티브 창은 XWayland를 거치지 않으면 보이지 않는다.

use std::process::Command;
use tracing::debug;
use winlog_core::models::WindowObservation;

/// Linux에서 열린 창 목록 조회 (스태킹 순서)
///
/// wmctrl/xdotool이 없거나 실패하면 빈 목록을 반환한다.
pub fn list_windows_linux() -> Vec<WindowObservation> {
    let output = match Command::new("wmctrl").args(["-l", "-p"]).output() {
        Ok(output) if output.status.success() => output,
        Ok(output) => {
            debug!(
                "wmctrl 실패: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Vec::new();
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::NotFound {
                debug!("wmctrl 미설치 - 'sudo apt install wmctrl' 실행 필요");
            } else {
                debug!("wmctrl 실행 실패: {}", e);
            }
            return Vec::new();
        }
    };

    let focused_id = get_active_window_id_x11();
    let stdout = String::from_utf8_lossy(&output.stdout);

    stdout
        .lines()
        .filter_map(parse_wmctrl_line)
        .map(|(id, pid, title)| WindowObservation {
            title,
            pid,
            focused: focused_id == Some(id),
        })
        .collect()
}

/// `wmctrl -lp` 출력 한 줄 파싱
///
/// 형식: `<창ID hex> <데스크톱> <PID> <호스트명> <제목...>`.
/// 창 ID를 파싱할 수 없는 줄은 건너뛴다. PID 0은 미상으로 취급한다.
fn parse_wmctrl_line(line: &str) -> Option<(u64, Option<u32>, String)> {
    let mut rest = line;

    let id = parse_window_id(split_token(&mut rest)?)?;
    let _desktop = split_token(&mut rest)?;
    let pid = split_token(&mut rest)?.parse::<u32>().ok().filter(|&p| p > 0);
    let _host = split_token(&mut rest)?;
    // 남은 부분 전체가 제목 (빈 제목 허용)
    Some((id, pid, rest.to_string()))
}

/// 선행 공백을 지우고 공백 구분 토큰 하나를 떼어낸다
fn split_token<'a>(rest: &mut &'a str) -> Option<&'a str> {
    let trimmed = rest.trim_start();
    if trimmed.is_empty() {
        *rest = trimmed;
        return None;
    }
    let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
    let (token, tail) = trimmed.split_at(end);
    *rest = tail.strip_prefix(char::is_whitespace).unwrap_or(tail);
    Some(token)
}

/// 창 ID 문자열 파싱 (wmctrl은 `0x...` hex, xdotool은 10진수)
fn parse_window_id(raw: &str) -> Option<u64> {
    if let Some(hex) = raw.strip_prefix("0x") {
        u64::from_str_radix(hex, 16).ok()
    } else {
        raw.parse::<u64>().ok()
    }
}

/// X11에서 포커스 창 ID 조회
fn get_active_window_id_x11() -> Option<u64> {
    let output = Command::new("xdotool")
        .arg("getactivewindow")
        .output()
        .ok()
        .filter(|o| o.status.success())?;
    parse_window_id(String::from_utf8_lossy(&output.stdout).trim())
}

/// Linux에서 유휴 시간 조회 (밀리초)
pub fn get_idle_time_ms_linux() -> Option<u64> {
    let output = match Command::new("xprintidle").output() {
        Ok(output) if output.status.success() => output,
        Ok(_) => return None,
        Err(e) => {
            if e.kind() == std::io::ErrorKind::NotFound {
                debug!("xprintidle 미설치 - 'sudo apt install xprintidle' 실행 필요");
            }
            return None;
        }
    };

    String::from_utf8_lossy(&output.stdout).trim().parse().ok()
}

/// Linux에서 화면 잠금 상태 조회
///
/// GNOME ScreenSaver D-Bus API를 gdbus로 호출한다. 다른 데스크톱 환경이나
/// D-Bus 불가 시 None (잠금 화면 없음으로 취급된다).
pub fn get_screen_locked_linux() -> Option<bool> {
    let output = Command::new("gdbus")
        .args([
            "call",
            "--session",
            "--dest",
            "org.gnome.ScreenSaver",
            "--object-path",
            "/org/gnome/ScreenSaver",
            "--method",
            "org.gnome.ScreenSaver.GetActive",
        ])
        .output()
        .ok()
        .filter(|o| o.status.success())?;

    parse_gdbus_bool(&String::from_utf8_lossy(&output.stdout))
}

/// gdbus 불리언 응답 파싱 — `(true,)` / `(false,)`
fn parse_gdbus_bool(raw: &str) -> Option<bool> {
    let trimmed = raw.trim();
    if trimmed.contains("true") {
        Some(true)
    } else if trimmed.contains("false") {
        Some(false)
    } else {
        None
    }
}
