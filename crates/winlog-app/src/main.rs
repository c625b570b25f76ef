//! # winlog-app
//!
//! WINLOG 바이너리 진입점.
//! 백그라운드에서 창 목록/포커스/유휴/잠금 상태를 폴링해 상태 변경만을
//! append-only JSONL 로그로 남긴다. 분석은 별도 오프라인 도구의 몫이다.

mod lifecycle;
mod scheduler;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use winlog_core::config_manager::ConfigManager;
use winlog_monitor::host::{HostSessionProbe, HostWindowEnumerator};
use winlog_monitor::process::CommandLineResolver;
use winlog_storage::JsonlLogFile;

use crate::lifecycle::LifecycleManager;
use crate::scheduler::{Poller, PollerConfig};

/// WINLOG 창 활동 로거
///
/// 데스크톱 세션의 창 상태 변경을 JSONL 로그로 기록하는 백그라운드 모니터
#[derive(Parser, Debug)]
#[command(name = "winlog")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 설정 파일 경로 (기본: 플랫폼 설정 디렉토리)
    #[arg(long)]
    config: Option<PathBuf>,

    /// 로그 파일 경로 (기본: <로컬 데이터 디렉토리>/window-logger.log)
    #[arg(long)]
    log_path: Option<PathBuf>,

    /// 폴링 간격 (초)
    #[arg(long)]
    poll_interval: Option<u64>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 설정 로드 후 CLI 인자로 덮어쓰기 (CLI 오버라이드는 파일에 저장하지 않음)
    let manager = match args.config {
        Some(path) => ConfigManager::with_path(path)?,
        None => ConfigManager::new()?,
    };
    let mut config = manager.get();
    if let Some(secs) = args.poll_interval {
        config.monitor.poll_interval_secs = secs;
    }
    if let Some(path) = args.log_path {
        config.storage.log_path = Some(path);
    }

    let poll_interval = config.poll_interval();
    let log_path = config.resolve_log_path();
    info!(
        "winlog 시작: 로그={}, 간격={}s, 설정={}",
        log_path.display(),
        poll_interval.as_secs(),
        manager.config_path().display()
    );

    run_monitor(poll_interval, log_path).await;
    Ok(())
}

/// 모니터 실행 — 폴링 루프와 시그널 대기를 함께 돌린다
async fn run_monitor(poll_interval: Duration, log_path: PathBuf) {
    let poller = Poller::new(
        PollerConfig { poll_interval },
        Arc::new(HostWindowEnumerator),
        Arc::new(HostSessionProbe),
        Arc::new(CommandLineResolver::new()),
        Arc::new(JsonlLogFile::new(log_path)),
    );

    let lifecycle = LifecycleManager::new();
    let shutdown_rx = lifecycle.subscribe();

    tokio::join!(poller.run(shutdown_rx), lifecycle.wait_for_signal());
    info!("winlog 종료");
}
