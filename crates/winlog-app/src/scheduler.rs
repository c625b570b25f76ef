//! 폴링 스케줄러.
//!
//! 고정 간격 타이머로 틱을 발화시키는 오케스트레이션 척추.
//! 한 틱이 끝나야 다음 틱이 발화하므로 (단일 태스크 + interval) 세션
//! 상태에 잠금이 필요 없다. 틱 내부의 어떤 실패도 타이머를 취소시키지
//! 않는다 — 실패는 진단 채널(tracing)로만 관찰된다.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tracing::{info, warn};

use winlog_core::models::LogRecord;
use winlog_core::ports::{CommandResolver, LogSink, SessionProbe, WindowEnumerator};
use winlog_engine::SessionRecorder;

/// 폴러 설정
pub struct PollerConfig {
    /// 폴링 간격
    pub poll_interval: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
        }
    }
}

/// 폴링 드라이버
///
/// 상태 기계: Disabled → Enabled(running) → Disabled.
/// `run()` 진입이 enable (세션 상태 초기화 + restart 마커),
/// 종료 신호 수신이 disable (stopped 마커 + 세션 상태 폐기).
pub struct Poller {
    config: PollerConfig,
    enumerator: Arc<dyn WindowEnumerator>,
    probe: Arc<dyn SessionProbe>,
    commands: Arc<dyn CommandResolver>,
    sink: Arc<dyn LogSink>,
}

impl Poller {
    /// 새 폴러 생성
    pub fn new(
        config: PollerConfig,
        enumerator: Arc<dyn WindowEnumerator>,
        probe: Arc<dyn SessionProbe>,
        commands: Arc<dyn CommandResolver>,
        sink: Arc<dyn LogSink>,
    ) -> Self {
        Self {
            config,
            enumerator,
            probe,
            commands,
            sink,
        }
    }

    /// 폴링 루프 실행 (종료 신호까지 블로킹)
    pub async fn run(&self, mut shutdown_rx: watch::Receiver<bool>) {
        info!(
            "폴링 시작: 간격={}ms",
            self.config.poll_interval.as_millis()
        );

        // enable: 세션 상태는 매 실행마다 새로 만든다 (제자리 리셋 금지)
        let mut recorder = SessionRecorder::new(self.config.poll_interval);
        self.emit(&LogRecord::restart(Utc::now().timestamp())).await;

        let mut interval = tokio::time::interval(self.config.poll_interval);
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.run_tick(&mut recorder).await;
                }
                _ = shutdown_rx.changed() => {
                    info!("폴링 루프 종료");
                    break;
                }
            }
        }

        // disable: 종료 마커 기록 후 recorder가 drop되며 세션 상태 전체 폐기
        self.emit(&LogRecord::stopped(Utc::now().timestamp())).await;
    }

    /// 틱 하나 실행 — 내부 실패는 전부 여기서 흡수된다
    async fn run_tick(&self, recorder: &mut SessionRecorder) {
        let observations = match self.enumerator.enumerate_windows().await {
            Ok(observations) => observations,
            Err(e) => {
                warn!("창 열거 실패: {e}");
                Vec::new()
            }
        };
        let idle_ms = self.probe.idle_duration_ms().await;
        let locked = self.probe.screen_locked().await;
        let now = Utc::now().timestamp();

        match recorder.tick(&observations, idle_ms, locked, now, self.commands.as_ref()) {
            Ok(Some(record)) => self.emit(&record).await,
            Ok(None) => {}
            Err(e) => warn!("틱 처리 실패: {e}"),
        }
    }

    /// 레코드 기록 — 싱크 실패도 루프를 멈추지 않는다
    async fn emit(&self, record: &LogRecord) {
        if let Err(e) = self.sink.append(record).await {
            warn!("레코드 기록 실패: {e}");
        }
    }
}
