//! # winlog-core
//!
//! WINLOG 코어 레이어.
//! 도메인 모델(창 관측, 로그 레코드), 포트(호스트/저장소 trait), 설정, 에러 타입을 정의한다.
//! 어댑터 crate(winlog-monitor, winlog-storage)는 이 crate의 포트를 구현한다.

pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
pub mod ports;
