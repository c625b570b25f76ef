//! # winlog-storage
//!
//! append-only JSONL 로그 파일 저장소.
//! 한 줄에 JSON 레코드 하나, UTF-8, 스트리밍 로그 (단일 JSON 문서 아님).

pub mod log_file;

pub use log_file::JsonlLogFile;
