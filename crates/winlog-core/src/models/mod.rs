//! 도메인 모델.

pub mod observation;
pub mod record;

pub use observation::WindowObservation;
pub use record::{LogRecord, WindowRecord};
