//! System clock adapter.

use shared_types::Timestamp;

use crate::ports::outbound::TimeSource;

/// Default time source using system time.
#[derive(Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
