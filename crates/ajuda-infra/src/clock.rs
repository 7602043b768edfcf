//! Wall-clock implementation of the `Clock` port.

use chrono::{DateTime, Local};

use ajuda_core::ports::Clock;

/// Reads the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
