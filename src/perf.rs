//! Pointer handler timing.
//!
//! Pointer moves arrive at up to the display refresh rate, so a handler that
//! blows the frame budget shows up as visible drag lag. Build with the
//! `profiling` feature to time handlers:
//!
//! ```ignore
//! fn pointer_move(&mut self) {
//!     profile_scope!("pointer_move");
//!     // ... handler body ...
//! }
//! ```

use crate::constants::FRAME_BUDGET_MS;
use std::time::Instant;
use tracing::{trace, warn};

/// Time a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::with_threshold($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use crate::profile_scope;

/// RAII timer that logs on drop and warns past its threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    /// Timer warning when the scope exceeds one frame
    pub fn new(name: &'static str) -> Self {
        Self::with_threshold(name, FRAME_BUDGET_MS)
    }

    pub fn with_threshold(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Milliseconds since the timer started
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed_ms();
        if elapsed > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow pointer handler"
            );
        } else {
            trace!(operation = self.name, elapsed_ms = elapsed, "handler timing");
        }
    }
}
