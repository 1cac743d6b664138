//! Profiling instrumentation for hot paths.
//!
//! Enable with the `profiling` feature flag. Without it, [`profile_scope!`]
//! expands to nothing that runs.
//!
//! ```ignore
//! fn render(&mut self) {
//!     profile_scope!("scene_render");
//!     // ...
//! }
//! ```

use std::time::Instant;
use tracing::{trace, warn};

/// Frame budget at 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::TARGET_FRAME_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// RAII timer: logs the elapsed time of its scope on drop and warns when the
/// scope ran longer than the threshold.
pub struct ScopedTimer {
    name: &'static str,
    threshold_ms: f64,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            threshold_ms,
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed_ms();
        if elapsed > self.threshold_ms {
            warn!(
                "Slow operation: {} took {:.2}ms (threshold: {:.2}ms)",
                self.name, elapsed, self.threshold_ms
            );
        } else {
            trace!("{} took {:.3}ms", self.name, elapsed);
        }
    }
}
