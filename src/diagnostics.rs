use dioxus::logger::tracing;

/// Coarse wall-clock timer for fetch instrumentation.
///
/// `std::time::Instant` panics on wasm32-unknown-unknown, so the web build
/// reads the high-resolution clock through `js_sys` instead.
pub struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    started_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    started_at: std::time::Instant,
}

impl PerfTimer {
    #[cfg(target_arch = "wasm32")]
    pub fn now() -> Self {
        Self {
            started_ms: js_sys::Date::now(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn now() -> Self {
        Self {
            started_at: std::time::Instant::now(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn elapsed_ms(&self) -> u128 {
        (js_sys::Date::now() - self.started_ms).max(0.0) as u128
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn elapsed_ms(&self) -> u128 {
        self.started_at.elapsed().as_millis()
    }
}

#[inline]
pub fn log_perf(scope: &str, timer: &PerfTimer, details: &str) {
    let elapsed_ms = timer.elapsed_ms();
    if details.trim().is_empty() {
        tracing::info!("[perf] {scope} took {elapsed_ms}ms");
    } else {
        tracing::info!("[perf] {scope} took {elapsed_ms}ms | {details}");
    }
}
