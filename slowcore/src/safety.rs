//! Panic isolation for per-frame rendering.
//!
//! A slowOS app should never vanish because one frame of drawing code hit
//! an unexpected state. Wrap the body of `update()` in [`catch_or`].

/// Run a closure, catching any panic. Returns the closure result on success,
/// or `fallback` on panic.
pub fn catch_or<T>(fallback: T, f: impl FnOnce() -> T) -> T {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(val) => val,
        Err(payload) => {
            let msg = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!(%msg, "caught panic in frame, recovered");
            fallback
        }
    }
}
