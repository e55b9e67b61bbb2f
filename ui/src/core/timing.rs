//! Timer helpers shared by the widget components.

use time::OffsetDateTime;

/// Wall-clock now (browser clock on wasm).
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// Suspend the calling task for `ms` milliseconds.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// Suspend the calling task for `ms` milliseconds.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
