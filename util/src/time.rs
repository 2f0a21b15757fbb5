use std::time::Duration;

/// Suspend the current task for `duration`. Cooperative: other tasks on the
/// runtime keep making progress while this one sleeps.
pub async fn delay(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// As [`delay`], taking milliseconds. Negative durations count as zero.
pub async fn delay_ms(ms: i64) {
    let clamped = u64::try_from(ms).unwrap_or(0);
    delay(Duration::from_millis(clamped)).await;
}
