/// Decide whether the idle timeout has elapsed since the last dispatched press.
///
/// A clock reading older than the last activity (should never happen) counts
/// as zero idle time rather than wrapping.
pub fn sleep_due(last_activity_ms: u64, now_ms: u64, idle_timeout_ms: u64) -> bool {
    now_ms.saturating_sub(last_activity_ms) >= idle_timeout_ms
}
