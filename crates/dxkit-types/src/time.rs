/// Resolve a timestamp filter against `now_ms`.
///
/// Non-negative values are absolute epoch milliseconds. Negative values are
/// offsets back from now, so `-86_400_000` means "24 hours ago".
pub fn resolve_timestamp(value: i64, now_ms: i64) -> i64 {
    if value >= 0 { value } else { now_ms + value }
}
