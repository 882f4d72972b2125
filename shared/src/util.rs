/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Current UTC timestamp as an ISO 8601 string with millisecond precision,
/// e.g. `2026-08-25T09:30:00.000Z`. This is the format order timestamps use
/// on the wire.
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Generate a snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER so ids
/// survive a JSON round-trip through web frontends):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms, collision-free at demo scale)
pub fn next_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_positive_and_js_safe() {
        const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991; // 2^53 - 1
        for _ in 0..100 {
            let id = next_id();
            assert!(id > 0);
            assert!(id <= MAX_SAFE_INTEGER);
        }
    }

    #[test]
    fn test_ids_rarely_collide_in_a_burst() {
        let ids: std::collections::HashSet<i64> = (0..64).map(|_| next_id()).collect();
        // 12 random bits per millisecond keep bursts of this size apart.
        assert!(ids.len() > 60);
    }
}
