use std::time::{Duration, SystemTime, UNIX_EPOCH};

use twilight_model::util::datetime::{Timestamp, TimestampParseError};

pub fn now_unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_secs())
}

/// Timestamp `duration` from now, as used by communication timeouts.
pub fn timestamp_after(duration: Duration) -> Result<Timestamp, TimestampParseError> {
    let secs = now_unix_secs().saturating_add(duration.as_secs());
    Timestamp::from_secs(i64::try_from(secs).unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_after_is_in_the_future() {
        let before = now_unix_secs() as i64;
        let until = timestamp_after(Duration::from_secs(300)).unwrap();

        assert!(until.as_secs() >= before + 300);
        assert!(until.as_secs() <= now_unix_secs() as i64 + 300);
    }
}
