use chrono::{DateTime, Utc};

/// A millisecond-timestamp id with `prefix`, moved forward one millisecond at a
/// time until `taken` rejects it.
pub(crate) fn timestamp_id(prefix: &str, now: DateTime<Utc>, taken: impl Fn(&str) -> bool) -> String {
    let mut millis = now.timestamp_millis();
    loop {
        let id = format!("{prefix}{millis}");
        if !taken(&id) {
            return id;
        }
        millis += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixed_now;

    #[test]
    fn collisions_move_forward() {
        let now = fixed_now();
        let first = timestamp_id("folder-", now, |_| false);
        assert_eq!(first, format!("folder-{}", now.timestamp_millis()));
        let second = timestamp_id("folder-", now, |id| id == first);
        assert_eq!(second, format!("folder-{}", now.timestamp_millis() + 1));
    }
}
