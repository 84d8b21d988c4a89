//! Discord-native timestamp formatting.

use chrono::{DateTime, Utc};

/// Formats an instant as a Discord full-timestamp marker (`<t:{unix}:F>`),
/// which clients render in the viewer's local timezone.
#[must_use]
pub fn discord_timestamp(at: DateTime<Utc>) -> String {
    format!("<t:{}:F>", at.timestamp())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_discord_timestamp_is_deterministic() {
        let fixed = Utc.with_ymd_and_hms(2024, 6, 15, 18, 30, 0).unwrap();
        assert_eq!(discord_timestamp(fixed), "<t:1718476200:F>");
    }

    #[test]
    fn test_discord_timestamp_at_epoch() {
        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        assert_eq!(discord_timestamp(epoch), "<t:0:F>");
    }
}
