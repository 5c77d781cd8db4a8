use chrono::{DateTime, SecondsFormat, Utc};

/// An echoed message, stamped when it was handled.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Stamps `message` with the current wall-clock time. The text is kept verbatim.
    pub fn now(message: String) -> Self {
        Self {
            message,
            timestamp: Utc::now(),
        }
    }

    /// ISO-8601 timestamp with millisecond precision, e.g. `2024-01-15T10:30:00.123Z`.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_message_is_kept_verbatim() {
        let msg = Message::now("  hi there \n".to_string());
        assert_eq!(msg.message, "  hi there \n");
    }

    #[test]
    fn test_timestamp_iso_uses_millis_and_z() {
        let msg = Message {
            message: "x".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
                + chrono::TimeDelta::milliseconds(7),
        };
        assert_eq!(msg.timestamp_iso(), "2024-01-15T10:30:00.007Z");
    }

    #[test]
    fn test_timestamp_iso_parses_back() {
        let msg = Message::now("x".to_string());
        let parsed = DateTime::parse_from_rfc3339(&msg.timestamp_iso()).unwrap();
        assert_eq!(parsed.timestamp_millis(), msg.timestamp.timestamp_millis());
    }
}
