//! Thought record model persisted by stores.

use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One immutable entry in the thought log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThoughtRecord {
    /// Generated text.
    pub content: String,
    /// Creation time, kept verbatim as stored. Written as RFC 3339 with a UTC offset.
    pub timestamp: String,
    /// One-based position in the log.
    #[serde(rename = "thought_number")]
    pub sequence_number: u64,
}

impl ThoughtRecord {
    /// Build a record stamped at `created_at`.
    pub fn new(content: impl Into<String>, created_at: DateTime<Utc>, sequence_number: u64) -> Self {
        Self {
            content: content.into(),
            timestamp: format_timestamp(created_at),
            sequence_number,
        }
    }

    /// Parsed creation time. Accepts RFC 3339, or an ISO 8601 date-time without
    /// offset which is read as UTC. None when neither form parses.
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .or_else(|| {
                self.timestamp
                    .parse::<NaiveDateTime>()
                    .ok()
                    .map(|naive| naive.and_utc().fixed_offset())
            })
    }
}

/// Format an instant as RFC 3339 with microseconds and an explicit `+00:00` offset.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, false)
}

#[cfg(test)]
mod tests {
    use super::ThoughtRecord;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_with_stored_field_names() {
        let at = Utc.with_ymd_and_hms(2026, 2, 11, 9, 30, 5).unwrap();
        let record = ThoughtRecord::new("hello", at, 3);
        let json = serde_json::to_value(&record).expect("json");
        assert_eq!(
            json,
            serde_json::json!({
                "content": "hello",
                "timestamp": "2026-02-11T09:30:05.000000+00:00",
                "thought_number": 3,
            })
        );
    }

    #[test]
    fn created_at_parses_offsets_naive_times_and_rejects_garbage() {
        let mut record = ThoughtRecord {
            content: String::new(),
            timestamp: "2026-02-11T09:30:05.123456+00:00".to_string(),
            sequence_number: 1,
        };
        let parsed = record.created_at().expect("parsed");
        assert_eq!(parsed.timestamp(), 1_770_802_205);

        record.timestamp = "2026-02-11T09:30:05".to_string();
        let naive = record.created_at().expect("naive parsed as utc");
        assert_eq!(naive.timestamp(), 1_770_802_205);
        assert_eq!(naive.offset().local_minus_utc(), 0);

        record.timestamp = "yesterday".to_string();
        assert_eq!(record.created_at(), None);
    }
}
