//! Event-to-schedule normalization.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use erine_entity::ScheduleEntry;

use crate::models::EventRecord;

/// Map a raw event record to a display-ready schedule entry.
///
/// Missing or malformed dates fall back to today's calendar date so a bad
/// document never propagates downstream; missing times become full-day
/// bounds and a missing location becomes a placeholder.
pub(crate) fn to_entry(event: EventRecord) -> ScheduleEntry {
    ScheduleEntry {
        id: event.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
        title: event.title,
        kind: "event".to_string(),
        date: calendar_date(event.date.as_deref()),
        start_time: event.start_time.unwrap_or_else(|| "00:00".to_string()),
        end_time: event.end_time.unwrap_or_else(|| "23:59".to_string()),
        location: event.location.unwrap_or_else(|| "TBA".to_string()),
        description: event.description,
        image_url: event.image_url,
    }
}

fn calendar_date(raw: Option<&str>) -> String {
    raw.and_then(parse_calendar_date)
        .unwrap_or_else(|| Utc::now().date_naive().to_string())
}

fn parse_calendar_date(raw: &str) -> Option<String> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive().to_string());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_event() -> EventRecord {
        EventRecord {
            id: None,
            title: "Fan meeting".to_string(),
            description: None,
            date: None,
            location: None,
            start_time: None,
            end_time: None,
            image_url: None,
        }
    }

    #[test]
    fn test_full_event_passes_through() {
        let entry = to_entry(EventRecord {
            id: Some("abc123".to_string()),
            title: "Summer concert".to_string(),
            description: Some("Outdoor stage".to_string()),
            date: Some("2026-07-01T18:30:00Z".to_string()),
            location: Some("Tokyo Dome".to_string()),
            start_time: Some("18:30".to_string()),
            end_time: Some("21:00".to_string()),
            image_url: Some("https://cdn.example.com/poster.jpg".to_string()),
        });

        assert_eq!(entry.id, "abc123");
        assert_eq!(entry.kind, "event");
        assert_eq!(entry.date, "2026-07-01");
        assert_eq!(entry.start_time, "18:30");
        assert_eq!(entry.end_time, "21:00");
        assert_eq!(entry.location, "Tokyo Dome");
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let entry = to_entry(bare_event());

        assert!(!entry.id.is_empty());
        assert_eq!(entry.date, Utc::now().date_naive().to_string());
        assert_eq!(entry.start_time, "00:00");
        assert_eq!(entry.end_time, "23:59");
        assert_eq!(entry.location, "TBA");
    }

    #[test]
    fn test_malformed_date_falls_back_to_today() {
        let mut event = bare_event();
        event.date = Some("not-a-date".to_string());
        let entry = to_entry(event);
        assert_eq!(entry.date, Utc::now().date_naive().to_string());
    }

    #[test]
    fn test_plain_calendar_date_is_accepted() {
        let mut event = bare_event();
        event.date = Some("2026-03-14".to_string());
        let entry = to_entry(event);
        assert_eq!(entry.date, "2026-03-14");
    }
}
