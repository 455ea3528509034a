// src/modules/document_store/application/server_clock.rs

use std::sync::Mutex;

use chrono::{DateTime, SecondsFormat, Utc};

/// Timestamp source owned by a document store.
///
/// Values are strictly increasing per clock, so two writes in the same
/// microsecond still produce ordered `updatedAt` values.
#[derive(Debug, Default)]
pub struct ServerClock {
    last_micros: Mutex<i64>,
}

impl ServerClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> String {
        format_timestamp(&self.instant())
    }

    /// Next clock value, for callers that also need it as a typed column.
    pub fn instant(&self) -> DateTime<Utc> {
        let wall = Utc::now().timestamp_micros();

        let mut last = match self.last_micros.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let next = if wall > *last { wall } else { *last + 1 };
        *last = next;

        DateTime::<Utc>::from_timestamp_micros(next).unwrap_or_default()
    }
}

pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_strictly_increase() {
        let clock = ServerClock::new();
        let stamps: Vec<String> = (0..200).map(|_| clock.now()).collect();

        for pair in stamps.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn timestamps_are_fixed_width_utc() {
        let stamp = ServerClock::new().now();

        assert!(stamp.ends_with('Z'));
        assert_eq!(stamp.len(), "2026-10-01T10:00:00.000000Z".len());
        assert!(DateTime::parse_from_rfc3339(&stamp).is_ok());
    }

    #[test]
    fn instant_and_formatted_stamp_agree() {
        let at = ServerClock::new().instant();
        let parsed = DateTime::parse_from_rfc3339(&format_timestamp(&at)).unwrap();

        assert_eq!(parsed, at.fixed_offset());
    }
}
