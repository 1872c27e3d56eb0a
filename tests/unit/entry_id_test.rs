#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use crate::progress::model::ProgressEntry;
    use crate::routes::next_entry_id;

    fn stored(id: &str) -> ProgressEntry {
        ProgressEntry {
            id: id.to_string(),
            user_id: "u1".to_string(),
            class_name: "6".to_string(),
            subject: "Math".to_string(),
            chapter: "Integers".to_string(),
            score: 50.0,
            correct: 1,
            total: 2,
            quiz_id: None,
            date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap().fixed_offset(),
        }
    }

    #[test]
    fn test_id_is_current_millis() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(next_entry_id(&[], now), now.timestamp_millis().to_string());
        assert_eq!(next_entry_id(&[stored("legacy-id")], now), now.timestamp_millis().to_string());
    }

    #[test]
    fn test_id_bumped_past_stored() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let ahead = (now.timestamp_millis() + 10).to_string();
        let expected = (now.timestamp_millis() + 11).to_string();
        assert_eq!(next_entry_id(&[stored(&ahead)], now), expected);
    }

    #[test]
    fn test_id_at_max_does_not_overflow() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let max = i64::MAX.to_string();
        assert_eq!(next_entry_id(&[stored(&max)], now), max);
    }
}
