//! Synthetic alert feed.

use super::types::{Alert, AlertType};
use chrono::{DateTime, Duration, Utc};

/// Build the alert feed relative to `now`.
///
/// Ids are sequential from 1; timestamps sit a fixed distance in the past.
pub fn synthetic_alerts(now: DateTime<Utc>) -> Vec<Alert> {
    vec![
        Alert {
            id: 1,
            alert_type: AlertType::Success,
            title: "Migration Complete".to_string(),
            message: "OmniCognitor successfully migrated to Vercel".to_string(),
            timestamp: now - Duration::minutes(5),
        },
        Alert {
            id: 2,
            alert_type: AlertType::Info,
            title: "Pending Migration".to_string(),
            message: "M2-3M Research Portal deployment in progress".to_string(),
            timestamp: now - Duration::minutes(15),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_alerts_are_relative_to_now() {
        let now = Utc.with_ymd_and_hms(2025, 2, 1, 9, 0, 0).unwrap();
        let alerts = synthetic_alerts(now);

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].timestamp, now - Duration::minutes(5));
        assert_eq!(alerts[1].timestamp, now - Duration::minutes(15));
    }

    #[test]
    fn test_alert_ids_are_sequential() {
        let alerts = synthetic_alerts(Utc::now());
        let ids: Vec<u32> = alerts.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_alert_types_serialize_lowercase() {
        let alerts = synthetic_alerts(Utc::now());
        let json = serde_json::to_value(&alerts).unwrap();
        assert_eq!(json[0]["type"], "success");
        assert_eq!(json[1]["type"], "info");
        assert_eq!(json[0]["title"], "Migration Complete");
    }
}
