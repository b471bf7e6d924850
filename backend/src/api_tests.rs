#[cfg(test)]
mod tests {
    use crate::api::{Availability, CleanerResolution, JobStatus, NotificationKind, ViewMode};

    #[test]
    fn test_reexported_labels() {
        assert_eq!(JobStatus::InProgress.to_string(), "In Progress");
        assert_eq!(Availability::OffDuty.to_string(), "Off Duty");
        assert_eq!(NotificationKind::CheckIn.badge(), "Check In");
        assert_eq!(ViewMode::default(), ViewMode::Week);
    }

    #[test]
    fn test_resolution_serialization() {
        let json = serde_json::to_value(CleanerResolution::Fallback {
            requested: Some("9".to_string()),
        })
        .unwrap();
        assert_eq!(json["kind"], "fallback");
        assert_eq!(json["requested"], "9");

        let selected = serde_json::to_value(CleanerResolution::Selected).unwrap();
        assert_eq!(selected["kind"], "selected");
    }
}
