// ============================================================================
// Seed Data Parsing
// ============================================================================
//
// Seed documents carry the records a screen starts from. They are supplied by
// the host (a fixture, a demo file, a data-access collaborator) and never
// embedded in the logic that consumes them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::hash::Hash;
use std::path::Path;

use super::{CleanerProfile, ClientProfile, JobRecord, Notification};

/// All records a dashboard session starts with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub jobs: Vec<JobRecord>,
    #[serde(default)]
    pub cleaners: Vec<CleanerProfile>,
    #[serde(default)]
    pub clients: Vec<ClientProfile>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

/// Parse a seed document from a JSON string and check record invariants.
///
/// Missing collections default to empty. Job ratings are range-checked by
/// their type during deserialization; cleaner ratings and id uniqueness are
/// checked here.
pub fn parse_seed_json_str(json: &str) -> Result<SeedData> {
    let seed: SeedData =
        serde_json::from_str(json).context("Failed to deserialize seed JSON")?;
    validate_seed(&seed)?;

    log::debug!(
        "Parsed seed: {} jobs, {} cleaners, {} clients, {} notifications",
        seed.jobs.len(),
        seed.cleaners.len(),
        seed.clients.len(),
        seed.notifications.len()
    );
    Ok(seed)
}

/// Read and parse a seed document from disk.
pub fn load_seed_file<P: AsRef<Path>>(path: P) -> Result<SeedData> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    parse_seed_json_str(&content).with_context(|| format!("Invalid seed file {}", path.display()))
}

/// Check id uniqueness per collection and cleaner rating bounds.
pub fn validate_seed(seed: &SeedData) -> Result<()> {
    ensure_unique("job", seed.jobs.iter().map(|j| &j.id))?;
    ensure_unique("cleaner", seed.cleaners.iter().map(|c| &c.id))?;
    ensure_unique("client", seed.clients.iter().map(|c| &c.id))?;
    ensure_unique("notification", seed.notifications.iter().map(|n| &n.id))?;

    if let Some(cleaner) = seed.cleaners.iter().find(|c| !c.has_valid_rating()) {
        anyhow::bail!(
            "Cleaner {} has rating {} outside [0, 5]",
            cleaner.id,
            cleaner.rating
        );
    }
    Ok(())
}

fn ensure_unique<'a, T, I>(entity: &str, ids: I) -> Result<()>
where
    T: Eq + Hash + std::fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            anyhow::bail!("Duplicate {} id: {}", entity, id);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "cleaners": [
            {
                "id": "1",
                "name": "Sarah Johnson",
                "rating": 4.8,
                "total_jobs": 127,
                "availability": "Available",
                "specialties": ["Deep Cleaning"],
                "join_date": "2023-03-15"
            }
        ],
        "notifications": [
            {
                "id": "n1",
                "type": "check-in",
                "message": "has checked in at the job site",
                "timestamp": "10 mins ago",
                "cleaner_name": "Maria Lopez",
                "is_read": false
            }
        ]
    }"#;

    #[test]
    fn test_parse_minimal_seed() {
        let seed = parse_seed_json_str(MINIMAL).unwrap();
        assert!(seed.jobs.is_empty());
        assert!(seed.clients.is_empty());
        assert_eq!(seed.cleaners.len(), 1);
        assert_eq!(seed.cleaners[0].specialties, vec!["Deep Cleaning"]);
        assert_eq!(seed.notifications.len(), 1);
        assert!(seed.notifications[0].job_address.is_none());
    }

    #[test]
    fn test_empty_object_is_empty_seed() {
        let seed = parse_seed_json_str("{}").unwrap();
        assert_eq!(seed, SeedData::default());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = r#"{ "notifications": [
            { "id": "n1", "type": "delay", "message": "m", "timestamp": "t", "cleaner_name": "a" },
            { "id": "n1", "type": "photo", "message": "m", "timestamp": "t", "cleaner_name": "b" }
        ] }"#;
        let err = parse_seed_json_str(json).unwrap_err();
        assert!(err.to_string().contains("Duplicate notification id"));
    }

    #[test]
    fn test_rejects_cleaner_rating_out_of_range() {
        let json = MINIMAL.replace("4.8", "5.5");
        let err = parse_seed_json_str(&json).unwrap_err();
        assert!(err.to_string().contains("outside [0, 5]"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(parse_seed_json_str("{ not json").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_seed_file("/nonexistent/seed.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read seed file"));
    }
}
