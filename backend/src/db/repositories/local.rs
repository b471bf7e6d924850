//! In-memory record store.
//!
//! Backs every screen in development and tests. Collections are plain
//! vectors so iteration order is insertion order.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::db::repository::{ErrorContext, RecordStore, RepositoryError, RepositoryResult};
use crate::models::{
    validate_seed, CleanerId, CleanerProfile, ClientId, ClientProfile, JobId, JobRecord,
    Notification, NotificationId, SeedData,
};

#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<SeedData>>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated from a validated seed.
    pub fn with_seed(seed: SeedData) -> RepositoryResult<Self> {
        let repo = Self::new();
        repo.load_seed(seed)?;
        Ok(repo)
    }

    pub fn is_empty(&self) -> bool {
        let data = self.data.read();
        data.jobs.is_empty()
            && data.cleaners.is_empty()
            && data.clients.is_empty()
            && data.notifications.is_empty()
    }
}

fn duplicate(entity: &str, id: impl ToString, operation: &str) -> RepositoryError {
    let id = id.to_string();
    RepositoryError::validation_with_context(
        format!("{} with id {} already exists", entity, id),
        ErrorContext::new(operation)
            .with_entity(entity)
            .with_entity_id(id),
    )
}

fn missing(entity: &str, id: impl ToString, operation: &str) -> RepositoryError {
    let id = id.to_string();
    RepositoryError::not_found_with_context(
        format!("{} {} not found", entity, id),
        ErrorContext::new(operation)
            .with_entity(entity)
            .with_entity_id(id),
    )
}

impl RecordStore for LocalRepository {
    fn jobs(&self) -> Vec<JobRecord> {
        self.data.read().jobs.clone()
    }

    fn cleaners(&self) -> Vec<CleanerProfile> {
        self.data.read().cleaners.clone()
    }

    fn clients(&self) -> Vec<ClientProfile> {
        self.data.read().clients.clone()
    }

    fn notifications(&self) -> Vec<Notification> {
        self.data.read().notifications.clone()
    }

    fn get_job(&self, id: &JobId) -> RepositoryResult<JobRecord> {
        self.data
            .read()
            .jobs
            .iter()
            .find(|j| &j.id == id)
            .cloned()
            .ok_or_else(|| missing("job", id, "get_job"))
    }

    fn get_cleaner(&self, id: &CleanerId) -> RepositoryResult<CleanerProfile> {
        self.data
            .read()
            .cleaners
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| missing("cleaner", id, "get_cleaner"))
    }

    fn get_client(&self, id: &ClientId) -> RepositoryResult<ClientProfile> {
        self.data
            .read()
            .clients
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| missing("client", id, "get_client"))
    }

    fn insert_job(&self, job: JobRecord) -> RepositoryResult<()> {
        let mut data = self.data.write();
        if data.jobs.iter().any(|j| j.id == job.id) {
            return Err(duplicate("job", &job.id, "insert_job"));
        }
        log::debug!("Inserted job id={} on {}", job.id, job.date);
        data.jobs.push(job);
        Ok(())
    }

    fn insert_cleaner(&self, cleaner: CleanerProfile) -> RepositoryResult<()> {
        if !cleaner.has_valid_rating() {
            return Err(RepositoryError::validation_with_context(
                format!("rating {} outside [0, 5]", cleaner.rating),
                ErrorContext::new("insert_cleaner")
                    .with_entity("cleaner")
                    .with_entity_id(&cleaner.id),
            ));
        }
        let mut data = self.data.write();
        if data.cleaners.iter().any(|c| c.id == cleaner.id) {
            return Err(duplicate("cleaner", &cleaner.id, "insert_cleaner"));
        }
        log::debug!("Inserted cleaner id={}", cleaner.id);
        data.cleaners.push(cleaner);
        Ok(())
    }

    fn insert_client(&self, client: ClientProfile) -> RepositoryResult<()> {
        let mut data = self.data.write();
        if data.clients.iter().any(|c| c.id == client.id) {
            return Err(duplicate("client", &client.id, "insert_client"));
        }
        log::debug!("Inserted client id={}", client.id);
        data.clients.push(client);
        Ok(())
    }

    fn insert_notification(&self, notification: Notification) -> RepositoryResult<()> {
        let mut data = self.data.write();
        if data.notifications.iter().any(|n| n.id == notification.id) {
            return Err(duplicate(
                "notification",
                &notification.id,
                "insert_notification",
            ));
        }
        data.notifications.push(notification);
        Ok(())
    }

    fn mark_notification_read(&self, id: &NotificationId) -> RepositoryResult<()> {
        let mut data = self.data.write();
        if crate::services::mark_as_read(&mut data.notifications, id) {
            Ok(())
        } else {
            Err(missing("notification", id, "mark_notification_read"))
        }
    }

    fn load_seed(&self, seed: SeedData) -> RepositoryResult<()> {
        validate_seed(&seed).map_err(|e| RepositoryError::from(e).with_operation("load_seed"))?;
        log::debug!(
            "Loading seed: {} jobs, {} cleaners, {} clients, {} notifications",
            seed.jobs.len(),
            seed.cleaners.len(),
            seed.clients.len(),
            seed.notifications.len()
        );
        *self.data.write() = seed;
        Ok(())
    }
}
