//! Record store trait.
//!
//! The store is the data-access collaborator screens read their record
//! sequences from. Reads hand out owned snapshots in insertion order; the
//! filter and metrics functions then work on those snapshots.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use crate::models::{
    CleanerId, CleanerProfile, ClientId, ClientProfile, JobId, JobRecord, Notification,
    NotificationId, SeedData,
};

/// Access to the records of one dashboard session.
pub trait RecordStore: Send + Sync {
    fn jobs(&self) -> Vec<JobRecord>;

    fn cleaners(&self) -> Vec<CleanerProfile>;

    fn clients(&self) -> Vec<ClientProfile>;

    fn notifications(&self) -> Vec<Notification>;

    fn get_job(&self, id: &JobId) -> RepositoryResult<JobRecord>;

    fn get_cleaner(&self, id: &CleanerId) -> RepositoryResult<CleanerProfile>;

    fn get_client(&self, id: &ClientId) -> RepositoryResult<ClientProfile>;

    /// Jobs assigned to one cleaner, in store order.
    fn jobs_for_cleaner(&self, id: &CleanerId) -> Vec<JobRecord> {
        self.jobs()
            .into_iter()
            .filter(|j| &j.cleaner.id == id)
            .collect()
    }

    /// Jobs booked under a client's name, in store order.
    fn jobs_for_client(&self, client_name: &str) -> Vec<JobRecord> {
        self.jobs()
            .into_iter()
            .filter(|j| j.client == client_name)
            .collect()
    }

    /// Append a job. Rejects a duplicate id.
    fn insert_job(&self, job: JobRecord) -> RepositoryResult<()>;

    fn insert_cleaner(&self, cleaner: CleanerProfile) -> RepositoryResult<()>;

    fn insert_client(&self, client: ClientProfile) -> RepositoryResult<()>;

    fn insert_notification(&self, notification: Notification) -> RepositoryResult<()>;

    /// Flip a notification to read. Already-read notifications stay read.
    fn mark_notification_read(&self, id: &NotificationId) -> RepositoryResult<()>;

    /// Replace every collection with the given seed.
    fn load_seed(&self, seed: SeedData) -> RepositoryResult<()>;

    /// Snapshot of every collection, in the same shape as a seed document.
    fn snapshot(&self) -> SeedData {
        SeedData {
            jobs: self.jobs(),
            cleaners: self.cleaners(),
            clients: self.clients(),
            notifications: self.notifications(),
        }
    }
}
