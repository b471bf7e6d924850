//! Record builders shared by the unit tests.

use chrono::{NaiveDate, NaiveTime};

use crate::models::{
    Availability, CleanerId, CleanerProfile, CleanerRef, JobId, JobRecord, JobStatus, Rating,
};

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(crate) fn create_test_job(id: &str, cleaner_id: &str, status: JobStatus) -> JobRecord {
    JobRecord {
        id: JobId::new(id),
        date: date(2024, 1, 15),
        time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        address: format!("{} Main St, Dallas, TX", id),
        cleaner: CleanerRef {
            id: CleanerId::new(cleaner_id),
            name: format!("Cleaner {}", cleaner_id),
            avatar: None,
        },
        status,
        client: format!("Client {}", id),
        title: None,
        notes: None,
        rating: None,
        feedback: None,
        cost: None,
    }
}

pub(crate) fn job_on(id: &str, day: NaiveDate) -> JobRecord {
    JobRecord {
        date: day,
        ..create_test_job(id, "1", JobStatus::Scheduled)
    }
}

pub(crate) fn with_cost(mut job: JobRecord, cost: f64) -> JobRecord {
    job.cost = Some(cost);
    job
}

pub(crate) fn with_rating(mut job: JobRecord, rating: u8) -> JobRecord {
    job.rating = Some(Rating::new(rating).unwrap());
    job
}

pub(crate) fn create_test_cleaner(id: &str, availability: Availability) -> CleanerProfile {
    CleanerProfile {
        id: CleanerId::new(id),
        name: format!("Cleaner {}", id),
        phone: String::new(),
        email: String::new(),
        avatar: None,
        rating: 4.5,
        total_jobs: 10,
        availability,
        specialties: vec![],
        join_date: date(2023, 3, 15),
    }
}
