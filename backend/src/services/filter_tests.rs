use super::*;
use crate::services::fixtures::{create_test_job, date, job_on};

fn sample_jobs() -> Vec<JobRecord> {
    vec![
        create_test_job("1", "1", JobStatus::Scheduled),
        create_test_job("2", "2", JobStatus::InProgress),
        create_test_job("3", "3", JobStatus::Completed),
        create_test_job("4", "4", JobStatus::Scheduled),
    ]
}

fn ids(jobs: &[&JobRecord]) -> Vec<String> {
    jobs.iter().map(|j| j.id.to_string()).collect()
}

#[test]
fn test_unset_filter_is_identity() {
    let jobs = sample_jobs();
    let filter = JobFilter::default();
    assert!(filter.is_unset());

    let result = filter_jobs(&jobs, &filter);
    assert_eq!(result.len(), jobs.len());
    assert!(result.iter().zip(jobs.iter()).all(|(a, b)| *a == b));
}

#[test]
fn test_filter_by_cleaner_returns_single_job_in_place() {
    let jobs = sample_jobs();
    let filter = JobFilter::default().with_cleaner("2");

    let result = filter_jobs(&jobs, &filter);
    assert_eq!(ids(&result), vec!["2"]);
    assert!(std::ptr::eq(result[0], &jobs[1]));
}

#[test]
fn test_filter_by_status_only_returns_that_status() {
    let jobs = sample_jobs();
    for status in JobStatus::ALL {
        let result = filter_jobs(&jobs, &JobFilter::default().with_status(status));
        assert!(result.len() <= jobs.len());
        assert!(result.iter().all(|j| j.status == status));
    }

    let scheduled = filter_jobs(&jobs, &JobFilter::default().with_status(JobStatus::Scheduled));
    assert_eq!(ids(&scheduled), vec!["1", "4"]);
}

#[test]
fn test_criteria_combine_with_and() {
    let jobs = sample_jobs();
    let filter = JobFilter::default()
        .with_cleaner("1")
        .with_status(JobStatus::Completed);
    assert!(filter_jobs(&jobs, &filter).is_empty());

    let filter = JobFilter::default()
        .with_cleaner("4")
        .with_status(JobStatus::Scheduled);
    assert_eq!(ids(&filter_jobs(&jobs, &filter)), vec!["4"]);
}

#[test]
fn test_cleaner_match_is_exact() {
    let jobs = sample_jobs();
    assert!(filter_jobs(&jobs, &JobFilter::default().with_cleaner("12")).is_empty());
    assert!(filter_jobs(&jobs, &JobFilter::default().with_cleaner(" 2")).is_empty());
}

#[test]
fn test_date_range_is_inclusive() {
    let jobs = vec![
        job_on("a", date(2024, 1, 10)),
        job_on("b", date(2024, 1, 11)),
        job_on("c", date(2024, 1, 12)),
        job_on("d", date(2024, 1, 13)),
    ];
    let filter =
        JobFilter::default().with_date_range(Some(date(2024, 1, 11)), Some(date(2024, 1, 12)));
    assert_eq!(ids(&filter_jobs(&jobs, &filter)), vec!["b", "c"]);
}

#[test]
fn test_open_date_bounds() {
    let jobs = vec![
        job_on("a", date(2024, 1, 10)),
        job_on("b", date(2024, 1, 11)),
        job_on("c", date(2024, 1, 12)),
    ];

    let from_only = JobFilter::default().with_date_range(Some(date(2024, 1, 11)), None);
    assert_eq!(ids(&filter_jobs(&jobs, &from_only)), vec!["b", "c"]);

    let to_only = JobFilter::default().with_date_range(None, Some(date(2024, 1, 11)));
    assert_eq!(ids(&filter_jobs(&jobs, &to_only)), vec!["a", "b"]);
}

#[test]
fn test_inverted_range_is_empty_not_error() {
    let jobs = vec![job_on("a", date(2024, 1, 10))];
    let filter =
        JobFilter::default().with_date_range(Some(date(2024, 1, 12)), Some(date(2024, 1, 9)));
    assert!(filter_jobs(&jobs, &filter).is_empty());
}

#[test]
fn test_filter_is_idempotent() {
    let jobs = sample_jobs();
    let filter = JobFilter::default().with_status(JobStatus::Scheduled);
    let once: Vec<JobRecord> = filter_jobs(&jobs, &filter).into_iter().cloned().collect();
    let twice = filter_jobs(&once, &filter);
    assert_eq!(ids(&twice), vec!["1", "4"]);
    assert_eq!(filter_jobs(&jobs, &filter), filter_jobs(&jobs, &filter));
}

#[test]
fn test_from_selections_treats_sentinels_as_unset() {
    let filter = JobFilter::from_selections("", "", None, None).unwrap();
    assert!(filter.is_unset());

    let filter = JobFilter::from_selections(ALL_SENTINEL, ALL_SENTINEL, None, None).unwrap();
    assert!(filter.is_unset());

    let filter = JobFilter::from_selections("3", "In Progress", None, None).unwrap();
    assert_eq!(filter.cleaner_id, Some(CleanerId::new("3")));
    assert_eq!(filter.status, Some(JobStatus::InProgress));
}

#[test]
fn test_from_selections_rejects_inexact_status() {
    let err = JobFilter::from_selections("", "completed", None, None).unwrap_err();
    assert_eq!(err, FilterError::UnknownStatus("completed".to_string()));
}

#[test]
fn test_clear_resets_everything() {
    let mut filter = JobFilter::default()
        .with_cleaner("1")
        .with_status(JobStatus::Completed)
        .with_date_range(Some(date(2024, 1, 1)), None);
    assert!(!filter.is_unset());
    filter.clear();
    assert!(filter.is_unset());
}

#[test]
fn test_apply_filter_reports_empty_state() {
    let jobs = sample_jobs();
    let outcome = apply_filter(&jobs, &JobFilter::default().with_cleaner("99"));
    assert!(outcome.is_empty());
    assert_eq!(outcome.total, 4);
    assert!(outcome.filter_active);

    let outcome = apply_filter(&[], &JobFilter::default());
    assert!(outcome.is_empty());
    assert!(!outcome.filter_active);
}
