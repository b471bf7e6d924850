use super::*;
use crate::models::{Availability, JobStatus};
use crate::services::fixtures::{
    create_test_cleaner, create_test_job, date, job_on, with_cost, with_rating,
};

#[test]
fn test_spend_and_completion_rate_example() {
    let jobs = vec![
        with_cost(create_test_job("1", "1", JobStatus::Scheduled), 100.0),
        with_cost(create_test_job("2", "1", JobStatus::Completed), 80.0),
        with_cost(create_test_job("3", "1", JobStatus::Completed), 120.0),
    ];

    assert_eq!(total_spend(&jobs), 200.0);
    assert!((completion_rate(&jobs) - 200.0 / 3.0).abs() < 1e-9);
    assert_eq!(round_percent(completion_rate(&jobs)), 66.67);
}

#[test]
fn test_average_rating_skips_unrated() {
    let jobs = vec![
        with_rating(create_test_job("1", "1", JobStatus::Completed), 5),
        with_rating(create_test_job("2", "1", JobStatus::Completed), 4),
        create_test_job("3", "1", JobStatus::Scheduled),
    ];
    assert_eq!(average_rating(&jobs), 4.5);
}

#[test]
fn test_average_rating_without_ratings_is_zero() {
    let jobs = vec![create_test_job("1", "1", JobStatus::Completed)];
    let avg = average_rating(&jobs);
    assert_eq!(avg, 0.0);
    assert!(!avg.is_nan());
    assert_eq!(average_rating(&[]), 0.0);
}

#[test]
fn test_total_spend_without_completed_is_zero() {
    let jobs = vec![
        with_cost(create_test_job("1", "1", JobStatus::Scheduled), 100.0),
        with_cost(create_test_job("2", "1", JobStatus::Cancelled), 50.0),
        with_cost(create_test_job("3", "1", JobStatus::InProgress), 75.0),
    ];
    assert_eq!(total_spend(&jobs), 0.0);
}

#[test]
fn test_total_spend_treats_missing_cost_as_zero() {
    let jobs = vec![
        create_test_job("1", "1", JobStatus::Completed),
        with_cost(create_test_job("2", "1", JobStatus::Completed), 60.0),
    ];
    assert_eq!(total_spend(&jobs), 60.0);
}

#[test]
fn test_completion_rate_empty_is_zero() {
    assert_eq!(completion_rate(&[]), 0.0);
}

#[test]
fn test_active_workers_excludes_off_duty() {
    let cleaners = vec![
        create_test_cleaner("1", Availability::Busy),
        create_test_cleaner("2", Availability::Available),
        create_test_cleaner("3", Availability::Busy),
        create_test_cleaner("4", Availability::OffDuty),
    ];
    assert_eq!(
        active_workers(&cleaners),
        ActiveWorkers {
            active: 3,
            total: 4
        }
    );
    assert_eq!(active_workers(&[]), ActiveWorkers { active: 0, total: 0 });
}

#[test]
fn test_compute_job_metrics_bundle() {
    let jobs = vec![
        with_rating(
            with_cost(create_test_job("1", "1", JobStatus::Completed), 120.0),
            5,
        ),
        with_rating(
            with_cost(create_test_job("2", "2", JobStatus::Completed), 80.0),
            4,
        ),
        with_cost(create_test_job("3", "3", JobStatus::Scheduled), 120.0),
    ];
    let metrics = compute_job_metrics(&jobs);

    assert_eq!(metrics.total_jobs, 3);
    assert_eq!(metrics.completed_count, 2);
    assert_eq!(metrics.rated_count, 2);
    assert_eq!(metrics.average_rating, 4.5);
    assert_eq!(metrics.total_spend, 200.0);
    assert_eq!(round_percent(metrics.completion_rate), 66.67);
}

#[test]
fn test_compute_job_metrics_empty() {
    let metrics = compute_job_metrics(&[]);
    assert_eq!(metrics.total_jobs, 0);
    assert_eq!(metrics.completion_rate, 0.0);
    assert_eq!(metrics.average_rating, 0.0);
    assert_eq!(metrics.total_spend, 0.0);
}

#[test]
fn test_todays_jobs() {
    let today = date(2024, 1, 15);
    let jobs = vec![
        job_on("a", today),
        job_on("b", date(2024, 1, 16)),
        job_on("c", today),
    ];
    let result = todays_jobs(&jobs, today);
    let ids: Vec<&str> = result.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn test_feedback_entries_skip_blank() {
    let mut with_feedback = create_test_job("1", "1", JobStatus::Completed);
    with_feedback.feedback = Some("Excellent work!".to_string());
    let mut blank = create_test_job("2", "1", JobStatus::Completed);
    blank.feedback = Some("   ".to_string());
    let none = create_test_job("3", "1", JobStatus::Scheduled);

    let jobs = vec![with_feedback, blank, none];
    let entries = feedback_entries(&jobs);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id.as_str(), "1");
}
