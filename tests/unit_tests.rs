// Unit tests for JobWatcher

use chrono::{DateTime, Duration, TimeZone, Utc};
use jobwatcher::core::{
    filters::{filter_applications, timeframe_cutoff},
    scoring::{calculate_matching_score, TextField},
    tokenize::normalize,
};
use jobwatcher::models::{Application, ApplicationStatus, ListFilter, SortDirection};

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn create_application(
    id: i64,
    posted_hours_ago: i64,
    status: ApplicationStatus,
    source: &str,
) -> Application {
    Application {
        id,
        job_id: format!("job-{}", id),
        job_title: "Backend Engineer".to_string(),
        company: "Acme".to_string(),
        location: Some("Remote".to_string()),
        salary: None,
        description: Some("Rust services".to_string()),
        apply_link: None,
        search_key: Some("backend".to_string()),
        posted_time: fixed_now() - Duration::hours(posted_hours_ago),
        source: source.to_string(),
        matching_score: 0.0,
        status,
        created_at: fixed_now(),
    }
}

fn all_filter(sort: SortDirection) -> ListFilter {
    ListFilter {
        status: Some("all".to_string()),
        source: Some("all".to_string()),
        timeframe: Some("all".to_string()),
        keyword: None,
        sort,
    }
}

#[test]
fn test_normalize_empty_inputs() {
    assert_eq!(normalize(None), Vec::<String>::new());
    assert_eq!(normalize(Some("")), Vec::<String>::new());
}

#[test]
fn test_normalize_strips_punctuation() {
    assert_eq!(normalize(Some("C++ is great!")), vec!["c", "is", "great"]);
}

#[test]
fn test_normalize_case_folds_and_keeps_digits() {
    assert_eq!(
        normalize(Some("Senior RUST Engineer (2024)")),
        vec!["senior", "rust", "engineer", "2024"]
    );
}

#[test]
fn test_score_absent_resume_is_zero() {
    assert_eq!(
        calculate_matching_score(None, &[TextField::Single(Some("anything"))]),
        0.0
    );
    assert_eq!(
        calculate_matching_score(Some(""), &[TextField::Single(Some("anything"))]),
        0.0
    );
}

#[test]
fn test_score_empty_job_fields_is_zero() {
    assert_eq!(calculate_matching_score(Some("python"), &[]), 0.0);
}

#[test]
fn test_score_duplicate_job_tokens_count() {
    // job tokens = [i, love, go, and, go, again]; "go" matches twice
    let score = calculate_matching_score(
        Some("Go Rust"),
        &[TextField::Single(Some("I love Go and Go again"))],
    );
    assert_eq!(score, 33.33);
}

#[test]
fn test_score_halfway_rounds_away_from_zero() {
    // 1 match out of 32 job tokens: 3.125 -> 3.13
    let filler: Vec<String> = (0..31).map(|i| format!("w{}", i)).collect();
    let job_text = format!("alpha {}", filler.join(" "));
    let score = calculate_matching_score(Some("alpha"), &[TextField::Single(Some(&job_text))]);
    assert_eq!(score, 3.13);
}

#[test]
fn test_score_stays_in_range() {
    let pairs = [
        ("rust tokio actix", "Rust engineer, tokio and actix"),
        ("python", "Rust engineer"),
        ("a", "a a a a a a a a"),
    ];
    for (resume, job) in pairs {
        let score = calculate_matching_score(Some(resume), &[TextField::Single(Some(job))]);
        assert!(
            (0.0..=100.0).contains(&score),
            "score {} out of range for ({:?}, {:?})",
            score,
            resume,
            job
        );
    }
}

#[test]
fn test_score_is_idempotent() {
    let fields = [
        TextField::Single(Some("Backend Engineer")),
        TextField::Many(vec![Some("rust"), None, Some("postgres")]),
    ];
    let first = calculate_matching_score(Some("rust backend"), &fields);
    let second = calculate_matching_score(Some("rust backend"), &fields);
    assert_eq!(first, second);
}

#[test]
fn test_filter_all_sentinels_return_everything() {
    let applications = vec![
        create_application(1, 30, ApplicationStatus::Applied, "hiring_cafe"),
        create_application(2, 2, ApplicationStatus::NotApplied, "linkedin"),
        create_application(3, 70, ApplicationStatus::NotApplied, "hiring_cafe"),
    ];

    let results = filter_applications(applications, &all_filter(SortDirection::Asc), fixed_now());
    assert_eq!(results.len(), 3);
}

#[test]
fn test_filter_timeframe_24h_boundary() {
    let applications = vec![
        create_application(1, 25, ApplicationStatus::NotApplied, "hiring_cafe"),
        create_application(2, 23, ApplicationStatus::NotApplied, "hiring_cafe"),
    ];
    let filter = ListFilter {
        timeframe: Some("24h".to_string()),
        ..all_filter(SortDirection::Asc)
    };

    let results = filter_applications(applications, &filter, fixed_now());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 2);
}

#[test]
fn test_filter_unknown_timeframe_keeps_everything() {
    let applications = vec![
        create_application(1, 25, ApplicationStatus::NotApplied, "hiring_cafe"),
        create_application(2, 23, ApplicationStatus::NotApplied, "hiring_cafe"),
    ];
    let filter = ListFilter {
        timeframe: Some("bogus".to_string()),
        ..all_filter(SortDirection::Asc)
    };

    let results = filter_applications(applications, &filter, fixed_now());
    assert_eq!(results.len(), 2);
}

#[test]
fn test_filter_desc_sorts_newest_first() {
    let applications = vec![
        create_application(1, 48, ApplicationStatus::NotApplied, "hiring_cafe"),
        create_application(2, 1, ApplicationStatus::NotApplied, "hiring_cafe"),
        create_application(3, 12, ApplicationStatus::NotApplied, "hiring_cafe"),
    ];

    let results = filter_applications(applications, &all_filter(SortDirection::Desc), fixed_now());
    let times: Vec<_> = results.iter().map(|a| a.posted_time).collect();

    for window in times.windows(2) {
        assert!(window[0] >= window[1], "posted_time not non-increasing");
    }
    assert_eq!(results[0].id, 2);
}

#[test]
fn test_filter_sort_stable_on_equal_timestamps() {
    let applications = vec![
        create_application(10, 6, ApplicationStatus::NotApplied, "hiring_cafe"),
        create_application(20, 6, ApplicationStatus::NotApplied, "hiring_cafe"),
        create_application(30, 6, ApplicationStatus::NotApplied, "hiring_cafe"),
    ];

    let results = filter_applications(applications, &all_filter(SortDirection::Desc), fixed_now());
    let ids: Vec<i64> = results.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![10, 20, 30]);
}

#[test]
fn test_filter_status_and_source_compose() {
    let applications = vec![
        create_application(1, 1, ApplicationStatus::NotApplied, "hiring_cafe"),
        create_application(2, 2, ApplicationStatus::NotApplied, "linkedin"),
        create_application(3, 3, ApplicationStatus::Applied, "hiring_cafe"),
    ];
    let filter = ListFilter {
        status: Some("not_applied".to_string()),
        source: Some("hiring_cafe".to_string()),
        ..all_filter(SortDirection::Asc)
    };

    let results = filter_applications(applications, &filter, fixed_now());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 1);
}

#[test]
fn test_timeframe_cutoff_windows() {
    let now = fixed_now();
    assert_eq!(timeframe_cutoff(Some("24h"), now), Some(now - Duration::hours(24)));
    assert_eq!(timeframe_cutoff(Some("3d"), now), Some(now - Duration::days(3)));
    assert_eq!(timeframe_cutoff(Some("5d"), now), Some(now - Duration::days(5)));
    assert_eq!(timeframe_cutoff(Some("all"), now), None);
    assert_eq!(timeframe_cutoff(None, now), None);
}
