use chrono::{DateTime, Duration, Utc};

use crate::models::{Application, ListFilter, SortDirection};

/// Resolve a timeframe parameter to a posted-time cutoff
///
/// Recognized windows: "24h", "3d", "5d". `None`, "all", and anything
/// unrecognized mean no cutoff; the filter stays total over all inputs.
pub fn timeframe_cutoff(timeframe: Option<&str>, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    match timeframe? {
        "24h" => Some(now - Duration::hours(24)),
        "3d" => Some(now - Duration::days(3)),
        "5d" => Some(now - Duration::days(5)),
        _ => None,
    }
}

/// Apply status/source/timeframe/keyword predicates and the posted-time
/// sort to an in-memory application list
///
/// `now` is explicit so the timeframe window is a pure function of its
/// inputs. The sort runs last and is stable: postings with equal
/// `posted_time` keep their incoming relative order.
pub fn filter_applications(
    applications: Vec<Application>,
    filter: &ListFilter,
    now: DateTime<Utc>,
) -> Vec<Application> {
    let cutoff = timeframe_cutoff(filter.timeframe.as_deref(), now);

    let mut results: Vec<Application> = applications
        .into_iter()
        .filter(|application| matches_status(application, filter.status.as_deref()))
        .filter(|application| matches_source(application, filter.source.as_deref()))
        .filter(|application| matches_keyword(application, filter.keyword.as_deref()))
        .filter(|application| cutoff.map_or(true, |cutoff| application.posted_time >= cutoff))
        .collect();

    match filter.sort {
        SortDirection::Desc => results.sort_by(|a, b| b.posted_time.cmp(&a.posted_time)),
        SortDirection::Asc => results.sort_by(|a, b| a.posted_time.cmp(&b.posted_time)),
    }

    results
}

/// "all" and absent mean no status filter; otherwise exact match
#[inline]
fn matches_status(application: &Application, status: Option<&str>) -> bool {
    match status {
        None | Some("all") => true,
        Some(status) => application.status.as_str() == status,
    }
}

/// "all" and absent mean no source filter; otherwise exact match
#[inline]
fn matches_source(application: &Application, source: Option<&str>) -> bool {
    match source {
        None | Some("all") => true,
        Some(source) => application.source == source,
    }
}

/// Case-insensitive containment match on the posting's search key
#[inline]
fn matches_keyword(application: &Application, keyword: Option<&str>) -> bool {
    match keyword {
        None | Some("all") => true,
        Some(keyword) => application
            .search_key
            .as_deref()
            .map_or(false, |search_key| {
                search_key.to_lowercase().contains(&keyword.to_lowercase())
            }),
    }
}
