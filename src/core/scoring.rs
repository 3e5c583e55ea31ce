use std::collections::HashSet;

use crate::core::tokenize::normalize;

/// A job posting text field: either a single optional value or a sequence
/// of optional values. Both shapes flatten into one token stream; `None`
/// entries contribute nothing.
#[derive(Debug, Clone)]
pub enum TextField<'a> {
    Single(Option<&'a str>),
    Many(Vec<Option<&'a str>>),
}

/// Calculate a matching score (0-100) between a resume and a job posting
///
/// The score is the percentage of the posting's tokens (duplicates counted)
/// that also appear in the resume's token set:
///
/// score = round(matches / job_tokens * 100, 2)
///
/// Rounding is half away from zero (`f64::round`). Returns 0.0 when the
/// resume text is absent/empty, when it normalizes to no tokens, or when
/// the posting fields normalize to no tokens.
pub fn calculate_matching_score(resume_text: Option<&str>, job_fields: &[TextField<'_>]) -> f64 {
    let resume_tokens = resume_token_set(resume_text);
    score_against(&resume_tokens, job_fields)
}

/// Build the resume token set. Empty when no resume text is available.
pub(crate) fn resume_token_set(resume_text: Option<&str>) -> HashSet<String> {
    match resume_text {
        Some(text) if !text.is_empty() => normalize(Some(text)).into_iter().collect(),
        _ => HashSet::new(),
    }
}

/// Score job fields against an already-built resume token set
pub(crate) fn score_against(resume_tokens: &HashSet<String>, job_fields: &[TextField<'_>]) -> f64 {
    if resume_tokens.is_empty() {
        return 0.0;
    }

    let mut job_tokens: Vec<String> = Vec::new();
    for field in job_fields {
        match field {
            TextField::Single(value) => job_tokens.extend(normalize(*value)),
            TextField::Many(values) => {
                for value in values {
                    job_tokens.extend(normalize(*value));
                }
            }
        }
    }

    if job_tokens.is_empty() {
        return 0.0;
    }

    let matches = job_tokens
        .iter()
        .filter(|token| resume_tokens.contains(token.as_str()))
        .count();

    round_two_decimals(matches as f64 / job_tokens.len() as f64 * 100.0)
}

/// Round to two decimal places, half away from zero
#[inline]
fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
