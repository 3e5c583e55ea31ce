use std::collections::HashSet;

use crate::core::scoring::{resume_token_set, score_against, TextField};
use crate::models::Application;

/// Scores job postings against the current resume
///
/// The resume token set is built once at construction, so bulk rescores
/// (posting ingest, resume upload) tokenize the resume a single time
/// instead of once per posting.
#[derive(Debug, Clone)]
pub struct Scorer {
    resume_tokens: HashSet<String>,
}

impl Scorer {
    pub fn new(resume_text: Option<&str>) -> Self {
        Self {
            resume_tokens: resume_token_set(resume_text),
        }
    }

    /// Scorer for the no-resume state; every posting scores 0.0
    pub fn without_resume() -> Self {
        Self {
            resume_tokens: HashSet::new(),
        }
    }

    pub fn has_resume(&self) -> bool {
        !self.resume_tokens.is_empty()
    }

    /// Score an arbitrary set of posting text fields
    pub fn score_fields(&self, job_fields: &[TextField<'_>]) -> f64 {
        score_against(&self.resume_tokens, job_fields)
    }

    /// Score the text fields of a posting that feed the matching score
    pub fn score_posting(
        &self,
        job_title: &str,
        description: Option<&str>,
        search_key: Option<&str>,
    ) -> f64 {
        self.score_fields(&[
            TextField::Single(Some(job_title)),
            TextField::Single(description),
            TextField::Single(search_key),
        ])
    }

    /// Recompute the matching score of every application in place
    pub fn rescore(&self, applications: &mut [Application]) {
        for application in applications.iter_mut() {
            application.matching_score = self.score_posting(
                &application.job_title,
                application.description.as_deref(),
                application.search_key.as_deref(),
            );
        }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::without_resume()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApplicationStatus;
    use chrono::Utc;

    fn create_application(id: i64, title: &str, description: Option<&str>) -> Application {
        Application {
            id,
            job_id: format!("job-{}", id),
            job_title: title.to_string(),
            company: "Acme".to_string(),
            location: None,
            salary: None,
            description: description.map(str::to_owned),
            apply_link: None,
            search_key: None,
            posted_time: Utc::now(),
            source: "hiring_cafe".to_string(),
            matching_score: 0.0,
            status: ApplicationStatus::NotApplied,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_scorer_without_resume_scores_zero() {
        let scorer = Scorer::without_resume();
        assert!(!scorer.has_resume());
        assert_eq!(scorer.score_posting("Rust Engineer", None, None), 0.0);
    }

    #[test]
    fn test_scorer_matches_posting_fields() {
        let scorer = Scorer::new(Some("Rust engineer with tokio experience"));
        assert!(scorer.has_resume());

        // title [rust, engineer] + description [tokio, services] -> 3 of 4
        let score = scorer.score_posting("Rust Engineer", Some("tokio services"), None);
        assert_eq!(score, 75.0);
    }

    #[test]
    fn test_scorer_matches_python_resume_reuse() {
        let scorer = Scorer::new(Some("Go Rust"));
        let score = scorer.score_posting("I love Go and Go again", None, None);
        assert_eq!(score, 33.33);
    }

    #[test]
    fn test_rescore_updates_all_applications() {
        let scorer = Scorer::new(Some("rust"));
        let mut applications = vec![
            create_application(1, "Rust Engineer", None),
            create_application(2, "Java Engineer", None),
        ];

        scorer.rescore(&mut applications);

        assert_eq!(applications[0].matching_score, 50.0);
        assert_eq!(applications[1].matching_score, 0.0);
    }

    #[test]
    fn test_rescore_with_empty_resume_zeroes_scores() {
        let scorer = Scorer::without_resume();
        let mut applications = vec![create_application(1, "Rust Engineer", None)];
        applications[0].matching_score = 87.5;

        scorer.rescore(&mut applications);

        assert_eq!(applications[0].matching_score, 0.0);
    }
}
