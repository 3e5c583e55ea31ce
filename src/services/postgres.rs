use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

use crate::core::Scorer;
use crate::models::{Application, ApplicationPayload, CompanyEntry, Resume};

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}

/// PostgreSQL store for applications and resumes
///
/// Owns every mutation of the tracked postings so that scoring writes
/// happen inside one transaction: a batch upsert or a resume upload either
/// lands completely or not at all, and no posting is left scored against a
/// stale resume.
pub struct ApplicationStore {
    pool: PgPool,
}

impl ApplicationStore {
    /// Create a new store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL with URL: {}", url);

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Upsert a batch of scraped postings, scoring each against the
    /// current resume
    ///
    /// Rows are matched on job_id. A conflict refreshes every scraped
    /// field and the recomputed score but never touches status, so a
    /// posting the user already applied to stays applied across rescrapes.
    pub async fn upsert_applications(
        &self,
        payloads: &[ApplicationPayload],
        scorer: &Scorer,
    ) -> Result<Vec<Application>, StoreError> {
        let query = r#"
            INSERT INTO applications (
                job_id, job_title, company, location, salary, description,
                apply_link, search_key, posted_time, source, matching_score
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (job_id)
            DO UPDATE SET
                job_title = EXCLUDED.job_title,
                company = EXCLUDED.company,
                location = EXCLUDED.location,
                salary = EXCLUDED.salary,
                description = EXCLUDED.description,
                apply_link = EXCLUDED.apply_link,
                search_key = EXCLUDED.search_key,
                posted_time = EXCLUDED.posted_time,
                source = EXCLUDED.source,
                matching_score = EXCLUDED.matching_score
            RETURNING id, job_id, job_title, company, location, salary, description,
                      apply_link, search_key, posted_time, source, matching_score,
                      status, created_at
        "#;

        let mut tx = self.pool.begin().await?;
        let mut stored = Vec::with_capacity(payloads.len());

        for payload in payloads {
            let score = scorer.score_posting(
                &payload.job_title,
                payload.description.as_deref(),
                payload.search_key.as_deref(),
            );

            let row = sqlx::query(query)
                .bind(&payload.job_id)
                .bind(&payload.job_title)
                .bind(&payload.company)
                .bind(&payload.location)
                .bind(&payload.salary)
                .bind(&payload.description)
                .bind(&payload.apply_link)
                .bind(&payload.search_key)
                .bind(payload.posted_time)
                .bind(&payload.source)
                .bind(score)
                .fetch_one(&mut *tx)
                .await?;

            stored.push(application_from_row(&row));
        }

        tx.commit().await?;

        tracing::debug!("Upserted {} applications", stored.len());

        Ok(stored)
    }

    /// All applications in insertion order
    ///
    /// Insertion order gives the caller's stable sort a deterministic base.
    pub async fn list_all(&self) -> Result<Vec<Application>, StoreError> {
        let query = r#"
            SELECT id, job_id, job_title, company, location, salary, description,
                   apply_link, search_key, posted_time, source, matching_score,
                   status, created_at
            FROM applications
            ORDER BY id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(application_from_row).collect())
    }

    /// Mark an application as applied. Returns None for an unknown id.
    pub async fn mark_applied(&self, id: i64) -> Result<Option<Application>, StoreError> {
        let query = r#"
            UPDATE applications
            SET status = 'applied'
            WHERE id = $1
            RETURNING id, job_id, job_title, company, location, salary, description,
                      apply_link, search_key, posted_time, source, matching_score,
                      status, created_at
        "#;

        let row = sqlx::query(query).bind(id).fetch_optional(&self.pool).await?;

        Ok(row.as_ref().map(application_from_row))
    }

    /// Store a new resume and rescore every posting against it
    ///
    /// Insert and rescore run in one transaction: either all postings
    /// reflect the new resume or none do.
    pub async fn store_resume(
        &self,
        filename: &str,
        content: &[u8],
        text_content: &str,
        scorer: &Scorer,
    ) -> Result<Resume, StoreError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"
            INSERT INTO resumes (filename, content, text_content, uploaded_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING id, filename, content, text_content, uploaded_at
            "#,
        )
        .bind(filename)
        .bind(content)
        .bind(text_content)
        .fetch_one(&mut *tx)
        .await?;

        let resume = resume_from_row(&row);

        let postings = sqlx::query(
            r#"
            SELECT id, job_title, description, search_key
            FROM applications
            "#,
        )
        .fetch_all(&mut *tx)
        .await?;

        for posting in &postings {
            let score = scorer.score_posting(
                posting.get::<String, _>("job_title").as_str(),
                posting.get::<Option<String>, _>("description").as_deref(),
                posting.get::<Option<String>, _>("search_key").as_deref(),
            );

            sqlx::query("UPDATE applications SET matching_score = $1 WHERE id = $2")
                .bind(score)
                .bind(posting.get::<i64, _>("id"))
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        tracing::info!(
            "Stored resume {} and rescored {} applications",
            resume.filename,
            postings.len()
        );

        Ok(resume)
    }

    /// The most recently uploaded resume, if any
    pub async fn get_current_resume(&self) -> Result<Option<Resume>, StoreError> {
        let query = r#"
            SELECT id, filename, content, text_content, uploaded_at
            FROM resumes
            ORDER BY uploaded_at DESC
            LIMIT 1
        "#;

        let row = sqlx::query(query).fetch_optional(&self.pool).await?;

        Ok(row.as_ref().map(resume_from_row))
    }

    /// Distinct companies with the first apply link seen for each
    pub async fn list_companies(&self) -> Result<Vec<CompanyEntry>, StoreError> {
        let query = r#"
            SELECT company, apply_link
            FROM applications
            ORDER BY id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let pairs: Vec<(String, Option<String>)> = rows
            .iter()
            .map(|row| (row.get("company"), row.get("apply_link")))
            .collect();

        Ok(collect_companies(pairs))
    }

    /// Raw search keys of all postings that carry one
    pub async fn list_search_keys(&self) -> Result<Vec<String>, StoreError> {
        let query = r#"
            SELECT search_key
            FROM applications
            WHERE search_key IS NOT NULL AND search_key <> ''
            ORDER BY id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(|row| row.get("search_key")).collect())
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn application_from_row(row: &PgRow) -> Application {
    Application {
        id: row.get("id"),
        job_id: row.get("job_id"),
        job_title: row.get("job_title"),
        company: row.get("company"),
        location: row.get("location"),
        salary: row.get("salary"),
        description: row.get("description"),
        apply_link: row.get("apply_link"),
        search_key: row.get("search_key"),
        posted_time: row.get("posted_time"),
        source: row.get("source"),
        matching_score: row.get("matching_score"),
        status: row.get("status"),
        created_at: row.get("created_at"),
    }
}

fn resume_from_row(row: &PgRow) -> Resume {
    Resume {
        id: row.get("id"),
        filename: row.get("filename"),
        content: row.get("content"),
        text_content: row.get("text_content"),
        uploaded_at: row.get("uploaded_at"),
    }
}

/// Collapse (company, apply_link) rows to one entry per company
///
/// The first occurrence wins, matching ingest order; the result is sorted
/// by company name.
fn collect_companies(pairs: Vec<(String, Option<String>)>) -> Vec<CompanyEntry> {
    let mut entries: Vec<CompanyEntry> = Vec::new();

    for (company, apply_link) in pairs {
        if entries.iter().any(|entry| entry.company == company) {
            continue;
        }
        entries.push(CompanyEntry {
            company,
            career_site: apply_link,
        });
    }

    entries.sort_by(|a, b| a.company.cmp(&b.company));
    entries
}
