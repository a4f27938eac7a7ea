use std::path::Path;

use rusqlite::{params, Connection, Row};
use tracing::{debug, info};

use crate::domain::{JobPosting, JobRecord, JobSummary, RemoteFlag};
use crate::error::{IngestError, Result};

const REBUILD_JOBS_TABLE: &str = r#"
    DROP TABLE IF EXISTS jobs;
    CREATE TABLE jobs (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        title       TEXT,
        company     TEXT,
        description TEXT,
        location    TEXT,
        job_type    TEXT,
        date_posted TEXT,
        min_amount  REAL,
        max_amount  REAL,
        is_remote   TEXT,
        job_url     TEXT
    );
"#;

const INSERT_JOB: &str = "INSERT INTO jobs (title, company, description, location, job_type, date_posted,
                          min_amount, max_amount, is_remote, job_url)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";

const SELECT_JOB_COLUMNS: &str = "SELECT id, title, company, description, location, job_type, date_posted,
            min_amount, max_amount, is_remote, job_url
     FROM jobs";

/// SQLite-backed store for the canonical jobs table.
///
/// The table is a derived cache of the feeds: [`JobStore::rebuild`] drops it
/// and every run repopulates it from scratch. Only one writer is expected.
pub struct JobStore {
    conn: Connection,
}

impl JobStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Drops and recreates the jobs table. All previously stored rows are lost.
    pub fn rebuild(&self) -> Result<()> {
        self.conn
            .execute_batch(REBUILD_JOBS_TABLE)
            .map_err(IngestError::StoreInit)?;
        info!("Jobs table rebuilt");
        Ok(())
    }

    /// Inserts one posting and returns its assigned id.
    pub fn insert(&self, job: &JobPosting) -> Result<i64> {
        self.conn.execute(
            INSERT_JOB,
            params![
                job.title,
                job.company,
                job.description,
                job.location,
                job.job_type,
                job.date_posted,
                job.min_amount,
                job.max_amount,
                job.is_remote.as_str(),
                job.job_url,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, company = %job.company, "Inserted job");
        Ok(id)
    }

    /// Inserts postings in order inside one transaction; either all rows land
    /// or none do. Returns the assigned ids in insertion order.
    pub fn insert_all(&self, jobs: &[JobPosting]) -> Result<Vec<i64>> {
        let tx = self.conn.unchecked_transaction()?;
        let mut ids = Vec::with_capacity(jobs.len());
        for job in jobs {
            ids.push(self.insert(job)?);
        }
        tx.commit()?;
        Ok(ids)
    }

    /// Every stored job as `(id, title)`, in insertion order.
    pub fn list_jobs(&self) -> Result<Vec<JobSummary>> {
        let mut stmt = self.conn.prepare("SELECT id, title FROM jobs ORDER BY id")?;
        let mut rows = stmt.query([])?;
        let mut jobs = Vec::new();
        while let Some(row) = rows.next()? {
            jobs.push(JobSummary {
                id: row.get(0)?,
                title: row.get(1)?,
            });
        }
        Ok(jobs)
    }

    /// Every stored job with all columns, in insertion order.
    pub fn all_jobs(&self) -> Result<Vec<JobRecord>> {
        let mut stmt = self.conn.prepare(&format!("{} ORDER BY id", SELECT_JOB_COLUMNS))?;
        let mut rows = stmt.query([])?;
        let mut jobs = Vec::new();
        while let Some(row) = rows.next()? {
            jobs.push(job_from_row(row)?);
        }
        Ok(jobs)
    }

    pub fn get_job(&self, id: i64) -> Result<Option<JobRecord>> {
        let mut stmt = self.conn.prepare(&format!("{} WHERE id = ?1", SELECT_JOB_COLUMNS))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            Ok(Some(job_from_row(row)?))
        } else {
            Ok(None)
        }
    }

    pub fn count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM jobs", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    pub fn table_exists(&self) -> Result<bool> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1")?;
        let mut rows = stmt.query(params![crate::constants::JOBS_TABLE])?;
        Ok(rows.next()?.is_some())
    }
}

fn job_from_row(row: &Row<'_>) -> Result<JobRecord> {
    let is_remote: String = row.get(9)?;
    let is_remote = is_remote
        .parse::<RemoteFlag>()
        .map_err(|_| IngestError::InvalidColumn {
            column: "is_remote",
            value: is_remote.clone(),
        })?;

    Ok(JobRecord {
        id: row.get(0)?,
        posting: JobPosting {
            title: row.get(1)?,
            company: row.get(2)?,
            description: row.get(3)?,
            location: row.get(4)?,
            job_type: row.get(5)?,
            date_posted: row.get(6)?,
            min_amount: row.get(7)?,
            max_amount: row.get(8)?,
            is_remote,
            job_url: row.get(10)?,
        },
    })
}
