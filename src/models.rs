//! Domain models shared by the query layer and the HTTP adapter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a candidate application as reported by the server.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Submitted,
    InReview,
    Interviewing,
    Offered,
    Rejected,
}

/// A candidate application to one of the recruiter's jobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub candidate_name: String,
    pub candidate_email: String,
    pub status: ApplicationStatus,
    pub submitted_at: DateTime<Utc>,
}

impl Application {
    pub fn new(
        id: String,
        job_id: String,
        candidate_name: String,
        candidate_email: String,
    ) -> Self {
        Self {
            id,
            job_id,
            candidate_name,
            candidate_email,
            status: ApplicationStatus::Submitted,
            submitted_at: Utc::now(),
        }
    }

    pub fn with_status(mut self, status: ApplicationStatus) -> Self {
        self.status = status;
        self
    }
}

/// Publication status of a job posting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Draft,
    Published,
    Closed,
}

/// A job posting owned by the recruiter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub location: String,
    pub status: JobStatus,
    pub posted_at: DateTime<Utc>,
}

impl Job {
    pub fn new(id: String, title: String, location: String) -> Self {
        Self {
            id,
            title,
            location,
            status: JobStatus::Draft,
            posted_at: Utc::now(),
        }
    }

    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }
}
