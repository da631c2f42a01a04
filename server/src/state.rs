use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use review_client::{
    ApplicationId, ApplicationRecord, ApplicationStatus, Candidate, Decision, JobSummary,
};
use serde::Deserialize;
use uuid::Uuid;

/// An application as the company API stores it: the public record plus
/// the owning company and an insertion sequence used as a tie-break.
#[derive(Clone, Debug)]
pub struct StoredApplication {
    pub company_id: String,
    pub seq: u64,
    pub record: ApplicationRecord,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub candidate: Candidate,
    pub job: JobSummary,
    #[serde(default = "Utc::now")]
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ChangeStatusError {
    NotFound,
    AlreadyReviewed(ApplicationStatus),
}

// application_id → StoredApplication
#[derive(Clone, Debug)]
pub struct AppState {
    pub applications: Arc<DashMap<ApplicationId, StoredApplication>>,
    next_seq: Arc<AtomicU64>,
    pub jwt_secret: Arc<String>,
}

impl AppState {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        AppState {
            applications: Arc::new(DashMap::new()),
            next_seq: Arc::new(AtomicU64::new(0)),
            jwt_secret: Arc::new(jwt_secret.into()),
        }
    }

    /// Stores a new pending application under a fresh id.
    pub fn insert_application(&self, company_id: &str, new: NewApplication) -> ApplicationId {
        let id = ApplicationId::new(Uuid::new_v4().to_string());
        self.insert_record(
            company_id,
            ApplicationRecord {
                id: id.clone(),
                candidate: new.candidate,
                job: new.job,
                applied_at: new.applied_at,
                status: ApplicationStatus::Pending,
            },
        );
        id
    }

    /// Stores a record as-is, replacing any record with the same id.
    pub fn insert_record(&self, company_id: &str, record: ApplicationRecord) {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        self.applications.insert(
            record.id.clone(),
            StoredApplication {
                company_id: company_id.to_string(),
                seq,
                record,
            },
        );
    }

    /// The company's applications, oldest first.
    pub fn applications_for(&self, company_id: &str) -> Vec<ApplicationRecord> {
        let mut owned: Vec<(DateTime<Utc>, u64, ApplicationRecord)> = self
            .applications
            .iter()
            .filter(|entry| entry.value().company_id == company_id)
            .map(|entry| {
                let stored = entry.value();
                (stored.record.applied_at, stored.seq, stored.record.clone())
            })
            .collect();
        owned.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        owned.into_iter().map(|(_, _, record)| record).collect()
    }

    /// Moves a pending application of `company_id` to `decision`.
    pub fn change_status(
        &self,
        company_id: &str,
        id: &ApplicationId,
        decision: Decision,
    ) -> Result<(), ChangeStatusError> {
        let mut entry = self
            .applications
            .get_mut(id)
            .filter(|entry| entry.company_id == company_id)
            .ok_or(ChangeStatusError::NotFound)?;

        match entry.record.status {
            ApplicationStatus::Pending => {
                entry.record.status = decision.status();
                Ok(())
            }
            done => Err(ChangeStatusError::AlreadyReviewed(done)),
        }
    }

    pub fn company_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .applications
            .iter()
            .map(|entry| entry.value().company_id.clone())
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }
}
