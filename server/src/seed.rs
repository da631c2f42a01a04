use std::error::Error;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use review_client::{ApplicationId, ApplicationRecord, ApplicationStatus, Candidate, JobSummary};
use serde::Deserialize;

use crate::state::{AppState, NewApplication};

/// One entry of the seed file. `id` and `status` are optional; entries
/// without an id get a fresh one and start out pending.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedApplication {
    pub company_id: String,
    #[serde(default, alias = "_id")]
    pub id: Option<ApplicationId>,
    pub candidate: Candidate,
    pub job: JobSummary,
    #[serde(default = "Utc::now")]
    pub applied_at: DateTime<Utc>,
    #[serde(default)]
    pub status: Option<ApplicationStatus>,
}

pub fn load_seed_file(state: &AppState, path: &Path) -> Result<usize, Box<dyn Error>> {
    let raw = fs::read_to_string(path)?;
    let entries: Vec<SeedApplication> = serde_json::from_str(&raw)?;
    Ok(apply_seed(state, entries))
}

pub fn apply_seed(state: &AppState, entries: Vec<SeedApplication>) -> usize {
    let count = entries.len();
    for entry in entries {
        match entry.id {
            Some(id) => state.insert_record(
                &entry.company_id,
                ApplicationRecord {
                    id,
                    candidate: entry.candidate,
                    job: entry.job,
                    applied_at: entry.applied_at,
                    status: entry.status.unwrap_or(ApplicationStatus::Pending),
                },
            ),
            None => {
                state.insert_application(
                    &entry.company_id,
                    NewApplication {
                        candidate: entry.candidate,
                        job: entry.job,
                        applied_at: entry.applied_at,
                    },
                );
            }
        }
    }
    count
}
