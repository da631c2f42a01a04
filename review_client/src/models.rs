use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ClientError;

/// Opaque application identifier, stable across re-fetches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub String);

impl ApplicationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for ApplicationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The outcome a reviewer can assign to a pending application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Accepted,
    Rejected,
}

impl Decision {
    pub fn status(&self) -> ApplicationStatus {
        match self {
            Decision::Accepted => ApplicationStatus::Accepted,
            Decision::Rejected => ApplicationStatus::Rejected,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status().label())
    }
}

impl FromStr for Decision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Accepted" => Ok(Decision::Accepted),
            "Rejected" => Ok(Decision::Rejected),
            other => Err(format!("invalid status '{}', expected Accepted or Rejected", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
}

/// One candidate's application to one job posting.
///
/// Only `status` ever changes, and only on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    #[serde(alias = "_id")]
    pub id: ApplicationId,
    /// Blank when the candidate or posting was deleted server-side.
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidate: Candidate,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job: JobSummary,
    pub applied_at: DateTime<Utc>,
    pub status: ApplicationStatus,
}

/// Body of `POST /company/view-applications`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewApplicationsResponse {
    pub success: bool,
    #[serde(
        default,
        deserialize_with = "skip_malformed_records",
        skip_serializing_if = "Option::is_none"
    )]
    pub view_application_data: Option<Vec<ApplicationRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ViewApplicationsResponse {
    /// A missing list on a successful reply counts as empty.
    pub fn into_records(self) -> Result<Vec<ApplicationRecord>, ClientError> {
        if self.success {
            Ok(self.view_application_data.unwrap_or_default())
        } else {
            Err(ClientError::Rejected {
                message: self.message,
            })
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes the list entry by entry; an entry that still cannot be read
/// (no id, unknown status, bad timestamp) is dropped instead of failing
/// the whole reply.
fn skip_malformed_records<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<ApplicationRecord>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(raw.map(|entries| {
        entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<ApplicationRecord>(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping malformed application record");
                    None
                }
            })
            .collect()
    }))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeStatusRequest {
    pub id: ApplicationId,
    pub status: Decision,
}

/// Body of `POST /company/change-status`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeStatusResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ChangeStatusResponse {
    pub fn into_message(self) -> Result<Option<String>, ClientError> {
        if self.success {
            Ok(self.message)
        } else {
            Err(ClientError::Rejected {
                message: self.message,
            })
        }
    }
}
