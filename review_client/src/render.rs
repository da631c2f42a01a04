use std::fmt;

use crate::controller::ReviewSessionState;
use crate::models::{ApplicationRecord, ApplicationStatus};

pub const LOADING_TEXT: &str = "Loading applications...";
pub const EMPTY_TEXT: &str = "No applications yet.";

#[derive(Debug, Clone, PartialEq)]
pub enum RowControl {
    /// A status change for this row is in flight.
    Busy,
    /// Pending: accept and reject are offered.
    Actions,
    Resolved(ApplicationStatus),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRow {
    pub record: ApplicationRecord,
    pub control: RowControl,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewView {
    Loading,
    Empty,
    Table(Vec<ReviewRow>),
}

impl ReviewView {
    /// Pure function of the state; rows keep `records` order.
    pub fn derive(state: &ReviewSessionState) -> Self {
        if state.is_list_loading {
            return ReviewView::Loading;
        }
        if state.records.is_empty() {
            return ReviewView::Empty;
        }

        let rows = state
            .records
            .iter()
            .map(|record| {
                let control = if state.updating_record_id.as_ref() == Some(&record.id) {
                    RowControl::Busy
                } else if record.status == ApplicationStatus::Pending {
                    RowControl::Actions
                } else {
                    RowControl::Resolved(record.status)
                };
                ReviewRow {
                    record: record.clone(),
                    control,
                }
            })
            .collect();

        ReviewView::Table(rows)
    }

    pub fn rows(&self) -> &[ReviewRow] {
        match self {
            ReviewView::Table(rows) => rows,
            _ => &[],
        }
    }
}

impl fmt::Display for RowControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowControl::Busy => f.write_str("..."),
            RowControl::Actions => f.write_str("[accept] [reject]"),
            RowControl::Resolved(status) => write!(f, "{}", status),
        }
    }
}

impl fmt::Display for ReviewView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewView::Loading => writeln!(f, "{}", LOADING_TEXT),
            ReviewView::Empty => writeln!(f, "{}", EMPTY_TEXT),
            ReviewView::Table(rows) => {
                writeln!(
                    f,
                    "{:<38} {:<32} {:<32} {:<10} {}",
                    "ID", "CANDIDATE", "JOB", "APPLIED", "STATUS"
                )?;
                for row in rows {
                    let r = &row.record;
                    writeln!(
                        f,
                        "{:<38} {:<32} {:<32} {:<10} {}",
                        r.id,
                        format!("{} <{}>", r.candidate.name, r.candidate.email),
                        format!("{} ({})", r.job.title, r.job.location),
                        r.applied_at.format("%Y-%m-%d").to_string(),
                        row.control
                    )?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApplicationId, Candidate, JobSummary};
    use chrono::{TimeZone, Utc};

    fn record(id: &str, status: ApplicationStatus) -> ApplicationRecord {
        ApplicationRecord {
            id: ApplicationId::new(id),
            candidate: Candidate {
                name: format!("Candidate {}", id),
                email: format!("{}@example.com", id),
                avatar_url: None,
                resume_url: None,
            },
            job: JobSummary {
                title: "Backend Engineer".to_string(),
                location: "Berlin".to_string(),
            },
            applied_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            status,
        }
    }

    #[test]
    fn loading_hides_the_table() {
        let state = ReviewSessionState {
            records: vec![record("a", ApplicationStatus::Pending)],
            is_list_loading: true,
            updating_record_id: None,
        };
        assert_eq!(ReviewView::derive(&state), ReviewView::Loading);
    }

    #[test]
    fn no_records_is_empty_state() {
        let view = ReviewView::derive(&ReviewSessionState::default());
        assert_eq!(view, ReviewView::Empty);
        assert_eq!(view.to_string().trim(), EMPTY_TEXT);
    }

    #[test]
    fn row_controls_follow_status_and_busy_marker() {
        let state = ReviewSessionState {
            records: vec![
                record("b", ApplicationStatus::Pending),
                record("a", ApplicationStatus::Pending),
                record("c", ApplicationStatus::Rejected),
            ],
            is_list_loading: false,
            updating_record_id: Some(ApplicationId::new("b")),
        };

        let view = ReviewView::derive(&state);
        let controls: Vec<_> = view.rows().iter().map(|r| r.control.clone()).collect();
        assert_eq!(
            controls,
            vec![
                RowControl::Busy,
                RowControl::Actions,
                RowControl::Resolved(ApplicationStatus::Rejected),
            ]
        );
        let ids: Vec<_> = view.rows().iter().map(|r| r.record.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn table_text_shows_label_instead_of_actions() {
        let state = ReviewSessionState {
            records: vec![record("b", ApplicationStatus::Accepted)],
            ..Default::default()
        };
        let text = ReviewView::derive(&state).to_string();
        let line = text.lines().nth(1).unwrap();
        assert!(line.contains("Candidate b <b@example.com>"));
        assert!(line.ends_with("Accepted"));
        assert!(!line.contains("[accept]"));
    }
}
