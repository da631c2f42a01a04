pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod notify;
pub mod render;
pub mod session;

pub use api::{ApplicationsApi, HttpApplicationsApi};
pub use controller::{ReviewController, ReviewSessionState};
pub use error::ClientError;
pub use models::{
    ApplicationId, ApplicationRecord, ApplicationStatus, Candidate, ChangeStatusRequest,
    ChangeStatusResponse, Decision, JobSummary, ViewApplicationsResponse,
};
pub use notify::{ConsoleNotifier, Notifier};
pub use render::{ReviewRow, ReviewView, RowControl};
pub use session::{SessionProvider, StaticSession};
