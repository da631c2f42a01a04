use tokio::sync::Mutex;

use crate::api::ApplicationsApi;
use crate::error::Result;
use crate::models::{ApplicationId, ApplicationRecord, ChangeStatusRequest, Decision};
use crate::notify::Notifier;
use crate::render::ReviewView;
use crate::session::SessionProvider;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load applications";
pub const STATUS_UPDATED_MESSAGE: &str = "Application status updated";
pub const STATUS_UPDATE_FAILED_MESSAGE: &str = "Failed to update application status";

/// Ephemeral review screen state, rebuilt on every mount.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewSessionState {
    /// Display order: the last fetch, reversed.
    pub records: Vec<ApplicationRecord>,
    pub is_list_loading: bool,
    /// The one record whose status change is outstanding. Last writer wins.
    pub updating_record_id: Option<ApplicationId>,
}

/// Owns the applications list for the signed-in company and drives the
/// fetch / mutate / re-fetch cycle against the remote API.
///
/// The server is the only source of truth for `status`: a successful
/// mutation never patches `records`, it triggers a full re-fetch instead.
pub struct ReviewController<A, S, N> {
    api: A,
    session: S,
    notifier: N,
    state: Mutex<ReviewSessionState>,
}

impl<A, S, N> ReviewController<A, S, N>
where
    A: ApplicationsApi,
    S: SessionProvider,
    N: Notifier,
{
    pub fn new(api: A, session: S, notifier: N) -> Self {
        Self {
            api,
            session,
            notifier,
            state: Mutex::new(ReviewSessionState::default()),
        }
    }

    /// Resets the screen state and loads the list once the identity is known.
    pub async fn mount(&self) -> Result<()> {
        *self.state.lock().await = ReviewSessionState::default();

        if self.session.is_loading_identity() {
            tracing::debug!("Identity still loading, deferring applications fetch");
            return Ok(());
        }
        self.load_applications().await
    }

    /// Fetches the full list and replaces `records` with it, reversed.
    ///
    /// On failure `records` is left untouched and one error notification is
    /// emitted. `is_list_loading` is cleared on both paths.
    pub async fn load_applications(&self) -> Result<()> {
        self.state.lock().await.is_list_loading = true;

        let token = self.session.token();
        let outcome = self
            .api
            .view_applications(&token)
            .await
            .and_then(|body| body.into_records());

        let mut state = self.state.lock().await;
        state.is_list_loading = false;

        match outcome {
            Ok(mut records) => {
                records.reverse();
                tracing::info!(count = records.len(), "Applications loaded");
                state.records = records;
                Ok(())
            }
            Err(e) => {
                drop(state);
                tracing::warn!(error = %e, "Failed to load applications");
                self.notifier
                    .notify_error(e.server_message().unwrap_or(LOAD_FAILED_MESSAGE));
                Err(e)
            }
        }
    }

    /// Asks the server to move `id` to `decision`.
    ///
    /// Callers only offer this for pending records, but the request is sent
    /// regardless and the server's verdict is reported. On success the list
    /// is re-fetched; on failure it is not, so the row stays actionable.
    pub async fn set_application_status(
        &self,
        id: ApplicationId,
        decision: Decision,
    ) -> Result<()> {
        self.state.lock().await.updating_record_id = Some(id.clone());

        let token = self.session.token();
        let request = ChangeStatusRequest {
            id: id.clone(),
            status: decision,
        };
        let outcome = self
            .api
            .change_status(&token, &request)
            .await
            .and_then(|body| body.into_message());

        // Cleared as soon as this request settles, even if another one
        // took over the slot in the meantime.
        self.state.lock().await.updating_record_id = None;

        match outcome {
            Ok(message) => {
                tracing::info!(id = %id, status = %decision, "Application status changed");
                self.notifier.notify_success(
                    message
                        .as_deref()
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or(STATUS_UPDATED_MESSAGE),
                );
                // The refresh reports its own failure.
                let _ = self.load_applications().await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    id = %id,
                    status = %decision,
                    error = %e,
                    "Failed to change application status"
                );
                self.notifier
                    .notify_error(e.server_message().unwrap_or(STATUS_UPDATE_FAILED_MESSAGE));
                Err(e)
            }
        }
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> ReviewSessionState {
        self.state.lock().await.clone()
    }

    /// What the presentation layer should show right now.
    pub async fn view(&self) -> ReviewView {
        if self.session.is_loading_identity() {
            return ReviewView::Loading;
        }
        ReviewView::derive(&*self.state.lock().await)
    }
}
