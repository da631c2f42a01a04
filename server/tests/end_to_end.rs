//! Drives the real HTTP client against a locally bound company API.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use chrono::{Duration, TimeZone, Utc};
use review_client::config::ClientConfig;
use review_client::controller::LOAD_FAILED_MESSAGE;
use review_client::{
    ApplicationId, ApplicationStatus, Candidate, ClientError, Decision, HttpApplicationsApi,
    JobSummary, Notifier, ReviewController, ReviewView, RowControl, StaticSession,
};
use tokio::net::TcpListener;

use server::handlers::jwt::generate_token;
use server::state::{AppState, NewApplication};

const SECRET: &str = "e2e-secret";

#[derive(Default)]
struct Toasts {
    success: Mutex<Vec<String>>,
    error: Mutex<Vec<String>>,
}

impl Notifier for Toasts {
    fn notify_success(&self, text: &str) {
        self.success.lock().unwrap().push(text.to_string());
    }

    fn notify_error(&self, text: &str) {
        self.error.lock().unwrap().push(text.to_string());
    }
}

async fn spawn_server(state: AppState) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, server::app(state)).await.unwrap();
    });
    addr
}

fn applicant(name: &str, day: u32) -> NewApplication {
    NewApplication {
        candidate: Candidate {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            avatar_url: None,
            resume_url: None,
        },
        job: JobSummary {
            title: "SRE".to_string(),
            location: "Oslo".to_string(),
        },
        applied_at: Utc.with_ymd_and_hms(2024, 7, day, 12, 0, 0).unwrap(),
    }
}

fn controller(
    addr: SocketAddr,
    token: String,
) -> (
    ReviewController<HttpApplicationsApi, StaticSession, Arc<Toasts>>,
    Arc<Toasts>,
) {
    let config = ClientConfig::default()
        .with_base_url(&format!("http://{}", addr))
        .unwrap();
    let toasts = Arc::new(Toasts::default());
    let controller = ReviewController::new(
        HttpApplicationsApi::new(&config).unwrap(),
        StaticSession::new(token),
        toasts.clone(),
    );
    (controller, toasts)
}

#[tokio::test]
async fn accept_newest_application_end_to_end() {
    let state = AppState::new(SECRET);
    let a = state.insert_application("acme", applicant("Alice", 1));
    let b = state.insert_application("acme", applicant("Bob", 2));
    let addr = spawn_server(state.clone()).await;
    let token = generate_token("acme", SECRET, Duration::hours(1)).unwrap();
    let (controller, toasts) = controller(addr, token);

    controller.mount().await.unwrap();
    let view = controller.view().await;
    let order: Vec<_> = view.rows().iter().map(|r| r.record.id.clone()).collect();
    assert_eq!(order, vec![b.clone(), a.clone()]);

    controller
        .set_application_status(b.clone(), Decision::Accepted)
        .await
        .unwrap();

    let view = controller.view().await;
    let rows = view.rows();
    assert_eq!(rows[0].record.id, b);
    assert_eq!(rows[0].control, RowControl::Resolved(ApplicationStatus::Accepted));
    assert_eq!(rows[1].record.id, a);
    assert_eq!(rows[1].control, RowControl::Actions);
    assert_eq!(*toasts.success.lock().unwrap(), vec!["Application accepted".to_string()]);
    assert!(toasts.error.lock().unwrap().is_empty());
}

#[tokio::test]
async fn second_review_is_refused_and_row_stays_resolved() {
    let state = AppState::new(SECRET);
    let id = state.insert_application("acme", applicant("Carol", 3));
    let addr = spawn_server(state.clone()).await;
    let token = generate_token("acme", SECRET, Duration::hours(1)).unwrap();
    let (controller, toasts) = controller(addr, token);

    controller.mount().await.unwrap();
    controller
        .set_application_status(id.clone(), Decision::Rejected)
        .await
        .unwrap();

    let err = controller
        .set_application_status(id.clone(), Decision::Accepted)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Http { status: 409, .. }));
    assert_eq!(
        *toasts.error.lock().unwrap(),
        vec!["Application has already been reviewed".to_string()]
    );
    let state_after = controller.state().await;
    assert_eq!(state_after.updating_record_id, None);
    assert_eq!(state_after.records[0].status, ApplicationStatus::Rejected);
}

#[tokio::test]
async fn concurrent_reviews_both_commit() {
    let state = AppState::new(SECRET);
    let a = state.insert_application("acme", applicant("Dan", 4));
    let b = state.insert_application("acme", applicant("Eve", 5));
    let addr = spawn_server(state.clone()).await;
    let token = generate_token("acme", SECRET, Duration::hours(1)).unwrap();
    let (controller, toasts) = controller(addr, token);

    controller.mount().await.unwrap();
    let results = futures::future::join_all(vec![
        controller.set_application_status(a.clone(), Decision::Accepted),
        controller.set_application_status(b.clone(), Decision::Rejected),
    ])
    .await;

    assert!(results.iter().all(|r| r.is_ok()));
    assert_eq!(toasts.success.lock().unwrap().len(), 2);

    // Whichever refresh landed last, the server committed both.
    controller.load_applications().await.unwrap();
    let records = controller.state().await.records;
    assert_eq!(records[0].id, b);
    assert_eq!(records[0].status, ApplicationStatus::Rejected);
    assert_eq!(records[1].id, a);
    assert_eq!(records[1].status, ApplicationStatus::Accepted);
    assert_eq!(controller.state().await.updating_record_id, None);
}

#[tokio::test]
async fn invalid_token_surfaces_server_message() {
    let state = AppState::new(SECRET);
    state.insert_application("acme", applicant("Frank", 6));
    let addr = spawn_server(state).await;
    let (controller, toasts) = controller(addr, "not-a-jwt".to_string());

    let err = controller.mount().await.unwrap_err();

    assert!(matches!(err, ClientError::Http { status: 401, .. }));
    assert_eq!(*toasts.error.lock().unwrap(), vec!["Invalid token".to_string()]);
    assert_eq!(controller.view().await, ReviewView::Empty);
}

#[tokio::test]
async fn unreachable_api_falls_back_to_generic_message() {
    // Bind then drop to get a port nobody listens on.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let (controller, toasts) = controller(addr, "token".to_string());

    let err = controller.load_applications().await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(*toasts.error.lock().unwrap(), vec![LOAD_FAILED_MESSAGE.to_string()]);
    assert!(!controller.state().await.is_list_loading);
}

#[tokio::test]
async fn unknown_id_is_reported_without_refetch() {
    let state = AppState::new(SECRET);
    state.insert_application("acme", applicant("Gus", 7));
    let addr = spawn_server(state).await;
    let token = generate_token("acme", SECRET, Duration::hours(1)).unwrap();
    let (controller, toasts) = controller(addr, token);

    controller.mount().await.unwrap();
    let before = controller.state().await;

    let err = controller
        .set_application_status(ApplicationId::new("nope"), Decision::Accepted)
        .await
        .unwrap_err();

    assert_eq!(err.server_message(), Some("Application not found"));
    assert_eq!(controller.state().await, before);
    assert_eq!(*toasts.error.lock().unwrap(), vec!["Application not found".to_string()]);
}
