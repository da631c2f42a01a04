use clap::{Parser, Subcommand};
use dotenv::dotenv;
use review_client::config::ClientConfig;
use review_client::{
    ApplicationId, ClientError, ConsoleNotifier, Decision, HttpApplicationsApi, ReviewController,
    StaticSession,
};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Review job applications for your company", long_about = None)]
struct Args {
    /// Base URL of the company API (overrides API_BASE_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Company bearer token (overrides COMPANY_TOKEN)
    #[arg(short, long)]
    token: Option<String>,

    /// Request timeout in seconds (overrides REQUEST_TIMEOUT_SECS)
    #[arg(long)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show all applications, newest first
    List,
    /// Accept a pending application
    Accept { id: String },
    /// Reject a pending application
    Reject { id: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "review-cli failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), ClientError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = args.api_url.as_deref() {
        config = config.with_base_url(url)?;
    }
    if let Some(secs) = args.timeout {
        config.request_timeout = Duration::from_secs(secs);
    }
    let token = match args.token.or_else(|| config.company_token.clone()) {
        Some(t) => t,
        None => {
            eprintln!("❌ No company token: pass --token or set COMPANY_TOKEN");
            return Err(ClientError::Config("missing company token".to_string()));
        }
    };

    let controller = ReviewController::new(
        HttpApplicationsApi::new(&config)?,
        StaticSession::new(token),
        ConsoleNotifier,
    );

    controller.mount().await?;

    let outcome = match args.command {
        Command::List => Ok(()),
        Command::Accept { id } => {
            controller
                .set_application_status(ApplicationId::new(id), Decision::Accepted)
                .await
        }
        Command::Reject { id } => {
            controller
                .set_application_status(ApplicationId::new(id), Decision::Rejected)
                .await
        }
    };

    print!("{}", controller.view().await);
    outcome
}
