//! Background jobs run by `tokio-cron-scheduler`.
//!
//! - `keep_alive` - Pings the public URL so free hosting tiers don't idle the server
//! - `otp_cleanup` - Deletes expired passcodes

pub mod keep_alive;
pub mod otp_cleanup;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::JobScheduler;

use crate::server::error::AppError;

/// Registers every job and starts the scheduler.
///
/// The keep-alive job is only added when a URL is configured.
pub async fn start_scheduler(
    db: DatabaseConnection,
    http_client: reqwest::Client,
    keep_alive_url: Option<String>,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    scheduler.add(otp_cleanup::job(db)?).await?;
    if let Some(url) = keep_alive_url {
        scheduler.add(keep_alive::job(http_client, url)?).await?;
    }

    scheduler.start().await?;
    tracing::info!("Scheduler started");

    Ok(scheduler)
}
