use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::Job;

use crate::server::{data::otp::OtpRepository, error::AppError};

/// Every 10 minutes.
const SCHEDULE: &str = "0 */10 * * * *";

pub fn job(db: DatabaseConnection) -> Result<Job, AppError> {
    let job = Job::new_async(SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = delete_expired(&db).await {
                tracing::error!("Error deleting expired OTPs: {}", e);
            }
        })
    })?;

    Ok(job)
}

async fn delete_expired(db: &DatabaseConnection) -> Result<(), AppError> {
    let deleted = OtpRepository::new(db).delete_expired(Utc::now()).await?;
    if deleted > 0 {
        tracing::debug!("Deleted {} expired OTPs", deleted);
    }

    Ok(())
}
