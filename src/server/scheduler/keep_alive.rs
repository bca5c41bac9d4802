use std::time::Duration;

use tokio_cron_scheduler::Job;

use crate::server::error::AppError;

/// Just under the usual 15 minute idle cutoff.
const INTERVAL: Duration = Duration::from_secs(14 * 60);

pub fn job(http_client: reqwest::Client, url: String) -> Result<Job, AppError> {
    let job = Job::new_repeated_async(INTERVAL, move |_uuid, _lock| {
        let http_client = http_client.clone();
        let url = url.clone();

        Box::pin(async move {
            if let Err(e) = ping(&http_client, &url).await {
                tracing::warn!("Keep-alive ping to {} failed: {}", url, e);
            }
        })
    })?;

    Ok(job)
}

async fn ping(http_client: &reqwest::Client, url: &str) -> Result<(), AppError> {
    http_client.get(url).send().await?.error_for_status()?;
    tracing::debug!("Keep-alive ping to {} succeeded", url);

    Ok(())
}
