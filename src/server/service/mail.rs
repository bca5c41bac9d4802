//! Outgoing email for one-time passcodes.
//!
//! When a mail relay is configured, messages are posted to it as JSON with the API key as
//! a bearer token. Without one, codes are written to the log so local development works
//! without an email provider.

use serde::Serialize;

use crate::server::{config::MailConfig, error::AppError, model::otp::OtpPurpose};

#[derive(Serialize)]
struct RelayMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: String,
}

#[derive(Clone)]
pub enum Mailer {
    /// Delivers through the configured HTTP relay.
    Relay {
        http_client: reqwest::Client,
        config: MailConfig,
    },
    /// Logs messages instead of sending them.
    Log,
}

impl Mailer {
    pub fn new(http_client: reqwest::Client, config: Option<MailConfig>) -> Self {
        match config {
            Some(config) => Self::Relay {
                http_client,
                config,
            },
            None => Self::Log,
        }
    }

    /// Sends a one-time passcode to the recipient.
    ///
    /// # Arguments
    /// - `to` - Recipient email
    /// - `code` - The passcode
    /// - `purpose` - Decides the subject and wording of the message
    ///
    /// # Returns
    /// - `Ok(())` - Relay accepted the message, or it was logged
    /// - `Err(AppError::ReqwestErr)` - Relay unreachable or returned an error status
    pub async fn send_otp(
        &self,
        to: &str,
        code: &str,
        purpose: OtpPurpose,
    ) -> Result<(), AppError> {
        let (subject, text) = match purpose {
            OtpPurpose::Signup => (
                "Verify your email",
                format!("Your verification code is {}. It expires shortly.", code),
            ),
            OtpPurpose::RideCompletion => (
                "Confirm your ride has ended",
                format!(
                    "Your driver has ended the ride. Share code {} with them to complete it.",
                    code
                ),
            ),
        };

        match self {
            Self::Relay {
                http_client,
                config,
            } => {
                http_client
                    .post(&config.api_url)
                    .bearer_auth(&config.api_key)
                    .json(&RelayMessage {
                        from: &config.from,
                        to,
                        subject,
                        text,
                    })
                    .send()
                    .await?
                    .error_for_status()?;

                tracing::debug!("Sent {} OTP email to {}", purpose.as_str(), to);
            }
            Self::Log => {
                tracing::info!(
                    "No mail relay configured, {} OTP for {} is {}",
                    purpose.as_str(),
                    to,
                    code
                );
            }
        }

        Ok(())
    }
}
