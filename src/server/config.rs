use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
const DEFAULT_JWT_TTL_HOURS: i64 = 24 * 7;
const DEFAULT_OTP_TTL_MINUTES: i64 = 10;

/// Credentials for an HTTP mail relay used to deliver OTP emails.
#[derive(Clone)]
pub struct MailConfig {
    pub api_url: String,
    pub api_key: String,
    pub from: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub app_url: String,

    pub jwt_secret: String,
    pub jwt_ttl_hours: i64,
    pub otp_ttl_minutes: i64,

    /// Seeds the first admin account when both are set and no admin exists.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,

    /// OTPs are only logged when no relay is configured.
    pub mail: Option<MailConfig>,

    pub nominatim_url: String,
    pub keep_alive_url: Option<String>,
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let mail = match (
            optional_var("MAIL_API_URL"),
            optional_var("MAIL_API_KEY"),
            optional_var("MAIL_FROM"),
        ) {
            (Some(api_url), Some(api_key), Some(from)) => Some(MailConfig {
                api_url,
                api_key,
                from,
            }),
            _ => None,
        };

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            bind_address: optional_var("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            app_url: optional_var("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string()),
            jwt_secret: required_var("JWT_SECRET")?,
            jwt_ttl_hours: parsed_var("JWT_TTL_HOURS", DEFAULT_JWT_TTL_HOURS)?,
            otp_ttl_minutes: parsed_var("OTP_TTL_MINUTES", DEFAULT_OTP_TTL_MINUTES)?,
            admin_email: optional_var("ADMIN_EMAIL"),
            admin_password: optional_var("ADMIN_PASSWORD"),
            mail,
            nominatim_url: optional_var("NOMINATIM_URL")
                .unwrap_or_else(|| DEFAULT_NOMINATIM_URL.to_string()),
            keep_alive_url: optional_var("KEEP_ALIVE_URL"),
            cors_origin: optional_var("CORS_ORIGIN"),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn parsed_var(name: &str, default: i64) -> Result<i64, ConfigError> {
    match optional_var(name) {
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        None => Ok(default),
    }
}
