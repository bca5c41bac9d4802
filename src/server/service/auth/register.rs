use crate::{
    model::user::Role,
    server::{
        data::{driver::DriverRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{
            driver::CreateDriverParam,
            otp::OtpPurpose,
            user::{normalize_email, CreateUserParam, RegisterParam, User},
        },
        service::{auth::password::hash_password, otp::OtpService},
    },
};

use super::AuthService;

const MIN_PASSWORD_LENGTH: usize = 6;

impl<'a> AuthService<'a> {
    /// Sends a signup passcode to an email that has no account yet.
    ///
    /// # Returns
    /// - `Ok(())` - Passcode stored and handed to the mailer
    /// - `Err(AppError::BadRequest)` - Email is not an address
    /// - `Err(AuthError::EmailTaken)` - Email already registered
    pub async fn send_signup_otp(&self, email: &str) -> Result<(), AppError> {
        let email = normalize_email(email);
        validate_email(&email)?;

        if UserRepository::new(self.db).email_exists(&email).await? {
            return Err(AuthError::EmailTaken(email).into());
        }

        let code = OtpService::new(self.db, self.otp_ttl)
            .issue(&email, OtpPurpose::Signup, None)
            .await?;
        self.mailer.send_otp(&email, &code, OtpPurpose::Signup).await?;

        Ok(())
    }

    /// Creates an account after checking the signup passcode.
    ///
    /// Drivers also get a pending profile and receive no token until an admin
    /// approves them.
    ///
    /// # Returns
    /// - `Ok((token, user))` - The new account and its token, `None` for drivers
    /// - `Err(AppError::BadRequest)` - Missing fields, short password or admin role
    /// - `Err(AuthError::EmailTaken)` - Email already registered
    /// - `Err(AuthError::InvalidOtp | OtpExpired)` - Passcode check failed
    pub async fn register(&self, param: RegisterParam) -> Result<(Option<String>, User), AppError> {
        validate_registration(&param)?;

        let driver_details = match (param.role, param.license_number, param.city) {
            (Role::Driver, Some(license_number), Some(city)) => Some((license_number, city)),
            (Role::Driver, _, _) => {
                return Err(AppError::BadRequest(
                    "Drivers must provide a license number and city".to_string(),
                ))
            }
            _ => None,
        };

        let user_repo = UserRepository::new(self.db);
        if user_repo.email_exists(&param.email).await? {
            return Err(AuthError::EmailTaken(param.email).into());
        }

        OtpService::new(self.db, self.otp_ttl)
            .verify_and_consume(&param.email, OtpPurpose::Signup, None, &param.otp)
            .await?;

        let user = user_repo
            .create(CreateUserParam {
                name: param.name,
                email: param.email,
                password_hash: hash_password(&param.password)?,
                phone: param.phone,
                role: param.role,
            })
            .await?;

        if let Some((license_number, city)) = driver_details {
            DriverRepository::new(self.db)
                .create(CreateDriverParam {
                    user_id: user.id,
                    license_number,
                    city,
                })
                .await?;

            tracing::info!("Driver {} registered and awaits approval", user.id);
            return Ok((None, user));
        }

        let token = self.tokens.issue(user.id, user.role)?;
        tracing::info!("User {} registered as {}", user.id, user.role.as_str());

        Ok((Some(token), user))
    }
}

fn validate_email(email: &str) -> Result<(), AppError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(AppError::BadRequest("A valid email is required".to_string())),
    }
}

fn validate_registration(param: &RegisterParam) -> Result<(), AppError> {
    validate_email(&param.email)?;

    if param.role == Role::Admin {
        return Err(AppError::BadRequest(
            "Admin accounts cannot be registered".to_string(),
        ));
    }
    if param.name.is_empty() || param.phone.is_empty() {
        return Err(AppError::BadRequest("Name and phone are required".to_string()));
    }
    if param.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}
