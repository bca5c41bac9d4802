use crate::{
    model::{api::ApprovalStatus, user::Role},
    server::{
        data::{driver::DriverRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{
            driver::Driver,
            user::{normalize_email, User},
        },
        service::auth::password::verify_password,
    },
};

use super::AuthService;

impl<'a> AuthService<'a> {
    /// Checks credentials and issues a token.
    ///
    /// # Returns
    /// - `Ok((token, user))` - Credentials valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::DriverPending | DriverRejected)` - Driver not approved
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), AppError> {
        let email = normalize_email(email);

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };
        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        if user.role == Role::Driver {
            let driver = DriverRepository::new(self.db)
                .find_by_user_id(user.id)
                .await?;
            ensure_driver_approved(&user, driver.as_ref())?;
        }

        let token = self.tokens.issue(user.id, user.role)?;
        tracing::debug!("User {} logged in", user.id);

        Ok((token, user))
    }
}

/// Refuses drivers whose profile is missing or not approved.
pub fn ensure_driver_approved(user: &User, driver: Option<&Driver>) -> Result<(), AuthError> {
    match driver.map(|d| d.approval_status) {
        Some(ApprovalStatus::Approved) => Ok(()),
        Some(ApprovalStatus::Rejected) => Err(AuthError::DriverRejected(user.id)),
        Some(ApprovalStatus::Pending) | None => Err(AuthError::DriverPending(user.id)),
    }
}
