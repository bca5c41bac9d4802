use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::{driver::DriverRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{driver::Driver, user::User},
        service::auth::{login::ensure_driver_approved, token::TokenService},
    },
};

const BEARER_PREFIX: &str = "Bearer ";

/// Resolves the caller from the `Authorization: Bearer` header.
///
/// The user's role is read from the database rather than the token, so role changes
/// take effect without reissuing tokens. Drivers are only let through once an admin
/// has approved their profile.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Requires an authenticated user with one of the given roles.
    ///
    /// An empty role list admits any authenticated user.
    ///
    /// # Returns
    /// - `Ok(User)` - The caller
    /// - `Err(AuthError::MissingToken | InvalidToken | UserNotFound)` - Not authenticated
    /// - `Err(AuthError::AccessDenied)` - Role not allowed
    /// - `Err(AuthError::DriverPending | DriverRejected)` - Driver not approved
    pub async fn require(&self, roles: &[Role]) -> Result<User, AppError> {
        let Some(token) = self.bearer_token() else {
            return Err(AuthError::MissingToken.into());
        };

        let (user, _) = self.authenticate(token, roles).await?;

        Ok(user)
    }

    /// Like [`AuthGuard::require`], also returning the driver profile of drivers.
    pub async fn require_with_profile(
        &self,
        roles: &[Role],
    ) -> Result<(User, Option<Driver>), AppError> {
        let Some(token) = self.bearer_token() else {
            return Err(AuthError::MissingToken.into());
        };

        self.authenticate(token, roles).await
    }

    /// Requires an approved driver and returns their profile along with the account.
    pub async fn require_driver(&self) -> Result<(User, Driver), AppError> {
        match self.require_with_profile(&[Role::Driver]).await? {
            (user, Some(driver)) => Ok((user, driver)),
            (user, None) => Err(AuthError::DriverPending(user.id).into()),
        }
    }

    /// Resolves the caller when a token is present.
    ///
    /// A missing header yields `None`, but a present and invalid token is still an error.
    pub async fn optional(&self) -> Result<Option<User>, AppError> {
        match self.bearer_token() {
            Some(token) => Ok(Some(self.authenticate(token, &[]).await?.0)),
            None => Ok(None),
        }
    }

    async fn authenticate(
        &self,
        token: &str,
        roles: &[Role],
    ) -> Result<(User, Option<Driver>), AppError> {
        let claims = self.tokens.verify(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotFound(claims.sub).into());
        };

        if !roles.is_empty() && !roles.contains(&user.role) {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("Role {} is not allowed here", user.role.as_str()),
            )
            .into());
        }

        if user.role != Role::Driver {
            return Ok((user, None));
        }

        let driver = DriverRepository::new(self.db)
            .find_by_user_id(user.id)
            .await?;
        ensure_driver_approved(&user, driver.as_ref())?;

        Ok((user, driver))
    }

    fn bearer_token(&self) -> Option<&'a str> {
        self.headers
            .get(AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
