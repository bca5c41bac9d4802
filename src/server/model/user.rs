//! User domain models and parameters.
//!
//! Provides domain models for application users across all four roles. Includes
//! parameter types for user creation and pagination.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        auth::RegisterDto,
        user::{PaginatedUsersDto, Role, UserDto},
    },
    server::{error::AppError, util::parse::parse_stored},
};

/// Application user with credentials and role.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i32,
    /// Display name of the user.
    pub name: String,
    /// Login email, unique across users.
    pub email: String,
    /// Argon2 PHC string. Never leaves the server.
    pub password_hash: String,
    /// Contact phone number.
    pub phone: String,
    /// Role that decides which endpoints the user may call.
    pub role: Role,
    /// Timestamp when the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is dropped.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            role: self.role,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Stored role is unknown
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            phone: entity.phone,
            role: parse_stored("user.role", entity.role, Role::parse)?,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for creating a user account.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    /// Already hashed password.
    pub password_hash: String,
    pub phone: String,
    pub role: Role,
}

/// Self-registration request with the signup passcode.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub name: String,
    /// Trimmed and lowercased.
    pub email: String,
    pub password: String,
    pub phone: String,
    pub role: Role,
    pub otp: String,
    pub license_number: Option<String>,
    pub city: Option<String>,
}

impl RegisterParam {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: normalize_email(&dto.email),
            password: dto.password,
            phone: dto.phone.trim().to_string(),
            role: dto.role,
            otp: dto.otp,
            license_number: non_empty(dto.license_number),
            city: non_empty(dto.city),
        }
    }
}

/// Lowercases and trims an email so lookups are case-insensitive.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    /// Users for this page.
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of users per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        let users = self.users.into_iter().map(|u| u.into_dto()).collect();

        PaginatedUsersDto {
            users,
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
