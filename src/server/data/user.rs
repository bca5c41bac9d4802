//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user accounts across all roles,
//! including credential lookups for login and role counts for the admin dashboard.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::user::Role,
    server::{
        error::AppError,
        model::user::{CreateUserParam, User},
    },
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user account.
    ///
    /// The email is stored as given; callers normalize it beforehand.
    ///
    /// # Arguments
    /// - `param` - Account details with an already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::DbErr)` - Database error, including unique email violations
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            phone: ActiveValue::Set(param.phone),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError)` - Database error or corrupted role column
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        entity.map(User::from_entity).transpose()
    }

    /// Finds a user by their login email.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user registered with that email
    /// - `Err(AppError)` - Database error or corrupted role column
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Checks whether an account already uses the email.
    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used at startup to decide whether the configured admin account should be seeded.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists
    /// - `Ok(false)` - No admin users exist
    /// - `Err(AppError::DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        Ok(self.count_by_role(Role::Admin).await? > 0)
    }

    /// Counts users holding the given role.
    pub async fn count_by_role(&self, role: Role) -> Result<u64, AppError> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role.as_str()))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Gets users with pagination, newest accounts first.
    ///
    /// # Arguments
    /// - `role` - Only return users with this role when set
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and total matching user count
    /// - `Err(AppError)` - Database error or corrupted role column
    pub async fn get_all_paginated(
        &self,
        role: Option<Role>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), AppError> {
        let mut query = entity::prelude::User::find();
        if let Some(role) = role {
            query = query.filter(entity::user::Column::Role.eq(role.as_str()));
        }

        let paginator = query
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }
}
