//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records: creation,
//! lookups by email and token, token state transitions, profile updates and deletion.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParam, UpdateUserParam, User};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new unverified user holding a pending verification token.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            is_verified: ActiveValue::Set(false),
            verification_token: ActiveValue::Set(Some(param.verification_token)),
            reset_token: ActiveValue::Set(None),
            reset_token_expires: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_reset_token(&self, token: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::ResetToken.eq(token))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Marks the user holding `token` as verified and clears the token.
    ///
    /// Runs as a single UPDATE, so a token can only ever be consumed once.
    ///
    /// # Returns
    /// - `Ok(true)` - A user held the token and is now verified
    /// - `Ok(false)` - No user holds the token
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_verified(&self, token: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::IsVerified, Expr::value(true))
            .col_expr(
                entity::user::Column::VerificationToken,
                Expr::value(Option::<String>::None),
            )
            .filter(entity::user::Column::VerificationToken.eq(token))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Stores a password reset token and its expiry, replacing any previous token.
    pub async fn set_reset_token(
        &self,
        user_id: i32,
        token: &str,
        expires: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::ResetToken,
                Expr::value(Some(token.to_string())),
            )
            .col_expr(
                entity::user::Column::ResetTokenExpires,
                Expr::value(Some(expires)),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Replaces the password hash and clears the reset token and expiry.
    ///
    /// The update only applies while the user still holds `token`, so two concurrent
    /// resets with the same token cannot both succeed.
    ///
    /// # Returns
    /// - `Ok(true)` - Password replaced
    /// - `Ok(false)` - The token was consumed or replaced in the meantime
    pub async fn consume_reset_token(
        &self,
        user_id: i32,
        token: &str,
        password_hash: &str,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::PasswordHash,
                Expr::value(password_hash.to_string()),
            )
            .col_expr(
                entity::user::Column::ResetToken,
                Expr::value(Option::<String>::None),
            )
            .col_expr(
                entity::user::Column::ResetTokenExpires,
                Expr::value(Option::<DateTime<Utc>>::None),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .filter(entity::user::Column::ResetToken.eq(token))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Applies the set fields of `param` to the user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn update(
        &self,
        user_id: i32,
        param: UpdateUserParam,
    ) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = existing.into();
        if let Some(username) = param.username {
            active.username = ActiveValue::Set(username);
        }
        if let Some(email) = param.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = param.password_hash {
            active.password_hash = ActiveValue::Set(password_hash);
        }

        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Deletes the user row only. Owned rows must be removed first by the caller.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    pub async fn delete(&self, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
