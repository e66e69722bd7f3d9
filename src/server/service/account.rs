//! Account lifecycle service.
//!
//! This module provides the `AccountService`, which composes the user repository, the
//! inventory and quest services, credential helpers and the mailer into the account
//! flows: registration, login, email verification, password reset, profile updates and
//! account deletion.
//!
//! Account state per user is `Unverified -> Verified` through the activation link.
//! Password resets and profile edits keep the account active; deletion is terminal and
//! removes every row the user owns in one transaction.

use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    config::AppUrls,
    data::{
        customization::UserCustomizationRepository, quest::UserQuestRepository,
        star::StarRepository, user::UserRepository,
    },
    error::{account::AccountError, AppError},
    model::user::{
        CreateUserParam, LoginParam, RegisterParam, ResetPasswordParam, UpdateProfileParam,
        UpdateUserParam, User, UserProfile,
    },
    service::{
        credential,
        inventory::InventoryService,
        mail::{password_reset_email, verification_email, Mailer},
        quest::QuestService,
    },
};

/// Service orchestrating the account lifecycle.
pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a dyn Mailer,
    urls: &'a AppUrls,
}

impl<'a> AccountService<'a> {
    /// Creates a new AccountService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `mailer` - Outbound email sender for activation and reset links
    /// - `urls` - Builder for the links embedded in emails
    pub fn new(db: &'a DatabaseConnection, mailer: &'a dyn Mailer, urls: &'a AppUrls) -> Self {
        Self { db, mailer, urls }
    }

    /// Registers a new unverified account.
    ///
    /// Creates the user, grants and equips the default items, assigns every catalog
    /// quest and sends the activation email, all inside one transaction. If any step
    /// fails, including email delivery, no account is created.
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - The new user with their starting inventory
    /// - `Err(AccountError::EmailAlreadyInUse)` - Another account uses the email
    /// - `Err(AppError::MailErr)` - Activation email could not be sent
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, param: RegisterParam) -> Result<UserProfile, AppError> {
        if UserRepository::new(self.db)
            .find_by_email(&param.email)
            .await?
            .is_some()
        {
            return Err(AccountError::EmailAlreadyInUse.into());
        }

        let password_hash = credential::hash_password(&param.password)?;
        let verification_token = credential::generate_token();

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .create(CreateUserParam {
                username: param.username,
                email: param.email,
                password_hash,
                verification_token: verification_token.clone(),
            })
            .await
            .map_err(email_conflict)?;

        InventoryService::new(&txn)
            .grant_default_items(user.id)
            .await?;
        QuestService::new(&txn)
            .assign_default_quests(user.id)
            .await?;

        let link = self.urls.verification_link(&verification_token)?;
        let email = verification_email(&user.email, &user.username, &link)?;
        self.mailer.send(email).await?;

        let inventory = UserCustomizationRepository::new(&txn)
            .get_inventory(user.id)
            .await?;

        txn.commit().await?;

        tracing::info!("Registered user {} ({})", user.id, user.username);

        Ok(UserProfile { user, inventory })
    }

    /// Authenticates a user by email and password.
    ///
    /// The password is always checked before the verification state, and an unknown
    /// email costs the same hashing work as a wrong password.
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - Authenticated user with their inventory
    /// - `Err(AccountError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AccountError::AccountNotVerified)` - Correct password, email not verified
    pub async fn login(&self, param: LoginParam) -> Result<UserProfile, AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_email(&param.email)
            .await?
        else {
            credential::verify_dummy_password(&param.password);
            return Err(AccountError::InvalidCredentials.into());
        };

        if !credential::verify_password(&param.password, &user.password_hash) {
            return Err(AccountError::InvalidCredentials.into());
        }

        if !user.is_verified {
            return Err(AccountError::AccountNotVerified.into());
        }

        let inventory = InventoryService::new(self.db)
            .get_inventory(user.id)
            .await?;

        Ok(UserProfile { user, inventory })
    }

    /// Consumes an activation token.
    ///
    /// # Returns
    /// - `Ok(true)` - The account holding the token is now verified
    /// - `Ok(false)` - Token blank, unknown or already used
    pub async fn verify_email(&self, token: Option<String>) -> Result<bool, AppError> {
        let Some(token) = token.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()) else {
            return Ok(false);
        };

        let verified = UserRepository::new(self.db).mark_verified(&token).await?;

        tracing::debug!("Email verification attempt: verified={}", verified);

        Ok(verified)
    }

    /// Issues a password reset token and emails the reset link.
    ///
    /// Callers must answer identically whatever this returns, so the endpoint cannot be
    /// used to discover registered emails. A delivery failure is logged and reported as
    /// `Ok(false)` for the same reason.
    ///
    /// # Returns
    /// - `Ok(true)` - Token stored and email sent
    /// - `Ok(false)` - No account with that email, or the email could not be sent
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn forgot_password(&self, email: &str) -> Result<bool, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&email.to_lowercase()).await? else {
            tracing::debug!("Password reset requested for unknown email");
            return Ok(false);
        };

        let token = credential::generate_token();
        let expires = credential::reset_token_expiry(Utc::now());
        user_repo.set_reset_token(user.id, &token, expires).await?;

        let link = self.urls.password_reset_link(&token)?;
        let email = password_reset_email(&user.email, &user.username, &link)?;
        if let Err(e) = self.mailer.send(email).await {
            tracing::warn!("Failed to send password reset email to user {}: {}", user.id, e);
            return Ok(false);
        }

        Ok(true)
    }

    /// Replaces the password of the account holding a valid reset token.
    ///
    /// The token must match and its expiry must be in the future. On success the token
    /// and expiry are cleared, so the token cannot be used again.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced
    /// - `Err(AccountError::InvalidOrExpiredToken)` - Unknown, used or expired token
    pub async fn reset_password(&self, param: ResetPasswordParam) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .find_by_reset_token(&param.token)
            .await?
            .filter(|user| user.has_valid_reset_token(&param.token, Utc::now()))
            .ok_or(AccountError::InvalidOrExpiredToken)?;

        let password_hash = credential::hash_password(&param.new_password)?;

        if !user_repo
            .consume_reset_token(user.id, &param.token, &password_hash)
            .await?
        {
            return Err(AccountError::InvalidOrExpiredToken.into());
        }

        tracing::info!("Password reset for user {}", user.id);

        Ok(())
    }

    /// Applies a partial profile update.
    ///
    /// Changing the password requires the current password.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AccountError::NoDataProvided)` - Nothing to change
    /// - `Err(AccountError::IncorrectPassword)` - New password given with a missing or
    ///   wrong current password
    /// - `Err(AccountError::EmailAlreadyInUse)` - New email belongs to another account
    /// - `Err(AppError::NotFound)` - Unknown user
    pub async fn update_profile(
        &self,
        user_id: i32,
        param: UpdateProfileParam,
    ) -> Result<User, AppError> {
        if param.is_empty() {
            return Err(AccountError::NoDataProvided.into());
        }

        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let password_hash = match param.new_password {
            Some(new_password) => {
                let current_matches = param
                    .current_password
                    .as_deref()
                    .is_some_and(|current| credential::verify_password(current, &user.password_hash));
                if !current_matches {
                    return Err(AccountError::IncorrectPassword.into());
                }
                Some(credential::hash_password(&new_password)?)
            }
            None => None,
        };

        if let Some(email) = &param.email {
            if let Some(other) = user_repo.find_by_email(email).await? {
                if other.id != user.id {
                    return Err(AccountError::EmailAlreadyInUse.into());
                }
            }
        }

        let updated = user_repo
            .update(
                user.id,
                UpdateUserParam {
                    username: param.username,
                    email: param.email,
                    password_hash,
                },
            )
            .await
            .map_err(email_conflict)?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(updated)
    }

    /// Deletes the user and every row they own in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    pub async fn delete_user(&self, user_id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        UserCustomizationRepository::new(&txn)
            .delete_by_user(user_id)
            .await?;
        StarRepository::new(&txn).delete_by_user(user_id).await?;
        UserQuestRepository::new(&txn).delete_by_user(user_id).await?;
        let deleted = UserRepository::new(&txn).delete(user_id).await?;

        txn.commit().await?;

        if deleted {
            tracing::info!("Deleted user {}", user_id);
        }

        Ok(deleted)
    }
}

/// Maps a unique violation (only `users.email` is unique) to `EmailAlreadyInUse`.
fn email_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AccountError::EmailAlreadyInUse.into(),
        _ => err.into(),
    }
}
