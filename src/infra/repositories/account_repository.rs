//! Account repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set, SqlErr,
};
use uuid::Uuid;

use super::entities::account::{self, ActiveModel, Entity as AccountEntity};
use crate::domain::{Account, AccountStatus, NewAccount};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Advisory existence pre-check on email. The unique constraint checked
    /// at write time stays authoritative; this only saves wasted work.
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// Insert a new inactive, tokened account row.
    ///
    /// Returns `AppError::Conflict` when the email lost the uniqueness race
    /// between pre-check and write.
    async fn create(&self, account: NewAccount) -> AppResult<Account>;

    /// Find the pending account holding this activation token.
    async fn find_by_token(&self, token: &str) -> AppResult<Option<Account>>;

    /// Flip an account to active and clear its token.
    async fn activate(&self, id: Uuid) -> AppResult<Account>;

    /// Remove an account row (compensating rollback only).
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of AccountRepository over SeaORM
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let count = AccountEntity::find()
            .filter(account::Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn create(&self, new: NewAccount) -> AppResult<Account> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(new.username),
            email: Set(new.email),
            password_hash: Set(new.password_hash),
            status: Set(AccountStatus::Inactive.to_string()),
            activation_token: Set(Some(new.activation_token)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(|e| {
            // The unique index closes the race window the advisory
            // pre-check leaves open.
            match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("E-mail"),
                _ => AppError::from(e),
            }
        })?;

        Ok(Account::from(model))
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<Account>> {
        let result = AccountEntity::find()
            .filter(account::Column::ActivationToken.eq(token))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Account::from))
    }

    async fn activate(&self, id: Uuid) -> AppResult<Account> {
        let row = AccountEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::InvalidToken)?;

        let mut active: ActiveModel = row.into();
        active.status = Set(AccountStatus::Active.to_string());
        active.activation_token = Set(None);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Account::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        AccountEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}
