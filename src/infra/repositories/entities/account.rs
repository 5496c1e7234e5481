//! Account database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Account, AccountStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub status: String,
    /// Set while the account awaits activation, NULL once consumed
    #[sea_orm(unique)]
    pub activation_token: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Account {
    fn from(model: Model) -> Self {
        Account {
            id: model.id,
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            status: AccountStatus::from(model.status.as_str()),
            activation_token: model.activation_token,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
