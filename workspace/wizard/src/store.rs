//! Data-store interfaces consumed by the wizard and their SeaORM implementation.

use async_trait::async_trait;
use model::entities::{branch, class, role, user, user_class, user_role};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Set,
    TransactionError, TransactionTrait,
};
use tracing::{debug, info, instrument, trace};

/// A branch together with every class it owns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BranchRecord {
    pub branch: branch::Model,
    pub classes: Vec<class::Model>,
}

/// Everything written by a single user creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUser {
    /// The record itself, including the optional branch link.
    pub user: user::Model,
    pub role_ids: Vec<String>,
    pub class_ids: Vec<String>,
}

/// Read access to the assignable roles.
#[async_trait]
pub trait RoleStore: Send + Sync {
    async fn list_roles(&self) -> Result<Vec<role::Model>, DbErr>;
}

/// Read access to the branches and their classes.
#[async_trait]
pub trait BranchStore: Send + Sync {
    async fn list_branches(&self) -> Result<Vec<BranchRecord>, DbErr>;
}

/// Write access for new users.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Creates the user and all of its links atomically. On error nothing
    /// of `new_user` is left behind.
    async fn create_user(&self, new_user: NewUser) -> Result<user::Model, DbErr>;
}

/// All stores backed by one SeaORM connection.
#[derive(Clone, Debug)]
pub struct SeaOrmStore {
    db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleStore for SeaOrmStore {
    #[instrument(skip(self))]
    async fn list_roles(&self) -> Result<Vec<role::Model>, DbErr> {
        trace!("Loading roles");
        let roles = role::Entity::find().all(&self.db).await?;
        debug!("Loaded {} roles", roles.len());
        Ok(roles)
    }
}

#[async_trait]
impl BranchStore for SeaOrmStore {
    #[instrument(skip(self))]
    async fn list_branches(&self) -> Result<Vec<BranchRecord>, DbErr> {
        trace!("Loading branches with classes");
        let rows = branch::Entity::find()
            .find_with_related(class::Entity)
            .all(&self.db)
            .await?;
        debug!("Loaded {} branches", rows.len());

        Ok(rows
            .into_iter()
            .map(|(branch, classes)| BranchRecord { branch, classes })
            .collect())
    }
}

#[async_trait]
impl UserStore for SeaOrmStore {
    #[instrument(skip(self, new_user), fields(user_id = %new_user.user.user_id))]
    async fn create_user(&self, new_user: NewUser) -> Result<user::Model, DbErr> {
        let NewUser {
            user,
            role_ids,
            class_ids,
        } = new_user;

        self.db
            .transaction::<_, user::Model, DbErr>(move |txn| {
                Box::pin(async move {
                    trace!("Inserting user record");
                    let created = user.into_active_model().reset_all().insert(txn).await?;

                    for role_id in role_ids {
                        user_role::ActiveModel {
                            user_id: Set(created.user_id.clone()),
                            role_id: Set(role_id.clone()),
                        }
                        .insert(txn)
                        .await?;
                        debug!("Linked user {} to role {}", created.user_id, role_id);
                    }

                    for class_id in class_ids {
                        user_class::ActiveModel {
                            user_id: Set(created.user_id.clone()),
                            class_id: Set(class_id.clone()),
                        }
                        .insert(txn)
                        .await?;
                        debug!("Linked user {} to class {}", created.user_id, class_id);
                    }

                    Ok(created)
                })
            })
            .await
            .map(|created| {
                info!("Committed user {}", created.user_id);
                created
            })
            .map_err(|err| match err {
                TransactionError::Connection(err) | TransactionError::Transaction(err) => err,
            })
    }
}
