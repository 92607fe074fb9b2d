use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DbConn, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, TransactionTrait,
};

use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PreSaveHook};

use crate::hooks::HookChain;

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E, T>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    hooks: HookChain<T>,
    _entity: PhantomData<E>,
}

impl<E, T> PostgresBaseRepository<E, T>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            hooks: HookChain::new(),
            _entity: PhantomData,
        }
    }

    /// Register a hook run before every write.
    pub fn with_hook(mut self, hook: Arc<dyn PreSaveHook<T>>) -> Self {
        self.hooks.push(hook);
        self
    }
}

fn write_error(e: DbErr) -> RepoError {
    let err_str = e.to_string();
    if err_str.contains("duplicate") || err_str.contains("unique") {
        RepoError::Constraint("Entity already exists".to_string())
    } else {
        RepoError::Query(err_str)
    }
}

/// Update the row, or insert it when no row has that primary key yet.
async fn upsert<E, C>(conn: &C, active_model: E::ActiveModel) -> Result<E::Model, RepoError>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    C: ConnectionTrait,
{
    match active_model.clone().update(conn).await {
        Ok(model) => Ok(model),
        Err(DbErr::RecordNotUpdated) => active_model.insert(conn).await.map_err(write_error),
        Err(e) => Err(write_error(e)),
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for PostgresBaseRepository<E, T>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
    T: From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn save(&self, mut entity: T) -> Result<T, RepoError> {
        self.hooks.run(&mut entity);
        let model = upsert::<E, _>(&self.db, entity.into()).await?;
        Ok(model.into())
    }

    async fn save_all(&self, entities: Vec<T>) -> Result<usize, RepoError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        let count = entities.len();
        for mut entity in entities {
            self.hooks.run(&mut entity);
            // Dropping `txn` on an early return rolls the batch back.
            upsert::<E, _>(&txn, entity.into()).await?;
        }

        txn.commit()
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(count)
    }
}
