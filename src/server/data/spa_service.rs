use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

/// Repository providing read access to the spa service catalog.
pub struct SpaServiceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SpaServiceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a spa service that is currently offered.
    pub async fn find_available(
        &self,
        service_id: i32,
    ) -> Result<Option<entity::spa_service::Model>, DbErr> {
        entity::prelude::SpaService::find_by_id(service_id)
            .filter(entity::spa_service::Column::IsAvailable.eq(true))
            .one(self.db)
            .await
    }

    /// Lists available services ordered by category then price.
    pub async fn list_available(&self) -> Result<Vec<entity::spa_service::Model>, DbErr> {
        entity::prelude::SpaService::find()
            .filter(entity::spa_service::Column::IsAvailable.eq(true))
            .order_by_asc(entity::spa_service::Column::Category)
            .order_by_asc(entity::spa_service::Column::Price)
            .order_by_asc(entity::spa_service::Column::Id)
            .all(self.db)
            .await
    }

    /// Takes the row write-lock on a service for the rest of the transaction.
    ///
    /// Same no-op primary key update as `RoomRepository::lock`.
    ///
    /// # Returns
    /// - `Ok(true)` - The service exists and is now locked
    /// - `Ok(false)` - No service with that ID
    /// - `Err(DbErr)` - Database error, including lock timeouts
    pub async fn lock(&self, service_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::SpaService::update_many()
            .set(entity::spa_service::ActiveModel {
                id: ActiveValue::Set(service_id),
                ..Default::default()
            })
            .filter(entity::spa_service::Column::Id.eq(service_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
