use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

/// Repository providing read access to the spa's weekly opening hours.
pub struct SpaHoursRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SpaHoursRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every configured day in insertion order.
    ///
    /// Days are stored by name; ordering them through the week is left to the caller.
    pub async fn get_all(&self) -> Result<Vec<entity::spa_hours::Model>, DbErr> {
        entity::prelude::SpaHours::find()
            .order_by_asc(entity::spa_hours::Column::Id)
            .all(self.db)
            .await
    }
}
