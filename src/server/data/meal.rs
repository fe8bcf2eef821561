use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

/// Repository providing read access to the meal catalog.
pub struct MealRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MealRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a catalog meal that is currently offered.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Meal exists and is available
    /// - `Ok(None)` - Unknown ID or meal withdrawn from the menu
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_available(&self, meal_id: i32) -> Result<Option<entity::meal::Model>, DbErr> {
        entity::prelude::Meal::find_by_id(meal_id)
            .filter(entity::meal::Column::IsAvailable.eq(true))
            .one(self.db)
            .await
    }

    /// Lists available meals ordered by category then price.
    pub async fn list_available(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<entity::meal::Model>, DbErr> {
        let mut query =
            entity::prelude::Meal::find().filter(entity::meal::Column::IsAvailable.eq(true));

        if let Some(category) = category {
            query = query.filter(entity::meal::Column::Category.eq(category));
        }

        query
            .order_by_asc(entity::meal::Column::Category)
            .order_by_asc(entity::meal::Column::Price)
            .order_by_asc(entity::meal::Column::Id)
            .all(self.db)
            .await
    }
}
