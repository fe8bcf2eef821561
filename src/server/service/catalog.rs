use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        meal::MealRepository, spa_hours::SpaHoursRepository, spa_service::SpaServiceRepository,
    },
    error::AppError,
    model::{
        order::Meal,
        spa::{SpaHours, SpaService},
    },
};

/// Read access to the meal and spa catalogs and the spa's opening hours.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists available meals, optionally for one category; `all` means every category.
    pub async fn list_meals(&self, category: Option<String>) -> Result<Vec<Meal>, AppError> {
        let category = category
            .map(|category| category.trim().to_string())
            .filter(|category| !category.is_empty() && category != "all");

        MealRepository::new(self.db)
            .list_available(category.as_deref())
            .await?
            .into_iter()
            .map(|meal| Meal::from_entity(meal).map_err(Into::into))
            .collect()
    }

    /// Lists available spa services.
    pub async fn list_spa_services(&self) -> Result<Vec<SpaService>, AppError> {
        SpaServiceRepository::new(self.db)
            .list_available()
            .await?
            .into_iter()
            .map(|service| SpaService::from_entity(service).map_err(Into::into))
            .collect()
    }

    /// Lists the spa's opening hours from Monday to Sunday.
    ///
    /// Rows whose day name is not a weekday are kept after Sunday.
    pub async fn list_spa_hours(&self) -> Result<Vec<SpaHours>, AppError> {
        let mut hours: Vec<SpaHours> = SpaHoursRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(SpaHours::from_entity)
            .collect();

        for day in hours.iter().filter(|day| day.weekday.is_none()) {
            tracing::warn!("Spa hours stored for unknown day '{}'", day.day_of_week);
        }

        hours.sort_by_key(SpaHours::week_position);

        Ok(hours)
    }
}
