use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating spa services.
pub struct SpaServiceFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    category: String,
    duration_minutes: i32,
    price: f64,
    is_available: bool,
}

impl<'a> SpaServiceFactory<'a> {
    /// Creates a new SpaServiceFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Treatment {id}"`
    /// - category: `"massage"`
    /// - duration_minutes: `60`
    /// - price: `80.0`
    /// - is_available: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Treatment {}", id),
            category: "massage".to_string(),
            duration_minutes: 60,
            price: 80.0,
            is_available: true,
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn is_available(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    pub async fn build(self) -> Result<entity::spa_service::Model, DbErr> {
        entity::spa_service::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            category: ActiveValue::Set(self.category),
            duration_minutes: ActiveValue::Set(self.duration_minutes),
            price: ActiveValue::Set(self.price),
            is_available: ActiveValue::Set(self.is_available),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available 60 minute massage service.
pub async fn create_spa_service(
    db: &DatabaseConnection,
) -> Result<entity::spa_service::Model, DbErr> {
    SpaServiceFactory::new(db).build().await
}
