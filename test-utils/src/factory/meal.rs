use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating catalog meals.
pub struct MealFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    category: String,
    price: f64,
    is_available: bool,
}

impl<'a> MealFactory<'a> {
    /// Creates a new MealFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Meal {id}"`
    /// - category: `"main"`
    /// - price: `12.5`
    /// - is_available: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Meal {}", id),
            category: "main".to_string(),
            price: 12.5,
            is_available: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
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

    pub async fn build(self) -> Result<entity::meal::Model, DbErr> {
        entity::meal::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            category: ActiveValue::Set(self.category),
            price: ActiveValue::Set(self.price),
            is_available: ActiveValue::Set(self.is_available),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available meal priced at 12.50.
pub async fn create_meal(db: &DatabaseConnection) -> Result<entity::meal::Model, DbErr> {
    MealFactory::new(db).build().await
}
