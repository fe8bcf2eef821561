use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let room = RoomFactory::new(&db)
///     .room_number("501")
///     .price(150.0)
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    room_number: String,
    room_type: String,
    price: f64,
    max_occupancy: i32,
    status: String,
    features: Vec<String>,
    image_url: Option<String>,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - room_number: `"R{id}"` where id is auto-incremented
    /// - room_type: `"standard"`
    /// - price: `100.0`
    /// - max_occupancy: `2`
    /// - status: `"available"`
    /// - features: `["wifi"]`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            room_number: format!("R{}", id),
            room_type: "standard".to_string(),
            price: 100.0,
            max_occupancy: 2,
            status: "available".to_string(),
            features: vec!["wifi".to_string()],
            image_url: None,
        }
    }

    pub fn room_number(mut self, room_number: impl Into<String>) -> Self {
        self.room_number = room_number.into();
        self
    }

    pub fn room_type(mut self, room_type: impl Into<String>) -> Self {
        self.room_type = room_type.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn max_occupancy(mut self, max_occupancy: i32) -> Self {
        self.max_occupancy = max_occupancy;
        self
    }

    /// Sets the cached room status (`available`, `occupied` or `maintenance`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn features(mut self, features: &[&str]) -> Self {
        self.features = features.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Builds and inserts the room entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::room::Model)` - Created room entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        let features =
            serde_json::to_string(&self.features).map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::room::ActiveModel {
            id: ActiveValue::NotSet,
            room_number: ActiveValue::Set(self.room_number),
            room_type: ActiveValue::Set(self.room_type),
            price: ActiveValue::Set(self.price),
            max_occupancy: ActiveValue::Set(self.max_occupancy),
            status: ActiveValue::Set(self.status),
            features: ActiveValue::Set(features),
            image_url: ActiveValue::Set(self.image_url),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available standard room with default values.
///
/// Shorthand for `RoomFactory::new(db).build().await`.
pub async fn create_room(db: &DatabaseConnection) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db).build().await
}
