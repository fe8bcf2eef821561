use chrono::NaiveTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating a day of spa opening hours.
pub struct SpaHoursFactory<'a> {
    db: &'a DatabaseConnection,
    day_of_week: String,
    open_time: Option<NaiveTime>,
    close_time: Option<NaiveTime>,
    is_open: bool,
}

impl<'a> SpaHoursFactory<'a> {
    /// Creates a new SpaHoursFactory for `day_of_week`.
    ///
    /// Defaults:
    /// - open_time: `09:00`
    /// - close_time: `18:00`
    /// - is_open: `true`
    pub fn new(db: &'a DatabaseConnection, day_of_week: impl Into<String>) -> Self {
        Self {
            db,
            day_of_week: day_of_week.into(),
            open_time: NaiveTime::from_hms_opt(9, 0, 0),
            close_time: NaiveTime::from_hms_opt(18, 0, 0),
            is_open: true,
        }
    }

    pub fn open_time(mut self, open_time: NaiveTime) -> Self {
        self.open_time = Some(open_time);
        self
    }

    pub fn close_time(mut self, close_time: NaiveTime) -> Self {
        self.close_time = Some(close_time);
        self
    }

    /// Marks the day closed, without opening or closing times.
    pub fn closed(mut self) -> Self {
        self.open_time = None;
        self.close_time = None;
        self.is_open = false;
        self
    }

    pub async fn build(self) -> Result<entity::spa_hours::Model, DbErr> {
        entity::spa_hours::ActiveModel {
            id: ActiveValue::NotSet,
            day_of_week: ActiveValue::Set(self.day_of_week),
            open_time: ActiveValue::Set(self.open_time),
            close_time: ActiveValue::Set(self.close_time),
            is_open: ActiveValue::Set(self.is_open),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open day from 09:00 to 18:00.
pub async fn create_spa_hours(
    db: &DatabaseConnection,
    day_of_week: &str,
) -> Result<entity::spa_hours::Model, DbErr> {
    SpaHoursFactory::new(db, day_of_week).build().await
}
