use sea_orm::{DbErr, SqlErr};

/// Returns true when the store rejected a write for breaking a unique constraint.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
