//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through Axum's
//! state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::pricing::DiscountPolicy;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and the
/// discount policy sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Discount rule applied when a booking carries a discount code.
    pub discount_policy: Arc<dyn DiscountPolicy>,

    /// Bearer token for admin endpoints; `None` keeps them closed.
    pub admin_token: Option<String>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        discount_policy: Arc<dyn DiscountPolicy>,
        admin_token: Option<String>,
    ) -> Self {
        Self {
            db,
            discount_policy,
            admin_token,
        }
    }
}
