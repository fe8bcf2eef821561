use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::error::{auth::AuthError, AppError};

const BEARER_PREFIX: &str = "Bearer ";

/// Capability check for admin endpoints.
///
/// Admin access is granted by presenting the configured token as a bearer credential.
/// With no token configured every request is refused.
pub struct AdminGuard<'a> {
    admin_token: Option<&'a str>,
    headers: &'a HeaderMap,
}

impl<'a> AdminGuard<'a> {
    pub fn new(admin_token: Option<&'a str>, headers: &'a HeaderMap) -> Self {
        Self {
            admin_token,
            headers,
        }
    }

    /// Requires a bearer token matching the configured admin token.
    ///
    /// # Returns
    /// - `Ok(())` - Token matches
    /// - `Err(AuthError::MissingToken)` - No bearer credential on the request
    /// - `Err(AuthError::InvalidToken)` - Wrong token, or admin access is not configured
    pub fn require(&self) -> Result<(), AppError> {
        let Some(presented) = self.bearer_token() else {
            return Err(AuthError::MissingToken.into());
        };

        match self.admin_token {
            Some(expected) if !expected.is_empty() && presented == expected => Ok(()),
            _ => Err(AuthError::InvalidToken.into()),
        }
    }

    fn bearer_token(&self) -> Option<&'a str> {
        let value = self.headers.get(AUTHORIZATION)?.to_str().ok()?;
        let token = value.strip_prefix(BEARER_PREFIX)?.trim();

        (!token.is_empty()).then_some(token)
    }
}
