use super::*;

fn headers_with(authorization: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(authorization).unwrap());
    headers
}

/// Tests the configured token grants access.
///
/// Expected: Ok(())
#[test]
fn grants_access_with_matching_token() {
    let headers = headers_with("Bearer s3cret");

    let result = AdminGuard::new(Some("s3cret"), &headers).require();

    assert!(result.is_ok());
}

/// Tests requests without credentials are unauthenticated.
///
/// Verifies both an absent header and a non-bearer scheme count as missing.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_missing_token() {
    let empty = HeaderMap::new();
    let basic = headers_with("Basic YWRtaW46YWRtaW4=");
    let blank = headers_with("Bearer ");

    for headers in [&empty, &basic, &blank] {
        let result = AdminGuard::new(Some("s3cret"), headers).require();

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::MissingToken))
        ));
    }
}

/// Tests a wrong token is forbidden.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_wrong_token() {
    let headers = headers_with("Bearer guessed");

    let result = AdminGuard::new(Some("s3cret"), &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
}

/// Tests admin access stays closed when no token is configured.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_any_token_when_unconfigured() {
    let headers = headers_with("Bearer anything");

    let result = AdminGuard::new(None, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
}
