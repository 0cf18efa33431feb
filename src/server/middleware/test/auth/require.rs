use super::*;

/// Tests a request without an `Authorization` header.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_missing_token() {
    let tokens = tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&tokens, &headers).require(&[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests an `Authorization` header using a scheme other than Bearer.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_non_bearer_scheme() {
    let tokens = tokens();
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic YWRtaW46YWRtaW4="));

    let result = AuthGuard::new(&tokens, &headers).require(&[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests a malformed token.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_malformed_token() {
    let tokens = tokens();
    let headers = bearer("definitely-not-a-jwt");

    let result = AuthGuard::new(&tokens, &headers).require(&[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}

/// Tests an expired token.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_expired_token() {
    let expired = TokenService::new("test-secret", Duration::seconds(-5));
    let token = expired.issue(&user_with_role(Role::SuperAdmin)).unwrap();
    let headers = bearer(&token);

    let tokens = tokens();
    let result = AuthGuard::new(&tokens, &headers).require(&[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}

/// Tests that any valid token passes when no permission is required.
///
/// Expected: Ok(AuthUser) carrying the token's identity
#[test]
fn accepts_valid_token() {
    let tokens = tokens();
    let token = tokens.issue(&user_with_role(Role::User)).unwrap();
    let headers = bearer(&token);

    let user = AuthGuard::new(&tokens, &headers).require(&[]).unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(user.role, Role::User);
}

/// Tests the super admin gate with a lower role.
///
/// Verifies that `admin` does not satisfy the gate; the role must match exactly.
///
/// Expected: Err(AuthError::AccessDenied)
#[test]
fn super_admin_gate_rejects_admin() {
    let tokens = tokens();
    let token = tokens.issue(&user_with_role(Role::Admin)).unwrap();
    let headers = bearer(&token);

    let result = AuthGuard::new(&tokens, &headers).require(&[Permission::SuperAdmin]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(7, _)))
    ));
}

/// Tests the super admin gate with a super admin.
///
/// Expected: Ok(AuthUser)
#[test]
fn super_admin_gate_accepts_super_admin() {
    let tokens = tokens();
    let token = tokens.issue(&user_with_role(Role::SuperAdmin)).unwrap();
    let headers = bearer(&token);

    let result = AuthGuard::new(&tokens, &headers).require(&[Permission::SuperAdmin]);

    assert!(result.is_ok());
}
