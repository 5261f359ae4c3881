use axum::http::{header, HeaderMap};
use subtle::ConstantTimeEq;

use crate::core::errors::ApiError;

/// Checks the `Authorization: Bearer <secret>` header against the configured
/// shared secret. A missing secret disables the check entirely (open access).
/// The comparison is constant-time.
pub fn require_bearer(headers: &HeaderMap, secret: Option<&str>) -> Result<(), ApiError> {
    let Some(secret) = secret else {
        return Ok(());
    };

    let presented = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if presented.is_empty() {
        return Err(ApiError::Unauthorized);
    }

    let expected = format!("Bearer {}", secret);
    if presented.as_bytes().ct_eq(expected.as_bytes()).unwrap_u8() != 1 {
        return Err(ApiError::Unauthorized);
    }

    Ok(())
}
