use axum::http::HeaderMap;

/// Resolves the client address recorded in audit entries.
///
/// Uses the first address of `X-Forwarded-For`, then `X-Real-IP`. Returns `None` when
/// neither header carries a non-empty value.
pub fn request_origin(headers: &HeaderMap) -> Option<String> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    let real_ip = || {
        headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    forwarded.or_else(real_ip).map(str::to_string)
}
