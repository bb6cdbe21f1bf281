use axum::{
    Extension,
    body::Body,
    http::{Request, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{abstract_trait::DynJwtService, errors::HttpError};

/// Accepts the access token either as a `token` cookie or as a
/// `Authorization: Bearer` header.
fn bearer_token(cookie_jar: &CookieJar, req: &Request<Body>) -> Option<String> {
    cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        })
}

/// Verifies the access token and injects the authenticated `user_id` into
/// the request extensions for the handlers downstream.
pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let token = bearer_token(&cookie_jar, &req).ok_or_else(|| {
        HttpError::unauthorized("UNAUTHORIZED", "You are not logged in, please provide token")
    })?;

    // TokenExpired / InvalidTokenType / Jwt all map to 401 with their own code
    let user_id = jwt.verify_token(&token, "access").map_err(HttpError::from)? as i32;

    req.extensions_mut().insert(user_id);

    Ok(next.run(req).await)
}
