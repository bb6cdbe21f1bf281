use crate::{middleware::jwt::auth_middleware, state::AppState};
use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::DynAdminService,
    domain::{
        requests::FindAllQuery,
        responses::{
            ApiResponse, ApiResponsePagination, DashboardStatsResponse, OrderAdminResponse,
            ProductResponse, UserResponse,
        },
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = "Admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard totals", body = ApiResponse<DashboardStatsResponse>),
        (status = 403, description = "Admin role required"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn admin_stats_handler(
    Extension(service): Extension<DynAdminService>,
    Extension(user_id): Extension<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.stats(user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/admin/products",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(FindAllQuery),
    responses(
        (status = 200, description = "Paginated product list", body = ApiResponsePagination<Vec<ProductResponse>>),
        (status = 403, description = "Admin role required"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn admin_products_handler(
    Extension(service): Extension<DynAdminService>,
    Extension(user_id): Extension<i32>,
    Query(params): Query<FindAllQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.list_products(user_id, &params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(FindAllQuery),
    responses(
        (status = 200, description = "Paginated order list with buyer emails", body = ApiResponsePagination<Vec<OrderAdminResponse>>),
        (status = 403, description = "Admin role required"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn admin_orders_handler(
    Extension(service): Extension<DynAdminService>,
    Extension(user_id): Extension<i32>,
    Query(params): Query<FindAllQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.list_orders(user_id, &params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(FindAllQuery),
    responses(
        (status = 200, description = "Paginated user list", body = ApiResponsePagination<Vec<UserResponse>>),
        (status = 403, description = "Admin role required"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn admin_users_handler(
    Extension(service): Extension<DynAdminService>,
    Extension(user_id): Extension<i32>,
    Query(params): Query<FindAllQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.list_users(user_id, &params).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn admin_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/admin/stats", get(admin_stats_handler))
        .route("/api/admin/products", get(admin_products_handler))
        .route("/api/admin/orders", get(admin_orders_handler))
        .route("/api/admin/users", get(admin_users_handler))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.admin_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
