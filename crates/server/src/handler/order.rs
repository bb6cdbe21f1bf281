use crate::{
    middleware::{jwt::auth_middleware, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::{DynOrderCommandService, DynOrderQueryService},
    domain::{
        requests::{CheckoutRequest, UserOrdersQuery},
        responses::{ApiResponse, OrderResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

fn ensure_own_orders(token_user_id: i32, target_user_id: i32) -> Result<(), HttpError> {
    if token_user_id != target_user_id {
        return Err(HttpError::forbidden(
            "FORBIDDEN",
            "Orders belong to another user",
        ));
    }
    Ok(())
}

#[utoipa::path(
    post,
    path = "/api/checkout",
    tag = "Order",
    security(("bearer_auth" = [])),
    request_body = CheckoutRequest,
    responses(
        (status = 201, description = "Order created from cart", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Cart is empty"),
        (status = 409, description = "Insufficient stock"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn checkout_handler(
    Extension(service): Extension<DynOrderCommandService>,
    Extension(user_id): Extension<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<CheckoutRequest>,
) -> Result<impl IntoResponse, HttpError> {
    ensure_own_orders(user_id, body.user_id)?;
    let response = service.checkout(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/order/{order_id}/confirmation",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("order_id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order with line items", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn order_confirmation_handler(
    Extension(service): Extension<DynOrderQueryService>,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.confirmation(order_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(UserOrdersQuery),
    responses(
        (status = 200, description = "Order history for the user", body = ApiResponse<Vec<OrderResponse>>),
        (status = 403, description = "Orders belong to another user"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_orders_handler(
    Extension(service): Extension<DynOrderQueryService>,
    Extension(user_id): Extension<i32>,
    Query(params): Query<UserOrdersQuery>,
) -> Result<impl IntoResponse, HttpError> {
    ensure_own_orders(user_id, params.user_id)?;
    let response = service.find_by_user(params.user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/checkout", post(checkout_handler))
        .route(
            "/api/order/{order_id}/confirmation",
            get(order_confirmation_handler),
        )
        .route("/api/orders", get(get_orders_handler))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.order_command.clone()))
        .layer(Extension(app_state.di_container.order_query.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
