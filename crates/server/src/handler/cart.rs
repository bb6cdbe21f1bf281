use crate::{
    middleware::{jwt::auth_middleware, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post},
};
use shared::{
    abstract_trait::DynCartService,
    domain::{
        requests::AddToCartRequest,
        responses::{ApiResponse, CartItemResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

// Request bodies and paths carry an explicit user_id; it must match the
// authenticated user so nobody can read or mutate someone else's cart.
fn ensure_own_cart(token_user_id: i32, target_user_id: i32) -> Result<(), HttpError> {
    if token_user_id != target_user_id {
        return Err(HttpError::forbidden(
            "UNAUTHORIZED_CART_ACCESS",
            "Cart does not belong to the requesting user",
        ));
    }
    Ok(())
}

#[utoipa::path(
    post,
    path = "/api/add-to-cart",
    tag = "Cart",
    security(("bearer_auth" = [])),
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Product added to cart", body = ApiResponse<CartItemResponse>),
        (status = 404, description = "Product not found"),
        (status = 403, description = "Cart belongs to another user"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn add_to_cart_handler(
    Extension(service): Extension<DynCartService>,
    Extension(user_id): Extension<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<AddToCartRequest>,
) -> Result<impl IntoResponse, HttpError> {
    ensure_own_cart(user_id, body.user_id)?;
    let response = service.add_to_cart(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/cart/{user_id}",
    tag = "Cart",
    security(("bearer_auth" = [])),
    params(("user_id" = i32, Path, description = "Cart owner")),
    responses(
        (status = 200, description = "Cart contents", body = ApiResponse<Vec<CartItemResponse>>),
        (status = 403, description = "Cart belongs to another user"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_cart_handler(
    Extension(service): Extension<DynCartService>,
    Extension(user_id): Extension<i32>,
    Path(cart_user_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    ensure_own_cart(user_id, cart_user_id)?;
    let response = service.get_cart(cart_user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{user_id}/remove/{item_id}",
    tag = "Cart",
    security(("bearer_auth" = [])),
    params(
        ("user_id" = i32, Path, description = "Cart owner"),
        ("item_id" = i32, Path, description = "Cart item ID")
    ),
    responses(
        (status = 200, description = "Cart item removed"),
        (status = 404, description = "Cart item not found"),
        (status = 403, description = "Cart item belongs to another user"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn remove_cart_item_handler(
    Extension(service): Extension<DynCartService>,
    Extension(user_id): Extension<i32>,
    Path((cart_user_id, item_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, HttpError> {
    ensure_own_cart(user_id, cart_user_id)?;
    let response = service.remove_item(cart_user_id, item_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn cart_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/add-to-cart", post(add_to_cart_handler))
        .route("/api/cart/{user_id}", get(get_cart_handler))
        .route(
            "/api/cart/{user_id}/remove/{item_id}",
            delete(remove_cart_item_handler),
        )
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.cart_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
