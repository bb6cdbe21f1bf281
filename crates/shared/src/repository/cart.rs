use crate::{
    abstract_trait::{CartCommandRepositoryTrait, CartQueryRepositoryTrait},
    config::ConnectionPool,
    errors::RepositoryError,
    model::{CartItem as CartItemModel, CartItemProduct},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct CartQueryRepository {
    db: ConnectionPool,
}

impl CartQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartQueryRepositoryTrait for CartQueryRepository {
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<CartItemProduct>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let rows = sqlx::query_as::<_, CartItemProduct>(
            r#"
            SELECT
                c.cart_item_id,
                c.user_id,
                c.product_id,
                c.quantity,
                p.name,
                p.description,
                p.price,
                p.stock,
                p.image_url
            FROM cart_items c
            JOIN products p ON p.product_id = c.product_id
            WHERE c.user_id = $1
            ORDER BY c.cart_item_id
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch cart for user {}: {:?}", user_id, e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn find_by_id(
        &self,
        cart_item_id: i32,
    ) -> Result<Option<CartItemModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, CartItemModel>(
            r#"
            SELECT cart_item_id, user_id, product_id, quantity, created_at, updated_at
            FROM cart_items
            WHERE cart_item_id = $1
            "#,
        )
        .bind(cart_item_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }
}

pub struct CartCommandRepository {
    db: ConnectionPool,
}

impl CartCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartCommandRepositoryTrait for CartCommandRepository {
    async fn upsert_item(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<CartItemModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // The unique (user_id, product_id) pair makes merge-on-add a single
        // statement; two rows for the same product can never exist.
        let result = sqlx::query_as::<_, CartItemModel>(
            r#"
            INSERT INTO cart_items (user_id, product_id, quantity, created_at, updated_at)
            VALUES ($1, $2, $3, current_timestamp, current_timestamp)
            ON CONFLICT (user_id, product_id)
            DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity,
                          updated_at = current_timestamp
            RETURNING cart_item_id, user_id, product_id, quantity, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(product_id)
        .bind(quantity)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to add product {} to cart of user {}: {:?}",
                product_id, user_id, err
            );
            RepositoryError::from_sqlx(err, "unknown product")
        })?;

        info!(
            "✅ Cart item {} for user {} now has quantity {}",
            result.cart_item_id, user_id, result.quantity
        );
        Ok(result)
    }

    async fn delete_item(&self, cart_item_id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM cart_items WHERE cart_item_id = $1")
            .bind(cart_item_id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete cart item {}: {:?}", cart_item_id, e);
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted cart item {}", cart_item_id);
        Ok(())
    }
}
