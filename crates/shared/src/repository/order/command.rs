use crate::{
    abstract_trait::{NewOrderLine, OrderCommandRepositoryTrait},
    config::ConnectionPool,
    errors::RepositoryError,
    model::Order as OrderModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    /// The whole materialization runs in one transaction. The stock decrement
    /// is guarded by `stock >= quantity`; a concurrent checkout that drained
    /// the stock first makes the guard match zero rows, and dropping the
    /// uncommitted transaction rolls back the order row and every line
    /// inserted so far.
    async fn create_with_lines(
        &self,
        user_id: i32,
        total_price: i64,
        lines: &[NewOrderLine],
    ) -> Result<OrderModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            INSERT INTO orders (user_id, order_date, status, total_price, created_at, updated_at)
            VALUES ($1, current_timestamp, 'pending', $2, current_timestamp, current_timestamp)
            RETURNING order_id, user_id, order_date, status, total_price, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(total_price)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to create order for user {}: {:?}", user_id, err);
            RepositoryError::from(err)
        })?;

        for line in lines {
            sqlx::query(
                r#"
                INSERT INTO product_orders (order_id, product_id, quantity, total_price)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(order.order_id)
            .bind(line.product_id)
            .bind(line.quantity)
            .bind(line.line_total)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to create order line for product {}: {:?}",
                    line.product_id, err
                );
                RepositoryError::from(err)
            })?;

            let decremented = sqlx::query(
                r#"
                UPDATE products
                SET stock = stock - $1,
                    updated_at = current_timestamp
                WHERE product_id = $2 AND stock >= $1
                "#,
            )
            .bind(line.quantity)
            .bind(line.product_id)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to decrement stock for product {}: {:?}",
                    line.product_id, err
                );
                RepositoryError::from(err)
            })?;

            if decremented.rows_affected() == 0 {
                error!(
                    "❌ Stock guard rejected product {} (qty {}), rolling back order {}",
                    line.product_id, line.quantity, order.order_id
                );
                return Err(RepositoryError::StockConflict {
                    product_id: line.product_id,
                });
            }
        }

        sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to clear cart for user {}: {:?}", user_id, err);
                RepositoryError::from(err)
            })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Materialized order ID {} for user {} ({} lines, total {})",
            order.order_id,
            user_id,
            lines.len(),
            order.total_price
        );
        Ok(order)
    }
}
