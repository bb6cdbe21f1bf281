use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::FindAllQuery,
    errors::RepositoryError,
    model::{Order as OrderModel, OrderLineProduct, OrderWithUser},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT order_id, user_id, order_date, status, total_price, created_at, updated_at
            FROM orders
            WHERE order_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_lines(&self, order_id: i32) -> Result<Vec<OrderLineProduct>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Product name comes from an explicit join; quantity and total_price
        // are the immutable snapshots taken at checkout time.
        let lines = sqlx::query_as::<_, OrderLineProduct>(
            r#"
            SELECT p.name AS product_name, po.quantity, po.total_price
            FROM product_orders po
            JOIN products p ON p.product_id = po.product_id
            WHERE po.order_id = $1
            ORDER BY po.product_order_id
            "#,
        )
        .bind(order_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch lines for order {}: {:?}", order_id, e);
            RepositoryError::from(e)
        })?;

        Ok(lines)
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<OrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let orders = sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT order_id, user_id, order_date, status, total_price, created_at, updated_at
            FROM orders
            WHERE user_id = $1
            ORDER BY order_date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch orders for user {}: {:?}", user_id, e);
            RepositoryError::from(e)
        })?;

        Ok(orders)
    }

    async fn find_all(
        &self,
        req: &FindAllQuery,
    ) -> Result<(Vec<OrderWithUser>, i64), RepositoryError> {
        info!("🔍 Fetching orders with search: {:?}", req.search);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let limit = req.limit();
        let offset = req.offset();
        let pattern = format!("%{}%", req.search.trim());

        let orders = sqlx::query_as::<_, OrderWithUser>(
            r#"
            SELECT o.order_id, o.user_id, u.email AS user_email,
                   o.order_date, o.status, o.total_price
            FROM orders o
            JOIN users u ON u.user_id = o.user_id
            WHERE ($1 = '%%' OR u.email ILIKE $1 OR o.status ILIKE $1)
            ORDER BY o.order_date DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch orders: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM orders o
            JOIN users u ON u.user_id = o.user_id
            WHERE ($1 = '%%' OR u.email ILIKE $1 OR o.status ILIKE $1)
            "#,
        )
        .bind(&pattern)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok((orders, total))
    }

    async fn count_all(&self) -> Result<i64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(total)
    }

    async fn total_revenue(&self) -> Result<i64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let total: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(total_price), 0)::BIGINT FROM orders")
            .fetch_one(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(total)
    }
}
