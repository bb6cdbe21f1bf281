use crate::{
    abstract_trait::{
        DynCartQueryRepository, DynOrderCommandRepository, NewOrderLine, OrderCommandServiceTrait,
    },
    domain::{
        requests::CheckoutRequest,
        responses::{ApiResponse, OrderItemResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderCommandService {
    pub cart_query: DynCartQueryRepository,
    pub command: DynOrderCommandRepository,
}

impl OrderCommandService {
    pub fn new(cart_query: DynCartQueryRepository, command: DynOrderCommandRepository) -> Self {
        Self {
            cart_query,
            command,
        }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    /// Materializes the user's cart into an order. Validation happens against
    /// a joined snapshot of the cart; the repository re-checks stock inside
    /// the transaction, so a concurrent checkout can never push stock below
    /// zero or leave a half-written order behind.
    async fn checkout(
        &self,
        req: &CheckoutRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("🏗️ Checking out cart for user {}", req.user_id);

        let cart = self.cart_query.find_by_user(req.user_id).await?;

        if cart.is_empty() {
            error!("❌ User {} attempted checkout with empty cart", req.user_id);
            return Err(ServiceError::EmptyCart);
        }

        for line in &cart {
            if line.stock < line.quantity {
                error!(
                    "❌ Not enough stock for product {}: requested {}, available {}",
                    line.product_id, line.quantity, line.stock
                );
                return Err(ServiceError::InsufficientStock {
                    product_id: line.product_id,
                    requested: line.quantity,
                    available: line.stock,
                });
            }
        }

        let lines: Vec<NewOrderLine> = cart
            .iter()
            .map(|line| NewOrderLine {
                product_id: line.product_id,
                quantity: line.quantity,
                line_total: line.price * line.quantity as i64,
            })
            .collect();
        let total_price: i64 = lines.iter().map(|l| l.line_total).sum();

        let order = self
            .command
            .create_with_lines(req.user_id, total_price, &lines)
            .await
            .map_err(|err| match err {
                // Someone else bought the last units between our snapshot and
                // the transaction; report it the same way as the pre-check.
                RepositoryError::StockConflict { product_id } => {
                    let (requested, available) = cart
                        .iter()
                        .find(|l| l.product_id == product_id)
                        .map(|l| (l.quantity, l.stock))
                        .unwrap_or((0, 0));
                    ServiceError::InsufficientStock {
                        product_id,
                        requested,
                        available,
                    }
                }
                other => ServiceError::Repo(other),
            })?;

        let items: Vec<OrderItemResponse> = cart
            .iter()
            .zip(lines.iter())
            .map(|(cart_line, order_line)| OrderItemResponse {
                product_name: cart_line.name.clone(),
                quantity: order_line.quantity,
                total_price: order_line.line_total,
            })
            .collect();

        info!(
            "✅ Order {} created for user {} (total {})",
            order.order_id, req.user_id, order.total_price
        );

        Ok(ApiResponse::success(
            "Checkout successful",
            OrderResponse {
                id: order.order_id,
                order_date: order.order_date.to_string(),
                status: order.status,
                total_price: order.total_price,
                items,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{CartQueryRepositoryTrait, OrderCommandRepositoryTrait},
        model::{CartItem, CartItemProduct, Order},
    };
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone)]
    struct StockRow {
        product_id: i32,
        name: &'static str,
        price: i64,
        stock: i32,
    }

    #[derive(Debug, Default)]
    struct World {
        products: Vec<StockRow>,
        cart: Vec<(i32, i32, i32)>, // (user_id, product_id, quantity)
        orders: Vec<Order>,
        order_lines: Vec<NewOrderLine>,
    }

    /// In-memory stand-in for the two repositories the checkout touches.
    /// `create_with_lines` mimics the real transaction: it stages every write
    /// on a copy and only publishes the copy when all guards pass.
    #[derive(Clone, Default)]
    struct FakeWorld {
        state: Arc<Mutex<World>>,
    }

    #[async_trait]
    impl CartQueryRepositoryTrait for FakeWorld {
        async fn find_by_user(
            &self,
            user_id: i32,
        ) -> Result<Vec<CartItemProduct>, RepositoryError> {
            let world = self.state.lock().unwrap();
            Ok(world
                .cart
                .iter()
                .filter(|(u, _, _)| *u == user_id)
                .enumerate()
                .map(|(idx, (u, p, q))| {
                    let row = world
                        .products
                        .iter()
                        .find(|r| r.product_id == *p)
                        .expect("cart references known product");
                    CartItemProduct {
                        cart_item_id: idx as i32 + 1,
                        user_id: *u,
                        product_id: *p,
                        quantity: *q,
                        name: row.name.to_string(),
                        description: String::new(),
                        price: row.price,
                        stock: row.stock,
                        image_url: None,
                    }
                })
                .collect())
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<CartItem>, RepositoryError> {
            unimplemented!("not used by checkout tests")
        }
    }

    #[async_trait]
    impl OrderCommandRepositoryTrait for FakeWorld {
        async fn create_with_lines(
            &self,
            user_id: i32,
            total_price: i64,
            lines: &[NewOrderLine],
        ) -> Result<Order, RepositoryError> {
            let mut world = self.state.lock().unwrap();

            let mut staged_products = world.products.clone();
            for line in lines {
                let row = staged_products
                    .iter_mut()
                    .find(|r| r.product_id == line.product_id)
                    .ok_or(RepositoryError::NotFound)?;
                if row.stock < line.quantity {
                    // guard failed: nothing staged gets published
                    return Err(RepositoryError::StockConflict {
                        product_id: line.product_id,
                    });
                }
                row.stock -= line.quantity;
            }

            let order = Order {
                order_id: world.orders.len() as i32 + 1,
                user_id,
                order_date: Utc::now().naive_utc(),
                status: "pending".to_string(),
                total_price,
                created_at: None,
                updated_at: None,
            };

            world.products = staged_products;
            world.order_lines.extend_from_slice(lines);
            world.orders.push(order.clone());
            world.cart.retain(|(u, _, _)| *u != user_id);

            Ok(order)
        }
    }

    fn service_with(world: World) -> (OrderCommandService, FakeWorld) {
        let fake = FakeWorld {
            state: Arc::new(Mutex::new(world)),
        };
        let service = OrderCommandService::new(Arc::new(fake.clone()), Arc::new(fake.clone()));
        (service, fake)
    }

    fn two_product_world() -> World {
        World {
            products: vec![
                StockRow {
                    product_id: 1,
                    name: "A",
                    price: 1000,
                    stock: 5,
                },
                StockRow {
                    product_id: 2,
                    name: "B",
                    price: 500,
                    stock: 5,
                },
            ],
            cart: vec![(1, 1, 2), (1, 2, 1)],
            ..World::default()
        }
    }

    #[tokio::test]
    async fn checkout_materializes_order_and_clears_cart() {
        let (service, fake) = service_with(two_product_world());

        let resp = service
            .checkout(&CheckoutRequest { user_id: 1 })
            .await
            .expect("checkout");

        // cart = [A: 10.00 x 2, B: 5.00 x 1] -> 25.00 total
        assert_eq!(resp.data.total_price, 2500);
        assert_eq!(resp.data.status, "pending");
        assert_eq!(resp.data.items.len(), 2);
        assert_eq!(resp.data.items[0].product_name, "A");
        assert_eq!(resp.data.items[0].total_price, 2000);
        assert_eq!(resp.data.items[1].product_name, "B");
        assert_eq!(resp.data.items[1].total_price, 500);

        let world = fake.state.lock().unwrap();
        assert_eq!(world.orders.len(), 1);
        assert_eq!(world.order_lines.len(), 2);
        assert!(world.cart.is_empty());
        assert_eq!(world.products[0].stock, 3);
        assert_eq!(world.products[1].stock, 4);
    }

    #[tokio::test]
    async fn order_total_equals_sum_of_line_totals() {
        let (service, fake) = service_with(two_product_world());

        let resp = service
            .checkout(&CheckoutRequest { user_id: 1 })
            .await
            .expect("checkout");

        let world = fake.state.lock().unwrap();
        let line_sum: i64 = world.order_lines.iter().map(|l| l.line_total).sum();
        assert_eq!(world.orders[0].total_price, line_sum);
        assert_eq!(resp.data.total_price, line_sum);
    }

    #[tokio::test]
    async fn empty_cart_fails_without_writes() {
        let (service, fake) = service_with(World {
            products: vec![StockRow {
                product_id: 1,
                name: "A",
                price: 1000,
                stock: 5,
            }],
            ..World::default()
        });

        let err = service
            .checkout(&CheckoutRequest { user_id: 1 })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::EmptyCart));

        let world = fake.state.lock().unwrap();
        assert!(world.orders.is_empty());
        assert!(world.order_lines.is_empty());
        assert_eq!(world.products[0].stock, 5);
    }

    #[tokio::test]
    async fn oversized_line_fails_and_leaves_everything_unchanged() {
        let (service, fake) = service_with(World {
            products: vec![
                StockRow {
                    product_id: 1,
                    name: "A",
                    price: 1000,
                    stock: 1,
                },
                StockRow {
                    product_id: 2,
                    name: "B",
                    price: 500,
                    stock: 5,
                },
            ],
            cart: vec![(1, 1, 3), (1, 2, 1)],
            ..World::default()
        });

        let err = service
            .checkout(&CheckoutRequest { user_id: 1 })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::InsufficientStock {
                product_id: 1,
                requested: 3,
                available: 1,
            }
        ));

        let world = fake.state.lock().unwrap();
        assert!(world.orders.is_empty());
        assert!(world.order_lines.is_empty());
        assert_eq!(world.cart.len(), 2);
        assert_eq!(world.products[0].stock, 1);
        assert_eq!(world.products[1].stock, 5);
    }

    #[tokio::test]
    async fn stock_conflict_inside_transaction_surfaces_as_insufficient_stock() {
        // The snapshot says 2 in stock, but by the time the transaction runs
        // another checkout has taken them. The guard must reject and the
        // service must report it like any other stock shortage.
        let world = World {
            products: vec![StockRow {
                product_id: 1,
                name: "A",
                price: 1000,
                stock: 2,
            }],
            cart: vec![(1, 1, 2)],
            ..World::default()
        };
        let (service, fake) = service_with(world);

        fake.state.lock().unwrap().products[0].stock = 1;

        let err = service
            .checkout(&CheckoutRequest { user_id: 1 })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::InsufficientStock { product_id: 1, .. }
        ));

        let world = fake.state.lock().unwrap();
        assert!(world.orders.is_empty());
        assert_eq!(world.cart.len(), 1);
        assert_eq!(world.products[0].stock, 1);
    }

    #[tokio::test]
    async fn line_totals_snapshot_price_times_quantity() {
        let (service, _fake) = service_with(World {
            products: vec![StockRow {
                product_id: 1,
                name: "A",
                price: 333,
                stock: 10,
            }],
            cart: vec![(1, 1, 3)],
            ..World::default()
        });

        let resp = service
            .checkout(&CheckoutRequest { user_id: 1 })
            .await
            .expect("checkout");

        assert_eq!(resp.data.items[0].total_price, 999);
        assert_eq!(resp.data.total_price, 999);
    }
}
