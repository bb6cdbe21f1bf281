use crate::{
    abstract_trait::{
        CartServiceTrait, DynCartCommandRepository, DynCartQueryRepository,
        DynProductQueryRepository,
    },
    domain::{
        requests::AddToCartRequest,
        responses::{ApiResponse, CartItemResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct CartService {
    pub query: DynCartQueryRepository,
    pub command: DynCartCommandRepository,
    pub product_query: DynProductQueryRepository,
}

impl CartService {
    pub fn new(
        query: DynCartQueryRepository,
        command: DynCartCommandRepository,
        product_query: DynProductQueryRepository,
    ) -> Self {
        Self {
            query,
            command,
            product_query,
        }
    }
}

#[async_trait]
impl CartServiceTrait for CartService {
    async fn get_cart(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<CartItemResponse>>, ServiceError> {
        let items = self.query.find_by_user(user_id).await?;

        let data = items.into_iter().map(CartItemResponse::from).collect();

        Ok(ApiResponse::success("Cart fetched successfully", data))
    }

    async fn add_to_cart(
        &self,
        req: &AddToCartRequest,
    ) -> Result<ApiResponse<CartItemResponse>, ServiceError> {
        let product = self
            .product_query
            .find_by_id(req.product_id)
            .await?
            .ok_or_else(|| {
                error!("❌ Product {} not found for add-to-cart", req.product_id);
                ServiceError::ProductNotFound(req.product_id)
            })?;

        let item = self
            .command
            .upsert_item(req.user_id, req.product_id, req.quantity)
            .await?;

        info!(
            "✅ User {} now has {} x product {} in cart",
            req.user_id, item.quantity, req.product_id
        );

        Ok(ApiResponse::success(
            "Product added to cart",
            CartItemResponse {
                id: item.cart_item_id,
                name: product.name,
                description: product.description,
                price: product.price,
                quantity: item.quantity,
                available: product.stock,
                image_url: product.image_url,
            },
        ))
    }

    async fn remove_item(
        &self,
        user_id: i32,
        item_id: i32,
    ) -> Result<ApiResponse<()>, ServiceError> {
        let item = self
            .query
            .find_by_id(item_id)
            .await?
            .ok_or(ServiceError::Repo(crate::errors::RepositoryError::NotFound))?;

        if item.user_id != user_id {
            error!(
                "❌ User {} attempted to remove cart item {} owned by user {}",
                user_id, item_id, item.user_id
            );
            return Err(ServiceError::UnauthorizedCartAccess);
        }

        self.command.delete_item(item_id).await?;

        Ok(ApiResponse::success("Cart item removed", ()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            CartCommandRepositoryTrait, CartQueryRepositoryTrait, ProductQueryRepositoryTrait,
        },
        domain::requests::FindAllQuery,
        errors::RepositoryError,
        model::{CartItem, CartItemProduct, Product},
    };
    use std::sync::{Arc, Mutex};

    fn product(id: i32, name: &str, price: i64, stock: i32) -> Product {
        Product {
            product_id: id,
            name: name.to_string(),
            description: String::new(),
            price,
            stock,
            category: "misc".to_string(),
            image_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[derive(Default)]
    struct FakeStore {
        products: Vec<Product>,
        cart: Vec<CartItem>,
        next_id: i32,
    }

    #[derive(Clone, Default)]
    struct FakeRepos {
        store: Arc<Mutex<FakeStore>>,
    }

    #[async_trait]
    impl ProductQueryRepositoryTrait for FakeRepos {
        async fn find_all(
            &self,
            _req: &FindAllQuery,
        ) -> Result<(Vec<Product>, i64), RepositoryError> {
            unimplemented!("not used by cart tests")
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
            let store = self.store.lock().unwrap();
            Ok(store.products.iter().find(|p| p.product_id == id).cloned())
        }

        async fn find_by_name(&self, _name: &str) -> Result<Option<Product>, RepositoryError> {
            unimplemented!("not used by cart tests")
        }

        async fn count_all(&self) -> Result<i64, RepositoryError> {
            unimplemented!("not used by cart tests")
        }
    }

    #[async_trait]
    impl CartQueryRepositoryTrait for FakeRepos {
        async fn find_by_user(
            &self,
            user_id: i32,
        ) -> Result<Vec<CartItemProduct>, RepositoryError> {
            let store = self.store.lock().unwrap();
            Ok(store
                .cart
                .iter()
                .filter(|c| c.user_id == user_id)
                .map(|c| {
                    let p = store
                        .products
                        .iter()
                        .find(|p| p.product_id == c.product_id)
                        .expect("cart references known product");
                    CartItemProduct {
                        cart_item_id: c.cart_item_id,
                        user_id: c.user_id,
                        product_id: c.product_id,
                        quantity: c.quantity,
                        name: p.name.clone(),
                        description: p.description.clone(),
                        price: p.price,
                        stock: p.stock,
                        image_url: p.image_url.clone(),
                    }
                })
                .collect())
        }

        async fn find_by_id(
            &self,
            cart_item_id: i32,
        ) -> Result<Option<CartItem>, RepositoryError> {
            let store = self.store.lock().unwrap();
            Ok(store
                .cart
                .iter()
                .find(|c| c.cart_item_id == cart_item_id)
                .cloned())
        }
    }

    #[async_trait]
    impl CartCommandRepositoryTrait for FakeRepos {
        async fn upsert_item(
            &self,
            user_id: i32,
            product_id: i32,
            quantity: i32,
        ) -> Result<CartItem, RepositoryError> {
            let mut store = self.store.lock().unwrap();

            if let Some(existing) = store
                .cart
                .iter_mut()
                .find(|c| c.user_id == user_id && c.product_id == product_id)
            {
                existing.quantity += quantity;
                return Ok(existing.clone());
            }

            store.next_id += 1;
            let item = CartItem {
                cart_item_id: store.next_id,
                user_id,
                product_id,
                quantity,
                created_at: None,
                updated_at: None,
            };
            store.cart.push(item.clone());
            Ok(item)
        }

        async fn delete_item(&self, cart_item_id: i32) -> Result<(), RepositoryError> {
            let mut store = self.store.lock().unwrap();
            let before = store.cart.len();
            store.cart.retain(|c| c.cart_item_id != cart_item_id);
            if store.cart.len() == before {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        }
    }

    fn service_with(products: Vec<Product>) -> (CartService, FakeRepos) {
        let repos = FakeRepos::default();
        repos.store.lock().unwrap().products = products;
        let service = CartService::new(
            Arc::new(repos.clone()),
            Arc::new(repos.clone()),
            Arc::new(repos.clone()),
        );
        (service, repos)
    }

    #[tokio::test]
    async fn adding_same_product_twice_merges_into_one_row() {
        let (service, repos) = service_with(vec![product(1, "Soap", 300, 10)]);

        let req = AddToCartRequest {
            user_id: 7,
            product_id: 1,
            quantity: 2,
        };
        service.add_to_cart(&req).await.expect("first add");

        let req = AddToCartRequest {
            user_id: 7,
            product_id: 1,
            quantity: 3,
        };
        let resp = service.add_to_cart(&req).await.expect("second add");

        assert_eq!(resp.data.quantity, 5);

        let store = repos.store.lock().unwrap();
        assert_eq!(store.cart.len(), 1);
        assert_eq!(store.cart[0].quantity, 5);
    }

    #[tokio::test]
    async fn adding_unknown_product_fails() {
        let (service, repos) = service_with(vec![]);

        let req = AddToCartRequest {
            user_id: 7,
            product_id: 99,
            quantity: 1,
        };
        let err = service.add_to_cart(&req).await.unwrap_err();

        assert!(matches!(err, ServiceError::ProductNotFound(99)));
        assert!(repos.store.lock().unwrap().cart.is_empty());
    }

    #[tokio::test]
    async fn removing_another_users_item_is_rejected_and_row_survives() {
        let (service, repos) = service_with(vec![product(1, "Soap", 300, 10)]);

        service
            .add_to_cart(&AddToCartRequest {
                user_id: 1,
                product_id: 1,
                quantity: 1,
            })
            .await
            .expect("seed cart");
        let item_id = repos.store.lock().unwrap().cart[0].cart_item_id;

        let err = service.remove_item(2, item_id).await.unwrap_err();

        assert!(matches!(err, ServiceError::UnauthorizedCartAccess));
        assert_eq!(repos.store.lock().unwrap().cart.len(), 1);
    }

    #[tokio::test]
    async fn owner_can_remove_their_item() {
        let (service, repos) = service_with(vec![product(1, "Soap", 300, 10)]);

        service
            .add_to_cart(&AddToCartRequest {
                user_id: 1,
                product_id: 1,
                quantity: 1,
            })
            .await
            .expect("seed cart");
        let item_id = repos.store.lock().unwrap().cart[0].cart_item_id;

        service.remove_item(1, item_id).await.expect("remove");

        assert!(repos.store.lock().unwrap().cart.is_empty());
    }

    #[tokio::test]
    async fn removing_missing_item_is_not_found() {
        let (service, _repos) = service_with(vec![]);

        let err = service.remove_item(1, 42).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn get_cart_shapes_lines_with_availability() {
        let (service, _repos) = service_with(vec![product(1, "Soap", 300, 10)]);

        service
            .add_to_cart(&AddToCartRequest {
                user_id: 1,
                product_id: 1,
                quantity: 4,
            })
            .await
            .expect("seed cart");

        let resp = service.get_cart(1).await.expect("get cart");

        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].name, "Soap");
        assert_eq!(resp.data[0].quantity, 4);
        assert_eq!(resp.data[0].available, 10);
    }
}
