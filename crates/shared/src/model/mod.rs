mod cart_item;
mod order;
mod product;
mod user;

pub use self::cart_item::{CartItem, CartItemProduct};
pub use self::order::{Order, OrderLineProduct, OrderWithUser, ProductOrder};
pub use self::product::Product;
pub use self::user::User;
