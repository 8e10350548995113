//! API endpoints for the storefront, organized by domain:
//! - Products: catalog reads plus admin management
//! - Cart: the caller's cart lines
//! - Orders: placement and the pay/deliver lifecycle

pub mod cart;
pub mod orders;
pub mod products;

pub use cart::{add_to_cart, clear_cart, get_cart, remove_cart_item, update_cart_item};
pub use orders::{deliver_order, get_my_orders, get_order, get_orders, pay_order, place_order};
pub use products::{create_product, delete_product, get_product, list_products, update_product};
