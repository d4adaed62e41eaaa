//! App Router

use salvo::Router;

use crate::{carts, products, shops};

/// Catalog and cart endpoints, mounted at the root.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("getProducts").get(products::index::handler))
        .push(Router::with_path("getShops").get(shops::index::handler))
        .push(Router::with_path("getCurrentCart").get(carts::get::handler))
        .push(Router::with_path("addProduct").post(carts::add::handler))
        .push(Router::with_path("addAmount").post(carts::increment::handler))
        .push(Router::with_path("decAmount").post(carts::decrement::handler))
        .push(Router::with_path("removeFromCart").post(carts::remove::handler))
        .push(Router::with_path("addProductToDB").post(products::create::handler))
}
