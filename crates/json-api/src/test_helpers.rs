//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use pantry_app::{
    context::AppContext,
    domain::{carts::MockCartService, products::MockProductsService, shops::MockShopsService},
};

use crate::state::State;

pub(crate) fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_add_product().never();
    products.expect_create_volume_unit().never();

    products
}

pub(crate) fn strict_shops_mock() -> MockShopsService {
    let mut shops = MockShopsService::new();

    shops.expect_list_shops().never();
    shops.expect_create_shop().never();

    shops
}

pub(crate) fn strict_carts_mock() -> MockCartService {
    let mut carts = MockCartService::new();

    carts.expect_get_current_cart().never();
    carts.expect_add_to_cart().never();
    carts.expect_increment_entry().never();
    carts.expect_decrement_entry().never();
    carts.expect_remove_entry().never();

    carts
}

fn service_with(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service_with(
        AppContext {
            products: Arc::new(products),
            shops: Arc::new(strict_shops_mock()),
            carts: Arc::new(strict_carts_mock()),
        },
        route,
    )
}

pub(crate) fn shops_service(shops: MockShopsService, route: Router) -> Service {
    service_with(
        AppContext {
            products: Arc::new(strict_products_mock()),
            shops: Arc::new(shops),
            carts: Arc::new(strict_carts_mock()),
        },
        route,
    )
}

pub(crate) fn carts_service(carts: MockCartService, route: Router) -> Service {
    service_with(
        AppContext {
            products: Arc::new(strict_products_mock()),
            shops: Arc::new(strict_shops_mock()),
            carts: Arc::new(carts),
        },
        route,
    )
}

/// A store fault as the services report it.
pub(crate) fn pool_timeout() -> sqlx::Error {
    sqlx::Error::PoolTimedOut
}
