//! Decrement Cart Entry Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use pantry_app::domain::products::records::ProductId;

use crate::{
    carts::{
        errors::into_status_error,
        handlers::{CartEntryRequest, MessageResponse},
    },
    extensions::*,
};

/// Decrement Cart Entry Handler
///
/// Takes one unit off a product in the cart; the entry is dropped when its last unit goes.
#[endpoint(
    tags("carts"),
    summary = "Decrement Cart Entry",
    responses(
        (status_code = StatusCode::OK, description = "Quantity decreased"),
        (status_code = StatusCode::BAD_REQUEST, description = "Product not in the cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CartEntryRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let product = ProductId::from_i64(json.into_inner().product_id);

    depot
        .state_or_500()?
        .app
        .carts
        .decrement_entry(product)
        .await
        .map_err(into_status_error)?;

    Ok(Json(MessageResponse::new(
        "Quantity decreased for the product in the cart",
    )))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use pantry_app::domain::carts::{CartServiceError, MockCartService, records::DecrementOutcome};

    use crate::test_helpers::{carts_service, pool_timeout};

    use super::*;

    fn make_service(carts: MockCartService) -> Service {
        carts_service(carts, Router::with_path("decAmount").post(handler))
    }

    fn expect_only_decrement(carts: &mut MockCartService) {
        carts.expect_get_current_cart().never();
        carts.expect_add_to_cart().never();
        carts.expect_increment_entry().never();
        carts.expect_remove_entry().never();
    }

    #[tokio::test]
    async fn removing_the_last_unit_still_confirms() -> TestResult {
        let mut carts = MockCartService::new();

        carts
            .expect_decrement_entry()
            .once()
            .withf(|product| *product == ProductId::from_i64(5))
            .return_once(|_| Ok(DecrementOutcome::Removed));

        expect_only_decrement(&mut carts);

        let mut res = TestClient::post("http://example.com/decAmount")
            .json(&json!({ "productId": 5 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(
            body.message,
            "Quantity decreased for the product in the cart"
        );

        Ok(())
    }

    #[tokio::test]
    async fn absent_entry_returns_400() -> TestResult {
        let mut carts = MockCartService::new();

        carts
            .expect_decrement_entry()
            .once()
            .return_once(|_| Err(CartServiceError::EntryNotFound));

        expect_only_decrement(&mut carts);

        let res = TestClient::post("http://example.com/decAmount")
            .json(&json!({ "productId": 5 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn store_fault_returns_500() -> TestResult {
        let mut carts = MockCartService::new();

        carts
            .expect_decrement_entry()
            .once()
            .return_once(|_| Err(CartServiceError::Sql(pool_timeout())));

        expect_only_decrement(&mut carts);

        let res = TestClient::post("http://example.com/decAmount")
            .json(&json!({ "productId": 5 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
