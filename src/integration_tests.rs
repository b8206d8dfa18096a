#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
        Router,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::api::inventory_router;
    use crate::app_system::{Config, InventorySystem};

    fn create_test_app() -> Router {
        let system = InventorySystem::new(&Config::default());
        inventory_router(system.service)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    async fn create(app: &Router, name: &str, price: f64, count: u32) -> Value {
        let (status, body) = send(
            app,
            Method::POST,
            "/products/",
            Some(json!({ "productName": name, "productPrice": price, "inventoryCount": count })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body
    }

    #[tokio::test]
    async fn test_create_returns_record_with_assigned_id() {
        let app = create_test_app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/products",
            Some(json!({ "id": 99, "productName": "Shampoo", "productPrice": 49.99, "inventoryCount": 50 })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({ "id": 1, "productName": "Shampoo", "productPrice": 49.99, "inventoryCount": 50 })
        );
    }

    #[tokio::test]
    async fn test_list_all_in_creation_order() {
        let app = create_test_app();
        create(&app, "Shampoo", 49.99, 50).await;
        create(&app, "Conditioner", 42.99, 5).await;

        let (status, body) = send(&app, Method::GET, "/products/", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                { "id": 1, "productName": "Shampoo", "productPrice": 49.99, "inventoryCount": 50 },
                { "id": 2, "productName": "Conditioner", "productPrice": 42.99, "inventoryCount": 5 }
            ])
        );
    }

    #[tokio::test]
    async fn test_available_filter() {
        let app = create_test_app();
        create(&app, "Shampoo", 49.99, 50).await;
        create(&app, "Conditioner", 42.99, 0).await;

        let (_, available) = send(&app, Method::GET, "/products/?available=true", None).await;
        let names: Vec<&str> = available
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["productName"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Shampoo"]);

        let (_, all) = send(&app, Method::GET, "/products/?available=false", None).await;
        assert_eq!(all.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_single_product() {
        let app = create_test_app();
        create(&app, "Shampoo", 49.99, 50).await;

        let (status, body) = send(&app, Method::GET, "/products/1", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["productName"], "Shampoo");
        assert_eq!(body["inventoryCount"], 50);
    }

    #[tokio::test]
    async fn test_missing_product_is_404_for_every_operation() {
        let app = create_test_app();

        let requests = [
            (Method::GET, "/products/7", None),
            (Method::PATCH, "/products/7", Some(json!({ "productName": "Soap" }))),
            (Method::DELETE, "/products/7", None),
            (Method::PATCH, "/products/purchase/7", None),
        ];

        for (method, uri, body) in requests {
            let (status, body) = send(&app, method, uri, body).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body["code"], "NOT_FOUND");
            assert_eq!(body["message"], "The product was not found in the database.");
        }
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let app = create_test_app();
        create(&app, "Shampoo", 49.99, 50).await;

        let (status, body) = send(
            &app,
            Method::PATCH,
            "/products/1",
            Some(json!({ "productName": "Conditioner", "productPrice": 59.99, "inventoryCount": 5 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "id": 1, "productName": "Conditioner", "productPrice": 59.99, "inventoryCount": 5 })
        );

        let (_, fetched) = send(&app, Method::GET, "/products/1", None).await;
        assert_eq!(fetched, body);
    }

    #[tokio::test]
    async fn test_update_with_missing_fields_writes_zero_values() {
        let app = create_test_app();
        create(&app, "Shampoo", 49.99, 50).await;

        let (status, body) = send(
            &app,
            Method::PATCH,
            "/products/1",
            Some(json!({ "productPrice": 10.0 })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "id": 1, "productName": "", "productPrice": 10.0, "inventoryCount": 0 })
        );
    }

    #[tokio::test]
    async fn test_delete_then_list_is_empty() {
        let app = create_test_app();
        create(&app, "Shampoo", 49.99, 50).await;

        let (status, body) = send(&app, Method::DELETE, "/products/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Product with ID#1 was deleted.");

        let (_, all) = send(&app, Method::GET, "/products/", None).await;
        assert_eq!(all, json!([]));

        let (status, _) = send(&app, Method::GET, "/products/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_purchase_decrements_stock() {
        let app = create_test_app();
        create(&app, "Shampoo", 49.99, 50).await;

        let (status, body) = send(&app, Method::PATCH, "/products/purchase/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["inventoryCount"], 49);

        let (_, fetched) = send(&app, Method::GET, "/products/1", None).await;
        assert_eq!(
            fetched,
            json!({ "id": 1, "productName": "Shampoo", "productPrice": 49.99, "inventoryCount": 49 })
        );
    }

    #[tokio::test]
    async fn test_purchase_without_stock_is_400() {
        let app = create_test_app();
        create(&app, "Conditioner", 42.99, 1).await;

        let (status, _) = send(&app, Method::PATCH, "/products/purchase/1", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, Method::PATCH, "/products/purchase/1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "OUT_OF_STOCK");
        assert_eq!(body["message"], "This product has no inventory!");

        let (_, fetched) = send(&app, Method::GET, "/products/1", None).await;
        assert_eq!(fetched["inventoryCount"], 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_purchases_never_fail_with_server_error() {
        let app = create_test_app();
        create(&app, "Shampoo", 49.99, 32).await;

        let tasks: Vec<_> = (0..64)
            .map(|_| {
                let app = app.clone();
                tokio::spawn(async move {
                    let (status, _) = send(&app, Method::PATCH, "/products/purchase/1", None).await;
                    status
                })
            })
            .collect();

        let mut ok = 0;
        let mut out_of_stock = 0;
        for task in tasks {
            match task.await.unwrap() {
                StatusCode::OK => ok += 1,
                StatusCode::BAD_REQUEST => out_of_stock += 1,
                status => panic!("Unexpected status: {status}"),
            }
        }

        assert_eq!(ok, 32);
        assert_eq!(out_of_stock, 32);
        let (_, fetched) = send(&app, Method::GET, "/products/1", None).await;
        assert_eq!(fetched["inventoryCount"], 0);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_rejected() {
        let app = create_test_app();

        let (status, _) = send(&app, Method::GET, "/products/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health() {
        let app = create_test_app();

        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }
}
