use closet_api::session::SESSION_HEADER;
use closet_core::SessionId;
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build the prod router, but bind to an ephemeral port.
        let app = closet_api::app::build_app();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn session() -> String {
    SessionId::new().to_string()
}

async fn add_item(
    client: &reqwest::Client,
    base_url: &str,
    session: &str,
    product_id: &str,
    size: &str,
    color: &str,
) -> reqwest::Response {
    client
        .post(format!("{}/cart/items", base_url))
        .header(SESSION_HEADER, session)
        .json(&json!({ "product_id": product_id, "size": size, "color": color }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn session_id_is_minted_and_echoed() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/cart", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let echoed = res
        .headers()
        .get(SESSION_HEADER)
        .expect("session header missing")
        .to_str()
        .unwrap()
        .to_string();
    echoed.parse::<SessionId>().expect("echoed id not a uuid");

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["total_items"], 0);
    assert_eq!(body["subtotal_cents"], 0);
}

#[tokio::test]
async fn catalog_lists_all_products_unfiltered() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/catalog", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["count"], 6);
    assert_eq!(body["items"][0]["id"], "structured-blazer");
}

#[tokio::test]
async fn catalog_filters_combine_with_and() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!(
            "{}/catalog?category=Shirts&color=Black",
            srv.base_url
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["count"], 1);
    assert_eq!(body["items"][0]["id"], "premium-oxford-shirt");
}

#[tokio::test]
async fn catalog_rejects_unknown_color() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/catalog?color=Chartreuse", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_color");
}

#[tokio::test]
async fn product_detail_and_missing_product() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/catalog/cuffed-beanie", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["price_cents"], 39900);
    assert_eq!(body["price_display"], "R399");

    let res = client
        .get(format!("{}/catalog/no-such-product", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn repeated_adds_merge_and_totals_are_exact() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let sid = session();

    for _ in 0..2 {
        let res = add_item(
            &client,
            &srv.base_url,
            &sid,
            "premium-oxford-shirt",
            "M",
            "Black",
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    let res = client
        .get(format!("{}/cart", srv.base_url))
        .header(SESSION_HEADER, &sid)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["quantity"], 2);
    assert_eq!(body["total_items"], 2);
    assert_eq!(body["subtotal_cents"], 179_800);
}

#[tokio::test]
async fn unknown_product_and_unoffered_variant_are_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let sid = session();

    let res = add_item(&client, &srv.base_url, &sid, "no-such", "M", "Black").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // The beanie only comes in One Size, Black/Gray.
    let res = add_item(&client, &srv.base_url, &sid, "cuffed-beanie", "XL", "Black").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = add_item(&client, &srv.base_url, &sid, "cuffed-beanie", "One Size", "Navy").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Nothing leaked into the cart.
    let res = client
        .get(format!("{}/cart", srv.base_url))
        .header(SESSION_HEADER, &sid)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["total_items"], 0);
}

#[tokio::test]
async fn quantity_update_and_zero_removal() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let sid = session();

    add_item(&client, &srv.base_url, &sid, "essential-hoodie", "L", "Gray").await;

    let res = client
        .post(format!("{}/cart/items/quantity", srv.base_url))
        .header(SESSION_HEADER, &sid)
        .json(&json!({
            "product_id": "essential-hoodie",
            "size": "L",
            "color": "Gray",
            "quantity": 5,
        }))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["items"][0]["quantity"], 5);
    assert_eq!(body["subtotal_cents"], 5 * 79_900);

    let res = client
        .post(format!("{}/cart/items/quantity", srv.base_url))
        .header(SESSION_HEADER, &sid)
        .json(&json!({
            "product_id": "essential-hoodie",
            "size": "L",
            "color": "Gray",
            "quantity": 0,
        }))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["total_items"], 0);
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn remove_and_clear_mutate_via_post_actions() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let sid = session();

    add_item(&client, &srv.base_url, &sid, "tailored-trouser", "32", "Gray").await;
    add_item(&client, &srv.base_url, &sid, "cuffed-beanie", "One Size", "Black").await;

    let res = client
        .post(format!("{}/cart/items/remove", srv.base_url))
        .header(SESSION_HEADER, &sid)
        .json(&json!({
            "product_id": "tailored-trouser",
            "size": "32",
            "color": "Gray",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["product_id"], "cuffed-beanie");

    let res = client
        .post(format!("{}/cart/clear", srv.base_url))
        .header(SESSION_HEADER, &sid)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["total_items"], 0);
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn carts_are_isolated_per_session() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let alice = session();
    let bob = session();

    add_item(&client, &srv.base_url, &alice, "relaxed-jersey", "M", "Navy").await;

    let res = client
        .get(format!("{}/cart", srv.base_url))
        .header(SESSION_HEADER, &bob)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["total_items"], 0);
}

#[tokio::test]
async fn panel_flag_toggles_over_http() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let sid = session();

    let res = client
        .post(format!("{}/cart/toggle", srv.base_url))
        .header(SESSION_HEADER, &sid)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["is_open"], true);

    let res = client
        .post(format!("{}/cart/open", srv.base_url))
        .header(SESSION_HEADER, &sid)
        .json(&json!({ "open": false }))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["is_open"], false);
}

#[tokio::test]
async fn quote_applies_shipping_rule_at_both_sides_of_threshold() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let sid = session();

    // R399 beanie: below the R1,000 threshold, flat R100 shipping.
    add_item(&client, &srv.base_url, &sid, "cuffed-beanie", "One Size", "Black").await;
    let res = client
        .get(format!("{}/checkout/quote", srv.base_url))
        .header(SESSION_HEADER, &sid)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["subtotal_cents"], 39_900);
    assert_eq!(body["shipping_cents"], 10_000);
    assert_eq!(body["total_cents"], 49_900);

    // Add the blazer: now over the threshold, shipping free.
    add_item(&client, &srv.base_url, &sid, "structured-blazer", "M", "Black").await;
    let res = client
        .get(format!("{}/checkout/quote", srv.base_url))
        .header(SESSION_HEADER, &sid)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["subtotal_cents"], 229_800);
    assert_eq!(body["shipping_cents"], 0);
    assert_eq!(body["shipping_display"], "Free");
    assert_eq!(body["total_cents"], 229_800);
}

#[tokio::test]
async fn pay_clears_the_cart_and_repeat_pay_fails() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let sid = session();

    add_item(&client, &srv.base_url, &sid, "structured-blazer", "M", "Black").await;

    let res = client
        .post(format!("{}/checkout/pay", srv.base_url))
        .header(SESSION_HEADER, &sid)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["total_cents"], 189_900);
    assert!(body["order_id"].as_str().is_some());

    let res = client
        .get(format!("{}/cart", srv.base_url))
        .header(SESSION_HEADER, &sid)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["total_items"], 0);

    let res = client
        .post(format!("{}/checkout/pay", srv.base_url))
        .header(SESSION_HEADER, &sid)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
}
