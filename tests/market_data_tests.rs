mod common;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::json;

use common::*;
use prtn_info_bot::{
    api::{DexScreenerClient, MarketDataSource},
    bot::Command,
    constants::PRTN_CONTRACT,
    errors::BotError,
};

/// Serve `app` on an ephemeral port and return the base URL
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn token_path() -> String {
    format!("/latest/dex/tokens/{}", PRTN_CONTRACT)
}

async fn client_for(app: Router) -> DexScreenerClient {
    let base = serve(app).await;
    DexScreenerClient::new(format!("{}{}", base, token_path()))
}

#[tokio::test]
async fn test_fetch_first_pair() {
    let app = Router::new().route(
        &token_path(),
        get(|| async {
            Json(json!({
                "schemaVersion": "1.0.0",
                "pairs": [
                    {
                        "priceUsd": "1.23",
                        "priceChange": { "h1": "2.5", "h24": "-1.0" },
                        "volume": { "h24": "1000000" },
                        "liquidity": { "usd": "50000" }
                    },
                    { "priceUsd": "9.99" }
                ]
            }))
        }),
    );
    let client = client_for(app).await;

    let snapshot = client.fetch_snapshot().await.unwrap();
    assert_eq!(snapshot.price_usd, "1.23");
    assert_eq!(snapshot.price_change_h1, "2.5");
    assert_eq!(snapshot.price_change_h24, "-1.0");
    assert_eq!(snapshot.volume_h24, "1000000");
    assert_eq!(snapshot.liquidity_usd, "50000");
}

#[tokio::test]
async fn test_fetch_numeric_fields() {
    let app = Router::new().route(
        &token_path(),
        get(|| async {
            Json(json!({
                "pairs": [{
                    "priceUsd": "0.0042",
                    "priceChange": { "h1": 0, "h24": 12.75 },
                    "volume": { "h24": 1234567.89 }
                }]
            }))
        }),
    );
    let client = client_for(app).await;

    let snapshot = client.fetch_snapshot().await.unwrap();
    assert_eq!(snapshot.price_change_h1, "0");
    assert_eq!(snapshot.price_change_h24, "12.75");
    assert_eq!(snapshot.volume_h24, "1234567.89");
    assert_eq!(snapshot.liquidity_usd, "N/A");
}

#[tokio::test]
async fn test_fetch_empty_and_missing_pairs() {
    for body in [json!({ "pairs": [] }), json!({ "pairs": null }), json!({})] {
        let app = Router::new().route(&token_path(), get(move || async move { Json(body) }));
        let client = client_for(app).await;

        match client.fetch_snapshot().await {
            Err(BotError::EmptyMarketData(_)) => {}
            other => panic!("expected empty market data, got {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_fetch_http_error() {
    let app = Router::new().route(
        &token_path(),
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let client = client_for(app).await;

    match client.fetch_snapshot().await {
        Err(BotError::UpstreamFetch(reason)) => assert!(reason.contains("500")),
        other => panic!("expected upstream failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = DexScreenerClient::new(format!("http://{}{}", addr, token_path()));
    assert!(matches!(client.fetch_snapshot().await, Err(BotError::UpstreamFetch(_))));
}

#[tokio::test]
async fn test_price_command_end_to_end() {
    let app = Router::new().route(
        &token_path(),
        get(|| async {
            Json(json!({
                "pairs": [{
                    "priceUsd": "1.23",
                    "priceChange": { "h1": "2.5", "h24": "-1.0" },
                    "volume": { "h24": "1000000" },
                    "liquidity": { "usd": "50000" }
                }]
            }))
        }),
    );
    let harness = Harness::new(client_for(app).await).await;
    let platform = FakePlatform::default();

    harness.commands.handle(&platform, &private_msg("/price"), Command::Price).await.unwrap();

    let reply = platform.last();
    assert!(reply.contains("🟢 2.5%"));
    assert!(reply.contains("🔴 1.0%"));
    assert!(reply.contains("1 000 000.0"));
    assert!(reply.contains("50 000.0"));
}

#[tokio::test]
async fn test_price_command_empty_pairs() {
    let app = Router::new().route(&token_path(), get(|| async { Json(json!({ "pairs": [] })) }));
    let harness = Harness::new(client_for(app).await).await;
    let platform = FakePlatform::default();

    harness.commands.handle(&platform, &private_msg("/price"), Command::Price).await.unwrap();
    assert_eq!(platform.last(), catalog_text("en", "token_info.unavailable_data"));
}

#[tokio::test]
async fn test_price_command_server_error() {
    let app = Router::new().route(
        &token_path(),
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let harness = Harness::new(client_for(app).await).await;
    let platform = FakePlatform::default();

    harness.commands.handle(&platform, &private_msg("/price"), Command::Price).await.unwrap();
    assert_eq!(platform.last(), catalog_text("en", "token_info.fetch_error"));
}
