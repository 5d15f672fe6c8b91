use std::net::SocketAddr;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use models::Item;
use server::routes;
use server::startup::build_state;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    // Isolated temp data directory per test run.
    let data_dir = format!("target/test-data/{}", Uuid::new_v4());
    let state = build_state(&data_dir).await?;

    let app: Router = routes::build_router(state, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn e2e_item_crud_flow() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // Empty store lists as an empty array.
    let res = c.get(format!("{}/items", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let items: Vec<Item> = res.json().await?;
    assert!(items.is_empty());

    // Create.
    let res = c
        .post(format!("{}/items", app.base_url))
        .json(&json!({"name": "widget", "tags": ["hardware"]}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created: Item = res.json().await?;
    let id = created.id.expect("created item carries an id");

    // Read it back, deep-equal.
    let res = c
        .get(format!("{}/items/{}", app.base_url, id))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let fetched: Item = res.json().await?;
    assert_eq!(fetched, created);

    // Update, then verify the new name under the same id.
    let res = c
        .put(format!("{}/items/{}", app.base_url, id))
        .json(&json!({"name": "gadget"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let fetched: Item = c
        .get(format!("{}/items/{}", app.base_url, id))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(fetched.id, Some(id));
    assert_eq!(fetched.name, "gadget");

    // Delete, then the id is gone.
    let res = c
        .delete(format!("{}/items/{}", app.base_url, id))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let res = c
        .delete(format!("{}/items/{}", app.base_url, id))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_error_mapping() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // Malformed id -> 400 on every id-taking route.
    for method in ["GET", "PUT", "DELETE"] {
        let url = format!("{}/items/not-a-valid-id", app.base_url);
        let req = match method {
            "GET" => c.get(&url),
            "PUT" => c.put(&url).json(&json!({"name": "x"})),
            _ => c.delete(&url),
        };
        let res = req.send().await?;
        assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST, "{method}");
    }

    // Well-formed but absent id -> 404.
    let res = c
        .get(format!("{}/items/{}", app.base_url, Uuid::new_v4()))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    // Invalid payload -> 400 before the service runs.
    let res = c
        .post(format!("{}/items", app.base_url))
        .json(&json!({"name": "   "}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}
