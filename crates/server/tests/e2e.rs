use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use server::startup::{build_app, build_state};

struct TestApp {
    base_url: String,
}

async fn start_server(cfg: configs::AppConfig) -> anyhow::Result<TestApp> {
    let state = build_state(&cfg).await?;
    let app = build_app(state);
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

fn memory_config() -> anyhow::Result<configs::AppConfig> {
    configs::from_toml_str("[database]\nbackend = \"memory\"\n")
}

async fn run_scenario(app: &TestApp) -> anyhow::Result<()> {
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = client
        .post(format!("{}/tiendas", app.base_url))
        .json(&json!({"nombre": "Acme", "ciudad": "bog", "direccion": "Main 1"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let tienda: Value = res.json().await?;

    let res = client
        .post(format!("{}/productos", app.base_url))
        .json(&json!({"nombre": "Milk", "precio": "3.50", "tipo": "PERECEDERO"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let producto: Value = res.json().await?;

    let link = format!(
        "{}/productos/{}/tiendas/{}",
        app.base_url,
        producto["id"].as_str().unwrap_or_default(),
        tienda["id"].as_str().unwrap_or_default()
    );
    let res = client.post(&link).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let linked: Value = res.json().await?;
    assert_eq!(linked["tiendas"][0]["ciudad"], "BOG");

    let res = client
        .get(format!("{}/tiendas/{}", app.base_url, tienda["id"].as_str().unwrap_or_default()))
        .send()
        .await?;
    let with_products: Value = res.json().await?;
    assert_eq!(with_products["productos"][0]["nombre"], "Milk");

    let res = client.delete(&link).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = client
        .get(format!("{}/productos/{}/tiendas", app.base_url, producto["id"].as_str().unwrap_or_default()))
        .send()
        .await?;
    let stores: Value = res.json().await?;
    assert_eq!(stores, json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_memory_backend() -> anyhow::Result<()> {
    let app = start_server(memory_config()?).await?;
    run_scenario(&app).await
}

#[tokio::test]
async fn e2e_postgres_backend() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL missing; skip postgres e2e test");
        return Ok(());
    };
    let mut cfg = configs::AppConfig::default();
    cfg.database.url = url;
    // Other test binaries may share the database; keep their rows.
    cfg.database.drop_schema = false;
    cfg.database.min_connections = 1;
    cfg.normalize_and_validate()?;

    let app = start_server(cfg).await?;
    run_scenario(&app).await
}
