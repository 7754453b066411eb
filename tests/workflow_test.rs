//! Workflow Integration Tests
//!
//! UnitSetupWorkflow の統合テスト（HRISはモックサーバー）

use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use unitseed::adapter::config::Config;
use unitseed::driver::cli::Args;
use unitseed::driver::workflow::UnitSetupWorkflow;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// テスト用のConfigファイルを作成
fn create_test_config(dir: &Path, server_uri: &str, item_batch_size: usize) -> String {
    let config_path = dir.join("unitseed.json");
    let config_content = json!({
        "auth_base_url": server_uri,
        "api_base_url": server_uri,
        "email": "admin@example.com",
        "password": "secret",
        "units": [
            {"name": "Position", "item_prefix": "Backend Developer", "item_count": 10},
            {"name": "Area", "item_prefix": "Yogakarta", "item_count": 20},
            {"name": "Sub Area", "item_prefix": "Bantul", "item_count": 20}
        ],
        "item_batch_size": item_batch_size
    });
    fs::write(&config_path, config_content.to_string()).unwrap();
    config_path.to_string_lossy().to_string()
}

/// ログインフロー一式をモック
async fn mount_login(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/auth/csrf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"csrfToken": "abc"})))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/callback/credentials"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "__Secure-next-auth.session-token=tok123; Path=/"),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/session"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"user": {"companyId": "c1"}})),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/hris/company-unit/list"))
        .and(header("authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"docs": [{"id": "u1", "name": "position", "order": 1}]}
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// 作成リクエストのUnitにIDを付けて返す
fn echo_created_units(req: &Request) -> ResponseTemplate {
    let units: Vec<Value> = req.body_json().unwrap();
    let docs: Vec<Value> = units
        .into_iter()
        .map(|mut unit| {
            let id = format!("new-{}", unit["order"]);
            unit["id"] = Value::String(id);
            unit
        })
        .collect();
    ResponseTemplate::new(201).set_body_json(json!({"data": {"docs": docs}}))
}

fn args(config: String, dry_run: bool) -> Args {
    Args { dry_run, config }
}

#[tokio::test]
async fn test_workflow_creates_missing_units_and_items() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("POST"))
        .and(path("/v2/hris/company-unit/list"))
        .and(header("authorization", "Bearer tok123"))
        .respond_with(echo_created_units)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/hris/company-unit-item/list"))
        .and(header("authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"docs": []}})))
        .expect(1)
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path(), &server.uri(), 0);
    let config = Config::load(&config_path).unwrap();

    let workflow = UnitSetupWorkflow::new(config);
    workflow.execute(args(config_path, false)).await.unwrap();

    let requests = server.received_requests().await.unwrap();

    // Position は既存、Area と Sub Area は order 2, 3 で作成
    let unit_orders: Vec<Value> = requests
        .iter()
        .filter(|r| r.method.as_str() == "POST" && r.url.path() == "/v2/hris/company-unit/list")
        .map(|r| r.body_json::<Vec<Value>>().unwrap()[0]["order"].clone())
        .collect();
    assert_eq!(unit_orders, vec![json!(2), json!(3)]);

    let items: Vec<Value> = requests
        .iter()
        .find(|r| r.url.path() == "/v2/hris/company-unit-item/list")
        .unwrap()
        .body_json()
        .unwrap();
    assert_eq!(items.len(), 50);
    assert_eq!(items[0], json!({"value": "Backend Developer 1", "companyUnitId": "u1"}));
    assert_eq!(items[10], json!({"value": "Yogakarta 1", "companyUnitId": "new-2"}));
    assert_eq!(items[49], json!({"value": "Bantul 20", "companyUnitId": "new-3"}));
}

#[tokio::test]
async fn test_workflow_splits_item_requests() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("POST"))
        .and(path("/v2/hris/company-unit/list"))
        .respond_with(echo_created_units)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/hris/company-unit-item/list"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(3)
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path(), &server.uri(), 20);
    let config = Config::load(&config_path).unwrap();

    UnitSetupWorkflow::new(config)
        .execute(args(config_path, false))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_workflow_dry_run_creates_nothing() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("POST"))
        .and(path("/v2/hris/company-unit/list"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/hris/company-unit-item/list"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path(), &server.uri(), 0);
    let config = Config::load(&config_path).unwrap();

    UnitSetupWorkflow::new(config)
        .execute(args(config_path, true))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_workflow_item_failure_keeps_created_units() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("POST"))
        .and(path("/v2/hris/company-unit/list"))
        .respond_with(echo_created_units)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/hris/company-unit-item/list"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad item"))
        .expect(1)
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path(), &server.uri(), 0);
    let config = Config::load(&config_path).unwrap();

    let err = UnitSetupWorkflow::new(config)
        .execute(args(config_path, false))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("bad item"));
}

#[tokio::test]
async fn test_workflow_missing_company_id_stops_before_units() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/csrf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"csrfToken": "abc"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/callback/credentials"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": {}})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/hris/company-unit/list"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path(), &server.uri(), 0);
    let config = Config::load(&config_path).unwrap();

    let err = UnitSetupWorkflow::new(config)
        .execute(args(config_path, false))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("companyId"));
}
