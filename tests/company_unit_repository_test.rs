//! Company Unit Repository Tests
//!
//! HrisCompanyUnitRepository をモックサーバーで検証

use serde_json::{json, Value};
use unitseed::adapter::http::SessionClient;
use unitseed::adapter::repositories::hris_company_unit_repository::HrisCompanyUnitRepository;
use unitseed::domain::entities::company_unit::{NewCompanyUnit, NewCompanyUnitItem};
use unitseed::domain::entities::item_batch::ItemBatch;
use unitseed::domain::errors::HrisError;
use unitseed::domain::repositories::company_unit_repository::CompanyUnitRepository;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn repository(server: &MockServer) -> HrisCompanyUnitRepository {
    HrisCompanyUnitRepository::new(SessionClient::new().unwrap(), &server.uri(), "tok123")
}

#[tokio::test]
async fn test_list_units() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/hris/company-unit/list"))
        .and(query_param("company_id_eq", "c 1"))
        .and(header("authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"docs": [
                {"id": "u1", "name": "Position", "order": 1},
                {"id": "u2", "name": "Area", "order": 2}
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let units = repository(&server).list_units("c 1").await.unwrap();

    assert_eq!(units.len(), 2);
    assert_eq!(units[0].id, "u1");
    assert_eq!(units[1].name.as_deref(), Some("Area"));
}

#[tokio::test]
async fn test_list_units_without_docs() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/hris/company-unit/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(&server)
        .await;

    let units = repository(&server).list_units("c1").await.unwrap();
    assert!(units.is_empty());
}

#[tokio::test]
async fn test_list_units_numeric_ids_and_loose_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/hris/company-unit/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"docs": [
                {"id": 11, "companyId": 5, "name": "Position", "order": 1},
                {"companyId": "5", "name": "Area", "order": "2", "deletable": "no"}
            ]}
        })))
        .mount(&server)
        .await;

    let units = repository(&server).list_units("5").await.unwrap();

    assert_eq!(units.len(), 2);
    assert_eq!(units[0].id, "11");
    assert_eq!(units[0].company_id.as_deref(), Some("5"));
    assert_eq!(units[1].id, "");
    assert_eq!(units[1].name.as_deref(), Some("Area"));
}

#[tokio::test]
async fn test_list_units_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/hris/company-unit/list"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&server)
        .await;

    let err = repository(&server).list_units("c1").await.unwrap_err();

    let hris = err.downcast_ref::<HrisError>().unwrap();
    assert!(matches!(hris, HrisError::Protocol { status: Some(401), .. }));
    assert!(hris.to_string().starts_with("Get Company Unit failed"));
}

#[tokio::test]
async fn test_create_units_posts_array() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/hris/company-unit/list"))
        .and(header("authorization", "Bearer tok123"))
        .and(body_json(json!([{
            "companyId": "c1",
            "deletable": true,
            "name": "Area",
            "label": "Area",
            "order": 1
        }])))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"docs": [{"id": "u7", "name": "Area", "companyId": "c1"}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = repository(&server)
        .create_units(&[NewCompanyUnit::named("c1", "Area", 1)])
        .await
        .unwrap();

    assert_eq!(created.docs.len(), 1);
    assert_eq!(created.docs[0].id, "u7");
    assert!(created.raw.contains("u7"));
}

#[tokio::test]
async fn test_create_units_top_level_docs() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/hris/company-unit/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "docs": [{"id": "u8", "name": "Sub Area"}]
        })))
        .mount(&server)
        .await;

    let created = repository(&server)
        .create_units(&[NewCompanyUnit::named("c1", "Sub Area", 3)])
        .await
        .unwrap();

    assert_eq!(created.docs[0].id, "u8");
}

#[tokio::test]
async fn test_create_units_non_json_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/hris/company-unit/list"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    let created = repository(&server)
        .create_units(&[NewCompanyUnit::named("c1", "Area", 1)])
        .await
        .unwrap();

    assert!(created.docs.is_empty());
    assert_eq!(created.raw, "OK");
}

#[tokio::test]
async fn test_create_units_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/hris/company-unit/list"))
        .respond_with(ResponseTemplate::new(422).set_body_string("{\"message\":\"invalid\"}"))
        .mount(&server)
        .await;

    let err = repository(&server)
        .create_units(&[NewCompanyUnit::named("c1", "Area", 1)])
        .await
        .unwrap_err();

    let hris = err.downcast_ref::<HrisError>().unwrap();
    assert!(matches!(hris, HrisError::Protocol { status: Some(422), .. }));
    assert_eq!(
        hris.to_string(),
        "Create Company Unit failed: (422) : {\"message\":\"invalid\"}"
    );
}

#[tokio::test]
async fn test_create_items() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/hris/company-unit-item/list"))
        .and(header("authorization", "Bearer tok123"))
        .and(body_json(json!([
            {"value": "Backend Developer 1", "companyUnitId": "u1"},
            {"value": "Backend Developer 2", "companyUnitId": "u1"}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"docs": []}})))
        .expect(1)
        .mount(&server)
        .await;

    let batch = ItemBatch::new(vec![
        NewCompanyUnitItem::new("u1", "Backend Developer 1"),
        NewCompanyUnitItem::new("u1", "Backend Developer 2"),
    ]);
    let created = repository(&server).create_items(&batch).await.unwrap();

    assert_eq!(created.body, json!({"data": {"docs": []}}));
}

#[tokio::test]
async fn test_create_items_non_json_body_kept_as_string() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/hris/company-unit-item/list"))
        .respond_with(ResponseTemplate::new(200).set_body_string("created"))
        .mount(&server)
        .await;

    let batch = ItemBatch::new(vec![NewCompanyUnitItem::new("u2", "Yogakarta 1")]);
    let created = repository(&server).create_items(&batch).await.unwrap();

    assert_eq!(created.body, Value::String("created".to_string()));
}

#[tokio::test]
async fn test_create_items_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/hris/company-unit-item/list"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let batch = ItemBatch::new(vec![NewCompanyUnitItem::new("u2", "Yogakarta 1")]);
    let err = repository(&server).create_items(&batch).await.unwrap_err();

    let hris = err.downcast_ref::<HrisError>().unwrap();
    assert!(matches!(hris, HrisError::Protocol { status: Some(500), .. }));
    assert!(hris.to_string().contains("Create Company Unit Item"));
    assert!(hris.to_string().contains("boom"));
}
