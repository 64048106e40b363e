//! Import execution tests
//!
//! Covers description resolution (inline, fallback fetch, none), the
//! non-fatal fallback failure contract, overwrite idempotence, and fatal
//! persistence failures.

use casebridge_connector::host::{HostRecord, MemoryRecordStore, StaticCredentialProvider};
use casebridge_connector::models::CandidateRecord;
use casebridge_connector::{CaseConnector, ConnectorConfig, Error, QueryStrategy};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn connector_with_store(instance_url: &str) -> (CaseConnector, Arc<MemoryRecordStore>) {
    let store = Arc::new(MemoryRecordStore::new());
    let config = ConnectorConfig {
        domain: "acme".to_string(),
        instance_url: Some(instance_url.to_string()),
        strategy: QueryStrategy::SavedView,
    };
    let connector = CaseConnector::new(
        config,
        Arc::new(StaticCredentialProvider::new("tok")),
        store.clone(),
    )
    .unwrap();
    (connector, store)
}

fn candidate(description: Option<&str>, detail_url: Option<&str>) -> CandidateRecord {
    CandidateRecord {
        unique_id: "500xx".to_string(),
        name: "A case".to_string(),
        url: "https://acme.my.salesforce.com/lightning/r/Case/500xx/view".to_string(),
        case_number: "00001026".to_string(),
        description: description.map(str::to_string),
        status: Some("New".to_string()),
        priority: None,
        detail_url: detail_url.map(str::to_string),
    }
}

fn target() -> HostRecord {
    HostRecord {
        reference_num: "PRJ-42".to_string(),
        name: "Imported case".to_string(),
        description: None,
    }
}

#[tokio::test]
async fn test_inline_description_converts_line_endings() {
    let server = MockServer::start().await;
    let (connector, store) = connector_with_store(&server.uri());

    let candidate = candidate(Some("Hello\r\nWorld"), None);
    let mut target = target();

    connector.import_record(&candidate, &mut target).await.unwrap();

    let content = target.description.as_deref().unwrap();
    assert!(content.starts_with("Hello<br>World"));
    assert!(content.contains(r#"<p><a href="https://acme.my.salesforce.com/lightning/r/Case/500xx/view">View case 00001026 in Salesforce</a></p>"#));

    // Inline description means no remote call at all.
    assert!(server.received_requests().await.unwrap().is_empty());
    assert_eq!(store.saved().await.len(), 1);
}

#[tokio::test]
async fn test_fallback_fetch_supplies_description() {
    let server = MockServer::start().await;
    let (connector, _store) = connector_with_store(&server.uri());

    Mock::given(method("GET"))
        .and(path("/services/data/v59.0/sobjects/Case/500xx"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Id": "500xx",
            "Description": "From detail\nfetch"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let candidate = candidate(None, Some("/services/data/v59.0/sobjects/Case/500xx"));
    let mut target = target();

    connector.import_record(&candidate, &mut target).await.unwrap();

    let content = target.description.as_deref().unwrap();
    assert!(content.starts_with("From detail<br>fetch"));
    assert!(content.contains("View case 00001026 in Salesforce"));
}

#[tokio::test]
async fn test_failed_fallback_fetch_degrades_to_link_only() {
    let server = MockServer::start().await;
    let (connector, store) = connector_with_store(&server.uri());

    Mock::given(method("GET"))
        .and(path("/services/data/v59.0/sobjects/Case/500xx"))
        .respond_with(ResponseTemplate::new(500).set_body_string("unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let candidate = candidate(None, Some("/services/data/v59.0/sobjects/Case/500xx"));
    let mut target = target();

    // The fetch failure is non-fatal: the import still succeeds.
    connector.import_record(&candidate, &mut target).await.unwrap();

    let content = target.description.as_deref().unwrap();
    assert!(content.starts_with("<p><a href="));
    assert!(content.contains("View case 00001026 in Salesforce"));
    assert_eq!(store.saved().await.len(), 1);
}

#[tokio::test]
async fn test_no_description_and_no_detail_url_is_link_only() {
    let server = MockServer::start().await;
    let (connector, _store) = connector_with_store(&server.uri());

    let candidate = candidate(None, None);
    let mut target = target();

    connector.import_record(&candidate, &mut target).await.unwrap();

    assert!(target.description.as_deref().unwrap().starts_with("<p><a href="));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_import_is_idempotent_overwrite() {
    let server = MockServer::start().await;
    let (connector, store) = connector_with_store(&server.uri());

    let candidate = candidate(Some("Body"), None);
    let mut target = target();

    connector.import_record(&candidate, &mut target).await.unwrap();
    let first = target.description.clone();

    connector.import_record(&candidate, &mut target).await.unwrap();

    assert_eq!(target.description, first);

    let saved = store.saved().await;
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].description, saved[1].description);
}

#[tokio::test]
async fn test_persistence_failure_is_fatal() {
    let server = MockServer::start().await;
    let (connector, store) = connector_with_store(&server.uri());
    store.fail_next();

    let candidate = candidate(Some("Body"), None);
    let mut target = target();

    let result = connector.import_record(&candidate, &mut target).await;

    assert!(matches!(result, Err(Error::Persistence(_))));
    assert!(store.saved().await.is_empty());
}
