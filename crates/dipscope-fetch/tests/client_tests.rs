//! Integration tests for the DIP client against a mock server.

use dipscope_fetch::{DipClient, EndpointReport, FetchConfig, FetchError, PageSink};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct MemorySink {
    pages: Vec<(String, usize, Value)>,
}

impl PageSink for MemorySink {
    fn save_page(&mut self, endpoint: &str, page: usize, body: &Value) -> Result<(), FetchError> {
        self.pages.push((endpoint.to_string(), page, body.clone()));
        Ok(())
    }
}

fn config(base_url: String, endpoints: &[(&str, &str)]) -> FetchConfig {
    FetchConfig {
        base_url,
        endpoints: endpoints
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
        page_delay_ms: 0,
        rate_limit_wait_secs: 0,
        retry_backoff_ms: 0,
        max_retries: 2,
        ..FetchConfig::default()
    }
}

fn empty_report(endpoint: &str) -> EndpointReport {
    EndpointReport {
        endpoint: endpoint.to_string(),
        pages: 0,
        documents: 0,
        error: None,
    }
}

#[tokio::test]
async fn test_follows_cursor_until_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drucksache"))
        .and(query_param("cursor", "*"))
        .and(header("Authorization", "ApiKey secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "numFound": 3,
            "cursor": "c1",
            "documents": [{"id": "1"}, {"id": "2"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/drucksache"))
        .and(query_param("cursor", "c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "numFound": 3,
            "cursor": "c1",
            "documents": [{"id": "3"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = DipClient::new(config(server.uri(), &[("drucksache", "/drucksache")]), "secret").unwrap();
    let mut sink = MemorySink::default();
    let mut report = empty_report("drucksache");

    client
        .fetch_endpoint("drucksache", "/drucksache", &mut sink, &mut report)
        .await
        .unwrap();

    assert_eq!(report.pages, 2);
    assert_eq!(report.documents, 3);
    assert_eq!(sink.pages[0].1, 1);
    assert_eq!(sink.pages[1].1, 2);
    assert_eq!(sink.pages[1].2["documents"][0]["id"], "3");
}

#[tokio::test]
async fn test_stops_on_empty_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vorgang"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "numFound": 0,
            "cursor": "next",
            "documents": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = DipClient::new(config(server.uri(), &[("vorgang", "/vorgang")]), "k").unwrap();
    let mut sink = MemorySink::default();
    let report = client.fetch_all(&mut sink).await;

    assert!(sink.pages.is_empty());
    assert_eq!(report.total_pages(), 0);
    assert!(!report.has_errors());
}

#[tokio::test]
async fn test_retries_after_rate_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vorgang"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/vorgang"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [{"id": "v1"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = DipClient::new(config(server.uri(), &[("vorgang", "/vorgang")]), "k").unwrap();
    let mut sink = MemorySink::default();
    let report = client.fetch_all(&mut sink).await;

    assert_eq!(report.total_documents(), 1);
    assert!(!report.has_errors());
}

#[tokio::test]
async fn test_gives_up_after_retry_budget() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drucksache"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let client = DipClient::new(config(server.uri(), &[("drucksache", "/drucksache")]), "k").unwrap();
    let mut sink = MemorySink::default();
    let mut report = empty_report("drucksache");

    let result = client
        .fetch_endpoint("drucksache", "/drucksache", &mut sink, &mut report)
        .await;

    assert!(matches!(
        result,
        Err(FetchError::RetriesExhausted { attempts: 3, status: 500 })
    ));
}

#[tokio::test]
async fn test_failing_endpoint_does_not_stop_others() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drucksache"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/vorgang"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [{"id": "v1"}, {"id": "v2"}]
        })))
        .mount(&server)
        .await;

    let client = DipClient::new(
        config(
            server.uri(),
            &[("drucksache", "/drucksache"), ("vorgang", "/vorgang")],
        ),
        "k",
    )
    .unwrap();
    let mut sink = MemorySink::default();
    let report = client.fetch_all(&mut sink).await;

    assert_eq!(report.endpoints.len(), 2);
    assert!(report.endpoints[0].error.as_deref().unwrap().contains("401"));
    assert_eq!(report.endpoints[1].documents, 2);
}

#[tokio::test]
async fn test_date_filter_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drucksache"))
        .and(query_param("f.datum.start", "2022-01-01"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"documents": []})))
        .expect(1)
        .mount(&server)
        .await;

    let mut cfg = config(server.uri(), &[("drucksache", "/drucksache")]);
    cfg.date_range.from = Some("2022-01-01".to_string());

    let client = DipClient::new(cfg, "k").unwrap();
    let report = client.fetch_all(&mut MemorySink::default()).await;
    assert!(!report.has_errors());
}
