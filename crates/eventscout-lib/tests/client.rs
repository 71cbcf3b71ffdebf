use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use eventscout_lib::{DiscoveryClient, DiscoveryConfig, Error, EventSearchParams};

fn client_for(base_url: &str) -> DiscoveryClient {
    let config = DiscoveryConfig::new("test-key").with_base_url(base_url);
    DiscoveryClient::new(config).expect("client builds")
}

fn search_params() -> EventSearchParams {
    EventSearchParams {
        keyword: "jazz".to_string(),
        radius: 10,
        geo_point: "dr5regw".to_string(),
        segment_id: None,
    }
}

#[tokio::test]
async fn search_events_passes_parameters_and_body_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events.json"))
        .and(query_param("apikey", "test-key"))
        .and(query_param("keyword", "jazz"))
        .and(query_param("radius", "10"))
        .and(query_param("unit", "miles"))
        .and(query_param("geoPoint", "dr5regw"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"events": []})))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server.uri())
        .search_events(&search_params())
        .await
        .expect("upstream call succeeds");

    assert_eq!(reply.status, 200);
    assert_eq!(reply.body, json!({"events": []}));
}

#[tokio::test]
async fn search_events_omits_segment_id_when_absent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events.json"))
        .and(query_param_is_missing("segmentId"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server.uri())
        .search_events(&search_params())
        .await
        .expect("upstream call succeeds");
}

#[tokio::test]
async fn search_events_sends_segment_id_when_present() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events.json"))
        .and(query_param("segmentId", "KZFzniwnSyZfZ7v7nJ"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let mut params = search_params();
    params.segment_id = Some("KZFzniwnSyZfZ7v7nJ".to_string());

    client_for(&server.uri())
        .search_events(&params)
        .await
        .expect("upstream call succeeds");
}

#[tokio::test]
async fn event_details_hits_per_event_resource() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events/G5diZfkn0B-bh.json"))
        .and(query_param("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Concert"})))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server.uri())
        .event_details("G5diZfkn0B-bh")
        .await
        .expect("upstream call succeeds");

    assert_eq!(reply.body, json!({"name": "Concert"}));
}

#[tokio::test]
async fn search_venues_sends_keyword() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/venues.json"))
        .and(query_param("keyword", "garden"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"venues": []})))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server.uri())
        .search_venues("garden")
        .await
        .expect("upstream call succeeds");

    assert_eq!(reply.status, 200);
}

#[tokio::test]
async fn non_success_json_body_passes_through_untranslated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events.json"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"fault": "resource not found"})),
        )
        .mount(&server)
        .await;

    let reply = client_for(&server.uri())
        .search_events(&search_params())
        .await
        .expect("JSON error bodies are not transport errors");

    assert_eq!(reply.status, 404);
    assert_eq!(reply.body, json!({"fault": "resource not found"}));
}

#[tokio::test]
async fn non_json_body_surfaces_upstream_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events.json"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_string("<html>Service Unavailable</html>")
                .insert_header("content-type", "text/html"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server.uri())
        .search_events(&search_params())
        .await
        .expect_err("non-JSON body is an error");

    match err {
        Error::NonJsonUpstream { status } => assert_eq!(status, 503),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // Nothing listens on this port; the connection is refused.
    let err = client_for("http://127.0.0.1:1")
        .search_events(&search_params())
        .await
        .expect_err("connection should fail");

    match err {
        Error::Http(_) => {}
        other => panic!("unexpected error: {:?}", other),
    }
}
