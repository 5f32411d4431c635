//! Integration tests for `LeadCollector::collect`.
//!
//! Uses `wiremock` to stand up a local provider for each test so no real
//! network traffic is made. Covers the terminal states (zero results, fatal
//! provider status), dedup across keywords, pagination, non-fatal detail
//! failures, filtering, and contact-page email harvesting.

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use leadgen_core::{FilterSpec, JobRequest, PresenceFilter};
use leadgen_scraper::{CollectError, EmailHarvester, LeadCollector, Pacing, PlacesClient};

const NEARBY: &str = "/maps/api/place/nearbysearch/json";
const DETAILS: &str = "/maps/api/place/details/json";
const GEOCODE: &str = "/maps/api/geocode/json";

/// Builds a collector pointed at the mock server: 5-second timeout,
/// descriptive UA, zero pacing, generous page ceiling.
fn test_collector(server: &MockServer) -> LeadCollector {
    test_collector_with_page_ceiling(server, 10)
}

fn test_collector_with_page_ceiling(server: &MockServer, max_pages: usize) -> LeadCollector {
    let client = PlacesClient::with_base_url("test-key", 5, "leadgen-test/0.1", &server.uri())
        .expect("failed to build PlacesClient");
    let harvester =
        EmailHarvester::new(5, "leadgen-test/0.1").expect("failed to build EmailHarvester");
    LeadCollector::new(client, harvester, Pacing::zero(), max_pages)
}

fn coord_job(keywords: &[&str], filters: FilterSpec) -> JobRequest {
    JobRequest::builder()
        .location("52.52,13.405")
        .radius_meters(1500)
        .keywords(keywords.iter().copied())
        .filters(filters)
        .build()
        .expect("failed to build JobRequest")
}

/// One nearby-search page fixture.
fn search_page(place_ids: &[&str], next_page_token: Option<&str>) -> Value {
    json!({
        "status": "OK",
        "results": place_ids.iter().map(|id| json!({"place_id": id})).collect::<Vec<_>>(),
        "next_page_token": next_page_token,
    })
}

/// One details fixture with status `OK`.
fn detail(name: &str, website: Option<&str>, rating: Option<f64>) -> Value {
    json!({
        "status": "OK",
        "result": {
            "name": name,
            "formatted_address": "1 Main St",
            "formatted_phone_number": "555-0100",
            "website": website,
            "rating": rating,
        }
    })
}

async fn mount_details(server: &MockServer, place_id: &str, body: &Value) {
    Mock::given(method("GET"))
        .and(path(DETAILS))
        .and(query_param("place_id", place_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// Scenario A – ZERO_RESULTS is an empty collection, not an error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn zero_results_yields_empty_collection_without_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(NEARBY))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "status": "ZERO_RESULTS",
            "results": [],
        })))
        .mount(&server)
        .await;

    let collector = test_collector(&server);
    let result = collector
        .collect(&coord_job(&["bakery"], FilterSpec::default()))
        .await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    assert!(
        result.unwrap().is_empty(),
        "expected empty collection for ZERO_RESULTS"
    );
}

// ---------------------------------------------------------------------------
// Scenario B – website filter keeps only records with a website
// ---------------------------------------------------------------------------

#[tokio::test]
async fn website_filter_keeps_only_records_with_websites() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(NEARBY))
        .respond_with(ResponseTemplate::new(200).set_body_json(&search_page(&["p1", "p2"], None)))
        .mount(&server)
        .await;

    let site = format!("{}/site", server.uri());
    mount_details(&server, "p1", &detail("With Site", Some(&site), Some(4.2))).await;
    mount_details(&server, "p2", &detail("No Site", None, Some(4.8))).await;

    // The harvester will probe the website and its /contact page; neither
    // carries an email.
    Mock::given(method("GET"))
        .and(path("/site"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>hi</body></html>"))
        .mount(&server)
        .await;

    let filters = FilterSpec {
        website: PresenceFilter::With,
        ..FilterSpec::default()
    };
    let collector = test_collector(&server);
    let leads = collector
        .collect(&coord_job(&["bakery"], filters))
        .await
        .unwrap();

    assert_eq!(leads.len(), 1, "expected exactly one lead, got: {leads:?}");
    assert_eq!(leads[0].name, "With Site");
    assert_eq!(leads[0].website, site);
    assert_eq!(leads[0].email, "");
    assert_eq!(leads[0].rating, Some(4.2));
}

// ---------------------------------------------------------------------------
// Scenario C – fatal provider status aborts the whole job
// ---------------------------------------------------------------------------

#[tokio::test]
async fn request_denied_aborts_with_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(NEARBY))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "status": "REQUEST_DENIED",
            "results": [],
            "error_message": "The provided API key is invalid.",
        })))
        .mount(&server)
        .await;

    let collector = test_collector(&server);
    let result = collector
        .collect(&coord_job(&["bakery", "cafe"], FilterSpec::default()))
        .await;

    match result {
        Err(CollectError::Provider {
            keyword,
            status,
            message,
        }) => {
            assert_eq!(keyword, "bakery", "must abort on the first keyword");
            assert_eq!(status, "REQUEST_DENIED");
            assert_eq!(message, "The provided API key is invalid.");
        }
        other => panic!("expected CollectError::Provider, got: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Dedup – a place recurring under two keywords is fetched once
// ---------------------------------------------------------------------------

#[tokio::test]
async fn duplicate_place_across_keywords_is_fetched_once() {
    let server = MockServer::start().await;

    // Both keywords return the same place.
    Mock::given(method("GET"))
        .and(path(NEARBY))
        .respond_with(ResponseTemplate::new(200).set_body_json(&search_page(&["shared"], None)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(DETAILS))
        .and(query_param("place_id", "shared"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&detail("Shared Place", None, Some(4.0))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let collector = test_collector(&server);
    let leads = collector
        .collect(&coord_job(&["bakery", "cafe"], FilterSpec::default()))
        .await
        .unwrap();

    assert_eq!(leads.len(), 1, "dedup must keep a single record");
    assert_eq!(leads[0].name, "Shared Place");
}

// ---------------------------------------------------------------------------
// Pagination – token chain is followed, absence of a token terminates
// ---------------------------------------------------------------------------

#[tokio::test]
async fn pagination_follows_token_and_terminates_without_one() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(NEARBY))
        .and(query_param_is_missing("pagetoken"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&search_page(&["p1"], Some("tok2"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(NEARBY))
        .and(query_param("pagetoken", "tok2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&search_page(&["p2"], None)))
        .expect(1)
        .mount(&server)
        .await;

    mount_details(&server, "p1", &detail("First", None, None)).await;
    mount_details(&server, "p2", &detail("Second", None, None)).await;

    let collector = test_collector(&server);
    let leads = collector
        .collect(&coord_job(&["bakery"], FilterSpec::default()))
        .await
        .unwrap();

    assert_eq!(leads.len(), 2);
    assert_eq!(leads[0].name, "First");
    assert_eq!(leads[1].name, "Second");
}

#[tokio::test]
async fn cycling_token_hits_the_page_ceiling() {
    let server = MockServer::start().await;

    // Every page, first or token-fetched, points at another page.
    Mock::given(method("GET"))
        .and(path(NEARBY))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&search_page(&[], Some("again"))),
        )
        .mount(&server)
        .await;

    let collector = test_collector_with_page_ceiling(&server, 2);
    let result = collector
        .collect(&coord_job(&["bakery"], FilterSpec::default()))
        .await;

    match result {
        Err(CollectError::PaginationLimit { keyword, max_pages }) => {
            assert_eq!(keyword, "bakery");
            assert_eq!(max_pages, 2);
        }
        other => panic!("expected CollectError::PaginationLimit, got: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Detail failures are per-candidate, never fatal
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failed_detail_fetch_skips_candidate_and_continues() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(NEARBY))
        .respond_with(ResponseTemplate::new(200).set_body_json(&search_page(&["bad", "good"], None)))
        .mount(&server)
        .await;

    mount_details(
        &server,
        "bad",
        &json!({"status": "NOT_FOUND"}),
    )
    .await;
    mount_details(&server, "good", &detail("Survivor", None, Some(3.5))).await;

    let collector = test_collector(&server);
    let leads = collector
        .collect(&coord_job(&["bakery"], FilterSpec::default()))
        .await
        .unwrap();

    assert_eq!(leads.len(), 1, "the bad candidate must be dropped silently");
    assert_eq!(leads[0].name, "Survivor");
}

// ---------------------------------------------------------------------------
// Email harvesting – /contact fallback with a mailto anchor
// ---------------------------------------------------------------------------

#[tokio::test]
async fn harvest_falls_back_to_contact_page_mailto() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(NEARBY))
        .respond_with(ResponseTemplate::new(200).set_body_json(&search_page(&["p1"], None)))
        .mount(&server)
        .await;

    let site = format!("{}/shop", server.uri());
    mount_details(&server, "p1", &detail("Shop", Some(&site), Some(4.9))).await;

    // Root page: no email-like tokens.
    Mock::given(method("GET"))
        .and(path("/shop"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><p>welcome to the shop</p></body></html>"),
        )
        .expect(1)
        .mount(&server)
        .await;

    // Contact page: the email lives in an anchor href only.
    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body><a href="mailto:sales@example.com">write to us</a></body></html>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let collector = test_collector(&server);
    let leads = collector
        .collect(&coord_job(&["bakery"], FilterSpec::default()))
        .await
        .unwrap();

    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].email, "sales@example.com");
}

// ---------------------------------------------------------------------------
// Geocoding – free-text locations resolve once; failures are fatal
// ---------------------------------------------------------------------------

#[tokio::test]
async fn free_text_location_is_geocoded_before_searching() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GEOCODE))
        .and(query_param("address", "Berlin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "status": "OK",
            "results": [{"geometry": {"location": {"lat": 52.52, "lng": 13.405}}}],
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(NEARBY))
        .and(query_param("location", "52.52,13.405"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "status": "ZERO_RESULTS",
            "results": [],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let job = JobRequest::builder()
        .location("Berlin")
        .radius_meters(1500)
        .keyword("bakery")
        .build()
        .unwrap();

    let collector = test_collector(&server);
    let result = collector.collect(&job).await;
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
}

#[tokio::test]
async fn geocode_failure_aborts_the_job() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GEOCODE))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "status": "ZERO_RESULTS",
            "results": [],
        })))
        .mount(&server)
        .await;

    let job = JobRequest::builder()
        .location("Nowhereville")
        .radius_meters(1500)
        .keyword("bakery")
        .build()
        .unwrap();

    let collector = test_collector(&server);
    let result = collector.collect(&job).await;

    match result {
        Err(CollectError::Geocode { address, status }) => {
            assert_eq!(address, "Nowhereville");
            assert_eq!(status, "ZERO_RESULTS");
        }
        other => panic!("expected CollectError::Geocode, got: {other:?}"),
    }
}
