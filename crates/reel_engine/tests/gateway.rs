use pretty_assertions::assert_eq;
use reel_core::{FailureKind, LoadError};
use reel_engine::{GatewayConfig, GatewayError, MovieGateway, OmdbGateway};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway(server: &MockServer) -> OmdbGateway {
    engine_logging::initialize_for_tests();
    let config = GatewayConfig::new(&server.uri(), "test-key").expect("config");
    OmdbGateway::new(config).expect("gateway")
}

fn summaries(prefix: &str, count: usize) -> serde_json::Value {
    let items: Vec<_> = (0..count)
        .map(|i| {
            let poster = if i == 0 {
                "N/A".to_string()
            } else {
                format!("https://img.example.com/{prefix}{i}.jpg")
            };
            json!({
                "Title": format!("{prefix} {i}"),
                "Year": "2005",
                "imdbID": format!("{prefix}{i}"),
                "Type": "movie",
                "Poster": poster,
            })
        })
        .collect();
    serde_json::Value::Array(items)
}

#[tokio::test]
async fn search_returns_page_and_total() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("apikey", "test-key"))
        .and(query_param("s", "Batman"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Search": summaries("bat", 10),
            "totalResults": "23",
            "Response": "True",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = gateway(&server).search("Batman", 2).await.expect("page");
    assert_eq!(page.total_count, 23);
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.items[0].poster_url, None);
    assert_eq!(
        page.items[1].poster_url.as_deref(),
        Some("https://img.example.com/bat1.jpg")
    );
}

#[tokio::test]
async fn search_maps_no_results_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Response": "False",
            "Error": "Movie not found!",
        })))
        .mount(&server)
        .await;

    let err = gateway(&server).search("zzzz", 1).await.unwrap_err();
    assert_eq!(err, GatewayError::NotFound("Movie not found!".to_string()));
    assert_eq!(err.to_string(), "Movie not found!");
}

#[tokio::test]
async fn search_maps_quota_message_to_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Response": "False",
            "Error": "Request limit reached!",
        })))
        .mount(&server)
        .await;

    let err = gateway(&server).search("Batman", 1).await.unwrap_err();
    assert_eq!(err, GatewayError::RateLimited);

    let load_error = LoadError::from(err);
    assert_eq!(load_error.kind, FailureKind::RateLimited);
    assert!(load_error.message.contains("Request limit"));
}

#[tokio::test]
async fn unauthorized_status_maps_to_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "Response": "False",
            "Error": "Invalid API key!",
        })))
        .mount(&server)
        .await;

    let err = gateway(&server).search("Batman", 1).await.unwrap_err();
    assert_eq!(err, GatewayError::Unauthorized);
    assert!(err.to_string().contains("unauthorized"));
}

#[tokio::test]
async fn server_error_maps_to_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = gateway(&server).search("Batman", 1).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Network);
    assert!(err.to_string().starts_with("Network error: "));
}

#[tokio::test]
async fn service_error_text_on_failed_status_is_shown_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "Response": "False",
            "Error": "Something went wrong.",
        })))
        .mount(&server)
        .await;

    let err = gateway(&server).search("Batman", 1).await.unwrap_err();
    assert_eq!(err, GatewayError::Service("Something went wrong.".to_string()));
    assert_eq!(err.kind(), FailureKind::Network);

    let load = LoadError::from(err);
    assert_eq!(load.kind, FailureKind::Network);
    assert_eq!(load.message, "Something went wrong.");
}

#[tokio::test]
async fn unreachable_service_maps_to_network_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    engine_logging::initialize_for_tests();
    let gateway = OmdbGateway::new(GatewayConfig::new(&uri, "test-key").unwrap()).unwrap();
    let err = gateway.search("Batman", 1).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Network);
}

#[tokio::test]
async fn suggest_caps_results_at_five() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("s", "Bat"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Search": summaries("bat", 10),
            "totalResults": "300",
            "Response": "True",
        })))
        .mount(&server)
        .await;

    let items = gateway(&server).suggest("Bat").await;
    assert_eq!(items.len(), 5);
}

#[tokio::test]
async fn suggest_skips_network_for_single_character() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    assert!(gateway(&server).suggest("B").await.is_empty());
}

#[tokio::test]
async fn suggest_swallows_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Response": "False",
            "Error": "Request limit reached!",
        })))
        .mount(&server)
        .await;

    assert!(gateway(&server).suggest("Batman").await.is_empty());
}

#[tokio::test]
async fn detail_requests_full_plot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("i", "tt0372784"))
        .and(query_param("plot", "full"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Title": "Batman Begins",
            "Year": "2005",
            "Rated": "PG-13",
            "Director": "Christopher Nolan",
            "Plot": "After witnessing his parents' death...",
            "Poster": "https://img.example.com/bb.jpg",
            "Ratings": [
                { "Source": "Internet Movie Database", "Value": "8.2/10" },
                { "Source": "Metacritic", "Value": "70/100" }
            ],
            "imdbID": "tt0372784",
            "imdbRating": "8.2",
            "Type": "movie",
            "BoxOffice": "$206,863,479",
            "Response": "True",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let detail = gateway(&server).get_by_id("tt0372784").await.expect("detail");
    assert_eq!(detail.title, "Batman Begins");
    assert_eq!(detail.director, "Christopher Nolan");
    assert_eq!(detail.ratings.len(), 2);
    assert_eq!(detail.box_office.as_deref(), Some("$206,863,479"));
    assert!(detail.response);
}

#[tokio::test]
async fn detail_for_unknown_id_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Response": "False",
            "Error": "Incorrect IMDb ID.",
        })))
        .mount(&server)
        .await;

    let err = gateway(&server).get_by_id("tt0000000").await.unwrap_err();
    assert_eq!(err, GatewayError::NotFound("Movie not found".to_string()));
}

#[tokio::test]
async fn proxy_mode_omits_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("s", "Batman"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Search": summaries("bat", 1),
            "totalResults": "1",
            "Response": "True",
        })))
        .mount(&server)
        .await;

    let config = GatewayConfig {
        api_key: None,
        proxy_mode: true,
        ..GatewayConfig::new(&server.uri(), "unused").unwrap()
    };
    let gateway = OmdbGateway::new(config).unwrap();
    gateway.search("Batman", 1).await.expect("page");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].url.query().unwrap_or("").contains("apikey"));
}
