//! Integration tests for `HyperClient` using wiremock.

use chela::{HttpClient, HyperClient, Method, Request, from_json};
use serde::{Deserialize, Serialize};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct User {
    id: u64,
    name: String,
}

#[tokio::test]
async fn get_request() {
    let mock_server = MockServer::start().await;

    let user = User {
        id: 1,
        name: "Alice".to_string(),
    };

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&user))
        .mount(&mock_server)
        .await;

    let client = HyperClient::new();
    let url = url::Url::parse(&format!("{}/users/1", mock_server.uri())).expect("url");
    let request = Request::builder(Method::Get, url)
        .header("Accept", "application/json")
        .build();

    let response = client.execute(request).await.expect("response");

    assert!(response.is_success());
    assert_eq!(response.status(), 200);

    let body: User = from_json(response.body()).expect("json");
    assert_eq!(body, user);
}

#[tokio::test]
async fn post_request_with_body_and_headers() {
    let mock_server = MockServer::start().await;

    let input = User {
        id: 0,
        name: "Bob".to_string(),
    };
    let output = User {
        id: 42,
        name: "Bob".to_string(),
    };

    Mock::given(method("POST"))
        .and(path("/users"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(&input))
        .respond_with(ResponseTemplate::new(201).set_body_json(&output))
        .mount(&mock_server)
        .await;

    let client = HyperClient::new();
    let url = url::Url::parse(&format!("{}/users", mock_server.uri())).expect("url");
    let request = Request::builder(Method::Post, url)
        .header("Content-Type", "application/json")
        .body(serde_json::to_vec(&input).expect("serialize").into())
        .build();

    let response = client.execute(request).await.expect("response");

    assert!(response.is_success());
    assert_eq!(response.status(), 201);

    let body: User = from_json(response.body()).expect("json");
    assert_eq!(body, output);
}

#[tokio::test]
async fn error_status_is_returned_not_raised() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/not-found"))
        .respond_with(ResponseTemplate::new(404).set_body_string("nothing here"))
        .mount(&mock_server)
        .await;

    let client = HyperClient::new();
    let url = url::Url::parse(&format!("{}/not-found", mock_server.uri())).expect("url");
    let request = Request::builder(Method::Get, url).build();

    // The transport reports the status as data; status policy lives in the
    // decoders, not here.
    let response = client.execute(request).await.expect("response");

    assert!(response.is_client_error());
    assert_eq!(response.status(), 404);
    assert_eq!(response.body().as_ref(), b"nothing here");
}

#[tokio::test]
async fn response_headers_are_captured() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/headers"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Request-Id", "abc-123")
                .set_body_string("ok"),
        )
        .mount(&mock_server)
        .await;

    let client = HyperClient::new();
    let url = url::Url::parse(&format!("{}/headers", mock_server.uri())).expect("url");
    let request = Request::builder(Method::Get, url).build();

    let response = client.execute(request).await.expect("response");

    // hyper lowercases header names; lookup is case-insensitive either way.
    assert_eq!(response.header("X-Request-Id"), Some("abc-123"));
    assert_eq!(response.header("x-request-id"), Some("abc-123"));
}

#[tokio::test]
async fn connection_refused_maps_to_connection_error() {
    let client = HyperClient::new();
    // Port 9 (discard) is almost certainly closed.
    let url = url::Url::parse("http://127.0.0.1:9/unreachable").expect("url");
    let request = Request::builder(Method::Get, url).build();

    let error = client.execute(request).await.expect_err("should fail");
    assert!(error.is_connection() || error.is_timeout());
}

#[tokio::test]
async fn timeout_applies_to_the_whole_exchange() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let client = HyperClient::builder()
        .timeout(std::time::Duration::from_millis(100))
        .build();
    let url = url::Url::parse(&format!("{}/slow", mock_server.uri())).expect("url");
    let request = Request::builder(Method::Get, url).build();

    let error = client.execute(request).await.expect_err("should time out");
    assert!(error.is_timeout());
}

#[tokio::test]
async fn timeout_covers_a_stalled_body() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    // A server that sends the headers, a fragment of the body, then stalls:
    // the deadline must cut off the body read, not just the header exchange.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        let mut buf = [0u8; 1024];
        let _ = stream.read(&mut buf).await;
        stream
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 1000\r\n\r\npartial")
            .await
            .expect("write");
        tokio::time::sleep(std::time::Duration::from_secs(60)).await;
    });

    let client = HyperClient::builder()
        .timeout(std::time::Duration::from_millis(100))
        .build();
    let url = url::Url::parse(&format!("http://{addr}/stalled")).expect("url");
    let request = Request::builder(Method::Get, url).build();

    let error = client.execute(request).await.expect_err("should time out");
    assert!(error.is_timeout());
}

#[tokio::test]
async fn connect_timeout_bounds_dialing() {
    // 192.0.2.0/24 is reserved for documentation and does not route, so the
    // dial hangs until the connect timeout cuts it off.
    let client = HyperClient::builder()
        .connect_timeout(std::time::Duration::from_millis(100))
        .timeout(std::time::Duration::from_secs(30))
        .build();
    let url = url::Url::parse("http://192.0.2.1/unreachable").expect("url");
    let request = Request::builder(Method::Get, url).build();

    let start = std::time::Instant::now();
    let error = client.execute(request).await.expect_err("should fail");
    assert!(error.is_connection());
    assert!(start.elapsed() < std::time::Duration::from_secs(10));
}

#[tokio::test]
async fn logging_transport_round_trips() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/logged"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock_server)
        .await;

    let client = HyperClient::builder().with_debug_logging().build();
    let url = url::Url::parse(&format!("{}/logged", mock_server.uri())).expect("url");
    let request = Request::builder(Method::Get, url).build();

    let response = client.execute(request).await.expect("response");

    assert_eq!(response.status(), 200);
    assert_eq!(response.body().as_ref(), b"ok");
}
