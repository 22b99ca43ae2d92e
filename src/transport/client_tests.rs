//! Tests for `ReqwestTransport`.
//!
//! Round-trip tests run against a local mockito server, so no external
//! network is needed.

use mockito::Matcher;

use super::{HttpRequest, HttpTransport, ReqwestTransport, TransportError};
use crate::body::{EncodableBody, UrlEncodedBody};

fn url_for(server: &mockito::ServerGuard, path_and_query: &str) -> url::Url {
    url::Url::parse(&format!("{}{path_and_query}", server.url())).unwrap()
}

mod reqwest_transport {
    use super::*;

    #[test]
    fn default_creates_same_as_new() {
        let transport1 = ReqwestTransport::new();
        let transport2 = ReqwestTransport::default();

        assert!(format!("{transport1:?}").contains("ReqwestTransport"));
        assert!(format!("{transport2:?}").contains("ReqwestTransport"));
    }

    #[test]
    fn from_client_accepts_custom_client() {
        let custom = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap();
        let transport = ReqwestTransport::from_client(custom);

        let _ = format!("{transport:?}");
    }

    #[test]
    fn transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestTransport>();
    }

    #[tokio::test]
    async fn request_maps_status_headers_and_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/items")
            .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
            .with_status(404)
            .with_header("x-trace", "t-1")
            .with_body("missing")
            .create_async()
            .await;
        let url = url_for(&server, "/items?page=2");
        let transport = ReqwestTransport::new();

        let response = transport.request(HttpRequest::get(url.clone())).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, http::StatusCode::NOT_FOUND);
        assert_eq!(response.headers.get("x-trace").unwrap(), "t-1");
        assert_eq!(response.body_text(), Some("missing"));
        assert_eq!(response.url, url);
    }

    #[tokio::test]
    async fn request_sends_method_path_query_and_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/items")
            .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
            .match_header("authorization", "Bearer abc")
            .with_status(204)
            .create_async()
            .await;
        let transport = ReqwestTransport::new();
        let request = HttpRequest::new(http::Method::DELETE, url_for(&server, "/items?page=2"))
            .with_header(
                http::header::AUTHORIZATION,
                http::HeaderValue::from_static("Bearer abc"),
            );

        let response = transport.request(request).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, http::StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn request_sends_encoded_body_and_content_type() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/token")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body("a=1&b=x%20y")
            .with_status(200)
            .with_body(r#"{"access_token":"t"}"#)
            .create_async()
            .await;
        let transport = ReqwestTransport::new();
        let mut request = HttpRequest::post(url_for(&server, "/token"));
        UrlEncodedBody::new([("a", "1"), ("b", "x y")])
            .encode(&mut request)
            .unwrap();

        let response = transport.request(request).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.body_text(), Some(r#"{"access_token":"t"}"#));
    }

    #[tokio::test]
    async fn refused_connection_is_a_connection_error() {
        let transport = ReqwestTransport::new();
        let url = url::Url::parse("http://127.0.0.1:1/unreachable").unwrap();

        let result = transport.request(HttpRequest::get(url)).await;

        assert!(matches!(result, Err(TransportError::Connection(_))));
    }
}
