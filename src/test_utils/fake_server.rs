//! Throwaway HTTP servers standing in for Google endpoints.

use axum::Router;
use url::Url;

/// Throwaway RSA key pair for signing and checking service account assertions.
pub const TEST_SERVICE_ACCOUNT_KEY: &str = include_str!("fixtures/service_account_key.pem");
pub const TEST_SERVICE_ACCOUNT_PUBLIC_KEY: &str =
    include_str!("fixtures/service_account_key.pub.pem");

/// Serves `router` on an ephemeral localhost port and returns its base URL.
pub async fn spawn_test_server(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{addr}")).unwrap()
}
