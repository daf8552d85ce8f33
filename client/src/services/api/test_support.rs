//! Local stub server for client and service tests.

use axum::Router;

use super::client::ApiClient;
use crate::config::AppConfig;

/// Serve `router` on an ephemeral localhost port and return its base URL.
pub(crate) async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

pub(crate) fn client_for(base_url: &str) -> ApiClient {
    ApiClient::new(&AppConfig::default().with_base_url(base_url)).unwrap()
}
