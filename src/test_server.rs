//! A local HTTP endpoint that answers exactly one request.
use std::{sync::Arc, time::Duration};

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    Router,
};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
    time::timeout,
};

/// A client that talks to localhost directly, whatever proxy the
/// environment configures.
pub fn local_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("client creation should succeed")
}

/// The parts of a request the tests look at.
#[derive(Debug)]
pub struct Received {
    pub method: Method,
    pub uri: Uri,
    pub body: String,
}

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: String,
    received: Arc<Mutex<Option<oneshot::Sender<Received>>>>,
}

async fn answer(
    State(canned): State<Canned>,
    method: Method,
    uri: Uri,
    body: String,
) -> (StatusCode, String) {
    if let Some(tx) = canned.received.lock().await.take() {
        let _ = tx.send(Received { method, uri, body });
    }
    (canned.status, canned.body)
}

pub struct OneShotServer {
    pub url: String,
    received: oneshot::Receiver<Received>,
}

impl OneShotServer {
    pub async fn respond(status: StatusCode, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("binding to localhost should work");
        let addr = listener.local_addr().expect("listener should have an address");
        let (tx, received) = oneshot::channel();
        let app = Router::new().fallback(answer).with_state(Canned {
            status,
            body: body.to_owned(),
            received: Arc::new(Mutex::new(Some(tx))),
        });
        tokio::spawn(async move { axum::serve(listener, app).await });
        Self {
            url: format!("http://{addr}"),
            received,
        }
    }

    /// The first request the server got. Fails the test if none arrives.
    pub async fn request(self) -> Received {
        timeout(Duration::from_secs(5), self.received)
            .await
            .expect("the server should receive a request within 5s")
            .expect("the server should still be running")
    }
}
