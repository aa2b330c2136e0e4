use std::net::SocketAddr;

use axum::{Extension, Router, routing::get};
use time::Duration;
use tower_prefixed_sessions::{SameSite, Session, SessionConfig, SessionManagerLayer};

async fn index(Extension(session): Extension<Session>) -> String {
    let n: usize = session.get("n").unwrap_or(0);
    session
        .insert("n", n + 1)
        .expect("session insert succeeds");
    format!("n={n}")
}

#[tokio::main]
async fn main() {
    let session_config = SessionConfig::default()
        // Default: "session_"
        .with_prefix("session_")
        // Default: true
        .with_http_only(true)
        // Default: SameSite::Strict
        .with_same_site(SameSite::Strict)
        // Default: 24 hours
        .with_max_age(Duration::hours(1))
        // Default: true (set to false for local HTTP development)
        .with_secure(false)
        // Default: "/"
        .with_path("/")
        // Default: None
        .without_domain();
    let session_layer = SessionManagerLayer::new().with_config(session_config);

    let app = Router::new().route("/", get(index)).layer(session_layer);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("tcp listener binds successfully");
    let local_addr = listener.local_addr().expect("local address is available");
    println!("listening at http://{local_addr}");

    axum::serve(listener, app)
        .await
        .expect("server runs successfully");
}
