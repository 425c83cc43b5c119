mod docs;
mod error;
mod info;
mod router;
mod summarize;

use std::env;

use dotenvy::dotenv;
use router::router;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let server_domain = env::var("SERVER_DOMAIN").unwrap_or("0.0.0.0:8000".to_string());

    let app = router();

    let listener = tokio::net::TcpListener::bind(&server_domain).await.unwrap();

    axum::serve(listener, app).await.unwrap();
}
