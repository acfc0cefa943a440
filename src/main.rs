use actix_web::{get, App, HttpResponse, HttpServer};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Hello World" }))
}

#[get("/test")]
async fn test() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Test" }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    info!("listening on {}", addr);

    HttpServer::new(|| App::new().service(index).service(test))
        .bind(addr)?
        .run()
        .await
}
