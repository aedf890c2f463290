use article_service::config::ArticleConfig;
use article_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Span export is opt-in; logs always go to stdout
    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok();
    init_tracing("article-service", "info", otlp_endpoint.as_deref());

    let config = ArticleConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start article service: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
