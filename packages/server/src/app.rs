//! Application setup and router configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use generation::{Generator, IndustryRegistry, OllamaContentProvider, PexelsImageProvider};

use crate::config::Config;
use crate::routes::{generate_handler, health_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<Generator>,
    pub provider_configured: bool,
    pub images_configured: bool,
}

impl AppState {
    pub fn new(generator: Arc<Generator>, provider_configured: bool, images_configured: bool) -> Self {
        Self {
            generator,
            provider_configured,
            images_configured,
        }
    }

    /// Wire the generator from configuration.
    ///
    /// The registry and dataset are built once here and shared read-only
    /// across all requests.
    pub fn from_config(config: &Config) -> Self {
        let registry = Arc::new(IndustryRegistry::builtin());
        let mut generator = Generator::new(registry)
            .with_external_timeout(Duration::from_secs(config.external_timeout_secs));

        let provider_configured = config.ollama_url.is_some();
        if let Some(url) = &config.ollama_url {
            tracing::info!(url = %url, model = %config.ollama_model, "content provider enabled");
            generator = generator.with_provider(Arc::new(OllamaContentProvider::new(
                url.clone(),
                config.ollama_model.clone(),
            )));
        } else {
            tracing::info!("no content provider configured, template pipeline only");
        }

        let images_configured = config.pexels_api_key.is_some();
        if let Some(key) = &config.pexels_api_key {
            generator =
                generator.with_image_provider(Arc::new(PexelsImageProvider::new(key.clone())));
        }

        Self::new(Arc::new(generator), provider_configured, images_configured)
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/generate", post(generate_handler))
        .route("/health", get(health_handler))
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
