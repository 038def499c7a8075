//! Router assembly and server lifecycle for the API service.

use axum::Router;
use service_core::error::AppError;
use service_core::health::{self, health_routes, HealthStatus};
use service_core::server::{bind, serve, with_service_layers};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{ApiConfig, SERVICE_DESCRIPTION, SERVICE_NAME, SERVICE_TITLE};
use crate::handlers::{self, api};

#[derive(OpenApi)]
#[openapi(
    paths(health::health_check, api::hello, api::version),
    components(schemas(HealthStatus, api::Message, api::VersionInfo)),
    tags(
        (name = "health", description = "Service liveness"),
        (name = "api", description = "Greeting and version endpoints"),
    )
)]
pub struct ApiDoc;

/// OpenAPI document with the service's title, description and version.
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = SERVICE_TITLE.to_string();
    doc.info.description = Some(SERVICE_DESCRIPTION.to_string());
    doc.info.version = env!("CARGO_PKG_VERSION").to_string();
    doc
}

pub fn build_router() -> Router {
    let router = Router::new()
        .merge(health_routes())
        .nest("/api", handlers::api::routes())
        .merge(SwaggerUi::new("/docs").url("/openapi.json", openapi()));

    with_service_layers(SERVICE_NAME, router)
}

/// A bound, not yet running, API service.
pub struct Application {
    port: u16,
    listener: TcpListener,
}

impl Application {
    pub async fn build(config: ApiConfig) -> Result<Self, AppError> {
        let listener = bind(&config.common).await?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            service = SERVICE_NAME,
            title = SERVICE_TITLE,
            description = SERVICE_DESCRIPTION,
            version = env!("CARGO_PKG_VERSION"),
            host = %config.common.host,
            port,
            "Starting service"
        );

        Ok(Self { port, listener })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        serve(self.listener, build_router()).await
    }
}
