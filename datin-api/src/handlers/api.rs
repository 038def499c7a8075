use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use service_core::routing::SlashRedirectExt;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Message {
    #[schema(example = "Hello from Datin API!")]
    pub message: String,
}

/// Name and version of the running service, as built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VersionInfo {
    #[schema(example = "1.0.0")]
    pub version: String,
    #[schema(example = "datin-api")]
    pub name: String,
}

impl VersionInfo {
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            name: env!("CARGO_PKG_NAME").to_string(),
        }
    }
}

/// Static greeting
#[utoipa::path(
    get,
    path = "/api/hello",
    responses(
        (status = 200, description = "Greeting returned", body = Message)
    ),
    tag = "api"
)]
pub async fn hello() -> Json<Message> {
    Json(Message {
        message: "Hello from Datin API!".to_string(),
    })
}

/// Service name and version
#[utoipa::path(
    get,
    path = "/api/version",
    responses(
        (status = 200, description = "Version returned", body = VersionInfo)
    ),
    tag = "api"
)]
pub async fn version() -> Json<VersionInfo> {
    Json(VersionInfo::current())
}

/// Feature routes, relative to the `/api` prefix.
pub fn routes() -> Router {
    Router::new()
        .route_with_slash_redirect("/hello", get(hello))
        .route_with_slash_redirect("/version", get(version))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_info_reports_package_metadata() {
        let info = VersionInfo::current();
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.name, "datin-api");
    }

    #[test]
    fn version_info_serializes_version_first() {
        let json = serde_json::to_string(&VersionInfo::current()).unwrap();
        assert_eq!(json, r#"{"version":"1.0.0","name":"datin-api"}"#);
    }
}
