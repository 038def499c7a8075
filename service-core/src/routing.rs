//! Route registration that tolerates a toggled trailing slash.
//!
//! Every route registered through [`SlashRedirectExt::route_with_slash_redirect`]
//! also answers its trailing-slash twin (`/health/` for `/health`, `/search`
//! for `/search/`) with a 307 to the canonical path. The redirect keeps the
//! method, body and query string.

use axum::{
    extract::OriginalUri,
    response::Redirect,
    routing::{any, MethodRouter},
    Router,
};

pub trait SlashRedirectExt<S> {
    fn route_with_slash_redirect(self, path: &str, method_router: MethodRouter<S>) -> Self;
}

impl<S> SlashRedirectExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn route_with_slash_redirect(self, path: &str, method_router: MethodRouter<S>) -> Self {
        let router = self.route(path, method_router);

        match toggle_trailing_slash(path) {
            Some(twin) => router.route(&twin, any(redirect_to_slash_twin)),
            None => router,
        }
    }
}

/// `/a` ⇄ `/a/`. The root path has no twin.
fn toggle_trailing_slash(path: &str) -> Option<String> {
    if path == "/" || path.is_empty() {
        return None;
    }

    match path.strip_suffix('/') {
        Some(stripped) => Some(stripped.to_string()),
        None => Some(format!("{}/", path)),
    }
}

// OriginalUri keeps the nest prefix, so nested routes redirect to absolute paths.
async fn redirect_to_slash_twin(OriginalUri(uri): OriginalUri) -> Redirect {
    let path = toggle_trailing_slash(uri.path()).unwrap_or_else(|| "/".to_string());

    let target = match uri.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path,
    };

    Redirect::temporary(&target)
}
