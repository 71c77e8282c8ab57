use std::sync::Arc;

use axum::{
    Json,
    extract::{Request, State},
    http::{HeaderValue, header::CACHE_CONTROL},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use chrono::Utc;
use serde_json::json;
use tokio::fs::read_to_string;

use crate::{error::AppError, state::AppState};

const ASSET_CACHE: &str = "public, max-age=31536000, immutable";
const HTML_CACHE: &str = "public, max-age=3600";

/// Liveness endpoint for the hosting platform.
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok", "timestamp": Utc::now().to_rfc3339() }))
}

/// Serves the entry document for any path with no matching file, so client-side
/// routes survive a full page load.
pub async fn spa_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let index = state.config.dist_dir.join("index.html");
    let page = read_to_string(&index).await?;

    Ok(Html(page))
}

pub async fn set_cache_control(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;

    if path != "/health" && response.status().is_success() {
        if let Some(policy) = cache_policy(&path) {
            response
                .headers_mut()
                .insert(CACHE_CONTROL, HeaderValue::from_static(policy));
        }
    }

    response
}

/// Fingerprinted assets are immutable for a year; HTML, including extension-less
/// paths that fall back to the entry document, for an hour.
fn cache_policy(path: &str) -> Option<&'static str> {
    let extension = path
        .rsplit('/')
        .next()
        .and_then(|file| file.rsplit_once('.'))
        .map(|(_, extension)| extension);

    match extension {
        Some(
            "js" | "css" | "png" | "jpg" | "jpeg" | "gif" | "ico" | "svg" | "woff" | "woff2"
            | "ttf" | "eot",
        ) => Some(ASSET_CACHE),
        Some("html") | None => Some(HTML_CACHE),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprinted_assets_cached_for_a_year() {
        for path in ["/assets/index-B3xKp2.js", "/assets/app.css", "/favicon.ico"] {
            assert_eq!(cache_policy(path), Some(ASSET_CACHE));
        }
    }

    #[test]
    fn test_html_and_spa_paths_cached_for_an_hour() {
        for path in ["/", "/index.html", "/menu", "/koszyk"] {
            assert_eq!(cache_policy(path), Some(HTML_CACHE));
        }
    }

    #[test]
    fn test_unrecognized_extensions_left_alone() {
        assert_eq!(cache_policy("/robots.txt"), None);
        assert_eq!(cache_policy("/data/menu.json"), None);
    }
}
