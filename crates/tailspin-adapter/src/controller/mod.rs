//! Inbound HTTP adapter
//!
//! | Route                     | Handler                     |
//! |---------------------------|-----------------------------|
//! | `GET /`                   | [`pages::index`]            |
//! | `GET /Index`              | [`pages::index`]            |
//! | `GET /campaign?id=N`      | [`pages::campaign_by_query`]|
//! | `GET /Campaign?id=N`      | [`pages::campaign_by_query`]|
//! | `GET /campaigns/{id}`     | [`pages::campaign_by_path`] |
//! | `GET /api/campaigns`      | [`api::list_campaigns`]     |
//! | `GET /api/campaigns/{id}` | [`api::get_campaign`]       |
//! | `GET /health`             | [`api::health`]             |
//! | `GET /static/*`           | files from the static dir   |

pub mod api;
pub mod error;
pub mod pages;

use std::path::Path;

use axum::routing::get;
use axum::Router;
use tailspin_domain::CampaignId;
use tailspin_usecase::CampaignCatalog;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// State shared by every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: CampaignCatalog,
}

impl AppState {
    pub fn new(catalog: CampaignCatalog) -> Self {
        Self { catalog }
    }
}

/// Build the application router
pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/Index", get(pages::index))
        .route("/campaign", get(pages::campaign_by_query))
        .route("/Campaign", get(pages::campaign_by_query))
        .route("/campaigns/{id}", get(pages::campaign_by_path))
        .route("/api/campaigns", get(api::list_campaigns))
        .route("/api/campaigns/{id}", get(api::get_campaign))
        .route("/health", get(api::health))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Parse a campaign id from request text
pub(crate) fn parse_id(raw: &str) -> Option<CampaignId> {
    raw.trim().parse::<u32>().ok().map(CampaignId::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::in_memory::InMemoryCampaignRepository;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use rust_decimal::Decimal;
    use tailspin_domain::NewCampaign;
    use tailspin_usecase::bootstrap_store;
    use tower::ServiceExt;

    fn app_with_static(static_dir: &Path) -> Router {
        let boot = bootstrap_store(
            InMemoryCampaignRepository::new(),
            vec![
                NewCampaign::new("Sky Surfer", Decimal::from(5000), Decimal::from(1200))
                    .with_description("Glide <fast>"),
                NewCampaign::new("RoboRacer", Decimal::from(8000), Decimal::from(3500)),
            ],
        );
        let state = AppState::new(CampaignCatalog::new(boot.repository));
        router(state, static_dir)
    }

    fn app() -> Router {
        app_with_static(Path::new("does-not-exist"))
    }

    async fn send_get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("3"), Some(CampaignId::new(3)));
        assert_eq!(parse_id(" 12 "), Some(CampaignId::new(12)));
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
    }

    #[tokio::test]
    async fn test_index_lists_every_campaign() {
        let response = send_get(app(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Sky Surfer"));
        assert!(html.contains("RoboRacer"));
        assert!(html.contains("Glide &lt;fast&gt;"));
    }

    #[tokio::test]
    async fn test_detail_by_query_and_path() {
        let response = send_get(app(), "/campaign?id=2").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("<h1>RoboRacer</h1>"));

        let response = send_get(app(), "/campaigns/1").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("<h1>Sky Surfer</h1>"));
    }

    #[tokio::test]
    async fn test_missing_campaign_redirects_to_index() {
        for uri in [
            "/campaign?id=3",
            "/campaign?id=abc",
            "/campaign",
            "/campaign?id=",
            "/campaign?id=%FF",
            "/campaign?id=abc&id=1",
            "/campaigns/99",
        ] {
            let response = send_get(app(), uri).await;
            assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
            assert_eq!(location(&response), "/", "{uri}");
        }
    }

    #[tokio::test]
    async fn test_repeated_id_uses_first_value() {
        let response = send_get(app(), "/campaign?id=1&id=2").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("<h1>Sky Surfer</h1>"));
    }

    #[tokio::test]
    async fn test_capitalized_page_routes() {
        let response = send_get(app(), "/Campaign?id=2").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("<h1>RoboRacer</h1>"));

        let response = send_get(app(), "/Campaign?id=7").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");

        let response = send_get(app(), "/Index").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("RoboRacer"));
    }

    #[tokio::test]
    async fn test_api_list() {
        let response = send_get(app(), "/api/campaigns").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        let campaigns = json.as_array().unwrap();
        assert_eq!(campaigns.len(), 2);
        assert_eq!(campaigns[0]["id"], 1);
        assert_eq!(campaigns[0]["name"], "Sky Surfer");
        assert_eq!(campaigns[1]["id"], 2);
        // Amounts are exact decimal strings
        assert_eq!(campaigns[0]["goalAmount"], "5000");
        assert_eq!(campaigns[0]["currentAmount"], "1200");
    }

    #[tokio::test]
    async fn test_api_get() {
        let response = send_get(app(), "/api/campaigns/2").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["name"], "RoboRacer");

        let response = send_get(app(), "/api/campaigns/3").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["error"]["category"], "not_found");
        assert_eq!(json["error"]["message"], "Campaign 3 not found");

        let response = send_get(app(), "/api/campaigns/x").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health() {
        let response = send_get(app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["campaigns"], 2);
    }

    #[tokio::test]
    async fn test_unknown_route_is_html_404() {
        let response = send_get(app(), "/nowhere").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("Page not found"));
    }

    #[tokio::test]
    async fn test_static_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("site.css"), "body { margin: 0; }").unwrap();

        let response = send_get(app_with_static(dir.path()), "/static/site.css").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "body { margin: 0; }");
    }
}
