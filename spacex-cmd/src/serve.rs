//! Local HTTP server for the dashboard.
//!
//! Exposes the two chart handlers as JSON and, when a `dx build` output
//! directory is given, serves the dashboard bundle from `/`.
//!
//! - `GET /healthz`
//! - `GET /api/pie?site=ALL`
//! - `GET /api/scatter?site=ALL&low=0&high=10000`

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use spacex_db::charts::{PieChart, ScatterChart};
use spacex_db::Database;
use spacex_launch::launch_site::{SiteFilter, ALL_SITES_VALUE};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::report::{check_payload_bounds, resolve_payload_range};

struct ServeState {
    db: Database,
}

#[derive(Debug, Deserialize)]
pub struct PieQuery {
    site: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScatterQuery {
    site: Option<String>,
    low: Option<f64>,
    high: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

fn internal_error(err: anyhow::Error) -> (StatusCode, Json<ApiError>) {
    log::error!("chart handler failed: {:#}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError {
            error: format!("{:#}", err),
        }),
    )
}

fn bad_request(err: anyhow::Error) -> (StatusCode, Json<ApiError>) {
    log::warn!("rejected chart request: {:#}", err);
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError {
            error: format!("{:#}", err),
        }),
    )
}

fn site_filter(site: Option<String>) -> SiteFilter {
    SiteFilter::from_value(site.as_deref().unwrap_or(ALL_SITES_VALUE))
}

pub fn build_router(db: Database, dist: Option<PathBuf>) -> Router {
    let router = Router::new()
        .route("/healthz", get(healthz))
        .route("/api/pie", get(http_pie_chart))
        .route("/api/scatter", get(http_scatter_chart))
        .with_state(Arc::new(ServeState { db }));

    match dist {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router.fallback(no_bundle),
    }
}

pub async fn run_server(db: Database, dist: Option<PathBuf>, addr: &str) -> anyhow::Result<()> {
    if let Some(dir) = &dist {
        if !dir.is_dir() {
            anyhow::bail!("dashboard bundle directory {} does not exist", dir.display());
        }
    }
    let app = build_router(db, dist);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Dashboard listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn no_bundle() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "no dashboard bundle: build dash-launch-records with `dx build` and pass --dist",
    )
}

async fn http_pie_chart(
    State(state): State<Arc<ServeState>>,
    Query(query): Query<PieQuery>,
) -> ApiResult<PieChart> {
    let site = site_filter(query.site);
    log::info!("GET /api/pie site={}", site.value());
    state
        .db
        .success_pie_chart(&site)
        .map(Json)
        .map_err(internal_error)
}

async fn http_scatter_chart(
    State(state): State<Arc<ServeState>>,
    Query(query): Query<ScatterQuery>,
) -> ApiResult<ScatterChart> {
    let site = site_filter(query.site);
    check_payload_bounds(query.low, query.high).map_err(bad_request)?;
    let range =
        resolve_payload_range(&state.db, query.low, query.high).map_err(internal_error)?;
    log::info!(
        "GET /api/scatter site={} range={}..={}",
        site.value(),
        range.low,
        range.high
    );
    state
        .db
        .payload_scatter_chart(&site, range)
        .map(Json)
        .map_err(internal_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body, body::Body, http::Request};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let db = Database::from_csv(
            "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,1,2034.0,F9 FT B1019,FT
2,3,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
3,4,KSC LC-39A,0,5300.0,F9 FT  B1021.2,FT
4,5,VAFB SLC-4E,1,9600.0,F9 B4 B1041.1,B4
",
        )
        .expect("db");
        build_router(db, None)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::get(uri).body(Body::empty()).expect("request");
        let response = app.oneshot(request).await.expect("response");
        let status = response.status();
        let body = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, serde_json::from_slice(&body).expect("json"))
    }

    #[tokio::test]
    async fn healthz_reports_ok() {
        let request = Request::get("/healthz").body(Body::empty()).expect("request");
        let response = test_app().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        assert_eq!(body.as_ref(), b"ok");
    }

    #[tokio::test]
    async fn pie_defaults_to_all_sites() {
        let (status, json) = get_json(test_app(), "/api/pie").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["title"], "Total Success Launches by site");
        assert_eq!(json["slices"].as_array().expect("slices").len(), 3);
    }

    #[tokio::test]
    async fn pie_for_single_site() {
        let (status, json) = get_json(test_app(), "/api/pie?site=KSC%20LC-39A").await;
        assert_eq!(status, StatusCode::OK);
        let labels: Vec<&str> = json["slices"]
            .as_array()
            .expect("slices")
            .iter()
            .map(|s| s["label"].as_str().expect("label"))
            .collect();
        assert_eq!(labels, vec!["Failure", "Success"]);
    }

    #[tokio::test]
    async fn scatter_filters_by_range_and_site() {
        let (status, json) =
            get_json(test_app(), "/api/scatter?site=KSC%20LC-39A&low=0&high=3000").await;
        assert_eq!(status, StatusCode::OK);
        let points = json["points"].as_array().expect("points");
        assert_eq!(points.len(), 1);
        assert_eq!(points[0]["flight_number"], 3);

        let (_, json) = get_json(test_app(), "/api/scatter").await;
        assert_eq!(json["points"].as_array().expect("points").len(), 5);
    }

    #[tokio::test]
    async fn unknown_site_is_empty_not_an_error() {
        let (status, json) = get_json(test_app(), "/api/scatter?site=Boca%20Chica").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["points"].as_array().expect("points").is_empty());
    }

    #[tokio::test]
    async fn scatter_rejects_non_finite_bounds() {
        let (status, json) = get_json(test_app(), "/api/scatter?low=NaN&high=10000").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().expect("error").contains("low"));

        let (status, _) = get_json(test_app(), "/api/scatter?high=inf").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_bundle_is_not_found() {
        let request = Request::get("/").body(Body::empty()).expect("request");
        let response = test_app().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
