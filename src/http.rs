use crate::random::RandomSource;
use crate::service::TelemetryService;
use crate::types::{DamageEstimate, FireEvent, SpreadPrediction};
use axum::{
    extract::State,
    http::{header, HeaderValue},
    middleware,
    response::Response,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

pub type AppState<R> = Arc<TelemetryService<R>>;

pub async fn fires<R>(State(svc): State<AppState<R>>) -> Json<Vec<FireEvent>>
where
    R: RandomSource + Send + Sync + 'static,
{
    Json(svc.get_fires())
}

pub async fn prediction<R>(State(svc): State<AppState<R>>) -> Json<SpreadPrediction>
where
    R: RandomSource + Send + Sync + 'static,
{
    Json(svc.get_prediction())
}

pub async fn damage<R>(State(svc): State<AppState<R>>) -> Json<DamageEstimate>
where
    R: RandomSource + Send + Sync + 'static,
{
    Json(svc.get_damage())
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

// The dashboard is served from another origin.
async fn allow_any_origin(mut res: Response) -> Response {
    res.headers_mut()
        .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    res
}

pub fn router<R>(svc: AppState<R>) -> Router
where
    R: RandomSource + Send + Sync + 'static,
{
    Router::new()
        .route("/fires", get(fires::<R>))
        .route("/prediction", get(prediction::<R>))
        .route("/damage", get(damage::<R>))
        .route("/health", get(health))
        .layer(middleware::map_response(allow_any_origin))
        .with_state(svc)
}
