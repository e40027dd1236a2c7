use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, on},
    Json, Router,
};
use database::repo::Database;
use log::error;
use model::{
    charging_station::ChargingStation, parking_lot::ParkingLot,
    recommendation::Recommendation, site::Site, Resource,
};
use serde_json::json;

pub mod records;

use crate::{
    common::{route_not_found, METHOD_FILTER_ALL},
    WebState,
};

macro_rules! resource {
    ($($arg:tt)*) => {
        format!("/api{}", format_args!($($arg)*))
    };
}
pub(crate) use resource;

/// A record kind which is served below `/api`.
pub trait Endpoint: Resource {
    /// Path of the collection, relative to `/api`.
    const PATH: &'static str;
}

impl Endpoint for Site {
    const PATH: &'static str = "/sites";
}

impl Endpoint for ChargingStation {
    const PATH: &'static str = "/charging-stations";
}

impl Endpoint for ParkingLot {
    const PATH: &'static str = "/parking-lots";
}

impl Endpoint for Recommendation {
    const PATH: &'static str = "/recommendations";
}

pub fn routes(state: WebState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/db-test", get(db_test))
        .nest_service(Site::PATH, records::routes::<Site>(state.clone()))
        .nest_service(
            ChargingStation::PATH,
            records::routes::<ChargingStation>(state.clone()),
        )
        .nest_service(ParkingLot::PATH, records::routes::<ParkingLot>(state.clone()))
        .nest_service(
            Recommendation::PATH,
            records::routes::<Recommendation>(state.clone()),
        )
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn ping() -> impl IntoResponse {
    Json(json!({
        "message": "pong!"
    }))
}

async fn db_test(State(database): State<Arc<dyn Database>>) -> Response {
    match database.now().await {
        Ok(timestamp) => Json(json!({
            "success": true,
            "timestamp": timestamp,
        }))
        .into_response(),
        Err(why) => {
            error!("database connectivity check failed: {}", why);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "error": why.to_string(),
                })),
            )
                .into_response()
        }
    }
}
