use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use log::error;
use serde::Serialize;

use urania::{
    assemble_chart, resolve_bodies, resolve_houses, to_ephemeris_time, BodyReadings,
    CelestialBody, ChartError, ChartResult, HouseReadings,
};

use crate::error::ApiError;
use crate::payload::ChartRequest;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub planets: &'static str,
    pub houses: &'static str,
    pub aspects: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub service: String,
    pub version: String,
    pub endpoints: Endpoints,
}

pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        service: state.service_name.to_string(),
        version: state.service_version.to_string(),
        endpoints: Endpoints {
            planets: "/api/planets",
            houses: "/api/houses",
            // Advertised for client compatibility; no route serves it.
            aspects: "/api/aspects",
        },
    })
}

pub async fn planets(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BodyReadings>, ApiError> {
    let request = parse("/api/planets", &body)?;
    let civil = request.moment()?;

    let readings = compute("/api/planets", move || {
        let oracle = state.oracle.as_ref();
        let time = to_ephemeris_time(oracle, &civil);
        resolve_bodies(oracle, time, &CelestialBody::ALL)
    })
    .await?;
    Ok(Json(readings))
}

pub async fn houses(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<HouseReadings>, ApiError> {
    let request = parse("/api/houses", &body)?;
    let (civil, location) = request.moment_and_place()?;
    let system = request.house_system();

    let houses = compute("/api/houses", move || {
        let oracle = state.oracle.as_ref();
        let time = to_ephemeris_time(oracle, &civil);
        resolve_houses(oracle, time, location, system)
    })
    .await?
    .map_err(|err| house_failure("/api/houses", err))?;
    Ok(Json(houses))
}

pub async fn chart(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChartResult>, ApiError> {
    let request = parse("/api/chart", &body)?;
    let (civil, location) = request.moment_and_place()?;
    let system = request.house_system();

    let chart = compute("/api/chart", move || {
        let oracle = state.oracle.as_ref();
        let time = to_ephemeris_time(oracle, &civil);
        assemble_chart(oracle, time, location, system)
    })
    .await?
    .map_err(|err| house_failure("/api/chart", err))?;
    Ok(Json(chart))
}

fn parse(endpoint: &str, body: &[u8]) -> Result<ChartRequest, ApiError> {
    ChartRequest::from_body(body).map_err(|err| {
        error!("Error in {}: unreadable body: {}", endpoint, err);
        err
    })
}

fn house_failure(endpoint: &str, err: ChartError) -> ApiError {
    error!("Error in {}: {}", endpoint, err);
    ApiError::HouseCalculation(err.oracle_message())
}

/// Run oracle work off the async workers. The FFI calls are synchronous and
/// serialize on a process-wide lock.
async fn compute<T, F>(endpoint: &'static str, work: F) -> Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await.map_err(|err| {
        error!("Error in {}: {}", endpoint, err);
        ApiError::Internal(err.to_string())
    })
}
