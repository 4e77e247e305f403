use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use urania::ephemeris::{BodyPosition, EphemerisError, EphemerisOracle, GeoLocation, HouseCusps};
use urania::{CelestialBody, EphemerisTime, HouseSystem};
use urania_config::ServerSettings;
use urania_server::{router, AppState};

/// Oracle with a fixed sky: body `i` sits at `30 * i + 5` degrees, Saturn
/// is retrograde and the houses are equal from 100 degrees.
#[derive(Default)]
pub struct StubOracle {
    pub failing_body: Option<CelestialBody>,
    pub houses_error: Option<String>,
    pub panic_in_houses: bool,
    pub house_systems: Mutex<Vec<HouseSystem>>,
}

impl EphemerisOracle for StubOracle {
    fn calc_body(
        &self,
        time: EphemerisTime,
        body: CelestialBody,
    ) -> Result<BodyPosition, EphemerisError> {
        if self.failing_body == Some(body) {
            return Err(EphemerisError::CalculationFailed {
                body: body.name().to_string(),
                julian_day: time.julian_day(),
                message: "asteroid file missing".to_string(),
            });
        }
        let index = CelestialBody::ALL.iter().position(|b| *b == body).unwrap() as f64;
        Ok(BodyPosition {
            lon: index * 30.0 + 5.0,
            lat: 0.0,
            speed_lon: if body == CelestialBody::Saturn { -0.02 } else { 0.5 },
        })
    }

    fn calc_houses(
        &self,
        _time: EphemerisTime,
        _location: GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError> {
        self.house_systems.lock().unwrap().push(system);
        if self.panic_in_houses {
            panic!("cusp table corrupted");
        }
        if let Some(message) = &self.houses_error {
            return Err(EphemerisError::HouseCalculationFailed {
                message: message.clone(),
            });
        }
        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            *cusp = 100.0 + i as f64 * 30.0;
        }
        Ok(HouseCusps {
            ascendant: 100.0,
            mc: 10.0,
            cusps,
        })
    }
}

pub fn app(oracle: Arc<StubOracle>) -> Router {
    router(AppState::new(oracle, &ServerSettings::default()))
}

pub async fn send_raw(app: Router, method: &str, uri: &str, body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn send(app: Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let (status, text) = send_raw(app, method, uri, body).await;
    let json = if text.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text).unwrap()
    };
    (status, json)
}

pub async fn post(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    send(app, "POST", uri, body).await
}
