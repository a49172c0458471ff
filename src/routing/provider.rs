//! Distance Matrix HTTP adapter.
//!
//! The evaluator only needs one thing from the outside world: driving
//! distance and duration between two addresses. That capability is kept
//! behind [`DistanceProvider`] so the test suite can swap in a stub with
//! no network access.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Raw result of a distance lookup, straight from the provider.
#[derive(Debug, Clone, Copy)]
pub struct DistanceLookup {
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

/// Ways a lookup can fail.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    /// The destination does not resolve to a routable place
    #[error("destination not found")]
    NotFound,

    /// Transport failure, timeout, or a payload we cannot interpret
    #[error("provider failure: {0}")]
    Provider(String),
}

/// Narrow capability interface for driving-distance lookups.
#[async_trait]
pub trait DistanceProvider: Send + Sync {
    async fn lookup(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<DistanceLookup, LookupError>;
}

#[derive(Debug, Clone)]
pub struct MatrixConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            base_url: "https://maps.googleapis.com/maps/api/distancematrix/json".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

/// Google Distance Matrix client.
#[derive(Debug, Clone)]
pub struct MatrixClient {
    config: MatrixConfig,
    client: reqwest::Client,
}

impl MatrixClient {
    pub fn new(config: MatrixConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl DistanceProvider for MatrixClient {
    async fn lookup(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<DistanceLookup, LookupError> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("origins", origin),
                ("destinations", destination),
                ("mode", "driving"),
                ("key", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| LookupError::Provider(e.to_string()))?;

        let body = response
            .json::<MatrixResponse>()
            .await
            .map_err(|e| LookupError::Provider(e.to_string()))?;

        interpret(body)
    }
}

/// Maps a matrix payload to a lookup result. A single origin/destination
/// pair must come back as exactly one row with one element; anything else
/// means the address was ambiguous.
fn interpret(body: MatrixResponse) -> Result<DistanceLookup, LookupError> {
    if body.status != "OK" {
        return Err(LookupError::Provider(format!(
            "matrix status {}",
            body.status
        )));
    }

    let mut rows = body.rows;
    if rows.len() != 1 || rows[0].elements.len() != 1 {
        return Err(LookupError::NotFound);
    }
    let element = rows.remove(0).elements.remove(0);

    match element.status.as_str() {
        "OK" => {}
        "NOT_FOUND" | "ZERO_RESULTS" => return Err(LookupError::NotFound),
        other => return Err(LookupError::Provider(format!("element status {}", other))),
    }

    match (element.distance, element.duration) {
        (Some(distance), Some(duration)) => Ok(DistanceLookup {
            distance_meters: distance.value,
            duration_seconds: duration.value,
        }),
        _ => Err(LookupError::Provider(
            "element missing distance or duration".to_string(),
        )),
    }
}

#[derive(Debug, Deserialize)]
struct MatrixResponse {
    status: String,
    #[serde(default)]
    rows: Vec<MatrixRow>,
}

#[derive(Debug, Deserialize)]
struct MatrixRow {
    #[serde(default)]
    elements: Vec<MatrixElement>,
}

#[derive(Debug, Deserialize)]
struct MatrixElement {
    status: String,
    distance: Option<ValueField>,
    duration: Option<ValueField>,
}

#[derive(Debug, Deserialize)]
struct ValueField {
    value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> MatrixResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn interprets_successful_element() {
        let body = payload(
            r#"{
                "status": "OK",
                "rows": [{"elements": [{
                    "status": "OK",
                    "distance": {"value": 28400.0},
                    "duration": {"value": 1920.0}
                }]}]
            }"#,
        );
        let lookup = interpret(body).unwrap();
        assert_eq!(lookup.distance_meters, 28400.0);
        assert_eq!(lookup.duration_seconds, 1920.0);
    }

    #[test]
    fn not_found_element_maps_to_not_found() {
        let body = payload(
            r#"{"status": "OK", "rows": [{"elements": [{"status": "NOT_FOUND"}]}]}"#,
        );
        assert!(matches!(interpret(body), Err(LookupError::NotFound)));

        let body = payload(
            r#"{"status": "OK", "rows": [{"elements": [{"status": "ZERO_RESULTS"}]}]}"#,
        );
        assert!(matches!(interpret(body), Err(LookupError::NotFound)));
    }

    #[test]
    fn ambiguous_row_shape_maps_to_not_found() {
        let body = payload(r#"{"status": "OK", "rows": []}"#);
        assert!(matches!(interpret(body), Err(LookupError::NotFound)));
    }

    #[test]
    fn non_ok_statuses_map_to_provider_error() {
        let body = payload(r#"{"status": "OVER_QUERY_LIMIT", "rows": []}"#);
        assert!(matches!(interpret(body), Err(LookupError::Provider(_))));

        let body = payload(
            r#"{"status": "OK", "rows": [{"elements": [{"status": "MAX_ROUTE_LENGTH_EXCEEDED"}]}]}"#,
        );
        assert!(matches!(interpret(body), Err(LookupError::Provider(_))));
    }

    #[test]
    fn missing_distance_is_a_provider_error() {
        let body = payload(
            r#"{"status": "OK", "rows": [{"elements": [{
                "status": "OK",
                "duration": {"value": 60.0}
            }]}]}"#,
        );
        assert!(matches!(interpret(body), Err(LookupError::Provider(_))));
    }
}
