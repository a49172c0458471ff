//! Request DTOs for the quote API.

use serde::Deserialize;

/// Instant-quote request from the estimate form.
///
/// Every field defaults so that missing values reach our own validation
/// (which names the offending fields) instead of a bare deserialize error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub story_count: u32,
    #[serde(default)]
    pub square_feet: u32,
    /// Optional; unset or unrecognized prices at the baseline multiplier
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl QuoteRequest {
    /// Names of required fields that are missing or unusable. Checked
    /// before any external call is made.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.address.trim().is_empty() {
            missing.push("address");
        }
        if self.story_count == 0 {
            missing.push("storyCount");
        }
        if self.square_feet == 0 {
            missing.push("squareFeet");
        }
        if self.coordinates.is_none() {
            missing.push("coordinates");
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            missing.push("email");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_request_has_no_missing_fields() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{
                "address": "100 Elm St, Asheville, NC",
                "storyCount": 2,
                "squareFeet": 2400,
                "material": "brick",
                "coordinates": {"lat": 35.59, "lng": -82.55},
                "email": "homeowner@example.com"
            }"#,
        )
        .unwrap();
        assert!(request.missing_fields().is_empty());
    }

    #[test]
    fn reports_each_missing_field_by_name() {
        let request: QuoteRequest = serde_json::from_str(r#"{"email": "not-an-email"}"#).unwrap();
        let missing = request.missing_fields();

        assert!(missing.contains(&"address"));
        assert!(missing.contains(&"storyCount"));
        assert!(missing.contains(&"squareFeet"));
        assert!(missing.contains(&"coordinates"));
        assert!(missing.contains(&"email"));
    }

    #[test]
    fn material_is_optional() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{
                "address": "100 Elm St",
                "storyCount": 1,
                "squareFeet": 1200,
                "coordinates": {"lat": 35.0, "lng": -82.0},
                "email": "a@b.com"
            }"#,
        )
        .unwrap();
        assert!(request.missing_fields().is_empty());
        assert!(request.material.is_none());
    }
}
