use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use storage_search_core::contract::{normalize_requests, request_fingerprint, VehicleRequestPayload};
use storage_search_core::model::vehicle_count;
use storage_search_core::{search_listings, ListingCatalog, SearchConfig};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// Answer one search request: validate the vehicle list, load the catalog and
/// return every feasible location ranked by total price.
pub fn handle_search_event(
    event: Value,
    catalog: &dyn ListingCatalog,
    config: &SearchConfig,
) -> ApiGatewayResponse {
    let started_at = Instant::now();

    let payload = match normalize_apigw_event(event) {
        Ok(value) => value,
        Err(message) => return validation_error_response(&message),
    };

    let raw_requests = match serde_json::from_value::<Vec<VehicleRequestPayload>>(payload) {
        Ok(value) => value,
        Err(error) => return validation_error_response(&format!("Malformed request: {error}")),
    };

    let requests = match normalize_requests(raw_requests) {
        Ok(value) => value,
        Err(error) => return validation_error_response(error.message()),
    };
    let fingerprint = request_fingerprint(&requests);

    let results = match search_listings(&requests, catalog, config) {
        Ok(value) => value,
        Err(error) => {
            tracing::error!(request_fingerprint = %fingerprint, %error, "catalog load failed");
            return error_response(
                500,
                json!({
                    "error": "catalog_error",
                    "message": format!("Failed to load listings: {error}"),
                }),
            );
        }
    };

    tracing::info!(
        request_fingerprint = %fingerprint,
        requests = requests.len(),
        vehicles = ?vehicle_count(&requests),
        results = results.len(),
        elapsed_ms = started_at.elapsed().as_millis() as u64,
        "search served"
    );
    success_response(200, results)
}

fn normalize_apigw_event(event: Value) -> Result<Value, String> {
    let Some(object) = event.as_object() else {
        return Ok(event);
    };

    let Some(body) = object.get("body") else {
        return Err("Request payload must be a JSON array of vehicle requests".to_string());
    };

    match body {
        Value::Null => Ok(json!([])),
        Value::Array(_) => Ok(body.clone()),
        Value::String(text) => {
            serde_json::from_str(text).map_err(|error| format!("Malformed JSON body: {error}"))
        }
        _ => Err("Request body must be a JSON array".to_string()),
    }
}

fn validation_error_response(message: &str) -> ApiGatewayResponse {
    tracing::warn!(reason = message, "rejected search request");
    error_response(
        400,
        json!({
            "error": "validation_error",
            "message": message,
        }),
    )
}

fn success_response(status_code: u16, payload: impl Serialize) -> ApiGatewayResponse {
    match serde_json::to_string(&payload) {
        Ok(body) => ApiGatewayResponse {
            status_code,
            headers: json!({"Content-Type": "application/json"}),
            body,
        },
        Err(error) => error_response(
            500,
            json!({
                "error": "serialization_error",
                "message": error.to_string(),
            }),
        ),
    }
}

fn error_response(status_code: u16, payload: Value) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: payload.to_string(),
    }
}
