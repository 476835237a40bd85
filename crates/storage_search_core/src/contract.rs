use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::model::VehicleRequest;

/// Raw request record as received on the wire, before validation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VehicleRequestPayload {
    pub length: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validate raw requests, keeping their order. Quantities are neither capped
/// nor merged.
pub fn normalize_requests(
    payload: Vec<VehicleRequestPayload>,
) -> Result<Vec<VehicleRequest>, ValidationError> {
    payload
        .into_iter()
        .enumerate()
        .map(|(index, request)| {
            if request.length <= 0 {
                return Err(ValidationError::new(format!(
                    "vehicle request {index}: length must be a positive integer"
                )));
            }
            let quantity = usize::try_from(request.quantity).map_err(|_| {
                ValidationError::new(format!(
                    "vehicle request {index}: quantity must be a non-negative integer"
                ))
            })?;
            Ok(VehicleRequest {
                length: request.length,
                quantity,
            })
        })
        .collect()
}

/// Stable digest of the normalized requests, for correlating log lines.
pub fn request_fingerprint(requests: &[VehicleRequest]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(stable_contract_json(requests));
    format!("{:x}", hasher.finalize())
}

pub fn stable_contract_json(value: impl Serialize) -> String {
    serde_json::to_string(&value).expect("serialization of contract value should not fail")
}
