use reqwest::StatusCode;
use serde_json::Value;

use crate::model::summoner::LookupResult;

use super::ParsingError;

pub const DEFAULT_UPSTREAM_ERROR: &str = "Failed to fetch summoner data";

/// What the lookup service answered, once the body was readable.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResponse {
    Found(LookupResult),
    /// Non-2xx with a JSON body. The service looked at the request and refused it.
    Declined { status: u16, message: String },
}

pub fn parse_lookup_response(status: StatusCode, body: &str) -> Result<LookupResponse, ParsingError> {
    let json: Value = serde_json::from_str(body).map_err(|source| ParsingError::NotJson {
        status: status.as_u16(),
        source,
    })?;

    if status.is_success() {
        let result = serde_json::from_value(json).map_err(ParsingError::InvalidShape)?;
        return Ok(LookupResponse::Found(result));
    }

    let message = json
        .get("error")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or(DEFAULT_UPSTREAM_ERROR)
        .to_string();

    Ok(LookupResponse::Declined {
        status: status.as_u16(),
        message,
    })
}
