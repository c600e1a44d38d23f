use std::fmt::Display;

use axum::extract::{Json, rejection::JsonRejection};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::{ApiError, ApiResult};
use crate::core::PlannerError;

pub fn from_json<T: DeserializeOwned>(body: Result<Json<Value>, JsonRejection>) -> ApiResult<T> {
    let Json(value) = body.map_err(|err| {
        ApiError::BadRequest(format!("Invalid JSON payload: {}", err.body_text()))
    })?;
    serde_json::from_value::<T>(value.clone()).map_err(|err| {
        let field = match value {
            Value::Object(map) => json_field_error::<T>(map),
            _ => None,
        };
        field.unwrap_or_else(|| ApiError::BadRequest(format!("Invalid JSON payload: {err}")))
    })
}

pub fn from_query<T: DeserializeOwned>(query: Option<String>) -> ApiResult<T> {
    let query = query.unwrap_or_default();
    serde_urlencoded::from_str::<T>(&query).map_err(|err| {
        query_field_error::<T>(&query)
            .unwrap_or_else(|| ApiError::BadRequest(format!("Invalid query string: {err}")))
    })
}

// Retry each key alone so the first one that fails names the field.
fn json_field_error<T: DeserializeOwned>(map: Map<String, Value>) -> Option<ApiError> {
    map.into_iter().find_map(|(key, value)| {
        let single = Value::Object(Map::from_iter([(key.clone(), value)]));
        serde_json::from_value::<T>(single)
            .err()
            .map(|err| field_error(&key, err))
    })
}

fn query_field_error<T: DeserializeOwned>(query: &str) -> Option<ApiError> {
    let pairs = serde_urlencoded::from_str::<Vec<(String, String)>>(query).ok()?;
    pairs.into_iter().find_map(|(key, value)| {
        let single = serde_urlencoded::to_string([(key.as_str(), value.as_str())]).ok()?;
        serde_urlencoded::from_str::<T>(&single)
            .err()
            .map(|err| field_error(&key, err))
    })
}

fn field_error(key: &str, err: impl Display) -> ApiError {
    ApiError::Planner(PlannerError::invalid(&snake_case(key), err.to_string()))
}

fn snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            if !out.is_empty() {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
