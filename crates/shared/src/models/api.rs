use crate::models::pool::PoolRecord;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

/// JSON envelope shared by every pools endpoint. The payload fields sit
/// next to `success` rather than under a nested key.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(success: bool, data: T) -> Self {
        ApiResponse { success, data }
    }
}

impl<T: Serialize> From<ApiResponse<T>> for HttpResponse {
    fn from(response: ApiResponse<T>) -> Self {
        HttpResponse::Ok().json(response)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PoolList {
    pub pools: Vec<PoolRecord>,
    pub total: usize,
}

impl From<Vec<PoolRecord>> for PoolList {
    fn from(pools: Vec<PoolRecord>) -> Self {
        let total = pools.len();
        Self { pools, total }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PoolDetail {
    pub pool: PoolRecord,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiError {
    pub error: String,
}

impl ApiResponse<ApiError> {
    pub fn error(message: impl Into<String>) -> Self {
        ApiResponse::new(
            false,
            ApiError {
                error: message.into(),
            },
        )
    }

    pub fn into_http(self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }
}

/// Body of a pools endpoint response before the caller knows whether it
/// succeeded. Failure bodies carry only `error`.
#[derive(Debug, Deserialize, Clone)]
pub struct RawApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub data: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_envelope_is_flat() {
        let response = ApiResponse::new(true, PoolList::from(vec![PoolRecord::default()]));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], json!(true));
        assert_eq!(value["total"], json!(1));
        assert!(value["pools"].is_array());
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_error_envelope() {
        let value = serde_json::to_value(ApiResponse::error("Pool not found")).unwrap();
        assert_eq!(value, json!({ "success": false, "error": "Pool not found" }));
    }

    #[test]
    fn test_raw_response_without_payload() {
        let raw: RawApiResponse<PoolDetail> =
            serde_json::from_value(json!({ "success": false, "error": "Pool not found" }))
                .unwrap();
        assert!(!raw.success);
        assert_eq!(raw.error.as_deref(), Some("Pool not found"));
        assert!(raw.data.is_none());
    }
}
