//! Response DTOs
//!
//! The success envelope. Failures use [`ErrorResponse`], which has the same
//! two fields.
//!
//! [`ErrorResponse`]: crate::shared::error::ErrorResponse

use serde::{Deserialize, Serialize};

/// `{ "result": <payload>, "error": null }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub result: T,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(result: T) -> Self {
        Self {
            result,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::ok(7)).unwrap();
        assert_eq!(body, json!({ "result": 7, "error": null }));
    }

    #[test]
    fn test_empty_list_is_a_result() {
        let body = serde_json::to_value(ApiResponse::ok(Vec::<i64>::new())).unwrap();
        assert_eq!(body, json!({ "result": [], "error": null }));
    }
}
