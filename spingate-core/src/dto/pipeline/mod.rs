//! Pipeline DTOs for the create endpoint

use serde::{Deserialize, Serialize};

/// Request to create a new pipeline
///
/// Creation accepts only the identity pair; every other field takes a
/// server-side default and is filled in with a later update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePipelineRequest {
    pub application: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_body_shape() {
        let req = CreatePipelineRequest {
            application: "app1".to_string(),
            name: "deploy".to_string(),
        };

        let body = serde_json::to_string(&req).unwrap();
        assert_eq!(body, r#"{"application":"app1","name":"deploy"}"#);
    }
}
