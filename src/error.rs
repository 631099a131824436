use thiserror::Error;

/// Main error type for the planning system
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("API key is required")]
    Credential,

    #[error("Upstream service error: {0}")]
    Upstream(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::Credential => "CREDENTIAL_ERROR",
            PlannerError::Upstream(_) => "UPSTREAM_ERROR",
            PlannerError::Validation(_) => "VALIDATION_ERROR",
            PlannerError::Serialization(_) => "SERIALIZATION_ERROR",
            PlannerError::Unknown(_) => "UNKNOWN_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        })
    }
}
