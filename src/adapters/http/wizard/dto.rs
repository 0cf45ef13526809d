//! HTTP DTOs (Data Transfer Objects) for wizard endpoints.
//!
//! Successful calls respond with `WizardSnapshot` as-is; these types cover
//! request bodies and error payloads.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ErrorCode;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to set the item text.
#[derive(Debug, Clone, Deserialize)]
pub struct SetItemRequest {
    pub item: String,
}

/// Request to set the price text. Any string is accepted and normalized.
#[derive(Debug, Clone, Deserialize)]
pub struct SetPriceRequest {
    pub price: String,
}

/// Request to select a motive by id (`A1`..`A6`).
#[derive(Debug, Clone, Deserialize)]
pub struct SelectMotiveRequest {
    pub motive_id: String,
}

/// Request to answer the commitment question.
#[derive(Debug, Clone, Deserialize)]
pub struct SetAcceptThrowRequest {
    pub accept_throw: bool,
}

// ════════════════════════════════════════════════════════════════════════════════
// Error DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
