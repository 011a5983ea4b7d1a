//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Roster Requests
// ============================================================================

/// Add a user to the roster
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddUserRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
}

/// Delete a user from the roster
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DeleteUserRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
}

// ============================================================================
// Completion Requests
// ============================================================================

/// Single-turn completion prompt
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PromptRequest {
    #[validate(length(min = 1, message = "Prompt is required"))]
    pub q: String,
}
