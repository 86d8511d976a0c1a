//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kernel::pagination::SortOrder;

use crate::domain::entity::user::User;
use crate::domain::value_object::user_role::UserRole;

// ============================================================================
// User payload
// ============================================================================

/// User as exposed over HTTP; the password hash never leaves the backend
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub team_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.name.first().to_string(),
            last_name: user.name.last().to_string(),
            full_name: user.full_name(),
            email: user.email.to_string(),
            role: user.role,
            team_id: user.team_id,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub team_id: Option<i64>,
}

/// Sign up response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub user_exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: UserDto,
}

// ============================================================================
// User search / listing
// ============================================================================

/// Query for GET /users/search
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchUsersQuery {
    pub search_text: String,
}

/// Query for GET /users
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersQuery {
    pub role: Option<UserRole>,
    pub team_id: Option<i64>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_order: Option<SortOrder>,
}

/// Paginated user listing response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListResponse {
    pub users: Vec<UserDto>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
}

// ============================================================================
// Role management
// ============================================================================

/// Update role request (role and teamId are each optional; at least one
/// must be present)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    pub user_id: i64,
    pub role: Option<UserRole>,
    pub team_id: Option<i64>,
}

/// Delete user request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserRequest {
    pub user_id: i64,
}
