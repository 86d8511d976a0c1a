//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kernel::pagination::SortOrder;

use crate::domain::entity::category::Category;
use crate::domain::entity::kudos::KudosDetails;
use crate::domain::entity::team::Team;

// ============================================================================
// Kudos payloads
// ============================================================================

/// Kudos with display names, as exposed over HTTP
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KudosDto {
    pub id: String,
    pub recipient_id: i64,
    pub recipient_name: String,
    pub team_id: i64,
    pub team_name: Option<String>,
    pub category_id: i64,
    pub category_name: Option<String>,
    pub message: String,
    pub created_by: i64,
    pub created_by_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&KudosDetails> for KudosDto {
    fn from(details: &KudosDetails) -> Self {
        Self {
            id: details.id.to_string(),
            recipient_id: details.recipient_id,
            recipient_name: details.recipient_name.clone(),
            team_id: details.team_id,
            team_name: details.team_name.clone(),
            category_id: details.category_id,
            category_name: details.category_name.clone(),
            message: details.message.clone(),
            created_by: details.created_by,
            created_by_name: details.created_by_name.clone(),
            created_at: details.created_at,
        }
    }
}

/// Create kudos request. recipientId stays optional at the DTO level so
/// the domain can report the missing-recipient error itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateKudosRequest {
    pub recipient_id: Option<i64>,
    pub team_id: i64,
    pub category_id: i64,
    pub message: String,
}

/// Query for GET /kudos
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListKudosQuery {
    pub recipient_id: Option<i64>,
    pub team_id: Option<i64>,
    pub category_id: Option<i64>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_order: Option<SortOrder>,
}

/// Query for GET /kudos/search
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchKudosQuery {
    pub query: String,
    pub team_id: Option<i64>,
    pub category_id: Option<i64>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Paginated kudos listing response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KudosListResponse {
    pub kudos: Vec<KudosDto>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
}

// ============================================================================
// Team / Category payloads
// ============================================================================

/// Team response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Team> for TeamDto {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id,
            name: team.name.to_string(),
            created_at: team.created_at,
            updated_at: team.updated_at,
        }
    }
}

/// Category response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Category> for CategoryDto {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.to_string(),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

/// Create/update request for teams and categories
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRequest {
    pub name: String,
}
