//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::period::Period;
use crate::domain::repository::{Stats, TopEntry};

/// Query for GET /analytics
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsQuery {
    pub period: Option<Period>,
    pub limit: Option<u32>,
}

/// Query for GET /analytics/stats
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsQuery {
    pub period: Option<Period>,
}

/// One leaderboard row
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopEntryDto {
    pub id: i64,
    pub name: String,
    pub kudos_count: i64,
}

impl From<&TopEntry> for TopEntryDto {
    fn from(entry: &TopEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            kudos_count: entry.kudos_count,
        }
    }
}

/// Summary counters
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDto {
    pub total_kudos: i64,
    pub total_teams: i64,
    pub total_categories: i64,
}

impl From<Stats> for StatsDto {
    fn from(stats: Stats) -> Self {
        Self {
            total_kudos: stats.total_kudos,
            total_teams: stats.total_teams,
            total_categories: stats.total_categories,
        }
    }
}

/// Combined analytics response: leaderboards plus the counters
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub period: Period,
    pub top_teams: Vec<TopEntryDto>,
    pub top_categories: Vec<TopEntryDto>,
    pub stats: StatsDto,
}

/// Summary counters response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub period: Period,
    pub total_kudos: i64,
    pub total_teams: i64,
    pub total_categories: i64,
}

impl StatsResponse {
    pub fn new(period: Period, stats: Stats) -> Self {
        Self {
            period,
            total_kudos: stats.total_kudos,
            total_teams: stats.total_teams,
            total_categories: stats.total_categories,
        }
    }
}
