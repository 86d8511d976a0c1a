//! HTTP Handlers

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use std::sync::Arc;

use kernel::response::ApiResponse;

use crate::application::{GetAnalyticsUseCase, GetStatsUseCase};
use crate::domain::repository::AnalyticsRepository;
use crate::error::AnalyticsResult;
use crate::presentation::dto::{
    AnalyticsQuery, AnalyticsResponse, StatsQuery, StatsResponse, TopEntryDto,
};

/// Shared state for analytics handlers
#[derive(Clone)]
pub struct AnalyticsAppState<R>
where
    R: AnalyticsRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /api/analytics?period&limit
pub async fn get_analytics<R>(
    State(state): State<AnalyticsAppState<R>>,
    Query(query): Query<AnalyticsQuery>,
) -> AnalyticsResult<impl IntoResponse>
where
    R: AnalyticsRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetAnalyticsUseCase::new(state.repo.clone());

    let output = use_case
        .execute(query.period.unwrap_or_default(), query.limit)
        .await?;

    Ok(ApiResponse::ok(AnalyticsResponse {
        period: output.period,
        top_teams: output.top_teams.iter().map(TopEntryDto::from).collect(),
        top_categories: output
            .top_categories
            .iter()
            .map(TopEntryDto::from)
            .collect(),
        stats: output.stats.into(),
    }))
}

/// GET /api/analytics/stats?period
pub async fn get_stats<R>(
    State(state): State<AnalyticsAppState<R>>,
    Query(query): Query<StatsQuery>,
) -> AnalyticsResult<impl IntoResponse>
where
    R: AnalyticsRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetStatsUseCase::new(state.repo.clone());

    let period = query.period.unwrap_or_default();
    let stats = use_case.execute(period).await?;

    Ok(ApiResponse::ok(StatsResponse::new(period, stats)))
}
