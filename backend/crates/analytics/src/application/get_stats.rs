//! Get Stats Use Case
//!
//! Summary counters. Only the kudos total respects the requested window;
//! team and category totals are always all-time active counts.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::period::Period;
use crate::domain::repository::{AnalyticsRepository, Stats};
use crate::error::AnalyticsResult;

/// Get stats use case
pub struct GetStatsUseCase<A>
where
    A: AnalyticsRepository,
{
    analytics_repo: Arc<A>,
}

impl<A> GetStatsUseCase<A>
where
    A: AnalyticsRepository + Sync,
{
    pub fn new(analytics_repo: Arc<A>) -> Self {
        Self { analytics_repo }
    }

    pub async fn execute(&self, period: Period) -> AnalyticsResult<Stats> {
        let cutoff = period.cutoff(Utc::now());

        let (total_kudos, total_teams, total_categories) = tokio::join!(
            self.analytics_repo.count_kudos(cutoff),
            self.analytics_repo.count_teams(),
            self.analytics_repo.count_categories(),
        );

        Ok(Stats {
            total_kudos: total_kudos?,
            total_teams: total_teams?,
            total_categories: total_categories?,
        })
    }
}
