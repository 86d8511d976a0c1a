//! Get Analytics Use Case
//!
//! Leaderboards for a rolling window. Top teams and top categories are
//! fetched concurrently.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::period::Period;
use crate::domain::repository::{AnalyticsRepository, Stats, TopEntry};
use crate::error::AnalyticsResult;

/// Default leaderboard size.
pub const DEFAULT_TOP_LIMIT: u32 = 3;
/// Leaderboard size ceiling.
pub const MAX_TOP_LIMIT: u32 = 10;

/// Get analytics output: leaderboards plus the summary counters, in one
/// payload.
pub struct GetAnalyticsOutput {
    pub period: Period,
    pub top_teams: Vec<TopEntry>,
    pub top_categories: Vec<TopEntry>,
    pub stats: Stats,
}

/// Get analytics use case
pub struct GetAnalyticsUseCase<A>
where
    A: AnalyticsRepository,
{
    analytics_repo: Arc<A>,
}

impl<A> GetAnalyticsUseCase<A>
where
    A: AnalyticsRepository + Sync,
{
    pub fn new(analytics_repo: Arc<A>) -> Self {
        Self { analytics_repo }
    }

    pub async fn execute(
        &self,
        period: Period,
        limit: Option<u32>,
    ) -> AnalyticsResult<GetAnalyticsOutput> {
        let limit = limit.unwrap_or(DEFAULT_TOP_LIMIT).clamp(1, MAX_TOP_LIMIT) as i64;
        let cutoff = period.cutoff(Utc::now());

        let (top_teams, top_categories, total_kudos, total_teams, total_categories) = tokio::join!(
            self.analytics_repo.top_teams(cutoff, limit),
            self.analytics_repo.top_categories(cutoff, limit),
            self.analytics_repo.count_kudos(cutoff),
            self.analytics_repo.count_teams(),
            self.analytics_repo.count_categories(),
        );

        Ok(GetAnalyticsOutput {
            period,
            top_teams: top_teams?,
            top_categories: top_categories?,
            stats: Stats {
                total_kudos: total_kudos?,
                total_teams: total_teams?,
                total_categories: total_categories?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repository::test_support::{InMemoryAnalyticsRepository, KudosEvent};
    use chrono::Duration;

    fn repo() -> Arc<InMemoryAnalyticsRepository> {
        let now = Utc::now();
        let mut events = Vec::new();
        // team 1: two recent kudos; team 2: one recent, one stale (10 days)
        events.push(KudosEvent { team_id: 1, category_id: 1, created_at: now });
        events.push(KudosEvent { team_id: 1, category_id: 2, created_at: now });
        events.push(KudosEvent { team_id: 2, category_id: 1, created_at: now });
        events.push(KudosEvent {
            team_id: 2,
            category_id: 1,
            created_at: now - Duration::days(10),
        });

        Arc::new(InMemoryAnalyticsRepository {
            events,
            team_names: vec![(1, "Platform".to_string()), (2, "Mobile".to_string())],
            category_names: vec![(1, "Teamwork".to_string()), (2, "Delivery".to_string())],
        })
    }

    #[tokio::test]
    async fn test_weekly_window_excludes_stale_kudos() {
        let use_case = GetAnalyticsUseCase::new(repo());

        let output = use_case.execute(Period::Weekly, None).await.unwrap();

        let counts: Vec<(i64, i64)> = output
            .top_teams
            .iter()
            .map(|e| (e.id, e.kudos_count))
            .collect();
        // the 10-day-old kudos for team 2 does not count
        assert_eq!(counts, vec![(1, 2), (2, 1)]);

        // the bundled counters use the same window for kudos only
        assert_eq!(output.stats.total_kudos, 3);
        assert_eq!(output.stats.total_teams, 2);
        assert_eq!(output.stats.total_categories, 2);
    }

    #[tokio::test]
    async fn test_all_time_counts_everything() {
        let use_case = GetAnalyticsUseCase::new(repo());

        let output = use_case.execute(Period::AllTime, None).await.unwrap();

        // tie at 2 kudos each; id ascending breaks it
        let ids: Vec<i64> = output.top_teams.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(output.top_teams.iter().all(|e| e.kudos_count == 2));
    }

    #[tokio::test]
    async fn test_limit_defaults_and_clamps() {
        let use_case = GetAnalyticsUseCase::new(repo());

        let capped = use_case.execute(Period::AllTime, Some(1)).await.unwrap();
        assert_eq!(capped.top_teams.len(), 1);

        // out-of-range limits clamp instead of failing
        let clamped = use_case.execute(Period::AllTime, Some(500)).await.unwrap();
        assert_eq!(clamped.top_teams.len(), 2);
    }
}
