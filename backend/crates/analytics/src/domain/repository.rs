//! Repository Trait
//!
//! Read-only aggregation interface over the kudos data set. Soft-deleted
//! kudos, teams, and categories never count.

use chrono::{DateTime, Utc};

use crate::error::AnalyticsResult;

/// One leaderboard row: a team or category with its kudos count inside
/// the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopEntry {
    pub id: i64,
    pub name: String,
    pub kudos_count: i64,
}

/// Summary counters. Only the kudos total respects the window; team and
/// category totals are all-time active counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total_kudos: i64,
    pub total_teams: i64,
    pub total_categories: i64,
}

/// Analytics repository trait
#[trait_variant::make(AnalyticsRepository: Send)]
pub trait LocalAnalyticsRepository {
    /// Teams ranked by kudos received since the cutoff (all-time when
    /// None), count descending, ties broken by id ascending.
    async fn top_teams(
        &self,
        cutoff: Option<DateTime<Utc>>,
        limit: i64,
    ) -> AnalyticsResult<Vec<TopEntry>>;

    /// Categories ranked the same way.
    async fn top_categories(
        &self,
        cutoff: Option<DateTime<Utc>>,
        limit: i64,
    ) -> AnalyticsResult<Vec<TopEntry>>;

    /// Live kudos given since the cutoff (all-time when None).
    async fn count_kudos(&self, cutoff: Option<DateTime<Utc>>) -> AnalyticsResult<i64>;

    /// Live team count, unwindowed.
    async fn count_teams(&self) -> AnalyticsResult<i64>;

    /// Live category count, unwindowed.
    async fn count_categories(&self) -> AnalyticsResult<i64>;
}

#[cfg(test)]
pub mod test_support {
    //! In-memory aggregation source for use-case tests.

    use super::*;

    /// A single kudos event as the aggregator sees it.
    #[derive(Debug, Clone)]
    pub struct KudosEvent {
        pub team_id: i64,
        pub category_id: i64,
        pub created_at: DateTime<Utc>,
    }

    pub struct InMemoryAnalyticsRepository {
        pub events: Vec<KudosEvent>,
        pub team_names: Vec<(i64, String)>,
        pub category_names: Vec<(i64, String)>,
    }

    impl InMemoryAnalyticsRepository {
        fn rank(
            &self,
            names: &[(i64, String)],
            key: fn(&KudosEvent) -> i64,
            cutoff: Option<DateTime<Utc>>,
            limit: i64,
        ) -> Vec<TopEntry> {
            let mut entries: Vec<TopEntry> = names
                .iter()
                .map(|(id, name)| TopEntry {
                    id: *id,
                    name: name.clone(),
                    kudos_count: self
                        .events
                        .iter()
                        .filter(|e| key(e) == *id && cutoff.map_or(true, |c| e.created_at >= c))
                        .count() as i64,
                })
                .filter(|entry| entry.kudos_count > 0)
                .collect();
            entries.sort_by(|a, b| {
                b.kudos_count.cmp(&a.kudos_count).then(a.id.cmp(&b.id))
            });
            entries.truncate(limit as usize);
            entries
        }
    }

    impl AnalyticsRepository for InMemoryAnalyticsRepository {
        async fn top_teams(
            &self,
            cutoff: Option<DateTime<Utc>>,
            limit: i64,
        ) -> AnalyticsResult<Vec<TopEntry>> {
            Ok(self.rank(&self.team_names, |e| e.team_id, cutoff, limit))
        }

        async fn top_categories(
            &self,
            cutoff: Option<DateTime<Utc>>,
            limit: i64,
        ) -> AnalyticsResult<Vec<TopEntry>> {
            Ok(self.rank(&self.category_names, |e| e.category_id, cutoff, limit))
        }

        async fn count_kudos(&self, cutoff: Option<DateTime<Utc>>) -> AnalyticsResult<i64> {
            Ok(self
                .events
                .iter()
                .filter(|e| cutoff.map_or(true, |c| e.created_at >= c))
                .count() as i64)
        }

        async fn count_teams(&self) -> AnalyticsResult<i64> {
            Ok(self.team_names.len() as i64)
        }

        async fn count_categories(&self) -> AnalyticsResult<i64> {
            Ok(self.category_names.len() as i64)
        }
    }
}
