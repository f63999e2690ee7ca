//! The FilterPipeline chains multiple filters.
//!
//! This module provides the FilterPipeline struct that composes
//! filters using the builder pattern and runs them as a stable filter.

use crate::context::RosterContext;
use crate::traits::Filter;
use team_catalog::Team;
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(PrefectureFilter::new(Some(Prefecture::Tokyo)))
///     .add_filter(NameFilter::new("fc"));
///
/// let visible = pipeline.apply(&followed, &RosterContext::default());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Whether `team` passes every filter.
    pub fn keeps(&self, team: &Team, context: &RosterContext<'_>) -> bool {
        self.filters.iter().all(|filter| filter.keep(team, context))
    }

    /// Apply all filters in sequence, one stage at a time.
    ///
    /// ## Algorithm
    /// 1. Start with every team, in input order
    /// 2. For each filter in order, retain the teams it keeps,
    ///    logging the counts around each stage
    /// 3. Return the survivors, still in input order
    pub fn apply<'t>(&self, teams: &'t [Team], context: &RosterContext<'_>) -> Vec<&'t Team> {
        let mut current: Vec<&'t Team> = teams.iter().collect();
        for filter in &self.filters {
            debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current.retain(|team| filter.keep(team, context));
            debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    /// Collect the first `limit` teams that pass every filter.
    ///
    /// Scanning stops as soon as `limit` teams are found, so this is a
    /// prefix selection over `teams`, not a ranking.
    pub fn apply_limited<'t>(
        &self,
        teams: &'t [Team],
        context: &RosterContext<'_>,
        limit: usize,
    ) -> Vec<&'t Team> {
        let selected: Vec<&'t Team> = teams
            .iter()
            .filter(|team| self.keeps(team, context))
            .take(limit)
            .collect();
        debug!(
            "Selected {} of at most {} teams ({} filters)",
            selected.len(),
            limit,
            self.filters.len()
        );
        selected
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
