//! Core traits for the filter engine.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to team lists.

use crate::context::RosterContext;
use team_catalog::Team;

/// Core trait for filtering teams.
///
/// A filter only decides whether a single team stays. Ordering and
/// truncation belong to the [`FilterPipeline`](crate::FilterPipeline), so
/// every pipeline is a stable filter over its input.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `team` passes this filter.
    fn keep(&self, team: &Team, context: &RosterContext<'_>) -> bool;
}
