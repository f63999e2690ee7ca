//! The two roster computations.
//!
//! Both are pure: the same inputs always give the same output, and
//! callers are free to re-run them on every input change.

use crate::context::RosterContext;
use crate::criteria::FilterCriteria;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{AlreadyFollowedFilter, ManagedTeamFilter};
use team_catalog::Team;
use tracing::instrument;

/// Number of suggestions shown under "discover new teams".
pub const DEFAULT_DISCOVERY_LIMIT: usize = 3;

/// Followed teams matching every criterion, in their original order.
///
/// An empty result is a normal "no matches" outcome.
#[instrument(level = "debug", skip_all, fields(followed = followed.len()))]
pub fn compute_filtered_followed<'a>(
    followed: &'a [Team],
    criteria: &FilterCriteria,
) -> Vec<&'a Team> {
    criteria
        .to_pipeline()
        .apply(followed, &RosterContext::default())
}

/// The first `limit` catalog teams that are neither followed nor `exclude_id`.
///
/// Catalog order decides which teams make the cut.
#[instrument(level = "debug", skip_all, fields(catalog = catalog.len(), limit = limit))]
pub fn compute_discovery_sample<'a>(
    catalog: &'a [Team],
    followed: &[Team],
    exclude_id: Option<&str>,
    limit: usize,
) -> Vec<&'a Team> {
    if limit == 0 {
        return Vec::new();
    }
    let context = RosterContext::new(followed, exclude_id);
    discovery_pipeline().apply_limited(catalog, &context, limit)
}

fn discovery_pipeline() -> FilterPipeline {
    FilterPipeline::new()
        .add_filter(ManagedTeamFilter)
        .add_filter(AlreadyFollowedFilter)
}

/// Convert a signed limit from user input; negative values select nothing.
pub fn limit_from_signed(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}
