//! Filter to remove teams the user already follows.
//!
//! There's no point suggesting a team that is already on the roster.

use crate::context::RosterContext;
use crate::traits::Filter;
use team_catalog::Team;

/// Removes teams whose id is in the followed set.
///
/// ## Algorithm
/// Uses the HashSet in RosterContext.followed_ids for O(1) lookups.
pub struct AlreadyFollowedFilter;

impl Filter for AlreadyFollowedFilter {
    fn name(&self) -> &str {
        "AlreadyFollowedFilter"
    }

    fn keep(&self, team: &Team, context: &RosterContext<'_>) -> bool {
        !context.is_followed(&team.id)
    }
}
