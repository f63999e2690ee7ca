//! Filter to hide the team the current user manages.

use crate::context::RosterContext;
use crate::traits::Filter;
use team_catalog::Team;

/// Removes the managed team, if the context names one.
pub struct ManagedTeamFilter;

impl Filter for ManagedTeamFilter {
    fn name(&self) -> &str {
        "ManagedTeamFilter"
    }

    fn keep(&self, team: &Team, context: &RosterContext<'_>) -> bool {
        !context.is_managed(&team.id)
    }
}
