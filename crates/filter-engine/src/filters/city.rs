//! Filter on the team's city by case-insensitive substring.

use crate::context::RosterContext;
use crate::filters::contains_ignore_case;
use crate::traits::Filter;
use team_catalog::Team;

/// Keeps teams whose city contains the query, ignoring case.
///
/// Teams without a city are treated as having an empty one, so they only
/// survive an empty query.
pub struct CityFilter {
    query_lower: String,
}

impl CityFilter {
    pub fn new(query: &str) -> Self {
        Self {
            query_lower: query.to_lowercase(),
        }
    }
}

impl Filter for CityFilter {
    fn name(&self) -> &str {
        "CityFilter"
    }

    fn keep(&self, team: &Team, _context: &RosterContext<'_>) -> bool {
        contains_ignore_case(team.city_or_empty(), &self.query_lower)
    }
}
