//! Team name search.

use crate::context::RosterContext;
use crate::filters::contains_ignore_case;
use crate::traits::Filter;
use team_catalog::Team;

/// Keeps teams whose name contains the search term, ignoring case.
pub struct NameFilter {
    term_lower: String,
}

impl NameFilter {
    pub fn new(term: &str) -> Self {
        Self {
            term_lower: term.to_lowercase(),
        }
    }
}

impl Filter for NameFilter {
    fn name(&self) -> &str {
        "NameFilter"
    }

    fn keep(&self, team: &Team, _context: &RosterContext<'_>) -> bool {
        contains_ignore_case(&team.name, &self.term_lower)
    }
}
