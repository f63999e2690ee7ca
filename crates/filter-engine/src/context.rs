//! Per-evaluation context shared by all filters.

use std::collections::HashSet;
use team_catalog::Team;

/// Snapshot of the user's relationship to the catalog.
///
/// Built once per evaluation so filters get O(1) membership checks
/// instead of scanning the followed list for every candidate.
#[derive(Debug, Clone, Default)]
pub struct RosterContext<'a> {
    pub followed_ids: HashSet<&'a str>,
    pub managed_team_id: Option<&'a str>,
}

impl<'a> RosterContext<'a> {
    pub fn new(followed: &'a [Team], managed_team_id: Option<&'a str>) -> Self {
        Self {
            followed_ids: followed.iter().map(|team| team.id.as_str()).collect(),
            managed_team_id,
        }
    }

    pub fn is_followed(&self, team_id: &str) -> bool {
        self.followed_ids.contains(team_id)
    }

    pub fn is_managed(&self, team_id: &str) -> bool {
        self.managed_team_id == Some(team_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use team_catalog::Prefecture;

    #[test]
    fn test_context_membership() {
        let followed = vec![
            Team::new("1", "Shibuya FC", Prefecture::Tokyo),
            Team::new("2", "Osaka United", Prefecture::Osaka),
        ];
        let context = RosterContext::new(&followed, Some("9"));

        assert!(context.is_followed("1"));
        assert!(!context.is_followed("3"));
        assert!(context.is_managed("9"));
        assert!(!context.is_managed("1"));
    }

    #[test]
    fn test_default_context_is_empty() {
        let context = RosterContext::default();
        assert!(context.followed_ids.is_empty());
        assert!(!context.is_managed(""));
    }
}
