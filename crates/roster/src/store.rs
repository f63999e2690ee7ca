//! In-memory owner of follow and favorite state.
//!
//! The roster page reads snapshots from here and sends intents back;
//! this is the only place the followed list changes.

use crate::events::RosterIntent;
use anyhow::{anyhow, Result};
use std::sync::Arc;
use team_catalog::{FollowedEntry, Team, TeamCatalog};
use tracing::{debug, info};

/// Follow state layered over a shared, read-only catalog.
pub struct FollowStore {
    catalog: Arc<TeamCatalog>,
    followed: Vec<FollowedEntry>,
}

impl FollowStore {
    /// Seed the store from the catalog's followed list.
    pub fn new(catalog: Arc<TeamCatalog>) -> Self {
        let followed = catalog.followed().to_vec();
        Self { catalog, followed }
    }

    pub fn catalog(&self) -> &Arc<TeamCatalog> {
        &self.catalog
    }

    pub fn is_followed(&self, team_id: &str) -> bool {
        self.position(team_id).is_some()
    }

    pub fn is_favorite(&self, team_id: &str) -> bool {
        self.position(team_id)
            .is_some_and(|pos| self.followed[pos].is_favorite)
    }

    /// Followed teams in follow order, with `is_favorite` applied.
    pub fn followed_teams(&self) -> Vec<Team> {
        self.followed
            .iter()
            .filter_map(|entry| {
                self.catalog
                    .get_team(&entry.team_id)
                    .map(|team| team.clone().with_favorite(entry.is_favorite))
            })
            .collect()
    }

    /// Follow a catalog team. Returns `false` if it was already followed.
    pub fn follow(&mut self, team_id: &str) -> Result<bool> {
        if !self.catalog.contains_team(team_id) {
            return Err(anyhow!("Team {} not found", team_id));
        }
        if self.is_followed(team_id) {
            debug!("Team {} already followed", team_id);
            return Ok(false);
        }
        self.followed.push(FollowedEntry::new(team_id, false));
        info!("Followed team {}", team_id);
        Ok(true)
    }

    /// Stop following a team. Returns `false` if it wasn't followed.
    pub fn unfollow(&mut self, team_id: &str) -> bool {
        match self.position(team_id) {
            Some(pos) => {
                self.followed.remove(pos);
                info!("Unfollowed team {}", team_id);
                true
            }
            None => false,
        }
    }

    /// Flip the favorite flag of a followed team and return the new value.
    pub fn toggle_favorite(&mut self, team_id: &str) -> Result<bool> {
        let pos = self
            .position(team_id)
            .ok_or_else(|| anyhow!("Team {} is not followed", team_id))?;
        let entry = &mut self.followed[pos];
        entry.is_favorite = !entry.is_favorite;
        info!("Team {} favorite = {}", team_id, entry.is_favorite);
        Ok(entry.is_favorite)
    }

    /// Apply a recorded intent. Selecting a team changes no follow state.
    pub fn apply(&mut self, intent: &RosterIntent) -> Result<()> {
        match intent {
            RosterIntent::SelectTeam(id) => {
                debug!("Team {} selected; nothing to store", id);
            }
            RosterIntent::ToggleFavorite(id) => {
                self.toggle_favorite(id)?;
            }
            RosterIntent::Unfollow(id) => {
                self.unfollow(id);
            }
            RosterIntent::Follow(id) => {
                self.follow(id)?;
            }
        }
        Ok(())
    }

    fn position(&self, team_id: &str) -> Option<usize> {
        self.followed.iter().position(|entry| entry.team_id == team_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use team_catalog::Prefecture;

    fn create_test_catalog() -> Arc<TeamCatalog> {
        let teams = vec![
            Team::new("1", "Shibuya FC", Prefecture::Tokyo),
            Team::new("2", "Osaka United", Prefecture::Osaka),
            Team::new("3", "Hakata Stars", Prefecture::Fukuoka),
        ];
        let followed = vec![FollowedEntry::new("1", true)];
        Arc::new(TeamCatalog::from_parts(teams, followed).unwrap())
    }

    #[test]
    fn test_seeded_from_catalog() {
        let store = FollowStore::new(create_test_catalog());
        let followed = store.followed_teams();

        assert_eq!(followed.len(), 1);
        assert_eq!(followed[0].id, "1");
        assert!(followed[0].is_favorite);
    }

    #[test]
    fn test_follow_appends_once() {
        let mut store = FollowStore::new(create_test_catalog());

        assert!(store.follow("3").unwrap());
        assert!(!store.follow("3").unwrap());

        let ids: Vec<String> = store.followed_teams().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert!(!store.is_favorite("3"));
    }

    #[test]
    fn test_follow_unknown_team() {
        let mut store = FollowStore::new(create_test_catalog());
        assert!(store.follow("99").is_err());
    }

    #[test]
    fn test_unfollow() {
        let mut store = FollowStore::new(create_test_catalog());
        assert!(store.unfollow("1"));
        assert!(!store.unfollow("1"));
        assert!(store.followed_teams().is_empty());
    }

    #[test]
    fn test_toggle_favorite() {
        let mut store = FollowStore::new(create_test_catalog());
        assert!(!store.toggle_favorite("1").unwrap());
        assert!(store.toggle_favorite("1").unwrap());
        assert!(store.toggle_favorite("2").is_err());
    }

    #[test]
    fn test_apply_intents() {
        let mut store = FollowStore::new(create_test_catalog());

        store.apply(&RosterIntent::Follow("2".to_string())).unwrap();
        store.apply(&RosterIntent::ToggleFavorite("2".to_string())).unwrap();
        store.apply(&RosterIntent::Unfollow("1".to_string())).unwrap();
        store.apply(&RosterIntent::SelectTeam("3".to_string())).unwrap();

        let followed = store.followed_teams();
        assert_eq!(followed.len(), 1);
        assert_eq!(followed[0].id, "2");
        assert!(followed[0].is_favorite);
    }
}
