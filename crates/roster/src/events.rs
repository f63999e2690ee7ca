//! Outbound notifications from the roster page.
//!
//! The page never changes follow or favorite state itself. It reports what
//! the user asked for through [`RosterEvents`], and the owner of that state
//! reflects the result back as a new snapshot.

use serde::{Deserialize, Serialize};
use team_catalog::{Team, TeamId};

/// Callbacks the roster page fires. Each one is fire-and-forget.
pub trait RosterEvents {
    /// The user wants to see a team's detail view.
    fn on_select_team(&mut self, team: &Team);

    /// The user wants to flip the favorite flag of a followed team.
    fn on_toggle_favorite(&mut self, team_id: &str);

    /// The user wants to stop following a team.
    fn on_unfollow(&mut self, team: &Team);

    /// The user wants to follow a suggested team.
    fn on_select_to_follow(&mut self, team: &Team);
}

/// A user intent, recorded for later handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", content = "team_id", rename_all = "snake_case")]
pub enum RosterIntent {
    SelectTeam(TeamId),
    ToggleFavorite(TeamId),
    Unfollow(TeamId),
    Follow(TeamId),
}

impl RosterIntent {
    pub fn team_id(&self) -> &str {
        match self {
            RosterIntent::SelectTeam(id)
            | RosterIntent::ToggleFavorite(id)
            | RosterIntent::Unfollow(id)
            | RosterIntent::Follow(id) => id,
        }
    }
}

/// [`RosterEvents`] sink that queues every callback as a [`RosterIntent`].
#[derive(Debug, Default)]
pub struct IntentQueue {
    intents: Vec<RosterIntent>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &[RosterIntent] {
        &self.intents
    }

    /// Take every queued intent, oldest first.
    pub fn drain(&mut self) -> Vec<RosterIntent> {
        std::mem::take(&mut self.intents)
    }
}

impl RosterEvents for IntentQueue {
    fn on_select_team(&mut self, team: &Team) {
        self.intents.push(RosterIntent::SelectTeam(team.id.clone()));
    }

    fn on_toggle_favorite(&mut self, team_id: &str) {
        self.intents.push(RosterIntent::ToggleFavorite(team_id.to_string()));
    }

    fn on_unfollow(&mut self, team: &Team) {
        self.intents.push(RosterIntent::Unfollow(team.id.clone()));
    }

    fn on_select_to_follow(&mut self, team: &Team) {
        self.intents.push(RosterIntent::Follow(team.id.clone()));
    }
}
