//! # Roster Page
//!
//! Holds the inputs of the followed-teams page and serves the lists
//! derived from them:
//! 1. Followed teams narrowed by the current filter criteria
//! 2. A short sample of catalog teams the user could follow
//!
//! Both lists come from the pure functions in `filter_engine` and are
//! cached. A setter clears only the caches that depend on the input it
//! changes, and only when the value actually differs.
//!
//! User actions are forwarded to a [`RosterEvents`] implementation; the
//! page never edits its own snapshot in response to them.

use std::cell::OnceCell;

use anyhow::{anyhow, Result};
use tracing::{debug, instrument};

use crate::card::{DiscoveryCard, TeamCard, EMPTY_STATE_MESSAGE};
use crate::events::RosterEvents;
use filter_engine::{
    compute_discovery_sample, compute_filtered_followed, FilterCriteria, DEFAULT_DISCOVERY_LIMIT,
};
use team_catalog::{Prefecture, Team};

/// State and derived views of the followed-teams page.
pub struct RosterPage<E: RosterEvents> {
    followed_teams: Vec<Team>,
    all_teams: Vec<Team>,
    managed_team_id: Option<String>,
    criteria: FilterCriteria,
    discovery_limit: usize,

    // depends on followed_teams + criteria
    filtered: OnceCell<Vec<Team>>,
    // depends on followed_teams + all_teams + managed_team_id + discovery_limit
    sample: OnceCell<Vec<Team>>,

    events: E,
}

impl<E: RosterEvents> RosterPage<E> {
    /// Create a page with empty filters and the default discovery limit.
    pub fn new(
        followed_teams: Vec<Team>,
        all_teams: Vec<Team>,
        managed_team_id: Option<String>,
        events: E,
    ) -> Self {
        Self {
            followed_teams,
            all_teams,
            managed_team_id,
            criteria: FilterCriteria::default(),
            discovery_limit: DEFAULT_DISCOVERY_LIMIT,
            filtered: OnceCell::new(),
            sample: OnceCell::new(),
            events,
        }
    }

    // -------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------

    pub fn set_followed_teams(&mut self, followed_teams: Vec<Team>) {
        if self.followed_teams != followed_teams {
            self.followed_teams = followed_teams;
            self.invalidate_filtered();
            self.invalidate_sample();
        }
    }

    pub fn set_all_teams(&mut self, all_teams: Vec<Team>) {
        if self.all_teams != all_teams {
            self.all_teams = all_teams;
            self.invalidate_sample();
        }
    }

    pub fn set_managed_team_id(&mut self, managed_team_id: Option<String>) {
        if self.managed_team_id != managed_team_id {
            self.managed_team_id = managed_team_id;
            self.invalidate_sample();
        }
    }

    pub fn set_discovery_limit(&mut self, limit: usize) {
        if self.discovery_limit != limit {
            self.discovery_limit = limit;
            self.invalidate_sample();
        }
    }

    /// Select a prefecture, or `None` for all of them.
    pub fn set_prefecture(&mut self, prefecture: Option<Prefecture>) {
        if self.criteria.prefecture != prefecture {
            self.criteria.prefecture = prefecture;
            self.invalidate_filtered();
        }
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        let city = city.into();
        if self.criteria.city != city {
            self.criteria.city = city;
            self.invalidate_filtered();
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.criteria.name != name {
            self.criteria.name = name;
            self.invalidate_filtered();
        }
    }

    /// Reset every filter to "match all".
    pub fn clear_filters(&mut self) {
        if !self.criteria.is_empty() {
            self.criteria = FilterCriteria::default();
            self.invalidate_filtered();
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn followed_teams(&self) -> &[Team] {
        &self.followed_teams
    }

    pub fn managed_team_id(&self) -> Option<&str> {
        self.managed_team_id.as_deref()
    }

    pub fn discovery_limit(&self) -> usize {
        self.discovery_limit
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    // -------------------------------------------------------------------
    // Derived views
    // -------------------------------------------------------------------

    /// Followed teams that match the current criteria, in follow order.
    pub fn filtered_followed(&self) -> &[Team] {
        self.filtered.get_or_init(|| {
            let filtered: Vec<Team> = compute_filtered_followed(&self.followed_teams, &self.criteria)
                .into_iter()
                .cloned()
                .collect();
            debug!(
                "Recomputed filtered roster: {} of {} followed teams",
                filtered.len(),
                self.followed_teams.len()
            );
            filtered
        })
    }

    /// Catalog teams offered for following.
    pub fn discovery_sample(&self) -> &[Team] {
        self.sample.get_or_init(|| {
            let sample: Vec<Team> = compute_discovery_sample(
                &self.all_teams,
                &self.followed_teams,
                self.managed_team_id.as_deref(),
                self.discovery_limit,
            )
            .into_iter()
            .cloned()
            .collect();
            debug!("Recomputed discovery sample: {} teams", sample.len());
            sample
        })
    }

    pub fn filtered_is_cached(&self) -> bool {
        self.filtered.get().is_some()
    }

    pub fn sample_is_cached(&self) -> bool {
        self.sample.get().is_some()
    }

    pub fn cards(&self) -> Vec<TeamCard> {
        self.filtered_followed().iter().map(TeamCard::from).collect()
    }

    pub fn discovery_cards(&self) -> Vec<DiscoveryCard> {
        self.discovery_sample().iter().map(DiscoveryCard::from).collect()
    }

    /// The "no matches" message, when the filtered roster is empty.
    pub fn empty_state(&self) -> Option<&'static str> {
        self.filtered_followed()
            .is_empty()
            .then_some(EMPTY_STATE_MESSAGE)
    }

    // -------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------

    /// Open a team shown on the page, either in the roster or the suggestions.
    #[instrument(skip(self))]
    pub fn select_team(&mut self, team_id: &str) -> Result<()> {
        let team = find(self.filtered_followed(), team_id)
            .or_else(|| find(self.discovery_sample(), team_id))
            .cloned()
            .ok_or_else(|| anyhow!("Team {} is not shown on the page", team_id))?;
        self.events.on_select_team(&team);
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn toggle_favorite(&mut self, team_id: &str) -> Result<()> {
        if find(&self.followed_teams, team_id).is_none() {
            return Err(anyhow!("Team {} is not followed", team_id));
        }
        self.events.on_toggle_favorite(team_id);
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn unfollow(&mut self, team_id: &str) -> Result<()> {
        let team = find(&self.followed_teams, team_id)
            .cloned()
            .ok_or_else(|| anyhow!("Team {} is not followed", team_id))?;
        self.events.on_unfollow(&team);
        Ok(())
    }

    /// Follow one of the suggested teams.
    #[instrument(skip(self))]
    pub fn follow(&mut self, team_id: &str) -> Result<()> {
        let team = find(self.discovery_sample(), team_id)
            .cloned()
            .ok_or_else(|| anyhow!("Team {} is not among the suggestions", team_id))?;
        self.events.on_select_to_follow(&team);
        Ok(())
    }

    fn invalidate_filtered(&mut self) {
        self.filtered.take();
    }

    fn invalidate_sample(&mut self) {
        self.sample.take();
    }
}

fn find<'a>(teams: &'a [Team], team_id: &str) -> Option<&'a Team> {
    teams.iter().find(|team| team.id == team_id)
}
