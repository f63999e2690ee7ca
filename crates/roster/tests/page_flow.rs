//! End-to-end tests for the page / store loop.
//!
//! Each user action goes page -> intent queue -> store, and the store's
//! new snapshot is pushed back into the page, as a UI owner would do.

use anyhow::Result;
use filter_engine::{compute_filtered_followed, FilterCriteria};
use roster::{FollowStore, IntentQueue, RosterEvents, RosterPage};
use std::sync::Arc;
use team_catalog::{FollowedEntry, Prefecture, Team, TeamCatalog, TeamLevel};

fn create_test_catalog() -> Arc<TeamCatalog> {
    let teams = vec![
        Team::new("1", "Shibuya FC", Prefecture::Tokyo)
            .with_city("渋谷区")
            .with_level(TeamLevel::Intermediate)
            .with_rating(4.2),
        Team::new("2", "Osaka United", Prefecture::Osaka)
            .with_city("中央区")
            .with_level(TeamLevel::Advanced)
            .with_rating(4.8),
        Team::new("3", "My Club", Prefecture::Kanagawa),
        Team::new("4", "Hakata Stars", Prefecture::Fukuoka),
        Team::new("5", "Sapporo Snow", Prefecture::Hokkaido),
        Team::new("6", "Naha Waves", Prefecture::Okinawa),
    ];
    let followed = vec![FollowedEntry::new("1", false), FollowedEntry::new("2", true)];
    Arc::new(TeamCatalog::from_parts(teams, followed).unwrap())
}

fn create_setup() -> (FollowStore, RosterPage<IntentQueue>) {
    let catalog = create_test_catalog();
    let store = FollowStore::new(catalog.clone());
    let page = RosterPage::new(
        store.followed_teams(),
        catalog.teams().to_vec(),
        Some("3".to_string()),
        IntentQueue::new(),
    );
    (store, page)
}

/// Drain the page's intents into the store and push the new snapshot back.
fn sync(store: &mut FollowStore, page: &mut RosterPage<IntentQueue>) -> Result<()> {
    for intent in page.events_mut().drain() {
        store.apply(&intent)?;
    }
    page.set_followed_teams(store.followed_teams());
    Ok(())
}

fn ids(teams: &[Team]) -> Vec<&str> {
    teams.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn test_follow_from_suggestions() {
    let (mut store, mut page) = create_setup();
    assert_eq!(ids(page.discovery_sample()), vec!["4", "5", "6"]);

    page.follow("5").unwrap();
    sync(&mut store, &mut page).unwrap();

    assert_eq!(ids(page.filtered_followed()), vec!["1", "2", "5"]);
    assert_eq!(ids(page.discovery_sample()), vec!["4", "6"]);
}

#[test]
fn test_follow_never_unfollows() {
    let (mut store, mut page) = create_setup();

    page.follow("4").unwrap();
    sync(&mut store, &mut page).unwrap();

    // the earlier snapshot is untouched
    assert!(store.is_followed("1"));
    assert!(store.is_followed("2"));
    assert!(store.is_followed("4"));
}

#[test]
fn test_unfollow_returns_team_to_suggestions() {
    let (mut store, mut page) = create_setup();
    page.set_discovery_limit(10);

    page.unfollow("1").unwrap();
    sync(&mut store, &mut page).unwrap();

    assert_eq!(ids(page.filtered_followed()), vec!["2"]);
    assert_eq!(ids(page.discovery_sample()), vec!["1", "4", "5", "6"]);
}

#[test]
fn test_toggle_favorite_reflected_in_cards() {
    let (mut store, mut page) = create_setup();
    assert!(!page.cards()[0].is_favorite);

    page.toggle_favorite("1").unwrap();
    // nothing changes until the owner reflects it back
    assert!(!page.cards()[0].is_favorite);

    sync(&mut store, &mut page).unwrap();
    let card = &page.cards()[0];
    assert!(card.is_favorite);
    assert_eq!(card.favorite_label, "★解除");
    assert_eq!(card.location, "東京都, 渋谷区");
    assert_eq!(card.level, "中級");
}

#[test]
fn test_filters_survive_snapshot_updates() {
    let (mut store, mut page) = create_setup();
    page.set_prefecture(Some(Prefecture::Tokyo));
    assert_eq!(ids(page.filtered_followed()), vec!["1"]);

    page.unfollow("1").unwrap();
    sync(&mut store, &mut page).unwrap();

    assert!(page.filtered_followed().is_empty());
    assert!(page.empty_state().is_some());
    assert_eq!(page.criteria().prefecture, Some(Prefecture::Tokyo));
}

fn assert_matches_engine(page: &RosterPage<IntentQueue>) {
    let criteria: FilterCriteria = page.criteria().clone();
    let expected: Vec<&str> = compute_filtered_followed(page.followed_teams(), &criteria)
        .into_iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids(page.filtered_followed()), expected);
}

#[test]
fn test_cached_view_matches_engine() {
    let (mut store, mut page) = create_setup();

    page.set_name("a");
    assert_matches_engine(&page);
    page.set_city("区");
    assert_matches_engine(&page);
    page.set_prefecture(Some(Prefecture::Osaka));
    assert_matches_engine(&page);
    page.set_name("");
    assert_matches_engine(&page);
    page.set_prefecture(None);
    assert_matches_engine(&page);
    page.clear_filters();
    assert_matches_engine(&page);

    page.follow("6").unwrap();
    sync(&mut store, &mut page).unwrap();
    assert_matches_engine(&page);
    assert_eq!(ids(page.filtered_followed()), vec!["1", "2", "6"]);
}

/// A hand-written sink, the way an embedding UI would implement the callbacks.
#[derive(Default)]
struct Recorder {
    follows: Vec<String>,
    unfollows: Vec<String>,
}

impl RosterEvents for Recorder {
    fn on_select_team(&mut self, _team: &Team) {}
    fn on_toggle_favorite(&mut self, _team_id: &str) {}
    fn on_unfollow(&mut self, team: &Team) {
        self.unfollows.push(team.id.clone());
    }
    fn on_select_to_follow(&mut self, team: &Team) {
        self.follows.push(team.id.clone());
    }
}

#[test]
fn test_follow_and_unfollow_are_distinct_callbacks() {
    let catalog = create_test_catalog();
    let mut page = RosterPage::new(
        catalog.followed_teams(),
        catalog.teams().to_vec(),
        None,
        Recorder::default(),
    );

    page.follow("3").unwrap();
    page.unfollow("2").unwrap();

    assert_eq!(page.events().follows, vec!["3"]);
    assert_eq!(page.events().unfollows, vec!["2"]);
}
