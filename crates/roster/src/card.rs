//! View models for the roster grid and the discovery strip.

use serde::Serialize;
use team_catalog::Team;

/// Shown in place of the grid when no followed team matches the filters.
pub const EMPTY_STATE_MESSAGE: &str = "条件に合うフォロー中のチームはありません。";

pub const REMOVE_FAVORITE_LABEL: &str = "★解除";
pub const ADD_FAVORITE_LABEL: &str = "☆追加";

/// Placeholder for a missing available-slots text
pub const NO_SLOTS_PLACEHOLDER: &str = "-";

/// Everything a followed-team card displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamCard {
    pub team_id: String,
    pub name: String,
    pub logo_url: String,
    /// `prefecture` or `prefecture, city`
    pub location: String,
    /// Abbreviated level, e.g. `中級`
    pub level: String,
    pub rating: f32,
    pub available_slots: String,
    pub is_favorite: bool,
    pub favorite_label: &'static str,
}

impl From<&Team> for TeamCard {
    fn from(team: &Team) -> Self {
        let location = match &team.city {
            Some(city) => format!("{}, {}", team.prefecture, city),
            None => team.prefecture.to_string(),
        };
        let favorite_label = if team.is_favorite {
            REMOVE_FAVORITE_LABEL
        } else {
            ADD_FAVORITE_LABEL
        };

        Self {
            team_id: team.id.clone(),
            name: team.name.clone(),
            logo_url: team.logo_url.clone(),
            location,
            level: team.level.abbreviation(),
            rating: team.rating,
            available_slots: team
                .available_slots_text
                .clone()
                .unwrap_or_else(|| NO_SLOTS_PLACEHOLDER.to_string()),
            is_favorite: team.is_favorite,
            favorite_label,
        }
    }
}

/// A suggested team in the "discover new teams" strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryCard {
    pub team_id: String,
    pub name: String,
    pub prefecture: String,
}

impl From<&Team> for DiscoveryCard {
    fn from(team: &Team) -> Self {
        Self {
            team_id: team.id.clone(),
            name: team.name.clone(),
            prefecture: team.prefecture.to_string(),
        }
    }
}
