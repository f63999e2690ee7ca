//! Core domain types for the team catalog.
//!
//! This module defines the records every other crate reads:
//! - [`Team`] and its enumerated attributes ([`Prefecture`], [`TeamLevel`])
//! - [`FollowedEntry`], one row of the user's followed list
//! - [`TeamCatalog`], the in-memory index holding both

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique, stable identifier for a team
pub type TeamId = String;

// =============================================================================
// Prefecture
// =============================================================================

macro_rules! prefectures {
    ($($variant:ident => $name:literal,)*) => {
        /// Administrative region a team is based in.
        ///
        /// Covers all 47 prefectures. Serialized as the canonical Japanese name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum Prefecture {
            $(
                #[serde(rename = $name)]
                $variant,
            )*
        }

        impl Prefecture {
            /// Every prefecture in JIS X 0401 order (north to south).
            pub const ALL: &'static [Prefecture] = &[$(Prefecture::$variant,)*];

            /// Canonical Japanese name, e.g. `東京都`.
            pub fn name(self) -> &'static str {
                match self {
                    $(Prefecture::$variant => $name,)*
                }
            }
        }
    };
}

prefectures! {
    Hokkaido => "北海道",
    Aomori => "青森県",
    Iwate => "岩手県",
    Miyagi => "宮城県",
    Akita => "秋田県",
    Yamagata => "山形県",
    Fukushima => "福島県",
    Ibaraki => "茨城県",
    Tochigi => "栃木県",
    Gunma => "群馬県",
    Saitama => "埼玉県",
    Chiba => "千葉県",
    Tokyo => "東京都",
    Kanagawa => "神奈川県",
    Niigata => "新潟県",
    Toyama => "富山県",
    Ishikawa => "石川県",
    Fukui => "福井県",
    Yamanashi => "山梨県",
    Nagano => "長野県",
    Gifu => "岐阜県",
    Shizuoka => "静岡県",
    Aichi => "愛知県",
    Mie => "三重県",
    Shiga => "滋賀県",
    Kyoto => "京都府",
    Osaka => "大阪府",
    Hyogo => "兵庫県",
    Nara => "奈良県",
    Wakayama => "和歌山県",
    Tottori => "鳥取県",
    Shimane => "島根県",
    Okayama => "岡山県",
    Hiroshima => "広島県",
    Yamaguchi => "山口県",
    Tokushima => "徳島県",
    Kagawa => "香川県",
    Ehime => "愛媛県",
    Kochi => "高知県",
    Fukuoka => "福岡県",
    Saga => "佐賀県",
    Nagasaki => "長崎県",
    Kumamoto => "熊本県",
    Oita => "大分県",
    Miyazaki => "宮崎県",
    Kagoshima => "鹿児島県",
    Okinawa => "沖縄県",
}

impl fmt::Display for Prefecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exact match against the canonical name; no trimming or normalization.
impl FromStr for Prefecture {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Prefecture::ALL
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or_else(|| CatalogError::InvalidValue {
                field: "prefecture".to_string(),
                value: s.to_string(),
            })
    }
}

// =============================================================================
// Team Level
// =============================================================================

/// Skill tier a team plays at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamLevel {
    #[serde(rename = "初心者")]
    Beginner,
    #[serde(rename = "中級者")]
    Intermediate,
    #[serde(rename = "上級者")]
    Advanced,
    #[serde(rename = "競技志向")]
    Competitive,
}

impl TeamLevel {
    pub const ALL: &'static [TeamLevel] = &[
        TeamLevel::Beginner,
        TeamLevel::Intermediate,
        TeamLevel::Advanced,
        TeamLevel::Competitive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TeamLevel::Beginner => "初心者",
            TeamLevel::Intermediate => "中級者",
            TeamLevel::Advanced => "上級者",
            TeamLevel::Competitive => "競技志向",
        }
    }

    /// First two characters of the label, for compact cards.
    pub fn abbreviation(self) -> String {
        self.label().chars().take(2).collect()
    }
}

impl fmt::Display for TeamLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TeamLevel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TeamLevel::ALL
            .iter()
            .copied()
            .find(|level| level.label() == s)
            .ok_or_else(|| CatalogError::InvalidValue {
                field: "level".to_string(),
                value: s.to_string(),
            })
    }
}

// =============================================================================
// Team
// =============================================================================

/// A team as published by the catalog.
///
/// `is_favorite` is only meaningful for teams in the followed list; it is
/// owned and flipped by whoever owns follow state, never by the readers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub prefecture: Prefecture,
    pub city: Option<String>,
    pub level: TeamLevel,
    pub rating: f32,
    pub logo_url: String,
    pub available_slots_text: Option<String>,
    pub is_favorite: bool,
}

impl Team {
    /// Create a team with the required fields; everything else defaults.
    pub fn new(id: impl Into<TeamId>, name: impl Into<String>, prefecture: Prefecture) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            prefecture,
            city: None,
            level: TeamLevel::Beginner,
            rating: 0.0,
            logo_url: String::new(),
            available_slots_text: None,
            is_favorite: false,
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_level(mut self, level: TeamLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_logo_url(mut self, logo_url: impl Into<String>) -> Self {
        self.logo_url = logo_url.into();
        self
    }

    pub fn with_available_slots(mut self, text: impl Into<String>) -> Self {
        self.available_slots_text = Some(text.into());
        self
    }

    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    /// City, or the empty string when the team has none.
    pub fn city_or_empty(&self) -> &str {
        self.city.as_deref().unwrap_or("")
    }
}

// =============================================================================
// Followed list
// =============================================================================

/// One row of the user's followed list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowedEntry {
    pub team_id: TeamId,
    pub is_favorite: bool,
}

impl FollowedEntry {
    pub fn new(team_id: impl Into<TeamId>, is_favorite: bool) -> Self {
        Self {
            team_id: team_id.into(),
            is_favorite,
        }
    }
}

// =============================================================================
// TeamCatalog
// =============================================================================

/// In-memory catalog: every known team plus the current followed list.
///
/// Teams keep the order they were inserted in, which is the catalog's
/// enumeration order. Lookups by id go through `positions`.
#[derive(Debug)]
pub struct TeamCatalog {
    pub(crate) teams: Vec<Team>,
    pub(crate) positions: HashMap<TeamId, usize>,
    pub(crate) followed: Vec<FollowedEntry>,
}

impl TeamCatalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self {
            teams: Vec::new(),
            positions: HashMap::new(),
            followed: Vec::new(),
        }
    }

    /// Get a team by id
    pub fn get_team(&self, id: &str) -> Option<&Team> {
        self.positions.get(id).map(|&pos| &self.teams[pos])
    }

    pub fn contains_team(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// All teams in enumeration order
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Followed entries in follow order
    pub fn followed(&self) -> &[FollowedEntry] {
        &self.followed
    }

    /// Resolve the followed list into teams, with `is_favorite` applied.
    ///
    /// Entries pointing at unknown teams are skipped; `validate` rejects
    /// those when loading from files.
    pub fn followed_teams(&self) -> Vec<Team> {
        self.followed
            .iter()
            .filter_map(|entry| {
                self.get_team(&entry.team_id)
                    .map(|team| team.clone().with_favorite(entry.is_favorite))
            })
            .collect()
    }

    /// Insert a team. A team with an id already present replaces it in place.
    pub fn insert_team(&mut self, team: Team) {
        match self.positions.get(&team.id) {
            Some(&pos) => self.teams[pos] = team,
            None => {
                self.positions.insert(team.id.clone(), self.teams.len());
                self.teams.push(team);
            }
        }
    }

    /// Append an entry to the followed list
    pub fn insert_followed(&mut self, entry: FollowedEntry) {
        self.followed.push(entry);
    }

    /// Get counts for debugging/validation: (teams, followed)
    pub fn counts(&self) -> (usize, usize) {
        (self.teams.len(), self.followed.len())
    }
}

impl Default for TeamCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefecture_count_and_order() {
        assert_eq!(Prefecture::ALL.len(), 47);
        assert_eq!(Prefecture::ALL[0], Prefecture::Hokkaido);
        assert_eq!(Prefecture::ALL[12], Prefecture::Tokyo);
        assert_eq!(Prefecture::ALL[46], Prefecture::Okinawa);
    }

    #[test]
    fn test_prefecture_from_str_is_exact() {
        assert_eq!("東京都".parse::<Prefecture>().unwrap(), Prefecture::Tokyo);
        assert_eq!("大阪府".parse::<Prefecture>().unwrap(), Prefecture::Osaka);
        assert!("東京".parse::<Prefecture>().is_err());
        assert!(" 東京都".parse::<Prefecture>().is_err());
        assert!("".parse::<Prefecture>().is_err());
    }

    #[test]
    fn test_level_abbreviation() {
        assert_eq!(TeamLevel::Beginner.abbreviation(), "初心");
        assert_eq!(TeamLevel::Competitive.abbreviation(), "競技");
        assert_eq!("上級者".parse::<TeamLevel>().unwrap(), TeamLevel::Advanced);
    }

    #[test]
    fn test_insert_team_replaces_in_place() {
        let mut catalog = TeamCatalog::new();
        catalog.insert_team(Team::new("1", "Shibuya FC", Prefecture::Tokyo));
        catalog.insert_team(Team::new("2", "Osaka United", Prefecture::Osaka));
        catalog.insert_team(Team::new("1", "Shibuya FC II", Prefecture::Tokyo));

        assert_eq!(catalog.counts(), (2, 0));
        assert_eq!(catalog.teams()[0].name, "Shibuya FC II");
        assert_eq!(catalog.get_team("2").unwrap().name, "Osaka United");
    }

    #[test]
    fn test_followed_teams_applies_favorite() {
        let mut catalog = TeamCatalog::new();
        catalog.insert_team(Team::new("1", "Shibuya FC", Prefecture::Tokyo));
        catalog.insert_team(Team::new("2", "Osaka United", Prefecture::Osaka));
        catalog.insert_followed(FollowedEntry::new("2", true));
        catalog.insert_followed(FollowedEntry::new("1", false));

        let followed = catalog.followed_teams();
        assert_eq!(followed.len(), 2);
        assert_eq!(followed[0].id, "2");
        assert!(followed[0].is_favorite);
        assert!(!followed[1].is_favorite);
        // the catalog copy is untouched
        assert!(!catalog.get_team("2").unwrap().is_favorite);
    }

    #[test]
    fn test_city_or_empty() {
        let team = Team::new("1", "Shibuya FC", Prefecture::Tokyo);
        assert_eq!(team.city_or_empty(), "");
        assert_eq!(team.with_city("渋谷区").city_or_empty(), "渋谷区");
    }
}
