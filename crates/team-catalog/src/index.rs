//! TeamCatalog loading and validation.
//!
//! Builds the catalog from `teams.dat` and `followed.dat`:
//! - both files are parsed in parallel
//! - teams are indexed by id in file order
//! - the followed list is checked against the catalog

use crate::error::{CatalogError, Result};
use crate::parser::{self, FOLLOWED_FILE, TEAMS_FILE};
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument};

impl TeamCatalog {
    /// Load a catalog from a directory holding `teams.dat` and `followed.dat`.
    ///
    /// Steps:
    /// 1. Parse both files in parallel
    /// 2. Insert teams, rejecting duplicate ids
    /// 3. Append followed entries
    /// 4. Validate integrity
    #[instrument(skip_all, fields(data_dir = %data_dir.display()))]
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        let teams_path = data_dir.join(TEAMS_FILE);
        let followed_path = data_dir.join(FOLLOWED_FILE);

        let (teams, followed) = rayon::join(
            || parser::parse_teams(&teams_path),
            || parser::parse_followed(&followed_path),
        );
        let teams = teams?;
        let followed = followed?;

        debug!("Parsed {} teams, {} followed entries", teams.len(), followed.len());

        let catalog = Self::from_parts(teams, followed)?;

        let (team_count, followed_count) = catalog.counts();
        info!("Loaded catalog with {} teams ({} followed)", team_count, followed_count);
        Ok(catalog)
    }

    /// Build and validate a catalog from already-parsed records.
    pub fn from_parts(teams: Vec<Team>, followed: Vec<FollowedEntry>) -> Result<Self> {
        let mut catalog = TeamCatalog::new();

        for team in teams {
            if catalog.contains_team(&team.id) {
                return Err(CatalogError::DuplicateTeam {
                    collection: "catalog".to_string(),
                    id: team.id,
                });
            }
            catalog.insert_team(team);
        }

        for entry in followed {
            catalog.insert_followed(entry);
        }

        catalog.validate()?;
        Ok(catalog)
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - Every followed id exists in the catalog
    /// - No team is followed twice
    /// - Ratings are finite numbers
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.followed.len());
        for entry in &self.followed {
            if !self.contains_team(&entry.team_id) {
                return Err(CatalogError::MissingReference {
                    entity: "Team".to_string(),
                    id: entry.team_id.clone(),
                });
            }
            if !seen.insert(entry.team_id.as_str()) {
                return Err(CatalogError::DuplicateTeam {
                    collection: "followed".to_string(),
                    id: entry.team_id.clone(),
                });
            }
        }

        for team in &self.teams {
            if !team.rating.is_finite() {
                return Err(CatalogError::InvalidValue {
                    field: "rating".to_string(),
                    value: team.rating.to_string(),
                });
            }
        }
        Ok(())
    }
}
