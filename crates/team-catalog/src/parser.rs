//! Parser for team catalog data files.
//!
//! Both files are UTF-8, one record per line, fields separated by `::`:
//! - teams.dat: id::name::prefecture::city::level::rating::logo_url::available_slots
//! - followed.dat: team_id::favorite
//!
//! Empty `city` / `available_slots` fields mean the value is absent.

use crate::error::{CatalogError, Result};
use crate::types::*;
use std::fs;
use std::path::Path;
use std::str::Split;

pub const TEAMS_FILE: &str = "teams.dat";
pub const FOLLOWED_FILE: &str = "followed.dat";

/// Read a file and return its non-empty lines, paired with 1-based line numbers
fn read_lines(path: &Path) -> Result<Vec<(usize, String)>> {
    let content = fs::read_to_string(path)?;
    Ok(numbered_lines(&content))
}

fn numbered_lines(content: &str) -> Vec<(usize, String)> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim().to_string()))
        .filter(|(_, line)| !line.is_empty())
        .collect()
}

/// Pull the next `::` field or report which one is missing
fn next_field<'a>(
    parts: &mut Split<'a, &'static str>,
    file: &str,
    line: usize,
    field: &str,
) -> Result<&'a str> {
    parts.next().ok_or_else(|| CatalogError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Missing {}", field),
    })
}

fn optional_text(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Parse the teams.dat file
pub fn parse_teams(path: &Path) -> Result<Vec<Team>> {
    let lines = read_lines(path)?;
    parse_team_lines(&lines)
}

/// Parse already-split teams.dat lines
pub fn parse_team_lines(lines: &[(usize, String)]) -> Result<Vec<Team>> {
    let mut teams = Vec::with_capacity(lines.len());

    for (line_no, line) in lines {
        let line_no = *line_no;
        let mut parts = line.split("::");

        let id = next_field(&mut parts, TEAMS_FILE, line_no, "id")?;
        let name = next_field(&mut parts, TEAMS_FILE, line_no, "name")?;
        let prefecture = next_field(&mut parts, TEAMS_FILE, line_no, "prefecture")?;
        let city = next_field(&mut parts, TEAMS_FILE, line_no, "city")?;
        let level = next_field(&mut parts, TEAMS_FILE, line_no, "level")?;
        let rating = next_field(&mut parts, TEAMS_FILE, line_no, "rating")?;
        let logo_url = next_field(&mut parts, TEAMS_FILE, line_no, "logo_url")?;
        let slots = next_field(&mut parts, TEAMS_FILE, line_no, "available_slots")?;

        if parts.next().is_some() {
            return Err(CatalogError::ParseError {
                file: TEAMS_FILE.to_string(),
                line: line_no,
                reason: "Too many fields".to_string(),
            });
        }
        if id.is_empty() {
            return Err(CatalogError::ParseError {
                file: TEAMS_FILE.to_string(),
                line: line_no,
                reason: "Empty id".to_string(),
            });
        }

        let rating: f32 = rating.parse().map_err(|e| CatalogError::ParseError {
            file: TEAMS_FILE.to_string(),
            line: line_no,
            reason: format!("Invalid rating: {}", e),
        })?;

        teams.push(Team {
            id: id.to_string(),
            name: name.to_string(),
            prefecture: prefecture.parse()?,
            city: optional_text(city),
            level: level.parse()?,
            rating,
            logo_url: logo_url.to_string(),
            available_slots_text: optional_text(slots),
            is_favorite: false,
        });
    }

    Ok(teams)
}

/// Parse the followed.dat file
pub fn parse_followed(path: &Path) -> Result<Vec<FollowedEntry>> {
    let lines = read_lines(path)?;
    parse_followed_lines(&lines)
}

/// Parse already-split followed.dat lines
pub fn parse_followed_lines(lines: &[(usize, String)]) -> Result<Vec<FollowedEntry>> {
    let mut entries = Vec::with_capacity(lines.len());

    for (line_no, line) in lines {
        let line_no = *line_no;
        let mut parts = line.split("::");

        let team_id = next_field(&mut parts, FOLLOWED_FILE, line_no, "team_id")?;
        let favorite = next_field(&mut parts, FOLLOWED_FILE, line_no, "favorite")?;

        let is_favorite = match favorite {
            "0" => false,
            "1" => true,
            other => {
                return Err(CatalogError::ParseError {
                    file: FOLLOWED_FILE.to_string(),
                    line: line_no,
                    reason: format!("Invalid favorite flag: {}", other),
                });
            }
        };

        entries.push(FollowedEntry::new(team_id, is_favorite));
    }

    Ok(entries)
}

/// Split raw file content into numbered, trimmed, non-empty lines.
///
/// Exposed so callers holding content in memory can use the line parsers.
pub fn split_lines(content: &str) -> Vec<(usize, String)> {
    numbered_lines(content)
}
