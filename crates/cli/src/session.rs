//! Interactive roster session.
//!
//! Reads one command per line and plays the part of the page's owner:
//! user actions go to the page, the page's intents go to the store, and
//! the store's new snapshot goes back to the page.

use anyhow::{anyhow, bail, Result};
use colored::Colorize;
use roster::{FollowStore, IntentQueue, RosterIntent, RosterPage};
use std::io::BufRead;
use team_catalog::Prefecture;
use tracing::warn;

use crate::render;

const HELP: &str = "\
commands:
  prefecture <name|all>   filter by prefecture
  city [text]             filter by city substring (empty clears)
  name [text]             filter by team name substring (empty clears)
  clear                   reset all filters
  show                    print roster and suggestions
  select <id>             open a team shown on the page
  fav <id>                toggle favorite on a followed team
  unfollow <id>           stop following a team
  follow <id>             follow a suggested team
  help                    this text
  quit                    leave the session";

/// One parsed session line
#[derive(Debug, PartialEq)]
pub enum SessionCommand {
    Prefecture(Option<Prefecture>),
    City(String),
    Name(String),
    Clear,
    Show,
    Select(String),
    Favorite(String),
    Unfollow(String),
    Follow(String),
    Help,
    Quit,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Result<Self> {
        // Only the single separator after the command word is consumed;
        // city and name text is kept as typed.
        let line = line.trim_start();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        let team_id = |command: &str| -> Result<String> {
            let id = rest.trim();
            if id.is_empty() {
                bail!("usage: {} <id>", command);
            }
            Ok(id.to_string())
        };

        let command = match word {
            "prefecture" => match rest.trim() {
                "" | "all" => SessionCommand::Prefecture(None),
                name => SessionCommand::Prefecture(Some(name.parse()?)),
            },
            "city" => SessionCommand::City(rest.to_string()),
            "name" => SessionCommand::Name(rest.to_string()),
            "clear" => SessionCommand::Clear,
            "show" => SessionCommand::Show,
            "select" => SessionCommand::Select(team_id("select")?),
            "fav" => SessionCommand::Favorite(team_id("fav")?),
            "unfollow" => SessionCommand::Unfollow(team_id("unfollow")?),
            "follow" => SessionCommand::Follow(team_id("follow")?),
            "help" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            other => return Err(anyhow!("unknown command: {} (try 'help')", other)),
        };
        Ok(command)
    }
}

/// Run the session until `quit` or end of input
pub fn run(
    input: impl BufRead,
    store: &mut FollowStore,
    page: &mut RosterPage<IntentQueue>,
    json: bool,
) -> Result<()> {
    show(page, json)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match SessionCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{} {}", "error:".red(), e);
                continue;
            }
        };

        let outcome = match command {
            SessionCommand::Quit => break,
            SessionCommand::Help => {
                println!("{}", HELP);
                continue;
            }
            SessionCommand::Show => Ok(()),
            SessionCommand::Prefecture(prefecture) => {
                page.set_prefecture(prefecture);
                Ok(())
            }
            SessionCommand::City(city) => {
                page.set_city(city);
                Ok(())
            }
            SessionCommand::Name(name) => {
                page.set_name(name);
                Ok(())
            }
            SessionCommand::Clear => {
                page.clear_filters();
                Ok(())
            }
            SessionCommand::Select(id) => page.select_team(&id),
            SessionCommand::Favorite(id) => page.toggle_favorite(&id),
            SessionCommand::Unfollow(id) => page.unfollow(&id),
            SessionCommand::Follow(id) => page.follow(&id),
        };

        if let Err(e) = outcome {
            eprintln!("{} {}", "error:".red(), e);
            continue;
        }

        dispatch_intents(store, page);
        show(page, json)?;
    }

    Ok(())
}

/// Hand queued intents to the store, then refresh the page's snapshot
fn dispatch_intents(store: &mut FollowStore, page: &mut RosterPage<IntentQueue>) {
    for intent in page.events_mut().drain() {
        if let RosterIntent::SelectTeam(id) = &intent {
            if let Some(team) = store.catalog().get_team(id) {
                println!("{} {}", "→ team detail:".green(), team.name);
            }
        }
        if let Err(e) = store.apply(&intent) {
            warn!("Failed to apply intent for team {}: {}", intent.team_id(), e);
        }
    }
    page.set_followed_teams(store.followed_teams());
}

fn show(page: &RosterPage<IntentQueue>, json: bool) -> Result<()> {
    render::print_cards(&page.cards(), json)?;
    render::print_discovery_cards(&page.discovery_cards(), json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::Arc;
    use team_catalog::{FollowedEntry, Team, TeamCatalog};

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            SessionCommand::parse("prefecture 東京都").unwrap(),
            SessionCommand::Prefecture(Some(Prefecture::Tokyo))
        );
        assert_eq!(
            SessionCommand::parse("prefecture all").unwrap(),
            SessionCommand::Prefecture(None)
        );
        assert_eq!(
            SessionCommand::parse("  name Osaka United").unwrap(),
            SessionCommand::Name("Osaka United".to_string())
        );
        assert_eq!(SessionCommand::parse("city").unwrap(), SessionCommand::City(String::new()));
        assert_eq!(
            SessionCommand::parse("follow 4").unwrap(),
            SessionCommand::Follow("4".to_string())
        );
        assert_eq!(SessionCommand::parse("quit").unwrap(), SessionCommand::Quit);
    }

    #[test]
    fn test_criterion_text_kept_verbatim() {
        assert_eq!(
            SessionCommand::parse("name  fc ").unwrap(),
            SessionCommand::Name(" fc ".to_string())
        );
        assert_eq!(
            SessionCommand::parse("city 渋谷 ").unwrap(),
            SessionCommand::City("渋谷 ".to_string())
        );
        assert_eq!(
            SessionCommand::parse("unfollow  4 ").unwrap(),
            SessionCommand::Unfollow("4".to_string())
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(SessionCommand::parse("prefecture Tokyo").is_err());
        assert!(SessionCommand::parse("fav").is_err());
        assert!(SessionCommand::parse("dance").is_err());
    }

    #[test]
    fn test_session_round_trip() {
        let catalog = Arc::new(
            TeamCatalog::from_parts(
                vec![
                    Team::new("1", "Shibuya FC", Prefecture::Tokyo),
                    Team::new("2", "Osaka United", Prefecture::Osaka),
                    Team::new("3", "Hakata Stars", Prefecture::Fukuoka),
                ],
                vec![FollowedEntry::new("1", false)],
            )
            .unwrap(),
        );
        let mut store = FollowStore::new(catalog.clone());
        let mut page = RosterPage::new(
            store.followed_teams(),
            catalog.teams().to_vec(),
            None,
            IntentQueue::new(),
        );

        let input = Cursor::new("follow 3\nfav 3\nunfollow 1\nbogus\nquit\nfollow 2\n");
        run(input, &mut store, &mut page, true).unwrap();

        // everything after `quit` is ignored
        assert!(!store.is_followed("2"));
        assert!(!store.is_followed("1"));
        assert!(store.is_favorite("3"));
        let ids: Vec<&str> = page.followed_teams().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["3"]);
    }
}
