//! Terminal and JSON rendering of roster views.

use anyhow::Result;
use colored::Colorize;
use roster::{DiscoveryCard, TeamCard, EMPTY_STATE_MESSAGE};
use team_catalog::Team;

/// Print the followed roster, or the empty-state line when nothing matches
pub fn print_roster(teams: &[&Team], json: bool) -> Result<()> {
    let cards: Vec<TeamCard> = teams.iter().map(|team| TeamCard::from(*team)).collect();
    print_cards(&cards, json)
}

pub fn print_cards(cards: &[TeamCard], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(cards)?);
        return Ok(());
    }

    println!("{}", "フォロー中のチーム一覧".bold().blue());
    if cards.is_empty() {
        println!("  {}", EMPTY_STATE_MESSAGE.dimmed());
        return Ok(());
    }
    for card in cards {
        let star = if card.is_favorite {
            "★".yellow()
        } else {
            "☆".normal()
        };
        println!(
            "{} {} {} {}",
            star,
            card.name.cyan().bold(),
            format!("[{}]", card.team_id).dimmed(),
            card.location
        );
        println!(
            "    L: {} | R: {} | 空き: {} | {}",
            card.level, card.rating, card.available_slots, card.favorite_label
        );
    }
    Ok(())
}

/// Print the discovery strip
pub fn print_discovery(teams: &[&Team], json: bool) -> Result<()> {
    let cards: Vec<DiscoveryCard> = teams.iter().map(|team| DiscoveryCard::from(*team)).collect();
    print_discovery_cards(&cards, json)
}

pub fn print_discovery_cards(cards: &[DiscoveryCard], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(cards)?);
        return Ok(());
    }

    println!("{}", "新しいチームを探す".bold().blue());
    for card in cards {
        println!(
            "{} {} {} {}",
            "+".green(),
            card.name.cyan(),
            format!("[{}]", card.team_id).dimmed(),
            card.prefecture
        );
    }
    Ok(())
}
