//! Terminal rendering of controller snapshots

use crate::catalog::{DetailState, ListState, SearchState, TypeFilterState};
use crate::prelude::new_table;
use colored::Colorize;
use pokedex_core::pagination::{visible_pages, PageMarker};
use pokedex_core::present::{
    ability_label, base_stat_total, english_flavor_text, english_genus, evolution_requirement,
    format_dex_number, format_height, format_weight, preferred_artwork, stat_label,
    stat_percentage,
};
use pokedex_core::state::Phase;
use pokedex_core::types::{EvolutionStage, Pokemon};

const RULE_WIDTH: usize = 80;
const STAT_BAR_WIDTH: usize = 30;

fn banner(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "\n{}\n{}\n{}\n",
        rule.bright_cyan(),
        title.bright_cyan().bold(),
        rule.bright_cyan()
    )
}

fn section(title: &str) -> String {
    format!("\n{}\n", title.bright_yellow().bold())
}

pub fn format_error(message: &str) -> String {
    format!("{} {}\n", "Error:".red().bold(), message.red())
}

fn format_loading(what: &str) -> String {
    format!("{}\n", format!("Loading {what}...").bright_black())
}

/// `grass/poison`
pub fn type_list(pokemon: &Pokemon) -> String {
    pokemon.type_names().join("/")
}

/// Dex number, name, types, height and weight, one row per entry
pub fn format_pokemon_table(pokemon: &[Pokemon]) -> String {
    let mut table = new_table();
    table.add_row(prettytable::row![
        "No.".bold().cyan(),
        "Name".bold().cyan(),
        "Types".bold().cyan(),
        "Height".bold().cyan(),
        "Weight".bold().cyan()
    ]);

    for p in pokemon {
        table.add_row(prettytable::row![
            format_dex_number(p.id).bright_black().to_string(),
            p.name.bright_white().bold().to_string(),
            type_list(p).green().to_string(),
            format_height(p.height),
            format_weight(p.weight)
        ]);
    }

    table.to_string()
}

/// `1 … 4 [5] 6 … 66`
pub fn format_pagination_bar(current: u64, total: u64) -> String {
    visible_pages(current, total)
        .into_iter()
        .map(|marker| match marker {
            PageMarker::Page(page) if page == current => format!("[{page}]"),
            PageMarker::Page(page) => page.to_string(),
            PageMarker::Gap => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_list_text(state: &ListState) -> String {
    let info = state.page_info();
    let mut result = banner(&format!(
        "POKÉDEX (Page {} of {})",
        info.current_page, info.total_pages
    ));

    match state.phase {
        Phase::Idle => return result,
        Phase::Loading => {
            result.push_str(&format_loading("page"));
            return result;
        }
        Phase::Failed => {
            result.push_str(&format_error(state.error.as_deref().unwrap_or("unknown error")));
            return result;
        }
        Phase::Ready => {}
    }

    if state.pokemon.is_empty() {
        result.push_str(&format!("\n{}\n", "No entries on this page.".yellow()));
    } else {
        result.push('\n');
        result.push_str(&format_pokemon_table(&state.pokemon));
    }

    result.push_str(&section("NAVIGATION"));
    result.push_str(&format!(
        "{} {} ({} {})\n",
        "Pages:".bright_white(),
        format_pagination_bar(info.current_page, info.total_pages).bright_cyan(),
        info.total_count.to_string().bright_cyan().bold(),
        "total entries".bright_white()
    ));
    if let Some(next) = &info.next_page_command {
        result.push_str(&format!("  {}: {}\n", "Next page".green(), next.cyan()));
    }
    if let Some(prev) = &info.prev_page_command {
        result.push_str(&format!("  {}: {}\n", "Previous page".green(), prev.cyan()));
    }
    if let Some(first) = state.pokemon.first() {
        result.push_str(&format!(
            "  {}: {}\n",
            "Details".green(),
            format!("pokedex show {}", first.name).cyan()
        ));
    }

    result
}

/// Fixed-width bar scaled against the highest possible base stat
pub fn format_stat_bar(base_stat: u32) -> String {
    let filled = ((stat_percentage(base_stat) / 100.0) * STAT_BAR_WIDTH as f64).round() as usize;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(STAT_BAR_WIDTH - filled)
    )
}

pub fn format_detail_text(state: &DetailState) -> String {
    let target = state
        .target
        .as_ref()
        .map(|t| t.to_string())
        .unwrap_or_default();

    match state.phase {
        Phase::Idle => return String::new(),
        Phase::Loading => return format_loading(&target),
        Phase::Failed => {
            return format_error(&format!(
                "{target}: {}",
                state.error.as_deref().unwrap_or("unknown error")
            ))
        }
        Phase::Ready => {}
    }

    let Some(pokemon) = &state.pokemon else {
        return String::new();
    };

    let mut title = format!(
        "{} {}",
        format_dex_number(pokemon.id),
        pokemon.name.to_uppercase()
    );
    if let Some(genus) = state.species.as_ref().and_then(english_genus) {
        title.push_str(&format!("  {genus}"));
    }
    let mut result = banner(&title);

    result.push_str(&format!(
        "{}: {}\n",
        "Types".green(),
        type_list(pokemon).bright_white()
    ));
    result.push_str(&format!(
        "{}: {} | {}: {}\n",
        "Height".green(),
        format_height(pokemon.height),
        "Weight".green(),
        format_weight(pokemon.weight)
    ));

    let abilities: Vec<String> = pokemon
        .abilities
        .iter()
        .map(|a| ability_label(&a.ability.name, a.is_hidden))
        .collect();
    result.push_str(&format!(
        "{}: {}\n",
        "Abilities".green(),
        abilities.join(", ")
    ));

    if let Some(artwork) = preferred_artwork(pokemon) {
        result.push_str(&format!(
            "{}: {}\n",
            "Artwork".green(),
            artwork.cyan().underline()
        ));
    }

    if let Some(flavor) = state.species.as_ref().and_then(english_flavor_text) {
        result.push_str(&format!("\n{}\n", flavor.italic()));
    }

    result.push_str(&section("BASE STATS"));
    for stat in &pokemon.stats {
        result.push_str(&format!(
            "  {:<8} {:>3}  {}\n",
            stat_label(&stat.stat.name),
            stat.base_stat,
            format_stat_bar(stat.base_stat).green()
        ));
    }
    result.push_str(&format!(
        "  {:<8} {:>3}\n",
        "Total",
        base_stat_total(pokemon)
    ));

    if !state.evolution.is_empty() {
        result.push_str(&section("EVOLUTION"));
        for (index, stage) in state.evolution.iter().enumerate() {
            result.push_str(&format_stage_line(index, stage, Some(pokemon.id)));
        }
    }

    result
}

/// A chain looked up on its own, outside any open entry
pub fn format_chain_text(chain_id: u32, stages: &[EvolutionStage]) -> String {
    let mut result = banner(&format!("EVOLUTION CHAIN {chain_id}"));
    result.push('\n');
    for (index, stage) in stages.iter().enumerate() {
        result.push_str(&format_stage_line(index, stage, None));
    }
    result
}

/// `▸` marks the stage whose id is `current`
fn format_stage_line(index: usize, stage: &EvolutionStage, current: Option<u32>) -> String {
    let marker = if Some(stage.id) == current { "▸" } else { " " };
    let mut line = format!(
        "  {marker} [{index}] {} {}",
        format_dex_number(stage.id),
        stage.name.bright_white()
    );
    if let Some(requirement) = evolution_requirement(
        stage.min_level,
        stage.trigger.as_deref(),
        stage.item.as_deref(),
    ) {
        line.push_str(&format!(" ({})", requirement.bright_black()));
    }
    if let Some(sprite) = &stage.sprite {
        line.push_str(&format!("  {}", sprite.cyan().underline()));
    }
    line.push('\n');
    line
}

pub fn format_search_text(state: &SearchState) -> String {
    if !state.searching {
        return String::new();
    }

    let mut filters = Vec::new();
    if !state.query.is_empty() {
        filters.push(format!("\"{}\"", state.query));
    }
    if let Some(type_name) = &state.type_name {
        filters.push(format!("type {type_name}"));
    }
    let mut result = banner(&format!("SEARCH {}", filters.join(" + ")));

    match state.phase {
        Phase::Idle | Phase::Loading => result.push_str(&format_loading("results")),
        Phase::Failed => {
            result.push_str(&format_error(state.error.as_deref().unwrap_or("unknown error")))
        }
        Phase::Ready if state.results.is_empty() => {
            result.push_str(&format!("\n{}\n", "No matches.".yellow()));
        }
        Phase::Ready => {
            result.push_str(&format!(
                "\n{} {}\n\n",
                state.results.len().to_string().bright_cyan().bold(),
                "matches".bright_white()
            ));
            result.push_str(&format_pokemon_table(&state.results));
        }
    }

    result
}

pub fn format_types_text(state: &TypeFilterState) -> String {
    match state.phase {
        Phase::Idle => String::new(),
        Phase::Loading => format_loading("types"),
        Phase::Failed => format_error(state.error.as_deref().unwrap_or("unknown error")),
        Phase::Ready => {
            let mut result = banner("TYPES");
            for name in &state.names {
                result.push_str(&format!("  {}\n", name.green()));
            }
            result.push_str(&format!(
                "\n{}: {}\n",
                "Filter by type".bright_white(),
                "pokedex search --type <type>".cyan()
            ));
            result
        }
    }
}
