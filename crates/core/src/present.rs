use crate::types::{Pokemon, PokemonSpecies};

/// Highest possible base stat, the denominator for stat bars
pub const MAX_BASE_STAT: u32 = 255;

/// `#025` style dex number
pub fn format_dex_number(id: u32) -> String {
    format!("#{id:03}")
}

/// Official artwork when present, otherwise the default front sprite
pub fn preferred_artwork(pokemon: &Pokemon) -> Option<&str> {
    pokemon
        .sprites
        .other
        .as_ref()
        .and_then(|o| o.official_artwork.as_ref())
        .and_then(|a| a.front_default.as_deref())
        .or(pokemon.sprites.front_default.as_deref())
}

/// First English flavor text with form feeds flattened to spaces
pub fn english_flavor_text(species: &PokemonSpecies) -> Option<String> {
    species
        .flavor_text_entries
        .iter()
        .find(|entry| entry.language.name == "en")
        .map(|entry| entry.flavor_text.replace('\u{c}', " "))
}

/// English genus, e.g. "Mouse Pokémon"
pub fn english_genus(species: &PokemonSpecies) -> Option<&str> {
    species
        .genera
        .iter()
        .find(|g| g.language.name == "en")
        .map(|g| g.genus.as_str())
}

/// Decimetres to `"0.4 m"`
pub fn format_height(decimetres: u32) -> String {
    format!("{:.1} m", decimetres as f64 / 10.0)
}

/// Hectograms to `"6.0 kg"`
pub fn format_weight(hectograms: u32) -> String {
    format!("{:.1} kg", hectograms as f64 / 10.0)
}

pub fn stat_label(name: &str) -> &str {
    match name {
        "hp" => "HP",
        "attack" => "Attack",
        "defense" => "Defense",
        "special-attack" => "Sp. Atk",
        "special-defense" => "Sp. Def",
        "speed" => "Speed",
        other => other,
    }
}

/// Share of [`MAX_BASE_STAT`], capped at 100
pub fn stat_percentage(base_stat: u32) -> f64 {
    (base_stat as f64 / MAX_BASE_STAT as f64 * 100.0).min(100.0)
}

pub fn ability_label(name: &str, is_hidden: bool) -> String {
    let label = name.replace('-', " ");
    if is_hidden {
        format!("{label} (hidden)")
    } else {
        label
    }
}

/// Sum of all base stats
pub fn base_stat_total(pokemon: &Pokemon) -> u32 {
    pokemon.stats.iter().map(|s| s.base_stat).sum()
}

/// How a stage is reached, e.g. "Lv. 16", "use-item: thunder-stone"
pub fn evolution_requirement(
    min_level: Option<u32>,
    trigger: Option<&str>,
    item: Option<&str>,
) -> Option<String> {
    match (min_level, trigger, item) {
        (Some(level), _, _) => Some(format!("Lv. {level}")),
        (None, Some(trigger), Some(item)) => Some(format!("{trigger}: {item}")),
        (None, Some(trigger), None) => Some(trigger.to_string()),
        (None, None, Some(item)) => Some(item.to_string()),
        (None, None, None) => None,
    }
}
