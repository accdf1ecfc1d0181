use super::render::format_search_text;
use super::{connect, new_spinner, to_json};
use crate::catalog::{SearchController, TypeFilter};
use crate::config::Config;
use crate::prelude::{println, *};
use pokedex_core::state::Phase;

#[derive(Debug, clap::Args, Clone)]
pub struct SearchOptions {
    /// Case-insensitive name fragment
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Only entries of this type
    #[arg(short, long = "type", value_name = "TYPE")]
    pub type_name: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: SearchOptions, config: Config) -> Result<()> {
    let type_name = options
        .type_name
        .as_deref()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty());
    if options.query.trim().is_empty() && type_name.is_none() {
        return Err(eyre!("Provide a name QUERY, a --type, or both"));
    }

    let api = connect(&config)?;

    if let Some(type_name) = &type_name {
        let types = TypeFilter::new(api.clone());
        types.load().await;
        // skip validation when the type list itself failed to load
        let state = types.snapshot().await;
        if state.phase == Phase::Ready && !types.contains(type_name).await {
            return Err(eyre!(
                "Unknown type: {}. Valid types: {}",
                type_name,
                state.names.join(", ")
            ));
        }
    }

    let search = SearchController::new(api);

    let spinner = new_spinner("Searching...")?;
    search.search(&options.query, type_name.as_deref()).await;
    spinner.finish_and_clear();

    let state = search.snapshot().await;
    if options.json {
        println!("{}", to_json(&state)?);
    } else {
        print!("{}", format_search_text(&state));
    }

    Ok(())
}
