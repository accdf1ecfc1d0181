use super::render::format_detail_text;
use super::{connect, new_spinner, to_json};
use crate::catalog::DetailController;
use crate::config::Config;
use crate::prelude::{println, *};
use pokedex_core::urls::IdOrName;

#[derive(Debug, clap::Args, Clone)]
pub struct ShowOptions {
    /// Dex number or name, e.g. `25` or `pikachu`
    #[arg(value_name = "ID_OR_NAME")]
    pub target: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ShowOptions, config: Config) -> Result<()> {
    let target = parse_target(&options.target)?;

    let api = connect(&config)?;
    let detail = DetailController::new(api);

    let spinner = new_spinner(&format!("Loading {target}..."))?;
    detail.select(Some(target)).await;
    spinner.finish_and_clear();

    let state = detail.snapshot().await;
    if options.json {
        println!("{}", to_json(&state)?);
    } else {
        print!("{}", format_detail_text(&state));
    }

    Ok(())
}

pub fn parse_target(input: &str) -> Result<IdOrName> {
    IdOrName::parse(input).ok_or_eyre("Expected a dex number or a name")
}
