use super::render::format_types_text;
use super::{connect, new_spinner, to_json};
use crate::catalog::TypeFilter;
use crate::config::Config;
use crate::prelude::{println, *};

#[derive(Debug, clap::Args, Clone)]
pub struct TypesOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: TypesOptions, config: Config) -> Result<()> {
    let api = connect(&config)?;
    let types = TypeFilter::new(api);

    let spinner = new_spinner("Loading types...")?;
    types.load().await;
    spinner.finish_and_clear();

    let state = types.snapshot().await;
    if options.json {
        println!("{}", to_json(&state)?);
    } else {
        print!("{}", format_types_text(&state));
    }

    Ok(())
}
