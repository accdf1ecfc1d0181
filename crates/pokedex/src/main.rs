use crate::prelude::*;
use clap::Parser;
use pokedex_core::urls::DEFAULT_API_BASE;

mod catalog;
mod client;
mod config;
mod dex;
mod error;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse the Pokémon catalog served by PokéAPI"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// PokéAPI root URL
    #[clap(long, env = "POKEDEX_API_BASE", global = true, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Request timeout in seconds (no timeout when unset)
    #[clap(long, env = "POKEDEX_TIMEOUT_SECS", global = true)]
    timeout: Option<u64>,

    /// Whether to display additional information.
    #[clap(long, env = "POKEDEX_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// List one page of the catalog
    List(crate::dex::list::ListOptions),

    /// Show one entry with species details and its evolution chain
    Show(crate::dex::show::ShowOptions),

    /// Search entries by name and/or type
    Search(crate::dex::search::SearchOptions),

    /// List the types available as search filters
    Types(crate::dex::types::TypesOptions),

    /// Interactive session over the catalog
    Browse(crate::dex::browse::BrowseOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();
    let config = config::Config::from_global(&app.global)?;

    match app.command {
        SubCommands::List(options) => crate::dex::list::run(options, config).await,
        SubCommands::Show(options) => crate::dex::show::run(options, config).await,
        SubCommands::Search(options) => crate::dex::search::run(options, config).await,
        SubCommands::Types(options) => crate::dex::types::run(options, config).await,
        SubCommands::Browse(options) => crate::dex::browse::run(options, config).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
