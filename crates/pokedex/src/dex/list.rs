use super::render::format_list_text;
use super::{connect, new_spinner, to_json};
use crate::catalog::{ListController, ListState};
use crate::config::{self, Config};
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use pokedex_core::pagination::{checked_page_offset, PageInfo, DEFAULT_PAGE_SIZE};
use pokedex_core::types::Pokemon;
use serde::Serialize;

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: u64,

    /// Number of entries per page
    #[arg(short, long, env = "POKEDEX_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub limit: u64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON shape of one catalog page
#[derive(Debug, Serialize)]
pub struct ListOutput<'a> {
    pub pokemon: &'a [Pokemon],
    pub pagination: PageInfo,
    pub error: Option<&'a str>,
}

pub async fn run(options: ListOptions, config: Config) -> Result<()> {
    let page_size = config::page_size(options.limit)?;
    check_page(options.page, page_size)?;

    let api = connect(&config)?;
    let list = ListController::starting_at(api, page_size, options.page);

    let spinner = new_spinner(&format!("Loading page {}...", options.page))?;
    list.load().await;
    spinner.finish_and_clear();

    let state = list.snapshot().await;
    if options.json {
        println!("{}", format_list_json(&state)?);
    } else {
        print!("{}", format_list_text(&state));
        if state.current_page > state.total_pages() && state.total_count > 0 {
            eprintln!(
                "{}",
                format!(
                    "Page {} is past the end of the catalog ({} pages)",
                    state.current_page,
                    state.total_pages()
                )
                .yellow()
            );
        }
    }

    Ok(())
}

/// Reject pages that start before the catalog or past an addressable offset
fn check_page(page: u64, page_size: u64) -> Result<()> {
    if page == 0 {
        return Err(eyre!("Page numbers start at 1"));
    }
    if checked_page_offset(page, page_size).is_none() {
        return Err(eyre!("Page {page} is out of range for {page_size} entries per page"));
    }
    Ok(())
}

fn format_list_json(state: &ListState) -> Result<String> {
    to_json(&ListOutput {
        pokemon: &state.pokemon,
        pagination: state.page_info(),
        error: state.error.as_deref(),
    })
}
