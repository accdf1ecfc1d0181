//! Interactive session over stdin
//!
//! One set of controllers lives for the whole session, so everything
//! fetched once is served from the shared cache afterwards.

use super::render::{
    format_chain_text, format_detail_text, format_error, format_list_text, format_search_text,
    format_types_text,
};
use super::{connect, new_spinner};
use crate::catalog::{DetailController, ListController, SearchController, TypeFilter};
use crate::client::evolution::evolution_stages;
use crate::client::PokeApi;
use crate::config::{self, Config};
use crate::prelude::{eprintln, *};
use colored::Colorize;
use pokedex_core::pagination::DEFAULT_PAGE_SIZE;
use pokedex_core::state::Phase;
use pokedex_core::urls::IdOrName;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, clap::Args, Clone)]
pub struct BrowseOptions {
    /// Number of entries per page
    #[arg(short, long, env = "POKEDEX_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub limit: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Page(u64),
    Refresh,
    Show(IdOrName),
    Evo(usize),
    Chain(u32),
    Close,
    Search {
        query: String,
        type_name: Option<String>,
    },
    Type(String),
    Clear,
    Types,
    Help,
    Quit,
}

const HELP: &str = "\
  next | prev | page N     move through the catalog
  refresh                  reload whatever is on screen
  show ID_OR_NAME          open an entry
  evo N                    open stage N of the open entry's evolution chain
  chain ID                 show an evolution chain by its id
  close                    close the open entry
  search QUERY [TYPE]      search by name, optionally narrowed to a type
  type TYPE                list entries of one type
  clear                    leave search results
  types                    list the available types
  help | quit";

fn arg<'a>(args: &'a [String], n: usize, usage: &str) -> Result<&'a str> {
    args.get(n)
        .map(String::as_str)
        .ok_or_else(|| eyre!("Usage: {}", usage))
}

/// Parse one input line. `Ok(None)` is a blank line.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let words = shlex::split(line).ok_or_eyre("Unbalanced quotes")?;
    let Some((head, args)) = words.split_first() else {
        return Ok(None);
    };

    let command = match head.to_lowercase().as_str() {
        "next" | "n" => Command::Next,
        "prev" | "p" => Command::Prev,
        "page" => {
            let page = arg(args, 0, "page N")?;
            Command::Page(
                page.parse()
                    .map_err(|_| eyre!("Not a page number: {}", page))?,
            )
        }
        "refresh" | "r" => Command::Refresh,
        "show" => Command::Show(
            IdOrName::parse(arg(args, 0, "show ID_OR_NAME")?)
                .ok_or_eyre("Expected a dex number or a name")?,
        ),
        "evo" => {
            let index = arg(args, 0, "evo N")?;
            Command::Evo(
                index
                    .parse()
                    .map_err(|_| eyre!("Not a stage number: {}", index))?,
            )
        }
        "chain" => {
            let id = arg(args, 0, "chain ID")?;
            Command::Chain(
                id.parse()
                    .map_err(|_| eyre!("Not a chain id: {}", id))?,
            )
        }
        "close" => Command::Close,
        "search" | "s" => Command::Search {
            query: arg(args, 0, "search QUERY [TYPE]")?.to_string(),
            type_name: args.get(1).map(|t| t.to_lowercase()),
        },
        "type" | "t" => Command::Type(arg(args, 0, "type TYPE")?.to_lowercase()),
        "clear" => Command::Clear,
        "types" => Command::Types,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(eyre!("Unknown command: {} (try `help`)", other)),
    };

    Ok(Some(command))
}

pub struct Session {
    api: Arc<PokeApi>,
    list: ListController,
    detail: DetailController,
    search: SearchController,
    types: TypeFilter,
}

impl Session {
    pub fn new(api: Arc<PokeApi>, page_size: u64) -> Self {
        Self {
            list: ListController::new(api.clone(), page_size),
            detail: DetailController::new(api.clone()),
            search: SearchController::new(api.clone()),
            types: TypeFilter::new(api.clone()),
            api,
        }
    }

    /// First page and the type list, loaded together
    pub async fn start(&self) -> String {
        tokio::join!(self.list.load(), self.types.load());
        format_list_text(&self.list.snapshot().await)
    }

    /// Run one command and render the view it leaves on screen
    pub async fn execute(&self, command: Command) -> String {
        match command {
            Command::Next => {
                let accepted = self.list.next_page().await;
                self.navigate(accepted, "Already on the last page").await
            }
            Command::Prev => {
                let accepted = self.list.prev_page().await;
                self.navigate(accepted, "Already on the first page").await
            }
            Command::Page(page) => {
                let accepted = self.list.go_to_page(page).await;
                let total = self.list.snapshot().await.total_pages();
                self.navigate(accepted, &format!("Page {page} is out of range (1-{total})"))
                    .await
            }
            Command::Refresh => {
                if self.detail.snapshot().await.target.is_some() {
                    self.detail.refetch().await;
                    format_detail_text(&self.detail.snapshot().await)
                } else if self.search.snapshot().await.searching {
                    let state = self.search.snapshot().await;
                    self.search
                        .search(&state.query, state.type_name.as_deref())
                        .await;
                    format_search_text(&self.search.snapshot().await)
                } else {
                    self.list.refetch().await;
                    format_list_text(&self.list.snapshot().await)
                }
            }
            Command::Show(target) => {
                self.detail.select(Some(target)).await;
                format_detail_text(&self.detail.snapshot().await)
            }
            Command::Evo(index) => {
                if self.detail.open_stage(index).await {
                    format_detail_text(&self.detail.snapshot().await)
                } else {
                    notice(&format!("No evolution stage {index}"))
                }
            }
            Command::Chain(id) => match self.api.evolution_chain(id).await {
                Ok(chain) => {
                    let stages = evolution_stages(&self.api, &chain).await;
                    format_chain_text(chain.id, &stages)
                }
                Err(e) => format_error(&e.to_string()),
            },
            Command::Close => {
                self.detail.select(None).await;
                self.current_view().await
            }
            Command::Search { query, type_name } => {
                if let Some(type_name) = &type_name {
                    if let Some(message) = self.reject_type(type_name).await {
                        return message;
                    }
                }
                self.search.search(&query, type_name.as_deref()).await;
                format_search_text(&self.search.snapshot().await)
            }
            Command::Type(type_name) => {
                if let Some(message) = self.reject_type(&type_name).await {
                    return message;
                }
                self.search.search("", Some(&type_name)).await;
                format_search_text(&self.search.snapshot().await)
            }
            Command::Clear => {
                self.search.clear().await;
                format_list_text(&self.list.snapshot().await)
            }
            Command::Types => {
                if self.types.snapshot().await.phase != Phase::Ready {
                    self.types.load().await;
                }
                format_types_text(&self.types.snapshot().await)
            }
            Command::Help => format!("{}\n", HELP),
            Command::Quit => String::new(),
        }
    }

    async fn navigate(&self, accepted: bool, rejection: &str) -> String {
        if accepted {
            format_list_text(&self.list.snapshot().await)
        } else {
            notice(rejection)
        }
    }

    /// Search results while searching, otherwise the catalog page
    async fn current_view(&self) -> String {
        let search = self.search.snapshot().await;
        if search.searching {
            format_search_text(&search)
        } else {
            format_list_text(&self.list.snapshot().await)
        }
    }

    async fn reject_type(&self, type_name: &str) -> Option<String> {
        let types = self.types.snapshot().await;
        if types.phase == Phase::Ready && !self.types.contains(type_name).await {
            Some(format_error(&format!(
                "Unknown type: {}. Valid types: {}",
                type_name,
                types.names.join(", ")
            )))
        } else {
            None
        }
    }
}

fn notice(message: &str) -> String {
    format!("{}\n", message.yellow())
}

pub async fn run(options: BrowseOptions, config: Config) -> Result<()> {
    let page_size = config::page_size(options.limit)?;
    let api = connect(&config)?;
    let session = Session::new(api.clone(), page_size);

    let spinner = new_spinner("Loading catalog...")?;
    let first = session.start().await;
    spinner.finish_and_clear();
    print!("{first}");
    eprintln!("{}", "Type `help` for commands.".bright_black());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", "pokedex>".bright_cyan().bold());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{}", format_error(&e.to_string()).trim_end());
                continue;
            }
        };

        let spinner = new_spinner("Loading...")?;
        let output = session.execute(command).await;
        spinner.finish_and_clear();
        print!("{output}");
    }

    if config.verbose {
        eprintln!("{} responses cached this session", api.cache().len().await);
    }

    Ok(())
}
