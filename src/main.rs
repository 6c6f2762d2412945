//! alias-menu binary entry point.
//!
//! Builds an alias menu from command-line entries, applies deletions,
//! sorts it with the configured mode and prints the listing.
//!
use std::path::PathBuf;
use std::rc::Rc;

use alias_menu::config::{DEFAULT_CONFIG_FILE, MenuConfig};
use alias_menu::search::matching_positions;
use alias_menu::{Address, Alias, AliasMenuData, AliasView, SortMode};
use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "alias-menu", version, about = "List address-book aliases as a sorted menu")]
struct Cli {
    /// Config file holding `sort_alias`; created with defaults if missing.
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Sort mode, overriding the config file (e.g. `alias`, `reverse-address`).
    #[arg(short, long, env = "ALIAS_MENU_SORT")]
    sort: Option<SortMode>,

    /// Alias entry as `NAME:MAILBOX[:PERSONAL]`.
    #[arg(short, long = "entry", value_name = "ENTRY")]
    entries: Vec<String>,

    /// Remove the first listed alias with this name; repeat to remove more.
    #[arg(short, long = "delete", value_name = "NAME")]
    deletes: Vec<String>,

    /// Only show aliases matching this text.
    #[arg(short, long)]
    query: Option<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Split an `NAME:MAILBOX[:PERSONAL]` argument. No address parsing is done.
fn parse_entry(raw: &str) -> Result<Alias> {
    let mut parts = raw.splitn(3, ':');
    let name = parts.next().map(str::trim).unwrap_or("");
    if name.is_empty() {
        bail!("entry {raw:?} has no alias name");
    }
    let mut alias = Alias::new(name);
    let mailbox = parts.next().map(str::trim).filter(|s| !s.is_empty());
    let personal = parts.next().map(str::trim).filter(|s| !s.is_empty());
    if mailbox.is_some() || personal.is_some() {
        alias = alias.address(Address {
            personal: personal.map(String::from),
            mailbox: mailbox.map(String::from),
        });
    }
    Ok(alias)
}

fn render_line(view: &AliasView) -> String {
    let marker = if view.is_deleted {
        'D'
    } else if view.is_tagged {
        '*'
    } else {
        ' '
    };
    format!(
        "{:>4} {}{:<20} {}",
        view.num + 1,
        marker,
        view.alias.name,
        view.alias.address_line()
    )
}

/// Remove the first alias named `name` that is still in the menu.
///
/// Returns whether anything was removed.
fn delete_by_name(menu: &mut AliasMenuData, provider: &[Rc<Alias>], name: &str) -> bool {
    match provider
        .iter()
        .find(|a| a.name == name && menu.position_of(a).is_some())
    {
        Some(alias) => {
            menu.delete(alias);
            true
        }
        None => {
            debug!(name = %name, "no alias to delete");
            false
        }
    }
}

/// Program entry point: build, sort and print the alias menu.
fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = MenuConfig::load_or_init(&cli.config);
    let mode = cli.sort.unwrap_or(config.sort_alias);
    info!(%mode, config = %cli.config.display(), "using sort mode");

    // The provider owns the aliases; the menu only shares them.
    let provider: Vec<Rc<Alias>> = cli
        .entries
        .iter()
        .map(|raw| parse_entry(raw).map(Rc::new))
        .collect::<Result<_>>()
        .context("reading --entry arguments")?;

    let mut menu = AliasMenuData::with_capacity(provider.len());
    for alias in &provider {
        menu.add(Rc::clone(alias));
    }

    for name in &cli.deletes {
        delete_by_name(&mut menu, &provider, name);
    }

    menu.sort(mode);

    let visible = matching_positions(&menu, cli.query.as_deref().unwrap_or(""));
    for pos in visible {
        if let Some(view) = menu.get(pos) {
            println!("{}", render_line(view));
        }
    }
    Ok(())
}
