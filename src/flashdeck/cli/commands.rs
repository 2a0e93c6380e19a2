//! # CLI Layer
//!
//! This module is **one possible UI client** for flashdeck. It is the only
//! place that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Handles argument parsing
//! - Installs the logger
//! - Formats output for human consumption
//!
//! Handlers call one `FlashApi` method each and render the returned
//! `CmdResult`. Business rules live in the library.

use super::render::{
    print_messages, render_card_list, render_card_stats, render_config, render_deck_header,
    render_deck_list, render_stats, render_summary,
};
use super::setup::{Cli, Commands};
use super::study::run_session;
use clap::Parser;
use directories::ProjectDirs;
use flashdeck::api::{CardUpdate, ConfigAction, DeckUpdate, FlashApi, FlashPaths};
use flashdeck::error::{FlashError, Result};
use flashdeck::store::FsBackend;
use log::LevelFilter;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const DATA_DIR_ENV: &str = "FLASHDECK_DATA_DIR";

struct AppContext {
    api: FlashApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None => handle_list(&mut ctx, None),
        Some(cmd) => match cmd {
            Commands::List { filter } => handle_list(&mut ctx, filter),
            Commands::New { name, description } => handle_new(&mut ctx, name, description),
            Commands::Show { deck } => handle_show(&mut ctx, deck),
            Commands::Edit {
                deck,
                name,
                description,
            } => handle_edit(&mut ctx, deck, name, description),
            Commands::Delete { deck, yes } => handle_delete(&mut ctx, deck, yes),
            Commands::Add { deck, front, back } => handle_add(&mut ctx, deck, front, back),
            Commands::Cards { deck } => handle_cards(&mut ctx, deck),
            Commands::EditCard {
                deck,
                card,
                front,
                back,
            } => handle_edit_card(&mut ctx, deck, card, front, back),
            Commands::DeleteCard { deck, card, yes } => {
                handle_delete_card(&mut ctx, deck, card, yes)
            }
            Commands::Attach {
                deck,
                card,
                media_type,
                path,
            } => handle_attach(&mut ctx, deck, card, media_type, path),
            Commands::Stats { deck } => handle_stats(&mut ctx, deck),
            Commands::Study { deck } => handle_study(&mut ctx, deck),
            Commands::Config { key, value } => handle_config(&mut ctx, key, value),
        },
    }
}

/// Warnings by default, debug with `-v`. `RUST_LOG` overrides both.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    log::debug!("using data dir {}", data_dir.display());
    Ok(AppContext {
        api: FlashApi::<FsBackend>::open(FlashPaths::new(data_dir)),
    })
}

/// `--data-dir`, then `$FLASHDECK_DATA_DIR`, then the platform data dir.
fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "flashdeck", "flashdeck")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            FlashError::Config(format!(
                "Could not determine a data directory; pass --data-dir or set {}",
                DATA_DIR_ENV
            ))
        })
}

fn handle_list(ctx: &mut AppContext, filter: Option<String>) -> Result<()> {
    let result = ctx.api.list_decks(filter.as_deref())?;
    print!("{}", render_deck_list(&result.listed_decks));
    print_messages(&result.messages);
    Ok(())
}

fn handle_new(ctx: &mut AppContext, name: String, description: String) -> Result<()> {
    let result = ctx.api.create_deck(&name, &description)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, deck: String) -> Result<()> {
    let result = ctx.api.show_deck(&deck)?;
    if let Some(deck) = &result.deck {
        print!("{}", render_deck_header(deck));
        println!();
    }
    print!("{}", render_card_list(&result.listed_cards));
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    deck: String,
    name: Option<String>,
    description: Option<String>,
) -> Result<()> {
    if name.is_none() && description.is_none() {
        return Err(FlashError::Api(
            "Nothing to change: pass --name and/or --description".to_string(),
        ));
    }
    let update = DeckUpdate { name, description };
    let result = ctx.api.update_deck(&deck, &update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, deck: String, yes: bool) -> Result<()> {
    if !yes {
        let shown = ctx.api.show_deck(&deck)?;
        let (name, cards) = shown
            .deck
            .map(|d| (d.name, d.cards.len()))
            .unwrap_or_default();
        let question = format!("Delete deck \"{}\" and its {} cards?", name, cards);
        if !confirm(&question)? {
            println!("Cancelled.");
            return Ok(());
        }
    }
    let result = ctx.api.delete_deck(&deck)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, deck: String, front: String, back: String) -> Result<()> {
    let result = ctx.api.add_card(&deck, &front, &back)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_cards(ctx: &mut AppContext, deck: String) -> Result<()> {
    let result = ctx.api.list_cards(&deck)?;
    print!("{}", render_card_list(&result.listed_cards));
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit_card(
    ctx: &mut AppContext,
    deck: String,
    card: String,
    front: Option<String>,
    back: Option<String>,
) -> Result<()> {
    if front.is_none() && back.is_none() {
        return Err(FlashError::Api(
            "Nothing to change: pass --front and/or --back".to_string(),
        ));
    }
    let update = CardUpdate { front, back };
    let result = ctx.api.update_card(&deck, &card, &update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete_card(ctx: &mut AppContext, deck: String, card: String, yes: bool) -> Result<()> {
    if !yes && !confirm("Delete this card?")? {
        println!("Cancelled.");
        return Ok(());
    }
    let result = ctx.api.delete_card(&deck, &card)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_attach(
    ctx: &mut AppContext,
    deck: String,
    card: String,
    media_type: String,
    path: String,
) -> Result<()> {
    let result = ctx.api.attach_media(&deck, &card, &media_type, &path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &mut AppContext, deck: String) -> Result<()> {
    let result = ctx.api.deck_stats(&deck)?;
    if let Some(deck) = &result.deck {
        print!("{}", render_deck_header(deck));
        println!();
    }
    if let Some(stats) = &result.stats {
        print!("{}", render_stats(stats));
    }
    if !result.listed_cards.is_empty() {
        println!();
        print!("{}", render_card_stats(&result.listed_cards));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_study(ctx: &mut AppContext, deck: String) -> Result<()> {
    let mut session = ctx.api.start_study(&deck)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    run_session(&mut ctx.api, &mut session, &mut input, &mut out)?;

    let result = ctx.api.finish_study(&session);
    println!();
    if let Some(summary) = result.summary.as_ref().filter(|s| s.answered > 0) {
        print!("{}", render_summary(summary));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config_action(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
