//! Quotidian CLI — random quotations in the terminal

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use quotidian::config::api::DEFAULT_LANGUAGE;
use quotidian::{FavoritesStore, FetchCooldown, Quote, QuoteProvider, Quotes15Provider, Result};

#[derive(Parser)]
#[command(name = "quotidian", about = "Random quotation client", version)]
struct Cli {
    /// RapidAPI key (falls back to the RAPIDAPI_KEY environment variable)
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and print one random quote
    Random {
        /// Language code (en, cs, de, ...)
        #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
        language: String,
        /// Also save the quote to the favorites
        #[arg(long)]
        favorite: bool,
    },
    /// List the supported languages
    Languages,
    /// Manage saved favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Quote browser: [n]ext, [f]avorite, [l]ist, [q]uit
    Interactive {
        /// Language code (en, cs, de, ...)
        #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
        language: String,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// Print all saved favorites
    List,
    /// Remove one favorite by id
    Remove { id: String },
    /// Check whether an id is saved
    Check { id: String },
    /// Remove every favorite
    Clear,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let api_key = cli.api_key.or_else(|| std::env::var("RAPIDAPI_KEY").ok());
    if api_key.is_none() {
        eprintln!("Note: RAPIDAPI_KEY is not set; quote fetching is disabled.");
    }

    match cli.command {
        Command::Random { language, favorite } => {
            let provider = Quotes15Provider::new(api_key)?;
            let quote = provider.fetch_random(&language)?;
            print_quote(&quote);
            if favorite {
                let store = FavoritesStore::open()?;
                store.add(quote);
                store.flush();
            }
            Ok(())
        }
        Command::Languages => {
            let provider = Quotes15Provider::new(api_key)?;
            for language in provider.available_languages() {
                println!("{:4} {}", language.code, language.name);
            }
            Ok(())
        }
        Command::Favorites { action } => favorites_command(action),
        Command::Interactive { language } => interactive(api_key, &language),
    }
}

fn favorites_command(action: FavoritesAction) -> Result<()> {
    let store = FavoritesStore::open()?;
    if store.degraded() {
        eprintln!("Warning: favorites file could not be read; showing an empty list.");
    }

    match action {
        FavoritesAction::List => {
            let favorites = store.favorites();
            if favorites.is_empty() {
                println!("No favorites saved yet.");
            }
            for quote in favorites {
                print_quote(&quote);
            }
        }
        FavoritesAction::Remove { id } => {
            store.remove(id);
            store.flush();
        }
        FavoritesAction::Check { id } => {
            println!("{}", if store.is_favorite(id) { "yes" } else { "no" });
        }
        FavoritesAction::Clear => {
            store.clear();
            store.flush();
        }
    }
    Ok(())
}

fn interactive(api_key: Option<String>, language: &str) -> Result<()> {
    let provider = Quotes15Provider::new(api_key)?;
    let store = FavoritesStore::open()?;
    let mut cooldown = FetchCooldown::standard();

    println!("Commands: [n]ext quote, [f]avorite toggle, [l]ist favorites, [q]uit");

    let mut current: Option<Quote> = None;
    fetch_next(&provider, language, &mut cooldown, &mut current);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "n" => fetch_next(&provider, language, &mut cooldown, &mut current),
            "f" => match current.clone() {
                Some(quote) => {
                    let saved = store.toggle(quote);
                    println!(
                        "{}",
                        if saved {
                            "Saved to favorites."
                        } else {
                            "Removed from favorites."
                        }
                    );
                }
                None => println!("No quote to save."),
            },
            "l" => {
                let favorites = store.favorites();
                if favorites.is_empty() {
                    println!("No favorites saved yet.");
                }
                for quote in favorites {
                    print_quote(&quote);
                }
            }
            "q" => break,
            "" => {}
            other => println!("Unknown command '{other}'."),
        }
    }

    store.flush();
    Ok(())
}

fn fetch_next(
    provider: &Quotes15Provider,
    language: &str,
    cooldown: &mut FetchCooldown,
    current: &mut Option<Quote>,
) {
    if !cooldown.try_trigger() {
        println!(
            "Hold on, cooling down for another {} ms.",
            cooldown.remaining().as_millis()
        );
        return;
    }

    match provider.fetch_random(language) {
        Ok(quote) => {
            print_quote(&quote);
            *current = Some(quote);
        }
        Err(e) => eprintln!("Error: {e}"),
    }
}

fn print_quote(quote: &Quote) {
    println!("\"{}\"", quote.content);
    println!("   - {}  [{}]", quote.author, quote.id);
    if let Some(url) = quote.author_wiki_url() {
        println!("     {url}");
    }
}
