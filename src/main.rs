use clap::{Parser, Subcommand};
use log::info;
use recipe_browser::config::BrowserConfig;
use recipe_browser::debounce::ManualClock;
use recipe_browser::replay::{load_script, replay};
use recipe_browser::watch::{watch, TokioClock};
use recipe_browser::{build_controller, build_dispatcher, render_page, BrowserError, FileStore};
use std::path::PathBuf;
use tokio::io::BufReader;

#[derive(Parser, Debug)]
#[command(name = "recipe-browser", version, about = "Browse, search and favorite recipes")]
struct Cli {
    /// Configuration file (defaults to ./recipes.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page once
    Render {
        /// Search query to apply
        #[arg(short, long, default_value = "")]
        query: String,
        /// Output file (defaults to the configured output path)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Toggle a recipe in the stored favorites
    Favorite { id: u32 },
    /// List recipes with their favorite status
    List,
    /// Play a JSON event script and write the resulting page
    Replay {
        script: PathBuf,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Read search input and commands from stdin, rewriting the page as it changes
    Watch {
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), BrowserError> {
    let config = BrowserConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Render { query, out } => {
            let out = out.unwrap_or_else(|| config.output.path.clone());
            let document = render_page(&config, &query)?;
            tokio::fs::write(&out, document).await?;
            println!("Wrote {}", out.display());
        }
        Command::Favorite { id } => {
            let storage = FileStore::new(&config.storage.path);
            let mut controller = build_controller(&config, storage)?;
            let favorite = controller.toggle_favorite(id)?;
            let title = controller
                .store()
                .get(id)
                .map(|recipe| recipe.title.as_str())
                .unwrap_or_default();
            if favorite {
                println!("Added \"{}\" to favorites", title);
            } else {
                println!("Removed \"{}\" from favorites", title);
            }
        }
        Command::List => {
            let storage = FileStore::new(&config.storage.path);
            let controller = build_controller(&config, storage)?;
            for recipe in controller.store().all() {
                let marker = if controller.favorites().is_favorite(recipe.id) {
                    "*"
                } else {
                    " "
                };
                println!(
                    "{} {:>3}  {} ({} min, {})",
                    marker, recipe.id, recipe.title, recipe.time, recipe.difficulty
                );
            }
        }
        Command::Replay { script, out } => {
            let out = out.unwrap_or_else(|| config.output.path.clone());
            let events = load_script(&script)?;
            let storage = FileStore::new(&config.storage.path);
            let mut dispatcher = build_dispatcher(&config, storage, ManualClock::new())?;

            for entry in replay(&mut dispatcher, &events)? {
                println!("{:>6}ms  {:?}", entry.at.as_millis(), entry.outcome);
            }

            tokio::fs::write(&out, dispatcher.controller().page().document()).await?;
            println!("Wrote {}", out.display());
        }
        Command::Watch { out } => {
            let out = out.unwrap_or_else(|| config.output.path.clone());
            let storage = FileStore::new(&config.storage.path);
            let mut dispatcher = build_dispatcher(&config, storage, TokioClock::new())?;
            info!("Watching stdin, writing {}", out.display());

            watch(&mut dispatcher, BufReader::new(tokio::io::stdin()), &out).await?;
        }
    }

    Ok(())
}
